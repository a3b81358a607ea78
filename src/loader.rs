//! Load cycle: fetch, normalize, and substitute the fallback dataset when
//! nothing usable comes back. A load never fails; the worst outcome is
//! sample data with a logged diagnostic.

use crate::core::history::{DateRange, HistoryProvider};
use crate::core::model::{FundRecord, InvestorRecord};
use crate::core::normalize::{normalize_funds, normalize_investors};
use crate::fallback;
use tracing::{debug, warn};

pub async fn load_funds(provider: &dyn HistoryProvider) -> Vec<FundRecord> {
    let window = DateRange::ending_today(chrono::Local::now().date_naive());
    let funds = match provider.fetch_fund_history(window).await {
        Ok(raw) => normalize_funds(&raw),
        Err(e) => {
            warn!("Fund history fetch failed: {e}");
            Vec::new()
        }
    };

    if funds.is_empty() {
        warn!("No usable fund records, falling back to sample data");
        return fallback::sample_funds();
    }
    debug!("Loaded {} fund records", funds.len());
    funds
}

pub async fn load_investors(provider: &dyn HistoryProvider) -> Vec<InvestorRecord> {
    let investors = match provider.fetch_investor_history().await {
        Ok(raw) => normalize_investors(&raw),
        Err(e) => {
            warn!("Investor history fetch failed: {e}");
            Vec::new()
        }
    };

    if investors.is_empty() {
        warn!("No usable investor records, falling back to sample data");
        return fallback::sample_investors();
    }
    debug!("Loaded {} investor records", investors.len());
    investors
}
