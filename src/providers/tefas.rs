//! TEFAS history endpoint client.
//!
//! One POST per call against `/api/DB/BindHistoryInfo` with a fixed form
//! field set; only the date window varies. The response body is returned as
//! raw text without validation: whether the bytes are JSON rows or an HTML
//! table is for the normalizer to decide.

use crate::core::history::{DateRange, FetchError, HistoryProvider};
use crate::providers::util::with_retry;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://www.tefas.gov.tr";

const HISTORY_PATH: &str = "/api/DB/BindHistoryInfo";
const RETRY_DELAY_MS: u64 = 500;

// The endpoint rejects obviously non-browser clients.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.6 Safari/605.1.15";

pub struct TefasProvider {
    base_url: String,
    timeout: Duration,
    retries: usize,
}

impl TefasProvider {
    pub fn new(base_url: &str, timeout: Duration, retries: usize) -> Self {
        TefasProvider {
            base_url: base_url.to_string(),
            timeout,
            retries,
        }
    }

    async fn post_history(&self, window: DateRange) -> Result<String, FetchError> {
        let url = format!("{}{}", self.base_url, HISTORY_PATH);
        debug!(
            "Requesting history from {} for window {} - {}",
            url,
            window.start_param(),
            window.end_param()
        );

        // Fund-type filter is pinned to YAT; the remaining filters stay open.
        let form = [
            ("fontip", "YAT".to_string()),
            ("sfontur", String::new()),
            ("fonkod", String::new()),
            ("fongrup", String::new()),
            ("bastarih", window.start_param()),
            ("bittarih", window.end_param()),
            ("fonturkod", String::new()),
            ("fonunvantip", String::new()),
            ("kurucukod", String::new()),
        ];

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()?;

        let response = with_retry(
            || async { client.post(&url).form(&form).send().await },
            self.retries,
            RETRY_DELAY_MS,
        )
        .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        debug!("Received {} bytes of history payload", body.len());
        Ok(body)
    }
}

#[async_trait]
impl HistoryProvider for TefasProvider {
    async fn fetch_fund_history(&self, window: DateRange) -> Result<String, FetchError> {
        self.post_history(window).await
    }

    async fn fetch_investor_history(&self) -> Result<String, FetchError> {
        let today = chrono::Local::now().date_naive();
        self.post_history(DateRange::ending_today(today)).await
    }
}
