//! Combined dashboard: investor movers on top, category tallies, then the
//! fund performance table. Mirrors the single-page layout.

use crate::cli::{funds, investors, ui};
use crate::core::history::HistoryProvider;
use crate::loader;
use crate::view::ViewState;
use anyhow::Result;

pub async fn run(provider: &dyn HistoryProvider, state: &ViewState) -> Result<()> {
    let pb = ui::new_spinner("Veriler yükleniyor...");
    // The two data kinds may load side by side; each kind is fetched once
    // per cycle.
    let (fund_records, investor_records) =
        futures::join!(loader::load_funds(provider), loader::load_investors(provider));
    pb.finish_and_clear();

    investors::print_investors(&investor_records);
    println!();
    funds::print_category_counts(&fund_records);
    println!();
    funds::print_funds(&fund_records, state);
    Ok(())
}
