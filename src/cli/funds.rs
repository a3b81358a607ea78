//! Fund performance table command.

use crate::cli::ui;
use crate::core::history::HistoryProvider;
use crate::core::model::FundRecord;
use crate::loader;
use crate::view::{CategoryFilter, ViewState, category_counts};
use anyhow::Result;
use comfy_table::Cell;

pub async fn run(provider: &dyn HistoryProvider, state: &ViewState) -> Result<()> {
    let pb = ui::new_spinner("Fon verileri yükleniyor...");
    let funds = loader::load_funds(provider).await;
    pb.finish_and_clear();

    print_funds(&funds, state);
    Ok(())
}

pub fn print_funds(funds: &[FundRecord], state: &ViewState) {
    let visible = state.apply(funds);

    let direction = if state.ascending { "Artan" } else { "Azalan" };
    println!(
        "{}  {}",
        ui::title("Fon Performansları"),
        ui::subtle(&format!("Sıralama: {} Getiri ({direction})", state.sort.label()))
    );

    if let CategoryFilter::One(category) = state.filter {
        println!("{}", ui::subtle(&format!("Kategori: {}", category.display_name())));
    }
    if !state.search.is_empty() {
        println!("{}", ui::subtle(&format!("Arama: \"{}\"", state.search)));
    }
    println!();

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Kod"),
        ui::header_cell("Fon Adı"),
        ui::header_cell("Kategori"),
        ui::header_cell("Günlük"),
        ui::header_cell("Haftalık"),
        ui::header_cell("Aylık"),
        ui::header_cell("Yıllık"),
        ui::header_cell("Toplam Değer"),
        ui::header_cell("Risk"),
    ]);

    for fund in &visible {
        table.add_row(vec![
            Cell::new(&fund.code),
            Cell::new(&fund.name),
            Cell::new(fund.category.display_name()),
            ui::percent_cell(fund.daily),
            ui::percent_cell(fund.weekly),
            ui::percent_cell(fund.monthly),
            ui::percent_cell(fund.yearly),
            Cell::new(ui::format_amount(fund.total_value)),
            ui::risk_cell(fund.risk),
        ]);
    }

    println!("{table}");
    println!("\n{} / {} fon görüntüleniyor", visible.len(), funds.len());
}

/// One line of per-category tallies, mirroring the page's filter buttons.
pub fn print_category_counts(funds: &[FundRecord]) {
    let counts = category_counts(funds);
    let summary = counts
        .iter()
        .map(|(category, count)| format!("{} {}", category.display_name(), count))
        .collect::<Vec<_>>()
        .join("  |  ");
    println!("{}", ui::subtle(&format!("Tümü {}  |  {summary}", funds.len())));
}
