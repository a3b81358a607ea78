//! Top investor movers command.

use crate::cli::ui;
use crate::core::history::HistoryProvider;
use crate::core::model::InvestorRecord;
use crate::loader;
use anyhow::Result;
use comfy_table::Cell;

pub async fn run(provider: &dyn HistoryProvider) -> Result<()> {
    let pb = ui::new_spinner("Yatırımcı verileri yükleniyor...");
    let investors = loader::load_investors(provider).await;
    pb.finish_and_clear();

    print_investors(&investors);
    Ok(())
}

pub fn print_investors(investors: &[InvestorRecord]) {
    println!("{}\n", ui::title("Yatırımcı Sayısı En Çok Artan Fonlar"));

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Kod"),
        ui::header_cell("Fon Adı"),
        ui::header_cell("Mevcut Yatırımcı"),
        ui::header_cell("Önceki Dönem"),
        ui::header_cell("Değişim"),
        ui::header_cell("Değişim %"),
    ]);

    for record in investors {
        table.add_row(vec![
            Cell::new(&record.code),
            Cell::new(&record.name),
            Cell::new(ui::format_count(record.current_investors)),
            Cell::new(ui::format_count(record.previous_investors)),
            ui::change_count_cell(record.change),
            ui::percent_cell(record.change_percent),
        ]);
    }

    println!("{table}");
}
