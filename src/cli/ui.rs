//! Shared terminal styling for the dashboard tables.

use crate::core::model::Risk;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Signed percentage cell: green with a leading `+` for gains, red for
/// losses, plain for flat.
pub fn percent_cell(value: f64) -> Cell {
    let text = if value > 0.0 {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    };
    let cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if value > 0.0 {
        cell.fg(Color::Green)
    } else if value < 0.0 {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

/// Signed integer cell for investor-count changes.
pub fn change_count_cell(change: i64) -> Cell {
    let text = if change > 0 {
        format!("+{change}")
    } else {
        format!("{change}")
    };
    let cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if change >= 0 {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Red)
    }
}

/// Risk tier cell with the dashboard's red/yellow/green tinting.
pub fn risk_cell(risk: Risk) -> Cell {
    let color = match risk {
        Risk::Yuksek => Color::Red,
        Risk::Orta => Color::Yellow,
        Risk::Dusuk => Color::Green,
    };
    Cell::new(risk.to_string()).fg(color)
}

/// Formats a TRY amount with dot-separated thousands, e.g.
/// `2456789123` → `₺2.456.789.123`.
pub fn format_amount(value: f64) -> String {
    let whole = value.trunc() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-₺{grouped}")
    } else {
        format!("₺{grouped}")
    }
}

/// Investor counts use the same dot-separated grouping, without the
/// currency sign.
pub fn format_count(value: u64) -> String {
    format_amount(value as f64)
        .trim_start_matches('₺')
        .to_string()
}

/// Section title for the terminal dashboard.
pub fn title(text: &str) -> String {
    style(text).bold().underlined().to_string()
}

pub fn subtle(text: &str) -> String {
    style(text).dim().to_string()
}

/// Spinner shown while a fetch is in flight.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
