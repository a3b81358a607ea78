//! Payload normalization for the TEFAS history endpoint.
//!
//! The endpoint answers with either JSON rows (field names vary between
//! upper-case and camel-case spellings across deployments) or an HTML
//! document holding one data table. Both shapes are reconciled here into
//! typed records. Normalization never fails: a malformed row is skipped, an
//! unusable payload degrades to an empty list and the caller substitutes the
//! fallback dataset.

use crate::core::category::map_category;
use crate::core::model::{FundRecord, InvestorRecord, Risk};
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::{debug, warn};

const FUND_CODE_ALIASES: &[&str] = &["FONKOD", "fonKod"];
const FUND_NAME_ALIASES: &[&str] = &["FONUNVAN", "fonUnvan"];
const FUND_CATEGORY_ALIASES: &[&str] = &["FONTUR", "fonTur"];
const FUND_DAILY_ALIASES: &[&str] = &["GUNLUK", "gunluk"];
const FUND_WEEKLY_ALIASES: &[&str] = &["HAFTALIK", "haftalik"];
const FUND_MONTHLY_ALIASES: &[&str] = &["AYLIK", "aylik"];
const FUND_YEARLY_ALIASES: &[&str] = &["YILLIK", "yillik"];
const FUND_TOTAL_ALIASES: &[&str] = &["TOPLAM", "toplam"];
const FUND_RISK_ALIASES: &[&str] = &["RISK", "risk"];

const INVESTOR_CODE_ALIASES: &[&str] = &["FONKOD", "fonKod", "KOD", "kod"];
const INVESTOR_NAME_ALIASES: &[&str] = &["FONUNVAN", "fonUnvan", "UNVAN", "unvan"];
const INVESTOR_CURRENT_ALIASES: &[&str] = &[
    "YATIRIMCI_SAYISI",
    "yatirimciSayisi",
    "YATIRIMCI",
    "yatirimci",
    "MEV_YATIRIMCI",
    "mevYatirimci",
    "SAYI",
    "sayi",
];
const INVESTOR_PREVIOUS_ALIASES: &[&str] = &[
    "ONCEKI_YATIRIMCI",
    "oncekiYatirimci",
    "ONCEKI_SAYI",
    "oncekiSayi",
    "ONCEKI_YATIRIMCI_SAYISI",
    "oncekiYatirimciSayisi",
];

/// Normalizes a raw fund performance payload into display records.
pub fn normalize_funds(raw: &str) -> Vec<FundRecord> {
    if let Some(rows) = probe_rows(raw) {
        debug!("Fund payload parsed as JSON with {} rows", rows.len());
        return rows.iter().filter_map(fund_from_json).collect();
    }
    funds_from_table(raw)
}

/// Normalizes a raw investor-count payload into the top ten movers,
/// sorted by descending change.
pub fn normalize_investors(raw: &str) -> Vec<InvestorRecord> {
    if raw.trim().is_empty() {
        warn!("Investor payload is empty, nothing to normalize");
        return Vec::new();
    }

    let mut investors = match probe_rows(raw) {
        Some(rows) => {
            debug!("Investor payload parsed as JSON with {} rows", rows.len());
            rows.iter().map(investor_from_json).collect()
        }
        None => investors_from_table(raw),
    };

    investors.retain(|r| r.current_investors > 0 && !r.code.is_empty() && !r.name.is_empty());
    investors.sort_by(|a, b| b.change.cmp(&a.change));
    investors.truncate(10);
    investors
}

/// Probes a payload for structured rows without leaning on error paths for
/// control flow. Accepts a top-level array, or an object wrapping one (the
/// first array-valued member is used).
fn probe_rows(raw: &str) -> Option<Vec<Value>> {
    let value: Value = serde_json::from_str(raw).ok()?;
    match value {
        Value::Array(rows) => Some(rows),
        Value::Object(map) => map.into_iter().find_map(|(_, v)| match v {
            Value::Array(rows) => Some(rows),
            _ => None,
        }),
        _ => None,
    }
}

fn fund_from_json(item: &Value) -> Option<FundRecord> {
    let code = text_field(item, FUND_CODE_ALIASES);
    let name = text_field(item, FUND_NAME_ALIASES);
    if code.is_empty() || name.is_empty() {
        debug!("Skipping fund row without code or name");
        return None;
    }

    Some(FundRecord {
        code,
        name,
        category: map_category(&text_field(item, FUND_CATEGORY_ALIASES)),
        daily: number_field(item, FUND_DAILY_ALIASES),
        weekly: number_field(item, FUND_WEEKLY_ALIASES),
        monthly: number_field(item, FUND_MONTHLY_ALIASES),
        yearly: number_field(item, FUND_YEARLY_ALIASES),
        total_value: number_field(item, FUND_TOTAL_ALIASES).max(0.0),
        risk: Risk::from_label(&text_field(item, FUND_RISK_ALIASES)),
    })
}

fn investor_from_json(item: &Value) -> InvestorRecord {
    InvestorRecord::new(
        text_field(item, INVESTOR_CODE_ALIASES),
        text_field(item, INVESTOR_NAME_ALIASES),
        count_field(item, INVESTOR_CURRENT_ALIASES),
        count_field(item, INVESTOR_PREVIOUS_ALIASES),
    )
}

fn funds_from_table(raw: &str) -> Vec<FundRecord> {
    let Some(rows) = table_cell_rows(raw) else {
        warn!("Fund payload is neither JSON nor markup with a table");
        return Vec::new();
    };

    let mut funds = Vec::new();
    for (index, cells) in rows.iter().enumerate() {
        if cells.len() < 5 {
            debug!("Skipping fund table row {index} with {} cells", cells.len());
            continue;
        }
        let code = cell(cells, 0);
        let name = cell(cells, 1);
        if code.is_empty() || name.is_empty() {
            debug!("Skipping fund table row {index} without code or name");
            continue;
        }
        funds.push(FundRecord {
            code,
            name,
            category: map_category(&cell(cells, 2)),
            daily: parse_percent_text(&cell(cells, 3)),
            weekly: parse_percent_text(&cell(cells, 4)),
            monthly: parse_percent_text(&cell(cells, 5)),
            yearly: parse_percent_text(&cell(cells, 6)),
            total_value: parse_amount_text(&cell(cells, 7)),
            risk: Risk::from_label(&cell(cells, 8)),
        });
    }
    funds
}

fn investors_from_table(raw: &str) -> Vec<InvestorRecord> {
    let Some(rows) = table_cell_rows(raw) else {
        warn!("Investor payload is neither JSON nor markup with a table");
        return Vec::new();
    };

    let mut investors = Vec::new();
    for (index, cells) in rows.iter().enumerate() {
        if cells.len() < 3 {
            debug!(
                "Skipping investor table row {index} with {} cells",
                cells.len()
            );
            continue;
        }
        let current = parse_count_text(&cell(cells, 2));
        // A three-cell row carries no previous period; treat it as zero.
        let previous = if cells.len() >= 4 {
            parse_count_text(&cell(cells, 3))
        } else {
            0
        };
        investors.push(InvestorRecord::new(
            cell(cells, 0),
            cell(cells, 1),
            current,
            previous,
        ));
    }
    investors
}

/// Extracts the cell texts of every row in the first table of a markup
/// document. `None` when no table can be located.
fn table_cell_rows(raw: &str) -> Option<Vec<Vec<String>>> {
    let table_selector = Selector::parse("table").ok()?;
    let row_selector = Selector::parse("tr").ok()?;
    let cell_selector = Selector::parse("td").ok()?;

    let document = Html::parse_document(raw);
    let table = document.select(&table_selector).next()?;

    let rows = table
        .select(&row_selector)
        .map(|row| {
            row.select(&cell_selector)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect()
        })
        .collect();
    Some(rows)
}

fn cell(cells: &[String], index: usize) -> String {
    cells.get(index).cloned().unwrap_or_default()
}

/// First alias whose value is a non-empty string wins.
fn text_field(item: &Value, aliases: &[&str]) -> String {
    aliases
        .iter()
        .filter_map(|key| item.get(*key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_default()
}

/// First alias carrying a usable number wins; string values go through the
/// same decimal-comma cleaning as table cells. Defaults to 0.
fn number_field(item: &Value, aliases: &[&str]) -> f64 {
    aliases
        .iter()
        .filter_map(|key| item.get(*key))
        .find_map(|value| match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) if !s.trim().is_empty() => Some(parse_percent_text(s)),
            _ => None,
        })
        .unwrap_or(0.0)
}

/// Non-negative integer counts; accepts numbers or digit-bearing strings.
fn count_field(item: &Value, aliases: &[&str]) -> u64 {
    aliases
        .iter()
        .filter_map(|key| item.get(*key))
        .find_map(|value| match value {
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| *f >= 0.0)
                    .map(|f| f as u64)
            }),
            Value::String(s) if s.chars().any(|c| c.is_ascii_digit()) => {
                Some(parse_count_text(s))
            }
            _ => None,
        })
        .unwrap_or(0)
}

/// Cleans a percentage cell: decimal comma to point, trailing percent sign
/// stripped. Defaults to 0 when the remainder is not a number.
fn parse_percent_text(text: &str) -> f64 {
    text.trim()
        .replacen(',', ".", 1)
        .replace('%', "")
        .trim()
        .parse()
        .unwrap_or(0.0)
}

/// Cleans a currency cell: every non-digit/non-comma character is stripped,
/// then the decimal comma becomes a point. `"₺2.456.789.123,45"` parses to
/// `2456789123.45`.
fn parse_amount_text(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();
    cleaned.replacen(',', ".", 1).parse().unwrap_or(0.0)
}

/// Cleans an investor-count cell down to its digits.
fn parse_count_text(text: &str) -> u64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::Category;

    #[test]
    fn test_fund_json_upper_case_fields() {
        let raw = r#"[{
            "FONKOD": "AKB",
            "FONUNVAN": "Akbank Teknoloji Sektör Fonu",
            "FONTUR": "Hisse Senedi Yoğun Fon",
            "GUNLUK": 3.45,
            "HAFTALIK": 8.23,
            "AYLIK": 15.67,
            "YILLIK": 42.89,
            "TOPLAM": 2456789123.0,
            "RISK": "Yüksek"
        }]"#;

        let funds = normalize_funds(raw);
        assert_eq!(funds.len(), 1);
        let fund = &funds[0];
        assert_eq!(fund.code, "AKB");
        assert_eq!(fund.category, Category::HisseSenedi);
        assert_eq!(fund.daily, 3.45);
        assert_eq!(fund.total_value, 2456789123.0);
        assert_eq!(fund.risk, Risk::Yuksek);
    }

    #[test]
    fn test_fund_json_camel_case_fallback_and_defaults() {
        let raw = r#"[{
            "fonKod": "GAR",
            "fonUnvan": "Garanti Değişken Fon",
            "gunluk": "2,89"
        }]"#;

        let funds = normalize_funds(raw);
        assert_eq!(funds.len(), 1);
        let fund = &funds[0];
        assert_eq!(fund.code, "GAR");
        assert_eq!(fund.category, Category::Degisken);
        assert!((fund.daily - 2.89).abs() < 1e-9);
        // Absent numeric fields default to zero, risk to Orta.
        assert_eq!(fund.weekly, 0.0);
        assert_eq!(fund.yearly, 0.0);
        assert_eq!(fund.total_value, 0.0);
        assert_eq!(fund.risk, Risk::Orta);
    }

    #[test]
    fn test_fund_json_rows_without_code_or_name_are_discarded() {
        let raw = r#"[
            {"FONKOD": "", "FONUNVAN": "İsimsiz"},
            {"FONKOD": "AAA"},
            {"FONKOD": "BBB", "FONUNVAN": "Geçerli Fon"}
        ]"#;

        let funds = normalize_funds(raw);
        assert_eq!(funds.len(), 1);
        assert_eq!(funds[0].code, "BBB");
    }

    #[test]
    fn test_fund_json_null_alias_falls_through() {
        let raw = r#"[{"FONKOD": null, "fonKod": "CCC", "FONUNVAN": "Fon", "GUNLUK": null, "gunluk": 1.5}]"#;
        let funds = normalize_funds(raw);
        assert_eq!(funds.len(), 1);
        assert_eq!(funds[0].code, "CCC");
        assert_eq!(funds[0].daily, 1.5);
    }

    #[test]
    fn test_empty_json_array_yields_empty() {
        assert!(normalize_funds("[]").is_empty());
    }

    #[test]
    fn test_object_wrapped_array_is_probed() {
        let raw = r#"{"draw": 1, "data": [{"FONKOD": "AKB", "FONUNVAN": "Akbank Fonu"}]}"#;
        let funds = normalize_funds(raw);
        assert_eq!(funds.len(), 1);
        assert_eq!(funds[0].code, "AKB");
    }

    #[test]
    fn test_fund_markup_table() {
        let raw = r#"<html><body><table>
            <thead><tr><th>Kod</th><th>Unvan</th></tr></thead>
            <tbody>
            <tr>
                <td>AKB</td><td>Akbank Fonu</td><td>Hisse Senedi</td>
                <td>3,45%</td><td>8,23%</td><td>15,67%</td><td>42,89%</td>
                <td>₺2.456.789.123,45</td><td>Yüksek</td>
            </tr>
            <tr><td>KISA</td><td>Eksik Satır</td><td>Karma</td></tr>
            </tbody>
        </table></body></html>"#;

        let funds = normalize_funds(raw);
        // The 3-cell row is below the 5-cell minimum and is skipped.
        assert_eq!(funds.len(), 1);
        let fund = &funds[0];
        assert_eq!(fund.code, "AKB");
        assert_eq!(fund.category, Category::HisseSenedi);
        assert!((fund.daily - 3.45).abs() < 1e-9);
        assert!((fund.weekly - 8.23).abs() < 1e-9);
        assert!((fund.total_value - 2456789123.45).abs() < 1e-6);
        assert_eq!(fund.risk, Risk::Yuksek);
    }

    #[test]
    fn test_fund_markup_malformed_numeric_defaults_to_zero() {
        let raw = r#"<table><tbody><tr>
            <td>AKB</td><td>Akbank Fonu</td><td>Karma</td>
            <td>bozuk</td><td>1,00%</td>
        </tr></tbody></table>"#;

        let funds = normalize_funds(raw);
        // A malformed cell zeroes the field, it does not drop the row.
        assert_eq!(funds.len(), 1);
        assert_eq!(funds[0].daily, 0.0);
        assert!((funds[0].weekly - 1.0).abs() < 1e-9);
        assert_eq!(funds[0].monthly, 0.0);
    }

    #[test]
    fn test_fund_markup_without_table_yields_empty() {
        assert!(normalize_funds("<html><body><p>bakım</p></body></html>").is_empty());
        assert!(normalize_funds("tamamen bozuk veri").is_empty());
    }

    #[test]
    fn test_investor_json_alias_variants() {
        let raw = r#"[
            {"FONKOD": "DEN", "FONUNVAN": "Deniz Fonu", "YATIRIMCI_SAYISI": 32145, "ONCEKI_YATIRIMCI": 29573},
            {"kod": "ISB", "unvan": "İş Fonu", "mevYatirimci": 25678, "oncekiYatirimciSayisi": 23623},
            {"KOD": "VKF", "UNVAN": "Vakıf Fonu", "sayi": "21.456", "ONCEKI_SAYI": "19.739"}
        ]"#;

        let investors = normalize_investors(raw);
        assert_eq!(investors.len(), 3);
        assert_eq!(investors[0].code, "DEN");
        assert_eq!(investors[0].change, 2572);
        assert_eq!(investors[1].code, "ISB");
        assert_eq!(investors[1].change, 2055);
        assert_eq!(investors[2].code, "VKF");
        assert_eq!(investors[2].current_investors, 21456);
        assert_eq!(investors[2].change, 1717);
    }

    #[test]
    fn test_investor_change_is_recomputed_not_sourced() {
        // Payload claims a bogus change; the normalized record ignores it.
        let raw = r#"[{"FONKOD": "DEN", "FONUNVAN": "Deniz Fonu",
            "YATIRIMCI_SAYISI": 110, "ONCEKI_YATIRIMCI": 100,
            "DEGISIM": 99999, "degisimYuzde": 50.0}]"#;

        let investors = normalize_investors(raw);
        assert_eq!(investors[0].change, 10);
        assert!((investors[0].change_percent - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_investor_zero_current_is_dropped() {
        let raw = r#"[
            {"FONKOD": "AAA", "FONUNVAN": "Boş Fon", "YATIRIMCI_SAYISI": 0},
            {"FONKOD": "BBB", "FONUNVAN": "Dolu Fon", "YATIRIMCI_SAYISI": 5}
        ]"#;

        let investors = normalize_investors(raw);
        assert_eq!(investors.len(), 1);
        assert_eq!(investors[0].code, "BBB");
    }

    #[test]
    fn test_investor_top_ten_sorted_by_change() {
        let rows: Vec<String> = (1..=15)
            .map(|i| {
                format!(
                    r#"{{"FONKOD": "F{i:02}", "FONUNVAN": "Fon {i}", "YATIRIMCI_SAYISI": {}, "ONCEKI_YATIRIMCI": 1000}}"#,
                    1000 + i * 10
                )
            })
            .collect();
        let raw = format!("[{}]", rows.join(","));

        let investors = normalize_investors(&raw);
        assert_eq!(investors.len(), 10);
        assert_eq!(investors[0].code, "F15");
        for pair in investors.windows(2) {
            assert!(pair[0].change >= pair[1].change);
        }
    }

    #[test]
    fn test_investor_markup_three_cell_row() {
        let raw = r#"<table><tbody>
            <tr><td>AAA</td><td>Test Fund</td><td>1.234,56</td></tr>
        </tbody></table>"#;

        let investors = normalize_investors(raw);
        assert_eq!(investors.len(), 1);
        // Count cells keep digits only; a missing previous cell reads as zero.
        assert_eq!(investors[0].current_investors, 123456);
        assert_eq!(investors[0].previous_investors, 0);
        assert_eq!(investors[0].change, 123456);
        assert_eq!(investors[0].change_percent, 0.0);
    }

    #[test]
    fn test_investor_markup_four_cell_rows() {
        let raw = r#"<table><tbody>
            <tr><td>DEN</td><td>Deniz Fonu</td><td>32.145</td><td>29.573</td></tr>
            <tr><td>ISB</td><td>İş Fonu</td><td>25.678</td><td>23.623</td></tr>
            <tr><td></td><td>Kodsuz</td><td>10</td><td>5</td></tr>
        </tbody></table>"#;

        let investors = normalize_investors(raw);
        assert_eq!(investors.len(), 2);
        assert_eq!(investors[0].code, "DEN");
        assert_eq!(investors[0].change, 2572);
        assert_eq!(investors[1].change, 2055);
    }

    #[test]
    fn test_investor_empty_payload_short_circuits() {
        assert!(normalize_investors("").is_empty());
        assert!(normalize_investors("   \n\t ").is_empty());
    }

    #[test]
    fn test_amount_cleaning() {
        assert!((parse_amount_text("₺2.456.789.123,45") - 2456789123.45).abs() < 1e-6);
        assert_eq!(parse_amount_text("₺"), 0.0);
        assert_eq!(parse_amount_text(""), 0.0);
        assert!((parse_amount_text("1.000") - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_cleaning() {
        assert!((parse_percent_text("3,45%") - 3.45).abs() < 1e-9);
        assert!((parse_percent_text("-1,12") + 1.12).abs() < 1e-9);
        assert_eq!(parse_percent_text("yok"), 0.0);
        assert_eq!(parse_percent_text(""), 0.0);
    }
}
