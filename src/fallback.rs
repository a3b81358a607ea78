//! Fixed sample datasets, shown whenever the live endpoint yields nothing
//! usable. Pure and deterministic, no I/O.

use crate::core::category::Category;
use crate::core::model::{FundRecord, InvestorRecord, Risk};

fn fund(
    code: &str,
    name: &str,
    category: Category,
    daily: f64,
    weekly: f64,
    monthly: f64,
    yearly: f64,
    total_value: f64,
    risk: Risk,
) -> FundRecord {
    FundRecord {
        code: code.to_string(),
        name: name.to_string(),
        category,
        daily,
        weekly,
        monthly,
        yearly,
        total_value,
        risk,
    }
}

/// Fifteen sample funds spanning all nine categories and all three risk
/// tiers, with a few negative returns to exercise signed formatting.
pub fn sample_funds() -> Vec<FundRecord> {
    use Category::*;
    use Risk::*;
    vec![
        fund("AKB", "Akbank Teknoloji Sektör Fonu", HisseSenedi, 3.45, 8.23, 15.67, 42.89, 2_456_789_123.0, Yuksek),
        fund("GAR", "Garanti Yatırım Değişken Fon", Degisken, 2.89, 7.12, 14.23, 38.45, 1_890_234_567.0, Yuksek),
        fund("ISB", "İş Bankası Devlet Tahvili ve Bono Fonu", Borclanma, 1.95, 4.56, 8.90, 22.34, 3_200_000_000.0, Dusuk),
        fund("YKB", "Yapı Kredi Bankası Dengeli Karma Fon", Karma, 2.34, 6.78, 12.45, 35.67, 1_567_890_123.0, Orta),
        fund("DEN", "Denizbank Para Piyasası Fonu", ParaPiyasasi, 0.89, 2.34, 5.67, 18.90, 4_500_000_000.0, Dusuk),
        fund("VKF", "Vakıfbank Kısa Vadeli Tahvil Fonu", Borclanma, 1.56, 3.89, 7.23, 19.45, 2_100_000_000.0, Dusuk),
        fund("ZIR", "Ziraat Yatırım Katılım Fonu", Katilim, 1.78, 5.12, 10.34, 28.56, 1_234_567_890.0, Orta),
        fund("ALT", "Altın ve Kıymetli Madenler Fonu", KiymetliMadenler, 1.34, 4.56, 9.78, 25.67, 987_654_321.0, Yuksek),
        fund("FON", "Fon Sepeti Yatırım Fonu", FonSepeti, 0.67, 2.12, 4.56, 15.78, 765_432_109.0, Orta),
        fund("SER", "Serbest Yatırım Fonu", Serbest, 2.12, 6.45, 13.89, 40.12, 1_123_456_789.0, Yuksek),
        fund("TEK", "Teknoloji Sektör Fonu", HisseSenedi, -0.23, 1.45, 8.90, 32.45, 1_987_654_321.0, Yuksek),
        fund("KAR", "Karma Yatırım Fonu", Karma, -0.56, 0.89, 5.67, 24.78, 1_456_789_012.0, Orta),
        fund("BOR", "Borçlanma Araçları Fonu", Borclanma, -0.78, -0.12, 3.45, 16.89, 2_345_678_901.0, Dusuk),
        fund("DEG", "Değişken Yatırım Fonu", Degisken, -1.12, -1.45, 2.34, 18.90, 1_678_901_234.0, Yuksek),
        fund("PAR", "Para Piyasası Fonu", ParaPiyasasi, -0.45, 0.67, 4.12, 14.56, 3_456_789_012.0, Dusuk),
    ]
}

/// Ten sample investor movers, sorted by descending change. Change figures
/// are derived from the current/previous pairs, never hard-coded.
pub fn sample_investors() -> Vec<InvestorRecord> {
    let rows: [(&str, &str, u64, u64); 10] = [
        ("DEN", "Denizbank Para Piyasası Fonu", 32145, 29573),
        ("ISB", "İş Bankası Devlet Tahvili ve Bono Fonu", 25678, 23623),
        ("VKF", "Vakıfbank Kısa Vadeli Tahvil Fonu", 21456, 19739),
        ("YKB", "Yapı Kredi Bankası Dengeli Karma Fon", 18765, 17263),
        ("AKB", "Akbank Teknoloji Sektör Fonu", 16543, 15234),
        ("GAR", "Garanti Yatırım Değişken Fon", 15432, 14218),
        ("ZIR", "Ziraat Yatırım Katılım Fonu", 14321, 13205),
        ("ALT", "Altın ve Kıymetli Madenler Fonu", 13210, 12198),
        ("SER", "Serbest Yatırım Fonu", 12098, 11187),
        ("FON", "Fon Sepeti Yatırım Fonu", 10987, 10176),
    ];

    rows.into_iter()
        .map(|(code, name, current, previous)| {
            InvestorRecord::new(code.to_string(), name.to_string(), current, previous)
        })
        .collect()
}
