//! Canonical fund categories and free-text label mapping

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HisseSenedi,
    Karma,
    Borclanma,
    ParaPiyasasi,
    KiymetliMadenler,
    FonSepeti,
    Serbest,
    Degisken,
    Katilim,
}

/// Free-text TEFAS category labels, checked in order; first substring match
/// wins. Unknown labels fall back to `Degisken`.
const CATEGORY_PATTERNS: &[(&str, Category)] = &[
    ("Hisse Senedi", Category::HisseSenedi),
    ("Karma", Category::Karma),
    ("Borçlanma Araçları", Category::Borclanma),
    ("Tahvil ve Bono", Category::Borclanma),
    ("Para Piyasası", Category::ParaPiyasasi),
    ("Altın", Category::KiymetliMadenler),
    ("Kıymetli Madenler", Category::KiymetliMadenler),
    ("Fon Sepeti", Category::FonSepeti),
    ("Serbest", Category::Serbest),
    ("Değişken", Category::Degisken),
    ("Katılım", Category::Katilim),
];

/// Maps a free-text category label to its canonical category.
pub fn map_category(text: &str) -> Category {
    CATEGORY_PATTERNS
        .iter()
        .find(|(pattern, _)| text.contains(pattern))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Degisken)
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HisseSenedi,
        Category::Karma,
        Category::Borclanma,
        Category::ParaPiyasasi,
        Category::KiymetliMadenler,
        Category::FonSepeti,
        Category::Serbest,
        Category::Degisken,
        Category::Katilim,
    ];

    /// Canonical key used for filtering and CLI arguments.
    pub fn key(&self) -> &'static str {
        match self {
            Category::HisseSenedi => "hisse-senedi",
            Category::Karma => "karma",
            Category::Borclanma => "borçlanma",
            Category::ParaPiyasasi => "para-piyasası",
            Category::KiymetliMadenler => "kıymetli-madenler",
            Category::FonSepeti => "fon-sepet",
            Category::Serbest => "serbest",
            Category::Degisken => "değişken",
            Category::Katilim => "katılım",
        }
    }

    /// Human-facing label for tables and filter summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::HisseSenedi => "Hisse Senedi Fonları",
            Category::Karma => "Karma Fonlar",
            Category::Borclanma => "Tahvil ve Bono Fonları",
            Category::ParaPiyasasi => "Para Piyasası Fonları",
            Category::KiymetliMadenler => "Altın ve Kıymetli Madenler",
            Category::FonSepeti => "Fon Sepeti",
            Category::Serbest => "Serbest Fonlar",
            Category::Degisken => "Değişken",
            Category::Katilim => "Katılım",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.key() == s)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Unknown category key: {}", s))
    }
}
