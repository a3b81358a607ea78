//! Normalized record types produced once per load cycle

use crate::core::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Risk {
    Yuksek,
    Orta,
    Dusuk,
}

impl Risk {
    /// Lenient parse for payload cells; anything unrecognized is `Orta`.
    pub fn from_label(text: &str) -> Risk {
        match text.trim() {
            "Yüksek" => Risk::Yuksek,
            "Düşük" => Risk::Dusuk,
            _ => Risk::Orta,
        }
    }
}

impl Display for Risk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Risk::Yuksek => "Yüksek",
            Risk::Orta => "Orta",
            Risk::Dusuk => "Düşük",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Risk {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Yüksek" => Ok(Risk::Yuksek),
            "Orta" => Ok(Risk::Orta),
            "Düşük" => Ok(Risk::Dusuk),
            _ => Err(anyhow::anyhow!("Unknown risk tier: {}", s)),
        }
    }
}

/// One fund row as displayed on the dashboard. Percentage fields are signed
/// and already in percent units; `total_value` is in TRY.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundRecord {
    pub code: String,
    pub name: String,
    pub category: Category,
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
    pub yearly: f64,
    pub total_value: f64,
    pub risk: Risk,
}

/// One fund's investor-count movement between two reporting dates.
///
/// `change` and `change_percent` are always derived from the sourced
/// current/previous pair, never read from a payload field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorRecord {
    pub code: String,
    pub name: String,
    pub current_investors: u64,
    pub previous_investors: u64,
    pub change: i64,
    pub change_percent: f64,
}

impl InvestorRecord {
    pub fn new(code: String, name: String, current: u64, previous: u64) -> Self {
        let change = current as i64 - previous as i64;
        let change_percent = if previous > 0 {
            change as f64 / previous as f64 * 100.0
        } else {
            0.0
        };
        InvestorRecord {
            code,
            name,
            current_investors: current,
            previous_investors: previous,
            change,
            change_percent,
        }
    }
}
