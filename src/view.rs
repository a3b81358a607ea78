//! Explicit view state for the fund table: category filter, free-text
//! search and sort order, applied as a pure transformation over the
//! normalized records.

use crate::core::category::Category;
use crate::core::model::FundRecord;
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    One(Category),
}

impl CategoryFilter {
    fn matches(&self, fund: &FundRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::One(category) => fund.category == *category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl SortKey {
    fn value_of(&self, fund: &FundRecord) -> f64 {
        match self {
            SortKey::Daily => fund.daily,
            SortKey::Weekly => fund.weekly,
            SortKey::Monthly => fund.monthly,
            SortKey::Yearly => fund.yearly,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Daily => "Günlük",
            SortKey::Weekly => "Haftalık",
            SortKey::Monthly => "Aylık",
            SortKey::Yearly => "Yıllık",
        }
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(SortKey::Daily),
            "weekly" => Ok(SortKey::Weekly),
            "monthly" => Ok(SortKey::Monthly),
            "yearly" => Ok(SortKey::Yearly),
            _ => Err(anyhow::anyhow!("Invalid sort key: {}", s)),
        }
    }
}

/// The dashboard's complete display state. Defaults match the page on first
/// load: all categories, no search, daily returns high to low.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub filter: CategoryFilter,
    pub search: String,
    pub sort: SortKey,
    pub ascending: bool,
}

impl ViewState {
    /// Filters and sorts the records for display. Pure: the input is not
    /// mutated, content passes through unchanged.
    pub fn apply(&self, funds: &[FundRecord]) -> Vec<FundRecord> {
        let query = self.search.to_lowercase();
        let mut visible: Vec<FundRecord> = funds
            .iter()
            .filter(|fund| self.filter.matches(fund))
            .filter(|fund| {
                query.is_empty()
                    || fund.code.to_lowercase().contains(&query)
                    || fund.name.to_lowercase().contains(&query)
            })
            .cloned()
            .collect();

        visible.sort_by(|a, b| {
            let ordering = self.sort.value_of(a).total_cmp(&self.sort.value_of(b));
            if self.ascending { ordering } else { ordering.reverse() }
        });
        visible
    }
}

/// Per-category record tallies, as shown on the filter buttons.
pub fn category_counts(funds: &[FundRecord]) -> BTreeMap<Category, usize> {
    let mut counts = BTreeMap::new();
    for fund in funds {
        *counts.entry(fund.category).or_insert(0) += 1;
    }
    counts
}
