//! Core domain: categories, records, normalization and fetch contracts

pub mod category;
pub mod history;
pub mod model;
pub mod normalize;

// Re-export main types for cleaner imports
pub use category::{Category, map_category};
pub use history::{DateRange, FetchError, HistoryProvider};
pub use model::{FundRecord, InvestorRecord, Risk};
pub use normalize::{normalize_funds, normalize_investors};
