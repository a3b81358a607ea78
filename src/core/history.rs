//! Fetch abstractions for the fund history endpoint

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use thiserror::Error;

/// Transport-level fetch failure. Payload validity is not checked here;
/// success means response bytes arrived.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("history request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("history endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Inclusive reporting window, encoded as DD.MM.YYYY on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// The one-day window the dashboard requests: yesterday through today.
    pub fn ending_today(today: NaiveDate) -> Self {
        DateRange {
            start: today - Duration::days(1),
            end: today,
        }
    }

    pub fn start_param(&self) -> String {
        self.start.format("%d.%m.%Y").to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format("%d.%m.%Y").to_string()
    }
}

#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetches raw fund performance history for the given window.
    async fn fetch_fund_history(&self, window: DateRange) -> Result<String, FetchError>;

    /// Fetches raw investor-count history over the default one-day window.
    async fn fetch_investor_history(&self) -> Result<String, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_ends_today_and_spans_one_day() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let window = DateRange::ending_today(today);
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
        assert_eq!(window.end, today);
    }

    #[test]
    fn test_wire_encoding_is_zero_padded_dmy() {
        let window = DateRange::ending_today(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(window.start_param(), "04.01.2024");
        assert_eq!(window.end_param(), "05.01.2024");
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        let window = DateRange::ending_today(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(window.start_param(), "29.02.2024");
    }
}
