//! Date window for filtering events.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{TrimError, TrimResult};

/// Days per month of look-back.
pub const DAYS_PER_MONTH: u64 = 30;
/// Days per year of look-forward.
pub const DAYS_PER_YEAR: u64 = 365;

/// Inclusive `[start, end]` range of calendar days.
///
/// `start <= end` is not checked; an inverted window simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateWindow { start, end }
    }

    /// Window covering every representable date, dateless records included.
    pub fn unbounded() -> Self {
        DateWindow {
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Build a window from explicit bounds, falling back to `defaults` for
    /// any bound not given.
    /// - `from`: YYYY-MM-DD
    /// - `to`: YYYY-MM-DD
    pub fn from_args(from: Option<&str>, to: Option<&str>, defaults: DateWindow) -> TrimResult<Self> {
        let start = match from {
            Some(s) => parse_date(s)?,
            None => defaults.start,
        };
        let end = match to {
            Some(s) => parse_date(s)?,
            None => defaults.end,
        };

        Ok(DateWindow { start, end })
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} .. {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Parse YYYY-MM-DD
fn parse_date(s: &str) -> TrimResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| TrimError::InvalidDate(s.to_string()))
}

fn default_years_after() -> u32 {
    2
}

/// Window expressed as offsets from today.
///
/// Months count as 30 days and years as 365 days, so two years ahead is
/// 730 days rather than the same date two years later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default)]
    pub months_before: u32,

    #[serde(default = "default_years_after")]
    pub years_after: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            months_before: 0,
            years_after: default_years_after(),
        }
    }
}

impl WindowConfig {
    /// Resolve against `today` into concrete dates. Saturates at the
    /// representable date range instead of overflowing.
    pub fn resolve(&self, today: NaiveDate) -> DateWindow {
        let back = Days::new(u64::from(self.months_before) * DAYS_PER_MONTH);
        let ahead = Days::new(u64::from(self.years_after) * DAYS_PER_YEAR);

        DateWindow {
            start: today.checked_sub_days(back).unwrap_or(NaiveDate::MIN),
            end: today.checked_add_days(ahead).unwrap_or(NaiveDate::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_contains_is_inclusive() {
        let window = DateWindow::new(ymd(2024, 1, 1), ymd(2024, 12, 31));
        assert!(window.contains(ymd(2024, 1, 1)));
        assert!(window.contains(ymd(2024, 12, 31)));
        assert!(!window.contains(ymd(2023, 12, 31)));
        assert!(!window.contains(ymd(2025, 1, 1)));
    }

    #[test]
    fn test_inverted_window_contains_nothing() {
        let window = DateWindow::new(ymd(2024, 12, 31), ymd(2024, 1, 1));
        assert!(!window.contains(ymd(2024, 6, 1)));
        assert!(!window.contains(ymd(2024, 1, 1)));
    }

    #[test]
    fn test_unbounded_contains_sentinel() {
        assert!(DateWindow::unbounded().contains(NaiveDate::MIN));
        assert!(DateWindow::unbounded().contains(NaiveDate::MAX));
    }

    #[test]
    fn test_default_config_is_two_years_ahead() {
        let window = WindowConfig::default().resolve(ymd(2024, 1, 1));
        assert_eq!(window.start, ymd(2024, 1, 1));
        // 730 days, not calendar-exact: 2024 is a leap year
        assert_eq!(window.end, ymd(2025, 12, 31));
    }

    #[test]
    fn test_months_are_thirty_days() {
        let config = WindowConfig {
            months_before: 3,
            years_after: 1,
        };
        let window = config.resolve(ymd(2024, 3, 31));
        assert_eq!(window.start, ymd(2024, 1, 1));
        assert_eq!(window.end, ymd(2025, 3, 31));
    }

    #[test]
    fn test_resolve_saturates() {
        let config = WindowConfig {
            months_before: u32::MAX,
            years_after: u32::MAX,
        };
        let window = config.resolve(ymd(2024, 1, 1));
        assert_eq!(window.start, NaiveDate::MIN);
        assert_eq!(window.end, NaiveDate::MAX);
    }

    #[test]
    fn test_from_args_overrides_and_defaults() {
        let defaults = DateWindow::new(ymd(2024, 1, 1), ymd(2025, 1, 1));

        let window = DateWindow::from_args(Some("2024-02-03"), None, defaults).unwrap();
        assert_eq!(window, DateWindow::new(ymd(2024, 2, 3), ymd(2025, 1, 1)));

        let window = DateWindow::from_args(None, Some("2024-06-30"), defaults).unwrap();
        assert_eq!(window, DateWindow::new(ymd(2024, 1, 1), ymd(2024, 6, 30)));
    }

    #[test]
    fn test_from_args_rejects_bad_date() {
        let err = DateWindow::from_args(Some("03/02/2024"), None, DateWindow::unbounded())
            .unwrap_err();
        assert_eq!(err, TrimError::InvalidDate("03/02/2024".to_string()));
        assert_eq!(
            err.to_string(),
            "Invalid date format '03/02/2024'. Expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_display() {
        let window = DateWindow::new(ymd(2024, 1, 1), ymd(2024, 12, 31));
        assert_eq!(window.to_string(), "2024-01-01 .. 2024-12-31");
    }
}
