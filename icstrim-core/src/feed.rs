//! Feed, record and result types shared by the pipeline stages.

use std::fmt;

use chrono::NaiveDate;

use crate::date::extract_date;

/// Line separator convention of a feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// `CrLf` as soon as the text contains a single `\r\n`.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// One `BEGIN:VEVENT` ... `END:VEVENT` block, marker lines included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record(String);

impl Record {
    pub(crate) fn new(text: &str) -> Self {
        Record(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Start date of the event, or `NaiveDate::MIN` when it has none.
    pub fn start_date(&self) -> NaiveDate {
        extract_date(&self.0)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Record {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A feed taken apart into its envelope and its records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitFeed {
    pub header: String,
    pub records: Vec<Record>,
    pub footer: String,
    pub line_ending: LineEnding,
}

impl SplitFeed {
    /// Earliest and latest start dates among records that carry a real date.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self
            .records
            .iter()
            .map(Record::start_date)
            .filter(|d| *d != NaiveDate::MIN);

        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }
}

/// Output of [`crate::trim_feed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimmedFeed {
    pub text: String,
    pub total_records: usize,
    pub kept_records: usize,
    /// Date span of the input records, before filtering.
    pub source_span: Option<(NaiveDate, NaiveDate)>,
}

impl TrimmedFeed {
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    pub fn size_mb(&self) -> f64 {
        self.byte_len() as f64 / (1024.0 * 1024.0)
    }

    pub fn exceeds(&self, limit_bytes: u64) -> bool {
        self.byte_len() as u64 > limit_bytes
    }

    pub fn dropped_records(&self) -> usize {
        self.total_records.saturating_sub(self.kept_records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::split_feed;

    #[test]
    fn test_detect_line_ending() {
        assert_eq!(LineEnding::detect("A\nB"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("A\r\nB"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect(""), LineEnding::Lf);
    }

    #[test]
    fn test_date_span_skips_dateless_records() {
        let feed = split_feed(
            "BEGIN:VEVENT
DTSTART:20250310T090000Z
END:VEVENT
BEGIN:VEVENT
SUMMARY:No date
END:VEVENT
BEGIN:VEVENT
DTSTART:20240105
END:VEVENT",
        );

        let (lo, hi) = feed.date_span().expect("Should have a span");
        assert_eq!(lo, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(hi, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn test_date_span_none_without_dates() {
        let feed = split_feed("BEGIN:VEVENT\nSUMMARY:x\nEND:VEVENT");
        assert_eq!(feed.date_span(), None);
    }

    #[test]
    fn test_size_helpers() {
        let trimmed = TrimmedFeed {
            text: "x".repeat(2048),
            total_records: 5,
            kept_records: 3,
            source_span: None,
        };
        assert!(trimmed.exceeds(1024));
        assert!(!trimmed.exceeds(2048));
        assert_eq!(trimmed.dropped_records(), 2);

        let inconsistent = TrimmedFeed {
            kept_records: 7,
            ..trimmed.clone()
        };
        assert_eq!(inconsistent.dropped_records(), 0);
        assert!((trimmed.size_mb() - 2048.0 / 1_048_576.0).abs() < f64::EPSILON);
    }
}
