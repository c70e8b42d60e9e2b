//! Core pipeline for trimming calendar feeds.
//!
//! A feed is split into its envelope (header and footer) and its sequence of
//! `VEVENT` records, the records are filtered against a [`DateWindow`], and
//! the survivors are stitched back between the untouched envelope:
//! - `split` finds the record boundaries
//! - `date` extracts the start date of a record
//! - `filter` keeps records inside a window
//! - `reassemble` rebuilds the feed text

pub mod date;
pub mod error;
pub mod feed;
pub mod filter;
pub mod reassemble;
pub mod split;
pub mod window;

pub use date::extract_date;
pub use error::{TrimError, TrimResult};
pub use feed::{LineEnding, Record, SplitFeed, TrimmedFeed};
pub use filter::filter_records;
pub use reassemble::reassemble;
pub use split::split_feed;
pub use window::{DateWindow, WindowConfig};

/// Run the whole pipeline over one feed: split, filter, reassemble.
pub fn trim_feed(raw: &str, window: &DateWindow) -> TrimmedFeed {
    let feed = split_feed(raw);
    let total_records = feed.records.len();
    let source_span = feed.date_span();

    let kept = filter_records(&feed.records, window);
    log::debug!(
        "kept {} of {} records in window {}",
        kept.len(),
        total_records,
        window
    );

    let text = reassemble(&feed.header, &kept, &feed.footer, feed.line_ending);

    TrimmedFeed {
        text,
        total_records,
        kept_records: kept.len(),
        source_span,
    }
}
