//! TUI rendering traits for icstrim types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to icstrim-core types using owo_colors.

use icstrim_core::{DateWindow, TrimmedFeed};
use owo_colors::OwoColorize;

use crate::source::FeedSource;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for FeedSource {
    fn render(&self) -> String {
        match self {
            FeedSource::Url(_) => format!("Downloading {}", self.to_string().cyan()),
            FeedSource::File(_) => format!("Reading {}", self.to_string().cyan()),
        }
    }
}

impl Render for DateWindow {
    fn render(&self) -> String {
        format!(
            "{} to {}",
            self.start.format("%Y-%m-%d").bold(),
            self.end.format("%Y-%m-%d").bold()
        )
    }
}

impl Render for TrimmedFeed {
    fn render(&self) -> String {
        let mut lines = vec![format!(
            "Found {} in source calendar",
            pluralize_events(self.total_records)
        )];

        if let Some((first, last)) = self.source_span {
            lines.push(format!(
                "   {}",
                format!("spanning {} to {}", first, last).dimmed()
            ));
        }

        let kept = format!("Kept {}", pluralize_events(self.kept_records));
        let dropped = format!("({} dropped)", self.dropped_records());
        lines.push(format!("{} {}", kept.green(), dropped.dimmed()));

        lines.join("\n")
    }
}

/// Render the output size against the import limit.
pub fn render_size(trimmed: &TrimmedFeed, limit_bytes: u64) -> String {
    let size = format!("{:.2} MB", trimmed.size_mb());

    if trimmed.exceeds(limit_bytes) {
        format!(
            "{} {}\n   {}",
            "Output is".yellow(),
            size.yellow().bold(),
            "Still above the import size limit; try a shorter window".yellow()
        )
    } else {
        format!("Output is {} {}", size.bold(), "(within import size limit)".green())
    }
}

/// Simple pluralization helper
fn pluralize_events(count: usize) -> String {
    if count == 1 {
        "1 event".to_string()
    } else {
        format!("{} events", count)
    }
}
