//! Date-window filtering of event records.

use crate::feed::Record;
use crate::window::DateWindow;

/// Keep the records whose start date falls inside `window`, in their
/// original order.
pub fn filter_records(records: &[Record], window: &DateWindow) -> Vec<Record> {
    records
        .iter()
        .filter(|record| window.contains(record.start_date()))
        .cloned()
        .collect()
}
