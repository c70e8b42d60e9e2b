//! Splitting a feed into its envelope and its event records.

use log::debug;

use crate::feed::{LineEnding, Record, SplitFeed};

pub const BEGIN_MARKER: &str = "BEGIN:VEVENT";
pub const END_MARKER: &str = "END:VEVENT";

/// Byte offsets of one line of the raw text.
#[derive(Debug, Clone, Copy)]
struct LineSpan {
    start: usize,
    /// End of the content, before any `\r\n` or `\n`.
    end: usize,
    /// Start of the following line.
    next: usize,
}

/// Text of `spans`, each line keeping its own terminator except the last.
fn join_spans(raw: &str, spans: &[LineSpan]) -> String {
    let Some((last, rest)) = spans.split_last() else {
        return String::new();
    };

    let mut text = String::new();
    for span in rest {
        text.push_str(&raw[span.start..span.next]);
    }
    text.push_str(&raw[last.start..last.end]);
    text
}

/// Split raw feed text into header, records and footer.
///
/// Marker lines are matched after trimming surrounding whitespace. A begin
/// marker discards any record still open, an end marker with no open record
/// is ignored, and a record still open at the end of the text is dropped.
/// Lines between two records belong to neither the header nor the footer,
/// and the footer only starts after the last end marker of any kind.
///
/// Records are sliced straight out of `raw`, line endings included.
/// Never fails: text without markers comes back as a header only.
pub fn split_feed(raw: &str) -> SplitFeed {
    let mut header: Vec<LineSpan> = Vec::new();
    let mut trailing: Vec<LineSpan> = Vec::new();
    let mut records: Vec<Record> = Vec::new();
    let mut open: Option<usize> = None;
    let mut seen_begin = false;
    let mut offset = 0;

    for segment in raw.split('\n') {
        let line = segment.strip_suffix('\r').unwrap_or(segment);
        let span = LineSpan {
            start: offset,
            end: offset + line.len(),
            next: offset + segment.len() + 1,
        };
        offset = span.next;

        match line.trim() {
            BEGIN_MARKER => {
                if let Some(partial) = open.replace(span.start) {
                    debug!("dropping unterminated record at byte {partial}");
                }
                seen_begin = true;
            }
            END_MARKER => {
                match open.take() {
                    Some(begin) => records.push(Record::new(&raw[begin..span.end])),
                    None => debug!("ignoring end marker outside of a record"),
                }
                trailing.clear();
            }
            _ if open.is_some() => {}
            _ if !seen_begin => header.push(span),
            _ => trailing.push(span),
        }
    }

    if let Some(partial) = open {
        debug!("dropping unterminated trailing record at byte {partial}");
    }

    SplitFeed {
        header: join_spans(raw, &header),
        records,
        footer: join_spans(raw, &trailing),
        line_ending: LineEnding::detect(raw),
    }
}
