//! Rebuilding a feed from its envelope and a record sequence.

use crate::feed::{LineEnding, Record};

/// Join the trimmed header, the records and the trimmed footer with the
/// feed's line ending.
///
/// Header or footer that trim to nothing are left out instead of producing
/// blank lines. Splitting the result again yields exactly `records`.
pub fn reassemble(header: &str, records: &[Record], footer: &str, line_ending: LineEnding) -> String {
    let header = header.trim();
    let footer = footer.trim();

    let mut parts: Vec<&str> = Vec::with_capacity(records.len() + 2);
    if !header.is_empty() {
        parts.push(header);
    }
    parts.extend(records.iter().map(Record::as_str));
    if !footer.is_empty() {
        parts.push(footer);
    }

    parts.join(line_ending.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::split_feed;

    #[test]
    fn test_reassemble_trims_envelope() {
        let feed = split_feed(
            "\nBEGIN:VCALENDAR\nVERSION:2.0\n\nBEGIN:VEVENT\nUID:1\nEND:VEVENT\nEND:VCALENDAR\n\n",
        );

        let text = reassemble(&feed.header, &feed.records, &feed.footer, feed.line_ending);

        assert_eq!(
            text,
            "BEGIN:VCALENDAR\nVERSION:2.0\nBEGIN:VEVENT\nUID:1\nEND:VEVENT\nEND:VCALENDAR"
        );
    }

    #[test]
    fn test_zero_records_is_header_then_footer() {
        let text = reassemble("BEGIN:VCALENDAR\nVERSION:2.0", &[], "END:VCALENDAR", LineEnding::Lf);
        assert_eq!(text, "BEGIN:VCALENDAR\nVERSION:2.0\nEND:VCALENDAR");
    }

    #[test]
    fn test_empty_envelope_is_omitted() {
        let feed = split_feed("BEGIN:VEVENT\nUID:1\nEND:VEVENT");
        let text = reassemble("  \n", &feed.records, "", LineEnding::Lf);
        assert_eq!(text, "BEGIN:VEVENT\nUID:1\nEND:VEVENT");
    }

    #[test]
    fn test_reassembled_output_resplits_to_same_records() {
        let feed = split_feed(
            "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:1\r\nEND:VEVENT\r\nX-GAP:1\r\nBEGIN:VEVENT\r\nUID:2\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n",
        );
        let text = reassemble(&feed.header, &feed.records, &feed.footer, feed.line_ending);
        let again = split_feed(&text);

        assert_eq!(again.records, feed.records);
        assert_eq!(again.header, feed.header.trim());
        assert_eq!(again.footer, feed.footer.trim());
        assert_eq!(again.line_ending, LineEnding::CrLf);
    }
}
