//! Positional CSV parsing for card content.
//!
//! This is deliberately not a general CSV parser. The content format is four
//! comma-separated columns (`id, sideA, sideB, notes`) with a header row, and
//! the parser matches the original loader's behavior:
//!
//! - The line break is `\r\n` when one appears anywhere in the text,
//!   otherwise `\n`.
//! - The first line is a header and is skipped unconditionally.
//! - Fields are assigned by column position. There is no quoting or escaping,
//!   so an embedded comma shifts every field after it.
//! - Missing trailing columns become empty strings; extra columns are
//!   ignored; fully blank lines yield no record.
//!
//! Parsing never fails and is idempotent: the same text always produces the
//! same records.

use super::record::CardRecord;

/// Parse CSV text into an ordered sequence of card records.
///
/// ```
/// use flashtable::content::parse_records;
///
/// let records = parse_records("id,sideA,sideB,notes\n1,Hello,World,note");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].id, "1");
/// assert_eq!(records[0].side_a, "Hello");
/// assert_eq!(records[0].side_b, "World");
/// assert_eq!(records[0].notes, "note");
/// ```
#[must_use]
pub fn parse_records(text: &str) -> Vec<CardRecord> {
    let line_break = if text.contains("\r\n") { "\r\n" } else { "\n" };

    let mut records = Vec::new();
    // skip header row
    for line in text.split(line_break).skip(1) {
        if line.is_empty() {
            continue;
        }

        let mut columns = line.split(',');
        let mut field = || columns.next().unwrap_or("").to_string();

        records.push(CardRecord {
            id: field(),
            side_a: field(),
            side_b: field(),
            notes: field(),
        });
    }

    records
}
