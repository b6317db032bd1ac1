// SMART attribute table location and row parsing

use crate::models::AttributeEntry;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::trace;

/// Lines that close the attribute table when they start a line.
const TRAILERS: [&str; 2] = [
    "SMART Error Log Version:",
    "SMART Self-test log structure revision number:",
];

/// ID, name, optional middle columns, raw value (last token).
static ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\d+\s+([A-Za-z0-9_]+)\s+(?:.*\s)?(\S+)\s*$").expect("row pattern is valid")
});

/// Attribute name to raw value, last row wins on duplicate names.
pub type AttributeMap<'a> = HashMap<&'a str, &'a str>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    SeekingHeader,
    InTable,
    Done,
}

fn is_header(line: &str) -> bool {
    let line = line.trim();
    line.starts_with("ID# ATTRIBUTE_NAME") && line.ends_with("RAW_VALUE")
}

fn is_trailer(line: &str) -> bool {
    TRAILERS.iter().any(|t| line.starts_with(t))
}

/// Parses a single table row, `None` if the line does not have row shape.
pub fn parse_row(line: &str) -> Option<AttributeEntry<'_>> {
    let caps = ROW_RE.captures(line)?;
    Some(AttributeEntry {
        name: caps.get(1)?.as_str(),
        raw_value: caps.get(2)?.as_str(),
    })
}

/// Collects every well-formed row between the table header and the first
/// trailer (or end of text). Returns nothing when there is no header.
pub fn table_rows(text: &str) -> Vec<AttributeEntry<'_>> {
    let mut state = ScanState::SeekingHeader;
    let mut rows = Vec::new();

    for line in text.lines() {
        match state {
            ScanState::SeekingHeader => {
                if is_header(line) {
                    state = ScanState::InTable;
                }
            }
            ScanState::InTable => {
                if is_trailer(line) {
                    state = ScanState::Done;
                } else if line.trim().is_empty() {
                    continue;
                } else if let Some(entry) = parse_row(line) {
                    rows.push(entry);
                } else {
                    trace!(line, "skipping malformed attribute row");
                }
            }
            ScanState::Done => break,
        }
    }

    rows
}

/// Builds the attribute mapping for a device block.
pub fn parse_attributes(text: &str) -> AttributeMap<'_> {
    table_rows(text)
        .into_iter()
        .map(|entry| (entry.name, entry.raw_value))
        .collect()
}
