// Splits a multi-device report into per-device blocks

use crate::models::DeviceBlock;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static DELIMITER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*==\s*SMART info for /dev/\s*(.*?)\s*==\s*$").expect("delimiter pattern is valid")
});

/// Returns the trimmed device name if `line` is a device delimiter.
fn delimiter_name(line: &str) -> Option<&str> {
    DELIMITER_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
}

/// Splits `report` into device blocks in source order.
///
/// Text before the first delimiter is dropped. A report without any
/// delimiter yields an empty vector.
pub fn split_devices(report: &str) -> Vec<DeviceBlock<'_>> {
    let mut blocks = Vec::new();
    // (device name, byte offset where its block text starts)
    let mut current: Option<(&str, usize)> = None;
    let mut offset = 0;

    for line in report.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let Some(name) = delimiter_name(line.trim_end_matches(['\n', '\r'])) else {
            continue;
        };

        if let Some((device, start)) = current.take() {
            blocks.push(DeviceBlock {
                device,
                text: &report[start..line_start],
            });
        }
        trace!(device = name, offset = line_start, "found device delimiter");
        current = Some((name, offset));
    }

    if let Some((device, start)) = current {
        blocks.push(DeviceBlock {
            device,
            text: &report[start..],
        });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_delimiter_gives_no_blocks() {
        assert!(split_devices("").is_empty());
        assert!(split_devices("smartctl 7.3\nDevice Model: X\n").is_empty());
    }

    #[test]
    fn preamble_is_discarded() {
        let report = "garbage\n== SMART info for /dev/sda ==\nDevice Model: A\n";
        let blocks = split_devices(report);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].device, "sda");
        assert_eq!(blocks[0].text, "Device Model: A\n");
    }

    #[test]
    fn blocks_span_until_next_delimiter() {
        let report = "== SMART info for /dev/sda ==\none\ntwo\n\n== SMART info for /dev/nvme0n1 ==\nthree";
        let blocks = split_devices(report);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].device, "sda");
        assert_eq!(blocks[0].text, "one\ntwo\n\n");
        assert_eq!(blocks[1].device, "nvme0n1");
        assert_eq!(blocks[1].text, "three");
    }

    #[test]
    fn whitespace_around_name_is_tolerated() {
        let report = "  ==  SMART info for /dev/ sdb   ==  \r\nbody\n";
        let blocks = split_devices(report);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].device, "sdb");
        assert_eq!(blocks[0].text, "body\n");
    }

    #[test]
    fn empty_block_between_adjacent_delimiters() {
        let report = "== SMART info for /dev/sda ==\n== SMART info for /dev/sdb ==\n";
        let blocks = split_devices(report);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "");
        assert_eq!(blocks[1].text, "");
    }
}
