//! Contract with the upstream collector that runs smartctl on a host.
//!
//! Nothing here spawns processes or opens connections; these helpers describe
//! what the collector runs and vet its output before it reaches the parser.

use crate::error::{ReportError, Result};
use crate::models::DiskHealthRecord;
use tracing::warn;

/// Device name prefixes that never carry SMART data (loop, network block, ram, floppy).
pub const SKIPPED_DEVICE_PREFIXES: [&str; 4] = ["loop", "nbd", "ram", "fd"];

/// Script the collector runs once per host. Its stdout is the input of
/// [`crate::parse_report`].
pub const SMART_COMMAND: &str = r#"#!/bin/bash
for disk in $(lsblk -d -n -o NAME | grep -Ev '^(loop|nbd|ram|fd)'); do
    echo "== SMART info for /dev/$disk =="
    smartctl -a /dev/$disk
    echo ""
done
"#;

const COMMAND_NOT_FOUND: &str = "smartctl: command not found";

/// Whether a block device (as listed by `lsblk -d`) should be queried.
pub fn is_queryable_device(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && !SKIPPED_DEVICE_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// The section delimiter the collector prints before each device.
pub fn delimiter_line(name: &str) -> String {
    format!("== SMART info for /dev/{name} ==")
}

/// Turns collector stderr into an error. Empty stderr means the stdout can be parsed.
pub fn check_stderr(stderr: &str) -> Result<()> {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        return Ok(());
    }
    warn!(stderr, "collector wrote to stderr");
    if stderr.contains(COMMAND_NOT_FOUND) {
        Err(ReportError::CommandNotFound)
    } else {
        Err(ReportError::CommandFailed(stderr.to_string()))
    }
}

/// Rejects an empty parse so callers cannot mistake it for a healthy host.
pub fn require_devices(records: Vec<DiskHealthRecord>) -> Result<Vec<DiskHealthRecord>> {
    if records.is_empty() {
        Err(ReportError::NoDevices)
    } else {
        Ok(records)
    }
}
