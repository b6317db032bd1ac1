// Data models for parsed smartctl reports and per-device health records

use serde::Serialize;
use std::fmt;

/// Placeholder used for any scalar field missing from a device block.
pub const NOT_AVAILABLE: &str = "N/A";

/// Physical media family, inferred from the "Rotation Rate" line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaType {
    /// Spinning disk (any rotation rate other than "Solid State Device")
    Hdd,
    /// Solid state drive
    Ssd,
    /// No "Rotation Rate" line in the block
    Unknown,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaType::Hdd => "HDD",
            MediaType::Ssd => "SSD",
            MediaType::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Final health verdict for a device.
/// Variants are declared in increasing severity so `Ord` can be used as a max reducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SmartStatus {
    /// Not yet classified
    Unknown,
    /// Self-assessment passed and no attribute raised a concern
    Ok,
    /// Degradation signals present
    Warning,
    /// Failed self-assessment or worn-out media
    Bad,
}

impl SmartStatus {
    /// Raises the status to `other` if it is more severe; never lowers it.
    pub fn escalate(self, other: SmartStatus) -> SmartStatus {
        self.max(other)
    }
}

impl fmt::Display for SmartStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SmartStatus::Unknown => "UNKNOWN",
            SmartStatus::Ok => "OK",
            SmartStatus::Warning => "WARNING",
            SmartStatus::Bad => "BAD",
        };
        f.write_str(s)
    }
}

/// The text belonging to a single device in a multi-device report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceBlock<'a> {
    /// Device name captured from the delimiter line (e.g. "sda")
    pub device: &'a str,
    /// Everything between this delimiter line and the next one
    pub text: &'a str,
}

/// One accepted row of the SMART attribute table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeEntry<'a> {
    /// Attribute name, e.g. "Reallocated_Sector_Ct"
    pub name: &'a str,
    /// Last whitespace-delimited column of the row
    pub raw_value: &'a str,
}

/// Scalar descriptive fields pulled from the header part of a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceFields {
    pub model: String,
    pub capacity: String,
    pub media_type: MediaType,
    /// Self-assessment text, "UNKNOWN" when the line is absent
    pub overall_health: String,
}

/// Complete health record for one device.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiskHealthRecord {
    /// Device name without the /dev/ prefix
    pub device_name: String,
    /// Manufacturer model name
    pub model: String,
    /// Capacity exactly as smartctl prints it
    pub capacity: String,
    /// Media family
    pub media_type: MediaType,
    /// Raw value of Power_Cycle_Count
    pub power_cycles: String,
    /// Power_On_Hours normalised to "<N> hours"
    pub power_on_hours: String,
    /// smartctl's own PASSED/FAILED verdict (or whatever text it printed)
    pub overall_health: String,
    /// Combined verdict
    pub smart_status: SmartStatus,
    /// Verbatim block text, kept for display and audit
    pub full_output: String,
}
