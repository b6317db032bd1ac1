// Scalar field extraction from the information section of a device block

use crate::models::{DeviceFields, MediaType, NOT_AVAILABLE};
use once_cell::sync::Lazy;
use regex::Regex;

/// Overall health value used when the self-assessment line is missing.
pub const UNKNOWN_HEALTH: &str = "UNKNOWN";

/// Rotation Rate value smartctl prints for flash media.
const SOLID_STATE_MARKER: &str = "Solid State Device";

fn label_re(label: &str) -> Regex {
    Regex::new(&format!(r"(?m){}:[ \t]*(.*)$", regex::escape(label))).expect("label pattern is valid")
}

static MODEL_RE: Lazy<Regex> = Lazy::new(|| label_re("Device Model"));
static CAPACITY_RE: Lazy<Regex> = Lazy::new(|| label_re("User Capacity"));
static ROTATION_RE: Lazy<Regex> = Lazy::new(|| label_re("Rotation Rate"));
static HEALTH_RE: Lazy<Regex> = Lazy::new(|| label_re("SMART overall-health self-assessment test result"));

/// Value of the first line carrying the label, trimmed.
fn extract<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text).and_then(|c| c.get(1)).map(|m| m.as_str().trim())
}

/// Pulls model, capacity, media type and overall health out of a block.
/// Each field is looked up independently; missing labels fall back to defaults.
pub fn extract_fields(text: &str) -> DeviceFields {
    let media_type = match extract(&ROTATION_RE, text) {
        Some(rate) if rate.contains(SOLID_STATE_MARKER) => MediaType::Ssd,
        Some(_) => MediaType::Hdd,
        None => MediaType::Unknown,
    };

    DeviceFields {
        model: extract(&MODEL_RE, text).unwrap_or(NOT_AVAILABLE).to_string(),
        capacity: extract(&CAPACITY_RE, text).unwrap_or(NOT_AVAILABLE).to_string(),
        media_type,
        overall_health: extract(&HEALTH_RE, text).unwrap_or(UNKNOWN_HEALTH).to_string(),
    }
}
