// Health classification: an ordered rule list folded with a monotonic max

use crate::models::{MediaType, NOT_AVAILABLE, SmartStatus};
use crate::parser::attributes::AttributeMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// SSD wear attribute (percentage of rated life left).
pub const REMAINING_LIFETIME: &str = "Remaining_Lifetime_Perc";
/// HDD attributes where any non-zero count signals surface degradation.
pub const SECTOR_HEALTH_ATTRIBUTES: [&str; 3] = [
    "Reallocated_Sector_Ct",
    "Current_Pending_Sector",
    "Offline_Uncorrectable",
];
pub const POWER_CYCLE_COUNT: &str = "Power_Cycle_Count";
pub const POWER_ON_HOURS: &str = "Power_On_Hours";

/// Literal smartctl prints in front of firmware and error-log warnings.
const WARNING_MARKER: &str = "Warning!";

static HOURS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)h").expect("hours pattern is valid"));

/// Everything the rules look at for one device.
#[derive(Clone, Copy, Debug)]
pub struct HealthSignals<'a> {
    pub media_type: MediaType,
    pub overall_health: &'a str,
    pub attributes: &'a AttributeMap<'a>,
    /// Full block text, searched for the warning marker
    pub text: &'a str,
}

impl HealthSignals<'_> {
    /// Attribute raw value as an integer; missing or non-numeric values are `None`.
    fn int_attribute(&self, name: &str) -> Option<i64> {
        self.attributes.get(name).and_then(|raw| raw.trim().parse().ok())
    }
}

/// A named classification rule. `verdict` returns the severity it asserts,
/// or `None` when it has nothing to say about the device.
pub struct Rule {
    pub name: &'static str,
    pub verdict: fn(&HealthSignals<'_>) -> Option<SmartStatus>,
}

fn ssd_remaining_lifetime(s: &HealthSignals<'_>) -> Option<SmartStatus> {
    if s.media_type != MediaType::Ssd {
        return None;
    }
    match s.int_attribute(REMAINING_LIFETIME)? {
        v if v < 10 => Some(SmartStatus::Bad),
        v if v < 20 => Some(SmartStatus::Warning),
        _ => None,
    }
}

fn hdd_sector_errors(s: &HealthSignals<'_>) -> Option<SmartStatus> {
    if s.media_type != MediaType::Hdd {
        return None;
    }
    SECTOR_HEALTH_ATTRIBUTES
        .iter()
        .any(|name| s.int_attribute(name).is_some_and(|v| v > 0))
        .then_some(SmartStatus::Warning)
}

fn self_assessment_passed(s: &HealthSignals<'_>) -> Option<SmartStatus> {
    (s.overall_health == "PASSED").then_some(SmartStatus::Ok)
}

fn self_assessment_failed(s: &HealthSignals<'_>) -> Option<SmartStatus> {
    (s.overall_health == "FAILED").then_some(SmartStatus::Bad)
}

fn warning_in_output(s: &HealthSignals<'_>) -> Option<SmartStatus> {
    s.text.contains(WARNING_MARKER).then_some(SmartStatus::Warning)
}

/// Rules in evaluation order. Results are combined with `SmartStatus::escalate`,
/// so a rule can only raise the status and nothing downgrades BAD.
pub static RULES: [Rule; 5] = [
    Rule { name: "ssd_remaining_lifetime", verdict: ssd_remaining_lifetime },
    Rule { name: "hdd_sector_errors", verdict: hdd_sector_errors },
    Rule { name: "self_assessment_passed", verdict: self_assessment_passed },
    Rule { name: "self_assessment_failed", verdict: self_assessment_failed },
    Rule { name: "warning_in_output", verdict: warning_in_output },
];

/// Runs every rule in order and returns the most severe verdict, starting
/// from `SmartStatus::Unknown`.
pub fn classify(signals: &HealthSignals<'_>) -> SmartStatus {
    RULES.iter().fold(SmartStatus::Unknown, |status, rule| match (rule.verdict)(signals) {
        Some(verdict) => {
            let next = status.escalate(verdict);
            debug!(rule = rule.name, %verdict, from = %status, to = %next, "health rule fired");
            next
        }
        None => status,
    })
}

/// Normalises a Power_On_Hours raw value to "<N> hours".
/// Values like "17658h+45m+47.610s" keep only the hour count.
pub fn format_power_on_hours(raw: &str) -> String {
    match HOURS_RE.captures(raw).and_then(|c| c.get(1)) {
        Some(hours) => format!("{} hours", hours.as_str()),
        None => format!("{raw} hours"),
    }
}

/// Power cycle count and formatted power-on hours, "N/A" when absent.
pub fn power_fields(attributes: &AttributeMap<'_>) -> (String, String) {
    let cycles = attributes
        .get(POWER_CYCLE_COUNT)
        .map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string());
    let hours = attributes
        .get(POWER_ON_HOURS)
        .map_or_else(|| NOT_AVAILABLE.to_string(), |v| format_power_on_hours(v));
    (cycles, hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(media_type: MediaType, health: &str, attrs: &[(&'static str, &'static str)], text: &str) -> SmartStatus {
        let attributes: AttributeMap<'static> = attrs.iter().copied().collect();
        classify(&HealthSignals {
            media_type,
            overall_health: health,
            attributes: &attributes,
            text,
        })
    }

    #[test]
    fn ssd_lifetime_thresholds() {
        assert_eq!(status(MediaType::Ssd, "PASSED", &[(REMAINING_LIFETIME, "5")], ""), SmartStatus::Bad);
        assert_eq!(status(MediaType::Ssd, "PASSED", &[(REMAINING_LIFETIME, "9")], ""), SmartStatus::Bad);
        assert_eq!(status(MediaType::Ssd, "PASSED", &[(REMAINING_LIFETIME, "10")], ""), SmartStatus::Warning);
        assert_eq!(status(MediaType::Ssd, "PASSED", &[(REMAINING_LIFETIME, "15")], ""), SmartStatus::Warning);
        assert_eq!(status(MediaType::Ssd, "PASSED", &[(REMAINING_LIFETIME, "20")], ""), SmartStatus::Ok);
        assert_eq!(status(MediaType::Ssd, "PASSED", &[(REMAINING_LIFETIME, "50")], ""), SmartStatus::Ok);
    }

    #[test]
    fn lifetime_ignored_on_hdd() {
        assert_eq!(status(MediaType::Hdd, "PASSED", &[(REMAINING_LIFETIME, "5")], ""), SmartStatus::Ok);
    }

    #[test]
    fn hdd_sector_counts() {
        assert_eq!(status(MediaType::Hdd, "PASSED", &[("Reallocated_Sector_Ct", "0")], ""), SmartStatus::Ok);
        assert_eq!(status(MediaType::Hdd, "PASSED", &[("Reallocated_Sector_Ct", "3")], ""), SmartStatus::Warning);
        assert_eq!(
            status(
                MediaType::Hdd,
                "PASSED",
                &[("Reallocated_Sector_Ct", "0"), ("Current_Pending_Sector", "0"), ("Offline_Uncorrectable", "2")],
                ""
            ),
            SmartStatus::Warning
        );
    }

    #[test]
    fn sector_counts_ignored_on_ssd() {
        assert_eq!(status(MediaType::Ssd, "PASSED", &[("Reallocated_Sector_Ct", "3")], ""), SmartStatus::Ok);
    }

    #[test]
    fn malformed_numbers_are_ignored() {
        assert_eq!(status(MediaType::Ssd, "PASSED", &[(REMAINING_LIFETIME, "5%")], ""), SmartStatus::Ok);
        assert_eq!(
            status(MediaType::Hdd, "PASSED", &[("Reallocated_Sector_Ct", "n/a"), ("Current_Pending_Sector", "1")], ""),
            SmartStatus::Warning
        );
        assert_eq!(status(MediaType::Hdd, "", &[("Offline_Uncorrectable", "0x10")], ""), SmartStatus::Unknown);
    }

    #[test]
    fn failed_always_wins() {
        assert_eq!(status(MediaType::Ssd, "FAILED", &[(REMAINING_LIFETIME, "90")], ""), SmartStatus::Bad);
        assert_eq!(status(MediaType::Hdd, "FAILED", &[("Reallocated_Sector_Ct", "4")], "Warning!"), SmartStatus::Bad);
        assert_eq!(status(MediaType::Unknown, "FAILED", &[], ""), SmartStatus::Bad);
    }

    #[test]
    fn warning_marker_never_downgrades_bad() {
        assert_eq!(status(MediaType::Ssd, "PASSED", &[(REMAINING_LIFETIME, "3")], "Warning! x"), SmartStatus::Bad);
        assert_eq!(status(MediaType::Hdd, "PASSED", &[], "Warning! ATA error count"), SmartStatus::Warning);
        assert_eq!(status(MediaType::Hdd, "PASSED", &[], "warning! lowercase"), SmartStatus::Ok);
    }

    #[test]
    fn unknown_media_rests_on_self_assessment() {
        let attrs = [(REMAINING_LIFETIME, "1"), ("Reallocated_Sector_Ct", "100")];
        assert_eq!(status(MediaType::Unknown, "PASSED", &attrs, ""), SmartStatus::Ok);
        assert_eq!(status(MediaType::Unknown, "UNKNOWN", &attrs, ""), SmartStatus::Unknown);
        assert_eq!(status(MediaType::Unknown, "UNKNOWN", &attrs, "Warning!"), SmartStatus::Warning);
    }

    #[test]
    fn other_self_assessment_text_leaves_unknown() {
        assert_eq!(status(MediaType::Hdd, "UNKNOWN!", &[], ""), SmartStatus::Unknown);
    }

    #[test]
    fn each_rule_only_raises() {
        let attributes: AttributeMap<'static> =
            [(REMAINING_LIFETIME, "15"), ("Reallocated_Sector_Ct", "1")].into_iter().collect();
        let signals = HealthSignals {
            media_type: MediaType::Ssd,
            overall_health: "PASSED",
            attributes: &attributes,
            text: "Warning!",
        };
        let mut status = SmartStatus::Unknown;
        for rule in &RULES {
            let next = (rule.verdict)(&signals).map_or(status, |v| status.escalate(v));
            assert!(next >= status, "{} lowered {status} to {next}", rule.name);
            status = next;
        }
        assert_eq!(status, classify(&signals));
    }

    #[test]
    fn power_on_hours_formats() {
        assert_eq!(format_power_on_hours("17658h+45m+47.610s"), "17658 hours");
        assert_eq!(format_power_on_hours("579"), "579 hours");
        assert_eq!(format_power_on_hours("1234 (76 43 0)"), "1234 (76 43 0) hours");
    }

    #[test]
    fn power_fields_default_to_na() {
        let empty = AttributeMap::new();
        assert_eq!(power_fields(&empty), ("N/A".to_string(), "N/A".to_string()));

        let attrs: AttributeMap<'static> =
            [(POWER_CYCLE_COUNT, "1042"), (POWER_ON_HOURS, "17658h+45m+47.610s")].into_iter().collect();
        assert_eq!(power_fields(&attrs), ("1042".to_string(), "17658 hours".to_string()));
    }
}
