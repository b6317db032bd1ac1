// smartctl report parsing: segmentation, field extraction, attribute table, classification

pub mod attributes;
pub mod classifier;
pub mod fields;
pub mod segmenter;

use crate::models::{DeviceBlock, DiskHealthRecord};
use classifier::HealthSignals;
use tracing::debug;

/// Builds the health record for a single device block.
pub fn assemble_record(block: &DeviceBlock<'_>) -> DiskHealthRecord {
    let fields = fields::extract_fields(block.text);
    let attributes = attributes::parse_attributes(block.text);
    let (power_cycles, power_on_hours) = classifier::power_fields(&attributes);

    let smart_status = classifier::classify(&HealthSignals {
        media_type: fields.media_type,
        overall_health: &fields.overall_health,
        attributes: &attributes,
        text: block.text,
    });

    debug!(
        device = block.device,
        media = %fields.media_type,
        attributes = attributes.len(),
        status = %smart_status,
        "classified device"
    );

    DiskHealthRecord {
        device_name: block.device.to_string(),
        model: fields.model,
        capacity: fields.capacity,
        media_type: fields.media_type,
        power_cycles,
        power_on_hours,
        overall_health: fields.overall_health,
        smart_status,
        full_output: block.text.to_string(),
    }
}

/// Parses the concatenated smartctl output of one host into one record per
/// device, in report order.
///
/// Never fails: missing sections fall back to defaults and a report without
/// any device delimiter yields an empty vector.
pub fn parse_report(report: &str) -> Vec<DiskHealthRecord> {
    let records: Vec<_> = segmenter::split_devices(report)
        .iter()
        .map(assemble_record)
        .collect();
    debug!(devices = records.len(), "parsed smartctl report");
    records
}
