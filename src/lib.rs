// Parser and health classifier for multi-device smartctl reports

// Collector contract helpers (script, device filter, stderr vetting)
pub mod collector;
// Error types for I/O and collector failures
pub mod error;
// Data models for records and intermediate blocks
pub mod models;
// Report segmentation, field extraction and classification
pub mod parser;

pub use error::{ReportError, Result};
pub use models::{DiskHealthRecord, MediaType, SmartStatus};
pub use parser::parse_report;
