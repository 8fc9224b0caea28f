// crates/ports/src/report.rs
use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};
use word_counter_domain::model::Report;
use word_counter_shared_kernel::Result;

/// Serialization used when a report is exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Port for persisting an exported report, replacing whatever is at `path`.
pub trait ReportWriter {
    fn write_report(&self, path: &Path, report: &Report) -> Result<()>;
}
