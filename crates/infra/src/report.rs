// crates/infra/src/report.rs
use std::{io::Write, path::Path};

use log::debug;
use word_counter_domain::model::Report;
use word_counter_ports::report::{ReportFormat, ReportWriter};
use word_counter_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

pub mod formatters;

pub use formatters::{output_json, output_text};

/// Writes reports to the local filesystem in the configured format.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReportWriter {
    format: ReportFormat,
}

impl FsReportWriter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }
}

/// Render `report` into `out` using `format`.
pub fn render(report: &Report, format: ReportFormat, out: &mut impl Write) -> Result<()> {
    match format {
        ReportFormat::Text => output_text(report, out),
        ReportFormat::Json => output_json(report, out),
    }
}

impl ReportWriter for FsReportWriter {
    fn write_report(&self, path: &Path, report: &Report) -> Result<()> {
        let mut buf = Vec::new();
        render(report, self.format, &mut buf)?;
        FileWriter::write_all(path, &buf)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
        debug!("wrote {} report ({} bytes) to {}", self.format, buf.len(), path.display());
        Ok(())
    }
}
