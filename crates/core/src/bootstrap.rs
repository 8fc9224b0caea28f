use word_counter_infra::{FsDocumentSource, FsReportWriter};
use word_counter_ports::report::ReportFormat;
use word_counter_usecase::TextAnalyzer;

/// Filesystem-backed adapters the binaries run against.
#[derive(Debug, Clone, Copy, Default)]
pub struct Adapters {
    source: FsDocumentSource,
    writer: FsReportWriter,
}

impl Adapters {
    pub fn new(format: ReportFormat) -> Self {
        Self { source: FsDocumentSource, writer: FsReportWriter::new(format) }
    }

    /// A fresh, unloaded analysis session bound to these adapters.
    pub fn analyzer(&self) -> TextAnalyzer<'_> {
        TextAnalyzer::new(&self.source, &self.writer)
    }
}
