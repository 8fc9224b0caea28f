use clap::ValueEnum;
use word_counter_core::ports::report::ReportFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliReportFormat {
    Text,
    Json,
}

impl From<CliReportFormat> for ReportFormat {
    fn from(value: CliReportFormat) -> Self {
        match value {
            CliReportFormat::Text => ReportFormat::Text,
            CliReportFormat::Json => ReportFormat::Json,
        }
    }
}
