// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use log::LevelFilter;
use word_counter_core::ports::report::ReportFormat;

use crate::args::{Args, CalculatorArgs, VerbosityOptions};

pub const DEFAULT_REPORT_PATH: &str = "relatorio_palavras.txt";
pub const DEFAULT_TOP: usize = 10;

/// Resolved settings for the word counter session.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub initial_file: Option<PathBuf>,
    #[builder(default = "DEFAULT_TOP")]
    pub default_top: usize,
    #[builder(default = "PathBuf::from(DEFAULT_REPORT_PATH)")]
    pub report_path: PathBuf,
    #[builder(default)]
    pub report_format: ReportFormat,
    #[builder(default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_file: None,
            default_top: DEFAULT_TOP,
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            report_format: ReportFormat::default(),
            log_level: LevelFilter::Warn,
        }
    }
}

impl From<VerbosityOptions> for LevelFilter {
    fn from(v: VerbosityOptions) -> Self {
        if v.quiet {
            return LevelFilter::Error;
        }
        match v.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigBuilderError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let format: ReportFormat = args.report.report_format.into();
        let level: LevelFilter = args.verbosity.into();

        ConfigBuilder::default()
            .initial_file(args.file)
            .default_top(args.top)
            .report_path(args.report.report_path)
            .report_format(format)
            .log_level(level)
            .build()
    }
}

impl From<CalculatorArgs> for LevelFilter {
    fn from(args: CalculatorArgs) -> Self {
        args.verbosity.into()
    }
}
