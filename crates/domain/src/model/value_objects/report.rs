use serde::Serialize;

use crate::{analytics::RankedToken, model::Statistics};

/// Number of ranked words written to an exported report.
pub const REPORT_TOP_WORDS: usize = 20;

/// Everything an exported report contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub source: String,
    pub statistics: Statistics,
    pub top_words: Vec<RankedToken>,
}
