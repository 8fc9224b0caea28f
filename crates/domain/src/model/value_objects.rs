pub mod report;
pub mod statistics;

pub use report::{Report, REPORT_TOP_WORDS};
pub use statistics::Statistics;
