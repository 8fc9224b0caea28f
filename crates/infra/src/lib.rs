// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod report;
pub mod source;

pub use report::FsReportWriter;
pub use source::FsDocumentSource;
