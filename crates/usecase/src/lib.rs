//! # Use Cases
//!
//! Application-level session logic.
//!
//! This crate coordinates domain logic and the ports that reach the
//! outside world:
//!
//! - [`analyzer`]: the text analysis session (load, process, query, export)
//! - [`calculator`]: one calculator prompt line at a time
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod analyzer;
pub mod calculator;
pub mod dto;

pub use analyzer::{FILTER_TOP_WORDS, TextAnalyzer};
pub use calculator::Calculator;
pub use dto::{CalculatorOutcome, Phase};
