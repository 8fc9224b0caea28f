//! Facade over the word_counter layers, plus default wiring.
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod error;

pub use bootstrap::Adapters;
pub use word_counter_domain as domain;
pub use word_counter_infra as infrastructure;
pub use word_counter_ports as ports;
pub use word_counter_usecase as usecase;
pub use word_counter_usecase::{Calculator, CalculatorOutcome, Phase, TextAnalyzer};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
