#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod calculator_cli;
pub mod config;
pub mod logging;
pub mod menu;
pub mod parsers;
pub mod presentation;
pub mod value_enum;

pub use word_counter_core::VERSION;
