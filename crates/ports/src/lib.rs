//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: where document text comes from
//! - [`report`]: where exported reports go
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod report;
pub mod source;
