// src/logging.rs
use std::io::Write;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Route `log` records to stderr so prompts on stdout stay clean.
///
/// `RUST_LOG`, when set, overrides `level`.
pub fn init(level: LevelFilter) {
    let _ = Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init();
}
