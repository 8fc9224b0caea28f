// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::io;

use anyhow::Result;
use clap::Parser;
use log::info;

use word_counter::{args::Args, config::Config, logging, menu::Menu};
use word_counter_core::{Adapters, VERSION};

fn main() -> Result<()> {
    let config = Config::try_from(Args::parse())?;
    logging::init(config.log_level);
    info!("word_counter v{VERSION} · report={} ({})", config.report_path.display(), config.report_format);

    let adapters = Adapters::new(config.report_format);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(adapters.analyzer(), &config, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
