// src/bin/calculator.rs
use std::io;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use word_counter::{args::CalculatorArgs, calculator_cli, logging};

fn main() -> Result<()> {
    let level: LevelFilter = CalculatorArgs::parse().into();
    logging::init(level);

    calculator_cli::run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
