// crates/infra/src/report/formatters/json.rs
use std::io::Write;

use word_counter_domain::model::Report;
use word_counter_shared_kernel::Result;

pub fn output_json(report: &Report, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
