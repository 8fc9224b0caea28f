// crates/infra/src/report/formatters/text.rs
use std::io::Write;

use word_counter_domain::model::Report;
use word_counter_shared_kernel::Result;

const TITLE: &str = "RELATÓRIO DE ANÁLISE DE TEXTO";
const RULE_WIDTH: usize = 50;

pub fn output_text(report: &Report, out: &mut impl Write) -> Result<()> {
    let stats = &report.statistics;

    writeln!(out, "{TITLE}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out)?;

    writeln!(out, "ESTATÍSTICAS GERAIS:")?;
    writeln!(out, "Total de palavras: {}", stats.total_words)?;
    writeln!(out, "Palavras únicas: {}", stats.unique_words)?;
    writeln!(out, "Total de caracteres: {}", stats.chars)?;
    writeln!(out, "Total de linhas: {}", stats.lines)?;
    writeln!(out)?;

    writeln!(out, "PALAVRAS MAIS FREQUENTES:")?;
    for entry in &report.top_words {
        writeln!(out, "{}: {}", entry.token, entry.count)?;
    }
    Ok(())
}
