// src/presentation.rs
use std::io::{self, Write};

use word_counter_core::{
    domain::{
        analytics::{Lookup, RankedToken},
        model::Statistics,
    },
    error::{ErrorKind, WordCounterError},
};

const MENU_WIDTH: usize = 60;
const STATS_WIDTH: usize = 50;
const TOP_RULE_WIDTH: usize = 40;
const FILTER_RULE_WIDTH: usize = 50;

pub fn print_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(MENU_WIDTH))?;
    writeln!(out, "📚 CONTADOR DE PALAVRAS - MENU PRINCIPAL")?;
    writeln!(out, "{}", "=".repeat(MENU_WIDTH))?;
    writeln!(out, "1. 📁 Carregar arquivo de texto")?;
    writeln!(out, "2. 📊 Exibir estatísticas gerais")?;
    writeln!(out, "3. 📈 Exibir palavras mais frequentes")?;
    writeln!(out, "4. 🔍 Buscar palavra específica")?;
    writeln!(out, "5. 🔧 Filtrar palavras por tamanho")?;
    writeln!(out, "6. 💾 Salvar relatório")?;
    writeln!(out, "7. ❌ Sair")?;
    writeln!(out, "{}", "-".repeat(MENU_WIDTH))
}

pub fn print_statistics(out: &mut impl Write, stats: &Statistics) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(STATS_WIDTH))?;
    writeln!(out, "📊 ESTATÍSTICAS GERAIS")?;
    writeln!(out, "{}", "=".repeat(STATS_WIDTH))?;
    writeln!(out, "📝 Total de palavras: {}", stats.total_words)?;
    writeln!(out, "🔤 Palavras únicas: {}", stats.unique_words)?;
    writeln!(out, "📏 Total de caracteres: {}", stats.chars)?;
    writeln!(out, "📄 Total de linhas: {}", stats.lines)?;
    if let Some(top) = &stats.most_frequent {
        writeln!(out, "⭐ Palavra mais frequente: '{}' ({} vezes)", top.token, top.count)?;
    }
    Ok(())
}

/// Numbered ranking; `requested` is echoed in the header exactly as typed.
pub fn print_top_words(out: &mut impl Write, requested: i64, ranked: &[RankedToken]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "📈 TOP {requested} PALAVRAS MAIS FREQUENTES")?;
    writeln!(out, "{}", "-".repeat(TOP_RULE_WIDTH))?;
    for (i, entry) in ranked.iter().enumerate() {
        writeln!(out, "{:>2}. {:<20} ({:>3} vezes)", i + 1, entry.token, entry.count)?;
    }
    Ok(())
}

pub fn print_filtered_words(out: &mut impl Write, min: i64, max: i64, ranked: &[RankedToken]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🔍 PALAVRAS COM {min}-{max} CARACTERES")?;
    writeln!(out, "{}", "-".repeat(FILTER_RULE_WIDTH))?;
    for entry in ranked {
        writeln!(out, "{:<20} ({:>3} vezes)", entry.token, entry.count)?;
    }
    Ok(())
}

pub fn print_lookup(out: &mut impl Write, word: &str, lookup: Lookup) -> io::Result<()> {
    if lookup.found {
        writeln!(out, "✅ Palavra '{word}' encontrada {} vezes", lookup.count)
    } else {
        writeln!(out, "❌ Palavra '{word}' não encontrada no texto")
    }
}

pub fn print_loaded(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out, "✅ Arquivo '{name}' carregado com sucesso!")
}

pub fn print_report_saved(out: &mut impl Write, path: &std::path::Path) -> io::Result<()> {
    writeln!(out, "✅ Relatório salvo em '{}'", path.display())
}

pub fn print_error(out: &mut impl Write, err: &WordCounterError) -> io::Result<()> {
    writeln!(out, "❌ {}", describe_error(err))
}

/// Human-readable, user-facing text for an analyzer failure.
pub fn describe_error(err: &WordCounterError) -> String {
    match err.kind() {
        ErrorKind::NotFound => "Arquivo não encontrado. Verifique o caminho e tente novamente.".into(),
        ErrorKind::Encoding => "Erro de codificação. Tente um arquivo com codificação UTF-8.".into(),
        ErrorKind::EmptyInput => "Nenhum conteúdo para processar.".into(),
        ErrorKind::NotProcessed => "Carregue um arquivo primeiro!".into(),
        ErrorKind::InvalidInput => "Digite números válidos!".into(),
        ErrorKind::Io | ErrorKind::Serialization => format!("Erro de E/S: {err}"),
        ErrorKind::MalformedExpression | ErrorKind::MissingOperator => "Entrada inválida. Tente novamente.".into(),
        ErrorKind::InvalidOperator => "Operador inválido. Use +, -, * ou /.".into(),
        ErrorKind::DivisionByZero => "Erro: divisão por zero!".into(),
    }
}

/// Render a calculator result, always showing a decimal part for whole numbers.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "nan".to_owned()
    } else if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
