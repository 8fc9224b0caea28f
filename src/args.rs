// src/args.rs
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

use crate::parsers;
use crate::value_enum::CliReportFormat;

#[derive(Parser, Debug)]
#[command(name = "word_counter", version, about = "Contador de palavras: estatísticas e frequência de palavras em arquivos de texto")]
pub struct Args {
    #[command(flatten)]
    pub report: ReportOptions,

    #[command(flatten)]
    pub verbosity: VerbosityOptions,

    /// Quantidade padrão de palavras no ranking (opção 3 do menu)
    #[arg(long, default_value_t = 10, value_parser = parsers::parse_positive_usize, help_heading = "Menu")]
    pub top: usize,

    /// Arquivo de texto carregado antes de exibir o menu
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct ReportOptions {
    /// Caminho padrão do relatório exportado
    #[arg(long = "report", default_value = "relatorio_palavras.txt", value_hint = ValueHint::FilePath, help_heading = "Relatório")]
    pub report_path: PathBuf,

    /// Formato do relatório exportado
    #[arg(long, value_enum, default_value = "text", help_heading = "Relatório")]
    pub report_format: CliReportFormat,
}

#[derive(ClapArgs, Debug, Clone, Copy, Default)]
pub struct VerbosityOptions {
    /// Mais detalhes no log (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Log")]
    pub verbose: u8,

    /// Apenas erros no log
    #[arg(short, long, conflicts_with = "verbose", global = true, help_heading = "Log")]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
#[command(name = "calculator", version, about = "Calculadora de terminal: soma, subtração, multiplicação e divisão")]
pub struct CalculatorArgs {
    #[command(flatten)]
    pub verbosity: VerbosityOptions,
}
