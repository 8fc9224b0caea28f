// src/menu.rs
use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use word_counter_core::{
    Phase, TextAnalyzer,
    domain::value_objects::LengthRange,
    error::PresentationError,
};

use crate::{config::Config, parsers::parse_int_or, presentation};

/// Actions offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    Statistics,
    TopWords,
    Search,
    FilterByLength,
    SaveReport,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = PresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Load),
            "2" => Ok(Self::Statistics),
            "3" => Ok(Self::TopWords),
            "4" => Ok(Self::Search),
            "5" => Ok(Self::FilterByLength),
            "6" => Ok(Self::SaveReport),
            "7" => Ok(Self::Exit),
            other => Err(PresentationError::InvalidMenuOption { input: other.to_owned() }),
        }
    }
}

/// Map signed user input onto a length window; a negative maximum matches nothing.
fn length_range(min: i64, max: i64) -> LengthRange {
    match usize::try_from(max) {
        Err(_) => LengthRange::new(1, 0),
        Ok(max) => LengthRange::new(usize::try_from(min).unwrap_or(0), max),
    }
}

/// Console loop driving a [`TextAnalyzer`] from line-oriented input.
pub struct Menu<'a, R, W> {
    analyzer: TextAnalyzer<'a>,
    config: &'a Config,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(analyzer: TextAnalyzer<'a>, config: &'a Config, input: R, out: W) -> Self {
        Self { analyzer, config, input, out }
    }

    pub fn analyzer(&self) -> &TextAnalyzer<'a> {
        &self.analyzer
    }

    /// Run until the user picks "exit" or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        if let Some(path) = self.config.initial_file.clone() {
            self.load(&path)?;
        }

        loop {
            presentation::print_menu(&mut self.out)?;
            let Some(line) = self.prompt("Escolha uma opção (1-7): ")? else {
                writeln!(self.out)?;
                self.farewell()?;
                break;
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => {
                    self.farewell()?;
                    break;
                }
                Ok(choice) => self.dispatch(choice)?,
                Err(_) => writeln!(self.out, "❌ Opção inválida! Escolha entre 1-7.")?,
            }
        }
        self.out.flush()
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<()> {
        if choice == MenuChoice::Load {
            if let Some(path) = self.prompt("Digite o caminho do arquivo: ")? {
                self.load(Path::new(&path))?;
            }
            return Ok(());
        }

        if self.analyzer.phase() != Phase::Processed {
            return writeln!(self.out, "❌ Carregue um arquivo primeiro!");
        }

        match choice {
            MenuChoice::Statistics => self.show_statistics(),
            MenuChoice::TopWords => self.show_top_words(),
            MenuChoice::Search => self.search(),
            MenuChoice::FilterByLength => self.filter_by_length(),
            MenuChoice::SaveReport => self.save_report(),
            MenuChoice::Load | MenuChoice::Exit => Ok(()),
        }
    }

    fn load(&mut self, path: &Path) -> io::Result<()> {
        if let Err(err) = self.analyzer.load(path) {
            return presentation::print_error(&mut self.out, &err);
        }
        presentation::print_loaded(&mut self.out, self.analyzer.document_name().unwrap_or_default())?;
        if let Err(err) = self.analyzer.process() {
            presentation::print_error(&mut self.out, &err)?;
        }
        Ok(())
    }

    fn show_statistics(&mut self) -> io::Result<()> {
        match self.analyzer.statistics() {
            Ok(stats) => presentation::print_statistics(&mut self.out, stats),
            Err(err) => presentation::print_error(&mut self.out, &err),
        }
    }

    fn show_top_words(&mut self) -> io::Result<()> {
        let default = i64::try_from(self.config.default_top).unwrap_or(i64::MAX);
        let prompt = format!("Quantas palavras exibir? (padrão: {default}): ");
        let Some(line) = self.prompt(&prompt)? else {
            return Ok(());
        };
        let requested = parse_int_or("quantidade", &line, default).unwrap_or(default);

        match self.analyzer.top_tokens(usize::try_from(requested).unwrap_or(0)) {
            Ok(ranked) => presentation::print_top_words(&mut self.out, requested, &ranked),
            Err(err) => presentation::print_error(&mut self.out, &err),
        }
    }

    fn search(&mut self) -> io::Result<()> {
        let Some(word) = self.prompt("Digite a palavra para buscar: ")? else {
            return Ok(());
        };
        if word.is_empty() {
            return Ok(());
        }
        match self.analyzer.lookup(&word) {
            Ok(lookup) => presentation::print_lookup(&mut self.out, &word, lookup),
            Err(err) => presentation::print_error(&mut self.out, &err),
        }
    }

    fn filter_by_length(&mut self) -> io::Result<()> {
        let min_default = i64::try_from(LengthRange::DEFAULT_MIN).unwrap_or(1);
        let max_default = i64::try_from(LengthRange::DEFAULT_MAX).unwrap_or(100);

        let Some(min) = self.prompt_number("mínimo", &format!("Tamanho mínimo (padrão: {min_default}): "), min_default)?
        else {
            return Ok(());
        };
        let Some(max) = self.prompt_number("máximo", &format!("Tamanho máximo (padrão: {max_default}): "), max_default)?
        else {
            return Ok(());
        };

        match self.analyzer.filter_by_length(length_range(min, max)) {
            Ok(ranked) => presentation::print_filtered_words(&mut self.out, min, max, &ranked),
            Err(err) => presentation::print_error(&mut self.out, &err),
        }
    }

    fn save_report(&mut self) -> io::Result<()> {
        let default = self.config.report_path.display().to_string();
        let prompt = format!("Nome do arquivo de relatório (padrão: {default}): ");
        let Some(line) = self.prompt(&prompt)? else {
            return Ok(());
        };
        let path = if line.is_empty() { self.config.report_path.clone() } else { PathBuf::from(line) };

        match self.analyzer.export_report(&path) {
            Ok(()) => presentation::print_report_saved(&mut self.out, &path),
            Err(err) => writeln!(self.out, "❌ Erro ao salvar relatório: {err}"),
        }
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.out, "👋 Obrigado por usar o Contador de Palavras!")
    }

    /// Ask for a number. `Ok(None)` means input ended or the reply was rejected.
    fn prompt_number(&mut self, field: &str, prompt: &str, default: i64) -> io::Result<Option<i64>> {
        let Some(line) = self.prompt(prompt)? else {
            return Ok(None);
        };
        match parse_int_or(field, &line, default) {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.out, "❌ Digite números válidos!")?;
                Ok(None)
            }
        }
    }

    /// Print `text` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}
