use std::path::Path;

use log::{debug, info};
use word_counter_domain::{
    analytics::{FrequencyTable, Lookup, RankedToken, TokenStream, tokenize},
    model::{Document, REPORT_TOP_WORDS, Report, Statistics},
    value_objects::LengthRange,
};
use word_counter_ports::{report::ReportWriter, source::DocumentSource};
use word_counter_shared_kernel::{ApplicationError, DomainError, ErrorContext, Result};

use crate::dto::Phase;

/// Number of entries returned by a length-filtered query.
pub const FILTER_TOP_WORDS: usize = 10;

/// Everything derived from one document by [`TextAnalyzer::process`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct Analysis {
    tokens: TokenStream,
    table: FrequencyTable,
    statistics: Statistics,
}

impl Analysis {
    fn compute(document: &Document) -> Self {
        let tokens = tokenize(document.content());
        let table = FrequencyTable::from_tokens(tokens.iter());
        let statistics = Statistics::compute(document, &table);
        Self { tokens, table, statistics }
    }
}

/// Interactive analysis session over a single document.
///
/// Derived data only exists alongside the document it came from: a new
/// `load` drops it, so queries never see stale results.
pub struct TextAnalyzer<'a> {
    source: &'a dyn DocumentSource,
    writer: &'a dyn ReportWriter,
    document: Option<Document>,
    analysis: Option<Analysis>,
}

impl<'a> TextAnalyzer<'a> {
    pub fn new(source: &'a dyn DocumentSource, writer: &'a dyn ReportWriter) -> Self {
        Self { source, writer, document: None, analysis: None }
    }

    pub fn phase(&self) -> Phase {
        match (&self.document, &self.analysis) {
            (None, _) => Phase::Unloaded,
            (Some(_), None) => Phase::Loaded,
            (Some(_), Some(_)) => Phase::Processed,
        }
    }

    pub fn document_name(&self) -> Option<&str> {
        self.document.as_ref().map(Document::name)
    }

    /// Replace the current document with the contents of `path`.
    ///
    /// On failure the previous document and its analysis are kept.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let document = self.source.load(path)?;
        info!("loaded '{}' ({} chars)", document.name(), document.char_count());
        self.document = Some(document);
        self.analysis = None;
        Ok(())
    }

    /// Tokenize and count the loaded document.
    pub fn process(&mut self) -> Result<&Statistics> {
        let document = self
            .document
            .as_ref()
            .filter(|doc| !doc.is_empty())
            .ok_or(DomainError::EmptyInput)?;

        let analysis = Analysis::compute(document);
        debug!(
            "processed '{}': {} tokens, {} unique",
            document.name(),
            analysis.statistics.total_words,
            analysis.statistics.unique_words
        );
        Ok(&self.analysis.insert(analysis).statistics)
    }

    /// `load` followed by `process`.
    pub fn load_and_process(&mut self, path: &Path) -> Result<&Statistics> {
        self.load(path)?;
        self.process()
    }

    pub fn statistics(&self) -> Result<&Statistics> {
        Ok(&self.processed("statistics")?.statistics)
    }

    /// The `n` most frequent tokens, ties broken by first occurrence.
    pub fn top_tokens(&self, n: usize) -> Result<Vec<RankedToken>> {
        Ok(self.processed("top_tokens")?.table.most_common(n))
    }

    pub fn lookup(&self, word: &str) -> Result<Lookup> {
        Ok(self.processed("lookup")?.table.lookup(word))
    }

    /// Top tokens among those whose length falls in `range`, counted afresh.
    pub fn filter_by_length(&self, range: LengthRange) -> Result<Vec<RankedToken>> {
        let analysis = self.processed("filter_by_length")?;
        if range.is_empty() {
            return Ok(Vec::new());
        }
        let filtered = FrequencyTable::from_tokens(analysis.tokens.within_length(&range));
        Ok(filtered.most_common(FILTER_TOP_WORDS))
    }

    pub fn report(&self) -> Result<Report> {
        let analysis = self.processed("report")?;
        Ok(Report {
            source: self.document_name().unwrap_or_default().to_owned(),
            statistics: analysis.statistics.clone(),
            top_words: analysis.table.most_common(REPORT_TOP_WORDS),
        })
    }

    /// Write the current report to `path`, replacing any existing file.
    pub fn export_report(&self, path: &Path) -> Result<()> {
        let report = self.report()?;
        self.writer
            .write_report(path, &report)
            .with_context(|| format!("exporting report to '{}'", path.display()))?;
        info!("report for '{}' saved to {}", report.source, path.display());
        Ok(())
    }

    fn processed(&self, operation: &'static str) -> Result<&Analysis> {
        self.analysis
            .as_ref()
            .ok_or_else(|| ApplicationError::NotProcessed { operation }.into())
    }
}
