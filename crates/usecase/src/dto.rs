/// Where a [`TextAnalyzer`](crate::TextAnalyzer) session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unloaded,
    Loaded,
    Processed,
}

/// What a calculator line asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculatorOutcome {
    Exit,
    Value(f64),
}
