use serde::{Deserialize, Serialize};

use crate::{
    analytics::{FrequencyTable, RankedToken},
    model::Document,
    value_objects::{CharCount, LineCount, WordCount},
};

/// Snapshot of the headline numbers for one processed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_words: WordCount,
    pub unique_words: WordCount,
    pub chars: CharCount,
    pub lines: LineCount,
    pub most_frequent: Option<RankedToken>,
}

impl Statistics {
    pub fn compute(document: &Document, table: &FrequencyTable) -> Self {
        Self {
            total_words: table.total(),
            unique_words: table.unique(),
            chars: document.char_count(),
            lines: document.line_count(),
            most_frequent: table.most_common(1).into_iter().next(),
        }
    }
}
