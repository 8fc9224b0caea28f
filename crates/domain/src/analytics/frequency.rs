// domain analytics frequency counting
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{
    analytics::rank_by_count,
    value_objects::WordCount,
};

/// A token paired with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedToken {
    pub token: String,
    pub count: usize,
}

impl RankedToken {
    pub fn new(token: impl Into<String>, count: usize) -> Self {
        Self { token: token.into(), count }
    }
}

/// Result of looking a word up: whether it occurs, and how often.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Lookup {
    pub found: bool,
    pub count: usize,
}

/// Token occurrence counts, iterated in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<RankedToken>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::default();
        for token in tokens {
            table.record(token);
        }
        table
    }

    fn record(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(token.to_owned(), self.entries.len());
                self.entries.push(RankedToken::new(token, 1));
            }
        }
    }

    /// Exact-key count, `None` when the token never occurred.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).map(|&slot| self.entries[slot].count)
    }

    /// Case-insensitive lookup of a single word.
    pub fn lookup(&self, word: &str) -> Lookup {
        match self.get(&word.to_lowercase()) {
            Some(count) => Lookup { found: true, count },
            None => Lookup::default(),
        }
    }

    pub fn unique(&self) -> WordCount {
        WordCount::new(self.entries.len())
    }

    pub fn total(&self) -> WordCount {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedToken> {
        self.entries.iter()
    }

    /// The `n` most frequent tokens, ties broken by first occurrence.
    pub fn most_common(&self, n: usize) -> Vec<RankedToken> {
        rank_by_count(self.entries.clone(), n)
    }
}
