// domain analytics word segmentation
use std::sync::OnceLock;

use regex::Regex;

use crate::value_objects::LengthRange;

fn word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Letters, any numeric character (`²`, `½`) and `_`; combining marks end a word.
    RE.get_or_init(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is valid"))
}

/// Lowercase word tokens in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream(Vec<String>);

impl TokenStream {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Tokens whose character length lies inside `range`, in document order.
    pub fn within_length<'a>(&'a self, range: &'a LengthRange) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().filter(move |token| range.contains(token.chars().count()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Case-fold `text` and split it into maximal runs of letters, numerals and `_`.
pub fn tokenize(text: &str) -> TokenStream {
    let folded = text.to_lowercase();
    let tokens = word_pattern().find_iter(&folded).map(|m| m.as_str().to_owned()).collect();
    TokenStream(tokens)
}
