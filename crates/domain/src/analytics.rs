pub mod frequency;
pub mod rank;
pub mod tokenize;

pub use frequency::{FrequencyTable, Lookup, RankedToken};
pub use rank::rank_by_count;
pub use tokenize::{TokenStream, tokenize};
