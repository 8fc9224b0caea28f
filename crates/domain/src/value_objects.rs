//! Value objects used by the analysis and query operations.

pub mod length_range;

pub use length_range::LengthRange;
pub use word_counter_shared_kernel::value_objects::{CharCount, LineCount, WordCount};
