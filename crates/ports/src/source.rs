// crates/ports/src/source.rs
use std::path::Path;

use word_counter_domain::model::Document;
use word_counter_shared_kernel::Result;

/// Port for loading a whole document into memory.
///
/// Implementations report a missing file as `NotFound` and undecodable bytes as
/// `Encoding`; anything else is an I/O failure.
pub trait DocumentSource {
    fn load(&self, path: &Path) -> Result<Document>;
}
