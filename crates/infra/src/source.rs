// crates/infra/src/source.rs
use std::path::Path;

use log::debug;
use word_counter_domain::model::Document;
use word_counter_ports::source::DocumentSource;
use word_counter_shared_kernel::Result;

use crate::persistence::FileReader;

/// Text-mode reading: `\r\n` and a lone `\r` both become `\n`.
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Loads documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocumentSource;

impl DocumentSource for FsDocumentSource {
    fn load(&self, path: &Path) -> Result<Document> {
        let content = normalize_newlines(FileReader::read_utf8(path)?);
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        debug!("read {} bytes from {}", content.len(), path.display());
        Ok(Document::new(name, content))
    }
}
