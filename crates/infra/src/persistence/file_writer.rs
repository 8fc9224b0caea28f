// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create (or truncate) `path` behind a buffered writer.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Replace the contents of `path` with `data`.
    pub fn write_all<P: AsRef<Path>>(path: P, data: &[u8]) -> io::Result<()> {
        let mut w = Self::create(path)?;
        w.write_all(data)?;
        w.flush()
    }
}
