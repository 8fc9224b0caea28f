use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use word_counter_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> io::Result<File> {
        File::open(path)
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> io::Result<Vec<u8>> {
        let mut file = Self::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Read the entire file as UTF-8 text.
    ///
    /// A path that does not exist or names a directory is `NotFound`; bytes that
    /// do not decode are `Encoding`.
    pub fn read_utf8(path: &Path) -> InfraResult<String> {
        if path.is_dir() {
            return Err(InfrastructureError::NotFound { path: path.to_path_buf() });
        }

        let bytes = Self::read_to_end(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => InfrastructureError::NotFound { path: path.to_path_buf() },
            _ => InfrastructureError::FileRead { path: path.to_path_buf(), source },
        })?;

        String::from_utf8(bytes).map_err(|err| InfrastructureError::Encoding {
            path: path.to_path_buf(),
            source: err.utf8_error(),
        })
    }
}
