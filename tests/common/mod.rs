// tests/common/mod.rs
//! Shared fixtures for the integration suites.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Short Portuguese text with repeated words and mixed case.
pub const SAMPLE_TEXT: &str = "O gato e o cão.\nO GATO corre pelo jardim.\n";

/// A scratch directory that disappears with the value.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl TempWorkspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn create_binary(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }
}

/// Join menu answers into stdin text, one per line.
#[allow(dead_code)]
pub fn script(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
