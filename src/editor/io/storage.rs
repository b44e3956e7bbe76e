//! Filesystem-backed document storage.

use super::Storage;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

/// Reads and writes documents on the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStorage;

impl FileStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for FileStorage {
    fn load(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).with_context(|| format!("failed to open {}", path.display()))
    }

    fn save(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true);
        #[cfg(unix)]
        options.mode(0o644);

        let mut file = options.open(path)?;
        // Truncate to the exact new length first so a shorter document leaves no tail.
        file.set_len(bytes.len() as u64)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        Ok(())
    }
}
