//! # Mock I/O Implementations for Testing
//!
//! Provides mock implementations of ByteStream and Storage
//! for driving the editor without a terminal or a filesystem.

use super::{ByteStream, Storage};
use anyhow::{anyhow, Result};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock byte stream for testing
///
/// Each entry is either a byte or a pause. A pause makes exactly one `poll` time out,
/// which is how tests express "the user stopped typing here". Polling an exhausted
/// stream is an error, so a test can never hang waiting for input.
#[derive(Debug, Default)]
pub struct MockByteStream {
    input: VecDeque<Option<u8>>,
    polls: usize,
}

impl MockByteStream {
    /// Create a stream that yields `bytes` back to back
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            input: bytes.iter().copied().map(Some).collect(),
            polls: 0,
        }
    }

    /// Create an empty stream
    pub fn empty() -> Self {
        Self::default()
    }

    /// Queue more bytes
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied().map(Some));
    }

    /// Queue one timed-out poll
    pub fn push_pause(&mut self) {
        self.input.push_back(None);
    }

    /// Number of entries not consumed yet
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// Number of polls made so far
    pub fn poll_count(&self) -> usize {
        self.polls
    }
}

impl ByteStream for MockByteStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        self.polls += 1;
        match self.input.front() {
            Some(Some(_)) => Ok(true),
            Some(None) => {
                self.input.pop_front();
                Ok(false)
            }
            None => Err(anyhow!("No input available")),
        }
    }

    fn read_byte(&mut self) -> Result<u8> {
        match self.input.pop_front() {
            Some(Some(byte)) => Ok(byte),
            _ => Err(anyhow!("read without a ready byte")),
        }
    }
}

/// Type alias for the shared file map
type FileMap = Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>;

/// In-memory storage for testing
///
/// Clones share the same file map, so a test can keep a handle and inspect what the
/// editor saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: FileMap,
    fail_saves: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose saves always fail with a permission error
    pub fn failing() -> Self {
        Self {
            files: FileMap::default(),
            fail_saves: true,
        }
    }

    /// Seed a file
    pub fn insert(&self, path: impl Into<PathBuf>, bytes: &[u8]) {
        self.lock().insert(path.into(), bytes.to_vec());
    }

    /// Current contents of a file
    pub fn get(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.lock().get(path.as_ref()).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Vec<u8>>> {
        // A poisoned map only means another test thread panicked mid-insert.
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Storage for MemoryStorage {
    fn load(&self, path: &Path) -> Result<Vec<u8>> {
        self.get(path)
            .ok_or_else(|| anyhow!("failed to open {}: No such file", path.display()))
    }

    fn save(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        if self.fail_saves {
            return Err(anyhow!("Permission denied"));
        }
        self.insert(path, bytes);
        Ok(())
    }
}
