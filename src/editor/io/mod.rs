//! # I/O Abstraction Layer
//!
//! Provides trait abstractions for the editor's two external collaborators so the
//! control loop can run without a terminal or a filesystem.
//!
//! ## Architecture
//!
//! ```text
//! Production:  EditController ──▶ StdinByteStream ──▶ poll(2)/read(2) on stdin
//!                             ──▶ TerminalWriter  ──▶ write(2) on stdout
//!                             ──▶ FileStorage     ──▶ std::fs
//!
//! Testing:     EditController ──▶ MockByteStream  ──▶ VecDeque<Option<u8>>
//!                             ──▶ MemoryStorage   ──▶ HashMap<PathBuf, Vec<u8>>
//! ```

use anyhow::Result;
use std::path::Path;
use std::time::Duration;

pub mod mock;
pub mod storage;
pub mod terminal;

pub use mock::{MemoryStorage, MockByteStream};
pub use storage::FileStorage;
pub use terminal::{terminal_size, StdinByteStream, TerminalSession, TerminalWriter};

/// Raw input byte source with bounded-wait semantics
///
/// `poll` returning `Ok(false)` means the wait elapsed with nothing to read. That is the
/// retryable case and is never reported as an error; `Err` is a real input failure.
pub trait ByteStream {
    /// Wait up to `timeout` for a byte to become available
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read one byte. Only called after `poll` returned true.
    fn read_byte(&mut self) -> Result<u8>;
}

/// Load/store collaborator for the document bytes
pub trait Storage {
    /// Read the whole file
    fn load(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replace the file's contents with exactly `bytes`
    fn save(&self, path: &Path, bytes: &[u8]) -> Result<()>;
}
