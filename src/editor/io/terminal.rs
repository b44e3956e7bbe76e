//! # Terminal I/O Implementations
//!
//! Production implementations of the input side and the raw-mode session.
//! crossterm owns terminal modes and geometry; stdin bytes are read unbuffered so a poll
//! on the descriptor always reflects what the decoder has not consumed yet.

use super::ByteStream;
use crate::editor::models::ScreenSize;
use anyhow::{bail, Context, Result};
use crossterm::terminal;
use std::fs::File;
use std::io::{self, Write};
use std::os::fd::AsFd;
use std::time::Duration;

/// Unbuffered stdin reader with bounded-wait polling
pub struct StdinByteStream {
    fd: libc::c_int,
}

impl StdinByteStream {
    pub fn new() -> Self {
        Self {
            fd: libc::STDIN_FILENO,
        }
    }
}

impl ByteStream for StdinByteStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        let mut pollfd = libc::pollfd {
            fd: self.fd,
            events: libc::POLLIN,
            revents: 0,
        };
        let millis = libc::c_int::try_from(timeout.as_millis()).unwrap_or(libc::c_int::MAX);

        // SAFETY: `pollfd` is a valid, exclusively borrowed array of length 1.
        let ready = unsafe { libc::poll(&mut pollfd, 1, millis) };
        if ready < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                return Ok(false);
            }
            return Err(err).context("failed to poll stdin");
        }

        if ready == 0 {
            return Ok(false);
        }
        readiness(pollfd.revents)
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut byte: u8 = 0;
        loop {
            // SAFETY: reads at most one byte into a live local.
            let n = unsafe { libc::read(self.fd, (&mut byte as *mut u8).cast(), 1) };
            match n {
                1 => return Ok(byte),
                0 => bail!("stdin closed"),
                _ => {
                    let err = io::Error::last_os_error();
                    if err.kind() != io::ErrorKind::Interrupted {
                        return Err(err).context("failed to read stdin");
                    }
                }
            }
        }
    }
}

/// Interpret `revents` for a descriptor that `poll(2)` reported
///
/// POLLHUP counts as ready so the following read surfaces end of input. An error or
/// invalid descriptor with nothing to read would otherwise be retried forever.
fn readiness(revents: libc::c_short) -> Result<bool> {
    if revents & (libc::POLLIN | libc::POLLHUP) != 0 {
        return Ok(true);
    }
    if revents & libc::POLLNVAL != 0 {
        bail!("stdin is not a valid descriptor");
    }
    if revents & libc::POLLERR != 0 {
        bail!("error condition on stdin");
    }
    Ok(false)
}

impl Default for StdinByteStream {
    fn default() -> Self {
        Self::new()
    }
}

/// Exclusive raw-mode control of the terminal
///
/// crossterm saves the original attributes when raw mode is entered; this guard restores
/// them exactly once, either through `release` or when dropped (normal return, error
/// propagation or panic unwinding).
pub struct TerminalSession {
    active: bool,
    restore: fn() -> io::Result<()>,
}

impl TerminalSession {
    /// Switch the terminal into raw mode
    pub fn acquire() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        tracing::debug!("raw mode enabled");
        Ok(Self {
            active: true,
            restore: terminal::disable_raw_mode,
        })
    }

    /// Restore the original terminal attributes. Later calls are no-ops.
    pub fn release(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        (self.restore)().context("failed to disable raw mode")?;
        tracing::debug!("raw mode disabled");
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            tracing::error!("{e:#}");
        }
    }
}

/// Unbuffered handle on stdout
///
/// `std::io::Stdout` is line buffered and would split a frame at every `\r\n`. Writing
/// through a duplicate of the descriptor sends each frame in a single `write(2)`.
pub struct TerminalWriter {
    file: File,
}

impl TerminalWriter {
    pub fn new() -> Result<Self> {
        let fd = io::stdout()
            .as_fd()
            .try_clone_to_owned()
            .context("failed to duplicate stdout")?;
        Ok(Self {
            file: File::from(fd),
        })
    }
}

impl Write for TerminalWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.file.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Query the terminal and derive the text area, leaving room for the two bars
pub fn terminal_size() -> Result<ScreenSize> {
    let (columns, rows) = terminal::size().context("failed to query terminal size")?;
    ScreenSize::from_terminal(columns, rows)
}
