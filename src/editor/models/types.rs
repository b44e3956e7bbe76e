//! # Core Types
//!
//! Positions and screen geometry shared by the models, views and controllers.

use crate::config::RESERVED_ROWS;
use anyhow::{bail, Result};

/// Logical cursor position: `line` indexes rows, `column` indexes bytes within the row
///
/// `line == row count` is the virtual line just past the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LogicalPosition {
    pub line: usize,
    pub column: usize,
}

impl LogicalPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn zero() -> Self {
        Self::new(0, 0)
    }
}

/// Size of the text area in character cells (status and message bars excluded)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub height: usize,
    pub width: usize,
}

impl ScreenSize {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Text area for a `columns` x `rows` terminal
    pub fn from_terminal(columns: u16, rows: u16) -> Result<Self> {
        if columns == 0 || rows <= RESERVED_ROWS {
            bail!("terminal too small: {columns}x{rows}");
        }
        Ok(Self::new(
            usize::from(rows - RESERVED_ROWS),
            usize::from(columns),
        ))
    }
}
