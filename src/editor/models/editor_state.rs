//! # Editor State Model
//!
//! Cursor, viewport and message-bar state for the single open buffer.

use super::types::{LogicalPosition, ScreenSize};
use crate::config::STATUS_MESSAGE_TIMEOUT;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Transient message shown on the message bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    set_at: Instant,
}

impl StatusMessage {
    pub fn new<S: Into<String>>(text: S, set_at: Instant) -> Self {
        Self {
            text: text.into(),
            set_at,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the message is still young enough to be drawn at `now`
    pub fn is_visible(&self, now: Instant) -> bool {
        !self.text.is_empty() && now.saturating_duration_since(self.set_at) < STATUS_MESSAGE_TIMEOUT
    }
}

/// Everything about the editor except the text itself
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Cursor in buffer coordinates (`column` is a byte index into the row)
    pub cursor: LogicalPosition,

    /// Display column of the cursor; recomputed by every scroll
    pub render_column: usize,

    /// First buffer row shown on screen
    pub row_offset: usize,

    /// First display column shown on screen
    pub column_offset: usize,

    /// Text area size, fixed at startup
    pub screen: ScreenSize,

    filename: Option<PathBuf>,
    status: Option<StatusMessage>,
}

impl EditorState {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            cursor: LogicalPosition::zero(),
            render_column: 0,
            row_offset: 0,
            column_offset: 0,
            screen,
            filename: None,
            status: None,
        }
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: impl Into<PathBuf>) {
        self.filename = Some(filename.into());
    }

    /// Set the message bar text, timestamped now
    pub fn set_status_message<S: Into<String>>(&mut self, message: S) {
        self.set_status_message_at(message, Instant::now());
    }

    pub fn set_status_message_at<S: Into<String>>(&mut self, message: S, at: Instant) {
        self.status = Some(StatusMessage::new(message, at));
    }

    pub fn clear_status_message(&mut self) {
        self.status = None;
    }

    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }
}
