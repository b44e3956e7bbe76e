//! # Edit Controller
//!
//! The controller owns the editor and runs the main loop: redraw, read one key,
//! dispatch it. All state lives here and is passed explicitly to the renderer, so the
//! whole loop can be driven from tests with a mock byte stream and a `Vec<u8>` screen.

use super::prompt::{PromptInput, PromptStep};
use super::quit_guard::{QuitDecision, QuitGuard};
use crate::editor::input::{Key, KeyDecoder, ENTER};
use crate::editor::io::{ByteStream, Storage};
use crate::editor::models::{EditorState, LineBuffer, LogicalPosition, ScreenSize};
use crate::editor::views::ViewportRenderer;
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

const SAVE_PROMPT: &str = "Save as: {} (ESC to cancel)";
const QUIT_WARNING: &str = "File has unsaved changes. Press Ctrl+Q one more time to quit.";

/// Whether the main loop keeps going after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The main editor controller
pub struct EditController<S: ByteStream, W: Write> {
    state: EditorState,
    buffer: LineBuffer,
    keys: KeyDecoder<S>,
    output: W,
    renderer: ViewportRenderer,
    storage: Box<dyn Storage>,
    quit_guard: QuitGuard,
}

impl<S: ByteStream, W: Write> EditController<S, W> {
    /// Create a controller with an empty, unnamed buffer
    pub fn new(
        screen: ScreenSize,
        keys: KeyDecoder<S>,
        output: W,
        storage: Box<dyn Storage>,
    ) -> Self {
        Self {
            state: EditorState::new(screen),
            buffer: LineBuffer::new(),
            keys,
            output,
            renderer: ViewportRenderer::new(),
            storage,
            quit_guard: QuitGuard::new(),
        }
    }

    /// Load `path` into the buffer and adopt it as the save target
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let bytes = self.storage.load(path)?;
        self.buffer = LineBuffer::from_bytes(&bytes);
        self.state.set_filename(path);
        tracing::info!(
            "opened {} ({} bytes, {} rows)",
            path.display(),
            bytes.len(),
            self.buffer.len()
        );
        Ok(())
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn keys_mut(&mut self) -> &mut KeyDecoder<S> {
        &mut self.keys
    }

    pub fn quit_guard(&self) -> &QuitGuard {
        &self.quit_guard
    }

    /// Run until the user quits. The screen is cleared on the way out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.refresh_screen()?;
            if self.process_keypress()? == Flow::Quit {
                break;
            }
        }
        tracing::info!("quit requested");
        self.clear_screen()
    }

    /// Scroll, draw and flush one frame
    pub fn refresh_screen(&mut self) -> Result<()> {
        self.renderer.scroll(&mut self.state, &self.buffer);
        let frame = self.renderer.draw(&self.state, &self.buffer, Instant::now())?;
        self.output.write_all(&frame)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn clear_screen(&mut self) -> Result<()> {
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one key and dispatch it
    pub fn process_keypress(&mut self) -> Result<Flow> {
        let key = self.keys.read_key()?;
        self.handle_key(key)
    }

    /// Dispatch a decoded key
    pub fn handle_key(&mut self, key: Key) -> Result<Flow> {
        if key.is_ctrl(b'q') {
            match self.quit_guard.on_quit(self.buffer.is_dirty()) {
                QuitDecision::Quit => return Ok(Flow::Quit),
                QuitDecision::Confirm => {
                    self.state.set_status_message(QUIT_WARNING);
                    return Ok(Flow::Continue);
                }
            }
        }

        match key {
            Key::Byte(ENTER) => self.insert_newline(),
            k if k.is_ctrl(b's') => self.save()?,
            k if k.is_ctrl(b'l') => {}
            k if k.is_erase() => self.erase(k == Key::Delete),
            Key::Home => self.state.cursor.column = 0,
            Key::End => {
                let line = self.state.cursor.line;
                if let Some(row) = self.buffer.row(line) {
                    self.state.cursor.column = row.len();
                }
            }
            Key::PageUp | Key::PageDown => self.page(key),
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => {
                self.move_cursor(key);
            }
            Key::Escape => {}
            Key::Byte(byte) => self.insert_char(byte),
            // Covered by the erase guard above
            Key::Delete => {}
        }

        self.quit_guard.reset();
        Ok(Flow::Continue)
    }

    /// Apply an arrow key. Returns whether the cursor moved.
    pub fn move_cursor(&mut self, key: Key) -> bool {
        let before = self.state.cursor;
        let LogicalPosition {
            mut line,
            mut column,
        } = before;
        let rows = self.buffer.len();

        match key {
            Key::ArrowLeft => {
                if column > 0 {
                    column -= 1;
                } else if line > 0 {
                    line -= 1;
                    column = self.buffer.row_len(line);
                }
            }
            Key::ArrowRight => {
                if line < rows {
                    if column < self.buffer.row_len(line) {
                        column += 1;
                    } else if line + 1 < rows {
                        line += 1;
                        column = 0;
                    }
                }
            }
            Key::ArrowUp => line = line.saturating_sub(1),
            Key::ArrowDown => {
                if line < rows {
                    line += 1;
                }
            }
            _ => {}
        }

        column = column.min(self.buffer.row_len(line));
        self.state.cursor = LogicalPosition::new(line, column);
        self.state.cursor != before
    }

    fn page(&mut self, key: Key) {
        let height = self.state.screen.height;
        let direction = if key == Key::PageUp {
            self.state.cursor.line = self.state.row_offset;
            Key::ArrowUp
        } else {
            let bottom = (self.state.row_offset + height).saturating_sub(1);
            self.state.cursor.line = bottom.min(self.buffer.len());
            Key::ArrowDown
        };

        for _ in 0..height {
            self.move_cursor(direction);
        }
        // Also clamps the column when the screen has no rows to move through
        self.move_cursor(Key::Escape);
    }

    fn insert_char(&mut self, byte: u8) {
        let LogicalPosition { line, column } = self.state.cursor;
        if line == self.buffer.len() {
            self.buffer.insert_row(line, b"");
        }
        self.buffer.insert_char(line, column, byte);
        self.state.cursor.column += 1;
    }

    fn insert_newline(&mut self) {
        let LogicalPosition { line, column } = self.state.cursor;
        self.buffer.split_at(line, column);
        self.state.cursor = LogicalPosition::new(line + 1, 0);
    }

    /// Backspace, or Delete when `forward` is set
    fn erase(&mut self, forward: bool) {
        // Delete removes the character under the cursor: step over it, then erase backwards
        if forward && !self.move_cursor(Key::ArrowRight) {
            return;
        }

        let LogicalPosition { line, column } = self.state.cursor;
        if line >= self.buffer.len() {
            return;
        }

        if column > 0 {
            self.buffer.delete_char(line, column - 1);
            self.state.cursor.column -= 1;
        } else if let Some(joined_at) = self.buffer.join_with_previous(line) {
            self.state.cursor = LogicalPosition::new(line - 1, joined_at);
        }
    }

    /// Write the buffer to its file, asking for a name first if it has none
    pub fn save(&mut self) -> Result<()> {
        let path = match self.state.filename() {
            Some(path) => path.to_path_buf(),
            None => match self.prompt(SAVE_PROMPT)? {
                Some(name) => {
                    let path = PathBuf::from(name);
                    self.state.set_filename(path.clone());
                    path
                }
                None => {
                    self.state.set_status_message("Save aborted.");
                    return Ok(());
                }
            },
        };

        let bytes = self.buffer.serialize();
        match self.storage.save(&path, &bytes) {
            Ok(()) => {
                self.buffer.mark_clean();
                tracing::info!("wrote {} bytes to {}", bytes.len(), path.display());
                self.state
                    .set_status_message(format!("{} bytes written to disk", bytes.len()));
            }
            Err(e) => {
                tracing::warn!("save to {} failed: {e:#}", path.display());
                self.state
                    .set_status_message(format!("Error writing to disk: {e}"));
            }
        }
        Ok(())
    }

    /// Modal single-line input on the message bar
    ///
    /// Owns the screen until the user submits (non-empty) or cancels with Escape.
    pub fn prompt(&mut self, template: &str) -> Result<Option<String>> {
        let mut input = PromptInput::new();
        loop {
            self.state.set_status_message(input.display(template));
            self.refresh_screen()?;

            let key = self.keys.read_key()?;
            match input.handle_key(key) {
                PromptStep::Continue => {}
                PromptStep::Cancel => {
                    self.state.clear_status_message();
                    return Ok(None);
                }
                PromptStep::Submit(text) => {
                    self.state.clear_status_message();
                    return Ok(Some(text));
                }
            }
        }
    }
}
