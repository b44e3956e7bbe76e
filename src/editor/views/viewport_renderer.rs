//! # Viewport Renderer
//!
//! Keeps the cursor inside the visible window and renders a complete frame
//! (text rows, status bar, message bar) into a single byte buffer.
//!
//! The frame is built with crossterm commands queued into a `Vec<u8>` and handed to the
//! caller, which writes it to the terminal in one call so a redraw never tears.

use crate::config::{NO_FILENAME, VERSION};
use crate::editor::models::{EditorState, LineBuffer};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::Write;
use std::time::Instant;

/// Renders the editor state into terminal output
#[derive(Debug, Clone)]
pub struct ViewportRenderer {
    banner: String,
}

impl ViewportRenderer {
    pub fn new() -> Self {
        Self {
            banner: format!("termpad -- version {VERSION}"),
        }
    }

    /// Welcome text shown on an empty buffer
    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Recompute the cursor's display column and move the viewport so it stays visible
    pub fn scroll(&self, state: &mut EditorState, buffer: &LineBuffer) {
        let cursor = state.cursor;
        state.render_column = buffer
            .row(cursor.line)
            .map_or(0, |row| row.render_column(cursor.column));

        let height = state.screen.height.max(1);
        if cursor.line < state.row_offset {
            state.row_offset = cursor.line;
        }
        if cursor.line >= state.row_offset + height {
            state.row_offset = cursor.line + 1 - height;
        }

        let width = state.screen.width.max(1);
        if state.render_column < state.column_offset {
            state.column_offset = state.render_column;
        }
        if state.render_column >= state.column_offset + width {
            state.column_offset = state.render_column + 1 - width;
        }
    }

    /// Render a full frame. `scroll` must have run for the current cursor.
    pub fn draw(&self, state: &EditorState, buffer: &LineBuffer, now: Instant) -> Result<Vec<u8>> {
        let mut frame = Vec::new();

        queue!(frame, Hide, MoveTo(0, 0))?;
        self.draw_rows(&mut frame, state, buffer)?;
        self.draw_status_bar(&mut frame, state, buffer)?;
        self.draw_message_bar(&mut frame, state, now)?;

        let row = state.cursor.line.saturating_sub(state.row_offset);
        let column = state.render_column.saturating_sub(state.column_offset);
        queue!(frame, MoveTo(to_cell(column), to_cell(row)), Show)?;

        Ok(frame)
    }

    fn draw_rows(&self, out: &mut Vec<u8>, state: &EditorState, buffer: &LineBuffer) -> Result<()> {
        let width = state.screen.width;

        for screen_row in 0..state.screen.height {
            let file_row = state.row_offset + screen_row;

            match buffer.row(file_row) {
                Some(row) => {
                    let render = row.render();
                    let start = state.column_offset.min(render.len());
                    let end = (start + width).min(render.len());
                    out.write_all(&render[start..end])?;
                }
                None if buffer.is_empty() && screen_row == state.screen.height / 3 => {
                    self.draw_banner(out, width)?;
                }
                None => out.write_all(b"~")?,
            }

            queue!(out, Clear(ClearType::UntilNewLine), Print("\r\n"))?;
        }
        Ok(())
    }

    fn draw_banner(&self, out: &mut Vec<u8>, width: usize) -> Result<()> {
        let banner = truncate(&self.banner, width);
        let mut padding = (width - banner.len()) / 2;
        if padding > 0 {
            out.write_all(b"~")?;
            padding -= 1;
        }
        out.write_all(" ".repeat(padding).as_bytes())?;
        out.write_all(banner.as_bytes())?;
        Ok(())
    }

    fn draw_status_bar(
        &self,
        out: &mut Vec<u8>,
        state: &EditorState,
        buffer: &LineBuffer,
    ) -> Result<()> {
        let width = state.screen.width;
        let name = state
            .filename()
            .map_or_else(|| NO_FILENAME.to_string(), |p| p.display().to_string());
        let modified = if buffer.is_dirty() { "(modified)" } else { "" };
        let status = format!("{name} {modified}");
        let position = format!("{}/{}", state.cursor.line + 1, buffer.len());

        let left = truncate(&status, width);
        let mut line = String::with_capacity(width);
        line.push_str(left);
        let remaining = width - left.len();
        if remaining >= position.len() {
            line.push_str(&" ".repeat(remaining - position.len()));
            line.push_str(&position);
        } else {
            line.push_str(&" ".repeat(remaining));
        }

        queue!(
            out,
            SetAttribute(Attribute::Reverse),
            Print(line),
            SetAttribute(Attribute::Reset),
            Print("\r\n")
        )?;
        Ok(())
    }

    fn draw_message_bar(&self, out: &mut Vec<u8>, state: &EditorState, now: Instant) -> Result<()> {
        queue!(out, Clear(ClearType::UntilNewLine))?;
        if let Some(message) = state.status_message().filter(|m| m.is_visible(now)) {
            queue!(out, Print(truncate(message.text(), state.screen.width)))?;
        }
        Ok(())
    }
}

impl Default for ViewportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Longest prefix of `text` that fits in `width` columns, cut on a char boundary
fn truncate(text: &str, width: usize) -> &str {
    if text.len() <= width {
        return text;
    }
    let mut end = width;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

fn to_cell(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::models::{LogicalPosition, ScreenSize};
    use std::time::Duration;

    fn state(height: usize, width: usize) -> EditorState {
        EditorState::new(ScreenSize::new(height, width))
    }

    fn render_frame(state: &mut EditorState, buffer: &LineBuffer, now: Instant) -> String {
        let renderer = ViewportRenderer::new();
        renderer.scroll(state, buffer);
        let frame = renderer.draw(state, buffer, now).unwrap();
        String::from_utf8(frame).unwrap()
    }

    /// Text rows of a frame with control sequences removed
    fn screen_lines(frame: &str) -> Vec<String> {
        frame
            .split("\r\n")
            .map(|line| {
                line.replace("\x1b[?25l", "")
                    .replace("\x1b[1;1H", "")
                    .replace("\x1b[K", "")
            })
            .collect()
    }

    #[test]
    fn scroll_should_follow_cursor_down_and_back_up() {
        let renderer = ViewportRenderer::new();
        let buffer = LineBuffer::from_lines((0..50).map(|i| format!("line {i}")));
        let mut state = state(10, 40);

        state.cursor = LogicalPosition::new(25, 0);
        renderer.scroll(&mut state, &buffer);
        assert_eq!(state.row_offset, 16);

        state.cursor = LogicalPosition::new(3, 0);
        renderer.scroll(&mut state, &buffer);
        assert_eq!(state.row_offset, 3);
    }

    #[test]
    fn scroll_should_be_idempotent() {
        let renderer = ViewportRenderer::new();
        let buffer = LineBuffer::from_lines(["x".repeat(100)]);
        let mut state = state(5, 20);
        state.cursor = LogicalPosition::new(0, 70);

        renderer.scroll(&mut state, &buffer);
        let first = (state.row_offset, state.column_offset, state.render_column);
        renderer.scroll(&mut state, &buffer);

        assert_eq!(
            (state.row_offset, state.column_offset, state.render_column),
            first
        );
        assert_eq!(state.column_offset, 51);
    }

    #[test]
    fn scroll_should_use_render_column_for_tabs() {
        let renderer = ViewportRenderer::new();
        let buffer = LineBuffer::from_lines(["\t\tx"]);
        let mut state = state(5, 10);
        state.cursor = LogicalPosition::new(0, 2);

        renderer.scroll(&mut state, &buffer);

        assert_eq!(state.render_column, 16);
        assert_eq!(state.column_offset, 7);
    }

    #[test]
    fn scroll_should_treat_virtual_line_as_column_zero() {
        let renderer = ViewportRenderer::new();
        let buffer = LineBuffer::from_lines(["abc"]);
        let mut state = state(5, 10);
        state.cursor = LogicalPosition::new(1, 0);
        state.column_offset = 4;

        renderer.scroll(&mut state, &buffer);

        assert_eq!(state.render_column, 0);
        assert_eq!(state.column_offset, 0);
    }

    #[test]
    fn draw_should_hide_cursor_first_and_show_it_last() {
        let mut state = state(3, 20);
        let frame = render_frame(&mut state, &LineBuffer::from_lines(["hi"]), Instant::now());

        assert!(frame.starts_with("\x1b[?25l\x1b[1;1H"));
        assert!(frame.ends_with("\x1b[1;1H\x1b[?25h"));
    }

    #[test]
    fn draw_should_fill_rows_past_end_with_tildes() {
        let mut state = state(3, 20);
        let frame = render_frame(&mut state, &LineBuffer::from_lines(["hello"]), Instant::now());
        let lines = screen_lines(&frame);

        assert_eq!(lines[0], "hello");
        assert_eq!(lines[1], "~");
        assert_eq!(lines[2], "~");
    }

    #[test]
    fn draw_should_show_centered_banner_for_empty_buffer() {
        let mut state = state(9, 60);
        let frame = render_frame(&mut state, &LineBuffer::new(), Instant::now());
        let lines = screen_lines(&frame);
        let banner = ViewportRenderer::new().banner().to_string();

        let padding = (60 - banner.len()) / 2;
        let expected = format!("~{}{}", " ".repeat(padding - 1), banner);
        assert_eq!(lines[3], expected);
        assert_eq!(lines[0], "~");
    }

    #[test]
    fn draw_should_truncate_banner_to_width() {
        let mut state = state(3, 6);
        let frame = render_frame(&mut state, &LineBuffer::new(), Instant::now());
        let lines = screen_lines(&frame);

        assert_eq!(lines[1], "termpa");
    }

    #[test]
    fn draw_should_clip_rows_to_column_window() {
        let mut state = state(2, 4);
        state.column_offset = 2;
        let buffer = LineBuffer::from_lines(["abcdefgh", "a"]);
        let renderer = ViewportRenderer::new();
        let frame = renderer.draw(&state, &buffer, Instant::now()).unwrap();
        let lines = screen_lines(&String::from_utf8(frame).unwrap());

        assert_eq!(lines[0], "cdef");
        assert_eq!(lines[1], "");
    }

    #[test]
    fn status_bar_should_be_exactly_screen_width() {
        let mut state = state(2, 30);
        state.set_filename("notes.txt");
        let mut buffer = LineBuffer::from_lines(["a", "b", "c"]);
        buffer.insert_char(0, 0, b'x');
        let frame = render_frame(&mut state, &buffer, Instant::now());

        let expected = format!("notes.txt (modified){}1/3", " ".repeat(30 - 20 - 3));
        assert!(frame.contains(&format!("\x1b[7m{expected}\x1b[0m\r\n")));
    }

    #[test]
    fn status_bar_should_use_placeholder_and_drop_counter_when_narrow() {
        let mut state = state(1, 8);
        let frame = render_frame(&mut state, &LineBuffer::new(), Instant::now());

        assert!(frame.contains("\x1b[7m[No File\x1b[0m"));
    }

    #[test]
    fn message_bar_should_hide_expired_messages() {
        let start = Instant::now();
        let mut state = state(2, 40);
        state.set_status_message_at("3 bytes written to disk", start);
        let buffer = LineBuffer::new();

        let fresh = render_frame(&mut state, &buffer, start + Duration::from_secs(1));
        let stale = render_frame(&mut state, &buffer, start + Duration::from_secs(6));

        assert!(fresh.contains("3 bytes written to disk"));
        assert!(!stale.contains("bytes written"));
    }

    #[test]
    fn cursor_should_be_placed_relative_to_viewport() {
        let mut state = state(5, 10);
        let buffer = LineBuffer::from_lines((0..20).map(|_| "\tabc"));
        state.cursor = LogicalPosition::new(12, 2);
        let frame = render_frame(&mut state, &buffer, Instant::now());

        // Line 12 lands on screen row 5; render column 9 still fits the 10-column window
        assert_eq!(state.row_offset, 8);
        assert!(frame.ends_with("\x1b[5;10H\x1b[?25h"));
    }
}
