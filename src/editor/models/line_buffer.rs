//! # Line Buffer Model
//!
//! Ordered rows of the open document plus the unsaved-changes flag.
//! Row indices are stable between mutations and are what the cursor and scroll
//! offsets refer to.

use super::row::Row;

/// The document being edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    rows: Vec<Row>,
    dirty: bool,
}

impl LineBuffer {
    /// Create new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a clean buffer from file contents
    ///
    /// Lines are split on `\n`; trailing `\n`/`\r` bytes are stripped from each line.
    /// A final newline does not produce an extra empty row.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buffer = Self::new();
        for line in bytes.split_inclusive(|&b| b == b'\n') {
            let end = line
                .iter()
                .rposition(|&b| b != b'\n' && b != b'\r')
                .map_or(0, |i| i + 1);
            buffer.insert_row(buffer.len(), &line[..end]);
        }
        buffer.dirty = false;
        buffer
    }

    /// Build a clean buffer from lines (test and tooling convenience)
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut buffer = Self::new();
        for line in lines {
            buffer.insert_row(buffer.len(), line.as_ref());
        }
        buffer.dirty = false;
        buffer
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Length of row `index`, or 0 for the virtual line past the end
    pub fn row_len(&self, index: usize) -> usize {
        self.rows.get(index).map_or(0, Row::len)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record that the buffer now matches what is on disk
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Insert a new row at `index`. No-op if `index > len`.
    pub fn insert_row(&mut self, index: usize, text: &[u8]) {
        if index > self.rows.len() {
            return;
        }
        self.rows.insert(index, Row::new(text));
        self.dirty = true;
    }

    /// Remove row `index`. No-op if it does not exist.
    pub fn delete_row(&mut self, index: usize) {
        if index >= self.rows.len() {
            return;
        }
        self.rows.remove(index);
        self.dirty = true;
    }

    /// Insert `byte` into row `row` at `index` (clamped to the row length)
    pub fn insert_char(&mut self, row: usize, index: usize, byte: u8) {
        if let Some(target) = self.rows.get_mut(row) {
            target.insert(index, byte);
            self.dirty = true;
        }
    }

    /// Remove the byte at `index` of row `row`. No-op past the end of the row.
    pub fn delete_char(&mut self, row: usize, index: usize) {
        if let Some(target) = self.rows.get_mut(row) {
            if target.remove(index) {
                self.dirty = true;
            }
        }
    }

    /// Append `text` to the end of row `row`
    pub fn append_text(&mut self, row: usize, text: &[u8]) {
        if let Some(target) = self.rows.get_mut(row) {
            target.append(text);
            self.dirty = true;
        }
    }

    /// Break row `y` at column `x`: row `y` keeps `[..x]`, a new row `y + 1` gets `[x..]`
    ///
    /// At column 0 an empty row is inserted above instead, which leaves the same content.
    /// On the virtual line past the end an empty row is appended.
    pub fn split_at(&mut self, y: usize, x: usize) {
        if y >= self.rows.len() || x == 0 {
            self.insert_row(y, b"");
            return;
        }

        let tail = self.rows[y].split_off(x);
        self.insert_row(y + 1, &tail);
    }

    /// Merge row `y` into the end of row `y - 1`
    ///
    /// Returns the length row `y - 1` had before the merge, which is where the cursor
    /// belongs afterwards. `None` when there is no previous row or no row `y`.
    pub fn join_with_previous(&mut self, y: usize) -> Option<usize> {
        if y == 0 || y >= self.rows.len() {
            return None;
        }

        let moved = self.rows.remove(y);
        let previous = &mut self.rows[y - 1];
        let joined_at = previous.len();
        previous.append(moved.chars());
        self.dirty = true;
        Some(joined_at)
    }

    /// On-disk form: every row followed by a single `\n`
    pub fn serialize(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|row| row.len() + 1).sum();
        let mut bytes = Vec::with_capacity(total);
        for row in &self.rows {
            bytes.extend_from_slice(row.chars());
            bytes.push(b'\n');
        }
        bytes
    }
}
