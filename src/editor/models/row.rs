//! # Row Model
//!
//! One logical line of text and its tab-expanded display form.

use crate::config::TAB_STOP;

const TAB: u8 = b'\t';

/// A single line of the document
///
/// `chars` is the source of truth; `render` is rebuilt from it after every mutation so
/// the two can never be observed out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    chars: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    pub fn new(text: &[u8]) -> Self {
        let mut row = Self {
            chars: text.to_vec(),
            render: Vec::new(),
        };
        row.update_render();
        row
    }

    /// Raw bytes of the line
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Display bytes with tabs expanded
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Number of bytes in the line
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of display columns
    pub fn render_len(&self) -> usize {
        self.render.len()
    }

    /// Display column of the character at `column`
    pub fn render_column(&self, column: usize) -> usize {
        self.chars
            .iter()
            .take(column)
            .fold(0, |render_x, &byte| advance(render_x, byte))
    }

    /// Insert `byte` at `index`, clamped to the end of the line
    pub fn insert(&mut self, index: usize, byte: u8) {
        let index = index.min(self.chars.len());
        self.chars.insert(index, byte);
        self.update_render();
    }

    /// Remove the byte at `index`. Returns false if there is none.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.chars.len() {
            return false;
        }
        self.chars.remove(index);
        self.update_render();
        true
    }

    pub fn append(&mut self, text: &[u8]) {
        self.chars.extend_from_slice(text);
        self.update_render();
    }

    /// Cut the line at `at` and return the tail
    pub fn split_off(&mut self, at: usize) -> Vec<u8> {
        let tail = self.chars.split_off(at.min(self.chars.len()));
        self.update_render();
        tail
    }

    fn update_render(&mut self) {
        let tabs = self.chars.iter().filter(|&&b| b == TAB).count();
        let mut render = Vec::with_capacity(self.chars.len() + tabs * (TAB_STOP - 1));

        for &byte in &self.chars {
            if byte == TAB {
                let next = advance(render.len(), TAB);
                render.resize(next, b' ');
            } else {
                render.push(byte);
            }
        }

        self.render = render;
    }
}

/// Display column after drawing `byte` at `render_x`
fn advance(render_x: usize, byte: u8) -> usize {
    if byte == TAB {
        render_x + (TAB_STOP - render_x % TAB_STOP)
    } else {
        render_x + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_tab_should_render_as_full_tab_stop() {
        let row = Row::new(b"\tx");
        assert_eq!(row.render(), b"        x");
        assert_eq!(row.render_len(), 9);
    }

    #[test]
    fn tab_at_column_three_should_render_five_spaces() {
        let row = Row::new(b"abc\td");
        assert_eq!(row.render(), b"abc     d");
    }

    #[test]
    fn tab_at_stop_boundary_should_advance_full_stop() {
        let row = Row::new(b"12345678\t|");
        assert_eq!(row.render(), b"12345678        |");
    }

    #[test]
    fn render_column_should_follow_tab_expansion() {
        let row = Row::new(b"a\tb\tc");
        assert_eq!(row.render_column(0), 0);
        assert_eq!(row.render_column(1), 1);
        assert_eq!(row.render_column(2), 8);
        assert_eq!(row.render_column(3), 9);
        assert_eq!(row.render_column(4), 16);
        // Past the end is the end of the rendered line
        assert_eq!(row.render_column(99), row.render_len());
    }

    #[test]
    fn insert_then_remove_should_restore_row() {
        let original = Row::new(b"ab\tcd");
        let mut row = original.clone();

        row.insert(2, b'\t');
        assert_ne!(row, original);
        assert!(row.remove(2));

        assert_eq!(row, original);
    }

    #[test]
    fn insert_should_clamp_index_to_end() {
        let mut row = Row::new(b"ab");
        row.insert(42, b'c');
        assert_eq!(row.chars(), b"abc");
    }

    #[test]
    fn remove_past_end_should_be_noop() {
        let mut row = Row::new(b"ab");
        assert!(!row.remove(2));
        assert_eq!(row.chars(), b"ab");
    }

    #[test]
    fn split_off_should_keep_render_consistent() {
        let mut row = Row::new(b"one\ttwo");
        let tail = row.split_off(3);

        assert_eq!(tail, b"\ttwo");
        assert_eq!(row.render(), b"one");
    }
}
