//! # Prompt Input
//!
//! Line editing for the modal status-bar prompt. The controller owns the read/redraw
//! loop; this type only decides what each key does to the input.

use crate::editor::input::{Key, ENTER};

/// What the prompt loop should do after a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStep {
    Continue,
    Submit(String),
    Cancel,
}

/// Text typed into the prompt so far
#[derive(Debug, Clone, Default)]
pub struct PromptInput {
    text: String,
}

impl PromptInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render `template` with its `{}` placeholder replaced by the current input
    pub fn display(&self, template: &str) -> String {
        template.replacen("{}", &self.text, 1)
    }

    pub fn handle_key(&mut self, key: Key) -> PromptStep {
        if key.is_erase() {
            self.text.pop();
            return PromptStep::Continue;
        }

        match key {
            Key::Escape => PromptStep::Cancel,
            Key::Byte(ENTER) if !self.text.is_empty() => {
                PromptStep::Submit(std::mem::take(&mut self.text))
            }
            Key::Byte(byte) if byte.is_ascii() && !byte.is_ascii_control() => {
                self.text.push(char::from(byte));
                PromptStep::Continue
            }
            _ => PromptStep::Continue,
        }
    }
}
