//! # Editor Module
//!
//! The editing engine, split the same way the data flows through it:
//!
//! - **io**: byte input, raw-mode terminal session, file storage
//! - **input**: decoding raw bytes into logical keys
//! - **models**: rows, the line buffer and the cursor/viewport state
//! - **views**: scroll math and frame rendering
//! - **controllers**: key dispatch, the save prompt and the quit confirmation

pub mod app;
pub mod controllers;
pub mod input;
pub mod io;
pub mod models;
pub mod views;

// Re-export main types for convenience
pub use app::run;
pub use controllers::{EditController, Flow, PromptInput, PromptStep, QuitDecision, QuitGuard};
pub use input::{ctrl_key, Key, KeyDecoder, BACKSPACE, ENTER};
pub use io::{
    ByteStream, FileStorage, MemoryStorage, MockByteStream, StdinByteStream, Storage,
    TerminalSession, TerminalWriter,
};
pub use models::{EditorState, LineBuffer, LogicalPosition, Row, ScreenSize, StatusMessage};
pub use views::ViewportRenderer;
