//! # termpad - Raw-Mode Terminal Text Editor
//!
//! A small single-file editor that drives the terminal directly: raw keystrokes in,
//! one redrawn frame out per keypress.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐  bytes  ┌────────────┐  Key  ┌────────────────┐
//! │ TerminalSession │────────▶│ KeyDecoder │──────▶│ EditController │
//! │  (raw mode)     │         └────────────┘       │                │
//! └─────────────────┘                              │ - dispatch     │
//!          ▲                                       │ - save/prompt  │
//!          │ one write per frame                   │ - quit guard   │
//!          │                                       └───────┬────────┘
//!   ┌──────┴───────────┐       scroll + draw               │ mutates
//!   │ ViewportRenderer │◀──────────────────────────── LineBuffer + EditorState
//!   └──────────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod editor;
pub mod logging;

// Re-export main types for easy access
pub use editor::*;
