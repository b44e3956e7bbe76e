//! # Controllers
//!
//! Map decoded keys onto buffer mutations and cursor movement, and run the modal
//! flows (filename prompt, quit confirmation).

pub mod edit_controller;
pub mod prompt;
pub mod quit_guard;

pub use edit_controller::{EditController, Flow};
pub use prompt::{PromptInput, PromptStep};
pub use quit_guard::{QuitDecision, QuitGuard, QuitState};
