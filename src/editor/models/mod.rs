//! # Models
//!
//! Text storage and the editor's cursor/viewport state.

pub mod editor_state;
pub mod line_buffer;
pub mod row;
pub mod types;

pub use editor_state::{EditorState, StatusMessage};
pub use line_buffer::LineBuffer;
pub use row::Row;
pub use types::{LogicalPosition, ScreenSize};
