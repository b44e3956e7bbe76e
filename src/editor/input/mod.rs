//! # Input Decoding
//!
//! Turns the raw terminal byte stream into logical keys.

pub mod decoder;
pub mod key;

pub use decoder::KeyDecoder;
pub use key::{ctrl_key, Key, BACKSPACE, ENTER, ESCAPE};
