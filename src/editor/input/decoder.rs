//! # Key Decoder
//!
//! Reads one logical key per call from a [`ByteStream`].
//!
//! Escape sequences are decoded by a table walk over the bytes read so far:
//!
//! ```text
//! ESC ──timeout──────────────────────────▶ Escape
//!  │
//!  ├─ '[' ──timeout──────────────────────▶ Escape
//!  │   ├─ digit ──timeout / not '~'──────▶ Escape
//!  │   │    └─ '~' ──▶ TILDE_KEYS[digit]  (miss ▶ Escape)
//!  │   └─ other ─────▶ CSI_KEYS[byte]     (miss ▶ Escape)
//!  ├─ 'O' ─────────────▶ SS3_KEYS[byte]   (miss ▶ Escape, timeout ▶ Escape)
//!  └─ other ─────────────────────────────▶ Escape (after consuming one more byte)
//! ```
//!
//! Every path ends in a key, so decoding never fails; only the byte source can.

use super::key::{Key, ESCAPE};
use crate::config::INPUT_POLL_TIMEOUT;
use crate::editor::io::ByteStream;
use anyhow::Result;
use std::time::Duration;

/// `ESC [ <digit> ~`
const TILDE_KEYS: &[(u8, Key)] = &[
    (b'1', Key::Home),
    (b'2', Key::Delete),
    (b'4', Key::End),
    (b'5', Key::PageUp),
    (b'6', Key::PageDown),
    (b'7', Key::Home),
    (b'8', Key::End),
];

/// `ESC [ <letter>`
const CSI_KEYS: &[(u8, Key)] = &[
    (b'A', Key::ArrowUp),
    (b'B', Key::ArrowDown),
    (b'C', Key::ArrowRight),
    (b'D', Key::ArrowLeft),
    (b'H', Key::Home),
    (b'F', Key::End),
];

/// `ESC O <letter>`
const SS3_KEYS: &[(u8, Key)] = &[(b'H', Key::Home), (b'F', Key::End)];

fn lookup(table: &[(u8, Key)], byte: u8) -> Key {
    table
        .iter()
        .find(|(b, _)| *b == byte)
        .map_or(Key::Escape, |(_, key)| *key)
}

/// Decode the rest of an escape sequence. `next` yields `None` when a read timed out.
fn decode_escape<F>(mut next: F) -> Result<Key>
where
    F: FnMut() -> Result<Option<u8>>,
{
    let Some(first) = next()? else {
        return Ok(Key::Escape);
    };
    let Some(second) = next()? else {
        return Ok(Key::Escape);
    };

    let key = match (first, second) {
        (b'[', digit) if digit.is_ascii_digit() => match next()? {
            Some(b'~') => lookup(TILDE_KEYS, digit),
            _ => Key::Escape,
        },
        (b'[', letter) => lookup(CSI_KEYS, letter),
        (b'O', letter) => lookup(SS3_KEYS, letter),
        _ => Key::Escape,
    };
    Ok(key)
}

/// Blocking key reader over a bounded-wait byte source
pub struct KeyDecoder<S: ByteStream> {
    stream: S,
    timeout: Duration,
}

impl<S: ByteStream> KeyDecoder<S> {
    pub fn new(stream: S) -> Self {
        Self::with_timeout(stream, INPUT_POLL_TIMEOUT)
    }

    pub fn with_timeout(stream: S, timeout: Duration) -> Self {
        Self { stream, timeout }
    }

    pub fn stream(&self) -> &S {
        &self.stream
    }

    pub fn stream_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Wait for the next keypress
    ///
    /// Polls that time out before the first byte are retried; only a real read failure
    /// is an error.
    pub fn read_key(&mut self) -> Result<Key> {
        let first = loop {
            if let Some(byte) = self.next_byte()? {
                break byte;
            }
        };

        let key = if first == ESCAPE {
            decode_escape(|| self.next_byte())?
        } else {
            Key::Byte(first)
        };

        tracing::debug!("decoded key {:?}", key);
        Ok(key)
    }

    /// One bounded wait for one byte
    fn next_byte(&mut self) -> Result<Option<u8>> {
        if self.stream.poll(self.timeout)? {
            Ok(Some(self.stream.read_byte()?))
        } else {
            Ok(None)
        }
    }
}
