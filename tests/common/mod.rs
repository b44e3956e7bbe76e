//! Shared harness for driving the editor without a terminal.

#![allow(dead_code)]

use std::path::Path;
use termpad::{
    EditController, Flow, Key, KeyDecoder, MemoryStorage, MockByteStream, ScreenSize, Storage,
};

pub type TestEditor = EditController<MockByteStream, Vec<u8>>;

/// Editor on an 80x22 text area backed by the given storage
pub fn editor_with(storage: impl Storage + 'static) -> TestEditor {
    EditController::new(
        ScreenSize::new(22, 80),
        KeyDecoder::new(MockByteStream::empty()),
        Vec::new(),
        Box::new(storage),
    )
}

/// Editor with `name` already loaded from an in-memory file holding `contents`
pub fn editor_with_file(name: &str, contents: &[u8]) -> (TestEditor, MemoryStorage) {
    let storage = MemoryStorage::new();
    storage.insert(name, contents);
    let mut editor = editor_with(storage.clone());
    editor.open(Path::new(name)).expect("file should load");
    (editor, storage)
}

/// Feed raw terminal bytes and process keys until the input is used up
pub fn type_bytes(editor: &mut TestEditor, bytes: &[u8]) -> Flow {
    editor.keys_mut().stream_mut().push_bytes(bytes);
    let mut flow = Flow::Continue;
    while editor.keys_mut().stream_mut().remaining() > 0 {
        flow = editor.process_keypress().expect("key should be processed");
        if flow == Flow::Quit {
            break;
        }
    }
    flow
}

pub fn press(editor: &mut TestEditor, key: Key) -> Flow {
    editor.handle_key(key).expect("key should be handled")
}

pub fn cursor(editor: &TestEditor) -> (usize, usize) {
    let c = editor.state().cursor;
    (c.line, c.column)
}

pub fn lines(editor: &TestEditor) -> Vec<String> {
    editor
        .buffer()
        .rows()
        .iter()
        .map(|row| String::from_utf8_lossy(row.chars()).into_owned())
        .collect()
}

pub fn status(editor: &TestEditor) -> Option<String> {
    editor
        .state()
        .status_message()
        .map(|message| message.text().to_string())
}

pub fn screen(editor: &TestEditor) -> String {
    String::from_utf8_lossy(editor.output()).into_owned()
}
