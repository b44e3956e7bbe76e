//! End-to-end editing through the real key decoder and controller.

mod common;

use common::*;
use termpad::{Flow, Key, MemoryStorage, BACKSPACE};

#[test]
fn backspace_at_start_of_last_line_should_join_it_onto_previous() {
    let (mut editor, _) = editor_with_file("three.txt", b"a\nb\nc\n");

    // Two ArrowDown sequences put the cursor at column 0 of the third line
    type_bytes(&mut editor, b"\x1b[B\x1b[B");
    assert_eq!(cursor(&editor), (2, 0));

    type_bytes(&mut editor, &[BACKSPACE]);

    assert_eq!(lines(&editor), vec!["a", "bc"]);
    assert_eq!(cursor(&editor), (1, 1));
    assert!(editor.buffer().is_dirty());
}

#[test]
fn typing_into_empty_buffer_should_create_rows() {
    let mut editor = editor_with(MemoryStorage::new());

    type_bytes(&mut editor, b"hello\rworld");

    assert_eq!(lines(&editor), vec!["hello", "world"]);
    assert_eq!(cursor(&editor), (1, 5));
    assert_eq!(editor.buffer().serialize(), b"hello\nworld\n");
}

#[test]
fn enter_at_line_start_should_push_line_down() {
    let (mut editor, _) = editor_with_file("doc.txt", b"first\n");

    type_bytes(&mut editor, b"\r");

    assert_eq!(lines(&editor), vec!["", "first"]);
    assert_eq!(cursor(&editor), (1, 0));
}

#[test]
fn escape_sequences_should_drive_navigation() {
    let (mut editor, _) = editor_with_file("doc.txt", b"alpha\nbeta\n");

    type_bytes(&mut editor, b"\x1b[F");
    assert_eq!(cursor(&editor), (0, 5));

    type_bytes(&mut editor, b"\x1bOH");
    assert_eq!(cursor(&editor), (0, 0));

    type_bytes(&mut editor, b"\x1b[4~\x1b[B");
    assert_eq!(cursor(&editor), (1, 4));

    type_bytes(&mut editor, b"\x1b[D\x1b[2~");
    assert_eq!(lines(&editor), vec!["alpha", "bet"]);
    assert_eq!(cursor(&editor), (1, 3));
}

#[test]
fn unmapped_tilde_sequence_should_not_delete() {
    let (mut editor, _) = editor_with_file("doc.txt", b"beta\n");

    type_bytes(&mut editor, b"\x1b[3~");

    assert_eq!(lines(&editor), vec!["beta"]);
    assert_eq!(cursor(&editor), (0, 0));
    assert!(!editor.buffer().is_dirty());
    assert_eq!(editor.keys_mut().stream_mut().remaining(), 0);
}

#[test]
fn lone_escape_should_change_nothing() {
    let (mut editor, _) = editor_with_file("doc.txt", b"text\n");

    editor.keys_mut().stream_mut().push_bytes(b"\x1b");
    editor.keys_mut().stream_mut().push_pause();
    assert_eq!(editor.process_keypress().unwrap(), Flow::Continue);

    assert_eq!(lines(&editor), vec!["text"]);
    assert!(!editor.buffer().is_dirty());
}

#[test]
fn right_at_end_of_last_line_should_stay_put() {
    let (mut editor, _) = editor_with_file("doc.txt", b"ab\n");

    press(&mut editor, Key::End);
    press(&mut editor, Key::ArrowRight);
    press(&mut editor, Key::ArrowRight);

    assert_eq!(cursor(&editor), (0, 2));
}

#[test]
fn insert_then_delete_should_leave_text_unchanged() {
    let (mut editor, _) = editor_with_file("doc.txt", b"hello world\n");

    type_bytes(&mut editor, b"\x1b[C\x1b[Cxyz");
    type_bytes(&mut editor, &[BACKSPACE, BACKSPACE, BACKSPACE]);

    assert_eq!(lines(&editor), vec!["hello world"]);
    assert_eq!(cursor(&editor), (0, 2));
    // The content matches the file again but the buffer was still touched
    assert!(editor.buffer().is_dirty());
}

#[test]
fn page_down_should_scroll_long_file() {
    let text: String = (0..100).map(|i| format!("line {i}\n")).collect();
    let (mut editor, _) = editor_with_file("long.txt", text.as_bytes());

    type_bytes(&mut editor, b"\x1b[6~");
    assert_eq!(cursor(&editor), (43, 0));

    editor.refresh_screen().unwrap();
    assert_eq!(editor.state().row_offset, 22);
    assert!(screen(&editor).contains("line 43"));
    assert!(!screen(&editor).contains("line 21\x1b[K"));

    type_bytes(&mut editor, b"\x1b[5~");
    assert_eq!(cursor(&editor), (0, 0));
}

#[test]
fn frame_should_place_cursor_after_expanded_tab() {
    let (mut editor, _) = editor_with_file("tabs.txt", b"\tx\n");

    press(&mut editor, Key::End);
    editor.refresh_screen().unwrap();

    assert_eq!(editor.state().render_column, 9);
    assert!(screen(&editor).ends_with("\x1b[1;10H\x1b[?25h"));
}

#[test]
fn empty_buffer_should_show_welcome_banner() {
    let mut editor = editor_with(MemoryStorage::new());

    editor.refresh_screen().unwrap();

    let frame = screen(&editor);
    assert!(frame.contains(&format!("termpad -- version {}", env!("CARGO_PKG_VERSION"))));
    assert!(frame.contains("[No Filename] "));
}

#[test]
fn run_should_redraw_each_key_and_clear_on_quit() {
    let (mut editor, _) = editor_with_file("doc.txt", b"abc\n");
    editor.keys_mut().stream_mut().push_bytes(b"\x1b[Fd\x11\x11");

    editor.run().unwrap();

    let frame = screen(&editor);
    assert!(frame.contains("abcd"));
    assert!(frame.contains("doc.txt (modified)"));
    assert!(frame.ends_with("\x1b[2J\x1b[1;1H"));
    assert_eq!(editor.keys_mut().stream_mut().remaining(), 0);
}
