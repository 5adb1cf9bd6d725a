mod common;

use common::{keys, session_with_lines, type_keys, ScriptedTerminal};
use minivi::error::{InputError, MiniviError};
use minivi::{EditorSession, KeyEvent, MemoryStorage, Mode, Position};

#[test]
fn insert_and_save() {
    let mut session = EditorSession::new(MemoryStorage::new());

    type_keys(&mut session, "ihello\x1b:w out.txt\n");

    assert_eq!(
        session.storage().get("out.txt"),
        Some(&["hello".to_string()][..])
    );
    assert_eq!(session.resource_name(), "out.txt");
    assert_eq!(session.status_message(), "File saved: out.txt");
    assert_eq!(session.mode(), &Mode::Navigation);
    assert!(!session.state().modified);
}

#[test]
fn line_delete_then_paste() {
    let mut session = session_with_lines(&["a", "b", "c"]);
    session.set_cursor(1, 0);

    type_keys(&mut session, "d");
    assert_eq!(session.clipboard(), Some("b"));

    type_keys(&mut session, "p");
    assert_eq!(
        session.buffer().lines(),
        &["a".to_string(), "c".to_string(), "b".to_string()]
    );
}

#[test]
fn deleted_empty_line_is_not_pasted() {
    let mut session = session_with_lines(&["", "a"]);

    type_keys(&mut session, "dp");

    assert_eq!(session.buffer().lines(), &["a".to_string()]);
    assert_eq!(session.clipboard(), None);
}

#[test]
fn deleting_sole_empty_line_leaves_buffer_unmodified() {
    let mut session = session_with_lines(&[""]);

    type_keys(&mut session, "d");

    assert_eq!(session.buffer().lines(), &[String::new()]);
    assert!(!session.state().modified);
}

#[test]
fn backspace_joins_lines() {
    let mut session = session_with_lines(&["foo", "bar"]);
    session.set_cursor(1, 0);
    type_keys(&mut session, "i");

    session.handle_key(KeyEvent::Backspace);

    assert_eq!(session.buffer().lines(), &["foobar".to_string()]);
    assert_eq!(session.cursor(), Position::new(0, 3));
}

#[test]
fn load_missing_file_starts_empty_buffer() {
    let mut session = session_with_lines(&["some", "text"]);
    session.set_cursor(1, 2);

    type_keys(&mut session, ":e missing.txt\n");

    assert_eq!(session.buffer().lines(), &[String::new()]);
    assert_eq!(session.resource_name(), "missing.txt");
    assert_eq!(session.cursor(), Position::origin());
    assert_eq!(session.status_message(), "New file: missing.txt");
}

#[test]
fn clipboard_keeps_only_second_deleted_line() {
    let mut session = session_with_lines(&["first", "second", "third"]);

    type_keys(&mut session, "ddp");

    assert_eq!(
        session.buffer().lines(),
        &["third".to_string(), "second".to_string()]
    );
}

#[test]
fn deleting_every_line_leaves_one_empty_line() {
    let mut session = session_with_lines(&["a", "b"]);
    type_keys(&mut session, "ddd");
    assert_eq!(session.buffer().lines(), &[String::new()]);
    assert_eq!(session.cursor(), Position::origin());
}

#[test]
fn enter_splits_line_mid_way() {
    let mut session = session_with_lines(&["helloworld"]);
    session.set_cursor(0, 5);

    type_keys(&mut session, "i\n");

    assert_eq!(
        session.buffer().lines(),
        &["hello".to_string(), "world".to_string()]
    );
    assert_eq!(session.cursor(), Position::new(1, 0));
}

#[test]
fn save_without_name_reports_failure() {
    let mut session = EditorSession::new(MemoryStorage::new());
    type_keys(&mut session, "ix\x1b:w\n");
    assert_eq!(session.status_message(), "No filename specified");
    assert_eq!(session.storage().save_count(), 0);
}

#[test]
fn failed_save_is_reported_and_buffer_untouched() {
    let mut session = EditorSession::new(MemoryStorage::new());
    session.storage_mut().set_fail_saves(true);

    type_keys(&mut session, "iabc\x1b:w a.txt\n");

    assert!(session
        .status_message()
        .starts_with("Error: Could not save file"));
    assert_eq!(session.buffer().lines(), &["abc".to_string()]);
    assert!(session.is_running());
}

#[test]
fn unknown_command_is_ignored() {
    let mut session = session_with_lines(&["keep"]);
    type_keys(&mut session, ":frobnicate\n");

    assert_eq!(session.buffer().lines(), &["keep".to_string()]);
    assert_eq!(session.mode(), &Mode::Navigation);
    assert!(session.is_running());
}

#[test]
fn save_after_edit_reuses_resource_name() {
    let storage = MemoryStorage::new().with_resource("doc.txt", ["one"]);
    let mut session = EditorSession::new(storage);
    session.open("doc.txt");

    type_keys(&mut session, "i2\x1b:w\n");

    assert_eq!(
        session.storage().get("doc.txt"),
        Some(&["2one".to_string()][..])
    );
}

#[test]
fn run_loop_renders_until_quit() {
    let mut session = EditorSession::new(MemoryStorage::new());
    let mut terminal = ScriptedTerminal::new(keys("ihi\x1b:q\n"));

    session.run(&mut terminal).unwrap();

    assert!(!session.is_running());
    // 描画は各入力の前に一回ずつ
    assert_eq!(terminal.frames.len(), keys("ihi\x1b:q\n").len());
    let last = terminal.last_frame().unwrap();
    assert_eq!(last.lines, vec!["hi".to_string()]);
    assert_eq!(last.message, ":q");
    assert!(last.status_bar.starts_with("COMMAND | [No Name] [+]"));
}

#[test]
fn run_loop_redraws_on_non_key_events() {
    let mut session = EditorSession::new(MemoryStorage::new());
    let mut terminal = ScriptedTerminal::new(Vec::new());
    terminal.push_non_key_event();
    for key in keys(":q\n") {
        terminal.push_key(key);
    }

    session.run(&mut terminal).unwrap();

    assert_eq!(terminal.frames.len(), 4);
}

#[test]
fn run_loop_propagates_closed_input() {
    let mut session = EditorSession::new(MemoryStorage::new());
    let mut terminal = ScriptedTerminal::new(keys("ix"));

    let result = session.run(&mut terminal);

    assert_eq!(result, Err(MiniviError::Input(InputError::Closed)));
    assert_eq!(session.buffer().lines(), &["x".to_string()]);
}

#[test]
fn insert_mode_status_indicator_and_escape_clear() {
    let mut session = EditorSession::new(MemoryStorage::new());
    type_keys(&mut session, "i");
    assert_eq!(session.status_message(), "-- INSERT --");
    type_keys(&mut session, "\x1b");
    assert_eq!(session.status_message(), "");
}
