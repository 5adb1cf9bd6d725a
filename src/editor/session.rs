//! エディタセッション
//!
//! 編集状態・モード制御・ストレージを所有し、端末に対して
//! 「描画 → 入力待ち → 処理」のループを回す。終了は `:q` 系コマンドのみ。

use crate::buffer::{Position, TextBuffer};
use crate::editor::{EditorState, Mode, ModeController, ModeOutcome};
use crate::error::Result;
use crate::file::Storage;
use crate::frontend::{RenderFrame, Terminal};
use crate::input::KeyEvent;
use crate::minibuffer::{CommandInterpreter, CommandOutcome};
use crate::ui::StatusLineInfo;

/// エディタセッション
pub struct EditorSession<S: Storage> {
    state: EditorState,
    modes: ModeController,
    storage: S,
    running: bool,
}

impl<S: Storage> EditorSession<S> {
    /// 空バッファのセッションを作成
    pub fn new(storage: S) -> Self {
        Self {
            state: EditorState::new(),
            modes: ModeController::new(),
            storage,
            running: true,
        }
    }

    /// 起動時にリソースを開く（`:e NAME` と同じ扱い）
    pub fn open(&mut self, name: impl Into<String>) {
        CommandInterpreter::load(name.into(), &mut self.state, &mut self.storage);
    }

    /// 一つのキーイベントを処理
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.modes.dispatch(key, &mut self.state) {
            ModeOutcome::Execute(command) => {
                let outcome =
                    CommandInterpreter::execute(&command, &mut self.state, &mut self.storage);
                if outcome == CommandOutcome::Quit {
                    log::info!("quit requested");
                    self.running = false;
                }
            }
            ModeOutcome::Handled | ModeOutcome::Ignored => {}
        }

        debug_assert!(self.state.buffer.line_count() >= 1);
    }

    /// 終了が要求されるまで描画と入力処理を繰り返す
    pub fn run<T: Terminal>(&mut self, terminal: &mut T) -> Result<()> {
        while self.running {
            terminal.render(&self.render_frame())?;
            if let Some(key) = terminal.read_input_event()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// 端末に渡す描画内容
    pub fn render_frame(&self) -> RenderFrame<'_> {
        let position = self.state.cursor.position();
        let status_bar = StatusLineInfo {
            mode: self.modes.mode().name(),
            resource_name: &self.state.resource_name,
            is_modified: self.state.modified,
            line: position.row,
            line_count: self.state.buffer.line_count(),
            column: position.col,
        }
        .format();

        RenderFrame {
            lines: self.state.buffer.lines(),
            cursor: position,
            status_bar,
            message: self.state.status.as_str(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn mode(&self) -> &Mode {
        self.modes.mode()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.state.buffer
    }

    pub fn cursor(&self) -> Position {
        self.state.cursor.position()
    }

    /// カーソルを移動（現在のモードのクランプ方針を適用）
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let policy = self.modes.mode().clamp_policy();
        let EditorState { buffer, cursor, .. } = &mut self.state;
        cursor.set_position(buffer, row, col, policy);
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn status_message(&self) -> &str {
        self.state.status.as_str()
    }

    pub fn resource_name(&self) -> &str {
        &self.state.resource_name
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.state.clipboard.peek()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::MemoryStorage;

    #[test]
    fn new_session_is_empty_navigation() {
        let session = EditorSession::new(MemoryStorage::new());
        assert!(session.is_running());
        assert_eq!(session.mode(), &Mode::Navigation);
        assert_eq!(session.buffer().lines(), &[String::new()]);
        assert_eq!(session.cursor(), Position::origin());
        assert_eq!(session.resource_name(), "");
        assert_eq!(session.clipboard(), None);
    }

    #[test]
    fn quit_command_stops_session() {
        let mut session = EditorSession::new(MemoryStorage::new());
        for key in KeyEvent::sequence(":q") {
            session.handle_key(key);
        }
        assert!(session.is_running());
        session.handle_key(KeyEvent::Enter);
        assert!(!session.is_running());
    }

    #[test]
    fn render_frame_reflects_state() {
        let mut session = EditorSession::new(MemoryStorage::new());
        session.handle_key(KeyEvent::Char('i'));
        session.handle_key(KeyEvent::Char('a'));

        let frame = session.render_frame();
        assert_eq!(frame.lines, &["a".to_string()]);
        assert_eq!(frame.cursor, Position::new(0, 1));
        assert_eq!(frame.message, "-- INSERT --");
        assert!(frame.status_bar.starts_with("INSERT | [No Name] [+]"));
    }

    #[test]
    fn set_cursor_uses_mode_policy() {
        let storage = MemoryStorage::new().with_resource("f", ["abc"]);
        let mut session = EditorSession::new(storage);
        session.open("f");

        session.set_cursor(0, 9);
        assert_eq!(session.cursor(), Position::new(0, 2));

        session.handle_key(KeyEvent::Char('i'));
        session.set_cursor(0, 9);
        assert_eq!(session.cursor(), Position::new(0, 3));
    }
}
