//! 統合テスト用の共通ヘルパー

#![allow(dead_code)]

use minivi::error::{InputError, MiniviError};
use minivi::{EditorSession, KeyEvent, MemoryStorage, Position, RenderFrame, Result, Terminal};
use std::collections::VecDeque;

/// 描画内容の記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFrame {
    pub lines: Vec<String>,
    pub cursor: Position,
    pub status_bar: String,
    pub message: String,
}

/// 事前に用意したキー列を返す端末
///
/// キーが尽きると入力ストリーム終了エラーを返す。
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    keys: VecDeque<Option<KeyEvent>>,
    pub frames: Vec<RecordedFrame>,
}

impl ScriptedTerminal {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().map(Some).collect(),
            frames: Vec::new(),
        }
    }

    pub fn push_key(&mut self, key: KeyEvent) {
        self.keys.push_back(Some(key));
    }

    /// キー以外のイベント（リサイズ相当）を差し込む
    pub fn push_non_key_event(&mut self) {
        self.keys.push_back(None);
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl Terminal for ScriptedTerminal {
    fn read_input_event(&mut self) -> Result<Option<KeyEvent>> {
        self.keys
            .pop_front()
            .ok_or(MiniviError::Input(InputError::Closed))
    }

    fn render(&mut self, frame: &RenderFrame<'_>) -> Result<()> {
        self.frames.push(RecordedFrame {
            lines: frame.lines.to_vec(),
            cursor: frame.cursor,
            status_bar: frame.status_bar.clone(),
            message: frame.message.to_string(),
        });
        Ok(())
    }
}

/// 文字列を打鍵列に変換し、`\n` は Enter、`\x1b` は Escape、`\x08` は Backspace とする
pub fn keys(script: &str) -> Vec<KeyEvent> {
    script
        .chars()
        .map(|ch| match ch {
            '\n' => KeyEvent::Enter,
            '\x1b' => KeyEvent::Escape,
            '\x08' => KeyEvent::Backspace,
            other => KeyEvent::Char(other),
        })
        .collect()
}

/// 打鍵列をセッションに直接流す
pub fn type_keys(session: &mut EditorSession<MemoryStorage>, script: &str) {
    for key in keys(script) {
        session.handle_key(key);
    }
}

/// 指定行を持つセッションを作成
pub fn session_with_lines(lines: &[&str]) -> EditorSession<MemoryStorage> {
    let storage = MemoryStorage::new().with_resource("__seed__", lines.iter().copied());
    let mut session = EditorSession::new(storage);
    session.open("__seed__");
    session
}
