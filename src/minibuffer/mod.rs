//! コマンドライン（`:` で始まる入力）
//!
//! コマンドラインモード中に組み立てる文字列と、確定後のコマンド解釈を提供

pub mod commands;

pub use commands::{parse_command, Command, CommandInterpreter, CommandOutcome};

/// コマンドラインモードで入力中の文字列
///
/// 常に `:` で始まり、Backspace で `:` 自体は消えない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLineState {
    content: String,
}

impl CommandLineState {
    /// 先頭の `:` だけを持つ状態を作成
    pub fn new() -> Self {
        Self {
            content: ":".to_string(),
        }
    }

    /// 末尾に文字を追加
    pub fn push(&mut self, ch: char) {
        self.content.push(ch);
    }

    /// 末尾の文字を削除（`:` だけなら何もしない）
    pub fn pop(&mut self) -> bool {
        if self.is_at_floor() {
            return false;
        }
        self.content.pop().is_some()
    }

    /// `:` だけが残っているか
    pub fn is_at_floor(&self) -> bool {
        self.content == ":"
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

impl Default for CommandLineState {
    fn default() -> Self {
        Self::new()
    }
}
