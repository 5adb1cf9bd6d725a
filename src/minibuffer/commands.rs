//! コマンド処理システム
//!
//! `:q`、`:w NAME`、`:e NAME` などのコマンドラインを解釈し、
//! ストレージ操作を行う。ストレージのエラーはステータスメッセージに変換する。

use crate::buffer::ClampPolicy;
use crate::editor::EditorState;
use crate::error::{FileError, MiniviError};
use crate::file::Storage;

/// 解釈済みのコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `:q` / `:quit`
    Quit,
    /// `:w [NAME]` / `:write [NAME]`
    Write { name: Option<String> },
    /// `:wq [NAME]` / `:x [NAME]`
    WriteQuit { name: Option<String> },
    /// `:e NAME` / `:edit NAME`
    Edit { name: String },
    /// 未対応のコマンド（無視される）
    Unknown(String),
}

/// コマンドの実行結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Quit,
}

/// コマンドライン文字列を解析
pub fn parse_command(input: &str) -> Command {
    let Some(body) = input.strip_prefix(':') else {
        return Command::Unknown(input.to_string());
    };

    let (word, argument) = match body.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, Some(rest.trim()).filter(|arg| !arg.is_empty())),
        None => (body, None),
    };
    let name = argument.map(str::to_string);

    match word {
        "q" | "quit" => Command::Quit,
        "w" | "write" => Command::Write { name },
        "wq" | "x" => Command::WriteQuit { name },
        "e" | "edit" => match name {
            Some(name) => Command::Edit { name },
            None => Command::Unknown(input.to_string()),
        },
        _ => Command::Unknown(input.to_string()),
    }
}

/// コマンド解釈器
pub struct CommandInterpreter;

impl CommandInterpreter {
    /// 確定したコマンドラインを実行
    pub fn execute<S: Storage>(
        input: &str,
        state: &mut EditorState,
        storage: &mut S,
    ) -> CommandOutcome {
        let command = parse_command(input);
        log::debug!("execute command {:?}", command);

        match command {
            Command::Quit => CommandOutcome::Quit,
            Command::Write { name } => {
                Self::save(name, state, storage);
                CommandOutcome::Continue
            }
            Command::WriteQuit { name } => {
                if Self::save(name, state, storage) {
                    CommandOutcome::Quit
                } else {
                    CommandOutcome::Continue
                }
            }
            Command::Edit { name } => {
                Self::load(name, state, storage);
                CommandOutcome::Continue
            }
            Command::Unknown(_) => CommandOutcome::Continue,
        }
    }

    /// バッファを保存。成功したら `true`。
    pub fn save<S: Storage>(
        name: Option<String>,
        state: &mut EditorState,
        storage: &mut S,
    ) -> bool {
        if let Some(name) = name {
            state.resource_name = name;
        }

        if state.resource_name.is_empty() {
            state.status.set("No filename specified");
            return false;
        }

        match storage.save(&state.resource_name, state.buffer.lines()) {
            Ok(()) => {
                state.modified = false;
                state.status.set(format!("File saved: {}", state.resource_name));
                true
            }
            Err(error) => {
                log::warn!("save of {} failed: {}", state.resource_name, error);
                state
                    .status
                    .set(format!("Error: Could not save file: {}", error));
                false
            }
        }
    }

    /// リソースを読み込みバッファ全体を置き換える
    ///
    /// 存在しない場合は空バッファで新規ファイルとして扱う。
    pub fn load<S: Storage>(name: String, state: &mut EditorState, storage: &mut S) {
        state.resource_name = name;

        match storage.load(&state.resource_name) {
            Ok(lines) => {
                state.buffer.replace_all(lines);
                state
                    .status
                    .set(format!("File loaded: {}", state.resource_name));
            }
            Err(FileError::NotFound { .. }) => {
                log::info!("{} not found, starting new buffer", state.resource_name);
                state.buffer.replace_all(Vec::new());
                state.status.set(format!("New file: {}", state.resource_name));
            }
            Err(error) => {
                log::warn!("load of {} failed: {}", state.resource_name, error);
                state.status.set(MiniviError::from(error).status_text());
                return;
            }
        }

        state.modified = false;
        state
            .cursor
            .set_position(&state.buffer, 0, 0, ClampPolicy::LastChar);
    }
}
