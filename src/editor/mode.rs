//! モード状態機械
//!
//! ナビゲーション・挿入・コマンドラインの三状態を持つ。
//! 各状態はキーを受け取り、次の状態と結果を返すハンドラを一つずつ持つ。
//! コマンドラインで入力中の文字列は `CommandLine` 状態の中にだけ存在する。

use crate::buffer::ClampPolicy;
use crate::editor::EditorState;
use crate::input::KeyEvent;
use crate::minibuffer::CommandLineState;

/// 挿入モード中に表示するステータス
pub const INSERT_MODE_INDICATOR: &str = "-- INSERT --";

/// エディタのモード
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// カーソル移動と行・文字単位の編集コマンド
    #[default]
    Navigation,
    /// 文字入力
    Insertion,
    /// `:` コマンドの組み立て
    CommandLine(CommandLineState),
}

impl Mode {
    /// ステータスバー用の名前
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Navigation => "NORMAL",
            Mode::Insertion => "INSERT",
            Mode::CommandLine(_) => "COMMAND",
        }
    }

    /// このモードでの列クランプ方針
    pub fn clamp_policy(&self) -> ClampPolicy {
        match self {
            Mode::Insertion => ClampPolicy::PastEnd,
            Mode::Navigation | Mode::CommandLine(_) => ClampPolicy::LastChar,
        }
    }

    /// 入力中のコマンドライン（コマンドラインモード以外は `None`）
    pub fn command_line(&self) -> Option<&str> {
        match self {
            Mode::CommandLine(state) => Some(state.as_str()),
            _ => None,
        }
    }
}

/// キー処理の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeOutcome {
    /// 状態を更新した
    Handled,
    /// このモードでは意味のないキー
    Ignored,
    /// コマンドラインが確定した
    Execute(String),
}

/// 状態遷移
struct Transition {
    next: Mode,
    outcome: ModeOutcome,
}

impl Transition {
    fn stay(mode: Mode, outcome: ModeOutcome) -> Self {
        Self {
            next: mode,
            outcome,
        }
    }

    fn to(next: Mode) -> Self {
        Self {
            next,
            outcome: ModeOutcome::Handled,
        }
    }
}

fn handled(changed: bool) -> ModeOutcome {
    if changed {
        ModeOutcome::Handled
    } else {
        ModeOutcome::Ignored
    }
}

/// モード制御
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    /// ナビゲーションモードで開始
    pub fn new() -> Self {
        Self {
            mode: Mode::Navigation,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// 現在のモードのハンドラにキーを渡し、遷移を適用する
    pub fn dispatch(&mut self, key: KeyEvent, state: &mut EditorState) -> ModeOutcome {
        let current = std::mem::take(&mut self.mode);
        let from = current.name();

        let transition = match current {
            Mode::Navigation => handle_navigation(key, state),
            Mode::Insertion => handle_insertion(key, state),
            Mode::CommandLine(command_line) => handle_command_line(command_line, key, state),
        };

        if transition.next.name() != from {
            log::debug!("mode {} -> {} on {:?}", from, transition.next.name(), key);
        }
        self.mode = transition.next;
        transition.outcome
    }
}

fn handle_navigation(key: KeyEvent, state: &mut EditorState) -> Transition {
    let policy = ClampPolicy::LastChar;

    let outcome = match key {
        KeyEvent::Char('h') | KeyEvent::Left => handled(state.cursor.move_left()),
        KeyEvent::Char('l') | KeyEvent::Right => {
            handled(state.cursor.move_right(&state.buffer, policy))
        }
        KeyEvent::Char('k') | KeyEvent::Up => handled(state.cursor.move_up(&state.buffer, policy)),
        KeyEvent::Char('j') | KeyEvent::Down => {
            handled(state.cursor.move_down(&state.buffer, policy))
        }
        KeyEvent::Char('i') => {
            state.status.set(INSERT_MODE_INDICATOR);
            return Transition::to(Mode::Insertion);
        }
        KeyEvent::Char(':') => {
            let command_line = CommandLineState::new();
            state.status.set(command_line.as_str());
            return Transition::to(Mode::CommandLine(command_line));
        }
        KeyEvent::Char('x') => {
            let changed = state.edit().delete_char_under_cursor();
            state.mark_modified(changed);
            handled(changed)
        }
        // 一打鍵で行削除（`dd` の二打鍵シーケンスは扱わない）
        KeyEvent::Char('d') => {
            state.delete_line();
            ModeOutcome::Handled
        }
        KeyEvent::Char('p') => handled(state.paste_line()),
        _ => ModeOutcome::Ignored,
    };

    state.cursor.clamp(&state.buffer, policy);
    Transition::stay(Mode::Navigation, outcome)
}

fn handle_insertion(key: KeyEvent, state: &mut EditorState) -> Transition {
    let policy = ClampPolicy::PastEnd;

    let outcome = match key {
        KeyEvent::Escape => {
            state.status.clear();
            state.cursor.move_left();
            state.cursor.clamp(&state.buffer, ClampPolicy::LastChar);
            return Transition::to(Mode::Navigation);
        }
        KeyEvent::Char(ch) => {
            state.edit().insert_char(ch);
            state.mark_modified(true);
            ModeOutcome::Handled
        }
        KeyEvent::Enter => {
            state.edit().split_line();
            state.mark_modified(true);
            ModeOutcome::Handled
        }
        KeyEvent::Backspace => {
            let changed = state.edit().backspace();
            state.mark_modified(changed);
            handled(changed)
        }
        KeyEvent::Left => handled(state.cursor.move_left()),
        KeyEvent::Right => handled(state.cursor.move_right(&state.buffer, policy)),
        KeyEvent::Up => handled(state.cursor.move_up(&state.buffer, policy)),
        KeyEvent::Down => handled(state.cursor.move_down(&state.buffer, policy)),
    };

    Transition::stay(Mode::Insertion, outcome)
}

fn handle_command_line(
    mut command_line: CommandLineState,
    key: KeyEvent,
    state: &mut EditorState,
) -> Transition {
    let outcome = match key {
        KeyEvent::Escape => {
            state.status.clear();
            return Transition::to(Mode::Navigation);
        }
        KeyEvent::Enter => {
            return Transition {
                next: Mode::Navigation,
                outcome: ModeOutcome::Execute(command_line.into_string()),
            };
        }
        KeyEvent::Char(ch) => {
            command_line.push(ch);
            ModeOutcome::Handled
        }
        KeyEvent::Backspace => handled(command_line.pop()),
        KeyEvent::Left | KeyEvent::Right | KeyEvent::Up | KeyEvent::Down => ModeOutcome::Ignored,
    };

    state.status.set(command_line.as_str());
    Transition::stay(Mode::CommandLine(command_line), outcome)
}
