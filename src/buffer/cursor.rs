//! カーソル位置管理
//!
//! テキストバッファ上の (行, 列) を管理する。列のクランプ方針はモードに依存し、
//! 挿入モードでは行末の一つ先まで、ナビゲーションモードでは最後の文字までに制限する。

use super::TextBuffer;

/// カーソル位置（0ベース、列は文字単位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn origin() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// 列のクランプ方針
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampPolicy {
    /// 最後の文字の位置まで（空行なら0）
    LastChar,
    /// 行末の一つ先まで（追記のため）
    PastEnd,
}

impl ClampPolicy {
    /// 行長 `len` に対する列の上限
    pub fn max_col(self, len: usize) -> usize {
        match self {
            ClampPolicy::LastChar => len.saturating_sub(1),
            ClampPolicy::PastEnd => len,
        }
    }
}

/// バッファ上のカーソル
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorModel {
    position: Position,
}

impl CursorModel {
    /// 原点に置かれたカーソルを作成
    pub fn new() -> Self {
        Self {
            position: Position::origin(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn col(&self) -> usize {
        self.position.col
    }

    /// 位置を設定（書き込み時にクランプを適用）
    pub fn set_position(
        &mut self,
        buffer: &TextBuffer,
        row: usize,
        col: usize,
        policy: ClampPolicy,
    ) {
        self.position = Position::new(row, col);
        self.clamp(buffer, policy);
    }

    /// バッファの現在の形に合わせて行と列をクランプ
    pub fn clamp(&mut self, buffer: &TextBuffer, policy: ClampPolicy) {
        let last_row = buffer.line_count().saturating_sub(1);
        self.position.row = self.position.row.min(last_row);
        let max_col = policy.max_col(buffer.line_len(self.position.row));
        self.position.col = self.position.col.min(max_col);
    }

    /// 左へ一文字（行をまたがない）
    pub fn move_left(&mut self) -> bool {
        if self.position.col > 0 {
            self.position.col -= 1;
            true
        } else {
            false
        }
    }

    /// 右へ一文字（行をまたがない）
    pub fn move_right(&mut self, buffer: &TextBuffer, policy: ClampPolicy) -> bool {
        let max_col = policy.max_col(buffer.line_len(self.position.row));
        if self.position.col < max_col {
            self.position.col += 1;
            true
        } else {
            false
        }
    }

    /// 上の行へ
    pub fn move_up(&mut self, buffer: &TextBuffer, policy: ClampPolicy) -> bool {
        if self.position.row == 0 {
            return false;
        }
        self.position.row -= 1;
        self.clamp(buffer, policy);
        true
    }

    /// 下の行へ
    pub fn move_down(&mut self, buffer: &TextBuffer, policy: ClampPolicy) -> bool {
        if self.position.row + 1 >= buffer.line_count() {
            return false;
        }
        self.position.row += 1;
        self.clamp(buffer, policy);
        true
    }
}
