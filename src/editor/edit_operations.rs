//! カーソル連動の編集操作
//!
//! バッファ変更とカーソル更新を一組で行い、戻る前に
//! 「バッファは空にならない」「カーソルは範囲内」の不変条件を回復する。

use crate::buffer::{ClampPolicy, CursorModel, TextBuffer};
use crate::editor::ClipboardSlot;

/// 編集操作のコンテキスト
pub struct EditContext<'a> {
    pub buffer: &'a mut TextBuffer,
    pub cursor: &'a mut CursorModel,
}

impl<'a> EditContext<'a> {
    pub fn new(buffer: &'a mut TextBuffer, cursor: &'a mut CursorModel) -> Self {
        Self { buffer, cursor }
    }

    /// カーソル位置に文字を挿入して列を進める
    pub fn insert_char(&mut self, ch: char) {
        let pos = self.cursor.position();
        self.buffer.insert_char(pos.row, pos.col, ch);
        self.cursor
            .set_position(self.buffer, pos.row, pos.col + 1, ClampPolicy::PastEnd);
    }

    /// カーソル位置で行を分割し、新しい行の先頭へ移動
    pub fn split_line(&mut self) {
        let pos = self.cursor.position();
        self.buffer.split_line(pos.row, pos.col);
        self.cursor
            .set_position(self.buffer, pos.row + 1, 0, ClampPolicy::PastEnd);
    }

    /// カーソル左の文字を削除。列0なら前の行と結合する。
    ///
    /// 何も変更しなかった場合は `false`。
    pub fn backspace(&mut self) -> bool {
        let pos = self.cursor.position();
        if pos.col > 0 {
            self.buffer.delete_char(pos.row, pos.col - 1);
            self.cursor
                .set_position(self.buffer, pos.row, pos.col - 1, ClampPolicy::PastEnd);
            true
        } else if let Some(join_col) = self.buffer.join_with_previous(pos.row) {
            self.cursor
                .set_position(self.buffer, pos.row - 1, join_col, ClampPolicy::PastEnd);
            true
        } else {
            false
        }
    }

    /// カーソル下の文字を削除
    pub fn delete_char_under_cursor(&mut self) -> bool {
        let pos = self.cursor.position();
        let deleted = self.buffer.delete_char(pos.row, pos.col).is_some();
        self.cursor.clamp(self.buffer, ClampPolicy::LastChar);
        deleted
    }

    /// カーソル行を削除してクリップボードに格納
    ///
    /// 唯一の空行を削除した場合はバッファが変わらないため `false`
    pub fn delete_line(&mut self, clipboard: &mut ClipboardSlot) -> bool {
        let changed = self.buffer.line_count() > 1;
        let removed = self.buffer.delete_line(self.cursor.row());
        let changed = changed || !removed.is_empty();
        clipboard.store(removed);
        self.cursor.clamp(self.buffer, ClampPolicy::LastChar);
        changed
    }

    /// クリップボードの行をカーソル行の直後に挿入（カーソルは動かない）
    pub fn paste_line(&mut self, clipboard: &ClipboardSlot) -> bool {
        let Some(line) = clipboard.peek() else {
            return false;
        };
        self.buffer.insert_line_after(self.cursor.row(), line);
        self.cursor.clamp(self.buffer, ClampPolicy::LastChar);
        true
    }
}
