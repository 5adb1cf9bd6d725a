//! セッションが所有する編集状態
//!
//! バッファ・カーソル・クリップボード・リソース名・ステータスをまとめ、
//! モードハンドラとコマンド解釈器に参照で渡す。

use crate::buffer::{CursorModel, TextBuffer};
use crate::editor::edit_operations::EditContext;
use crate::editor::ClipboardSlot;

/// 直近の操作結果を表す一行メッセージ（追記せず上書きする）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage(String);

impl StatusMessage {
    pub fn set(&mut self, message: impl Into<String>) {
        self.0 = message.into();
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 編集状態
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub buffer: TextBuffer,
    pub cursor: CursorModel,
    pub clipboard: ClipboardSlot,
    /// 関連付けられたリソース名（未設定なら空）
    pub resource_name: String,
    pub status: StatusMessage,
    /// 最後の保存・読み込み以降に変更されたか
    pub modified: bool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// バッファとカーソルに対する編集コンテキスト
    pub fn edit(&mut self) -> EditContext<'_> {
        EditContext::new(&mut self.buffer, &mut self.cursor)
    }

    /// カーソル行を削除してクリップボードへ
    pub fn delete_line(&mut self) {
        let changed =
            EditContext::new(&mut self.buffer, &mut self.cursor).delete_line(&mut self.clipboard);
        self.mark_modified(changed);
    }

    /// クリップボードの行をカーソル行の直後へ貼り付け
    pub fn paste_line(&mut self) -> bool {
        let pasted = EditContext::new(&mut self.buffer, &mut self.cursor).paste_line(&self.clipboard);
        self.mark_modified(pasted);
        pasted
    }

    /// 変更フラグを立てる
    pub fn mark_modified(&mut self, changed: bool) {
        if changed {
            self.modified = true;
        }
    }
}
