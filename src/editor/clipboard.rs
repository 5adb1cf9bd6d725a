//! 単一スロットのクリップボード
//!
//! 最後に削除された行を一つだけ保持する。削除のたびに上書きされ、
//! 貼り付けでは内容を消費しない。空行を格納したスロットは空として扱う。

/// 直近に削除した一行を保持するスロット
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSlot {
    line: String,
}

impl ClipboardSlot {
    /// 空のスロットを作成
    pub fn new() -> Self {
        Self {
            line: String::new(),
        }
    }

    /// 行を格納（既存の内容は上書き）
    pub fn store(&mut self, line: String) {
        self.line = line;
    }

    /// 貼り付け用に内容を参照（空なら `None`）
    pub fn peek(&self) -> Option<&str> {
        if self.line.is_empty() {
            None
        } else {
            Some(&self.line)
        }
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}
