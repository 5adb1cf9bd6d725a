//! ビューポート管理
//!
//! 画面に表示するテキスト領域の縦スクロール位置を管理する。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportManager {
    /// 表示の開始行
    top_line: usize,
    /// 表示可能な行数
    height: usize,
}

impl ViewportManager {
    pub fn new(height: usize) -> Self {
        Self {
            top_line: 0,
            height: height.max(1),
        }
    }

    /// 表示領域の高さを更新
    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
    }

    /// カーソル行が画面内に収まるようスクロールする
    ///
    /// 戻り値はスクロールが発生したかどうか
    pub fn ensure_visible(&mut self, cursor_line: usize) -> bool {
        if cursor_line < self.top_line {
            self.top_line = cursor_line;
            true
        } else {
            let bottom_line = self.top_line + self.height - 1;
            if cursor_line > bottom_line {
                self.top_line = cursor_line + 1 - self.height;
                true
            } else {
                false
            }
        }
    }

    /// 現在の表示開始行を取得
    pub fn top_line(&self) -> usize {
        self.top_line
    }

    /// 表示領域の高さを取得
    pub fn height(&self) -> usize {
        self.height
    }
}

impl Default for ViewportManager {
    fn default() -> Self {
        Self::new(1)
    }
}
