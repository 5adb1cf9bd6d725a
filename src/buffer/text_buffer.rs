//! 行指向テキストバッファ
//!
//! 文書を行の列として保持する。バッファは決して空にならず、
//! 行数ゼロの状態は空行一つで表現する。列は文字単位（バイトではない）。

/// 行単位のテキストバッファ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    /// 空行一つだけのバッファを作成
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// 行の列からバッファを作成（空なら空行一つ）
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buffer = Self::new();
        buffer.replace_all(lines.into_iter().map(Into::into).collect());
        buffer
    }

    /// 行数
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// 指定行の内容
    ///
    /// `row` の妥当性は呼び出し側（カーソル）が保証する。
    pub fn line_at(&self, row: usize) -> &str {
        &self.lines[row]
    }

    /// 指定行の文字数
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map(|line| line.chars().count()).unwrap_or(0)
    }

    /// 全行への参照
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `col` の位置に一文字挿入し、残りを右へずらす
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        let line = &mut self.lines[row];
        let byte_idx = char_to_byte_index(line, col);
        line.insert(byte_idx, ch);
    }

    /// `col` の文字を削除（範囲外や空行なら何もしない）
    pub fn delete_char(&mut self, row: usize, col: usize) -> Option<char> {
        let line = self.lines.get_mut(row)?;
        let (byte_idx, _) = line.char_indices().nth(col)?;
        Some(line.remove(byte_idx))
    }

    /// `col` で行を分割し、後半を直後の新しい行にする
    pub fn split_line(&mut self, row: usize, col: usize) {
        let line = &mut self.lines[row];
        let byte_idx = char_to_byte_index(line, col);
        let rest = line.split_off(byte_idx);
        self.lines.insert(row + 1, rest);
    }

    /// `row` の行を前の行の末尾に結合する（`row > 0` が前提）
    ///
    /// 結合前の前行の文字数、つまり結合点の列を返す。
    pub fn join_with_previous(&mut self, row: usize) -> Option<usize> {
        if row == 0 || row >= self.lines.len() {
            return None;
        }
        let current = self.lines.remove(row);
        let previous = &mut self.lines[row - 1];
        let join_col = previous.chars().count();
        previous.push_str(&current);
        Some(join_col)
    }

    /// 行を削除して内容を返す。空になったら空行を補う。
    pub fn delete_line(&mut self, row: usize) -> String {
        let removed = self.lines.remove(row);
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        removed
    }

    /// `row` の直後に新しい行を挿入
    pub fn insert_line_after(&mut self, row: usize, text: impl Into<String>) {
        let at = (row + 1).min(self.lines.len());
        self.lines.insert(at, text.into());
    }

    /// 内容全体を置き換える（空の列なら空行一つ）
    pub fn replace_all(&mut self, lines: Vec<String>) {
        self.lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// 文字位置からバイト位置へ変換（行末を超える場合は行末）
pub(crate) fn char_to_byte_index(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}
