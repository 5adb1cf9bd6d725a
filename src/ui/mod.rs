//! UI モジュール
//!
//! ステータス行の組み立て、スクロール管理、ratatui による描画

pub mod renderer;
pub mod viewport;

pub use renderer::Renderer;
pub use viewport::ViewportManager;

/// ステータスバーの表示情報
#[derive(Debug, Clone, Copy)]
pub struct StatusLineInfo<'a> {
    /// モード名
    pub mode: &'a str,
    /// リソース名（空なら `[No Name]`）
    pub resource_name: &'a str,
    pub is_modified: bool,
    /// カーソル行（0ベース）
    pub line: usize,
    pub line_count: usize,
    /// カーソル列（0ベース）
    pub column: usize,
}

impl StatusLineInfo<'_> {
    /// `MODE | NAME | Line R/N Col C` 形式（行・列は1ベース）
    pub fn format(&self) -> String {
        let name = if self.resource_name.is_empty() {
            "[No Name]"
        } else {
            self.resource_name
        };
        let modified = if self.is_modified { " [+]" } else { "" };

        format!(
            "{} | {}{} | Line {}/{} Col {}",
            self.mode,
            name,
            modified,
            self.line + 1,
            self.line_count,
            self.column + 1
        )
    }
}
