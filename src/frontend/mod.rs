//! フロントエンド
//!
//! セッションから見た端末の境界。描画と入力取得だけを要求する。

pub mod tui;

pub use tui::{TuiApplication, TuiTerminal};

use crate::buffer::Position;
use crate::error::Result;
use crate::input::KeyEvent;

/// 一回分の描画内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame<'a> {
    /// バッファの全行
    pub lines: &'a [String],
    pub cursor: Position,
    /// ステータスバー
    pub status_bar: String,
    /// メッセージ行
    pub message: &'a str,
}

/// 端末
pub trait Terminal {
    /// 入力イベントを一つ待つ
    ///
    /// キー以外のイベント（リサイズなど）では `None` を返し、再描画だけを促す。
    fn read_input_event(&mut self) -> Result<Option<KeyEvent>>;

    /// 画面全体を描画
    fn render(&mut self, frame: &RenderFrame<'_>) -> Result<()>;
}
