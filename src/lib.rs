//! minivi - 端末向けの小さな vi 風モーダルテキストエディタ
//!
//! ナビゲーション・挿入・コマンドラインの三モードで行単位のバッファを編集する。

// コアモジュール
pub mod error;
pub mod logging;
pub mod options;

// データ層
pub mod buffer;
pub mod file;

// 編集層
pub mod editor;
pub mod minibuffer;

// 入出力層
pub mod frontend;
pub mod input;
pub mod ui;

// 公開API
pub use buffer::{CursorModel, Position, TextBuffer};
pub use editor::{ClipboardSlot, EditorSession, Mode, ModeController};
pub use error::{MiniviError, Result};
pub use file::{FileStorage, MemoryStorage, Storage};
pub use frontend::{RenderFrame, Terminal, TuiApplication};
pub use input::KeyEvent;
pub use options::RunOptions;
