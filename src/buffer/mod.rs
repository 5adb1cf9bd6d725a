//! バッファ管理モジュール
//!
//! テキストデータの管理とカーソル位置管理を提供

pub mod cursor;
pub mod text_buffer;

// 公開API
pub use cursor::{ClampPolicy, CursorModel, Position};
pub use text_buffer::TextBuffer;
