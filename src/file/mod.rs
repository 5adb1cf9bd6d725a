//! 永続化モジュール
//!
//! 名前付きリソースを行の列として読み書きする `Storage` と、その実装

pub mod io;
pub mod memory;
pub mod operations;

pub use io::FileStorage;
pub use memory::MemoryStorage;

use crate::error::file::Result;

/// 名前付きリソースの読み書き
pub trait Storage {
    /// リソースを行の列として読み込む（存在しなければ `FileError::NotFound`）
    fn load(&mut self, name: &str) -> Result<Vec<String>>;

    /// 行の列をリソースとして保存する
    fn save(&mut self, name: &str, lines: &[String]) -> Result<()>;
}
