//! メモリ上の Storage 実装
//!
//! テストや組み込み用途向け。保存失敗を強制するスイッチを持つ。

use super::Storage;
use crate::error::{file::Result, FileError};
use std::collections::HashMap;

/// 名前から行の列への対応を保持するストレージ
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    resources: HashMap<String, Vec<String>>,
    fail_saves: bool,
    save_count: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// リソースを事前登録
    pub fn with_resource<I, S>(mut self, name: &str, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources
            .insert(name.to_string(), lines.into_iter().map(Into::into).collect());
        self
    }

    /// 以降の保存をすべて失敗させる
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// 保存済みの内容
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.resources.get(name).map(Vec::as_slice)
    }

    /// 成功した保存の回数
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl Storage for MemoryStorage {
    fn load(&mut self, name: &str) -> Result<Vec<String>> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| FileError::NotFound {
                path: name.to_string(),
            })
    }

    fn save(&mut self, name: &str, lines: &[String]) -> Result<()> {
        if self.fail_saves {
            return Err(FileError::Io {
                message: format!("{}: write refused", name),
            });
        }
        self.resources.insert(name.to_string(), lines.to_vec());
        self.save_count += 1;
        Ok(())
    }
}
