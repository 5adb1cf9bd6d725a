//! ディスク上のファイルに対する Storage 実装
//!
//! UTF-8テキストファイルの読み込みと、一時ファイル経由のアトミック保存

use super::operations::{join_lines, split_lines};
use super::Storage;
use crate::error::{file::Result, FileError};
use std::fs;
use std::path::{Path, PathBuf};

/// ファイルシステムを使うストレージ
#[derive(Debug, Clone, Default)]
pub struct FileStorage {
    /// 相対パスの基準ディレクトリ（未指定ならカレントディレクトリ）
    root: Option<PathBuf>,
}

impl FileStorage {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// 相対パスを `root` 基準で解決するストレージを作成
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// リソース名をパスに解決（`~` を展開）
    pub fn resolve(&self, name: &str) -> PathBuf {
        let expanded = PathBuf::from(shellexpand::tilde(name).as_ref());
        match &self.root {
            Some(root) if expanded.is_relative() => root.join(expanded),
            _ => expanded,
        }
    }

    fn read_file(&self, name: &str, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(FileError::NotFound {
                path: name.to_string(),
            });
        }

        if path.is_dir() {
            return Err(FileError::InvalidPath {
                path: name.to_string(),
            });
        }

        fs::read_to_string(path).map_err(|e| FileError::from_io(name, &e))
    }

    /// アトミック保存（一時ファイル経由）
    fn atomic_write(&self, name: &str, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| FileError::from_io(name, &e))?;
            }
        }

        let temp_path = temp_path_for(path).ok_or_else(|| FileError::InvalidPath {
            path: name.to_string(),
        })?;

        fs::write(&temp_path, content.as_bytes()).map_err(|e| FileError::from_io(name, &e))?;

        fs::rename(&temp_path, path).map_err(|e| {
            // 一時ファイル削除を試行
            let _ = fs::remove_file(&temp_path);
            FileError::from_io(name, &e)
        })
    }
}

impl Storage for FileStorage {
    fn load(&mut self, name: &str) -> Result<Vec<String>> {
        let path = self.resolve(name);
        let content = self.read_file(name, &path)?;
        let lines = split_lines(&content);
        log::info!("loaded {} lines from {}", lines.len(), path.display());
        Ok(lines)
    }

    fn save(&mut self, name: &str, lines: &[String]) -> Result<()> {
        let path = self.resolve(name);
        if path.is_dir() {
            return Err(FileError::InvalidPath {
                path: name.to_string(),
            });
        }

        self.atomic_write(name, &path, &join_lines(lines))?;
        log::info!("saved {} lines to {}", lines.len(), path.display());
        Ok(())
    }
}

// 一意な一時ファイル名生成
fn temp_path_for(original: &Path) -> Option<PathBuf> {
    let filename = original.file_name()?;
    let temp_name = format!(".{}_{}", filename.to_string_lossy(), std::process::id());
    Some(match original.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}
