//! ロギングシステム
//!
//! `log` ファサードのバックエンド。TUI が画面を占有しているため
//! 標準出力・標準エラーには書かず、ファイルへ追記する。

use crate::options::{ensure_parent_dir, RunOptions};
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// ファイル出力ロガー
#[derive(Debug)]
pub struct Logger {
    level: LevelFilter,
    path: PathBuf,
    file: Mutex<File>,
}

impl Logger {
    /// ログファイルを開いてロガーを作成
    pub fn open(path: impl Into<PathBuf>, level: LevelFilter) -> std::io::Result<Self> {
        let path = path.into();
        ensure_parent_dir(&path)?;
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            level,
            path,
            file: Mutex::new(file),
        })
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_record(record: &Record<'_>) -> String {
        format!("{}: {} [{}]", record.level(), record.args(), record.target())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", Self::format_record(record));
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// オプションに従ってロガーを登録する
///
/// 出力先が未指定なら何もしない（ログは破棄される）。登録したログのパスを返す。
pub fn init(options: &RunOptions) -> std::io::Result<Option<PathBuf>> {
    let Some(path) = &options.debug_log_path else {
        return Ok(None);
    };

    let logger = Logger::open(path, options.log_level)?;
    let level = logger.level();
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
    Ok(Some(path.clone()))
}
