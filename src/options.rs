//! 起動オプション
//!
//! コマンドライン引数と環境変数から `RunOptions` を組み立てる。

use std::path::{Path, PathBuf};

/// 環境変数: 設定されていればデバッグログを既定の場所に出力
pub const DEBUG_ENV: &str = "MINIVI_DEBUG";

/// 起動オプション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// 起動時に開くリソース名
    pub initial_file: Option<String>,
    /// デバッグログ出力先（未指定ならログ無効）
    pub debug_log_path: Option<PathBuf>,
    pub log_level: log::LevelFilter,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            initial_file: None,
            debug_log_path: None,
            log_level: log::LevelFilter::Debug,
        }
    }
}

impl RunOptions {
    /// プロセス引数と環境変数から構築
    pub fn from_env() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut options = Self::parse(&args);
        if options.debug_log_path.is_none() && std::env::var_os(DEBUG_ENV).is_some() {
            options.debug_log_path = default_log_path();
        }
        options
    }

    /// 引数を解析（未知のフラグは無視）
    pub fn parse(args: &[String]) -> Self {
        let mut options = Self::default();

        let mut iter = args.iter().peekable();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--debug-log" => {
                    let path = iter
                        .next_if(|next| !next.starts_with('-'))
                        .map(PathBuf::from);
                    options.debug_log_path = path.or_else(default_log_path);
                }
                "--log-level" => {
                    if let Some(level) = iter.next().and_then(|value| value.parse().ok()) {
                        options.log_level = level;
                    }
                }
                flag if flag.starts_with('-') => {}
                name => {
                    if options.initial_file.is_none() {
                        options.initial_file = Some(name.to_string());
                    }
                }
            }
        }

        options
    }
}

fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".minivi-log").join("debug.log"))
}

/// ヘルパー：親ディレクトリを作成
pub(crate) fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
