//! エラーハンドリングシステム
//!
//! minivi 全体で使用されるエラー型とユーティリティを定義。
//! ストレージ由来のエラーはセッション内でステータスメッセージに変換され、
//! 読み込み・描画ループの外に出るのは端末エラーのみ。

use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MiniviError {
    /// ファイル操作エラー
    #[error("File operation failed: {0}")]
    File(#[from] FileError),

    /// UI操作エラー
    #[error("UI operation failed: {0}")]
    Ui(#[from] UiError),

    /// 入力処理エラー
    #[error("Input processing failed: {0}")]
    Input(#[from] InputError),
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl FileError {
    /// `std::io::Error` をパス情報付きで変換
    pub fn from_io(path: &str, error: &std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => FileError::NotFound {
                path: path.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => FileError::PermissionDenied {
                path: path.to_string(),
            },
            _ => FileError::Io {
                message: format!("{}: {}", path, error),
            },
        }
    }
}

/// UI操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("Terminal initialization failed")]
    TerminalInit,

    #[error("Rendering failed: {component}")]
    RenderingFailed { component: String },
}

/// 入力処理固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Input stream closed")]
    Closed,

    #[error("Event read failed: {message}")]
    ReadFailed { message: String },
}

impl MiniviError {
    /// ステータス行に表示する一行メッセージ
    pub fn status_text(&self) -> String {
        match self {
            MiniviError::File(FileError::NotFound { path }) => {
                format!("Error: file not found: {}", path)
            }
            MiniviError::File(FileError::PermissionDenied { path }) => {
                format!("Error: permission denied: {}", path)
            }
            MiniviError::File(FileError::InvalidPath { path }) => {
                format!("Error: invalid path: {}", path)
            }
            MiniviError::File(FileError::Io { message }) => format!("Error: {}", message),
            other => format!("Error: {}", other),
        }
    }
}

/// パニックハンドラの設定
///
/// 端末を raw モードのまま放置しないよう、出力前に復帰させる。
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        crate::frontend::tui::restore_terminal();

        let (file, line) = panic_info
            .location()
            .map(|location| (location.file(), location.line()))
            .unwrap_or(("unknown", 0));

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s
        } else {
            "Unknown panic payload"
        };

        log::error!("panic at {}:{}: {}", file, line, message);
        eprintln!("PANIC at {}:{}: {}", file, line, message);
        eprintln!("Stack trace: {}", std::backtrace::Backtrace::capture());

        std::process::exit(1);
    }));
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, MiniviError>;

/// 各モジュール固有のResult型
pub mod file {
    pub type Result<T> = std::result::Result<T, super::FileError>;
}

// std::io::Error から MiniviError への変換
impl From<std::io::Error> for MiniviError {
    fn from(error: std::io::Error) -> Self {
        MiniviError::File(FileError::Io {
            message: error.to_string(),
        })
    }
}
