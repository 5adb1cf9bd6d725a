//! エディタモジュール
//!
//! モード状態機械と編集状態、それらを束ねるセッション

pub mod clipboard;
pub mod edit_operations;
pub mod mode;
pub mod session;
pub mod state;

// 公開API
pub use clipboard::ClipboardSlot;
pub use edit_operations::EditContext;
pub use mode::{Mode, ModeController, ModeOutcome, INSERT_MODE_INDICATOR};
pub use session::EditorSession;
pub use state::{EditorState, StatusMessage};
