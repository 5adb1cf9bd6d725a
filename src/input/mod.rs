//! 入力処理モジュール

pub mod key;

pub use key::KeyEvent;
