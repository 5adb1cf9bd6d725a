//! プラットフォーム非依存のキー表現
//!
//! 端末から届く生のキーイベントを、モード制御が扱うキーに変換する。

use crossterm::event::{KeyCode, KeyEvent as RawKeyEvent, KeyEventKind, KeyModifiers};

/// エディタが解釈するキーイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// 印字可能文字
    Char(char),
    Enter,
    Backspace,
    Escape,
    Left,
    Right,
    Up,
    Down,
}

impl KeyEvent {
    /// crossterm のキーイベントを変換（対象外のキーは `None`）
    pub fn from_crossterm(event: RawKeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        match event.code {
            KeyCode::Char(ch) if is_character_input(event.modifiers) => Some(KeyEvent::Char(ch)),
            KeyCode::Tab => Some(KeyEvent::Char('\t')),
            KeyCode::Enter => Some(KeyEvent::Enter),
            KeyCode::Backspace => Some(KeyEvent::Backspace),
            KeyCode::Esc => Some(KeyEvent::Escape),
            KeyCode::Left => Some(KeyEvent::Left),
            KeyCode::Right => Some(KeyEvent::Right),
            KeyCode::Up => Some(KeyEvent::Up),
            KeyCode::Down => Some(KeyEvent::Down),
            _ => None,
        }
    }

    /// 文字列をキー列に変換（テスト・ベンチマーク用の入力生成）
    pub fn sequence(text: &str) -> Vec<KeyEvent> {
        text.chars().map(KeyEvent::Char).collect()
    }
}

// 修飾キーなし、またはShiftのみ
fn is_character_input(modifiers: KeyModifiers) -> bool {
    modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(code: KeyCode, modifiers: KeyModifiers) -> RawKeyEvent {
        RawKeyEvent::new(code, modifiers)
    }

    #[test]
    fn plain_and_shifted_chars_are_printable() {
        assert_eq!(
            KeyEvent::from_crossterm(raw(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(KeyEvent::Char('a'))
        );
        assert_eq!(
            KeyEvent::from_crossterm(raw(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(KeyEvent::Char('A'))
        );
    }

    #[test]
    fn control_chords_are_ignored() {
        assert_eq!(
            KeyEvent::from_crossterm(raw(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn special_keys_map_to_tags() {
        assert_eq!(
            KeyEvent::from_crossterm(raw(KeyCode::Esc, KeyModifiers::NONE)),
            Some(KeyEvent::Escape)
        );
        assert_eq!(
            KeyEvent::from_crossterm(raw(KeyCode::Tab, KeyModifiers::NONE)),
            Some(KeyEvent::Char('\t'))
        );
        assert_eq!(
            KeyEvent::from_crossterm(raw(KeyCode::Up, KeyModifiers::NONE)),
            Some(KeyEvent::Up)
        );
        assert_eq!(
            KeyEvent::from_crossterm(raw(KeyCode::F(1), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn release_events_are_dropped() {
        let mut event = raw(KeyCode::Char('x'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(KeyEvent::from_crossterm(event), None);
    }
}
