//! レンダリング
//!
//! テキスト領域（行番号付き）、ステータスバー、メッセージ行の三段構成で
//! 毎回全体を再描画する。

use super::ViewportManager;
use crate::frontend::RenderFrame;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use unicode_width::UnicodeWidthChar;

/// 行番号欄の幅（4桁右寄せ + 空白）
pub const GUTTER_WIDTH: u16 = 5;

/// タブの表示幅
const TAB_WIDTH: usize = 4;

/// 全画面レンダラー
#[derive(Debug, Default)]
pub struct Renderer {
    viewport: ViewportManager,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            viewport: ViewportManager::default(),
        }
    }

    /// 端末に一画面分を描画
    pub fn render<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        view: &RenderFrame<'_>,
    ) -> io::Result<()> {
        terminal.draw(|frame| self.draw(frame, view))?;
        Ok(())
    }

    /// 現在の表示開始行
    pub fn top_line(&self) -> usize {
        self.viewport.top_line()
    }

    fn draw(&mut self, frame: &mut Frame<'_>, view: &RenderFrame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // テキスト
                Constraint::Length(1), // ステータスバー
                Constraint::Length(1), // メッセージ
            ])
            .split(frame.area());

        let text_area = chunks[0];
        self.viewport.set_height(text_area.height as usize);
        self.viewport.ensure_visible(view.cursor.row);

        self.draw_text(frame, text_area, view);

        let status_style = Style::default().fg(Color::Black).bg(Color::White);
        frame.render_widget(
            Paragraph::new(view.status_bar.as_str()).style(status_style),
            chunks[1],
        );
        frame.render_widget(Paragraph::new(view.message), chunks[2]);

        if let Some(position) = self.cursor_position(text_area, view) {
            frame.set_cursor_position(position);
        }
    }

    fn draw_text(&self, frame: &mut Frame<'_>, area: Rect, view: &RenderFrame<'_>) {
        let top = self.viewport.top_line();
        let lines: Vec<Line<'_>> = view
            .lines
            .iter()
            .enumerate()
            .skip(top)
            .take(area.height as usize)
            .map(|(index, text)| Line::from(format!("{:>4} {}", index + 1, expand_tabs(text))))
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn cursor_position(&self, area: Rect, view: &RenderFrame<'_>) -> Option<Position> {
        let row = view.cursor.row.checked_sub(self.viewport.top_line())?;
        if row >= area.height as usize {
            return None;
        }

        let line = view.lines.get(view.cursor.row).map(String::as_str).unwrap_or("");
        let column: usize = line.chars().take(view.cursor.col).map(char_width).sum();
        let max_x = area.width.saturating_sub(1) as usize;
        let x = (GUTTER_WIDTH as usize + column).min(max_x) as u16;

        Some(Position::new(area.x + x, area.y + row as u16))
    }
}

fn char_width(ch: char) -> usize {
    if ch == '\t' {
        TAB_WIDTH
    } else {
        ch.width().unwrap_or(0)
    }
}

fn expand_tabs(text: &str) -> String {
    if text.contains('\t') {
        text.replace('\t', &" ".repeat(TAB_WIDTH))
    } else {
        text.to_string()
    }
}
