use super::{RenderFrame, Terminal};
use crate::editor::EditorSession;
use crate::error::{InputError, MiniviError, Result, UiError};
use crate::file::FileStorage;
use crate::input::KeyEvent;
use crate::options::RunOptions;
use crate::ui::Renderer;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::{Backend, CrosstermBackend};
use std::io::{stdout, Stdout};

/// crossterm + ratatui による端末
pub struct TuiTerminal<B: Backend> {
    terminal: ratatui::Terminal<B>,
    renderer: Renderer,
}

impl<B: Backend> TuiTerminal<B> {
    pub fn new(backend: B) -> Result<Self> {
        let terminal =
            ratatui::Terminal::new(backend).map_err(|err| terminal_error("terminal init", err))?;
        Ok(Self {
            terminal,
            renderer: Renderer::new(),
        })
    }
}

impl<B: Backend> Terminal for TuiTerminal<B> {
    fn read_input_event(&mut self) -> Result<Option<KeyEvent>> {
        match event::read().map_err(input_error)? {
            Event::Key(key_event) => Ok(KeyEvent::from_crossterm(key_event)),
            // リサイズ等は再描画のみ
            _ => Ok(None),
        }
    }

    fn render(&mut self, frame: &RenderFrame<'_>) -> Result<()> {
        self.renderer
            .render(&mut self.terminal, frame)
            .map_err(|err| terminal_error("render", err))
    }
}

/// 端末上でセッションを動かすアプリケーション
pub struct TuiApplication {
    session: EditorSession<FileStorage>,
}

impl TuiApplication {
    pub fn new(options: &RunOptions) -> Result<Self> {
        let mut session = EditorSession::new(FileStorage::new());
        if let Some(name) = &options.initial_file {
            session.open(name.as_str());
        }
        Ok(Self { session })
    }

    pub fn run(&mut self) -> Result<()> {
        enter_terminal()?;

        let loop_result = self.event_loop();
        let cleanup_result = leave_terminal();

        loop_result.and(cleanup_result)
    }

    fn event_loop(&mut self) -> Result<()> {
        let backend: CrosstermBackend<Stdout> = CrosstermBackend::new(stdout());
        let mut terminal = TuiTerminal::new(backend)?;
        self.session.run(&mut terminal)
    }
}

fn enter_terminal() -> Result<()> {
    enter_terminal_with(
        enable_raw_mode,
        || {
            let mut out = stdout();
            execute!(out, EnterAlternateScreen)
        },
        disable_raw_mode,
    )
}

/// raw モード → 代替画面の順に切り替える。後段が失敗したら raw モードを戻す。
fn enter_terminal_with(
    enable_raw: impl FnOnce() -> std::io::Result<()>,
    enter_screen: impl FnOnce() -> std::io::Result<()>,
    disable_raw: impl FnOnce() -> std::io::Result<()>,
) -> Result<()> {
    enable_raw().map_err(|_| MiniviError::Ui(UiError::TerminalInit))?;
    if let Err(err) = enter_screen() {
        let _ = disable_raw();
        return Err(terminal_error("enter alternate screen", err));
    }
    Ok(())
}

fn leave_terminal() -> Result<()> {
    let mut out = stdout();
    execute!(out, LeaveAlternateScreen).map_err(|err| terminal_error("leave alternate screen", err))?;
    disable_raw_mode().map_err(|err| terminal_error("disable raw mode", err))?;
    Ok(())
}

/// パニック時などに端末を通常状態へ戻す（失敗は無視）
pub fn restore_terminal() {
    let _ = leave_terminal();
}

fn terminal_error(context: &str, err: impl std::fmt::Display) -> MiniviError {
    MiniviError::Ui(UiError::RenderingFailed {
        component: format!("{}: {}", context, err),
    })
}

fn input_error(err: std::io::Error) -> MiniviError {
    MiniviError::Input(InputError::ReadFailed {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;

    #[test]
    fn failed_screen_switch_restores_raw_mode() {
        let calls = RefCell::new(Vec::new());
        let result = enter_terminal_with(
            || {
                calls.borrow_mut().push("enable");
                Ok(())
            },
            || Err(io::Error::new(io::ErrorKind::Other, "no tty")),
            || {
                calls.borrow_mut().push("disable");
                Ok(())
            },
        );

        assert!(matches!(result, Err(MiniviError::Ui(UiError::RenderingFailed { .. }))));
        assert_eq!(*calls.borrow(), vec!["enable", "disable"]);
    }

    #[test]
    fn successful_entry_keeps_raw_mode() {
        let calls = RefCell::new(Vec::new());
        let result = enter_terminal_with(
            || {
                calls.borrow_mut().push("enable");
                Ok(())
            },
            || Ok(()),
            || {
                calls.borrow_mut().push("disable");
                Ok(())
            },
        );

        assert!(result.is_ok());
        assert_eq!(*calls.borrow(), vec!["enable"]);
    }

    #[test]
    fn raw_mode_failure_is_terminal_init_error() {
        let result = enter_terminal_with(
            || Err(io::Error::new(io::ErrorKind::Other, "denied")),
            || Ok(()),
            || Ok(()),
        );
        assert_eq!(result, Err(MiniviError::Ui(UiError::TerminalInit)));
    }
}
