use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};

use crate::board::{Board, Direction, ListItem, Task};
use crate::config::{Config, Theme};

use super::input::{EditorMode, EditorSession};
use super::task_list::TaskList;
use super::view;

type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Input delivered to the controller by the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The terminal size is known (sent once at startup, then on every resize)
    Resize { width: u16, height: u16 },
    Key(KeyEvent),
}

/// What the event loop should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Render,
    Quit,
}

/// Application state (separate from terminal for borrow checker)
pub(super) struct AppState {
    pub(super) board: Board,
    pub(super) lists: [TaskList; 3],
    pub(super) session: EditorSession,
    pub(super) theme: Theme,
    pub(super) viewport: Option<(u16, u16)>,
}

impl AppState {
    pub(super) fn new(theme: Theme) -> Self {
        Self {
            board: Board::new(),
            lists: Default::default(),
            session: EditorSession::default(),
            theme,
            viewport: None,
        }
    }

    /// True once the first viewport size arrived and the board was seeded
    pub(super) fn is_loaded(&self) -> bool {
        self.viewport.is_some()
    }

    pub(super) fn focused_list(&self) -> &TaskList {
        &self.lists[self.board.focused().index()]
    }

    pub(super) fn handle_event(&mut self, event: AppEvent) -> Signal {
        match event {
            AppEvent::Resize { width, height } => {
                if !self.is_loaded() {
                    self.board = Board::seeded();
                    tracing::info!(width, height, "board seeded");
                }
                self.viewport = Some((width, height));
                Signal::Render
            }
            AppEvent::Key(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Signal {
        if is_ctrl_c(&key) {
            return Signal::Quit;
        }
        if !self.is_loaded() {
            return match key.code {
                KeyCode::Char('q') => Signal::Quit,
                _ => Signal::Render,
            };
        }
        match self.session.mode() {
            EditorMode::Normal => self.handle_normal_key(key),
            EditorMode::Adding | EditorMode::Editing => self.handle_compose_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Signal {
        // A filter being typed captures every key
        if self.focused_list().is_filtering() {
            self.forward_to_list(key);
            return Signal::Render;
        }

        match key.code {
            KeyCode::Char('q') => return Signal::Quit,
            KeyCode::Char('a') => self.session.begin_add(),
            KeyCode::Char('e') => {
                if let Some(task) = self.visible_selected_task() {
                    let description = task.description().to_string();
                    self.session.begin_edit(&description);
                }
            }
            KeyCode::Enter => self.move_selected(Direction::Forward),
            KeyCode::Backspace => self.move_selected(Direction::Backward),
            KeyCode::Char('d') => {
                if self.visible_selected_task().is_none() {
                    tracing::debug!("remove ignored: no visible selection");
                } else if self.board.remove_selected().is_some() {
                    self.sync_lists();
                }
            }
            KeyCode::Char('h') | KeyCode::Left => self.board.focus_prev(),
            KeyCode::Char('l') | KeyCode::Right => self.board.focus_next(),
            _ => self.forward_to_list(key),
        }
        Signal::Render
    }

    fn handle_compose_key(&mut self, key: KeyEvent) -> Signal {
        match (key.code, self.session.mode()) {
            (KeyCode::Enter, EditorMode::Adding) => {
                let text = self.session.finish();
                self.board.add_task(&text);
                self.sync_lists();
            }
            (KeyCode::Enter, EditorMode::Editing) => {
                let text = self.session.finish();
                self.board.edit_selected(&text);
                self.sync_lists();
            }
            (KeyCode::Esc, mode) => {
                tracing::debug!(?mode, "compose cancelled");
                self.session.reset();
            }
            _ => self.session.input_mut().handle_key(key),
        }
        Signal::Render
    }

    /// Selected task of the focused column, if its filter shows it
    fn visible_selected_task(&self) -> Option<&Task> {
        let column = self.board.focused_column();
        self.focused_list().selected_visible(column)?;
        column.selected_task()
    }

    fn move_selected(&mut self, direction: Direction) {
        if self.visible_selected_task().is_none() {
            tracing::debug!(?direction, "move ignored: no visible selection");
            return;
        }
        self.board.move_selected(direction);
        self.sync_lists();
    }

    fn forward_to_list(&mut self, key: KeyEvent) {
        let index = self.board.focused().index();
        let column = self.board.focused_column_mut();
        self.lists[index].handle_key(column, key);
    }

    /// Keep the focused column's selection on a task its filter shows
    fn sync_lists(&mut self) {
        let index = self.board.focused().index();
        let column = self.board.focused_column_mut();
        self.lists[index].sync(column);
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

pub struct App {
    terminal: Terminal,
    state: AppState,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        // Setup terminal
        enable_raw_mode().context("Terminal is not available")?;
        let terminal = match setup_terminal() {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(err);
            }
        };

        Ok(Self {
            terminal,
            state: AppState::new(config.theme()),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let size = self.terminal.size()?;
        self.state.handle_event(AppEvent::Resize {
            width: size.width,
            height: size.height,
        });

        loop {
            self.draw()?;

            let event = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Event::Resize(width, height) => AppEvent::Resize { width, height },
                _ => continue,
            };

            if self.state.handle_event(event) == Signal::Quit {
                tracing::info!("quit requested");
                return Ok(());
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let state = &self.state;
        self.terminal.draw(|frame| view::draw(state, frame))?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}

fn setup_terminal() -> Result<Terminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
