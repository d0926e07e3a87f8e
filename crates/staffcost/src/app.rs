use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::screens::{ComparisonScreen, ParametersScreen};
use crate::state::{AppState, TabId};

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    parameters_screen: ParametersScreen,
    comparison_screen: ComparisonScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            parameters_screen: ParametersScreen::new(),
            comparison_screen: ComparisonScreen::new(),
        }
    }

    /// Create app with a data directory for logs and exported reports
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            state: AppState::with_data_dir(data_dir),
            ..Self::new()
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Parameters => self.parameters_screen.render(frame, area, &self.state),
            TabId::Comparison => self.comparison_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // A field edit captures everything except Ctrl+C
        if self.state.edit_buffer.is_some() {
            if key_event.code == KeyCode::Char('c')
                && key_event.modifiers.contains(KeyModifiers::CONTROL)
            {
                self.state.exit = true;
                return;
            }
            self.parameters_screen
                .handle_key(key_event, &mut self.state);
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                self.state.status_message = None;
                return;
            }
            _ => {}
        }

        // Try tab bar first
        if self.tab_bar.handle_key(key_event, &mut self.state) != EventResult::NotHandled {
            return;
        }

        // Then the active screen
        let result = match self.state.active_tab {
            TabId::Parameters => self
                .parameters_screen
                .handle_key(key_event, &mut self.state),
            TabId::Comparison => self
                .comparison_screen
                .handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_quit_key_sets_exit() {
        let mut app = App::new();
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(app.state.exit);
    }

    #[test]
    fn test_tab_switching() {
        let mut app = App::new();
        assert_eq!(app.state.active_tab, TabId::Parameters);

        app.handle_key_event(key(KeyCode::Char('2')));
        assert_eq!(app.state.active_tab, TabId::Comparison);

        app.handle_key_event(key(KeyCode::Char('1')));
        assert_eq!(app.state.active_tab, TabId::Parameters);
    }

    #[test]
    fn test_q_is_captured_while_editing() {
        let mut app = App::new();
        app.handle_key_event(key(KeyCode::Enter));
        assert!(app.state.edit_buffer.is_some());

        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(!app.state.exit, "q must not quit during a field edit");

        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.state.edit_buffer.is_none());
    }

    #[test]
    fn test_esc_clears_messages() {
        let mut app = App::new();
        app.state.set_error("boom".to_string());
        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.state.error_message.is_none());
    }
}
