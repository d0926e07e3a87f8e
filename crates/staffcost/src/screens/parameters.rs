//! Parameter editing screen
//!
//! A grouped, scrollable form over every engine input. Values are edited
//! either by typing a number (Enter to start and commit) or by stepping
//! with +/-. Industry templates are picked with `t` and applied with `T`.

use crate::components::{Component, EventResult};
use crate::fields::{ParamField, ParamGroup};
use crate::state::AppState;
use crate::util::format::format_eur_signed;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct ParametersScreen {
    /// First visible form line
    scroll: usize,
}

impl ParametersScreen {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    fn move_cursor(state: &mut AppState, delta: isize) {
        let len = ParamField::ALL.len() as isize;
        let next = (state.field_cursor as isize + delta).clamp(0, len - 1);
        state.field_cursor = next as usize;
    }

    fn step_field(state: &mut AppState, direction: f64) {
        let field = ParamField::ALL[state.field_cursor];
        let value = field.get(&state.params) + direction * field.step();
        field.set(&mut state.params, value);
    }

    fn start_edit(state: &mut AppState) {
        let field = ParamField::ALL[state.field_cursor];
        let value = field.get(&state.params);
        let text = if value.fract() == 0.0 {
            format!("{value:.0}")
        } else {
            format!("{value}")
        };
        state.edit_buffer = Some(text);
    }

    fn commit_edit(state: &mut AppState) {
        let Some(buffer) = state.edit_buffer.take() else {
            return;
        };
        match buffer.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => {
                let field = ParamField::ALL[state.field_cursor];
                field.set(&mut state.params, value);
                state.clear_error();
            }
            _ => {
                state.set_error(format!("Not a number: {buffer:?}"));
            }
        }
    }

    fn handle_edit_key(key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Enter => Self::commit_edit(state),
            KeyCode::Esc => state.edit_buffer = None,
            KeyCode::Backspace => {
                if let Some(buffer) = &mut state.edit_buffer {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                if let Some(buffer) = &mut state.edit_buffer {
                    buffer.push(c);
                }
            }
            // Swallow everything else while typing
            _ => {}
        }
        EventResult::Handled
    }

    fn format_value(field: ParamField, value: f64) -> String {
        if field.is_integer() || value.fract() == 0.0 {
            format!("{value:.0}")
        } else {
            format!("{value:.1}")
        }
    }

    /// Build the form lines and the display index of the selected field
    fn form_lines<'a>(&self, state: &'a AppState) -> (Vec<Line<'a>>, usize) {
        let mut lines = Vec::new();
        let mut selected_line = 0;
        let mut last_group: Option<ParamGroup> = None;

        for (idx, field) in ParamField::ALL.iter().enumerate() {
            let group = field.group();
            if last_group != Some(group) {
                if last_group.is_some() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(
                    group.title(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
                last_group = Some(group);
            }

            let selected = idx == state.field_cursor;
            let value = if selected && state.edit_buffer.is_some() {
                format!("{}_", state.edit_buffer.as_deref().unwrap_or(""))
            } else {
                Self::format_value(*field, field.get(&state.params))
            };

            let text = format!("  {:<26} {:>12} {}", field.label(), value, field.unit());
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            if selected {
                selected_line = lines.len();
            }
            lines.push(Line::from(Span::styled(text, style)));
        }

        (lines, selected_line)
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let gap = state.params.salary_gap();
        let gap_note = if gap == 0.0 {
            "same salary level".to_string()
        } else {
            format!("new hire costs {} /year", format_eur_signed(gap))
        };

        let line = Line::from(vec![
            Span::raw("Template: "),
            Span::styled(
                format!("< {} >", state.template_cursor.name()),
                Style::default().fg(Color::Magenta),
            ),
            Span::raw("   Industry: "),
            Span::styled(
                state.params.industry.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(gap_note, Style::default().fg(Color::DarkGray)),
        ]);

        let paragraph =
            Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(paragraph, area);
    }
}

impl Default for ParametersScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ParametersScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.edit_buffer.is_some() {
            return Self::handle_edit_key(key, state);
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                Self::move_cursor(state, 1);
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                Self::move_cursor(state, -1);
                EventResult::Handled
            }
            KeyCode::Char('g') => {
                state.field_cursor = 0;
                EventResult::Handled
            }
            KeyCode::Char('G') => {
                state.field_cursor = ParamField::ALL.len() - 1;
                EventResult::Handled
            }
            KeyCode::Enter => {
                Self::start_edit(state);
                EventResult::Handled
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                Self::step_field(state, 1.0);
                EventResult::Handled
            }
            KeyCode::Char('-') => {
                Self::step_field(state, -1.0);
                EventResult::Handled
            }
            KeyCode::Char('t') => {
                state.template_cursor = state.template_cursor.next();
                EventResult::Handled
            }
            KeyCode::Char('T') => {
                state.apply_highlighted_template();
                EventResult::Handled
            }
            KeyCode::Char('r') => {
                state.reset_params();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        self.render_header(frame, chunks[0], state);

        let (lines, selected_line) = self.form_lines(state);
        let visible = chunks[1].height.saturating_sub(2) as usize;

        // Keep the selected row in view
        if visible > 0 {
            if selected_line < self.scroll {
                self.scroll = selected_line;
            } else if selected_line >= self.scroll + visible {
                self.scroll = selected_line + 1 - visible;
            }
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" PARAMETERS "))
            .scroll((self.scroll as u16, 0));
        frame.render_widget(paragraph, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_cursor_clamps_at_ends() {
        let mut screen = ParametersScreen::new();
        let mut state = AppState::default();

        assert_eq!(
            screen.handle_key(key(KeyCode::Char('k')), &mut state),
            EventResult::Handled
        );
        assert_eq!(state.field_cursor, 0);

        screen.handle_key(key(KeyCode::Char('G')), &mut state);
        screen.handle_key(key(KeyCode::Char('j')), &mut state);
        assert_eq!(state.field_cursor, ParamField::ALL.len() - 1);
    }

    #[test]
    fn test_stepping_changes_value() {
        let mut screen = ParametersScreen::new();
        let mut state = AppState::default();

        // Cursor starts on the hire salary field
        let before = state.params.hire_salary;
        screen.handle_key(key(KeyCode::Char('+')), &mut state);
        assert_eq!(state.params.hire_salary, before + 1_000.0);

        screen.handle_key(key(KeyCode::Char('-')), &mut state);
        screen.handle_key(key(KeyCode::Char('-')), &mut state);
        assert_eq!(state.params.hire_salary, before - 1_000.0);
    }

    #[test]
    fn test_typed_edit_commits() {
        let mut screen = ParametersScreen::new();
        let mut state = AppState::default();

        screen.handle_key(key(KeyCode::Enter), &mut state);
        assert!(state.edit_buffer.is_some());

        // Replace the prefilled value with 72000
        while state
            .edit_buffer
            .as_ref()
            .is_some_and(|b| !b.is_empty())
        {
            screen.handle_key(key(KeyCode::Backspace), &mut state);
        }
        for c in "72000".chars() {
            screen.handle_key(key(KeyCode::Char(c)), &mut state);
        }
        screen.handle_key(key(KeyCode::Enter), &mut state);

        assert!(state.edit_buffer.is_none());
        assert_eq!(state.params.hire_salary, 72_000.0);
    }

    #[test]
    fn test_empty_edit_sets_error() {
        let mut screen = ParametersScreen::new();
        let mut state = AppState::default();

        screen.handle_key(key(KeyCode::Enter), &mut state);
        while state
            .edit_buffer
            .as_ref()
            .is_some_and(|b| !b.is_empty())
        {
            screen.handle_key(key(KeyCode::Backspace), &mut state);
        }
        screen.handle_key(key(KeyCode::Enter), &mut state);

        assert!(state.error_message.is_some());
        assert_eq!(state.params.hire_salary, 60_000.0);
    }

    #[test]
    fn test_template_pick_and_apply() {
        use staffcost_core::Industry;

        let mut screen = ParametersScreen::new();
        let mut state = AppState::default();

        screen.handle_key(key(KeyCode::Char('t')), &mut state);
        assert_eq!(state.template_cursor, Industry::Healthcare);

        screen.handle_key(key(KeyCode::Char('T')), &mut state);
        assert_eq!(state.params.industry, "Healthcare");
        assert_eq!(state.params.hire_salary, 65_000.0);
    }
}
