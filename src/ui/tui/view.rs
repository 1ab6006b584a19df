//! Focus and key dispatch for the full-screen form.

use crate::core::Application;
use crate::errors::AppResult;
use crate::form::control::{self, Direction};
use crate::models::ControlKind;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Save,
}

#[derive(Debug)]
pub struct FormView {
    focus: Focus,
    running: bool,
}

impl Default for FormView {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView {
    pub fn new() -> Self {
        Self {
            focus: Focus::Field(0),
            running: true,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn focus_next(&mut self, app: &Application) {
        let total = app.form().len();
        self.focus = match self.focus {
            Focus::Field(i) if i + 1 < total => Focus::Field(i + 1),
            Focus::Field(_) => Focus::Save,
            Focus::Save => Focus::Field(0),
        };
    }

    pub fn focus_prev(&mut self, app: &Application) {
        let total = app.form().len();
        self.focus = match self.focus {
            Focus::Field(0) => Focus::Save,
            Focus::Field(i) => Focus::Field(i - 1),
            Focus::Save => Focus::Field(total.saturating_sub(1)),
        };
    }

    fn save(&mut self, app: &mut Application) -> AppResult<()> {
        app.on_save()?;
        self.focus = Focus::Field(0);
        Ok(())
    }

    /// Apply one key event. Only a failing save returns an error.
    pub fn handle_key(&mut self, app: &mut Application, key: KeyEvent) -> AppResult<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.running = false;
                return Ok(());
            }
            KeyCode::Char('c') if ctrl => {
                self.running = false;
                return Ok(());
            }
            KeyCode::Char('s') if ctrl => return self.save(app),
            KeyCode::Tab => {
                self.focus_next(app);
                return Ok(());
            }
            KeyCode::BackTab => {
                self.focus_prev(app);
                return Ok(());
            }
            _ => {}
        }

        let index = match self.focus {
            Focus::Save => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.save(app)?;
                }
                return Ok(());
            }
            Focus::Field(i) => i,
        };

        let Some(field) = app.form_mut().field_at_mut(index) else {
            return Ok(());
        };

        match (field.kind(), key.code) {
            (ControlKind::Toggle, KeyCode::Char(' ') | KeyCode::Enter) => {
                control::toggle(field);
            }
            (ControlKind::MultiLine, KeyCode::Enter) => {
                control::newline(field);
            }
            (_, KeyCode::Enter) => self.focus_next(app),
            (_, KeyCode::Up) => {
                control::spin(field, Direction::Up);
            }
            (_, KeyCode::Down) => {
                control::spin(field, Direction::Down);
            }
            (_, KeyCode::Backspace) => {
                control::backspace(field);
            }
            (_, KeyCode::Char(c)) if !ctrl => {
                control::type_char(field, c);
            }
            _ => {}
        }

        Ok(())
    }
}
