//! Full-screen terminal form.

mod render;
mod view;

pub use view::{Focus, FormView};

use crate::core::Application;
use crate::errors::AppResult;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event};

/// Run the form until the user quits. The terminal is restored whatever the
/// outcome; a failing save ends the loop with its error.
pub fn run(app: &mut Application) -> AppResult<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut Application) -> AppResult<()> {
    let mut view = FormView::new();

    while view.is_running() {
        terminal.draw(|frame| render::draw(frame, app, &view))?;

        if let Event::Key(key) = event::read()? {
            view.handle_key(app, key)?;
        }
    }

    Ok(())
}
