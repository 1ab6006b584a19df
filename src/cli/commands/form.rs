use crate::config::Config;
use crate::core::Application;
use crate::errors::AppResult;
use crate::ui::tui;

/// Handle the `form` command (also the default)
pub fn handle(cfg: &Config) -> AppResult<()> {
    std::fs::create_dir_all(cfg.output_path())?;

    let mut app = Application::new(cfg);
    app.set_status(format!("Records go to {}", cfg.output_path().display()));

    tui::run(&mut app)?;

    if app.records_saved() > 0 {
        crate::ui::messages::success(app.status());
    }
    Ok(())
}
