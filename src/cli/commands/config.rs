use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, header, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            header("Current configuration");
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{yaml}");
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                cfg.save()?;
            }
            edit(&path, editor.clone());
        }
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn launch(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Open `path` with the requested editor, falling back to the default one.
fn edit(path: &Path, requested: Option<String>) {
    let fallback = default_editor();
    let editor = requested.unwrap_or_else(|| fallback.clone());

    if launch(&editor, path) {
        success(format!("Configuration file edited with '{editor}'"));
        return;
    }

    warning(format!(
        "Editor '{editor}' not available, falling back to '{fallback}'"
    ));
    if launch(&fallback, path) {
        success(format!("Configuration file edited with fallback '{fallback}'"));
    } else {
        error(format!("Failed to edit configuration file using '{fallback}'"));
    }
}
