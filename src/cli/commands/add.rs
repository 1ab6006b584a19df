use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Application;
use crate::errors::{AppError, AppResult};
use crate::form::control;
use crate::models::{ControlKind, FieldValue};
use crate::ui::messages::{success, warning};

/// Fill one field the way the form would: typed controls receive the value
/// keystroke by keystroke, the others are set directly.
fn fill(app: &mut Application, name: &str, value: &str) -> AppResult<()> {
    let field = app
        .form_mut()
        .field_mut(name)
        .ok_or_else(|| AppError::UnknownField(name.to_string()))?;

    if field.kind().accepts_typing() {
        let rejected = control::enter_text(field, value);
        if rejected > 0 {
            warning(format!(
                "{name}: {rejected} keystroke(s) rejected, keeping '{}'",
                field.display_text()
            ));
        }
    } else {
        field.set(FieldValue::Text(value.to_string()));
    }

    if field.kind() == ControlKind::Spinner && field.try_get().is_err() {
        warning(format!(
            "{name}: '{}' is not a number, the cell will be saved empty",
            field.display_text()
        ));
    }

    Ok(())
}

/// Add one record to today's file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        time,
        technician,
        humidity,
        temperature,
        light,
        fault,
        plants,
        blossoms,
        fruit,
        max_height,
        min_height,
        median_height,
        notes,
    } = cmd
    {
        std::fs::create_dir_all(cfg.output_path())?;
        let mut app = Application::new(cfg);

        let values = [
            ("Date", date),
            ("Time", time),
            ("Technician", technician),
            ("Humidity", humidity),
            ("Temperature", temperature),
            ("Light", light),
            ("Plants", plants),
            ("Blossoms", blossoms),
            ("Fruit", fruit),
            ("Max. Height", max_height),
            ("Min. Height", min_height),
            ("Median Height", median_height),
            ("Notes", notes),
        ];
        for (name, value) in values {
            if let Some(v) = value {
                fill(&mut app, name, v)?;
            }
        }
        app.form_mut().set("Equipment Fault", *fault)?;

        let outcome = app.on_save()?;
        if outcome.created {
            success(format!("Created {}", outcome.path.display()));
        }
        success(format!("Record saved to {}", outcome.path.display()));
    }

    Ok(())
}
