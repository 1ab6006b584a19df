use crate::errors::AppResult;
use crate::form::{LabeledField, RecordForm};
use crate::models::{BindingPolicy, ControlKind};
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

fn color_for_kind(kind: ControlKind) -> Colour {
    match kind {
        ControlKind::Entry => Colour::White,
        ControlKind::ChoiceList => Colour::Cyan,
        ControlKind::Spinner => Colour::Green,
        ControlKind::Toggle => Colour::Yellow,
        ControlKind::MultiLine => Colour::Purple,
    }
}

fn binding_label(field: &LabeledField) -> String {
    match field.descriptor().binding {
        BindingPolicy::HasBinding(v) => v.as_str().to_string(),
        BindingPolicy::DirectRead => "direct".to_string(),
    }
}

/// Handle the `fields` command: one line per column of the output file.
pub fn handle() -> AppResult<()> {
    let form = RecordForm::new();

    let mut table = Table::new(vec![
        Column::new("Group"),
        Column::new("Name"),
        Column::new("Label"),
        Column::new("Control"),
        Column::new("Value"),
        Column::new("Constraints"),
    ]);

    for group in form.groups() {
        let title = group.title.clone().unwrap_or_else(|| "-".to_string());
        for index in &group.fields {
            let Some(field) = form.field_at(*index) else {
                continue;
            };
            let kind = field.kind();
            table.add_row(vec![
                colorize_optional(&title),
                field.name().to_string(),
                field.label().to_string(),
                color_for_kind(kind).paint(kind.as_str()).to_string(),
                binding_label(field),
                colorize_optional(&field.constraints().describe()),
            ]);
        }
    }

    print!("{}", table.render());
    Ok(())
}
