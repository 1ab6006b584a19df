//! Widget-level edits: what typing, spinning or clicking does to a field.
//!
//! Every edit that changes displayed text goes through
//! [`LabeledField::propose`], so keystroke filters see each proposed content
//! before the control accepts it.

use crate::form::LabeledField;
use crate::models::{BindingPolicy, ControlKind, FieldValue, ValueKind};
use crate::utils::formatting::step_decimals;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Type one character at the end of the field's content.
pub fn type_char(field: &mut LabeledField, c: char) -> bool {
    if !field.kind().accepts_typing() {
        return false;
    }
    if c.is_control() && !(c == '\n' && field.kind() == ControlKind::MultiLine) {
        return false;
    }
    let mut candidate = field.display_text();
    candidate.push(c);
    field.propose(candidate)
}

/// Delete the last character.
pub fn backspace(field: &mut LabeledField) -> bool {
    if !field.kind().accepts_typing() {
        return false;
    }
    let mut candidate = field.display_text();
    if candidate.pop().is_none() {
        return false;
    }
    field.propose(candidate)
}

pub fn newline(field: &mut LabeledField) -> bool {
    type_char(field, '\n')
}

/// Type `text` keystroke by keystroke. Returns how many keystrokes the
/// field rejected.
pub fn enter_text(field: &mut LabeledField, text: &str) -> usize {
    text.chars().filter(|c| !type_char(field, *c)).count()
}

/// Flip a check box.
pub fn toggle(field: &mut LabeledField) -> bool {
    if field.kind() != ControlKind::Toggle {
        return false;
    }
    let on = field.is_checked();
    field.set(!on);
    true
}

/// Spinner arrows and choice-list cycling.
pub fn spin(field: &mut LabeledField, dir: Direction) -> bool {
    match field.kind() {
        ControlKind::Spinner => spin_number(field, dir),
        ControlKind::ChoiceList => cycle_choice(field, dir),
        _ => false,
    }
}

fn spin_number(field: &mut LabeledField, dir: Direction) -> bool {
    let c = field.constraints();
    let min = c.min.unwrap_or(0.0);
    let max = c.max.unwrap_or(f64::MAX);
    let step = c.step.unwrap_or(1.0);

    let next = match field.get().as_f64() {
        None => min,
        Some(v) => match dir {
            Direction::Up => v + step,
            Direction::Down => v - step,
        },
    }
    .min(max)
    .max(min);

    let text = match field.descriptor().binding {
        BindingPolicy::HasBinding(ValueKind::Int) => format!("{}", next.round() as i64),
        _ => format!("{:.*}", step_decimals(step), next),
    };
    field.propose(text)
}

fn cycle_choice(field: &mut LabeledField, dir: Direction) -> bool {
    let choices = &field.constraints().choices;
    if choices.is_empty() {
        return false;
    }
    let current = field.display_text();
    let next = match choices.iter().position(|c| *c == current) {
        None => 0,
        Some(i) => match dir {
            Direction::Down => (i + 1) % choices.len(),
            Direction::Up => (i + choices.len() - 1) % choices.len(),
        },
    };
    let choice = choices[next].clone();
    field.set(FieldValue::Text(choice));
    true
}
