//! A label paired with one input control and its value binding.
//!
//! Every control kind answers the same `get`/`set` contract, so the form can
//! treat all fields alike. Dispatch happens on the descriptor's
//! [`ControlKind`] and on the field's [`Binding`], never on the concrete
//! widget the front end draws.

use crate::errors::AppResult;
use crate::form::BoundValue;
use crate::models::{BindingPolicy, Constraints, ControlKind, FieldDescriptor, FieldValue};

/// Content of a control that has no holder.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlContent {
    Text(String),
    Checked(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Bound(BoundValue),
    Direct(ControlContent),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledField {
    descriptor: FieldDescriptor,
    binding: Binding,
}

impl LabeledField {
    /// Build a field from its descriptor.
    ///
    /// # Panics
    ///
    /// When the constraints or binding policy do not fit the control kind.
    /// Such a descriptor is a defect in the form definition.
    pub fn new(descriptor: FieldDescriptor) -> Self {
        if let Err(msg) = descriptor.check() {
            panic!("invalid field descriptor: {msg}");
        }

        let binding = match descriptor.binding {
            BindingPolicy::HasBinding(kind) => Binding::Bound(BoundValue::new(kind)),
            BindingPolicy::DirectRead => match descriptor.kind {
                ControlKind::Toggle => Binding::Direct(ControlContent::Checked(false)),
                _ => Binding::Direct(ControlContent::Text(String::new())),
            },
        };

        Self {
            descriptor,
            binding,
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn label(&self) -> &str {
        &self.descriptor.label
    }

    pub fn kind(&self) -> ControlKind {
        self.descriptor.kind
    }

    pub fn constraints(&self) -> &Constraints {
        &self.descriptor.constraints
    }

    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    /// Read the value in the field's native type.
    pub fn try_get(&self) -> AppResult<FieldValue> {
        match &self.binding {
            Binding::Bound(holder) => holder.try_get(),
            Binding::Direct(ControlContent::Text(text)) => Ok(FieldValue::Text(text.clone())),
            Binding::Direct(ControlContent::Checked(on)) => Ok(FieldValue::Bool(*on)),
        }
    }

    /// Best-effort read: an unreadable value (empty or malformed numeric
    /// entry) comes back as [`FieldValue::Empty`] instead of an error, so a
    /// bad cell never blocks a save. Callers that must tell the two apart use
    /// [`LabeledField::try_get`].
    pub fn get(&self) -> FieldValue {
        self.try_get().unwrap_or(FieldValue::Empty)
    }

    /// Write a value into the field. Keystroke filters do not apply.
    pub fn set(&mut self, value: impl Into<FieldValue>) {
        let value = value.into();
        match &mut self.binding {
            Binding::Bound(holder) => holder.set(&value),
            Binding::Direct(ControlContent::Checked(on)) => *on = value.truthy(),
            Binding::Direct(ControlContent::Text(text)) => {
                text.clear();
                text.push_str(&value.to_string());
            }
        }
    }

    /// Content the control currently shows.
    pub fn display_text(&self) -> String {
        match &self.binding {
            Binding::Bound(holder) => holder.raw().to_string(),
            Binding::Direct(ControlContent::Text(text)) => text.clone(),
            Binding::Direct(ControlContent::Checked(on)) => on.to_string(),
        }
    }

    pub fn is_checked(&self) -> bool {
        match &self.binding {
            Binding::Bound(_) => self.get().truthy(),
            Binding::Direct(ControlContent::Checked(on)) => *on,
            Binding::Direct(ControlContent::Text(_)) => false,
        }
    }

    /// Keystroke filter. `candidate` is what the control would show once the
    /// keystroke is applied; it is written only when the constraints accept
    /// it. Returns whether the keystroke was accepted.
    pub fn propose(&mut self, candidate: String) -> bool {
        if !self.descriptor.constraints.accepts(&candidate) {
            return false;
        }
        match &mut self.binding {
            Binding::Bound(holder) => holder.set_raw(candidate),
            Binding::Direct(ControlContent::Text(text)) => *text = candidate,
            Binding::Direct(ControlContent::Checked(on)) => {
                *on = FieldValue::Text(candidate).truthy()
            }
        }
        true
    }
}
