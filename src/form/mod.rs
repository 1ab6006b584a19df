mod bound_value;
pub mod control;
mod labeled_field;
mod record_form;

pub use bound_value::BoundValue;
pub use labeled_field::{Binding, ControlContent, LabeledField};
pub use record_form::{DATE_MAX_CHARS, FieldGroup, RecordForm, TIME_CHOICES};
