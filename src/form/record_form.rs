use crate::errors::{AppError, AppResult};
use crate::form::LabeledField;
use crate::models::{Constraints, FieldDescriptor, FieldValue, Snapshot};

pub const DATE_MAX_CHARS: usize = 5;
pub const TIME_CHOICES: [&str; 4] = ["8:00", "12:00", "16:00", "20:00"];

/// A titled group of fields, by index into the form's field list.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGroup {
    pub title: Option<String>,
    pub fields: Vec<usize>,
}

/// Fixed, named collection of fields with whole-record operations.
#[derive(Debug, Clone)]
pub struct RecordForm {
    fields: Vec<LabeledField>,
    groups: Vec<FieldGroup>,
}

impl Default for RecordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordForm {
    /// The ABQ data record form, reset to its empty state.
    pub fn new() -> Self {
        Self::from_groups(vec![
            (
                Some("Record Information"),
                vec![
                    FieldDescriptor::entry("Date", Constraints::max_len(DATE_MAX_CHARS)),
                    FieldDescriptor::choice_list("Time", TIME_CHOICES),
                    FieldDescriptor::entry("Technician", Constraints::none()),
                ],
            ),
            (
                Some("Environment Data"),
                vec![
                    FieldDescriptor::float_spinner("Humidity", 0.5, 52.0, 0.01)
                        .labelled("Humidity (g/m³)"),
                    FieldDescriptor::float_spinner("Temperature", 4.0, 40.0, 0.1)
                        .labelled("Temperature (C)"),
                    FieldDescriptor::int_spinner("Light", 0, 100).labelled("Light (klx)"),
                    FieldDescriptor::toggle("Equipment Fault"),
                ],
            ),
            (
                Some("Plant Data"),
                vec![
                    FieldDescriptor::int_spinner("Plants", 0, 20),
                    FieldDescriptor::int_spinner("Blossoms", 0, 10000),
                    FieldDescriptor::int_spinner("Fruit", 0, 1000),
                    FieldDescriptor::float_spinner("Max. Height", 0.0, 1000.0, 0.1),
                    FieldDescriptor::float_spinner("Min. Height", 0.0, 1000.0, 0.1),
                    FieldDescriptor::float_spinner("Median Height", 0.0, 1000.0, 0.1),
                ],
            ),
            (None, vec![FieldDescriptor::multi_line("Notes")]),
        ])
    }

    /// Build a form from display groups. Field order is the order of the
    /// groups, then the order inside each group.
    ///
    /// # Panics
    ///
    /// When two fields share a name or a descriptor is inconsistent.
    pub fn from_groups(groups: Vec<(Option<&str>, Vec<FieldDescriptor>)>) -> Self {
        let mut fields: Vec<LabeledField> = Vec::new();
        let mut layout = Vec::with_capacity(groups.len());

        for (title, descriptors) in groups {
            let mut members = Vec::with_capacity(descriptors.len());
            for d in descriptors {
                if fields.iter().any(|f| f.name() == d.name) {
                    panic!("duplicate field name '{}'", d.name);
                }
                members.push(fields.len());
                fields.push(LabeledField::new(d));
            }
            layout.push(FieldGroup {
                title: title.map(str::to_string),
                fields: members,
            });
        }

        let mut form = Self {
            fields,
            groups: layout,
        };
        form.reset();
        form
    }

    pub fn fields(&self) -> &[LabeledField] {
        &self.fields
    }

    pub fn groups(&self) -> &[FieldGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Column names in declared order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(LabeledField::name).collect()
    }

    pub fn field(&self, name: &str) -> Option<&LabeledField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut LabeledField> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    pub fn field_at(&self, index: usize) -> Option<&LabeledField> {
        self.fields.get(index)
    }

    pub fn field_at_mut(&mut self, index: usize) -> Option<&mut LabeledField> {
        self.fields.get_mut(index)
    }

    /// Snapshot of every field, in declared order, empty ones included.
    pub fn get(&self) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for f in &self.fields {
            snapshot.push(f.name(), f.get());
        }
        snapshot
    }

    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> AppResult<()> {
        let field = self
            .field_mut(name)
            .ok_or_else(|| AppError::UnknownField(name.to_string()))?;
        field.set(value);
        Ok(())
    }

    /// Put every field back to its empty value.
    pub fn reset(&mut self) {
        for f in &mut self.fields {
            f.set(FieldValue::Empty);
        }
    }
}
