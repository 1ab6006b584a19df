use crate::errors::{AppError, AppResult};
use crate::models::{FieldValue, ValueKind};

/// Typed value holder linked to one control.
///
/// The holder keeps the control's content as text, exactly as typed or set,
/// and interprets it on read. A read can therefore fail: an integer holder
/// containing `"4x"` or `""` has no integer value.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundValue {
    kind: ValueKind,
    raw: String,
}

impl BoundValue {
    pub fn new(kind: ValueKind) -> Self {
        let raw = match kind {
            ValueKind::Bool => false.to_string(),
            _ => String::new(),
        };
        Self { kind, raw }
    }

    /// Content as the linked control displays it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Assign a value. Boolean holders coerce it to a boolean first.
    pub fn set(&mut self, value: &FieldValue) {
        self.raw = match self.kind {
            ValueKind::Bool => value.truthy().to_string(),
            _ => value.to_string(),
        };
    }

    /// Replace the content with text typed into the linked control.
    pub(crate) fn set_raw(&mut self, text: String) {
        self.raw = text;
    }

    pub fn try_get(&self) -> AppResult<FieldValue> {
        let unreadable = || {
            AppError::FieldRead(format!("{:?} is not a valid {}", self.raw, self.kind.as_str()))
        };

        match self.kind {
            ValueKind::Text => Ok(FieldValue::Text(self.raw.clone())),
            ValueKind::Int => {
                let text = self.raw.trim();
                if let Ok(n) = text.parse::<i64>() {
                    return Ok(FieldValue::Int(n));
                }
                // Decimal text such as "10.0" reads as its integer part.
                match text.parse::<f64>() {
                    Ok(x) if x.is_finite() => Ok(FieldValue::Int(x.trunc() as i64)),
                    _ => Err(unreadable()),
                }
            }
            ValueKind::Float => self
                .raw
                .trim()
                .parse::<f64>()
                .map(FieldValue::Float)
                .map_err(|_| unreadable()),
            ValueKind::Bool => self
                .raw
                .parse::<bool>()
                .map(FieldValue::Bool)
                .map_err(|_| unreadable()),
        }
    }
}
