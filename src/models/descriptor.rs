//! Static description of a form field: control kind, binding policy and
//! constraints.

use crate::utils::formatting::format_bound;

/// The kind of input control a field is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Single-line text entry.
    Entry,
    /// Drop-down list of fixed choices.
    ChoiceList,
    /// Numeric spinner with bounds and step.
    Spinner,
    /// Boolean check box.
    Toggle,
    /// Multi-line free text.
    MultiLine,
}

impl ControlKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlKind::Entry => "entry",
            ControlKind::ChoiceList => "choice",
            ControlKind::Spinner => "spinner",
            ControlKind::Toggle => "toggle",
            ControlKind::MultiLine => "multiline",
        }
    }

    /// Controls the user types characters into.
    pub fn accepts_typing(&self) -> bool {
        matches!(
            self,
            ControlKind::Entry | ControlKind::Spinner | ControlKind::MultiLine
        )
    }
}

/// Type of the value a bound holder stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Int,
    Float,
    Bool,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::Bool => "boolean",
        }
    }
}

/// Where a field keeps its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingPolicy {
    /// The control is linked to a typed holder; reads go through the holder.
    HasBinding(ValueKind),
    /// No holder; reads take the control's displayed content.
    DirectRead,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraints {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub choices: Vec<String>,
    pub max_len: Option<usize>,
}

impl Constraints {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn range(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn choices<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn max_len(n: usize) -> Self {
        Self {
            max_len: Some(n),
            ..Self::default()
        }
    }

    pub fn has_numeric(&self) -> bool {
        self.min.is_some() || self.max.is_some() || self.step.is_some()
    }

    /// Keystroke filter: would the control accept `candidate` as its new
    /// content? Only the length cap is enforced, counted in characters.
    pub fn accepts(&self, candidate: &str) -> bool {
        match self.max_len {
            Some(n) => candidate.chars().count() <= n,
            None => true,
        }
    }

    /// Short human description, `-` when unconstrained.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.min.is_some() || self.max.is_some() {
            let lo = self.min.map(format_bound).unwrap_or_default();
            let hi = self.max.map(format_bound).unwrap_or_default();
            parts.push(format!("{lo}..={hi}"));
        }
        if let Some(step) = self.step {
            parts.push(format!("step {}", format_bound(step)));
        }
        if !self.choices.is_empty() {
            parts.push(format!("one of {}", self.choices.join(", ")));
        }
        if let Some(n) = self.max_len {
            parts.push(format!("max {n} chars"));
        }
        if parts.is_empty() {
            "-".to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: ControlKind,
    pub binding: BindingPolicy,
    pub constraints: Constraints,
}

impl FieldDescriptor {
    pub fn new(
        name: impl Into<String>,
        kind: ControlKind,
        binding: BindingPolicy,
        constraints: Constraints,
    ) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            kind,
            binding,
            constraints,
        }
    }

    /// Display label, when it differs from the column name.
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn entry(name: impl Into<String>, constraints: Constraints) -> Self {
        Self::new(
            name,
            ControlKind::Entry,
            BindingPolicy::HasBinding(ValueKind::Text),
            constraints,
        )
    }

    pub fn choice_list<I, S>(name: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            ControlKind::ChoiceList,
            BindingPolicy::HasBinding(ValueKind::Text),
            Constraints::choices(choices),
        )
    }

    pub fn int_spinner(name: impl Into<String>, min: i64, max: i64) -> Self {
        Self::new(
            name,
            ControlKind::Spinner,
            BindingPolicy::HasBinding(ValueKind::Int),
            Constraints::range(min as f64, max as f64),
        )
    }

    pub fn float_spinner(name: impl Into<String>, min: f64, max: f64, step: f64) -> Self {
        Self::new(
            name,
            ControlKind::Spinner,
            BindingPolicy::HasBinding(ValueKind::Float),
            Constraints::range(min, max).step(step),
        )
    }

    pub fn toggle(name: impl Into<String>) -> Self {
        Self::new(
            name,
            ControlKind::Toggle,
            BindingPolicy::HasBinding(ValueKind::Bool),
            Constraints::none(),
        )
    }

    pub fn multi_line(name: impl Into<String>) -> Self {
        Self::new(
            name,
            ControlKind::MultiLine,
            BindingPolicy::DirectRead,
            Constraints::none(),
        )
    }

    /// Check that constraints and binding fit the control kind.
    pub fn check(&self) -> Result<(), String> {
        let c = &self.constraints;

        if c.has_numeric() && self.kind != ControlKind::Spinner {
            return Err(format!(
                "'{}': numeric bounds on a {} control",
                self.name,
                self.kind.as_str()
            ));
        }
        if let (Some(min), Some(max)) = (c.min, c.max)
            && min > max
        {
            return Err(format!("'{}': min {min} is above max {max}", self.name));
        }
        if let Some(step) = c.step
            && step <= 0.0
        {
            return Err(format!("'{}': step must be positive", self.name));
        }

        match (self.kind, c.choices.is_empty()) {
            (ControlKind::ChoiceList, true) => {
                return Err(format!("'{}': choice list without choices", self.name));
            }
            (ControlKind::ChoiceList, false) | (_, true) => {}
            (kind, false) => {
                return Err(format!(
                    "'{}': choices on a {} control",
                    self.name,
                    kind.as_str()
                ));
            }
        }

        if c.max_len.is_some()
            && !matches!(self.kind, ControlKind::Entry | ControlKind::MultiLine)
        {
            return Err(format!(
                "'{}': length cap on a {} control",
                self.name,
                self.kind.as_str()
            ));
        }

        let binding_fits = match (self.kind, self.binding) {
            (ControlKind::Spinner, BindingPolicy::HasBinding(v)) => {
                matches!(v, ValueKind::Int | ValueKind::Float)
            }
            (ControlKind::Spinner, BindingPolicy::DirectRead) => false,
            (ControlKind::Toggle, BindingPolicy::HasBinding(v)) => v == ValueKind::Bool,
            (_, BindingPolicy::HasBinding(v)) => v == ValueKind::Text,
            (_, BindingPolicy::DirectRead) => true,
        };
        if !binding_fits {
            return Err(format!(
                "'{}': {:?} does not fit a {} control",
                self.name,
                self.binding,
                self.kind.as_str()
            ));
        }

        Ok(())
    }
}
