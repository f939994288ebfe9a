//! Explicit form schemas.
//!
//! A [`FormSchema`] lists its fields up front instead of discovering them
//! from the model at runtime. Each [`FieldSpec`] carries its kind, whether a
//! value is required, and any extra [`Validator`]s to run after parsing.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// Inputs available to validators besides the field value itself.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext {
    /// The evaluation moment.
    pub now: DateTime<Utc>,
}

impl ValidationContext {
    /// Creates a context evaluated at `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

/// Extra rule applied to a parsed, present value.
///
/// Returns the user-facing message on failure.
pub type Validator = fn(&FieldValue, &ValidationContext) -> Result<(), String>;

/// One selectable option of a multiple-choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Primary key of the referenced record.
    pub id: u64,
    /// Label shown to the user.
    pub label: String,
}

impl Choice {
    /// Creates a choice.
    pub fn new<S: Into<String>>(id: u64, label: S) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// How a field's raw input is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Whitespace-trimmed text with a character limit.
    Text {
        /// Maximum length in characters.
        max_len: usize,
    },
    /// Checkbox. Absent means `false`.
    Boolean,
    /// A timestamp, see [`crate::datetime`].
    DateTime,
    /// A set of record ids drawn from `choices`.
    MultipleChoice {
        /// The ids a submission may reference.
        choices: BTreeSet<u64>,
    },
}

impl FieldKind {
    /// Short kind name for rendering.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text { .. } => "text",
            FieldKind::Boolean => "boolean",
            FieldKind::DateTime => "datetime",
            FieldKind::MultipleChoice { .. } => "multiple_choice",
        }
    }
}

/// A parsed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text input, trimmed. May be empty for optional fields.
    Text(String),
    /// Checkbox state.
    Boolean(bool),
    /// A timestamp.
    DateTime(DateTime<Utc>),
    /// Selected ids. May be empty for optional fields.
    Choices(BTreeSet<u64>),
    /// An optional field left blank.
    Missing,
}

impl FieldValue {
    /// Whether this value counts as "not provided".
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Choices(ids) => ids.is_empty(),
            FieldValue::Missing => true,
            FieldValue::Boolean(_) | FieldValue::DateTime(_) => false,
        }
    }
}

/// Declaration of a single form field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Submitted key.
    pub name: &'static str,
    /// Parsing rule.
    pub kind: FieldKind,
    /// Whether a blank submission is rejected.
    pub required: bool,
    /// Rules run on present values, in order.
    pub validators: Vec<Validator>,
}

impl FieldSpec {
    /// Creates a field with no extra validators.
    pub fn new(name: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            kind,
            required,
            validators: Vec::new(),
        }
    }

    /// A required text field.
    pub fn text(name: &'static str, max_len: usize) -> Self {
        Self::new(name, FieldKind::Text { max_len }, true)
    }

    /// A checkbox.
    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean, false)
    }

    /// An optional timestamp.
    pub fn datetime(name: &'static str) -> Self {
        Self::new(name, FieldKind::DateTime, false)
    }

    /// An optional multiple-choice field over `choices`.
    pub fn multiple_choice<I>(name: &'static str, choices: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        Self::new(
            name,
            FieldKind::MultipleChoice {
                choices: choices.into_iter().collect(),
            },
            false,
        )
    }

    /// Sets the required flag.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Appends a validator.
    pub fn validate(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}

/// Ordered list of fields accepted by a form.
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// The declared fields, in order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }
}
