//! Serializable form state handed to the rendering collaborator.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::datetime::raw_datetime;
use crate::schema::{Choice, FieldKind, FieldSpec, FormSchema};
use crate::{FormData, FormErrors};

/// One field as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    /// Submitted key.
    pub name: &'static str,
    /// Kind name (`text`, `boolean`, `datetime`, `multiple_choice`).
    pub kind: &'static str,
    /// Whether a value must be provided.
    pub required: bool,
    /// Current values: initial, or as submitted.
    pub values: Vec<String>,
    /// Messages to show next to the field.
    pub errors: Vec<String>,
}

/// A whole form: fields with values and errors, plus selectable choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    /// Declared fields, in schema order.
    pub fields: Vec<FieldView>,
    /// Options for multiple-choice fields, keyed by field name.
    pub choices: BTreeMap<&'static str, Vec<Choice>>,
    /// Whether the form carries any error.
    pub has_errors: bool,
}

impl FormView {
    /// Builds a view of `schema` showing `data` and `errors`.
    pub fn new(schema: &FormSchema, data: FormData, errors: FormErrors) -> Self {
        let fields = schema
            .fields()
            .iter()
            .map(|spec| FieldView {
                name: spec.name,
                kind: spec.kind.name(),
                required: spec.required,
                values: field_values(spec, &data),
                errors: errors.get(spec.name).to_vec(),
            })
            .collect();
        Self {
            fields,
            choices: BTreeMap::new(),
            has_errors: !errors.is_empty(),
        }
    }

    /// Attaches the options of a multiple-choice field.
    pub fn with_choices(mut self, field: &'static str, choices: Vec<Choice>) -> Self {
        self.choices.insert(field, choices);
        self
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Values to redisplay. A date/time sent as a year/month/day triplet comes
/// back as a single joined value.
fn field_values(spec: &FieldSpec, data: &FormData) -> Vec<String> {
    match spec.kind {
        FieldKind::DateTime if !data.contains(spec.name) => {
            raw_datetime(data, spec.name).into_iter().collect()
        }
        _ => data.get_all(spec.name).to_vec(),
    }
}
