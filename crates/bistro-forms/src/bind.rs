//! Generic validate-and-bind routine.
//!
//! [`bind`] walks a [`FormSchema`], parses each field out of the submitted
//! [`FormData`], applies the required rule and the field's validators, and
//! either returns every parsed value or every error found.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};

use crate::datetime::{parse_datetime, raw_datetime};
use crate::errors::REQUIRED;
use crate::{FieldKind, FieldSpec, FieldValue, FormData, FormErrors, FormSchema, ValidationContext};

/// Message for an unparseable date/time.
pub const INVALID_DATETIME: &str = "Enter a valid date/time.";

/// Parsed values of a successfully bound form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundValues {
    values: BTreeMap<&'static str, FieldValue>,
}

impl BoundValues {
    /// Raw access to a bound value.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text value, empty when absent.
    pub fn text(&self, name: &str) -> String {
        match self.values.get(name) {
            Some(FieldValue::Text(text)) => text.clone(),
            _ => String::new(),
        }
    }

    /// Checkbox value, `false` when absent.
    pub fn boolean(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(FieldValue::Boolean(true)))
    }

    /// Timestamp value, `None` when left blank.
    pub fn datetime(&self, name: &str) -> Option<DateTime<Utc>> {
        match self.values.get(name) {
            Some(FieldValue::DateTime(at)) => Some(*at),
            _ => None,
        }
    }

    /// Selected ids, empty when none.
    pub fn choices(&self, name: &str) -> BTreeSet<u64> {
        match self.values.get(name) {
            Some(FieldValue::Choices(ids)) => ids.clone(),
            _ => BTreeSet::new(),
        }
    }
}

/// Binds `data` against `schema`.
///
/// Keys not declared in the schema are ignored. All fields are checked even
/// after the first failure so the caller can redisplay every message at once.
pub fn bind(
    schema: &FormSchema,
    data: &FormData,
    ctx: &ValidationContext,
) -> Result<BoundValues, FormErrors> {
    let mut values = BTreeMap::new();
    let mut errors = FormErrors::new();

    for spec in schema.fields() {
        match bind_field(spec, data, ctx) {
            Ok(value) => {
                values.insert(spec.name, value);
            }
            Err(messages) => {
                for message in messages {
                    errors.add(spec.name, message);
                }
            }
        }
    }

    errors.into_result().map(|()| BoundValues { values })
}

fn bind_field(
    spec: &FieldSpec,
    data: &FormData,
    ctx: &ValidationContext,
) -> Result<FieldValue, Vec<String>> {
    let value = parse_field(spec, data)?;

    if value.is_blank() {
        if spec.required {
            return Err(vec![REQUIRED.to_string()]);
        }
        return Ok(value);
    }

    let messages: Vec<String> = spec
        .validators
        .iter()
        .filter_map(|validator| validator(&value, ctx).err())
        .collect();
    if messages.is_empty() {
        Ok(value)
    } else {
        Err(messages)
    }
}

fn parse_field(spec: &FieldSpec, data: &FormData) -> Result<FieldValue, Vec<String>> {
    match &spec.kind {
        FieldKind::Text { max_len } => {
            let text = data.get(spec.name).unwrap_or_default().trim().to_string();
            let len = text.chars().count();
            if len > *max_len {
                return Err(vec![format!(
                    "Ensure this value has at most {max_len} characters (it has {len})."
                )]);
            }
            Ok(FieldValue::Text(text))
        }
        FieldKind::Boolean => {
            let checked = data.get(spec.name).is_some_and(|raw| {
                !matches!(
                    raw.trim().to_ascii_lowercase().as_str(),
                    "" | "false" | "0" | "off" | "no"
                )
            });
            Ok(FieldValue::Boolean(checked))
        }
        FieldKind::DateTime => match raw_datetime(data, spec.name) {
            None => Ok(FieldValue::Missing),
            Some(raw) if raw.trim().is_empty() => Ok(FieldValue::Missing),
            Some(raw) => parse_datetime(&raw)
                .map(FieldValue::DateTime)
                .ok_or_else(|| vec![INVALID_DATETIME.to_string()]),
        },
        FieldKind::MultipleChoice { choices } => {
            let mut selected = BTreeSet::new();
            for raw in data.get_all(spec.name) {
                let raw = raw.trim();
                if raw.is_empty() {
                    continue;
                }
                match raw.parse::<u64>() {
                    Ok(id) if choices.contains(&id) => {
                        selected.insert(id);
                    }
                    _ => {
                        return Err(vec![format!(
                            "Select a valid choice. {raw} is not one of the available choices."
                        )]);
                    }
                }
            }
            Ok(FieldValue::Choices(selected))
        }
    }
}
