//! Raw submitted form data.

use serde::Serialize;
use std::collections::BTreeMap;

/// Multi-valued map of submitted field values, in submission order per key.
///
/// Multi-select fields arrive as repeated keys (`items=1&items=2`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormData {
    fields: BTreeMap<String, Vec<String>>,
}

impl FormData {
    /// Creates an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut data = Self::new();
        for (key, value) in url::form_urlencoded::parse(body) {
            data.append(key.into_owned(), value.into_owned());
        }
        data
    }

    /// Adds a value under `name`, keeping earlier values.
    pub fn append<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.fields.entry(name.into()).or_default().push(value.into());
    }

    /// Replaces every value under `name` with `value`.
    pub fn set<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.fields.insert(name.into(), vec![value.into()]);
    }

    /// Builder-style [`append`](Self::append).
    pub fn with<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.append(name, value);
        self
    }

    /// First value under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value under `name`.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any value was submitted under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Whether nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
