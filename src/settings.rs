//! Typed key/value settings loaded from a table
//!
//! A settings table is a list of rows whose first row is a header. Each data
//! row declares a key, the type its value must have and the value itself:
//!
//! ```json
//! [
//!   ["key", "type", "value"],
//!   ["max-depth", "number", 3],
//!   ["work.output-sheet-name", "string", "Work Index"]
//! ]
//! ```
//!
//! Keys may be namespaced with a `scope.` prefix and extracted with
//! [`Settings::scope`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::ConfigError;

pub const KEY_COLUMN: &str = "key";
pub const TYPE_COLUMN: &str = "type";
pub const VALUE_COLUMN: &str = "value";

/// Settings keyed by name, values already checked against their declared type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings(BTreeMap<String, Value>);

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from `rows`, locating the key, type and value columns by
    /// their header labels.
    pub fn from_table(
        rows: &[Vec<Value>],
        key_column: &str,
        type_column: &str,
        value_column: &str,
    ) -> Result<Self, ConfigError> {
        let Some((header, data)) = rows.split_first() else {
            return Ok(Self::default());
        };

        let key_idx = column_index(header, key_column)?;
        let type_idx = column_index(header, type_column)?;
        let value_idx = column_index(header, value_column)?;

        let mut settings = BTreeMap::new();
        for (i, row) in data.iter().enumerate() {
            let key = match row.get(key_idx) {
                Some(Value::String(key)) => key.clone(),
                _ => {
                    return Err(ConfigError::MalformedTable(format!(
                        "row {} has no key",
                        i + 2
                    )));
                }
            };
            let declared = match row.get(type_idx) {
                Some(Value::String(ty)) => ty.as_str(),
                _ => "",
            };
            let value = row.get(value_idx).cloned().unwrap_or(Value::Null);

            let actual = type_name(&value);
            if declared != actual {
                return Err(ConfigError::TypeMismatch {
                    key,
                    expected: if declared.is_empty() {
                        "declared".to_string()
                    } else {
                        declared.to_string()
                    },
                    actual: actual.to_string(),
                });
            }
            settings.insert(key, value);
        }
        Ok(Self(settings))
    }

    /// Load a JSON settings table using the `key`, `type` and `value` columns.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let rows: Vec<Vec<Value>> =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let settings = Self::from_table(&rows, KEY_COLUMN, TYPE_COLUMN, VALUE_COLUMN)?;
        debug!(path = %path.display(), keys = settings.len(), "loaded settings");
        Ok(settings)
    }

    /// Settings whose key starts with `name.`, with the prefix removed.
    pub fn scope(&self, name: &str) -> Self {
        let prefix = format!("{}.", name);
        Self(
            self.0
                .iter()
                .filter_map(|(key, value)| {
                    key.strip_prefix(&prefix)
                        .map(|rest| (rest.to_string(), value.clone()))
                })
                .collect(),
        )
    }

    /// Merge in order; later settings override earlier ones key by key.
    pub fn merge<I>(settings: I) -> Self
    where
        I: IntoIterator<Item = Settings>,
    {
        let mut merged = BTreeMap::new();
        for s in settings {
            merged.extend(s.0);
        }
        Self(merged)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(mismatch(key, "string", other)),
        }
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, ConfigError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(mismatch(key, "boolean", other)),
        }
    }

    pub fn get_number(&self, key: &str) -> Result<Option<f64>, ConfigError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => Ok(n.as_f64()),
            Some(other) => Err(mismatch(key, "number", other)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn column_index(header: &[Value], name: &str) -> Result<usize, ConfigError> {
    header
        .iter()
        .position(|label| label.as_str() == Some(name))
        .ok_or_else(|| ConfigError::MissingColumn(name.to_string()))
}

/// Runtime type name of a settings value.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Null => "null",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(key: &str, expected: &str, value: &Value) -> ConfigError {
    ConfigError::TypeMismatch {
        key: key.to_string(),
        expected: expected.to_string(),
        actual: type_name(value).to_string(),
    }
}
