use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::OutputError;

/// Source of named infrastructure outputs.
#[async_trait]
pub trait OutputSource: Send + Sync {
    /// A scalar output rendered as a string.
    async fn output(&self, key: &str) -> Result<String, OutputError>;

    /// A map-typed output with every value rendered as a string.
    async fn output_map(&self, key: &str) -> Result<BTreeMap<String, String>, OutputError>;
}

/// Snapshot of every output of one Terraform state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputSet {
    values: BTreeMap<String, Value>,
}

impl OutputSet {
    /// Parse the document printed by `terraform output -json`:
    /// `{ "<name>": { "sensitive": bool, "type": ..., "value": ... }, ... }`.
    pub fn from_json(raw: &str) -> Result<Self, OutputError> {
        let trimmed = raw.trim();
        // `terraform output -json` prints `{}` for a state without outputs,
        // but older releases print nothing at all.
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let doc: Value =
            serde_json::from_str(trimmed).map_err(|e| OutputError::Parse(e.to_string()))?;
        let entries = match doc {
            Value::Object(entries) => entries,
            other => {
                return Err(OutputError::Parse(format!(
                    "expected a JSON object, got {}",
                    kind(&other)
                )))
            }
        };

        let mut values = BTreeMap::new();
        for (name, entry) in entries {
            let value = entry
                .get("value")
                .cloned()
                .ok_or_else(|| OutputError::Parse(format!("output '{}' has no value field", name)))?;
            values.insert(name, value);
        }
        Ok(Self { values })
    }

    pub fn from_values(values: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self { values: values.into_iter().collect() }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn get_str(&self, key: &str) -> Result<String, OutputError> {
        self.values
            .get(key)
            .map(render)
            .ok_or_else(|| OutputError::Missing { key: key.to_string() })
    }

    pub fn get_map(&self, key: &str) -> Result<BTreeMap<String, String>, OutputError> {
        match self.values.get(key) {
            None => Err(OutputError::Missing { key: key.to_string() }),
            Some(Value::Object(map)) => {
                Ok(map.iter().map(|(k, v)| (k.clone(), render(v))).collect())
            }
            Some(other) => Err(OutputError::NotAMap {
                key: key.to_string(),
                found: kind(other).to_string(),
            }),
        }
    }
}

#[async_trait]
impl OutputSource for OutputSet {
    async fn output(&self, key: &str) -> Result<String, OutputError> {
        self.get_str(key)
    }

    async fn output_map(&self, key: &str) -> Result<BTreeMap<String, String>, OutputError> {
        self.get_map(key)
    }
}

/// Strings verbatim, null as empty, everything else as compact JSON.
fn render(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}
