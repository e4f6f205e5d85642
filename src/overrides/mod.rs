//! Environment override table — per-environment parameter presets.
//!
//! Each entry maps an environment name to a partial stack input (a JSON
//! object). When the context names an environment present in the table, the
//! entry replaces the context-derived parameters wholesale:
//! 1. the entry is taken as-is (fields it omits get schema defaults)
//! 2. `env` is forced to the name from the context
//! 3. the result is validated through the same schema as context input
//!
//! Context values are *not* merged field by field with the entry.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ValidationError;
use crate::types::StackInput;
use crate::{Result, StackParamsError};

/// Partial stack input as stored in the table.
pub type OverrideEntry = Map<String, Value>;

/// Static mapping from environment name to a parameter preset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideTable {
    entries: BTreeMap<String, OverrideEntry>,
}

impl OverrideTable {
    /// Create an empty table (no environment is overridden).
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any existing entry for `env`.
    pub fn insert(&mut self, env: impl Into<String>, entry: OverrideEntry) {
        self.entries.insert(env.into(), entry);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_entry(mut self, env: impl Into<String>, entry: OverrideEntry) -> Self {
        self.insert(env, entry);
        self
    }

    pub fn get(&self, env: &str) -> Option<&OverrideEntry> {
        self.entries.get(env)
    }

    pub fn contains(&self, env: &str) -> bool {
        self.entries.contains_key(env)
    }

    /// Environment names with an entry, sorted.
    pub fn env_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a table from a JSON object of `{ "<env>": { ...partial input } }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Map<String, Value> = serde_json::from_str(json).map_err(|e| {
            StackParamsError::Configuration(format!("failed to parse override table: {e}"))
        })?;

        let mut table = Self::new();
        for (env, entry) in raw {
            match entry {
                Value::Object(entry) => table.insert(env, entry),
                other => {
                    return Err(StackParamsError::Configuration(format!(
                        "override entry for environment {env:?} must be an object, got {other}"
                    )));
                }
            }
        }
        Ok(table)
    }

    /// The table compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_OVERRIDES)
    }

    /// Apply the entry for `input.env`, if any.
    ///
    /// Returns the re-validated preset when the environment has an entry,
    /// otherwise `input` unchanged.
    pub fn apply(&self, input: StackInput) -> std::result::Result<StackInput, ValidationError> {
        let Some(entry) = self.get(&input.env) else {
            debug!(env = %input.env, "no override entry, using context parameters");
            return Ok(input);
        };

        debug!(
            env = %input.env,
            fields = entry.len(),
            "override entry found, replacing context parameters"
        );
        let mut merged = entry.clone();
        merged.insert("env".to_owned(), Value::String(input.env));
        StackInput::from_map(&merged)
    }
}

/// Raw JSON override table compiled into the binary.
const BUILTIN_OVERRIDES: &str = include_str!("overrides.json");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(value: Value) -> OverrideEntry {
        match value {
            Value::Object(map) => map,
            _ => panic!("test entry must be an object"),
        }
    }

    #[test]
    fn builtin_parses_and_validates() {
        let table = OverrideTable::builtin().unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(
            table.env_names().collect::<Vec<_>>(),
            ["", "dev", "prod", "staging"]
        );
        for env in table.env_names() {
            let mut merged = table.get(env).unwrap().clone();
            merged.insert("env".into(), json!(env));
            StackInput::from_map(&merged).unwrap();
        }
    }

    #[test]
    fn builtin_named_envs_are_empty_presets() {
        let table = OverrideTable::builtin().unwrap();
        for env in ["dev", "staging", "prod"] {
            assert!(table.get(env).unwrap().is_empty());
        }
    }

    #[test]
    fn new_table_is_empty() {
        let mut table = OverrideTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        table.insert("dev", OverrideEntry::new());
        assert!(!table.is_empty());
        assert_eq!(table.len(), 1);
        assert!(table.contains("dev"));
    }

    #[test]
    fn builtin_anonymous_env_region() {
        let table = OverrideTable::builtin().unwrap();
        let anon = table.get("").unwrap();
        assert_eq!(anon["modelRegion"], json!("ap-northeast-1"));
    }

    #[test]
    fn from_json_rejects_non_object_entry() {
        let err = OverrideTable::from_json(r#"{"dev": ["not", "an", "object"]}"#).unwrap_err();
        assert!(err.to_string().contains("\"dev\""));
    }

    #[test]
    fn from_json_rejects_malformed_json() {
        assert!(OverrideTable::from_json("{").is_err());
    }

    #[test]
    fn apply_without_entry_is_identity() {
        let table = OverrideTable::new().with_entry("dev", entry(json!({"ragEnabled": true})));
        let input = StackInput {
            env: "prod".into(),
            model_region: "eu-west-1".into(),
            ..Default::default()
        };
        assert_eq!(table.apply(input.clone()).unwrap(), input);
    }

    #[test]
    fn apply_replaces_and_keeps_env() {
        let table = OverrideTable::new().with_entry(
            "dev",
            entry(json!({"env": "something-else", "modelRegion": "us-west-2"})),
        );
        let input = StackInput {
            env: "dev".into(),
            model_region: "eu-west-1".into(),
            agent_core_region: Some("eu-central-1".into()),
            ..Default::default()
        };
        let applied = table.apply(input).unwrap();
        assert_eq!(applied.env, "dev");
        assert_eq!(applied.model_region, "us-west-2");
        // Not carried over from context
        assert!(applied.agent_core_region.is_none());
    }

    #[test]
    fn apply_validates_entry() {
        let table = OverrideTable::new().with_entry("dev", entry(json!({"modelIds": [1]})));
        let input = StackInput {
            env: "dev".into(),
            ..Default::default()
        };
        let err = table.apply(input).unwrap_err();
        assert_eq!(err.paths(), ["modelIds[0]"]);
    }
}
