//! Deployment context: the raw key-value input to resolution.
//!
//! Context is assembled from a `cdk.json`-style file (its top-level
//! `context` object) and `key=value` pairs given on the command line.
//! Later sources win.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::{Result, StackParamsError};

/// Untyped context map, read once per resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMap(Map<String, Value>);

impl ContextMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the `context` object of a `cdk.json`-style file.
    ///
    /// A file without a `context` key yields an empty map.
    pub fn from_cdk_json(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StackParamsError::Configuration(format!("Failed to read context file {path:?}: {e}"))
        })?;
        let doc: Value = serde_json::from_str(&content).map_err(|e| {
            StackParamsError::Configuration(format!("Failed to parse context file {path:?}: {e}"))
        })?;

        match doc.get("context") {
            None => {
                debug!(?path, "context file has no context object");
                Ok(Self::new())
            }
            Some(Value::Object(map)) => Ok(Self(map.clone())),
            Some(other) => Err(StackParamsError::Configuration(format!(
                "\"context\" in {path:?} must be an object, got {other}"
            ))),
        }
    }

    /// Set a single key, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Overlay `key=value` pairs.
    ///
    /// Values that parse as JSON are stored as JSON (`modelIds=["a"]` is a
    /// list, `ragEnabled=true` a boolean); anything else is kept as a string.
    pub fn apply_pairs<I, S>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pair in pairs {
            let pair = pair.as_ref();
            let Some((key, raw)) = pair.split_once('=') else {
                return Err(StackParamsError::InvalidInput(format!(
                    "context pair {pair:?} must be of the form key=value"
                )));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(StackParamsError::InvalidInput(format!(
                    "context pair {pair:?} has an empty key"
                )));
            }
            let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()));
            debug!(key, "context value from command line");
            self.set(key, value);
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ContextMap {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ContextMap {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
