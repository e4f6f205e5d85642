//! Model reference types: shorthand model IDs and explicit model/region pairs.

use serde::{Deserialize, Serialize};

/// A model identifier bound to the region it is served from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfiguration {
    /// Model identifier (e.g. "anthropic.claude-3-5-sonnet-20240620-v1:0").
    pub model_id: String,
    /// Region serving the model (e.g. "us-east-1").
    pub region: String,
}

impl ModelConfiguration {
    pub fn new(model_id: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            region: region.into(),
        }
    }
}

/// A single entry of a model list.
///
/// Deserialises from either a bare string (`"model-id"`) or an object
/// (`{ "modelId": "...", "region": "..." }`). A bare string is served from
/// the stack's default model region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelReference {
    /// Model with an explicit region.
    Configured(ModelConfiguration),
    /// Shorthand: model ID only.
    Bare(String),
}

impl ModelReference {
    /// The model identifier this entry refers to.
    pub fn model_id(&self) -> &str {
        match self {
            Self::Configured(config) => &config.model_id,
            Self::Bare(id) => id,
        }
    }

    /// Explicit region, `None` for shorthand entries.
    pub fn region(&self) -> Option<&str> {
        match self {
            Self::Configured(config) => Some(&config.region),
            Self::Bare(_) => None,
        }
    }

    /// Expand to the structured form, pairing shorthand entries with `default_region`.
    pub fn normalize(&self, default_region: &str) -> ModelConfiguration {
        match self {
            Self::Configured(config) => config.clone(),
            Self::Bare(id) => ModelConfiguration::new(id.as_str(), default_region),
        }
    }
}

impl From<ModelConfiguration> for ModelReference {
    fn from(config: ModelConfiguration) -> Self {
        Self::Configured(config)
    }
}

impl From<&str> for ModelReference {
    fn from(id: &str) -> Self {
        Self::Bare(id.to_owned())
    }
}

impl From<String> for ModelReference {
    fn from(id: String) -> Self {
        Self::Bare(id)
    }
}

/// Normalize a model list, preserving order and length.
pub fn normalize_models(models: &[ModelReference], default_region: &str) -> Vec<ModelConfiguration> {
    models
        .iter()
        .map(|model| model.normalize(default_region))
        .collect()
}
