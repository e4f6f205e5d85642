//! Stack input records: the validated parameter set and its processed form.
//!
//! Field names serialise as camelCase to match the deployment context keys
//! (`modelRegion`, `imageGenerationModelIds`, ...). Every field has a schema
//! default, so an empty context is a valid (default) stack input.

use serde::{Deserialize, Serialize};

use super::model::{ModelConfiguration, ModelReference};

/// JSON keys of the model lists that are normalized against `modelRegion`.
pub const MODEL_LIST_FIELDS: [&str; 5] = [
    "modelIds",
    "imageGenerationModelIds",
    "videoGenerationModelIds",
    "speechToSpeechModelIds",
    "endpointNames",
];

/// Validated stack parameters, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackInput {
    /// Environment name ("" is the anonymous environment).
    #[serde(default)]
    pub env: String,
    /// Default region for models given without an explicit region.
    #[serde(default = "default_region")]
    pub model_region: String,
    #[serde(default = "default_model_ids")]
    pub model_ids: Vec<ModelReference>,
    #[serde(default = "default_image_generation_model_ids")]
    pub image_generation_model_ids: Vec<ModelReference>,
    #[serde(default = "default_video_generation_model_ids")]
    pub video_generation_model_ids: Vec<ModelReference>,
    #[serde(default = "default_speech_to_speech_model_ids")]
    pub speech_to_speech_model_ids: Vec<ModelReference>,
    /// SageMaker endpoint names.
    #[serde(default)]
    pub endpoint_names: Vec<ModelReference>,
    /// Region for AgentCore resources; falls back to `model_region`.
    #[serde(default)]
    pub agent_core_region: Option<String>,
    #[serde(default)]
    pub allowed_sign_up_email_domains: Option<Vec<String>>,
    #[serde(flatten)]
    pub settings: StackSettings,
}

impl Default for StackInput {
    fn default() -> Self {
        Self {
            env: String::new(),
            model_region: default_region(),
            model_ids: default_model_ids(),
            image_generation_model_ids: default_image_generation_model_ids(),
            video_generation_model_ids: default_video_generation_model_ids(),
            speech_to_speech_model_ids: default_speech_to_speech_model_ids(),
            endpoint_names: Vec::new(),
            agent_core_region: None,
            allowed_sign_up_email_domains: None,
            settings: StackSettings::default(),
        }
    }
}

impl StackInput {
    /// Model lists paired with their JSON keys, in [`MODEL_LIST_FIELDS`] order.
    pub fn model_lists(&self) -> [(&'static str, &[ModelReference]); 5] {
        [
            (MODEL_LIST_FIELDS[0], self.model_ids.as_slice()),
            (MODEL_LIST_FIELDS[1], self.image_generation_model_ids.as_slice()),
            (MODEL_LIST_FIELDS[2], self.video_generation_model_ids.as_slice()),
            (MODEL_LIST_FIELDS[3], self.speech_to_speech_model_ids.as_slice()),
            (MODEL_LIST_FIELDS[4], self.endpoint_names.as_slice()),
        ]
    }
}

/// Stack-level settings passed through resolution untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackSettings {
    #[serde(default)]
    pub account: Option<String>,
    /// Region the stack is deployed to.
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_true")]
    pub anonymous_usage_tracking: bool,
    #[serde(default = "default_true")]
    pub self_sign_up_enabled: bool,
    #[serde(default)]
    pub saml_auth_enabled: bool,
    #[serde(default, rename = "allowedIpV4AddressRanges")]
    pub allowed_ipv4_address_ranges: Option<Vec<String>>,
    #[serde(default, rename = "allowedIpV6AddressRanges")]
    pub allowed_ipv6_address_ranges: Option<Vec<String>>,
    #[serde(default)]
    pub allowed_country_codes: Option<Vec<String>>,
    #[serde(default)]
    pub rag_enabled: bool,
    #[serde(default)]
    pub rag_knowledge_base_enabled: bool,
    #[serde(default)]
    pub agent_enabled: bool,
    #[serde(default)]
    pub guardrail_enabled: bool,
    #[serde(default)]
    pub dashboard: bool,
    #[serde(default)]
    pub cross_account_bedrock_role_arn: Option<String>,
    #[serde(default)]
    pub host_name: Option<String>,
    #[serde(default)]
    pub domain_name: Option<String>,
    #[serde(default)]
    pub hosted_zone_id: Option<String>,
}

impl Default for StackSettings {
    fn default() -> Self {
        Self {
            account: None,
            region: default_region(),
            anonymous_usage_tracking: true,
            self_sign_up_enabled: true,
            saml_auth_enabled: false,
            allowed_ipv4_address_ranges: None,
            allowed_ipv6_address_ranges: None,
            allowed_country_codes: None,
            rag_enabled: false,
            rag_knowledge_base_enabled: false,
            agent_enabled: false,
            guardrail_enabled: false,
            dashboard: false,
            cross_account_bedrock_role_arn: None,
            host_name: None,
            domain_name: None,
            hosted_zone_id: None,
        }
    }
}

/// Final stack parameters handed to provisioning.
///
/// Every model list holds only [`ModelConfiguration`] entries and
/// `agent_core_region` is always set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedStackInput {
    pub env: String,
    pub model_region: String,
    pub model_ids: Vec<ModelConfiguration>,
    pub image_generation_model_ids: Vec<ModelConfiguration>,
    pub video_generation_model_ids: Vec<ModelConfiguration>,
    pub speech_to_speech_model_ids: Vec<ModelConfiguration>,
    pub endpoint_names: Vec<ModelConfiguration>,
    pub agent_core_region: String,
    pub allowed_sign_up_email_domains: Option<Vec<String>>,
    #[serde(flatten)]
    pub settings: StackSettings,
    /// Opaque value returned by the branding loader.
    pub branding_config: serde_json::Value,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_true() -> bool {
    true
}

fn default_model_ids() -> Vec<ModelReference> {
    vec![
        "us.anthropic.claude-3-5-sonnet-20241022-v2:0".into(),
        "us.anthropic.claude-3-5-haiku-20241022-v1:0".into(),
        "us.amazon.nova-pro-v1:0".into(),
        "us.amazon.nova-lite-v1:0".into(),
        "us.amazon.nova-micro-v1:0".into(),
    ]
}

fn default_image_generation_model_ids() -> Vec<ModelReference> {
    vec!["amazon.nova-canvas-v1:0".into()]
}

fn default_video_generation_model_ids() -> Vec<ModelReference> {
    vec!["amazon.nova-reel-v1:0".into()]
}

fn default_speech_to_speech_model_ids() -> Vec<ModelReference> {
    vec!["amazon.nova-sonic-v1:0".into()]
}
