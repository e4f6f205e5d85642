//! stack-params - deployment parameter resolution for generative AI use case stacks
//!
//! Turns a deployment context (the key-value map handed to the stack by the
//! infrastructure toolkit) into the final, normalized parameter record:
//!
//! 1. the context is validated against the stack input schema
//! 2. environments listed in the [`OverrideTable`] use their preset instead
//! 3. shorthand model IDs are expanded to `{ modelId, region }` pairs
//! 4. `agentCoreRegion` defaults to `modelRegion`
//! 5. the branding configuration is attached
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use stack_params::{ContextMap, OverrideTable, StaticBranding, resolve};
//!
//! # fn main() -> stack_params::Result<()> {
//! let context: ContextMap = [
//!     ("env", json!("prod")),
//!     ("modelRegion", json!("us-east-1")),
//!     ("modelIds", json!(["a", {"modelId": "b", "region": "eu-west-1"}])),
//! ]
//! .into_iter()
//! .collect();
//!
//! let params = resolve(&context, &OverrideTable::new(), &StaticBranding::default())?;
//! assert_eq!(params.model_ids[0].region, "us-east-1");
//! assert_eq!(params.model_ids[1].region, "eu-west-1");
//! assert_eq!(params.agent_core_region, "us-east-1");
//! # Ok(())
//! # }
//! ```

pub mod branding;
pub mod config;
pub mod context;
pub mod error;
pub mod overrides;
pub mod resolver;
pub mod types;

// Re-export main types at crate root
pub use branding::{BrandingLoader, FileBrandingLoader, StaticBranding};
pub use context::ContextMap;
pub use error::{Result, StackParamsError, ValidationError, ValidationIssue};
pub use overrides::{OverrideEntry, OverrideTable};
pub use resolver::{process, resolve, resolve_input, resolve_with_builtin};

pub use types::{
    MODEL_LIST_FIELDS, ModelConfiguration, ModelReference, ProcessedStackInput, StackInput,
    StackSettings, normalize_models,
};
