//! Public types for the stack-params API.

mod model;
mod stack_input;
mod validation;

pub use model::{ModelConfiguration, ModelReference, normalize_models};
pub use stack_input::{MODEL_LIST_FIELDS, ProcessedStackInput, StackInput, StackSettings};
