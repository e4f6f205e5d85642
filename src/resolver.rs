//! Parameter resolution: context → validated, normalized stack parameters.

use tracing::debug;

use crate::branding::BrandingLoader;
use crate::context::ContextMap;
use crate::overrides::OverrideTable;
use crate::types::{ProcessedStackInput, StackInput, normalize_models};
use crate::Result;

/// Validate the context and apply the override entry for its environment.
///
/// This is resolution up to (not including) normalization: the returned
/// record is either the context-validated record or the re-validated
/// override preset.
pub fn resolve_input(context: &ContextMap, overrides: &OverrideTable) -> Result<StackInput> {
    let input = StackInput::from_map(context.as_map())?;
    Ok(overrides.apply(input)?)
}

/// Resolve the final stack parameters.
///
/// Fails with [`StackParamsError::Validation`](crate::StackParamsError::Validation)
/// if the context or the override entry does not satisfy the schema. Errors
/// from the branding loader are returned unchanged.
pub fn resolve<B>(
    context: &ContextMap,
    overrides: &OverrideTable,
    branding: &B,
) -> Result<ProcessedStackInput>
where
    B: BrandingLoader + ?Sized,
{
    let input = resolve_input(context, overrides)?;
    let processed = process(input, branding.load()?);
    debug!(
        env = %processed.env,
        model_region = %processed.model_region,
        models = processed.model_ids.len(),
        "stack parameters resolved"
    );
    Ok(processed)
}

/// [`resolve`] with the compiled-in override table.
pub fn resolve_with_builtin<B>(context: &ContextMap, branding: &B) -> Result<ProcessedStackInput>
where
    B: BrandingLoader + ?Sized,
{
    resolve(context, &OverrideTable::builtin()?, branding)
}

/// Normalize model lists, default the AgentCore region and attach branding.
pub fn process(input: StackInput, branding_config: serde_json::Value) -> ProcessedStackInput {
    let region = input.model_region.as_str();
    let agent_core_region = match input.agent_core_region.as_deref() {
        Some(r) if !r.is_empty() => r.to_owned(),
        _ => input.model_region.clone(),
    };

    ProcessedStackInput {
        model_ids: normalize_models(&input.model_ids, region),
        image_generation_model_ids: normalize_models(&input.image_generation_model_ids, region),
        video_generation_model_ids: normalize_models(&input.video_generation_model_ids, region),
        speech_to_speech_model_ids: normalize_models(&input.speech_to_speech_model_ids, region),
        endpoint_names: normalize_models(&input.endpoint_names, region),
        agent_core_region,
        env: input.env,
        model_region: input.model_region,
        allowed_sign_up_email_domains: input.allowed_sign_up_email_domains,
        settings: input.settings,
        branding_config,
    }
}
