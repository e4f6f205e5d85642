//! Stack input schema: shape checks plus value constraints.
//!
//! Parsing happens in two passes. Serde establishes the shape (types and
//! defaults). When that fails, each top-level key is re-checked on its own
//! so the error names every offending field instead of the first one.
//! A constraint pass then checks values serde cannot express (non-empty
//! identifiers and regions, e-mail domains).

use serde_json::{Map, Value};

use super::model::ModelReference;
use super::stack_input::{MODEL_LIST_FIELDS, StackInput};
use crate::error::{ValidationError, ValidationIssue};

impl StackInput {
    /// Validate a JSON value against the stack input schema.
    pub fn parse(value: &Value) -> Result<Self, ValidationError> {
        let Some(map) = value.as_object() else {
            return Err(ValidationError::single(
                "",
                format!("expected an object, got {}", kind(value)),
            ));
        };
        Self::from_map(map)
    }

    /// Validate a context map against the stack input schema.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        let input: StackInput = match serde_json::from_value(Value::Object(map.clone())) {
            Ok(input) => input,
            Err(err) => {
                let mut issues = shape_issues(map);
                if issues.is_empty() {
                    issues.push(ValidationIssue::new("", err.to_string()));
                }
                return Err(ValidationError::new(issues));
            }
        };

        let issues = input.constraint_issues();
        if issues.is_empty() {
            Ok(input)
        } else {
            Err(ValidationError::new(issues))
        }
    }

    fn constraint_issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        // agentCoreRegion may be empty: it falls back to modelRegion.
        check_region("modelRegion", &self.model_region, &mut issues);
        check_region("region", &self.settings.region, &mut issues);

        for (field, models) in self.model_lists() {
            for (idx, model) in models.iter().enumerate() {
                let path = format!("{field}[{idx}]");
                if model.model_id().trim().is_empty() {
                    issues.push(ValidationIssue::new(
                        format!("{path}.modelId"),
                        "model id must not be empty",
                    ));
                }
                if let Some(region) = model.region() {
                    check_region(&format!("{path}.region"), region, &mut issues);
                }
            }
        }

        if let Some(domains) = &self.allowed_sign_up_email_domains {
            for (idx, domain) in domains.iter().enumerate() {
                let path = format!("allowedSignUpEmailDomains[{idx}]");
                if domain.trim().is_empty() {
                    issues.push(ValidationIssue::new(path, "domain must not be empty"));
                } else if domain.contains('@') {
                    issues.push(ValidationIssue::new(
                        path,
                        "domain must not contain '@' (use \"example.com\", not \"user@example.com\")",
                    ));
                }
            }
        }

        issues
    }
}

/// Per-field shape errors for a map serde rejected as a whole.
fn shape_issues(map: &Map<String, Value>) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (key, value) in map {
        if MODEL_LIST_FIELDS.contains(&key.as_str()) {
            if let Value::Array(items) = value {
                for (idx, item) in items.iter().enumerate() {
                    if serde_json::from_value::<ModelReference>(item.clone()).is_err() {
                        issues.push(ValidationIssue::new(
                            format!("{key}[{idx}]"),
                            format!(
                                "expected a model id string or {{\"modelId\", \"region\"}} object, got {}",
                                kind(item)
                            ),
                        ));
                    }
                }
                continue;
            }
        }

        // Every field has a default, so a single-key object only fails on its own key.
        let mut single = Map::new();
        single.insert(key.clone(), value.clone());
        if let Err(err) = serde_json::from_value::<StackInput>(Value::Object(single)) {
            issues.push(ValidationIssue::new(key.as_str(), err.to_string()));
        }
    }
    issues
}

fn check_region(path: &str, region: &str, issues: &mut Vec<ValidationIssue>) {
    if region.trim().is_empty() {
        issues.push(ValidationIssue::new(path, "region must not be empty"));
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn region_names_are_not_pattern_checked() {
        let input = StackInput::parse(&json!({
            "modelRegion": "eusc-de-east-1",
            "region": "eusc-de-east-1",
            "agentCoreRegion": "eusc-de-east-1",
            "modelIds": [{"modelId": "a", "region": "eusc-de-east-1"}],
        }))
        .unwrap();
        assert_eq!(input.model_region, "eusc-de-east-1");
        assert_eq!(input.model_ids[0].region(), Some("eusc-de-east-1"));
    }

    #[test]
    fn non_object_is_rejected() {
        let err = StackInput::parse(&json!(["env"])).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert!(err.issues[0].message.contains("an array"));
    }

    #[test]
    fn every_offending_field_is_listed() {
        let err = StackInput::parse(&json!({
            "env": 3,
            "ragEnabled": "yes",
            "modelIds": ["ok", 7, {"modelId": "x"}],
        }))
        .unwrap_err();
        let mut paths = err.paths();
        paths.sort_unstable();
        assert_eq!(paths, ["env", "modelIds[1]", "modelIds[2]", "ragEnabled"]);
    }

    #[test]
    fn model_list_that_is_not_an_array() {
        let err = StackInput::parse(&json!({"modelIds": "a"})).unwrap_err();
        assert_eq!(err.paths(), ["modelIds"]);
    }

    #[test]
    fn constraint_issues_are_collected() {
        let err = StackInput::parse(&json!({
            "modelRegion": "",
            "modelIds": ["", {"modelId": "b", "region": ""}],
            "allowedSignUpEmailDomains": ["someone@example.com"],
        }))
        .unwrap_err();
        assert_eq!(
            err.paths(),
            [
                "modelRegion",
                "modelIds[0].modelId",
                "modelIds[1].region",
                "allowedSignUpEmailDomains[0]",
            ]
        );
    }

    #[test]
    fn empty_agent_core_region_is_accepted() {
        let input = StackInput::parse(&json!({"agentCoreRegion": ""})).unwrap();
        assert_eq!(input.agent_core_region.as_deref(), Some(""));
    }
}
