//! stack-params error types

use std::fmt;

use serde::Serialize;

/// A single schema violation, addressed by its JSON path (e.g. `modelIds[2]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Schema validation failure listing every offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{} invalid field(s){}", .issues.len(), join_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![ValidationIssue::new(path, message)])
    }

    /// Paths of all offending fields, in the order they were found.
    pub fn paths(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.path.as_str()).collect()
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    let joined: Vec<String> = issues.iter().map(ToString::to_string).collect();
    if joined.is_empty() {
        String::new()
    } else {
        format!(": {}", joined.join("; "))
    }
}

/// stack-params error types
#[derive(Debug, thiserror::Error)]
pub enum StackParamsError {
    /// Context or override entry failed the stack input schema.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("branding error: {0}")]
    Branding(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StackParamsError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Offending fields, if this is a validation failure.
    pub fn validation_issues(&self) -> Option<&[ValidationIssue]> {
        match self {
            Self::Validation(err) => Some(&err.issues),
            _ => None,
        }
    }
}

/// Result type alias for stack-params operations
pub type Result<T> = std::result::Result<T, StackParamsError>;
