//! Branding configuration loaders.
//!
//! The branding value is opaque to this crate: whatever the loader returns
//! is attached to the processed stack input as `brandingConfig`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::{Result, StackParamsError};

/// Zero-argument source of the branding configuration.
pub trait BrandingLoader {
    fn load(&self) -> Result<Value>;
}

impl<F> BrandingLoader for F
where
    F: Fn() -> Result<Value>,
{
    fn load(&self) -> Result<Value> {
        self()
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticBranding(pub Value);

impl BrandingLoader for StaticBranding {
    fn load(&self) -> Result<Value> {
        Ok(self.0.clone())
    }
}

/// Reads the branding configuration from a JSON file.
///
/// A missing file is not an error: stacks without custom branding get an
/// empty object.
#[derive(Debug, Clone)]
pub struct FileBrandingLoader {
    path: PathBuf,
}

impl FileBrandingLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BrandingLoader for FileBrandingLoader {
    fn load(&self) -> Result<Value> {
        let path = &self.path;
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(?path, "no branding file, using empty branding config");
                return Ok(Value::Object(Default::default()));
            }
            Err(e) => {
                return Err(StackParamsError::Branding(format!(
                    "Failed to read branding file {path:?}: {e}"
                )));
            }
        };
        serde_json::from_str(&content).map_err(|e| {
            StackParamsError::Branding(format!("Failed to parse branding file {path:?}: {e}"))
        })
    }
}
