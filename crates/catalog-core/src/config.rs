//! Configuration loading for .catalog.toml

use camino::Utf8PathBuf;
use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".catalog.toml";

/// Backing file used when neither the caller nor the config names one.
pub const DEFAULT_STORE_PATH: &str = "products.json";

/// Root configuration from .catalog.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[garde(context(()))]
pub struct CatalogConfig {
    #[serde(default)]
    #[garde(dive)]
    pub store: StoreSettings,
}

/// Settings for the backing file
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[garde(context(()))]
pub struct StoreSettings {
    #[garde(custom(validate_store_path))]
    pub path: Option<String>,
}

impl StoreSettings {
    /// Configured backing file, or the default.
    #[must_use]
    pub fn path_or_default(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.path.as_deref().unwrap_or(DEFAULT_STORE_PATH))
    }
}

#[allow(
    clippy::ref_option,
    clippy::trivially_copy_pass_by_ref,
    clippy::option_if_let_else
)]
fn validate_store_path(value: &Option<String>, _ctx: &()) -> garde::Result {
    if let Some(v) = value {
        if v.trim().is_empty() {
            Err(garde::Error::new("must not be empty"))
        } else if v.ends_with('/') || v.ends_with('\\') {
            Err(garde::Error::new(format!(
                "'{v}' looks like a directory - point it at a file such as 'products.json'"
            )))
        } else {
            Ok(())
        }
    } else {
        Ok(())
    }
}

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

impl CatalogConfig {
    /// Run the settings rules on an already parsed config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming every setting that failed.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate()
            .map_err(|e| ConfigError::Validation(e.to_string().trim().to_string()))
    }
}
