//! Storefront locale registry.
//!
//! The set of locales the storefront serves lives in a YAML file
//! (`config/locales.yaml` by default). Each locale may carry a backend
//! channel id, which the commerce client forwards so the backend can route
//! the request to the right storefront channel. Loading validates the file
//! so a bad deploy fails at startup rather than on the first request.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// BCP 47 locale code, e.g. `"en-US"`.
    pub code: String,
    /// Backend channel id for this locale, if the store is multi-channel.
    pub channel_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocalesFile {
    pub locales: Vec<LocaleConfig>,
}

impl LocalesFile {
    /// Whether `code` is a configured locale.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.locales.iter().any(|l| l.code == code)
    }

    /// The configured locale entry for `code`, if any.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|l| l.code == code)
    }
}

/// Load and validate the locale registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_locales(path: &Path) -> Result<LocalesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LocalesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let locales_file: LocalesFile = serde_yaml::from_str(&content)?;
    validate_locales(&locales_file)?;

    Ok(locales_file)
}

fn validate_locales(file: &LocalesFile) -> Result<(), ConfigError> {
    if file.locales.is_empty() {
        return Err(ConfigError::LocalesInvalid(
            "at least one locale is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for locale in &file.locales {
        if locale.code.trim().is_empty() {
            return Err(ConfigError::LocalesInvalid(
                "locale code must not be empty".to_string(),
            ));
        }
        if !seen.insert(locale.code.as_str()) {
            return Err(ConfigError::LocalesInvalid(format!(
                "duplicate locale code: {}",
                locale.code
            )));
        }
    }

    Ok(())
}
