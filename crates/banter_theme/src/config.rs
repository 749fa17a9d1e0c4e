//! Theme config files
//!
//! An embedding app can ship its overrides as TOML instead of building them
//! in code:
//!
//! ```toml
//! mode = "auto"
//!
//! [light.color]
//! primary = "#FF0000"
//!
//! [light.spacing.spacing]
//! s3 = 12.0
//! ```

use std::path::Path;

use thiserror::Error;

use crate::theme::ThemeOverrides;

/// Theme configuration errors. Derivation and composition never fail;
/// only loading external config can.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Failed to read a theme file
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse theme TOML
    #[error("failed to parse theme file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ThemeOverrides {
    /// Parse overrides from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(input)?)
    }

    /// Load overrides from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
