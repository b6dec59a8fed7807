//! Table configuration
//!
//! Configuration can come from three places, later ones winning:
//! defaults, a YAML file, and environment variables (usually sourced from a
//! `.env` file by the binary).
//!
//! Example YAML:
//! ```yaml
//! page_size: 10
//! array_match: all
//! clamp_page: true
//! ```
//!
//! Environment variables:
//! - WFO_PAGE_SIZE: rows per page (positive integer)
//! - WFO_ARRAY_MATCH: `any` or `all`
//! - WFO_CLAMP_PAGE: `true` or `false`

use crate::table::{ArrayMatch, DEFAULT_PAGE_SIZE};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_PAGE_SIZE: &str = "WFO_PAGE_SIZE";
pub const ENV_ARRAY_MATCH: &str = "WFO_ARRAY_MATCH";
pub const ENV_CLAMP_PAGE: &str = "WFO_CLAMP_PAGE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page, fixed for the life of a table
    pub page_size: usize,
    /// How multi-select filters combine selected values
    pub array_match: ArrayMatch,
    /// Pull the page index back into range when a filter shrinks the rows
    pub clamp_page: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            array_match: ArrayMatch::Any,
            clamp_page: true,
        }
    }
}

impl TableConfig {
    /// Defaults overridden by any `WFO_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env()
    }

    /// Apply `WFO_*` environment variables on top of this config
    pub fn with_env(mut self) -> Result<Self> {
        if let Ok(value) = std::env::var(ENV_PAGE_SIZE) {
            self.page_size = value
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {}", ENV_PAGE_SIZE, value))?;
        }
        if let Ok(value) = std::env::var(ENV_ARRAY_MATCH) {
            self.array_match = value
                .parse()
                .with_context(|| format!("Invalid {}: {}", ENV_ARRAY_MATCH, value))?;
        }
        if let Ok(value) = std::env::var(ENV_CLAMP_PAGE) {
            self.clamp_page = value
                .trim()
                .to_lowercase()
                .parse()
                .with_context(|| format!("Invalid {}: {}", ENV_CLAMP_PAGE, value))?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            eyre::bail!("Page size must be greater than zero");
        }
        Ok(())
    }

    /// Read config from YAML file
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read table config: {}", path.as_ref().display())
        })?;

        let config: Self =
            serde_yaml::from_str(&content).with_context(|| "Failed to parse table config YAML")?;
        config.validate()?;

        Ok(config)
    }

    /// Write config to YAML file
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .with_context(|| "Failed to serialize table config to YAML")?;

        std::fs::write(path.as_ref(), yaml).with_context(|| {
            format!("Failed to write table config: {}", path.as_ref().display())
        })?;

        Ok(())
    }
}
