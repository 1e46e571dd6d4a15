//! Configuration sources for the diagnostic toggle.
//!
//! The toggle has one option, `enabled`. It can come from the environment
//! (`PKL_DEBUG=1`) or from a TOML file such as:
//!
//! ```toml
//! enabled = true
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::toggle::DiagnosticToggle;

/// Diagnostic configuration (TOML). Missing fields default to disabled.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DiagConfig {
    /// Gate diagnostic output.
    pub enabled: bool,
}

impl DiagConfig {
    pub fn from_env() -> Self {
        Self {
            enabled: DiagnosticToggle::from_env().is_enabled(),
        }
    }

    pub fn toggle(self) -> DiagnosticToggle {
        DiagnosticToggle::from(self.enabled)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DiagConfig::default()`.
pub fn load_config(path: &Path) -> Result<DiagConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        return Ok(DiagConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DiagConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), enabled = cfg.enabled, "config loaded");
    Ok(cfg)
}
