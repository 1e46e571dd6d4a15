//! Process-wide switch for diagnostic output.
//!
//! The switch is resolved once and never changes afterwards. Hosts call
//! [`init`] (environment) or [`install`] (any other source) during startup;
//! if neither ran, the first read falls back to the environment.

use std::env;
use std::sync::OnceLock;

use tracing::debug;

/// Environment variable that enables diagnostics when set to exactly `1`.
pub const ENV_VAR: &str = "PKL_DEBUG";

static GLOBAL: OnceLock<DiagnosticToggle> = OnceLock::new();

/// Whether diagnostic lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiagnosticToggle {
    enabled: bool,
}

impl DiagnosticToggle {
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Resolve a raw variable value.
    ///
    /// Only the exact string `1` enables. `true`, `TRUE`, ` 1`, empty and
    /// absent all disable.
    pub fn from_env_value(value: Option<&str>) -> Self {
        Self {
            enabled: value == Some("1"),
        }
    }

    /// Read [`ENV_VAR`] from the current process environment.
    ///
    /// A value that is not valid unicode cannot be `1` and disables.
    pub fn from_env() -> Self {
        let value = env::var(ENV_VAR).ok();
        Self::from_env_value(value.as_deref())
    }
}

impl From<bool> for DiagnosticToggle {
    fn from(enabled: bool) -> Self {
        Self { enabled }
    }
}

/// Initialize the process-wide toggle from the environment.
///
/// Returns the effective value. Later calls return the first value.
pub fn init() -> DiagnosticToggle {
    *GLOBAL.get_or_init(resolve_from_env)
}

/// Install a toggle obtained from another configuration source.
///
/// Fails with the already-installed value if the global was set before.
pub fn install(toggle: DiagnosticToggle) -> Result<(), DiagnosticToggle> {
    GLOBAL.set(toggle).map_err(|_| global())?;
    debug!(enabled = toggle.is_enabled(), "diagnostic toggle installed");
    Ok(())
}

/// Current process-wide toggle.
pub fn global() -> DiagnosticToggle {
    init()
}

/// Shorthand for `global().is_enabled()`.
pub fn is_enabled() -> bool {
    global().is_enabled()
}

fn resolve_from_env() -> DiagnosticToggle {
    let toggle = DiagnosticToggle::from_env();
    debug!(
        var = ENV_VAR,
        enabled = toggle.is_enabled(),
        "diagnostic toggle resolved from environment"
    );
    toggle
}
