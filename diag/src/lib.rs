//! Environment-gated diagnostic lines for the pkl bindings.
//!
//! Diagnostics are off unless `PKL_DEBUG` is exactly `1`. When on, every
//! [`pkl_debug!`] call writes `[pkl-go] <message>\n` to standard error; when off,
//! the call does nothing, not even formatting its arguments.
//!
//! - **[`toggle`]**: the process-wide switch, resolved exactly once.
//! - **[`writer`]**: line framing and the stderr sink. Never fails.
//! - **[`config`]**: environment and TOML sources for the switch.
//!
//! ```
//! pkl_diag::toggle::init();
//! pkl_diag::pkl_debug!("evaluating {} modules", 3);
//! ```

pub mod config;
pub mod exit_codes;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod toggle;
pub mod writer;

pub use toggle::DiagnosticToggle;
pub use writer::DiagnosticWriter;
