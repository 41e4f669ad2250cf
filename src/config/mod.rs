//! Analysis Configuration Module
//!
//! Every scoring threshold and band in the engine is an operator-tunable
//! TOML value with built-in defaults matching the documented constants.
//!
//! ## Loading Order
//!
//! 1. `AEGIS_CONFIG` environment variable (path to TOML file)
//! 2. `analysis_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! // In main():
//! config::init(AnalysisConfig::load());
//!
//! // Anywhere in the codebase:
//! let threshold = config::get().battle.major_battle_participants;
//! ```
//!
//! Library consumers and tests may skip `init()` entirely; `get()` falls
//! back to the built-in defaults.

mod analysis_config;

pub use analysis_config::*;

use std::sync::OnceLock;

/// Global analysis configuration, initialized once at startup.
static ANALYSIS_CONFIG: OnceLock<AnalysisConfig> = OnceLock::new();

/// Initialize the global analysis configuration.
///
/// Should be called exactly once before any calls to `get()`; a second call
/// is ignored with a warning.
pub fn init(config: AnalysisConfig) {
    if ANALYSIS_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once — ignoring");
    }
}

/// Get a reference to the global analysis configuration.
///
/// Falls back to built-in defaults when `init()` was never called, so pure
/// library use and unit tests require no setup.
pub fn get() -> &'static AnalysisConfig {
    ANALYSIS_CONFIG.get_or_init(AnalysisConfig::default)
}

/// Check whether the config has been explicitly initialized.
pub fn is_initialized() -> bool {
    ANALYSIS_CONFIG.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_marks_the_global_config_initialized() {
        init(AnalysisConfig::default());
        assert!(is_initialized());
        // A second init is ignored, not a panic
        init(AnalysisConfig::default());
        assert!(is_initialized());
        assert_eq!(get().clustering.bucket_minutes, 30);
    }
}
