//! CLI configuration: thin wrapper around `homedash_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--api-url, --timeout-ms).

use homedash_config::EnvOverrides;
use homedash_core::DashboardConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use homedash_config::{
    Config, Profile, config_path, load_config_or_default, save_config, to_toml,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `DashboardConfig` from the config file, profile, and CLI overrides.
///
/// Flags (which clap also fills from `HOMEDASH_API_URL` and
/// `HOMEDASH_TIMEOUT_MS`) take priority over profile values.
pub fn build_dashboard_config(global: &GlobalOpts) -> Result<DashboardConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    let profile = cfg.profile(&profile_name).map_err(|_| {
        let mut available: Vec<_> = cfg.profiles.keys().cloned().collect();
        available.sort();
        CliError::ProfileNotFound {
            name: profile_name.clone(),
            available: if available.is_empty() {
                "(none)".into()
            } else {
                available.join(", ")
            },
        }
    })?;

    let overrides = EnvOverrides {
        api_url: global.api_url.clone(),
        timeout_ms: global.timeout_ms,
    };
    tracing::debug!(profile = %profile_name, "resolving dashboard config");
    Ok(homedash_config::profile_to_dashboard_config(
        &profile,
        &cfg.defaults,
        &overrides,
    )?)
}
