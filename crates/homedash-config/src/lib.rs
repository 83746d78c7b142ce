//! Shared configuration for the homedash CLI and TUI.
//!
//! TOML profiles layered under `HOMEDASH_*` environment overrides, and
//! translation to `homedash_core::DashboardConfig`. Both binaries depend
//! on this crate; the CLI adds flag-aware wrappers on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use homedash_core::config::{DEFAULT_HOUSE_ID, DEFAULT_WEATHER_REFRESH};
use homedash_core::{DashboardConfig, GeoPoint};

/// Backend used when no profile names one.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;
const ENV_PREFIX: &str = "HOMEDASH_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found")]
    UnknownProfile { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Look up a profile. The `default` profile always exists, falling
    /// back to the built-in settings when the file does not define it.
    pub fn profile(&self, name: &str) -> Result<Profile, ConfigError> {
        match self.profiles.get(name) {
            Some(profile) => Ok(profile.clone()),
            None if name == "default" => Ok(Profile::default()),
            None => Err(ConfigError::UnknownProfile { name: name.into() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// A named backend profile.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    /// Backend base URL (e.g., "http://localhost:8080/api/v1").
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_house_id")]
    pub house_id: String,

    /// Override the global timeout.
    pub timeout_ms: Option<u64>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Public sun-time service for the weather fallback.
    pub sun_times_url: Option<String>,

    /// Public forecast service for the weather fallback.
    pub forecast_url: Option<String>,

    /// Seconds between temperature refreshes on the home screen.
    pub weather_refresh_secs: Option<u64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            house_id: default_house_id(),
            timeout_ms: None,
            latitude: None,
            longitude: None,
            sun_times_url: None,
            forecast_url: None,
            weather_refresh_secs: None,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.into()
}
fn default_house_id() -> String {
    DEFAULT_HOUSE_ID.into()
}

/// `HOMEDASH_API_URL` and `HOMEDASH_TIMEOUT_MS`, which beat every profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnvOverrides {
    pub api_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl EnvOverrides {
    pub fn from_env() -> Result<Self, ConfigError> {
        let overrides = Figment::from(Env::prefixed(ENV_PREFIX).only(&["api_url", "timeout_ms"]))
            .extract()?;
        Ok(overrides)
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "homedash", "homedash").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("homedash");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the Config from `path` + environment. A missing file is not an
/// error; the defaults apply.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(
            Env::prefixed(ENV_PREFIX)
                .ignore(&["api_url", "timeout_ms"])
                .split("__"),
        );

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if it cannot be read.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_toml(cfg)?)?;
    Ok(())
}

/// Render a config exactly as it would be saved.
pub fn to_toml(cfg: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(cfg)?)
}

// ── Translation ─────────────────────────────────────────────────────

fn parse_url(field: &str, raw: &str) -> Result<Url, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Validation {
        field: field.into(),
        reason: format!("invalid URL: {raw}"),
    })
}

/// Build a `DashboardConfig` from a profile.
///
/// Precedence: environment overrides, then the profile, then `defaults`.
pub fn profile_to_dashboard_config(
    profile: &Profile,
    defaults: &Defaults,
    env: &EnvOverrides,
) -> Result<DashboardConfig, ConfigError> {
    let api_url = parse_url("api_url", env.api_url.as_deref().unwrap_or(&profile.api_url))?;

    let timeout_ms = env
        .timeout_ms
        .or(profile.timeout_ms)
        .unwrap_or(defaults.timeout_ms);
    if timeout_ms == 0 {
        return Err(ConfigError::Validation {
            field: "timeout_ms".into(),
            reason: "must be greater than zero".into(),
        });
    }

    let location = GeoPoint {
        latitude: profile.latitude.unwrap_or(GeoPoint::PORTO.latitude),
        longitude: profile.longitude.unwrap_or(GeoPoint::PORTO.longitude),
    };
    if !(-90.0..=90.0).contains(&location.latitude) {
        return Err(ConfigError::Validation {
            field: "latitude".into(),
            reason: format!("{} is outside [-90, 90]", location.latitude),
        });
    }
    if !(-180.0..=180.0).contains(&location.longitude) {
        return Err(ConfigError::Validation {
            field: "longitude".into(),
            reason: format!("{} is outside [-180, 180]", location.longitude),
        });
    }

    let mut config = DashboardConfig::with_api_url(api_url);
    config.timeout = Duration::from_millis(timeout_ms);
    config.house_id.clone_from(&profile.house_id);
    config.location = location;
    if let Some(ref raw) = profile.sun_times_url {
        config.sun_times_url = parse_url("sun_times_url", raw)?;
    }
    if let Some(ref raw) = profile.forecast_url {
        config.forecast_url = parse_url("forecast_url", raw)?;
    }
    config.weather_refresh = profile
        .weather_refresh_secs
        .map_or(DEFAULT_WEATHER_REFRESH, Duration::from_secs);
    Ok(config)
}

/// Resolve a named profile (or the configured default) into a
/// `DashboardConfig`, applying environment overrides.
pub fn resolve(config: &Config, profile_name: Option<&str>) -> Result<DashboardConfig, ConfigError> {
    let name = profile_name
        .or(config.default_profile.as_deref())
        .unwrap_or("default");
    let profile = config.profile(name)?;
    profile_to_dashboard_config(&profile, &config.defaults, &EnvOverrides::from_env()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.default_profile.as_deref(), Some("default"));
        assert_eq!(config.defaults.timeout_ms, 1000);
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn profile_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
default_profile = "lab"

[profiles.lab]
api_url = "http://10.0.0.5:8080/api/v1"
house_id = "H7"
timeout_ms = 2500
latitude = 38.72
longitude = -9.14
"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        let lab = config.profile("lab").unwrap();
        assert_eq!(lab.house_id, "H7");

        let dashboard =
            profile_to_dashboard_config(&lab, &config.defaults, &EnvOverrides::default()).unwrap();
        assert_eq!(dashboard.api_url.as_str(), "http://10.0.0.5:8080/api/v1");
        assert_eq!(dashboard.timeout, Duration::from_millis(2500));
        assert!((dashboard.location.latitude - 38.72).abs() < f64::EPSILON);
    }

    #[test]
    fn save_then_load_keeps_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.profiles.insert(
            "default".into(),
            Profile {
                house_id: "H2".into(),
                ..Profile::default()
            },
        );

        save_config_to(&config, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.profile("default").unwrap().house_id, "H2");
    }

    #[test]
    fn env_overrides_win_over_profile() {
        let env = EnvOverrides {
            api_url: Some("http://backend:9000/api/v1".into()),
            timeout_ms: Some(300),
        };
        let profile = Profile {
            timeout_ms: Some(5000),
            ..Profile::default()
        };

        let dashboard = profile_to_dashboard_config(&profile, &Defaults::default(), &env).unwrap();
        assert_eq!(dashboard.api_url.as_str(), "http://backend:9000/api/v1");
        assert_eq!(dashboard.timeout, Duration::from_millis(300));
    }

    #[test]
    fn default_profile_always_exists() {
        let config = Config::default();
        assert_eq!(config.profile("default").unwrap(), Profile::default());
        assert!(matches!(
            config.profile("elsewhere"),
            Err(ConfigError::UnknownProfile { .. })
        ));
    }

    #[test]
    fn bad_values_are_rejected() {
        let defaults = Defaults::default();
        let env = EnvOverrides::default();

        let bad_url = Profile {
            api_url: "not a url".into(),
            ..Profile::default()
        };
        assert!(profile_to_dashboard_config(&bad_url, &defaults, &env).is_err());

        let bad_latitude = Profile {
            latitude: Some(123.0),
            ..Profile::default()
        };
        assert!(profile_to_dashboard_config(&bad_latitude, &defaults, &env).is_err());
    }

    #[test]
    fn rendered_toml_reads_back_with_awkward_names() {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "lab.east".into(),
            Profile {
                api_url: "http://10.0.0.5:8080/api/v1?tag=\"x\"".into(),
                ..Profile::default()
            },
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, to_toml(&cfg).unwrap()).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.profiles["lab.east"].api_url, cfg.profiles["lab.east"].api_url);
    }
}
