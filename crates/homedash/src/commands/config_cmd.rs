//! Config subcommand handlers.

use dialoguer::Input;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn parse_coordinate(field: &str, raw: &str, limit: f64) -> Result<Option<f64>, CliError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let value: f64 = raw.trim().parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("'{raw}' is not a number"),
    })?;
    if !(-limit..=limit).contains(&value) {
        return Err(CliError::Validation {
            field: field.into(),
            reason: format!("must be within ±{limit}"),
        });
    }
    Ok(Some(value))
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("homedash configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            let api_url: String = Input::new()
                .with_prompt("Backend URL")
                .default(homedash_config::DEFAULT_API_URL.into())
                .interact_text()
                .map_err(prompt_err)?;
            url::Url::parse(&api_url).map_err(|e| CliError::Validation {
                field: "api_url".into(),
                reason: e.to_string(),
            })?;

            let house_id: String = Input::new()
                .with_prompt("House ID")
                .default(homedash_core::config::DEFAULT_HOUSE_ID.into())
                .interact_text()
                .map_err(prompt_err)?;

            let latitude: String = Input::new()
                .with_prompt("Latitude (blank for Porto)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;
            let longitude: String = Input::new()
                .with_prompt("Longitude (blank for Porto)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;

            let profile = Profile {
                api_url,
                house_id,
                latitude: parse_coordinate("latitude", &latitude, 90.0)?,
                longitude: parse_coordinate("longitude", &longitude, 180.0)?,
                ..Profile::default()
            };

            let mut cfg = config::load_config_or_default();
            cfg.profiles.insert(profile_name.clone(), profile);
            cfg.default_profile = Some(profile_name.clone());
            config::save_config(&cfg)?;

            eprintln!("\nConfiguration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: homedash rooms list");

            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let text = config::to_toml(&cfg)?;
            let out =
                output::render_single(&global.output, &cfg, |_| text.clone(), |_| "config".into());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}
