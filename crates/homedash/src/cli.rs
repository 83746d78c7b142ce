//! Clap derive structures for the `homedash` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// homedash -- query and control a SmartHome backend from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "homedash",
    version,
    about = "Browse and control a SmartHome house from the command line",
    long_about = "A CLI for the SmartHome REST API.\n\n\
        Lists rooms and devices, adds devices, sensors and actuators,\n\
        deactivates devices and drives blind-roller actuators.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "HOMEDASH_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend base URL (overrides profile)
    #[arg(long, short = 'u', env = "HOMEDASH_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "HOMEDASH_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in milliseconds (overrides profile)
    #[arg(long, env = "HOMEDASH_TIMEOUT_MS", global = true)]
    pub timeout_ms: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the rooms of the house
    #[command(alias = "r")]
    Rooms(RoomsArgs),

    /// Inspect, add and deactivate devices
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// Inspect and add sensors
    Sensors(SensorsArgs),

    /// Inspect and add actuators, drive blind rollers
    Actuators(ActuatorsArgs),

    /// Sensor and actuator types and models
    Catalog(CatalogArgs),

    /// Look up sensor readings
    Readings(ReadingsArgs),

    /// Current temperature, sunrise and sunset
    Weather,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Print the manual page for homedash or one of its commands
    Man(ManArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ROOMS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct RoomsArgs {
    #[command(subcommand)]
    pub command: RoomsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoomsCommand {
    /// List the rooms of the configured house
    #[command(alias = "ls")]
    List,

    /// Get room details
    Get {
        /// Room ID
        room: String,
    },

    /// List the devices installed in a room
    Devices {
        /// Room ID
        room: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DEVICES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    /// Get a device record
    Get {
        /// Device ID
        device: String,
    },

    /// Show a device with its room, sensors, actuators and readings
    Details {
        /// Device ID
        device: String,
    },

    /// Add a device to a room (created active)
    Add {
        /// Room ID
        #[arg(long)]
        room: String,

        /// Device name
        #[arg(long)]
        name: String,

        /// Device model
        #[arg(long)]
        model: String,
    },

    /// Deactivate a device
    Deactivate {
        /// Device ID
        device: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SENSORS / ACTUATORS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SensorsArgs {
    #[command(subcommand)]
    pub command: SensorsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SensorsCommand {
    /// Get a sensor record
    Get {
        /// Sensor ID
        sensor: String,
    },

    /// Add a sensor to a device
    Add {
        /// Device ID
        #[arg(long)]
        device: String,

        /// Sensor type ID
        #[arg(long = "type")]
        type_id: String,

        /// Sensor model ID
        #[arg(long)]
        model: String,
    },
}

#[derive(Debug, Args)]
pub struct ActuatorsArgs {
    #[command(subcommand)]
    pub command: ActuatorsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ActuatorsCommand {
    /// Get an actuator record
    Get {
        /// Actuator ID
        actuator: String,
    },

    /// Add an actuator to a device
    Add {
        /// Device ID
        #[arg(long)]
        device: String,

        /// Actuator type ID
        #[arg(long = "type")]
        type_id: String,

        /// Actuator model ID
        #[arg(long)]
        model: String,
    },

    /// Set a blind roller to a percentage
    Blind {
        /// Actuator ID
        actuator: String,

        /// Sensor whose reading accompanies the update
        #[arg(long)]
        sensor: String,

        /// Target percentage (clamped to 0-100)
        #[arg(long, allow_negative_numbers = true)]
        value: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CATALOG / READINGS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List sensor types with description and unit
    SensorTypes,

    /// List actuator types
    ActuatorTypes,

    /// List the models of a sensor type
    SensorModels {
        /// Sensor type ID
        #[arg(value_name = "TYPE")]
        type_id: String,
    },

    /// List the models of an actuator type
    ActuatorModels {
        /// Actuator type ID
        #[arg(value_name = "TYPE")]
        type_id: String,
    },
}

#[derive(Debug, Args)]
pub struct ReadingsArgs {
    #[command(subcommand)]
    pub command: ReadingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReadingsCommand {
    /// Get a single reading
    Get {
        /// Reading ID
        reading: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG / COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration
    Show,

    /// Print the config file location
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Args)]
pub struct ManArgs {
    /// Command path, e.g. `devices add` (empty for the top-level page)
    pub command: Vec<String>,
}
