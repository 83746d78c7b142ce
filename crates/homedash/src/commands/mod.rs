//! Command dispatch: bridges CLI args -> core flows -> output formatting.

pub mod actuators;
pub mod catalog;
pub mod config_cmd;
pub mod devices;
pub mod readings;
pub mod rooms;
pub mod sensors;
pub mod util;
pub mod weather;

use homedash_core::Dashboard;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    dashboard: &Dashboard,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Rooms(args) => rooms::handle(dashboard, args, global).await,
        Command::Devices(args) => devices::handle(dashboard, args, global).await,
        Command::Sensors(args) => sensors::handle(dashboard, args, global).await,
        Command::Actuators(args) => actuators::handle(dashboard, args, global).await,
        Command::Catalog(args) => catalog::handle(dashboard, args, global).await,
        Command::Readings(args) => readings::handle(dashboard, args, global).await,
        Command::Weather => weather::handle(dashboard, global).await,
        // Handled before dispatch
        Command::Config(_) | Command::Completions(_) | Command::Man(_) => unreachable!(),
    }
}
