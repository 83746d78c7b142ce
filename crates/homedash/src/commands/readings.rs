//! Sensor reading command handlers.

use homedash_core::{Dashboard, SensorReading};

use crate::cli::{GlobalOpts, ReadingsArgs, ReadingsCommand};
use crate::error::CliError;
use crate::output;

fn detail(r: &SensorReading) -> String {
    let mut lines = vec![
        format!("ID:        {}", r.id),
        format!("Sensor:    {}", r.sensor_id),
        format!("Device:    {}", r.device_id.as_deref().unwrap_or("-")),
        format!("Value:     {}", r.value),
        format!("Timestamp: {}", r.timestamp),
    ];
    if let Some(pct) = r.as_percentage() {
        lines.push(format!("Percent:   {pct}%"));
    }
    lines.join("\n")
}

pub async fn handle(
    dashboard: &Dashboard,
    args: ReadingsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ReadingsCommand::Get { reading } => {
            let found: SensorReading = dashboard
                .api()
                .get_reading(&reading)
                .await
                .map_err(|e| {
                    CliError::from(e).for_resource("reading", &reading, "devices details <DEVICE>")
                })?
                .into();
            let out = output::render_single(&global.output, &found, detail, |r| r.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
