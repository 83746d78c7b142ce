//! Sensor command handlers.

use homedash_core::notice;
use homedash_core::{ComponentForm, Dashboard, Sensor};

use crate::cli::{GlobalOpts, SensorsArgs, SensorsCommand};
use crate::error::CliError;
use crate::output;

use super::{devices, util};

fn detail(s: &Sensor) -> String {
    [
        format!("ID:     {}", s.id),
        format!("Model:  {}", s.model_id),
        format!("Device: {}", s.device_id.as_deref().unwrap_or("-")),
    ]
    .join("\n")
}

pub async fn handle(
    dashboard: &Dashboard,
    args: SensorsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SensorsCommand::Get { sensor } => {
            let found: Sensor = dashboard
                .api()
                .get_sensor(&sensor)
                .await
                .map_err(|e| {
                    CliError::from(e).for_resource("sensor", &sensor, "devices details <DEVICE>")
                })?
                .into();
            let out = output::render_single(&global.output, &found, detail, |s| s.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SensorsCommand::Add {
            device,
            type_id,
            model,
        } => {
            let body = ComponentForm::new(type_id, model).sensor_request(&device)?;
            util::require_active(&devices::fetch_device(dashboard, &device).await?)?;

            let created: Sensor = dashboard.api().add_sensor(&body).await?.into();
            util::notice(notice::SENSOR_ADDED, global.quiet);
            let out = output::render_single(&global.output, &created, detail, |s| s.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
