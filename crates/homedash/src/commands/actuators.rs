//! Actuator command handlers, including blind-roller updates.

use homedash_api::types::RollerBlindRequest;
use homedash_core::notice;
use homedash_core::{Actuator, BlindRoller, ComponentForm, Dashboard};

use crate::cli::{ActuatorsArgs, ActuatorsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::{devices, util};

fn detail(a: &Actuator) -> String {
    [
        format!("ID:     {}", a.id),
        format!("Model:  {}", a.model_id),
        format!("Device: {}", a.device_id.as_deref().unwrap_or("-")),
    ]
    .join("\n")
}

pub async fn handle(
    dashboard: &Dashboard,
    args: ActuatorsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ActuatorsCommand::Get { actuator } => {
            let found: Actuator = dashboard
                .api()
                .get_actuator(&actuator)
                .await
                .map_err(|e| {
                    CliError::from(e).for_resource(
                        "actuator",
                        &actuator,
                        "devices details <DEVICE>",
                    )
                })?
                .into();
            let out = output::render_single(&global.output, &found, detail, |a| a.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ActuatorsCommand::Add {
            device,
            type_id,
            model,
        } => {
            let body = ComponentForm::new(type_id, model).actuator_request(&device)?;
            util::require_active(&devices::fetch_device(dashboard, &device).await?)?;

            let created: Actuator = dashboard.api().add_actuator(&body).await?.into();
            util::notice(notice::ACTUATOR_ADDED, global.quiet);
            let out = output::render_single(&global.output, &created, detail, |a| a.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ActuatorsCommand::Blind {
            actuator,
            sensor,
            value,
        } => {
            let mut blind = BlindRoller::default();
            let percent = blind.set(&actuator, value);
            let body = RollerBlindRequest {
                actuator_id: actuator.clone(),
                sensor_id: sensor,
                input_value: percent.to_string(),
            };

            match dashboard.api().update_roller_blind(&actuator, &body).await {
                Ok(response) => {
                    util::notice(notice::VALUE_UPDATED, global.quiet);
                    let out = output::render_single(
                        &global.output,
                        &response,
                        |_| format!("{actuator}: {percent}%"),
                        |_| percent.to_string(),
                    );
                    output::print_output(&out, global.quiet);
                    Ok(())
                }
                Err(e) => {
                    tracing::warn!(error = %e, "{}", notice::VALUE_UPDATE_FAILED);
                    Err(e.into())
                }
            }
        }
    }
}
