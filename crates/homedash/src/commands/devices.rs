//! Device command handlers.

use tabled::Tabled;

use homedash_core::notice;
use homedash_core::{Dashboard, Device, DeviceDetails, NewDeviceForm};

use crate::cli::{DevicesArgs, DevicesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ComponentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Model")]
    model: String,
}

#[derive(Tabled)]
struct ReadingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Sensor")]
    sensor: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Timestamp")]
    timestamp: String,
}

fn detail(d: &Device) -> String {
    [
        format!("ID:     {}", d.id),
        format!("Name:   {}", d.display_name()),
        format!("Model:  {}", d.model),
        format!("Room:   {}", d.room_id),
        format!("Status: {}", d.status_label()),
    ]
    .join("\n")
}

fn details_view(d: &DeviceDetails, color: bool) -> String {
    let mut sections = vec![
        [
            format!("ID:     {}", d.device.id),
            format!("Name:   {}", d.device.display_name()),
            format!("Model:  {}", d.device.model),
            format!("Room:   {} ({})", d.room.display_name(), d.room.id),
            format!(
                "Status: {}",
                output::status(d.device.active, d.device.status_label(), color)
            ),
        ]
        .join("\n"),
    ];

    sections.push(output::heading("Sensors", color));
    sections.push(if d.sensors.is_empty() {
        notice::NO_DATA.to_owned()
    } else {
        output::render_table(
            &d.sensors
                .iter()
                .map(|s| ComponentRow {
                    id: s.id.clone(),
                    model: s.model_id.clone(),
                })
                .collect::<Vec<_>>(),
        )
    });

    sections.push(output::heading("Actuators", color));
    sections.push(if d.actuators.is_empty() {
        notice::NO_DATA.to_owned()
    } else {
        output::render_table(
            &d.actuators
                .iter()
                .map(|a| ComponentRow {
                    id: a.id.clone(),
                    model: a.model_id.clone(),
                })
                .collect::<Vec<_>>(),
        )
    });

    sections.push(output::heading("Readings", color));
    sections.push(if d.readings.is_empty() {
        notice::NO_READINGS.to_owned()
    } else {
        output::render_table(
            &d.readings
                .iter()
                .map(|r| ReadingRow {
                    id: r.id.clone(),
                    sensor: r.sensor_id.clone(),
                    value: r.value.clone(),
                    timestamp: r.timestamp.clone(),
                })
                .collect::<Vec<_>>(),
        )
    });

    sections.join("\n\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    dashboard: &Dashboard,
    args: DevicesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DevicesCommand::Get { device } => {
            let found = fetch_device(dashboard, &device).await?;
            let out = output::render_single(&global.output, &found, detail, |d| d.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DevicesCommand::Details { device } => {
            let flow = dashboard.device_details(&device);
            let details = flow
                .load()
                .await
                .map_err(|e| CliError::from(e).for_resource("device", &device, "rooms devices"))?;
            let color = output::should_color(&global.color);
            let out = output::render_single(
                &global.output,
                &*details,
                |d| details_view(d, color),
                |d| d.device.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DevicesCommand::Add { room, name, model } => {
            let form = NewDeviceForm::new(name, model);
            let created = dashboard.room_devices(&room).add_device(&form).await?;
            util::notice(notice::DEVICE_ADDED, global.quiet);
            let out = output::render_single(&global.output, &created, detail, |d| d.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DevicesCommand::Deactivate { device } => {
            let current = fetch_device(dashboard, &device).await?;
            if !current.active {
                return Err(CliError::Validation {
                    field: "device".into(),
                    reason: format!("'{device}' is already deactivated"),
                });
            }
            if !util::confirm(notice::CONFIRM_DEACTIVATE, "deactivate", global.yes)? {
                return Ok(());
            }
            let updated: Device = dashboard.api().deactivate_device(&device).await?.into();
            util::notice(notice::DEVICE_DEACTIVATED, global.quiet);
            let out = output::render_single(&global.output, &updated, detail, |d| d.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

pub(crate) async fn fetch_device(dashboard: &Dashboard, device: &str) -> Result<Device, CliError> {
    let found = dashboard
        .api()
        .get_device(device)
        .await
        .map_err(|e| CliError::from(e).for_resource("device", device, "rooms devices <ROOM>"))?;
    Ok(found.into())
}
