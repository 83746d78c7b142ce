//! Room command handlers.

use tabled::Tabled;

use homedash_core::{Dashboard, Device, Room};

use crate::cli::{GlobalOpts, OutputFormat, RoomsArgs, RoomsCommand};
use crate::error::CliError;
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct RoomRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Floor")]
    floor: i32,
    #[tabled(rename = "Area (m²)")]
    area: String,
    #[tabled(rename = "Location")]
    location: &'static str,
}

impl From<&Room> for RoomRow {
    fn from(r: &Room) -> Self {
        Self {
            id: r.id.clone(),
            name: r.display_name(),
            floor: r.floor_number,
            area: format!("{:.1}", r.floor_area()),
            location: r.location_label(),
        }
    }
}

#[derive(Tabled)]
pub(crate) struct DeviceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl DeviceRow {
    pub(crate) fn new(d: &Device, color: bool) -> Self {
        Self {
            id: d.id.clone(),
            name: d.display_name().to_owned(),
            model: d.model.clone(),
            status: output::status(d.active, d.status_label(), color),
        }
    }
}

fn detail(r: &Room) -> String {
    [
        format!("ID:       {}", r.id),
        format!("Name:     {}", r.display_name()),
        format!("Floor:    {}", r.floor_number),
        format!("Size:     {} x {} x {} m", r.length, r.width, r.height),
        format!("Area:     {:.1} m²", r.floor_area()),
        format!("Volume:   {:.1} m³", r.volume()),
        format!("Location: {}", r.location_label()),
        format!("House:    {}", r.house_id.as_deref().unwrap_or("-")),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    dashboard: &Dashboard,
    args: RoomsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RoomsCommand::List => {
            let overview = dashboard.rooms().load().await?;
            let out = output::render_list(
                &global.output,
                &overview.rooms,
                |r| RoomRow::from(r),
                |r| r.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        RoomsCommand::Get { room } => {
            let found: Room = dashboard
                .api()
                .get_room(&room)
                .await
                .map_err(|e| CliError::from(e).for_resource("room", &room, "rooms list"))?
                .into();
            let out = output::render_single(&global.output, &found, detail, |r| r.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        RoomsCommand::Devices { room } => {
            let page = dashboard.room_devices(&room).load().await?;
            let color = output::should_color(&global.color);
            if matches!(global.output, OutputFormat::Table) && !global.quiet {
                println!("{}", output::heading(&page.title(), color));
            }
            let out = output::render_list(
                &global.output,
                &page.devices,
                |d| DeviceRow::new(d, color),
                |d| d.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
