//! Catalog command handlers: sensor/actuator types and models.

use tabled::Tabled;

use homedash_core::Dashboard;

use crate::cli::{CatalogArgs, CatalogCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct TypeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Unit")]
    unit: String,
}

impl TypeRow {
    fn new(id: &str, description: Option<&str>, unit: Option<&str>) -> Self {
        Self {
            id: id.to_owned(),
            description: description.unwrap_or("-").to_owned(),
            unit: unit.unwrap_or("-").to_owned(),
        }
    }
}

#[derive(Tabled)]
struct ModelRow {
    #[tabled(rename = "Model")]
    id: String,
}

pub async fn handle(
    dashboard: &Dashboard,
    args: CatalogArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = match args.command {
        CatalogCommand::SensorTypes => {
            let types = dashboard.sensor_types().await?;
            output::render_list(
                &global.output,
                &types,
                |t| TypeRow::new(&t.id, t.description.as_deref(), t.unit.as_deref()),
                |t| t.id.clone(),
            )
        }
        CatalogCommand::ActuatorTypes => {
            let types = dashboard.actuator_types().await?;
            output::render_list(
                &global.output,
                &types,
                |t| TypeRow::new(&t.id, t.description.as_deref(), t.unit.as_deref()),
                |t| t.id.clone(),
            )
        }
        CatalogCommand::SensorModels { type_id } => {
            let models = dashboard.sensor_models(&type_id).await?;
            output::render_list(
                &global.output,
                &models,
                |m| ModelRow { id: m.id.clone() },
                |m| m.id.clone(),
            )
        }
        CatalogCommand::ActuatorModels { type_id } => {
            let models = dashboard.actuator_models(&type_id).await?;
            output::render_list(
                &global.output,
                &models,
                |m| ModelRow { id: m.id.clone() },
                |m| m.id.clone(),
            )
        }
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
