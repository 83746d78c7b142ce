//! Weather command handler.

use homedash_core::{Dashboard, Weather, WeatherSource};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

fn source_label(source: WeatherSource) -> &'static str {
    match source {
        WeatherSource::Backend => "backend",
        WeatherSource::Public => "public fallback",
        WeatherSource::Unavailable => "unavailable",
    }
}

fn detail(w: &Weather) -> String {
    [
        format!(
            "Temperature: {} °C ({})",
            w.temperature.as_deref().unwrap_or("-"),
            source_label(w.temperature_source)
        ),
        format!(
            "Sunrise:     {} ({})",
            w.sunrise.as_deref().unwrap_or("-"),
            source_label(w.sun_source)
        ),
        format!("Sunset:      {}", w.sunset.as_deref().unwrap_or("-")),
    ]
    .join("\n")
}

pub async fn handle(dashboard: &Dashboard, global: &GlobalOpts) -> Result<(), CliError> {
    let weather = dashboard.home().load().await?;
    let out = output::render_single(&global.output, &*weather, detail, |w| {
        w.temperature.clone().unwrap_or_default()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
