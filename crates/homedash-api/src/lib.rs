// homedash-api: Async Rust client for the SmartHome REST API
//
// One `ApiClient` per backend, with every resource service implemented as
// inherent methods in `resources/`. The public weather fallback lives in
// `weather` and uses its own client since it talks to third-party hosts.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;
pub mod weather;

mod resources;

pub use client::ApiClient;
pub use error::Error;
pub use transport::TransportConfig;
pub use weather::{PublicWeatherClient, SunTimes};
