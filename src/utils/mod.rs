pub mod api_key;
pub mod apodwall_toml;
pub mod config;
pub mod logger;

pub use api_key::get_api_key;
pub use config::*;
pub use logger::setup_logging;
