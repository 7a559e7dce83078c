//! Backend origin for the HTTP gateway.
//!
//! Resolved once from the embedded TOML defaults plus the build-time
//! overrides `INVENTORY_API_TARGET` and `INVENTORY_API_URL`.

use contracts::shared::config::{load_config, ApiConfig};
use once_cell::sync::OnceCell;

static API_CONFIG: OnceCell<ApiConfig> = OnceCell::new();

pub fn api_config() -> &'static ApiConfig {
    API_CONFIG.get_or_init(|| {
        match load_config(
            option_env!("INVENTORY_API_TARGET"),
            option_env!("INVENTORY_API_URL"),
        ) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid API configuration, using defaults: {:#}", e);
                ApiConfig::default()
            }
        }
    })
}

/// Origin like "http://localhost:3000" (no trailing slash)
pub fn api_base() -> String {
    api_config().base_url.clone()
}
