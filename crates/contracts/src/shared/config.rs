//! Backend origin selection.
//!
//! Two origins are recognised (local development and the deployed
//! backend); exactly one is active. The default is embedded; the front end
//! may override the target or the whole origin at build time.

use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiTarget {
    Local,
    Production,
}

impl FromStr for ApiTarget {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "dev" | "development" => Ok(ApiTarget::Local),
            "production" | "prod" => Ok(ApiTarget::Production),
            other => Err(anyhow!("unknown API target: {:?}", other)),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiSection,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSection {
    pub target: ApiTarget,
    pub origins: Origins,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Origins {
    pub local: String,
    pub production: String,
}

/// Resolved origin the HTTP gateway talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub target: ApiTarget,
    pub base_url: String,
}

/// Local development backend; the fallback when overrides are invalid
impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            target: ApiTarget::Local,
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl ApiConfig {
    /// Joins an absolute API path (starting with `/api/`) onto the origin
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
target = "local"

[api.origins]
local = "http://localhost:3000"
production = "https://retail-daddy-backend.onrender.com"
"#;

/// Parse the embedded defaults and apply overrides.
///
/// `url_override` wins over `target_override`; both are usually fed from
/// `option_env!` by the front end.
pub fn load_config(
    target_override: Option<&str>,
    url_override: Option<&str>,
) -> anyhow::Result<ApiConfig> {
    let config: Config =
        toml::from_str(DEFAULT_CONFIG).context("embedded API config is invalid")?;

    let target = match target_override.filter(|s| !s.trim().is_empty()) {
        Some(raw) => raw.parse::<ApiTarget>()?,
        None => config.api.target,
    };

    let base_url = match url_override.map(str::trim).filter(|s| !s.is_empty()) {
        Some(url) => {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow!("API url must be http(s): {:?}", url));
            }
            log::info!("Using API origin override: {}", url);
            url.to_string()
        }
        None => match target {
            ApiTarget::Local => config.api.origins.local.clone(),
            ApiTarget::Production => config.api.origins.production.clone(),
        },
    };

    Ok(ApiConfig {
        target,
        base_url: base_url.trim_end_matches('/').to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.target, ApiTarget::Local);
    }

    #[test]
    fn test_default_is_local() {
        let cfg = load_config(None, None).unwrap();
        assert_eq!(cfg.target, ApiTarget::Local);
        assert_eq!(cfg.base_url, "http://localhost:3000");
        assert_eq!(
            cfg.url("/api/v1/invoices/getall"),
            "http://localhost:3000/api/v1/invoices/getall"
        );
    }

    #[test]
    fn test_fallback_matches_embedded_default() {
        assert_eq!(load_config(None, None).unwrap(), ApiConfig::default());
    }

    #[test]
    fn test_production_target() {
        let cfg = load_config(Some("production"), None).unwrap();
        assert_eq!(cfg.base_url, "https://retail-daddy-backend.onrender.com");
        assert_eq!(load_config(Some(" PROD "), Some("")).unwrap().target, ApiTarget::Production);
    }

    #[test]
    fn test_url_override_wins() {
        let cfg = load_config(Some("production"), Some("http://10.0.0.5:8080/")).unwrap();
        assert_eq!(cfg.base_url, "http://10.0.0.5:8080");
    }

    #[test]
    fn test_invalid_overrides() {
        assert!(load_config(Some("staging"), None).is_err());
        assert!(load_config(None, Some("localhost:3000")).is_err());
    }
}
