use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::GatewayError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: String,
    /// Built frontend served for every non-API path
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UpstreamConfig {
    /// Base URL of the catalog API, without the `/api` suffix
    pub api_url: String,
    /// Applies to every proxied call except the import event stream
    pub timeout_secs: u64,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
bind = "0.0.0.0:3000"
static_dir = "dist"

[upstream]
api_url = "http://backend:8000"
timeout_secs = 60
"#;

pub const ENV_UPSTREAM: &str = "API_URL_INTERNAL";
pub const ENV_BIND: &str = "GATEWAY_BIND";

impl Config {
    pub fn bind_addr(&self) -> Result<SocketAddr, GatewayError> {
        self.server
            .bind
            .parse()
            .map_err(|e| GatewayError::Config(format!("invalid bind address '{}': {}", self.server.bind, e)))
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream.timeout_secs)
    }

    /// Blank variables are ignored
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(url) = non_blank(ENV_UPSTREAM) {
            self.upstream.api_url = url.trim().to_string();
        }
        if let Some(bind) = non_blank(ENV_BIND) {
            self.server.bind = bind.trim().to_string();
        }
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Environment overrides are applied last.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match find_config_file() {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str::<Config>(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            toml::from_str::<Config>(DEFAULT_CONFIG)?
        }
    };
    config.apply_env_overrides(|name| std::env::var(name).ok());
    Ok(config)
}

fn find_config_file() -> Option<std::path::PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}
