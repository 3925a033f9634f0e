use anyhow::Result;
use figment::{providers::{Env, Format, Serialized, Toml}, Figment};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8050,
            request_timeout_secs: 30,
            enable_cors: false,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            filter: "info,hyper=warn,tower_http=info".into(),
        }
    }
}

/// Where the model's variable outputs live and how their files are named.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    pub path: PathBuf,
    /// Leading character of a variable output file name (`vInvCost.csv`).
    pub variable_prefix: char,
    /// Leading character of a year label (`y2030`).
    pub year_label: char,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/tmp/output"),
            variable_prefix: 'v',
            year_label: 'y',
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    pub title: String,
    pub year_step: i32,
    pub emissions_limit: EmissionsLimitConfig,
    pub scenarios: Vec<String>,
    pub default_scenario: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "openMASTER".into(),
            year_step: 5,
            emissions_limit: EmissionsLimitConfig::default(),
            scenarios: vec!["SC01".into(), "SC02".into()],
            default_scenario: "SC01".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct EmissionsLimitConfig {
    pub default: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for EmissionsLimitConfig {
    fn default() -> Self {
        Self { default: 2000.0, min: 0.0, max: 10000.0, step: 100.0 }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("DASH__").split("__"));
        Ok(figment.extract()?)
    }
}
