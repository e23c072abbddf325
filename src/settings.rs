//! Server settings.
//!
//! Values are layered: built-in defaults, then an optional TOML file
//! (`propbook.toml` unless another path is given), then environment
//! variables such as `PROPBOOK__SERVER__PORT=8081`.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "propbook";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub settlement: SettlementSettings,
    pub party: PartySettings,
    pub log: LogSettings,
}
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SettlementSettings {
    /// Attempts per wager before it is reported as unsettled.
    pub max_attempts: u32,
    pub retry_backoff_ms: u64,
}
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PartySettings {
    pub join_code_attempts: u32,
}
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LogSettings {
    pub level: String,
}

impl Settings {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };
        Self::builder()?
            .add_source(file)
            .add_source(Environment::with_prefix("PROPBOOK").separator("__"))
            .build()
            .context("failed to load settings")?
            .try_deserialize()
            .context("invalid settings")
    }
    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8081)?
            .set_default("database.url", "sqlite::memory:")?
            .set_default("database.max_connections", 5)?
            .set_default("settlement.max_attempts", 3)?
            .set_default("settlement.retry_backoff_ms", 50)?
            .set_default("party.join_code_attempts", 16)?
            .set_default("log.level", "debug")?)
    }
}
impl SettlementSettings {
    pub fn backoff(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.retry_backoff_ms * attempt as u64)
    }
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".into(),
                port: 8081,
            },
            database: DatabaseSettings {
                url: "sqlite::memory:".into(),
                max_connections: 5,
            },
            settlement: SettlementSettings {
                max_attempts: 3,
                retry_backoff_ms: 50,
            },
            party: PartySettings {
                join_code_attempts: 16,
            },
            log: LogSettings {
                level: "debug".into(),
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use config::FileFormat;

    #[test]
    fn defaults_match() {
        let settings: Settings = Settings::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let settings: Settings = Settings::builder()
            .unwrap()
            .add_source(File::from_str(
                "[server]\nport = 9000\n[settlement]\nmax_attempts = 7\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.settlement.max_attempts, 7);
        assert_eq!(settings.database.url, "sqlite::memory:");
        assert_eq!(
            settings.settlement.backoff(2),
            Duration::from_millis(100)
        );
    }
}
