use std::env;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Runtime environment, either `Dev` for local development, or `Prod` for release
#[derive(Debug)]
pub enum Runtime {
    Dev,
    Prod,
}

impl Runtime {
    pub fn as_str(&self) -> &str {
        match self {
            Runtime::Dev => "dev",
            Runtime::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Runtime {
    type Error = anyhow::Error;

    fn try_from(s: String) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => anyhow::bail!("{} is not a valid runtime environment", other),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: ApplicationSettings,
    pub manager: ManagerSettings,
    pub persistence: PersistenceSettings,
}

impl Settings {
    /// Loads `settings/base` and `settings/<APP_ENV>`, then `APP_*` overrides
    /// such as `APP_APP__PORT=8080` or `APP_MANAGER__PASSCODE=...`.
    pub fn load() -> anyhow::Result<Self> {
        let path = env::current_dir()?.join("settings");

        let runtime: Runtime = env::var("APP_ENV")
            .unwrap_or_else(|_| "dev".into())
            .try_into()?;

        Self::load_from(runtime, &path)
    }

    pub fn load_from(runtime: Runtime, base_path: &Path) -> anyhow::Result<Self> {
        Config::builder()
            .add_source(File::from(base_path.join("base")).required(true))
            .add_source(File::from(base_path.join(runtime.as_str())).required(false))
            .add_source(
                Environment::with_prefix("app")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .context("Failed to load/deserialize settings")
    }
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub max_workers: usize,
    pub load_delay_ms: u64,
    pub log_level: String,
    pub seed_path: String,
}

impl ApplicationSettings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

#[derive(Debug, Deserialize)]
pub struct ManagerSettings {
    #[serde(default)]
    pub passcode: Option<String>,
    pub session_ttl_hours: i64,
}

impl ManagerSettings {
    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl_hours * 60 * 60
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceKind {
    Seed,
    Sqlite,
}

#[derive(Debug, Deserialize)]
pub struct PersistenceSettings {
    pub kind: PersistenceKind,
    pub sqlite_path: String,
}
