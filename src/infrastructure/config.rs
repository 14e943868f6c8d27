use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub api: ApiSettings,
    pub polling: PollingSettings,
    pub identity: IdentitySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollingSettings {
    pub interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IdentitySettings {
    pub path: PathBuf,
}

impl ApiSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

impl PollingSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

/// Load `config/thermasense.toml` (optional) with `THERMASENSE__*` overrides
pub fn load_client_config() -> anyhow::Result<ClientConfig> {
    load_client_config_from("config/thermasense")
}

pub fn load_client_config_from(file: &str) -> anyhow::Result<ClientConfig> {
    let settings = config::Config::builder()
        .set_default("api.base_url", "http://127.0.0.1:8000")?
        .set_default("api.request_timeout_secs", 10)?
        .set_default("polling.interval_secs", 5)?
        .set_default("identity.path", "data/identity.toml")?
        .add_source(config::File::with_name(file).required(false))
        .add_source(
            config::Environment::with_prefix("THERMASENSE")
                .try_parsing(true)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
