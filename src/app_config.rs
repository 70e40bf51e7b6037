use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    server: Server,
    store: Store,
    viewer: Viewer,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    pub fn load_from(name: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = Config::builder()
            .add_source(config::File::with_name(name).required(true))
            .add_source(config::File::with_name(&format!("{}_local", name)).required(false))
            .add_source(config::Environment::with_prefix("COLC").separator("__"))
            .build()?
            .try_deserialize()?;

        if !config.server.endpoint.starts_with('/') {
            return Err(ConfigError::Message(format!(
                "server.endpoint must start with '/', found '{}'",
                config.server.endpoint
            )));
        }

        Ok(config)
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    address: String,
    endpoint: String,
}

impl Server {
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Debug, Deserialize)]
pub struct Store {
    snapshot_path: String,
    #[serde(default)]
    pretty: bool,
}

impl Store {
    pub fn snapshot_path(&self) -> &Path {
        Path::new(&self.snapshot_path)
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

#[derive(Debug, Deserialize)]
pub struct Viewer {
    enabled: bool,
    url: String,
    #[serde(with = "humantime_serde")]
    poll_interval: Duration,
}

impl Viewer {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                server: Server {
                    address: "127.0.0.1:0".to_string(),
                    endpoint: "/data".to_string(),
                },
                store: Store {
                    snapshot_path: "data.json".to_string(),
                    pretty: true,
                },
                viewer: Viewer {
                    enabled: false,
                    url: "http://127.0.0.1:8080/data".to_string(),
                    poll_interval: Duration::from_secs(1),
                },
            },
        }
    }

    pub fn snapshot_path(mut self, path: &Path) -> Self {
        self.config.store.snapshot_path = path.to_string_lossy().into_owned();
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.store.pretty = pretty;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
