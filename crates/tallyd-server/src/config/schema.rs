use serde::Deserialize;
use tallyd_core::error::{MetricsError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub server: ListenSection,

    #[serde(default)]
    pub store: StoreSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            server: ListenSection::default(),
            store: StoreSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.server.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenSection {
    /// Empty means every interface.
    #[serde(default)]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ListenSection {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_port(),
        }
    }
}

impl ListenSection {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(MetricsError::Config("server.port must not be 0".into()));
        }
        if self.host.chars().any(char::is_whitespace) {
            return Err(MetricsError::Config(
                "server.host must not contain whitespace".into(),
            ));
        }
        Ok(())
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        let host = self.host.as_str();
        if host.is_empty() {
            format!("0.0.0.0:{}", self.port)
        } else if host.contains(':') && !host.starts_with('[') {
            // bare IPv6 literal
            format!("[{}]:{}", host, self.port)
        } else {
            format!("{}:{}", host, self.port)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    /// Samples older than this many whole minutes are evicted on read.
    #[serde(default = "default_data_timeout_minutes")]
    pub data_timeout_minutes: u64,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            data_timeout_minutes: default_data_timeout_minutes(),
        }
    }
}

fn default_version() -> u32 {
    1
}
fn default_port() -> u16 {
    8080
}
fn default_data_timeout_minutes() -> u64 {
    60
}
