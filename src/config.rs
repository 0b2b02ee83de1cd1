use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub stream: StreamConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreamConfig {
    /// `host[:port]` of the device stream server.
    pub host: String,
    #[serde(default = "default_path")]
    pub path: String,
    /// Opaque key issued by whatever serves the dashboard; passed through
    /// as the `key` query parameter, never generated here.
    pub request_key: String,
    #[serde(default)]
    pub tls: bool,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_path() -> String {
    "/websocket".into()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

fn default_bar_width() -> usize {
    40
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
        }
    }
}

impl StreamConfig {
    /// `ws[s]://<host><path>?key=<request_key>`
    pub fn ws_url(&self) -> String {
        let scheme = if self.tls { "wss" } else { "ws" };
        format!(
            "{}://{}{}?key={}",
            scheme, self.host, self.path, self.request_key
        )
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.stream.host.is_empty(), "stream.host must be non-empty");
        anyhow::ensure!(
            self.stream.path.starts_with('/'),
            "stream.path must begin with '/', got {:?}",
            self.stream.path
        );
        anyhow::ensure!(
            !self.stream.request_key.is_empty(),
            "stream.request_key must be non-empty"
        );
        anyhow::ensure!(
            self.stream.connect_timeout_secs > 0,
            "stream.connect_timeout_secs must be > 0, got {}",
            self.stream.connect_timeout_secs
        );
        anyhow::ensure!(
            self.display.bar_width > 0,
            "display.bar_width must be > 0, got {}",
            self.display.bar_width
        );
        Ok(())
    }
}
