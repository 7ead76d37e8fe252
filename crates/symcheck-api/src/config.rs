use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_ADDR_VAR: &str = "SYMCHECK_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "SYMCHECK_LOG_FORMAT";
pub const CATALOG_PATH_VAR: &str = "SYMCHECK_CATALOG_PATH";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines for local runs.
    #[default]
    Pretty,
    /// One JSON object per event, for log shippers.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    /// JSON catalog to serve instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key → value source. Blank values count as
    /// unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("{BIND_ADDR_VAR}={raw_addr:?} is not a socket address: {e}"))?;

        let log_format = match get(LOG_FORMAT_VAR).map(|v| v.trim().to_ascii_lowercase()) {
            None => LogFormat::default(),
            Some(v) if v == "pretty" => LogFormat::Pretty,
            Some(v) if v == "json" => LogFormat::Json,
            Some(other) => {
                return Err(eyre::eyre!(
                    "{LOG_FORMAT_VAR}={other:?} is not supported (expected \"pretty\" or \"json\")"
                ));
            }
        };

        let catalog_path = get(CATALOG_PATH_VAR).map(PathBuf::from);

        Ok(Self {
            bind_addr,
            log_format,
            catalog_path,
        })
    }
}
