use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Snapshot file, rewritten after every change when set
    pub data_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `SUBWAY_DATA_FILE` from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let data_file = lookup("SUBWAY_DATA_FILE")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Self { host, port, data_file }
    }
}
