use std::path::{Path, PathBuf};

/// Default endpoint for the event channel. The server lives on the same host
/// as the client in the original deployment, so localhost is the baseline.
pub const DEFAULT_SERVER_URL: &str = "ws://127.0.0.1:3000/ws";

#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory holding the persisted message cache.
    pub data_dir: PathBuf,
    /// WebSocket endpoint of the event channel server.
    pub server_url: String,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P, server_url: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            server_url: server_url.into(),
        }
    }

    /// Platform data directory (`~/.local/share/courier` on Linux), falling
    /// back to a relative directory when the platform has none.
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("courier"))
            .unwrap_or_else(|| PathBuf::from("courier_data"))
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(Self::default_data_dir(), DEFAULT_SERVER_URL)
    }
}
