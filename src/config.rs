//! Runtime configuration from environment variables
//!
//! - `TAGGER_EXPORT_DIR`: directory for saved exports (default `tag_outputs`,
//!   relative paths resolve against the current directory)
//! - `TAGGER_HTTP_ADDR`: serve the REST API on this address instead of MCP stdio
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const EXPORT_DIR_VAR: &str = "TAGGER_EXPORT_DIR";
pub const HTTP_ADDR_VAR: &str = "TAGGER_HTTP_ADDR";
pub const DEFAULT_EXPORT_DIR: &str = "tag_outputs";

/// Configuration for the tagger server
#[derive(Debug, Clone)]
pub struct TaggerConfig {
    /// Where saved exports are written
    pub export_dir: PathBuf,
    /// REST listen address; `None` means MCP over stdio
    pub http_addr: Option<SocketAddr>,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            http_addr: None,
        }
    }
}

impl TaggerConfig {
    /// Config with a custom export directory
    pub fn new<P: AsRef<Path>>(export_dir: P) -> Self {
        Self {
            export_dir: export_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(env::var(EXPORT_DIR_VAR).ok(), env::var(HTTP_ADDR_VAR).ok())
    }

    fn from_vars(export_dir: Option<String>, http_addr: Option<String>) -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let export_dir = match export_dir.filter(|d| !d.trim().is_empty()) {
            Some(dir) if Path::new(&dir).is_absolute() => PathBuf::from(dir),
            Some(dir) => current_dir.join(dir),
            None => current_dir.join(DEFAULT_EXPORT_DIR),
        };

        let http_addr = http_addr.and_then(|raw| match raw.trim().parse::<SocketAddr>() {
            Ok(addr) => Some(addr),
            Err(e) => {
                tracing::warn!(value = %raw, error = %e, "ignoring invalid {}", HTTP_ADDR_VAR);
                None
            }
        });

        Self {
            export_dir,
            http_addr,
        }
    }

    /// Export directory
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }
}
