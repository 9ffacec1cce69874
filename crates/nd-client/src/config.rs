use serde::Deserialize;
use std::io;
use std::path::PathBuf;
use std::process::Command;

use crate::http::DEFAULT_BASE_URL;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Endpoint base URL. Override for staging or self-hosted deployments.
    pub base_url: String,
    /// Command to run to get the API key (e.g., "pass show newsdesk/api").
    /// The command is run via `sh -c`.
    pub api_key_cmd: Option<String>,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_cmd: None,
            connect_timeout_secs: 10,
        }
    }
}

impl ApiConfig {
    /// Resolve the API key from api_key_cmd or the NEWSDESK_API_KEY env var.
    pub fn resolve_api_key(&self) -> io::Result<String> {
        // Try api_key_cmd first
        if let Some(cmd) = &self.api_key_cmd {
            let output = Command::new("sh").arg("-c").arg(cmd).output()?;

            if output.status.success() {
                let key = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !key.is_empty() {
                    return Ok(key);
                }
            }
        }

        // Fall back to env var
        std::env::var("NEWSDESK_API_KEY").map_err(|_| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "NEWSDESK_API_KEY not set and no api_key_cmd configured",
            )
        })
    }
}

impl Config {
    pub fn load_or_default() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("warning: failed to parse {}: {e}", path.display());
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }
}

fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("newsdesk").join("config.toml")
}
