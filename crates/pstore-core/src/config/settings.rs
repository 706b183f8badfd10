//! Client configuration loaded from a TOML file.
//!
//! Every field has a default, so the client works without a config file.
//! The default configuration matches the values shown in `config/default.toml`.
//! The API base URL is normally supplied through the environment; see
//! [`Config::apply_env`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Overrides fields from `PSTORE_*` environment variables.
    pub fn apply_env(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::apply_env`] with an injectable variable lookup.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("PSTORE_API_URL") {
            self.api.base_url = url;
        }
        if let Some(path) = lookup("PSTORE_TOKEN_PATH") {
            self.session.token_path = Some(PathBuf::from(path));
        }
        if let Some(header) = lookup("PSTORE_TOKEN_HEADER") {
            self.api.token_header = header;
        }
        self
    }
}

/// Remote storage API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Name of the request header that carries the credential.
    #[serde(default = "default_token_header")]
    pub token_header: String,
    /// Server message that marks a credential as invalid or expired.
    #[serde(default = "default_invalid_token_message")]
    pub invalid_token_message: String,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            token_header: default_token_header(),
            invalid_token_message: default_invalid_token_message(),
        }
    }
}

/// Credential persistence and login flow settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Token file location. `None` uses [`default_token_path`].
    #[serde(default)]
    pub token_path: Option<PathBuf>,
    #[serde(default = "default_logout_delay_secs")]
    pub logout_delay_secs: u64,
    #[serde(default = "default_login_url")]
    pub login_url: String,
}

impl SessionConfig {
    pub fn logout_delay(&self) -> Duration {
        Duration::from_secs(self.logout_delay_secs)
    }

    /// The configured token path, falling back to the per-user default.
    pub fn resolve_token_path(&self) -> Option<PathBuf> {
        self.token_path.clone().or_else(default_token_path)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_path: None,
            logout_delay_secs: default_logout_delay_secs(),
            login_url: default_login_url(),
        }
    }
}

/// `$XDG_CONFIG_HOME/pstore/token`, else `$HOME/.config/pstore/token`.
pub fn default_token_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
        .map(|dir| dir.join("pstore").join("token"))
}

fn default_base_url() -> String {
    "https://be-personalstorage-production.up.railway.app".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_token_header() -> String {
    "x-auth-token".to_string()
}

fn default_invalid_token_message() -> String {
    "Invalid token".to_string()
}

fn default_logout_delay_secs() -> u64 {
    3
}

fn default_login_url() -> String {
    "https://be-personalstorage-production.up.railway.app/login".to_string()
}
