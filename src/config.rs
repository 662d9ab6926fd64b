//! Database connection settings.
//!
//! Settings come from an optional JSON file and are overridden per key by
//! environment variables:
//!
//! ```json
//! { "url": "sqlite://players.db", "username": "admin", "password": "secret" }
//! ```

use crate::error::{Result, SelectionError};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

pub const URL_ENV_VAR: &str = "PLAYERS_DB_URL";
pub const USERNAME_ENV_VAR: &str = "PLAYERS_DB_USERNAME";
pub const PASSWORD_ENV_VAR: &str = "PLAYERS_DB_PASSWORD";

/// Connection settings, built once at startup and passed by reference.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub username: String,
    pub password: String,
}

/// Shape of the config file; every key is optional so env vars can fill gaps.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    url: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl DatabaseConfig {
    /// Load settings from `path` (or the default config file) and the process environment.
    ///
    /// An explicit `path` must be readable. The default file may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let contents = match path {
            Some(p) => Some(std::fs::read_to_string(p)?),
            None => {
                let default = Self::default_path()?;
                match std::fs::read_to_string(&default) {
                    Ok(s) => Some(s),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
                    Err(e) => return Err(e.into()),
                }
            }
        };

        let env: HashMap<String, String> = std::env::vars().collect();
        Self::from_sources(contents.as_deref(), &env)
    }

    /// Merge file contents and environment; environment wins.
    pub fn from_sources(file: Option<&str>, env: &HashMap<String, String>) -> Result<Self> {
        let file: ConfigFile = match file {
            Some(s) => serde_json::from_str(s)?,
            None => ConfigFile::default(),
        };

        let pick = |key: &str, from_file: Option<String>| -> Result<String> {
            env.get(key)
                .cloned()
                .or(from_file)
                .ok_or_else(|| SelectionError::MissingSetting {
                    key: key.to_string(),
                })
        };

        Ok(Self {
            url: pick(URL_ENV_VAR, file.url)?,
            username: pick(USERNAME_ENV_VAR, file.username)?,
            password: pick(PASSWORD_ENV_VAR, file.password)?,
        })
    }

    /// `<config_dir>/players-selection/config.json`
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(SelectionError::NoConfigDir)?;
        Ok(dir.join("players-selection").join("config.json"))
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
