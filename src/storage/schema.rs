//! Database schema and connection management

use crate::config::DatabaseConfig;
use crate::error::{Result, SelectionError};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolved location of the database plus the credentials it was configured with.
///
/// Holds no open connection: every store operation calls [`Database::connect`]
/// and drops the connection when it returns.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    username: String,
}

impl Database {
    /// Resolve the configured URL. Does not touch the filesystem.
    pub fn new(config: &DatabaseConfig) -> Result<Self> {
        let path = Self::resolve_url(&config.url)?;
        Ok(Self {
            path,
            username: config.username.clone(),
        })
    }

    /// Accepts `sqlite://path`, `sqlite:path` or a bare path.
    fn resolve_url(url: &str) -> Result<PathBuf> {
        let raw = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url)
            .trim();

        // In-memory databases would vanish between per-operation connections
        if raw.is_empty() || raw == ":memory:" || raw.contains("mode=memory") {
            return Err(SelectionError::InvalidDatabaseUrl {
                url: url.to_string(),
            });
        }
        Ok(PathBuf::from(raw))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection with foreign keys enforced.
    pub fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        Ok(conn)
    }

    /// Create the database and both tables if they are missing. Safe to run on every startup.
    pub fn initialize(&self) -> Result<()> {
        info!(path = %self.path.display(), user = %self.username, "initializing database");
        self.ensure_database()?;
        self.ensure_tables()
    }

    fn ensure_database(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        // Opening creates the file when absent
        self.connect()?;
        Ok(())
    }

    fn ensure_tables(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS Player (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(10) NOT NULL CHECK (length(name) <= 10),
                domesticTeam VARCHAR(255) NOT NULL,
                average INTEGER NOT NULL DEFAULT 0
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS Score (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                score INTEGER NOT NULL,
                playerId INTEGER NOT NULL,
                FOREIGN KEY (playerId) REFERENCES Player(id)
            )",
            [],
        )?;

        // Speeds up the cascade in delete_player
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_score_player ON Score(playerId)",
            [],
        )?;

        debug!("schema ready");
        Ok(())
    }
}
