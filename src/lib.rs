//! Players Selection Manager
//!
//! A console CRUD manager for cricket players and their scores, stored in SQLite.
//!
//! ## Features
//!
//! - **Schema bootstrap**: database file and tables are created on first run
//! - **Player store**: add, look up, update and delete players; deleting a player
//!   removes its scores in the same transaction
//! - **Score store**: add, look up, update and delete scores
//! - **Menu console**: numbered menu with blank-keeps-current update prompts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use players_selection::{storage::*, DatabaseConfig};
//!
//! # fn example() -> players_selection::Result<()> {
//! let config = DatabaseConfig::load(None)?;
//! let db = Database::new(&config)?;
//! db.initialize()?;
//!
//! let players = PlayerStore::new(&db);
//! let id = players.add_player("Rao", "MI")?;
//! ScoreStore::new(&db).add_score(id, 42)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export PLAYERS_DB_URL=sqlite://players.db
//! export PLAYERS_DB_USERNAME=admin
//! export PLAYERS_DB_PASSWORD=secret
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod storage;
pub mod types;

pub use config::DatabaseConfig;
pub use error::{Result, SelectionError};
pub use types::{PlayerId, ScoreId};
