//! Player persistence

use super::{models::Player, schema::Database};
use crate::error::{Result, SelectionError};
use crate::types::PlayerId;
use rusqlite::{params, Row};
use tracing::{debug, info};

const INSERT_PLAYER: &str = "INSERT INTO Player (name, domesticTeam, average) VALUES (?, ?, ?)";
const SELECT_PLAYER: &str = "SELECT id, name, domesticTeam, average FROM Player WHERE id = ?";
const UPDATE_PLAYER: &str = "UPDATE Player SET name = ?, domesticTeam = ? WHERE id = ?";
const DELETE_PLAYER_SCORES: &str = "DELETE FROM Score WHERE playerId = ?";
const DELETE_PLAYER: &str = "DELETE FROM Player WHERE id = ?";

/// Store for the `Player` table
pub struct PlayerStore<'a> {
    db: &'a Database,
}

impl<'a> PlayerStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a player with average 0 and return the generated id.
    pub fn add_player(&self, name: &str, domestic_team: &str) -> Result<PlayerId> {
        let conn = self.db.connect()?;
        let rows = conn.execute(INSERT_PLAYER, params![name, domestic_team, 0])?;
        if rows == 0 {
            return Err(SelectionError::no_rows("Adding player"));
        }

        let id = conn.last_insert_rowid();
        if id <= 0 {
            return Err(SelectionError::MissingGeneratedId {
                entity: "player".to_string(),
            });
        }

        info!(player_id = id, "player added");
        Ok(PlayerId::new(id))
    }

    /// Fetch a player by id
    pub fn find_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let conn = self.db.connect()?;
        let result = conn.query_row(SELECT_PLAYER, params![id], Self::row_to_player);

        match result {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite name and domestic team. A missing id is an error, not a no-op.
    pub fn update_player(&self, id: PlayerId, name: &str, domestic_team: &str) -> Result<()> {
        let conn = self.db.connect()?;
        let rows = conn.execute(UPDATE_PLAYER, params![name, domestic_team, id])?;
        if rows == 0 {
            return Err(SelectionError::no_rows("Updating player"));
        }

        info!(player_id = %id, "player updated");
        Ok(())
    }

    /// Delete the player's scores, then the player, in one transaction.
    ///
    /// Returns the number of player rows removed (0 or 1).
    pub fn delete_player(&self, id: PlayerId) -> Result<usize> {
        let mut conn = self.db.connect()?;
        let tx = conn.transaction()?;

        let scores = tx.execute(DELETE_PLAYER_SCORES, params![id])?;
        let players = tx.execute(DELETE_PLAYER, params![id])?;
        tx.commit()?;

        debug!(player_id = %id, scores, "cascaded score delete");
        info!(player_id = %id, rows = players, "player deleted");
        Ok(players)
    }

    fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
        Ok(Player {
            id: row.get(0)?,
            name: row.get(1)?,
            domestic_team: row.get(2)?,
            average: row.get(3)?,
        })
    }
}
