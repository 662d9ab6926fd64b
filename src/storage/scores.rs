//! Score persistence

use super::{models::Score, schema::Database};
use crate::error::{Result, SelectionError};
use crate::types::{PlayerId, ScoreId};
use rusqlite::{params, Row};
use tracing::{info, warn};

const INSERT_SCORE: &str = "INSERT INTO Score (playerId, score) VALUES (?, ?)";
const SELECT_SCORE: &str = "SELECT id, playerId, score FROM Score WHERE id = ?";
const SELECT_PLAYER_SCORES: &str =
    "SELECT id, playerId, score FROM Score WHERE playerId = ? ORDER BY id";
const UPDATE_SCORE: &str = "UPDATE Score SET score = ? WHERE id = ?";
const DELETE_SCORE: &str = "DELETE FROM Score WHERE id = ?";

/// Store for the `Score` table
pub struct ScoreStore<'a> {
    db: &'a Database,
}

impl<'a> ScoreStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a score for `player_id` and return the generated id.
    ///
    /// Fails with a foreign-key error if the player does not exist.
    pub fn add_score(&self, player_id: PlayerId, score: i64) -> Result<ScoreId> {
        let conn = self.db.connect()?;
        let rows = conn.execute(INSERT_SCORE, params![player_id, score])?;
        if rows == 0 {
            return Err(SelectionError::no_rows("Adding score"));
        }

        let id = conn.last_insert_rowid();
        if id <= 0 {
            return Err(SelectionError::MissingGeneratedId {
                entity: "score".to_string(),
            });
        }

        info!(score_id = id, player_id = %player_id, "score added");
        Ok(ScoreId::new(id))
    }

    pub fn find_score(&self, id: ScoreId) -> Result<Option<Score>> {
        let conn = self.db.connect()?;
        let result = conn.query_row(SELECT_SCORE, params![id], Self::row_to_score);

        match result {
            Ok(score) => Ok(Some(score)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All scores recorded for a player, oldest first
    pub fn scores_for_player(&self, player_id: PlayerId) -> Result<Vec<Score>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(SELECT_PLAYER_SCORES)?;
        let rows = stmt.query_map(params![player_id], Self::row_to_score)?;

        let mut scores = Vec::new();
        for score in rows {
            scores.push(score?);
        }
        Ok(scores)
    }

    pub fn update_score(&self, id: ScoreId, score: i64) -> Result<()> {
        let conn = self.db.connect()?;
        let rows = conn.execute(UPDATE_SCORE, params![score, id])?;
        if rows == 0 {
            return Err(SelectionError::no_rows("Updating score"));
        }

        info!(score_id = %id, "score updated");
        Ok(())
    }

    /// Delete by id. A missing id is not an error; the affected count is returned.
    pub fn delete_score(&self, id: ScoreId) -> Result<usize> {
        let conn = self.db.connect()?;
        let rows = conn.execute(DELETE_SCORE, params![id])?;

        if rows == 0 {
            warn!(score_id = %id, "delete matched no score");
        } else {
            info!(score_id = %id, "score deleted");
        }
        Ok(rows)
    }

    fn row_to_score(row: &Row) -> rusqlite::Result<Score> {
        Ok(Score {
            id: row.get(0)?,
            player_id: row.get(1)?,
            score: row.get(2)?,
        })
    }
}
