//! Data models for the storage layer

use crate::types::{PlayerId, ScoreId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A player row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub domestic_team: String,
    /// Defaults to 0 on insert; no operation changes it.
    pub average: i64,
}

/// A score row, owned by a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub id: ScoreId,
    pub player_id: PlayerId,
    pub score: i64,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player [id={}, name={}, domesticTeam={}, average={}]",
            self.id, self.name, self.domestic_team, self.average
        )
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score [id={}, playerId={}, score={}]",
            self.id, self.player_id, self.score
        )
    }
}
