//! Interactive menu loop.
//!
//! Reads a numbered selection, runs the matching flow against the stores and
//! returns to the menu until the operator picks `0` or input ends. Store
//! failures are reported and the loop carries on; only console I/O errors end
//! the session.

use crate::error::{Result, SelectionError};
use crate::storage::{Database, PlayerStore, ScoreStore};
use crate::types::{PlayerId, ScoreId};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Menu selections, numbered as printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Exit,
    AddPlayer,
    AddScore,
    UpdatePlayer,
    UpdateScore,
    DeletePlayer,
    DeleteScore,
}

impl TryFrom<i64> for MenuOption {
    type Error = i64;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(MenuOption::Exit),
            1 => Ok(MenuOption::AddPlayer),
            2 => Ok(MenuOption::AddScore),
            3 => Ok(MenuOption::UpdatePlayer),
            4 => Ok(MenuOption::UpdateScore),
            5 => Ok(MenuOption::DeletePlayer),
            6 => Ok(MenuOption::DeleteScore),
            other => Err(other),
        }
    }
}

const MENU: &str = "Select an option:
1. Add a player
2. Add a score
3. Update player
4. Update score
5. Delete player
6. Delete score
0. Exit";

/// Console session over any line-oriented input and writable output
pub struct Console<'a, R, W> {
    players: PlayerStore<'a>,
    scores: ScoreStore<'a>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(db: &'a Database, input: R, output: W) -> Self {
        Self {
            players: PlayerStore::new(db),
            scores: ScoreStore::new(db),
            input,
            output,
        }
    }

    /// Run the menu loop until exit or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;

            let line = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!("input closed, leaving menu loop");
                    writeln!(self.output, "Exiting the application.")?;
                    return Ok(());
                }
                Err(SelectionError::InvalidText(e)) => {
                    debug!(error = %e, "rejected menu input");
                    writeln!(self.output, "Invalid input!")?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let selection = match line.parse::<i64>() {
                Ok(n) => n,
                Err(_) => {
                    writeln!(self.output, "Invalid input!")?;
                    continue;
                }
            };

            let option = match MenuOption::try_from(selection) {
                Ok(option) => option,
                Err(_) => {
                    writeln!(self.output, "Invalid option!")?;
                    continue;
                }
            };

            if option == MenuOption::Exit {
                writeln!(self.output, "Exiting the application.")?;
                return Ok(());
            }

            let outcome = self.dispatch(option);
            self.report(option, outcome)?;
        }
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<()> {
        match option {
            MenuOption::AddPlayer => self.add_player(),
            MenuOption::AddScore => self.add_score(),
            MenuOption::UpdatePlayer => self.update_player(),
            MenuOption::UpdateScore => self.update_score(),
            MenuOption::DeletePlayer => self.delete_player(),
            MenuOption::DeleteScore => self.delete_score(),
            MenuOption::Exit => Ok(()),
        }
    }

    /// Turn a failed flow into an operator message. Console I/O errors propagate.
    fn report(&mut self, option: MenuOption, outcome: Result<()>) -> Result<()> {
        match outcome {
            Ok(()) => Ok(()),
            Err(SelectionError::Io(e)) => Err(SelectionError::Io(e)),
            Err(SelectionError::InvalidNumber(e)) => {
                debug!(?option, error = %e, "rejected numeric input");
                writeln!(self.output, "Invalid input!")?;
                Ok(())
            }
            Err(SelectionError::InvalidText(e)) => {
                debug!(?option, error = %e, "rejected non UTF-8 input");
                writeln!(self.output, "Invalid input!")?;
                Ok(())
            }
            Err(e) => {
                warn!(?option, error = %e, "operation failed");
                writeln!(self.output, "Error: {e}")?;
                Ok(())
            }
        }
    }

    fn add_player(&mut self) -> Result<()> {
        writeln!(self.output, "Enter player details:")?;
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(());
        };
        let Some(domestic_team) = self.prompt("Domestic Team: ")? else {
            return Ok(());
        };

        let id = self.players.add_player(&name, &domestic_team)?;
        writeln!(self.output, "Player added successfully with ID {id}.")?;
        Ok(())
    }

    fn add_score(&mut self) -> Result<()> {
        writeln!(self.output, "Enter score details:")?;
        let Some(player_id) = self.prompt("Player ID: ")? else {
            return Ok(());
        };
        let player_id: PlayerId = player_id.parse()?;
        let Some(score) = self.prompt("Score: ")? else {
            return Ok(());
        };
        let score: i64 = score.parse()?;

        let id = self.scores.add_score(player_id, score)?;
        writeln!(self.output, "Score added successfully with ID {id}.")?;
        Ok(())
    }

    fn update_player(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter the player ID to update: ")? else {
            return Ok(());
        };
        let id: PlayerId = id.parse()?;

        let Some(mut player) = self.players.find_player(id)? else {
            writeln!(self.output, "Player not found!")?;
            return Ok(());
        };

        writeln!(self.output, "Current player details:")?;
        writeln!(self.output, "{player}")?;

        let Some(new_name) =
            self.prompt("Enter new name (leave blank to keep the current value): ")?
        else {
            return Ok(());
        };
        let Some(new_team) =
            self.prompt("Enter new domestic team (leave blank to keep the current value): ")?
        else {
            return Ok(());
        };

        if !new_name.is_empty() {
            player.name = new_name;
        }
        if !new_team.is_empty() {
            player.domestic_team = new_team;
        }

        self.players
            .update_player(player.id, &player.name, &player.domestic_team)?;
        writeln!(self.output, "Player updated successfully.")?;
        Ok(())
    }

    fn update_score(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter the score ID to update: ")? else {
            return Ok(());
        };
        let id: ScoreId = id.parse()?;

        let Some(mut score) = self.scores.find_score(id)? else {
            writeln!(self.output, "Score not found!")?;
            return Ok(());
        };

        writeln!(self.output, "Current score details:")?;
        writeln!(self.output, "{score}")?;

        let Some(new_score) =
            self.prompt("Enter new score (leave blank to keep the current value): ")?
        else {
            return Ok(());
        };
        if !new_score.is_empty() {
            score.score = new_score.parse()?;
        }

        self.scores.update_score(score.id, score.score)?;
        writeln!(self.output, "Score updated successfully.")?;
        Ok(())
    }

    fn delete_player(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter the player ID to delete: ")? else {
            return Ok(());
        };
        let id: PlayerId = id.parse()?;

        if self.players.find_player(id)?.is_none() {
            writeln!(self.output, "Player not found!")?;
            return Ok(());
        }

        let removed = self.players.delete_player(id)?;
        if removed == 0 {
            // Gone between the lookup and the delete
            warn!(player_id = %id, "delete matched no player");
            writeln!(self.output, "Player not found!")?;
        } else {
            writeln!(self.output, "Player deleted successfully.")?;
        }
        Ok(())
    }

    fn delete_score(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter the score ID to delete: ")? else {
            return Ok(());
        };
        let id: ScoreId = id.parse()?;

        if self.scores.find_score(id)?.is_none() {
            writeln!(self.output, "Score not found!")?;
            return Ok(());
        }

        self.scores.delete_score(id)?;
        writeln!(self.output, "Score deleted successfully.")?;
        Ok(())
    }

    /// Print `label` without a newline and read the answer. `None` on end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next input line, trimmed. `None` on end of input.
    ///
    /// The whole line is consumed even when it is not valid UTF-8.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8(buf)?;
        Ok(Some(line.trim().to_string()))
    }
}
