//! Display strings for game outcomes.
//!
//! The state machine returns structured values; this module is the only
//! place they become user-facing text.

use crate::game::{Game, MoveError, Outcome, Status};

/// Label for a completed game.
pub const GAME_OVER: &str = "Game Over!";
/// Label for a game still accepting moves.
pub const GAME_IN_PROGRESS: &str = "Game In Progress!";

/// Text shown when a move is rejected.
pub fn illegal_move(error: &MoveError) -> String {
    match error {
        MoveError::OutOfBounds { .. } => {
            "Illegal move!\nposition out of board bounds.".to_string()
        }
        MoveError::Occupied { .. } => "Illegal move!\nposition already occupied.".to_string(),
        MoveError::GameOver => GAME_OVER.to_string(),
        MoveError::WaitingForPlayers => {
            "Illegal move!\nwaiting for players to register.".to_string()
        }
    }
}

/// Announcement for a terminal outcome.
pub fn announce(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Win(player) => format!("\n{} has won the Game!", player.name()),
        Outcome::Draw => "\nIt's a draw!".to_string(),
    }
}

/// One-line status label.
pub fn status_line(status: Status) -> &'static str {
    match status {
        Status::InProgress => GAME_IN_PROGRESS,
        Status::Completed => GAME_OVER,
    }
}

/// Post-game summary: status, outcome, and the applied move history.
pub fn summary(game: &Game) -> String {
    let outcome = game.outcome().map(announce).unwrap_or_default();
    let history = serde_json::to_string(game.history()).unwrap_or_else(|_| "[]".to_string());
    format!(
        "{} {}\nGame history: {}",
        status_line(game.status()),
        outcome,
        history
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::player::{Mark, Player};

    #[test]
    fn test_rejection_text() {
        assert_eq!(
            illegal_move(&MoveError::Occupied { row: 0, col: 0 }),
            "Illegal move!\nposition already occupied."
        );
        assert_eq!(
            illegal_move(&MoveError::OutOfBounds { row: 9, col: 9 }),
            "Illegal move!\nposition out of board bounds."
        );
        assert_eq!(illegal_move(&MoveError::GameOver), GAME_OVER);
    }

    #[test]
    fn test_winner_announcement_names_the_player() {
        let outcome = Outcome::Win(Player::new("Wonder Woman".to_string(), Mark('X')));
        assert_eq!(announce(&outcome), "\nWonder Woman has won the Game!");
        assert_eq!(announce(&Outcome::Draw), "\nIt's a draw!");
    }

    #[test]
    fn test_summary_of_fresh_game() {
        let game = Game::new(GameConfig::default()).unwrap();
        let text = summary(&game);
        assert!(text.starts_with(GAME_IN_PROGRESS));
        assert!(text.ends_with("Game history: []"));
    }
}
