//! Player identity types.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// The token a player places on a cell.
///
/// A plain character rather than a closed enum: the player-list model
/// supports any number of players, each with their own distinct mark.
/// Uniqueness within a game is the caller's responsibility.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{_0}")]
pub struct Mark(pub char);

/// A participant in a game.
#[derive(Debug, Clone, PartialEq, Eq, new, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name (non-empty).
    name: String,
    /// The mark this player places. Unique per player within a game.
    mark: Mark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_displays_as_its_char() {
        assert_eq!(Mark('X').to_string(), "X");
    }

    #[test]
    fn test_player_accessors() {
        let player = Player::new("Wonder Woman".to_string(), Mark('X'));
        assert_eq!(player.name(), "Wonder Woman");
        assert_eq!(*player.mark(), Mark('X'));
    }
}
