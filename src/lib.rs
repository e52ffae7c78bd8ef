//! Turn-based grid game engine: tic-tac-toe generalized to WxH boards.
//!
//! # Architecture
//!
//! - **Board**: grid storage and line-scan win queries, no knowledge of
//!   players or turns
//! - **Game**: the state machine — validates each move, applies it,
//!   evaluates win/draw, and rotates the turn
//! - **Collaborators**: [`messages`] and [`render`] turn structured
//!   outcomes and board snapshots into text; the core never formats
//!
//! # Example
//!
//! ```
//! use gridgame::{Game, GameConfig, Mark, MoveOutcome, Player};
//!
//! # fn main() -> Result<(), gridgame::ConfigError> {
//! let mut game = Game::new(GameConfig::default())?;
//! game.add_player(Player::new("Wonder Woman".to_string(), Mark('X')));
//! game.add_player(Player::new("Wonder Man".to_string(), Mark('O')));
//!
//! let outcome = game.submit_move(0, 0);
//! assert_eq!(outcome, Ok(MoveOutcome::InProgress));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod game;
mod player;

pub mod messages;
pub mod render;

pub use board::{Board, Cell};
pub use config::{ConfigError, DEFAULT_HEIGHT, DEFAULT_WIDTH, GameConfig, PartialConfig};
pub use game::{Game, MoveError, MoveOutcome, Outcome, Status};
pub use player::{Mark, Player};
