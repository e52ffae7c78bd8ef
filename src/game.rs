//! The game state machine.
//!
//! Drives the board through the move lifecycle: validate, apply,
//! evaluate, then rotate the turn or terminate. All bad input is a
//! typed rejection; the machine never enters an invalid state and
//! never constructs display text (that is the `messages` module's job).

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::player::{Mark, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Whether the game accepts further moves.
///
/// Monotonic: once `Completed`, never `InProgress` again short of an
/// explicit [`Game::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Moves are being accepted.
    InProgress,
    /// A win or a full board ended the game.
    Completed,
}

/// Terminal result of a completed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The named player completed a row, column, or diagonal.
    Win(Player),
    /// The board filled with no winning line.
    Draw,
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied and play continues with the next player.
    InProgress,
    /// The move completed a line; the mover won.
    Won(Player),
    /// The move filled the board with no winner.
    Draw,
}

/// A rejected move. State is untouched on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The coordinates fall outside the board.
    #[display("move ({row}, {col}) is out of board bounds")]
    OutOfBounds {
        /// Submitted row.
        row: usize,
        /// Submitted column.
        col: usize,
    },
    /// The target cell already holds a mark.
    #[display("position ({row}, {col}) is already occupied")]
    Occupied {
        /// Submitted row.
        row: usize,
        /// Submitted column.
        col: usize,
    },
    /// The game already reached a terminal status.
    #[display("the game is already over")]
    GameOver,
    /// Fewer than two players are registered.
    #[display("at least two players must register before moving")]
    WaitingForPlayers,
}

/// A single game session: players, turn pointer, move history, and the
/// board they play on.
///
/// Exclusively owned by one logical session; no internal
/// synchronization. Callers sharing a game across threads must
/// serialize access themselves (one mutex or actor per session).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    current_turn: usize,
    /// Applied `(x, y)` pairs, append-only, one per accepted move.
    history: Vec<(usize, usize)>,
    status: Status,
    /// Set exactly when `status` becomes `Completed`.
    outcome: Option<Outcome>,
}

impl Game {
    /// Creates a game with no players on an empty board.
    #[instrument]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(*config.width(), *config.height()),
            players: Vec::new(),
            current_turn: 0,
            history: Vec::new(),
            status: Status::InProgress,
            outcome: None,
        })
    }

    /// Registers a player and fully re-initializes the game.
    ///
    /// Caveat: adding a player mid-game discards all progress — board,
    /// turn pointer, history, and status are reset. Call only before or
    /// between games.
    #[instrument(skip(self, player), fields(player = %player.name(), mark = %player.mark()))]
    pub fn add_player(&mut self, player: Player) {
        info!("Registering player");
        self.players.push(player);
        self.reset();
    }

    /// Clears the board, turn pointer, history, status, and outcome,
    /// keeping the registered players.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = 0;
        self.history.clear();
        self.status = Status::InProgress;
        self.outcome = None;
    }

    /// Submits the current player's move at `(row, col)`.
    ///
    /// The first argument is the row (y axis), the second the column
    /// (x axis); this mapping is a fixed convention of the engine.
    ///
    /// On success the move is applied and the returned [`MoveOutcome`]
    /// says whether play continues or the game just ended. The turn
    /// pointer advances only on a non-terminal move: the winning or
    /// drawing player stays current for reporting.
    ///
    /// # Errors
    ///
    /// Rejects without mutating state when the game is over
    /// ([`MoveError::GameOver`]), fewer than two players registered
    /// ([`MoveError::WaitingForPlayers`]), the coordinates are outside
    /// the board ([`MoveError::OutOfBounds`]), or the cell is taken
    /// ([`MoveError::Occupied`]).
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        if self.status == Status::Completed {
            return Err(MoveError::GameOver);
        }
        if self.players.len() < 2 {
            return Err(MoveError::WaitingForPlayers);
        }

        // Fixed axis convention: x = col, y = row.
        let (x, y) = (col, row);
        if self.board.is_out_of_bounds(x, y) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if self.board.is_occupied(x, y) {
            return Err(MoveError::Occupied { row, col });
        }

        let mover = self.players[self.current_turn].clone();
        self.board.set(x, y, *mover.mark());
        self.history.push((x, y));
        debug!(x, y, mark = %mover.mark(), "Applied move");
        self.assert_consistent();

        if self.is_won_by(*mover.mark()) {
            self.status = Status::Completed;
            self.outcome = Some(Outcome::Win(mover.clone()));
            info!(winner = %mover.name(), "Game won");
            return Ok(MoveOutcome::Won(mover));
        }
        if self.board.is_full(self.history.len()) {
            self.status = Status::Completed;
            self.outcome = Some(Outcome::Draw);
            info!("Game drawn");
            return Ok(MoveOutcome::Draw);
        }

        self.current_turn = (self.current_turn + 1) % self.players.len();
        Ok(MoveOutcome::InProgress)
    }

    fn is_won_by(&self, mark: Mark) -> bool {
        self.board.is_row_win(mark)
            || self.board.is_column_win(mark)
            || self.board.is_diagonal_win(mark)
    }

    /// Debug-build consistency check after each applied move.
    fn assert_consistent(&self) {
        debug_assert_eq!(
            self.history.len(),
            self.board.cells().iter().filter(|c| c.is_some()).count(),
            "history length must match occupied cell count"
        );
        debug_assert!(
            self.history
                .iter()
                .all(|&(x, y)| !self.board.is_out_of_bounds(x, y) && self.board.is_occupied(x, y)),
            "history entries must point at occupied cells"
        );
    }

    /// The board being played on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Registered players, in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index into the player list of the player to move next.
    pub fn current_turn(&self) -> usize {
        self.current_turn
    }

    /// The player to move next, if any are registered.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_turn)
    }

    /// Applied `(x, y)` pairs in order.
    pub fn history(&self) -> &[(usize, usize)] {
        &self.history
    }

    /// Whether the game accepts further moves.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Terminal result, present iff the game is completed.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }
}
