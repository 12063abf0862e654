//! The mutable game engine.
//!
//! [`Game`] owns the board, the turn marker, and the game status, and is
//! mutated in place by each accepted placement. All rejection paths leave
//! the state untouched.

use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// A coordinate lies outside the 3x3 grid.
    #[display("position ({}, {}) is outside the board", _0, _1)]
    OutOfBounds(i32, i32),

    /// The square at the position is already occupied.
    #[display("position ({}, {}) is already occupied", _0.row(), _0.col())]
    AlreadyTaken(Position),

    /// The game is already over.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for PlaceError {}

/// Complete game state: board, player to move, and status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if the game has been won.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// On success the mark is written, the board is evaluated for a win
    /// and then for a draw, the turn passes to the other player, and the
    /// resulting status is returned.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::GameOver`] if the game has already ended.
    /// - [`PlaceError::OutOfBounds`] if either coordinate is outside `[0, 2]`.
    /// - [`PlaceError::AlreadyTaken`] if the square is occupied.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn place(&mut self, row: i32, col: i32) -> Result<GameStatus, PlaceError> {
        if self.status != GameStatus::InProgress {
            return Err(PlaceError::GameOver);
        }

        let pos = Position::new(row, col).ok_or(PlaceError::OutOfBounds(row, col))?;

        if !self.board.is_empty(pos) {
            return Err(PlaceError::AlreadyTaken(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));

        if let Some(winner) = rules::check_winner(&self.board) {
            debug!(winner = %winner, "winning line completed");
            self.status = GameStatus::Won(winner);
        } else if rules::is_full(&self.board) {
            debug!("board full with no winner");
            self.status = GameStatus::Draw;
        }

        self.to_move = self.to_move.opponent();

        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
