//! Two-player tic-tac-toe played through a text console.
//!
//! # Architecture
//!
//! - **Game engine** ([`game`]): the 3x3 board state machine with win and
//!   draw detection. Moves are validated and applied through [`Game::place`];
//!   failures come back as [`PlaceError`] values, never panics.
//! - **Command interpreter** ([`console`]): a prompt loop that reads
//!   whitespace-delimited commands from an input stream and renders board
//!   state to an output stream.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! assert_eq!(game.to_move(), Player::X);
//!
//! let status = game.place(1, 1)?;
//! assert_eq!(status, GameStatus::InProgress);
//! assert_eq!(game.to_move(), Player::O);
//! # Ok::<(), tictactoe::PlaceError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod console;
pub mod game;

pub use console::Console;
pub use game::{Board, Game, GameStatus, PlaceError, Player, Position, Square};
