//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
    // Columns
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
    // Diagonals
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some(player);
            }
        }
    }

    None
}
