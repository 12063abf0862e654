//! Integration tests for the game engine.

use tictactoe::{Game, GameStatus, PlaceError, Player, Position, Square};

/// Replays a move list, asserting every move is accepted.
fn replay(moves: &[(i32, i32)]) -> Game {
    let mut game = Game::new();
    for &(row, col) in moves {
        game.place(row, col).expect("valid move");
    }
    game
}

#[test]
fn test_turns_alternate_strictly() {
    let mut game = Game::new();
    let moves = [(0, 0), (0, 1), (1, 1), (0, 2), (2, 0)];

    for (i, &(row, col)) in moves.iter().enumerate() {
        let expected = if i % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.to_move(), expected);
        game.place(row, col).expect("valid move");
    }
}

#[test]
fn test_diagonal_win_scenario() {
    // X plays the main diagonal, O interleaves along the top row
    let mut game = replay(&[(0, 0), (0, 1), (1, 1), (0, 2)]);

    let status = game.place(2, 2).expect("valid move");
    assert_eq!(status, GameStatus::Won(Player::X));
    assert_eq!(game.winner(), Some(Player::X));

    let diagonal = [(0, 0), (1, 1), (2, 2)];
    for (row, col) in diagonal {
        let pos = Position::new(row, col).unwrap();
        assert_eq!(game.board().get(pos), Square::Occupied(Player::X));
    }
}

#[test]
fn test_row_win_for_o() {
    let game = replay(&[(1, 0), (0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(game.status(), GameStatus::Won(Player::O));
}

#[test]
fn test_column_win() {
    let game = replay(&[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_out_of_bounds_leaves_fresh_board() {
    let mut game = Game::new();
    assert_eq!(game.place(5, 0), Err(PlaceError::OutOfBounds(5, 0)));

    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(*game.board(), Game::new().board().clone());
}

#[test]
fn test_double_place_rejected() {
    let mut game = Game::new();
    game.place(0, 0).expect("valid move");
    let before = game.clone();

    let pos = Position::new(0, 0).unwrap();
    assert_eq!(game.place(0, 0), Err(PlaceError::AlreadyTaken(pos)));
    assert_eq!(game, before);
}

#[test]
fn test_post_win_placement_illegal() {
    let mut game = replay(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(game.status(), GameStatus::Won(Player::X));

    assert_eq!(game.place(2, 2), Err(PlaceError::GameOver));
}

#[test]
fn test_full_board_without_winner_is_draw() {
    // Ends as X O X / O X X / O X O
    let mut game = replay(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (2, 0),
        (1, 2),
        (2, 2),
    ]);

    let status = game.place(2, 1).expect("valid move");
    assert_eq!(status, GameStatus::Draw);
    assert_eq!(game.winner(), None);
    assert_eq!(game.place(0, 0), Err(PlaceError::GameOver));
}

#[test]
fn test_winner_matches_status() {
    let game = replay(&[(2, 0), (0, 0), (2, 1), (0, 1), (2, 2)]);
    match game.status() {
        GameStatus::Won(player) => assert_eq!(game.winner(), Some(player)),
        status => panic!("expected a win, got {status:?}"),
    }
}
