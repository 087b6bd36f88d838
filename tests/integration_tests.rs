//! Integration tests for othello-rules
//!
//! These exercise the public API only: the opening position, capture
//! resolution, error behaviour and whole-game invariants under random play.

use othello_rules::board::{Board, Pos};
use othello_rules::constants::{DIRECTIONS, NUM_CELLS, SIZE};
use othello_rules::coord::parse_coord;
use othello_rules::error::EngineError;
use othello_rules::game::{Game, Move};
use othello_rules::piece::{Color, Piece};
use othello_rules::selfplay::random_game;

// =============================================================================
// Helper functions
// =============================================================================

/// Every on-board position in row-major order.
fn all_positions() -> Vec<Pos> {
    let n = SIZE as i32;
    (0..n).flat_map(|i| (0..n).map(move |j| (i, j))).collect()
}

/// Build a board from eight rows of `B`, `W` and `.`.
fn board_from_rows(rows: [&str; 8]) -> Board {
    let mut board = Board::empty();
    for (i, row) in rows.iter().enumerate() {
        for (j, ch) in row.chars().enumerate() {
            let pos = (i as i32, j as i32);
            match ch {
                'B' => board.set_piece(pos, Color::Black).unwrap(),
                'W' => board.set_piece(pos, Color::White).unwrap(),
                _ => {}
            }
        }
    }
    board
}

/// Play a sequence of moves in notation, alternating sides via [`Game`].
fn setup_game(moves: &[&str]) -> Game {
    let mut game = Game::new();
    for mv in moves {
        let pos = parse_coord(mv).unwrap();
        game.play(pos)
            .unwrap_or_else(|e| panic!("illegal move {mv} in setup: {e}"));
    }
    game
}

// =============================================================================
// Positions and bounds
// =============================================================================

#[test]
fn test_is_valid_pos_matches_range() {
    let board = Board::new();
    for row in -2..10 {
        for col in -2..10 {
            let expected = (0..8).contains(&row) && (0..8).contains(&col);
            assert_eq!(board.is_valid_pos((row, col)), expected, "({row}, {col})");
        }
    }
}

#[test]
fn test_out_of_bounds_errors() {
    let mut board = Board::new();
    assert_eq!(
        board.get_piece((8, 0)),
        Err(EngineError::OutOfBounds { row: 8, col: 0 })
    );
    assert_eq!(
        board.place_piece((-1, 0), Color::Black),
        Err(EngineError::OutOfBounds { row: -1, col: 0 })
    );
    assert!(board.is_occupied((0, 8)).is_err());
    assert!(board.is_mine((0, -1), Color::White).is_err());
    assert!(board.valid_move((9, 9), Color::Black).is_err());
    assert_eq!(board, Board::new());
}

// =============================================================================
// Initial position
// =============================================================================

#[test]
fn test_initial_board_has_four_pieces() {
    let board = Board::new();
    let expected: [(Pos, Color); 4] = [
        ((3, 3), Color::White),
        ((3, 4), Color::Black),
        ((4, 3), Color::Black),
        ((4, 4), Color::White),
    ];

    let mut occupied = 0;
    for pos in all_positions() {
        match board.get_piece(pos).unwrap() {
            Some(piece) => {
                occupied += 1;
                let (_, color) = expected
                    .iter()
                    .find(|(p, _)| *p == pos)
                    .unwrap_or_else(|| panic!("unexpected piece at {pos:?}"));
                assert_eq!(piece.color, *color);
            }
            None => assert!(!board.is_occupied(pos).unwrap()),
        }
    }
    assert_eq!(occupied, 4);
    assert_eq!(board.count_empty(), 60);
}

#[test]
fn test_initial_valid_moves_black() {
    let board = Board::new();
    assert_eq!(
        board.valid_moves(Color::Black),
        vec![(2, 3), (3, 2), (4, 5), (5, 4)]
    );
    for pos in all_positions() {
        let expected = [(2, 3), (3, 2), (4, 5), (5, 4)].contains(&pos);
        assert_eq!(board.valid_move(pos, Color::Black), Ok(expected), "{pos:?}");
    }
}

#[test]
fn test_initial_valid_moves_white() {
    let board = Board::new();
    assert_eq!(
        board.valid_moves(Color::White),
        vec![(2, 4), (3, 5), (4, 2), (5, 3)]
    );
}

// =============================================================================
// Placing pieces
// =============================================================================

#[test]
fn test_black_d3_flips_one() {
    let mut board = Board::new();
    board.place_piece((2, 3), Color::Black).unwrap();

    assert_eq!(board.get_piece((2, 3)), Ok(Some(Piece::new(Color::Black))));
    assert_eq!(board.get_piece((3, 3)), Ok(Some(Piece::new(Color::Black))));
    assert_eq!(board.get_piece((3, 4)), Ok(Some(Piece::new(Color::Black))));
    assert_eq!(board.get_piece((4, 3)), Ok(Some(Piece::new(Color::Black))));
    assert_eq!(board.get_piece((4, 4)), Ok(Some(Piece::new(Color::White))));
    assert_eq!(board.count(Color::Black), 4);
    assert_eq!(board.count(Color::White), 1);
}

#[test]
fn test_invalid_move_leaves_board_unchanged() {
    let mut board = Board::new();
    let before = board.clone();

    assert_eq!(
        board.place_piece((0, 0), Color::Black),
        Err(EngineError::InvalidMove { row: 0, col: 0 })
    );
    assert_eq!(board, before);

    // Occupied cell
    assert_eq!(
        board.place_piece((3, 3), Color::Black),
        Err(EngineError::InvalidMove { row: 3, col: 3 })
    );
    assert_eq!(board, before);
}

#[test]
fn test_captures_in_several_directions() {
    // Black at d4 closes runs to the east, south and south-east.
    let mut board = board_from_rows([
        "........",
        "........",
        "........",
        "....WWB.",
        "...WW...",
        "...W.B..",
        "...B....",
        "........",
    ]);
    let pos = (3, 3);
    let captured = board.captures(pos, Color::Black).unwrap();
    assert_eq!(captured, vec![(3, 4), (3, 5), (4, 4), (4, 3), (5, 3)]);

    board.place_piece(pos, Color::Black).unwrap();
    for p in captured {
        assert!(board.is_mine(p, Color::Black).unwrap(), "{p:?} not flipped");
    }
    assert_eq!(board.count(Color::White), 0);
}

#[test]
fn test_run_to_edge_does_not_capture() {
    let board = board_from_rows([
        "...WWWWW",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
    ]);
    assert_eq!(board.captures((0, 2), Color::Black), Ok(vec![]));
    assert_eq!(board.valid_move((0, 2), Color::Black), Ok(false));
}

#[test]
fn test_run_broken_by_empty_does_not_capture() {
    let board = board_from_rows([
        "........",
        ".W.B....",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
    ]);
    assert_eq!(board.valid_move((1, 0), Color::Black), Ok(false));
}

#[test]
fn test_only_closed_directions_flip() {
    // East run is closed, west run reaches the edge.
    let mut board = board_from_rows([
        "........",
        "........",
        "WW.WB...",
        "........",
        "........",
        "........",
        "........",
        "........",
    ]);
    board.place_piece((2, 2), Color::Black).unwrap();
    assert!(board.is_mine((2, 3), Color::Black).unwrap());
    assert!(board.is_mine((2, 0), Color::White).unwrap());
    assert!(board.is_mine((2, 1), Color::White).unwrap());
}

#[test]
fn test_valid_move_iff_some_direction_captures() {
    let game = setup_game(&["f5", "d6", "c3", "d3", "c4"]);
    let board = game.board();
    for color in [Color::Black, Color::White] {
        for pos in all_positions() {
            let expected = !board.is_occupied(pos).unwrap()
                && !board.captures(pos, color).unwrap().is_empty();
            assert_eq!(board.valid_move(pos, color), Ok(expected), "{pos:?} {color}");
        }
    }
}

// =============================================================================
// Terminal state
// =============================================================================

#[test]
fn test_has_move_and_is_over_on_empty_board() {
    let board = Board::empty();
    assert!(!board.has_move(Color::Black));
    assert!(!board.has_move(Color::White));
    assert!(board.is_over());
}

#[test]
fn test_one_sided_board_is_over() {
    let board = board_from_rows([
        "BBBBBBBB",
        "BBBBBBBB",
        "BBBBBBBB",
        "BBBBBBBB",
        "........",
        "........",
        "........",
        "........",
    ]);
    assert!(board.is_over());
}

#[test]
fn test_only_one_side_can_move() {
    // A corner disc cannot be outflanked, but it can outflank.
    let board = board_from_rows([
        "WB......",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
    ]);
    assert!(!board.has_move(Color::Black));
    assert!(board.has_move(Color::White));
    assert_eq!(board.valid_moves(Color::White), vec![(0, 2)]);
    assert!(!board.is_over());
}

// =============================================================================
// Games
// =============================================================================

#[test]
fn test_nine_move_wipeout_ends_game() {
    let game = setup_game(&["e6", "f4", "e3", "f6", "g5", "d6", "e7", "f5", "c5"]);
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Color::Black));
    assert_eq!(game.placements(), 9);
    assert_eq!(
        game.history().last(),
        Some(&(Color::Black, Move::Place((4, 2))))
    );
    assert_eq!(game.passes(), 0);
}

#[test]
fn test_forced_pass_is_recorded() {
    // d1 takes both white discs on the top row; White's last disc on b8
    // then has nothing to outflank, while Black can still take it from c8.
    let board = board_from_rows([
        "BWW.....",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "BW......",
    ]);
    let mut game = Game::from_board(board, Color::Black);

    game.play((0, 3)).unwrap();
    assert_eq!(
        game.history(),
        &[
            (Color::Black, Move::Place((0, 3))),
            (Color::White, Move::Pass),
        ]
    );
    assert_eq!(game.to_move(), Color::Black);
    assert_eq!(game.passes(), 1);
    assert!(!game.is_over());
    assert_eq!(game.valid_moves(), vec![(7, 2)]);

    game.play((7, 2)).unwrap();
    assert!(game.is_over());
    assert_eq!(game.score(), (7, 0));
    assert_eq!(game.passes(), 1);
}

#[test]
fn test_random_games_keep_invariants() {
    for seed in 0..20 {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut game = Game::new();
        while !game.is_over() {
            let board_before = game.board().clone();
            let color = game.to_move();
            let moves = game.valid_moves();
            assert!(!moves.is_empty(), "side to move has no move (seed {seed})");
            assert_eq!(board_before.has_move(color), !moves.is_empty());

            let pos = moves[rng.usize(..moves.len())];
            let captured = board_before.captures(pos, color).unwrap();
            game.play(pos).unwrap();

            let board = game.board();
            assert!(board.is_mine(pos, color).unwrap());
            for p in &captured {
                assert!(board.is_mine(*p, color).unwrap());
            }
            assert_eq!(
                board.count(color),
                board_before.count(color) + captured.len() + 1
            );
            assert_eq!(
                board.count(Color::Black) + board.count(Color::White) + board.count_empty(),
                NUM_CELLS
            );
        }
        assert!(!game.board().has_move(Color::Black));
        assert!(!game.board().has_move(Color::White));
    }
}

#[test]
fn test_random_game_is_reproducible() {
    let a = random_game(&mut fastrand::Rng::with_seed(99));
    let b = random_game(&mut fastrand::Rng::with_seed(99));
    assert_eq!(a.board(), b.board());
    let (black, white) = a.score();
    assert!(black + white <= NUM_CELLS);
}

#[test]
fn test_directions_are_unit_compass_offsets() {
    assert_eq!(DIRECTIONS.len(), 8);
    for (dr, dc) in DIRECTIONS {
        assert!((-1..=1).contains(&dr) && (-1..=1).contains(&dc));
        assert!((dr, dc) != (0, 0));
    }
}
