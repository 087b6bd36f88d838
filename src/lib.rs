//! Othello-Rules: the rules engine for Othello/Reversi.
//!
//! This crate models an 8x8 Othello board, detects legal moves, resolves
//! captures and recognises the end of the game.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, directions and the starting layout
//! - [`piece`] - Disc colors and placed pieces
//! - [`board`] - Core game logic (grid, capture scan, move validation)
//! - [`coord`] - `"d3"`-style coordinate notation
//! - [`game`] - Turn order, passes and scoring
//! - [`selfplay`] - Random legal play
//! - [`protocol`] - Text command loop for external hosts
//! - [`error`] - Engine error kinds
//!
//! ## Example
//!
//! ```
//! use othello_rules::board::Board;
//! use othello_rules::piece::Color;
//!
//! let mut board = Board::new();
//! assert_eq!(board.valid_moves(Color::Black), vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
//!
//! board.place_piece((2, 3), Color::Black).unwrap();
//! assert!(board.is_mine((3, 3), Color::Black).unwrap());
//! println!("{board}");
//! ```

pub mod board;
pub mod constants;
pub mod coord;
pub mod error;
pub mod game;
pub mod piece;
pub mod protocol;
pub mod selfplay;

pub use board::{Board, Pos};
pub use error::EngineError;
pub use piece::{Color, Piece};
