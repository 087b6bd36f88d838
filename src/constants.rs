//! Board geometry and game-length constants.
//!
//! Othello is always played on an 8x8 board, so unlike engines that
//! support several sizes there is no feature switch here.

use crate::piece::Color;

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of cells along one edge of the board.
pub const SIZE: usize = 8;

/// Total number of cells on the board.
pub const NUM_CELLS: usize = SIZE * SIZE;

/// Longest possible game: every empty cell filled once.
pub const MAX_GAME_LEN: usize = NUM_CELLS - 4;

// =============================================================================
// Directions
// =============================================================================

/// The eight compass offsets as `(row, col)` deltas.
/// Order: E, SE, S, SW, W, NW, N, NE
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),   // East
    (1, 1),   // South-east
    (1, 0),   // South
    (1, -1),  // South-west
    (0, -1),  // West
    (-1, -1), // North-west
    (-1, 0),  // North
    (-1, 1),  // North-east
];

// =============================================================================
// Starting Position
// =============================================================================

/// The four centre discs every game starts with.
pub const START_POSITION: [((i32, i32), Color); 4] = [
    ((3, 3), Color::White),
    ((3, 4), Color::Black),
    ((4, 3), Color::Black),
    ((4, 4), Color::White),
];

// =============================================================================
// Text Representation
// =============================================================================

/// Character used for an empty cell in the board dump.
pub const EMPTY_CHAR: char = '.';
