//! The 8x8 Othello board and its rules.
//!
//! The grid owns every piece by value. Capturing a run of discs is an
//! in-place color change on the cells between the new disc and an existing
//! disc of the mover's color; pieces are never removed.

use std::fmt;

use crate::constants::{DIRECTIONS, EMPTY_CHAR, SIZE, START_POSITION};
use crate::error::EngineError;
use crate::piece::{Color, Piece};

/// A `(row, col)` coordinate. Signed so that off-board positions can be
/// named and rejected.
pub type Pos = (i32, i32);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with the four standard centre discs.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for ((row, col), color) in START_POSITION {
            board.grid[row as usize][col as usize] = Some(Piece::new(color));
        }
        board
    }

    /// A board with no discs at all. Only useful for setting up positions.
    pub fn empty() -> Self {
        Self {
            grid: [[None; SIZE]; SIZE],
        }
    }

    /// Put a disc on a cell without running any rules.
    ///
    /// Intended for building test positions; games go through
    /// [`Board::place_piece`].
    pub fn set_piece(&mut self, pos: Pos, color: Color) -> Result<(), EngineError> {
        self.check_pos(pos)?;
        self.grid[pos.0 as usize][pos.1 as usize] = Some(Piece::new(color));
        Ok(())
    }

    pub fn is_valid_pos(&self, pos: Pos) -> bool {
        let n = SIZE as i32;
        (0..n).contains(&pos.0) && (0..n).contains(&pos.1)
    }

    fn check_pos(&self, pos: Pos) -> Result<(), EngineError> {
        if self.is_valid_pos(pos) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                row: pos.0,
                col: pos.1,
            })
        }
    }

    pub fn get_piece(&self, pos: Pos) -> Result<Option<Piece>, EngineError> {
        self.check_pos(pos)?;
        Ok(self.grid[pos.0 as usize][pos.1 as usize])
    }

    pub fn is_occupied(&self, pos: Pos) -> Result<bool, EngineError> {
        Ok(self.get_piece(pos)?.is_some())
    }

    /// True iff `pos` holds a disc of `color`.
    pub fn is_mine(&self, pos: Pos, color: Color) -> Result<bool, EngineError> {
        Ok(self.get_piece(pos)?.is_some_and(|p| p.color == color))
    }

    /// Walk from `pos` along `dir` and return the opponent discs that a
    /// `color` disc at `pos` would capture in that direction.
    ///
    /// The run must be closed by a disc of `color`; running into an empty
    /// cell or off the board captures nothing.
    fn positions_to_flip(&self, pos: Pos, color: Color, dir: (i32, i32)) -> Option<Vec<Pos>> {
        let mut run = Vec::new();
        let mut current = pos;
        loop {
            let next = (current.0 + dir.0, current.1 + dir.1);
            if !self.is_valid_pos(next) {
                return None;
            }
            match self.grid[next.0 as usize][next.1 as usize] {
                None => return None,
                Some(p) if p.color == color => {
                    return if run.is_empty() { None } else { Some(run) };
                }
                Some(_) => {
                    run.push(next);
                    current = next;
                }
            }
        }
    }

    /// Every position a `color` disc at `pos` would flip, in the order of
    /// [`DIRECTIONS`]. Empty when the move captures nothing.
    ///
    /// Does not look at whether `pos` itself is occupied.
    pub fn captures(&self, pos: Pos, color: Color) -> Result<Vec<Pos>, EngineError> {
        self.check_pos(pos)?;
        Ok(DIRECTIONS
            .iter()
            .filter_map(|&dir| self.positions_to_flip(pos, color, dir))
            .flatten()
            .collect())
    }

    pub fn valid_move(&self, pos: Pos, color: Color) -> Result<bool, EngineError> {
        if self.is_occupied(pos)? {
            return Ok(false);
        }
        Ok(DIRECTIONS
            .iter()
            .any(|&dir| self.positions_to_flip(pos, color, dir).is_some()))
    }

    /// All legal moves for `color` in row-major order.
    pub fn valid_moves(&self, color: Color) -> Vec<Pos> {
        let n = SIZE as i32;
        (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .filter(|&pos| self.valid_move(pos, color).unwrap_or(false))
            .collect()
    }

    pub fn has_move(&self, color: Color) -> bool {
        !self.valid_moves(color).is_empty()
    }

    /// True when neither side can move.
    pub fn is_over(&self) -> bool {
        !self.has_move(Color::Black) && !self.has_move(Color::White)
    }

    /// Play `color` at `pos`, flipping every captured disc.
    ///
    /// On error the board is left untouched.
    pub fn place_piece(&mut self, pos: Pos, color: Color) -> Result<(), EngineError> {
        if !self.valid_move(pos, color)? {
            return Err(EngineError::InvalidMove {
                row: pos.0,
                col: pos.1,
            });
        }
        for (row, col) in self.captures(pos, color)? {
            if let Some(piece) = self.grid[row as usize][col as usize].as_mut() {
                piece.flip();
            }
        }
        self.grid[pos.0 as usize][pos.1 as usize] = Some(Piece::new(color));
        Ok(())
    }

    /// Number of discs of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.is_some_and(|p| p.color == color))
            .count()
    }

    pub fn count_empty(&self) -> usize {
        self.grid.iter().flatten().filter(|cell| cell.is_none()).count()
    }

    /// The board dump as a string (same text as `Display`).
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for cell in row {
                let ch = match cell {
                    Some(piece) => piece.color.as_char(),
                    None => EMPTY_CHAR,
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
