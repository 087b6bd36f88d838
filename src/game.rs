//! Turn order on top of a [`Board`].
//!
//! The board knows nothing about whose turn it is. [`Game`] adds the side
//! to move, forced passes, a move history and final scoring.

use std::fmt;

use crate::board::{Board, Pos};
use crate::coord::str_coord;
use crate::error::EngineError;
use crate::piece::Color;

/// What a side did on its turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Place(Pos),
    Pass,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(pos) => f.write_str(&str_coord(*pos)),
            Move::Pass => f.write_str("pass"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Color,
    history: Vec<(Color, Move)>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the standard start, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Color::Black,
            history: Vec::new(),
        }
    }

    /// Resume play from an arbitrary position with `to_move` on turn.
    ///
    /// No pass is inserted here even if `to_move` has no legal move; the
    /// caller is expected to [`Game::pass`] in that case.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn history(&self) -> &[(Color, Move)] {
        &self.history
    }

    /// Number of passes recorded so far, forced or explicit.
    pub fn passes(&self) -> usize {
        self.history
            .iter()
            .filter(|(_, mv)| *mv == Move::Pass)
            .count()
    }

    /// Number of discs placed since the start.
    pub fn placements(&self) -> usize {
        self.history.len() - self.passes()
    }

    pub fn valid_moves(&self) -> Vec<Pos> {
        self.board.valid_moves(self.to_move)
    }

    pub fn is_over(&self) -> bool {
        self.board.is_over()
    }

    /// Place a disc for the side to move.
    ///
    /// If the opponent then has no reply but we still do, the opponent's
    /// pass is recorded and the turn comes straight back.
    pub fn play(&mut self, pos: Pos) -> Result<(), EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        self.board.place_piece(pos, self.to_move)?;
        self.history.push((self.to_move, Move::Place(pos)));
        self.to_move = !self.to_move;

        if !self.board.has_move(self.to_move) && self.board.has_move(!self.to_move) {
            self.history.push((self.to_move, Move::Pass));
            self.to_move = !self.to_move;
        }
        Ok(())
    }

    /// Pass the turn. Only allowed when the side to move has no legal move.
    ///
    /// [`Game::play`] already records forced passes, so this is only needed
    /// for games resumed with [`Game::from_board`] or for hosts that send
    /// passes explicitly.
    pub fn pass(&mut self) -> Result<(), EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        if self.board.has_move(self.to_move) {
            return Err(EngineError::PassNotAllowed);
        }
        self.history.push((self.to_move, Move::Pass));
        self.to_move = !self.to_move;
        Ok(())
    }

    /// Disc counts as `(black, white)`.
    pub fn score(&self) -> (usize, usize) {
        (
            self.board.count(Color::Black),
            self.board.count(Color::White),
        )
    }

    /// The side with more discs once the game is over. `None` for a draw or
    /// a game still in progress.
    pub fn winner(&self) -> Option<Color> {
        if !self.is_over() {
            return None;
        }
        let (black, white) = self.score();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        if self.is_over() {
            let (black, white) = self.score();
            write!(f, "Game over: black {black}, white {white}")
        } else {
            write!(f, "{} to move", self.to_move)
        }
    }
}
