//! Game session which keeps track of the side to move

use crate::board::{Board, Move};
use crate::legal;
use crate::types::{Cell, CellParseError, Color, Piece};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

/// Error making a move in a [`Game`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// One of the cells cannot be parsed
    #[error("bad cell {text:?}: {source}")]
    Parse {
        text: String,
        source: CellParseError,
    },
    /// The source cell doesn't contain a piece of the side to move
    #[error("it is turn of {side} to move")]
    WrongTurn { side: Color },
    /// The piece cannot go to the destination cell
    #[error("cannot move {piece} from {from} to {to}")]
    Illegal { piece: Piece, from: Cell, to: Cell },
}

/// Error undoing a move in a [`Game`]
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum UndoError {
    #[error("no moves to undo")]
    NoMoves,
}

/// Number of opponent's pieces captured by each side
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Score {
    pub white: u32,
    pub black: u32,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "white: [{}], black: [{}]", self.white, self.black)
    }
}

fn parse_cell(s: &str) -> Result<Cell, MoveError> {
    Cell::from_str(s).map_err(|source| MoveError::Parse {
        text: s.to_string(),
        source,
    })
}

/// Two-player game on a single board
///
/// White moves first, then the sides alternate. Undoing a move gives the turn back to the side
/// which made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side: Color,
}

impl Game {
    pub fn new(board: Board, side: Color) -> Self {
        Game { board, side }
    }

    pub fn new_initial() -> Self {
        Self::new(Board::initial(), Color::White)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side(&self) -> Color {
        self.side
    }

    pub fn history(&self) -> &[Move] {
        self.board.history()
    }

    pub fn moves_number(&self) -> u32 {
        self.board.moves_number()
    }

    pub fn score(&self) -> Score {
        Score {
            white: self.board.captured_black(),
            black: self.board.captured_white(),
        }
    }

    /// Checks whether the side to move can make the move from `from` to `to`
    pub fn validate(&self, from: Cell, to: Cell) -> Result<(), MoveError> {
        let piece = match self.board.piece_at(from) {
            Some(piece) if piece.color() == self.side => piece,
            _ => return Err(MoveError::WrongTurn { side: self.side }),
        };
        if !legal::piece_can_move(from, to, &self.board) {
            return Err(MoveError::Illegal { piece, from, to });
        }
        Ok(())
    }

    /// Makes the move from `from` to `to` and passes the turn to the opponent
    ///
    /// The board is left intact if the move is rejected.
    pub fn try_move(&mut self, from: Cell, to: Cell) -> Result<(), MoveError> {
        if let Err(err) = self.validate(from, to) {
            debug!(%from, %to, %err, "move rejected");
            return Err(err);
        }
        self.board.move_piece(from, to);
        self.side = self.side.inv();
        Ok(())
    }

    /// Parses both cells and makes the move, see [`Game::try_move()`]
    pub fn try_move_str(&mut self, from: &str, to: &str) -> Result<(), MoveError> {
        let (from, to) = (parse_cell(from)?, parse_cell(to)?);
        self.try_move(from, to)
    }

    /// Reverts the last move and gives the turn back
    pub fn undo(&mut self) -> Result<(), UndoError> {
        if !self.board.undo_move() {
            debug!("nothing to undo");
            return Err(UndoError::NoMoves);
        }
        self.side = self.side.inv();
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new_initial()
    }
}
