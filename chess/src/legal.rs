//! Move legality rules
//!
//! Every rule checks only the geometry of a single move and the occupancy of the board. Checks,
//! castling, en passant and promotions are not taken into account.

use crate::board::Board;
use crate::geometry::{self, Direction};
use crate::sweep::{is_empty, is_empty_or_enemy, out_of_bounds, sweep_through};
use crate::types::{Cell, Color, PieceType};

use arrayvec::ArrayVec;
use std::ops::Deref;
use std::slice;

/// Maximum number of cells a single piece can reach, attained by a queen in the center
pub const MAX_TARGETS: usize = 27;

/// Cells reachable by a piece, see [`destinations()`]
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct Targets(ArrayVec<Cell, MAX_TARGETS>);

impl Deref for Targets {
    type Target = ArrayVec<Cell, MAX_TARGETS>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Targets {
    type Item = &'a Cell;
    type IntoIter = slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub fn pawn_can_move(from: Cell, to: Cell, color: Color, board: &Board) -> bool {
    let forward = geometry::pawn_forward(color);
    let next = from.step(forward);
    if next == to {
        return is_empty(next, board);
    }
    if from.rank() == geometry::pawn_home_rank(color) && next.step(forward) == to {
        return is_empty(next, board) && is_empty(to, board);
    }
    geometry::pawn_captures(color).into_iter().any(|dir| {
        let target = from.step(dir);
        target == to && !is_empty(target, board) && is_empty_or_enemy(target, color, board)
    })
}

pub fn bishop_can_move(from: Cell, to: Cell, color: Color, board: &Board) -> bool {
    Direction::DIAGONAL
        .into_iter()
        .any(|dir| sweep_through(from, to, dir, color, board))
}

pub fn rook_can_move(from: Cell, to: Cell, color: Color, board: &Board) -> bool {
    Direction::ORTHOGONAL
        .into_iter()
        .any(|dir| sweep_through(from, to, dir, color, board))
}

pub fn queen_can_move(from: Cell, to: Cell, color: Color, board: &Board) -> bool {
    rook_can_move(from, to, color, board) || bishop_can_move(from, to, color, board)
}

fn knight_jump(from: Cell, long: Direction, short: Direction) -> Cell {
    let mut next = from;
    for _ in 0..2 {
        next = next.step(long);
        if out_of_bounds(next) {
            return next;
        }
    }
    next.step(short)
}

pub fn knight_can_move(from: Cell, to: Cell, color: Color, board: &Board) -> bool {
    if !is_empty_or_enemy(to, color, board) {
        return false;
    }
    geometry::KNIGHT_JUMPS
        .into_iter()
        .any(|(long, short)| knight_jump(from, long, short) == to)
}

pub fn king_can_move(from: Cell, to: Cell, color: Color, board: &Board) -> bool {
    Direction::ALL.into_iter().any(|dir| from.step(dir) == to)
        && is_empty_or_enemy(to, color, board)
}

/// Checks whether the piece on `from` can move to `to`
///
/// Returns `false` if `from` is empty or either of the cells is out of bounds.
pub fn piece_can_move(from: Cell, to: Cell, board: &Board) -> bool {
    if out_of_bounds(from) || out_of_bounds(to) {
        return false;
    }
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    let color = piece.color();
    match piece.piece_type() {
        PieceType::Pawn => pawn_can_move(from, to, color, board),
        PieceType::Bishop => bishop_can_move(from, to, color, board),
        PieceType::Knight => knight_can_move(from, to, color, board),
        PieceType::Rook => rook_can_move(from, to, color, board),
        PieceType::Queen => queen_can_move(from, to, color, board),
        PieceType::King => king_can_move(from, to, color, board),
    }
}

/// Returns all the cells the piece on `from` can move to
pub fn destinations(from: Cell, board: &Board) -> Targets {
    let mut res = Targets::default();
    for to in Cell::iter() {
        if piece_can_move(from, to, board) {
            res.0.push(to);
        }
    }
    res
}
