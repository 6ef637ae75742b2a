//! Occupancy helpers and sweeping along lines of the board

use crate::board::Board;
use crate::geometry::Direction;
use crate::types::{Cell, Color};

#[inline]
pub fn out_of_bounds(c: Cell) -> bool {
    c.out_of_bounds()
}

#[inline]
pub fn is_empty(c: Cell, board: &Board) -> bool {
    board.piece_at(c).is_none()
}

/// Returns `true` if `c` is empty or holds a piece of the color opposite to `color`
#[inline]
pub fn is_empty_or_enemy(c: Cell, color: Color, board: &Board) -> bool {
    board.color_at(c) != Some(color)
}

/// Checks whether a sliding piece of color `color` can go from `from` to `to` in direction `dir`
///
/// Every cell strictly between `from` and `to` must be empty, and `to` must be either empty or
/// occupied by a piece of the other color.
///
/// Returns `false` if `to` does not lie on the ray starting from `from` in direction `dir`. In
/// particular, `from == to` is never a valid sweep.
pub fn sweep_through(from: Cell, to: Cell, dir: Direction, color: Color, board: &Board) -> bool {
    if !dir.leads(from, to) {
        return false;
    }
    let mut next = from;
    loop {
        next = next.step(dir);
        if out_of_bounds(next) {
            return false;
        }
        match board.color_at(next) {
            None if next == to => return true,
            None => continue,
            Some(occupant) => return next == to && occupant != color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceType;
    use std::str::FromStr;

    fn cell(s: &str) -> Cell {
        Cell::from_str(s).unwrap()
    }

    #[test]
    fn test_clear_line() {
        let b = Board::new();
        assert!(sweep_through(cell("a1"), cell("a8"), Direction::Front, Color::White, &b));
        assert!(sweep_through(cell("h8"), cell("a1"), Direction::BackLeft, Color::Black, &b));
        assert!(sweep_through(cell("d4"), cell("d5"), Direction::Front, Color::White, &b));
        assert!(!sweep_through(cell("a8"), cell("a1"), Direction::Front, Color::White, &b));
    }

    #[test]
    fn test_off_line() {
        let b = Board::new();
        assert!(!sweep_through(cell("a1"), cell("b8"), Direction::Front, Color::White, &b));
        assert!(!sweep_through(cell("c1"), cell("h7"), Direction::FrontRight, Color::White, &b));
        assert!(!sweep_through(cell("e4"), cell("e4"), Direction::Left, Color::White, &b));
    }

    #[test]
    fn test_blocked() {
        let mut b = Board::new();
        b.make_and_place(cell("c3"), Color::Black, PieceType::Pawn);
        b.make_and_place(cell("f6"), Color::White, PieceType::Pawn);

        assert!(sweep_through(cell("a1"), cell("b2"), Direction::FrontRight, Color::White, &b));
        assert!(sweep_through(cell("a1"), cell("c3"), Direction::FrontRight, Color::White, &b));
        assert!(!sweep_through(cell("a1"), cell("c3"), Direction::FrontRight, Color::Black, &b));
        assert!(!sweep_through(cell("a1"), cell("d4"), Direction::FrontRight, Color::White, &b));
        assert!(!sweep_through(cell("h8"), cell("f6"), Direction::BackLeft, Color::White, &b));
        assert!(sweep_through(cell("h8"), cell("f6"), Direction::BackLeft, Color::Black, &b));
        assert!(!sweep_through(cell("h8"), cell("e5"), Direction::BackLeft, Color::Black, &b));
    }

    #[test]
    fn test_occupancy() {
        let mut b = Board::new();
        b.make_and_place(cell("e4"), Color::White, PieceType::Knight);
        assert!(!is_empty(cell("e4"), &b));
        assert!(is_empty(cell("e5"), &b));
        assert!(is_empty_or_enemy(cell("e4"), Color::Black, &b));
        assert!(!is_empty_or_enemy(cell("e4"), Color::White, &b));
        assert!(is_empty_or_enemy(cell("e5"), Color::White, &b));
        assert!(out_of_bounds(cell("h4").right()));
        assert!(!out_of_bounds(cell("h4").left()));
    }
}
