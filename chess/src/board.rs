//! Board and related things

use crate::geometry;
use crate::pool::{PieceId, PiecePool};
use crate::types::{Cell, Color, File, Occupant, Piece, PieceType, Rank};

use std::fmt;

use tracing::debug;

/// Move applied to the board
///
/// Besides the source and destination cells, it remembers the piece that stood on the
/// destination before the move, so the move can be reverted exactly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    from: Cell,
    to: Cell,
    captured: Option<PieceId>,
}

impl Move {
    #[inline]
    pub fn from(&self) -> Cell {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Cell {
        self.to
    }

    /// Returns the piece that was on the destination cell before the move
    #[inline]
    pub fn captured(&self) -> Option<PieceId> {
        self.captured
    }
}

/// Chess board with move history
///
/// The board owns a [`PiecePool`] with all the pieces created on it, and each cell holds an
/// optional handle into that pool. Moving pieces only reassigns handles, so the identity of a
/// piece survives both captures and undos.
///
/// The board does not check legality of moves. Use [`legal::piece_can_move()`](crate::legal::piece_can_move)
/// before calling [`Board::move_piece()`].
///
/// The board keeps the following invariants:
/// - `captured_white()` and `captured_black()` are equal to the number of moves in history which
///   captured a piece of the corresponding color;
/// - `moves_number()` is equal to the length of the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<PieceId>; 64],
    pool: PiecePool,
    history: Vec<Move>,
    captured_white: u32,
    captured_black: u32,
    moves_number: u32,
}

#[inline]
fn slot(c: Cell) -> usize {
    match c.index() {
        Some(idx) => idx,
        None => panic!("cell {:?} is out of bounds", c),
    }
}

impl Board {
    /// Returns an empty board with zeroed counters
    pub fn new() -> Board {
        Board {
            cells: [None; 64],
            pool: PiecePool::new(),
            history: Vec::new(),
            captured_white: 0,
            captured_black: 0,
            moves_number: 0,
        }
    }

    /// Returns a board with the initial position
    ///
    /// # Example
    ///
    /// ```
    /// # use tchess::{Board, Cell, Color, Piece, PieceType};
    /// #
    /// let board = Board::initial();
    /// let e1: Cell = "e1".parse().unwrap();
    /// assert_eq!(board.piece_at(e1), Some(Piece::new(Color::White, PieceType::King)));
    /// assert_eq!(board.moves_number(), 0);
    /// ```
    pub fn initial() -> Board {
        let mut res = Board::new();
        res.load_start();
        res
    }

    /// Puts the pieces of the initial position onto the board
    ///
    /// New pieces are created for every cell of the initial position. Other cells are left
    /// untouched.
    pub fn load_start(&mut self) {
        for file in File::iter() {
            for color in Color::iter() {
                let cell = Cell::from_parts(file, geometry::pawn_home_rank(color));
                self.make_and_place(cell, color, PieceType::Pawn);
            }
        }
        for color in Color::iter() {
            let rank = geometry::back_rank(color);
            for (file, piece_type) in File::iter().zip(geometry::back_rank_layout(color)) {
                self.make_and_place(Cell::from_parts(file, rank), color, piece_type);
            }
        }
    }

    /// Returns the handle of the piece on `c`
    ///
    /// Cells outside the board are always empty.
    #[inline]
    pub fn id_at(&self, c: Cell) -> Option<PieceId> {
        c.index().and_then(|idx| self.cells[idx])
    }

    /// Returns the piece on `c`, or `None` if the cell is empty
    #[inline]
    pub fn piece_at(&self, c: Cell) -> Option<Piece> {
        self.id_at(c).and_then(|id| self.pool.get(id))
    }

    /// Returns the color of the piece on `c`, or `None` if the cell is empty
    #[inline]
    pub fn color_at(&self, c: Cell) -> Option<Color> {
        self.piece_at(c).map(|p| p.color())
    }

    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Option<Piece> {
        self.piece_at(Cell::from_parts(file, rank))
    }

    /// Creates a new piece in the board's pool without putting it anywhere
    pub fn make_piece(&mut self, color: Color, piece_type: PieceType) -> PieceId {
        self.pool.make(color, piece_type)
    }

    /// Puts `piece` onto `c`, replacing the previous occupant
    ///
    /// The previous occupant stays in the pool. Passing `None` clears the cell.
    ///
    /// # Panics
    ///
    /// Panics if `c` is out of bounds.
    #[inline]
    pub fn place(&mut self, c: Cell, piece: Option<PieceId>) {
        self.cells[slot(c)] = piece;
    }

    /// Creates a new piece and puts it onto `c`
    ///
    /// # Panics
    ///
    /// Panics if `c` is out of bounds.
    pub fn make_and_place(&mut self, c: Cell, color: Color, piece_type: PieceType) -> PieceId {
        let id = self.make_piece(color, piece_type);
        self.place(c, Some(id));
        id
    }

    /// Moves the piece from `from` to `to`, capturing whatever stands on `to`
    ///
    /// No legality checks are performed, even capturing a piece of the same color is allowed.
    /// The move is recorded in history and can be reverted with [`Board::undo_move()`]. Always
    /// returns `true`.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is out of bounds.
    pub fn move_piece(&mut self, from: Cell, to: Cell) -> bool {
        let (from_idx, to_idx) = (slot(from), slot(to));
        match self.color_at(to) {
            Some(Color::White) => self.captured_white += 1,
            Some(Color::Black) => self.captured_black += 1,
            None => {}
        }
        self.moves_number += 1;
        let captured = self.cells[to_idx];
        self.history.push(Move { from, to, captured });
        self.cells[to_idx] = self.cells[from_idx];
        self.cells[from_idx] = None;
        debug!(%from, %to, ?captured, moves = self.moves_number, "move applied");
        true
    }

    /// Reverts the last move from history
    ///
    /// Returns `false` and leaves the board intact if there are no moves to revert.
    pub fn undo_move(&mut self) -> bool {
        let Some(mv) = self.history.pop() else {
            return false;
        };
        let (from_idx, to_idx) = (slot(mv.from), slot(mv.to));
        self.cells[from_idx] = self.cells[to_idx];
        self.cells[to_idx] = mv.captured;
        match self.color_at(mv.to) {
            Some(Color::White) => self.captured_white -= 1,
            Some(Color::Black) => self.captured_black -= 1,
            None => {}
        }
        self.moves_number -= 1;
        debug!(from = %mv.from, to = %mv.to, moves = self.moves_number, "move undone");
        true
    }

    /// Returns the number of White pieces captured so far
    #[inline]
    pub fn captured_white(&self) -> u32 {
        self.captured_white
    }

    /// Returns the number of Black pieces captured so far
    #[inline]
    pub fn captured_black(&self) -> u32 {
        self.captured_black
    }

    #[inline]
    pub fn moves_number(&self) -> u32 {
        self.moves_number
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    #[inline]
    pub fn pool(&self) -> &PiecePool {
        &self.pool
    }

    /// Wraps the board to allow pretty-printing with the given style `Style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use tchess::{Board, board::PrettyStyle};
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    ///     |A|B|C|D|E|F|G|H|
    /// R1: |♖|♘|♗|♕|♔|♗|♘|♖|
    /// R2: |♙|♙|♙|♙|♙|♙|♙|♙|
    /// R3: | | | | | | | | |
    /// R4: | | | | | | | | |
    /// R5: | | | | | | | | |
    /// R6: | | | | | | | | |
    /// R7: |♟|♟|♟|♟|♟|♟|♟|♟|
    /// R8: |♜|♞|♝|♚|♛|♝|♞|♜|
    ///     |A|B|C|D|E|F|G|H|
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Utf8).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::new()
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print color and type names of every cell
    Plain,
    /// Print pieces as Unicode chess glyphs in a frame
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

fn file_label(file: File) -> char {
    file.as_char().to_ascii_uppercase()
}

fn format_plain(b: &Board, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    for file in File::iter() {
        write!(f, "{} ", file_label(file))?;
    }
    writeln!(f)?;
    for rank in Rank::iter() {
        write!(f, "R{}: ", rank)?;
        for file in File::iter() {
            let piece = b.get2(file, rank);
            write!(f, "[{}, {}] ", piece.color_label(), piece.type_label())?;
        }
        writeln!(f)?;
    }
    Ok(())
}

fn format_utf8(b: &Board, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    let files = |f: &mut fmt::Formatter<'_>| -> Result<(), fmt::Error> {
        write!(f, "    |")?;
        for file in File::iter() {
            write!(f, "{}|", file_label(file))?;
        }
        writeln!(f)
    };

    files(f)?;
    for rank in Rank::iter() {
        write!(f, "R{}: |", rank)?;
        for file in File::iter() {
            write!(f, "{}|", b.get2(file, rank).utf8_char())?;
        }
        writeln!(f)?;
    }
    files(f)
}

impl<'a> fmt::Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Plain => format_plain(self.board, f),
            PrettyStyle::Utf8 => format_utf8(self.board, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn cell(s: &str) -> Cell {
        Cell::from_str(s).unwrap()
    }

    #[test]
    fn test_empty() {
        let b = Board::new();
        for c in Cell::iter() {
            assert_eq!(b.piece_at(c), None);
            assert_eq!(b.color_at(c), None);
        }
        assert_eq!(b.captured_white(), 0);
        assert_eq!(b.captured_black(), 0);
        assert_eq!(b.moves_number(), 0);
        assert!(b.pool().is_empty());
        assert_eq!(b.piece_at(cell("a1").left()), None);
    }

    #[test]
    fn test_initial() {
        let b = Board::initial();
        assert_eq!(b.pool().len(), 32);
        assert_eq!(
            b.piece_at(cell("e2")),
            Some(Piece::new(Color::White, PieceType::Pawn))
        );
        assert_eq!(
            b.piece_at(cell("a7")),
            Some(Piece::new(Color::Black, PieceType::Pawn))
        );
        assert_eq!(
            b.piece_at(cell("d1")),
            Some(Piece::new(Color::White, PieceType::Queen))
        );
        assert_eq!(
            b.piece_at(cell("d8")),
            Some(Piece::new(Color::Black, PieceType::King))
        );
        assert_eq!(
            b.piece_at(cell("g8")),
            Some(Piece::new(Color::Black, PieceType::Knight))
        );
        for rank in [Rank::R3, Rank::R4, Rank::R5, Rank::R6] {
            for file in File::iter() {
                assert_eq!(b.get2(file, rank), None);
            }
        }
    }

    #[test]
    fn test_place() {
        let mut b = Board::new();
        let rook = b.make_and_place(cell("c3"), Color::White, PieceType::Rook);
        assert_eq!(b.id_at(cell("c3")), Some(rook));
        assert_eq!(b.color_at(cell("c3")), Some(Color::White));

        let knight = b.make_piece(Color::Black, PieceType::Knight);
        assert_eq!(b.id_at(cell("c3")), Some(rook));
        b.place(cell("c3"), Some(knight));
        assert_eq!(b.color_at(cell("c3")), Some(Color::Black));
        assert_eq!(b.pool().get(rook), Some(Piece::new(Color::White, PieceType::Rook)));

        b.place(cell("c3"), None);
        assert_eq!(b.piece_at(cell("c3")), None);
        assert_eq!(b.pool().len(), 2);
    }

    #[test]
    fn test_capture_bookkeeping() {
        let mut b = Board::new();
        let queen = b.make_and_place(cell("d1"), Color::White, PieceType::Queen);
        let pawn = b.make_and_place(cell("d7"), Color::Black, PieceType::Pawn);

        assert!(b.move_piece(cell("d1"), cell("d7")));
        assert_eq!(b.captured_black(), 1);
        assert_eq!(b.captured_white(), 0);
        assert_eq!(b.moves_number(), 1);
        assert_eq!(b.id_at(cell("d7")), Some(queen));
        assert_eq!(b.id_at(cell("d1")), None);
        assert_eq!(
            b.last_move().map(|m| (m.from(), m.to(), m.captured())),
            Some((cell("d1"), cell("d7"), Some(pawn)))
        );

        assert!(b.undo_move());
        assert_eq!(b.captured_black(), 0);
        assert_eq!(b.captured_white(), 0);
        assert_eq!(b.moves_number(), 0);
        assert_eq!(b.id_at(cell("d1")), Some(queen));
        assert_eq!(b.id_at(cell("d7")), Some(pawn));
    }

    #[test]
    fn test_capture_white() {
        let mut b = Board::new();
        b.make_and_place(cell("b8"), Color::Black, PieceType::Knight);
        b.make_and_place(cell("c6"), Color::White, PieceType::Bishop);
        b.move_piece(cell("b8"), cell("c6"));
        assert_eq!(b.captured_white(), 1);
        assert_eq!(b.captured_black(), 0);
        b.undo_move();
        assert_eq!(b.captured_white(), 0);
    }

    #[test]
    fn test_undo_all() {
        let mut b = Board::initial();
        let start = b.clone();
        let moves = [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f3", "e5")];
        for (from, to) in moves {
            assert!(b.move_piece(cell(from), cell(to)));
        }
        assert_eq!(b.moves_number(), 5);
        assert_eq!(b.history().len(), 5);
        assert_eq!(b.captured_black(), 1);

        for _ in 0..moves.len() {
            assert!(b.undo_move());
        }
        assert!(!b.undo_move());
        assert_eq!(b.moves_number(), 0);
        assert_eq!(b, start);
    }

    #[test]
    fn test_undo_empty() {
        let mut b = Board::initial();
        let start = b.clone();
        assert!(!b.undo_move());
        assert_eq!(b, start);
    }

    #[test]
    fn test_pretty_plain() {
        let mut b = Board::new();
        b.make_and_place(cell("a1"), Color::White, PieceType::Rook);
        b.make_and_place(cell("h8"), Color::Black, PieceType::King);
        let text = b.pretty(PrettyStyle::Plain).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "A B C D E F G H ");
        assert!(lines[1].starts_with("R1: [White, Rook] [     , empty] "));
        assert!(lines[8].ends_with("[Black, King] "));
    }

    #[test]
    fn test_pretty_utf8() {
        let mut b = Board::new();
        b.make_and_place(cell("b2"), Color::Black, PieceType::Bishop);
        let text = b.pretty(PrettyStyle::Utf8).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "    |A|B|C|D|E|F|G|H|");
        assert_eq!(lines[2], "R2: | |♝| | | | | | |");
        assert_eq!(lines[9], lines[0]);
    }

    proptest! {
        #[test]
        fn move_then_undo_restores_board(
            steps in prop::collection::vec((0..64_usize, 0..64_usize), 1..40),
        ) {
            let mut b = Board::initial();
            for (from, to) in steps {
                let (from, to) = (Cell::from_index(from), Cell::from_index(to));
                if b.piece_at(from).is_none() {
                    continue;
                }
                let before = b.clone();
                prop_assert!(b.move_piece(from, to));
                prop_assert!(b.undo_move());
                prop_assert_eq!(&b, &before);
                b.move_piece(from, to);
            }
        }

        #[test]
        fn counters_follow_history(
            steps in prop::collection::vec((0..64_usize, 0..64_usize), 0..40),
        ) {
            let mut b = Board::initial();
            for (from, to) in steps {
                let (from, to) = (Cell::from_index(from), Cell::from_index(to));
                if b.piece_at(from).is_some() {
                    b.move_piece(from, to);
                }
            }
            let count = |color: Color| {
                b.history()
                    .iter()
                    .filter_map(|m| m.captured())
                    .filter(|&id| b.pool().get(id).map(|p| p.color()) == Some(color))
                    .count() as u32
            };
            prop_assert_eq!(b.captured_white(), count(Color::White));
            prop_assert_eq!(b.captured_black(), count(Color::Black));
            prop_assert_eq!(b.moves_number() as usize, b.history().len());

            let applied = b.history().len();
            for _ in 0..applied {
                prop_assert!(b.undo_move());
            }
            prop_assert!(!b.undo_move());
            prop_assert_eq!(b, Board::initial());
        }
    }
}
