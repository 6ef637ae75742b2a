use derive_more::Display;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellParseError {
    #[error("unexpected file char {0:?}")]
    UnexpectedFileChar(char),
    #[error("unexpected rank char {0:?}")]
    UnexpectedRankChar(char),
    #[error("invalid string length")]
    BadLength,
}

/// Board column
///
/// Besides the eight real files, there are two sentinels, [`File::Begin`] and [`File::End`],
/// which lie just outside the board. Stepping off the edge of the board lands on a sentinel,
/// and stepping from a sentinel stays on it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum File {
    Begin = 0,
    A = 1,
    B = 2,
    C = 3,
    D = 4,
    E = 5,
    F = 6,
    G = 7,
    H = 8,
    End = 9,
}

const FILES: [File; 10] = [
    File::Begin,
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
    File::End,
];

const NEXT_FILE: [File; 10] = [
    File::Begin,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
    File::End,
    File::End,
];

const PREV_FILE: [File; 10] = [
    File::Begin,
    File::Begin,
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::End,
];

impl File {
    pub const fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Returns the index of the file between 0 and 7, or `None` for a sentinel
    pub const fn index(&self) -> Option<usize> {
        match *self {
            File::Begin | File::End => None,
            f => Some(f as usize - 1),
        }
    }

    pub const fn from_index(val: usize) -> Self {
        assert!(val < 8, "file index must be between 0 and 7");
        FILES[val + 1]
    }

    pub const fn is_sentinel(&self) -> bool {
        matches!(*self, File::Begin | File::End)
    }

    pub const fn next(self) -> Self {
        NEXT_FILE[self as usize]
    }

    pub const fn prev(self) -> Self {
        PREV_FILE[self as usize]
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        FILES[1..9].iter().copied()
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(Self::from_index((u32::from(c) - u32::from('a')) as usize)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self.index() {
            Some(idx) => (b'a' + idx as u8) as char,
            None => '?',
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Board row
///
/// Ranks grow from White's side of the board to Black's side. Like [`File`], it has two
/// sentinels just outside the board.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    Begin = 0,
    R1 = 1,
    R2 = 2,
    R3 = 3,
    R4 = 4,
    R5 = 5,
    R6 = 6,
    R7 = 7,
    R8 = 8,
    End = 9,
}

const RANKS: [Rank; 10] = [
    Rank::Begin,
    Rank::R1,
    Rank::R2,
    Rank::R3,
    Rank::R4,
    Rank::R5,
    Rank::R6,
    Rank::R7,
    Rank::R8,
    Rank::End,
];

const NEXT_RANK: [Rank; 10] = [
    Rank::Begin,
    Rank::R2,
    Rank::R3,
    Rank::R4,
    Rank::R5,
    Rank::R6,
    Rank::R7,
    Rank::R8,
    Rank::End,
    Rank::End,
];

const PREV_RANK: [Rank; 10] = [
    Rank::Begin,
    Rank::Begin,
    Rank::R1,
    Rank::R2,
    Rank::R3,
    Rank::R4,
    Rank::R5,
    Rank::R6,
    Rank::R7,
    Rank::End,
];

impl Rank {
    pub const fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Returns the index of the rank between 0 (rank 1) and 7 (rank 8), or `None` for a sentinel
    pub const fn index(&self) -> Option<usize> {
        match *self {
            Rank::Begin | Rank::End => None,
            r => Some(r as usize - 1),
        }
    }

    pub const fn from_index(val: usize) -> Self {
        assert!(val < 8, "rank index must be between 0 and 7");
        RANKS[val + 1]
    }

    pub const fn is_sentinel(&self) -> bool {
        matches!(*self, Rank::Begin | Rank::End)
    }

    pub const fn next(self) -> Self {
        NEXT_RANK[self as usize]
    }

    pub const fn prev(self) -> Self {
        PREV_RANK[self as usize]
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        RANKS[1..9].iter().copied()
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Some(Self::from_index((u32::from(c) - u32::from('1')) as usize)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self.index() {
            Some(idx) => (b'1' + idx as u8) as char,
            None => '?',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Board square, addressed by file and rank
///
/// A cell may lie outside the board if either of its axes is a sentinel. Such cells appear
/// only as the result of stepping off the edge; parsing and [`Cell::iter()`] always yield real
/// squares.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    file: File,
    rank: Rank,
}

impl Cell {
    pub const fn from_parts(file: File, rank: Rank) -> Cell {
        Cell { file, rank }
    }

    pub const fn file(&self) -> File {
        self.file
    }

    pub const fn rank(&self) -> Rank {
        self.rank
    }

    pub const fn out_of_bounds(&self) -> bool {
        self.file.is_sentinel() || self.rank.is_sentinel()
    }

    /// Returns the index of the cell between 0 (`a1`) and 63 (`h8`), or `None` if the cell
    /// is out of bounds
    pub const fn index(&self) -> Option<usize> {
        match (self.file.index(), self.rank.index()) {
            (Some(file), Some(rank)) => Some((rank << 3) | file),
            _ => None,
        }
    }

    pub const fn from_index(val: usize) -> Cell {
        assert!(val < 64, "cell index must be between 0 and 63");
        Cell::from_parts(File::from_index(val & 7), Rank::from_index(val >> 3))
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..64).map(Cell::from_index)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.out_of_bounds() {
            return write!(f, "Cell(?{:?}, {:?})", self.file, self.rank);
        }
        write!(f, "Cell({})", self)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Cell {
    type Err = CellParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file_ch, rank_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file_ch), Some(rank_ch), None) => (file_ch, rank_ch),
            _ => return Err(CellParseError::BadLength),
        };
        Ok(Cell::from_parts(
            File::from_char(file_ch).ok_or(CellParseError::UnexpectedFileChar(file_ch))?,
            Rank::from_char(rank_ch).ok_or(CellParseError::UnexpectedRankChar(rank_ch))?,
        ))
    }
}

#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    #[display(fmt = "White")]
    White = 0,
    #[display(fmt = "Black")]
    Black = 1,
}

impl Color {
    pub const fn inv(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [Color::White, Color::Black].into_iter()
    }
}

#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceType {
    #[display(fmt = "Pawn")]
    Pawn = 0,
    #[display(fmt = "Bishop")]
    Bishop = 1,
    #[display(fmt = "Knight")]
    Knight = 2,
    #[display(fmt = "Rook")]
    Rook = 3,
    #[display(fmt = "Queen")]
    Queen = 4,
    #[display(fmt = "King")]
    King = 5,
}

impl PieceType {
    pub const COUNT: usize = 6;

    pub const fn index(&self) -> usize {
        *self as usize
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [
            PieceType::Pawn,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
            PieceType::Queen,
            PieceType::King,
        ]
        .into_iter()
    }
}

/// Immutable chess piece of a certain color
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    piece_type: PieceType,
}

impl Piece {
    pub const fn new(color: Color, piece_type: PieceType) -> Piece {
        Piece { color, piece_type }
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    pub fn as_char(&self) -> char {
        let c = b"pbnrqk"[self.piece_type.index()] as char;
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn as_utf8_char(&self) -> char {
        match self.color {
            Color::White => ['♙', '♗', '♘', '♖', '♕', '♔'][self.piece_type.index()],
            Color::Black => ['♟', '♝', '♞', '♜', '♛', '♚'][self.piece_type.index()],
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.color, self.piece_type)
    }
}

/// Display labels for the contents of a cell, whether occupied or not
pub trait Occupant {
    /// Color name, padded with spaces for an empty cell
    fn color_label(&self) -> &'static str;

    /// Piece type name, or `"empty"` for an empty cell
    fn type_label(&self) -> &'static str;

    /// Unicode glyph, or a space for an empty cell
    fn utf8_char(&self) -> char;
}

impl Occupant for Option<Piece> {
    fn color_label(&self) -> &'static str {
        match self.map(|p| p.color()) {
            None => "     ",
            Some(Color::White) => "White",
            Some(Color::Black) => "Black",
        }
    }

    fn type_label(&self) -> &'static str {
        match self.map(|p| p.piece_type()) {
            None => "empty",
            Some(PieceType::Pawn) => "Pawn",
            Some(PieceType::Bishop) => "Bishop",
            Some(PieceType::Knight) => "Knight",
            Some(PieceType::Rook) => "Rook",
            Some(PieceType::Queen) => "Queen",
            Some(PieceType::King) => "King",
        }
    }

    fn utf8_char(&self) -> char {
        match self {
            Some(p) => p.as_utf8_char(),
            None => ' ',
        }
    }
}
