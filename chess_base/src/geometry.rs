use crate::types::{Cell, Color, PieceType, Rank};

/// One of the eight directions a piece may step in
///
/// "Front" is towards rank 8 and "right" is towards file `h`, as seen by White.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Front,
    Back,
    Left,
    Right,
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Front,
        Direction::Back,
        Direction::Right,
        Direction::Left,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::FrontRight,
        Direction::FrontLeft,
        Direction::BackRight,
        Direction::BackLeft,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::Front,
        Direction::Back,
        Direction::Left,
        Direction::Right,
        Direction::FrontLeft,
        Direction::FrontRight,
        Direction::BackLeft,
        Direction::BackRight,
    ];

    /// Returns the change of file and rank ordinals made by one step
    pub const fn delta(&self) -> (i8, i8) {
        match *self {
            Direction::Front => (0, 1),
            Direction::Back => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::FrontLeft => (-1, 1),
            Direction::FrontRight => (1, 1),
            Direction::BackLeft => (-1, -1),
            Direction::BackRight => (1, -1),
        }
    }

    /// Returns `true` if `to` can be reached from `from` by one or more steps in this direction
    pub const fn leads(&self, from: Cell, to: Cell) -> bool {
        let df = to.file().ordinal() as i8 - from.file().ordinal() as i8;
        let dr = to.rank().ordinal() as i8 - from.rank().ordinal() as i8;
        let (sf, sr) = self.delta();
        let steps = if sf != 0 { df * sf } else { dr * sr };
        steps > 0 && df == steps * sf && dr == steps * sr
    }
}

impl Cell {
    pub const fn front(self) -> Cell {
        Cell::from_parts(self.file(), self.rank().next())
    }

    pub const fn back(self) -> Cell {
        Cell::from_parts(self.file(), self.rank().prev())
    }

    pub const fn right(self) -> Cell {
        Cell::from_parts(self.file().next(), self.rank())
    }

    pub const fn left(self) -> Cell {
        Cell::from_parts(self.file().prev(), self.rank())
    }

    pub const fn front_right(self) -> Cell {
        Cell::from_parts(self.file().next(), self.rank().next())
    }

    pub const fn front_left(self) -> Cell {
        Cell::from_parts(self.file().prev(), self.rank().next())
    }

    pub const fn back_right(self) -> Cell {
        Cell::from_parts(self.file().next(), self.rank().prev())
    }

    pub const fn back_left(self) -> Cell {
        Cell::from_parts(self.file().prev(), self.rank().prev())
    }

    pub const fn step(self, dir: Direction) -> Cell {
        match dir {
            Direction::Front => self.front(),
            Direction::Back => self.back(),
            Direction::Left => self.left(),
            Direction::Right => self.right(),
            Direction::FrontLeft => self.front_left(),
            Direction::FrontRight => self.front_right(),
            Direction::BackLeft => self.back_left(),
            Direction::BackRight => self.back_right(),
        }
    }
}

/// Knight jumps: two steps in the first direction, then one in the second
pub const KNIGHT_JUMPS: [(Direction, Direction); 8] = [
    (Direction::Front, Direction::Right),
    (Direction::Front, Direction::Left),
    (Direction::Back, Direction::Right),
    (Direction::Back, Direction::Left),
    (Direction::Right, Direction::Front),
    (Direction::Right, Direction::Back),
    (Direction::Left, Direction::Front),
    (Direction::Left, Direction::Back),
];

pub const fn pawn_forward(c: Color) -> Direction {
    match c {
        Color::White => Direction::Front,
        Color::Black => Direction::Back,
    }
}

pub const fn pawn_captures(c: Color) -> [Direction; 2] {
    match c {
        Color::White => [Direction::FrontLeft, Direction::FrontRight],
        Color::Black => [Direction::BackLeft, Direction::BackRight],
    }
}

pub const fn pawn_home_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

pub const fn back_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

/// Pieces on the back rank in the starting position, from file `a` to file `h`
///
/// Black's layout mirrors White's through the center of the board, so the kings face each
/// other on the diagonal.
pub const fn back_rank_layout(c: Color) -> [PieceType; 8] {
    use PieceType::*;
    match c {
        Color::White => [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook],
        Color::Black => [Rook, Knight, Bishop, King, Queen, Bishop, Knight, Rook],
    }
}
