//! Arena of piece identities

use crate::types::{Color, Piece, PieceType};

use derive_more::{Display, Into};

/// Stable handle to a piece owned by a [`PiecePool`]
///
/// Two handles are equal only if they refer to the same piece identity, even if the pieces
/// have the same color and type.
#[derive(Debug, Display, Into, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "#{}", _0)]
pub struct PieceId(u32);

impl PieceId {
    #[inline]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Owner of all the pieces created during a game
///
/// Pieces are never removed from the pool. Taking a piece off the board only drops the
/// board's handle to it, so the same identity can be put back later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PiecePool {
    pieces: Vec<Piece>,
}

impl PiecePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new piece identity and returns its handle
    pub fn make(&mut self, color: Color, piece_type: PieceType) -> PieceId {
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push(Piece::new(color, piece_type));
        id
    }

    /// Returns the piece behind `id`, or `None` if `id` was not issued by this pool
    #[inline]
    pub fn get(&self, id: PieceId) -> Option<Piece> {
        self.pieces.get(id.index()).copied()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PieceId, Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, p)| (PieceId(i as u32), *p))
    }
}
