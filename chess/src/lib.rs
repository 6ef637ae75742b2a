//! # tchess
//!
//! Two-player chess board for text-mode games. The crate keeps the position on a [`Board`]
//! together with the history of moves, decides whether a single move is legal with
//! [`legal::piece_can_move()`], and tracks turns in a [`Game`].
//!
//! Only the geometry of moves and the occupancy of cells are checked. Checks, checkmates,
//! castling, en passant and promotions are not supported.
//!
//! # Example
//!
//! ```
//! use tchess::{legal, Board, Cell};
//!
//! let mut board = Board::initial();
//! let (from, to): (Cell, Cell) = ("e2".parse().unwrap(), "e4".parse().unwrap());
//! assert!(legal::piece_can_move(from, to, &board));
//!
//! board.move_piece(from, to);
//! assert_eq!(board.moves_number(), 1);
//!
//! assert!(board.undo_move());
//! assert!(!board.undo_move());
//! ```

pub use tchess_base::{geometry, types};

pub mod board;
pub mod game;
pub mod legal;
pub mod pool;
pub mod sweep;

pub use board::{Board, Move};
pub use game::{Game, MoveError, Score, UndoError};
pub use pool::{PieceId, PiecePool};
pub use types::{Cell, CellParseError, Color, File, Occupant, Piece, PieceType, Rank};
