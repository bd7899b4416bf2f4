//! # Chess Move Generation and Ordering
//!
//! The parts of a chess engine that run at every node of a search: a compact move type,
//! bitboard attack tables, pseudo-legal and legal move generation, and a move orderer driven by
//! killer, counter-move and history heuristics.
//!
//! Legality is decided by playing each candidate on a `Playable` board and taking it back, so
//! any board that can make and unmake moves can be plugged in.  `Board` is the one provided.
//!
//! ## Example
//!
//! ```
//! use chess_core::{initialize_attacks, legal_moves, Board, MoveClass, MoveOrderer, Playable,
//!                  SearchHeuristics};
//!
//! initialize_attacks();
//!
//! let mut board = Board::default();
//! let moves = legal_moves(&mut board);
//! assert_eq!(moves.len(), 20);
//!
//! let mut heuristics = SearchHeuristics::new();
//! let mut orderer = MoveOrderer::new(&board, moves, MoveClass::All, 0, None, &heuristics);
//! let first = orderer.get_move(0);
//!
//! board.make_move(first);
//! // ... search ...
//! board.undo_move();
//! heuristics.update_killer(first, 0);
//! ```
//!

mod board;
pub use crate::board::*;

mod bitboard;
pub use crate::bitboard::*;

mod castle_rights;
pub use crate::castle_rights::*;

mod chess_move;
pub use crate::chess_move::*;

mod color;
pub use crate::color::*;

mod construct;
pub use crate::construct::*;

mod error;
pub use crate::error::*;

mod file;
pub use crate::file::*;

mod gen_tables;

mod heuristics;
pub use crate::heuristics::*;

mod magic;
pub use crate::magic::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
    slider_attacks,
};

mod move_orderer;
pub use crate::move_orderer::*;

mod movegen;
pub use crate::movegen::*;

mod piece;
pub use crate::piece::*;

mod position;
pub use crate::position::*;

mod rank;
pub use crate::rank::*;

mod square;
pub use crate::square::*;
