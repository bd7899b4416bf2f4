use crate::bitboard::{BitBoard, EMPTY};
use crate::board::Playable;
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::magic::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
};
use crate::movegen::piece_type::*;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

use arrayvec::ArrayVec;
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

/// More moves than any reachable position has, legal or pseudo-legal.
pub const MAX_MOVES: usize = 256;

/// A fixed-capacity, insertion-ordered list of moves.  Lives on the stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: ArrayVec<ChessMove, MAX_MOVES>,
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList {
            moves: ArrayVec::new(),
        }
    }

    /// Append a move.  Panics past `MAX_MOVES`.
    #[inline]
    pub fn push(&mut self, m: ChessMove) {
        self.moves.push(m);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

impl Deref for MoveList {
    type Target = [ChessMove];

    #[inline]
    fn deref(&self) -> &[ChessMove] {
        &self.moves
    }
}

impl DerefMut for MoveList {
    #[inline]
    fn deref_mut(&mut self) -> &mut [ChessMove] {
        &mut self.moves
    }
}

impl FromIterator<ChessMove> for MoveList {
    fn from_iter<I: IntoIterator<Item = ChessMove>>(iter: I) -> MoveList {
        let mut result = MoveList::new();
        for m in iter {
            result.push(m);
        }
        result
    }
}

impl IntoIterator for MoveList {
    type Item = ChessMove;
    type IntoIter = arrayvec::IntoIter<ChessMove, MAX_MOVES>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a ChessMove;
    type IntoIter = std::slice::Iter<'a, ChessMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Which moves a caller is interested in.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum MoveClass {
    /// Everything.
    All,
    /// Moves onto an enemy piece or the en-passant square.
    Captures,
    /// Neither captures nor promotions, and not giving check.
    Quiet,
}

// Piece-type order, then source square, then destination, then promotion.
fn enumerate(position: &Position, movelist: &mut MoveList) {
    PawnType::moves(position, movelist);
    KnightType::moves(position, movelist);
    BishopType::moves(position, movelist);
    RookType::moves(position, movelist);
    QueenType::moves(position, movelist);
    KingType::moves(position, movelist);
}

fn enumerate_captures(position: &Position, movelist: &mut MoveList) {
    PawnType::captures(position, movelist);
    KnightType::captures(position, movelist);
    BishopType::captures(position, movelist);
    RookType::captures(position, movelist);
    QueenType::captures(position, movelist);
    KingType::captures(position, movelist);
}

/// Every pseudo-legal move for the side to move: moves that follow the movement rules but may
/// leave the mover's own king in check.  Castling out of, or through, check is never generated.
///
/// ```
/// use chess_core::{moves, Board};
///
/// assert_eq!(moves(&Board::default()).len(), 20);
/// ```
pub fn moves<B: Playable + ?Sized>(board: &B) -> MoveList {
    let mut movelist = MoveList::new();
    enumerate(board.position(), &mut movelist);
    movelist
}

/// Every legal move for the side to move.
///
/// Each pseudo-legal move is played on `board`, kept if the mover's king is then safe, and taken
/// back.  `board` is left as it was found.
pub fn legal_moves<B: Playable + ?Sized>(board: &mut B) -> MoveList {
    let pseudo = moves(&*board);
    pseudo
        .into_iter()
        .filter(|m| leaves_king_safe(&mut *board, *m))
        .collect()
}

/// Pseudo-legal moves onto an enemy piece, or a pawn onto the en-passant square.  Not checked
/// for legality.
pub fn capture_moves<B: Playable + ?Sized>(board: &B) -> MoveList {
    let mut movelist = MoveList::new();
    enumerate_captures(board.position(), &mut movelist);
    movelist
}

/// Keep the members of `moves` that belong to `class`, in order.  Deciding whether a move is
/// quiet plays it on `board` and takes it back.
pub fn filter_moves<B: Playable + ?Sized>(
    moves: &MoveList,
    class: MoveClass,
    board: &mut B,
) -> MoveList {
    match class {
        MoveClass::All => moves.clone(),
        MoveClass::Captures => moves
            .iter()
            .copied()
            .filter(|m| m.is_capture(board.position()))
            .collect(),
        MoveClass::Quiet => moves
            .iter()
            .copied()
            .filter(|m| {
                !m.is_capture(board.position())
                    && m.get_promotion().is_none()
                    && !gives_check(&mut *board, *m)
            })
            .collect(),
    }
}

/// Does playing `m` keep the mover's king out of check?
#[inline]
pub fn leaves_king_safe<B: Playable + ?Sized>(board: &mut B, m: ChessMove) -> bool {
    let mover = board.position().side_to_move();
    board.make_move(m);
    let safe = !king_in_check(mover, board.position());
    board.undo_move();
    safe
}

/// Does playing `m` put the opponent in check?
#[inline]
pub fn gives_check<B: Playable + ?Sized>(board: &mut B, m: ChessMove) -> bool {
    let mover = board.position().side_to_move();
    board.make_move(m);
    let check = king_in_check(!mover, board.position());
    board.undo_move();
    check
}

/// Is `sq` attacked by any piece of color `attacker`?
pub fn is_square_attacked(sq: Square, attacker: Color, position: &Position) -> bool {
    let combined = position.combined();
    let queens = position.pieces(Piece::Queen, attacker);

    get_pawn_attacks(sq, !attacker) & position.pieces(Piece::Pawn, attacker) != EMPTY
        || get_knight_moves(sq) & position.pieces(Piece::Knight, attacker) != EMPTY
        || get_king_moves(sq) & position.pieces(Piece::King, attacker) != EMPTY
        || get_bishop_moves(sq, combined) & (position.pieces(Piece::Bishop, attacker) | queens)
            != EMPTY
        || get_rook_moves(sq, combined) & (position.pieces(Piece::Rook, attacker) | queens)
            != EMPTY
}

/// Is `color`'s king attacked?
#[inline]
pub fn king_in_check(color: Color, position: &Position) -> bool {
    is_square_attacked(position.king_square(color), !color, position)
}

fn attacks_of<T: PieceType>(position: &Position, color: Color) -> BitBoard {
    let combined = position.combined();
    position
        .pieces(T::into_piece(), color)
        .fold(EMPTY, |acc, src| acc | T::attacks(src, color, combined))
}

/// Every square attacked by a piece of `color`.  The king's own attacks are only added when
/// `include_king` is set.
pub fn attacked_squares(position: &Position, color: Color, include_king: bool) -> BitBoard {
    let mut result = attacks_of::<PawnType>(position, color)
        | attacks_of::<KnightType>(position, color)
        | attacks_of::<BishopType>(position, color)
        | attacks_of::<RookType>(position, color)
        | attacks_of::<QueenType>(position, color);
    if include_king {
        result |= attacks_of::<KingType>(position, color);
    }
    result
}
