use crate::bitboard::{BitBoard, EMPTY};
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::file::File;
use crate::movegen::{is_square_attacked, MoveList};
use crate::piece::{Piece, PROMOTION_PIECES};
use crate::position::Position;
use crate::rank::Rank;
use crate::square::Square;

use crate::magic::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
};

/// Per-piece move generation.  Each piece type knows what it attacks; the provided methods turn
/// that into moves for the side to move.
pub trait PieceType {
    fn into_piece() -> Piece;

    /// Every square a piece of this type and color on `src` attacks, given the occupancy.
    fn attacks(src: Square, color: Color, combined: BitBoard) -> BitBoard;

    #[inline(always)]
    fn pseudo_legals(src: Square, position: &Position) -> BitBoard {
        let color = position.side_to_move();
        Self::attacks(src, color, position.combined()) & !position.color_combined(color)
    }

    #[inline(always)]
    fn push_moves(src: Square, dests: BitBoard, movelist: &mut MoveList) {
        for dest in dests {
            movelist.push(ChessMove::new(src, dest, None));
        }
    }

    /// Squares a capture by this piece type may land on.
    #[inline(always)]
    fn capture_targets(position: &Position) -> BitBoard {
        position.color_combined(!position.side_to_move())
    }

    #[inline(always)]
    fn generate(position: &Position, mask: BitBoard, movelist: &mut MoveList) {
        let pieces = position.pieces(Self::into_piece(), position.side_to_move());
        for src in pieces {
            let dests = Self::pseudo_legals(src, position) & mask;
            if dests != EMPTY {
                Self::push_moves(src, dests, movelist);
            }
        }
    }

    fn moves(position: &Position, movelist: &mut MoveList) {
        Self::generate(position, !EMPTY, movelist);
    }

    fn captures(position: &Position, movelist: &mut MoveList) {
        Self::generate(position, Self::capture_targets(position), movelist);
    }
}

pub struct PawnType;
pub struct BishopType;
pub struct KnightType;
pub struct RookType;
pub struct QueenType;
pub struct KingType;

impl PawnType {
    /// One or two steps straight ahead, stopping at the first occupied square.
    #[inline(always)]
    pub fn pushes(src: Square, color: Color, combined: BitBoard) -> BitBoard {
        let mut result = EMPTY;
        if let Some(one) = src.forward(color) {
            if !combined.is_set(one) {
                result.set_bit(one);
                if src.get_rank() == color.to_second_rank() {
                    if let Some(two) = one.forward(color) {
                        if !combined.is_set(two) {
                            result.set_bit(two);
                        }
                    }
                }
            }
        }
        result
    }
}

impl PieceType for PawnType {
    fn into_piece() -> Piece {
        Piece::Pawn
    }

    #[inline(always)]
    fn attacks(src: Square, color: Color, _combined: BitBoard) -> BitBoard {
        get_pawn_attacks(src, color)
    }

    #[inline(always)]
    fn pseudo_legals(src: Square, position: &Position) -> BitBoard {
        let color = position.side_to_move();
        let combined = position.combined();
        PawnType::pushes(src, color, combined)
            | (Self::attacks(src, color, combined) & Self::capture_targets(position))
    }

    // A pawn reaching the last rank is four moves, never a plain one.
    #[inline(always)]
    fn push_moves(src: Square, dests: BitBoard, movelist: &mut MoveList) {
        for dest in dests {
            let rank = dest.get_rank();
            if rank == Rank::First || rank == Rank::Eighth {
                for promotion in PROMOTION_PIECES.iter() {
                    movelist.push(ChessMove::new(src, dest, Some(*promotion)));
                }
            } else {
                movelist.push(ChessMove::new(src, dest, None));
            }
        }
    }

    #[inline(always)]
    fn capture_targets(position: &Position) -> BitBoard {
        position.color_combined(!position.side_to_move())
            | BitBoard::from_maybe_square(position.en_passant())
    }
}

impl PieceType for KnightType {
    fn into_piece() -> Piece {
        Piece::Knight
    }

    #[inline(always)]
    fn attacks(src: Square, _color: Color, _combined: BitBoard) -> BitBoard {
        get_knight_moves(src)
    }
}

impl PieceType for BishopType {
    fn into_piece() -> Piece {
        Piece::Bishop
    }

    #[inline(always)]
    fn attacks(src: Square, _color: Color, combined: BitBoard) -> BitBoard {
        get_bishop_moves(src, combined)
    }
}

impl PieceType for RookType {
    fn into_piece() -> Piece {
        Piece::Rook
    }

    #[inline(always)]
    fn attacks(src: Square, _color: Color, combined: BitBoard) -> BitBoard {
        get_rook_moves(src, combined)
    }
}

impl PieceType for QueenType {
    fn into_piece() -> Piece {
        Piece::Queen
    }

    #[inline(always)]
    fn attacks(src: Square, _color: Color, combined: BitBoard) -> BitBoard {
        get_rook_moves(src, combined) | get_bishop_moves(src, combined)
    }
}

impl KingType {
    /// The castling destinations open to the side to move, whose king stands on `ksq`.
    ///
    /// We can castle iff:
    ///  * the `Position` says we still have the right.
    ///  * the king is not in check.
    ///  * the squares the king passes over and lands on are empty and not attacked.
    ///  * on the queenside, the square next to the rook is empty too.
    pub fn castles(ksq: Square, position: &Position) -> BitBoard {
        let color = position.side_to_move();
        let rights = position.castle_rights();
        if !rights.has_any(color) {
            return EMPTY;
        }

        let backrank = color.to_my_backrank();
        debug_assert_eq!(ksq, Square::make_square(backrank, File::E));
        if is_square_attacked(ksq, !color, position) {
            return EMPTY;
        }

        let combined = position.combined();
        let empty = |file: File| !combined.is_set(Square::make_square(backrank, file));
        let safe = |file: File| {
            !is_square_attacked(Square::make_square(backrank, file), !color, position)
        };

        let mut result = EMPTY;
        if rights.has_kingside(color)
            && empty(File::F)
            && empty(File::G)
            && safe(File::F)
            && safe(File::G)
        {
            result |= BitBoard::set(backrank, File::G);
        }
        if rights.has_queenside(color)
            && empty(File::D)
            && empty(File::C)
            && empty(File::B)
            && safe(File::D)
            && safe(File::C)
        {
            result |= BitBoard::set(backrank, File::C);
        }
        result
    }
}

impl PieceType for KingType {
    fn into_piece() -> Piece {
        Piece::King
    }

    #[inline(always)]
    fn attacks(src: Square, _color: Color, _combined: BitBoard) -> BitBoard {
        get_king_moves(src)
    }

    #[inline(always)]
    fn pseudo_legals(src: Square, position: &Position) -> BitBoard {
        let color = position.side_to_move();
        (Self::attacks(src, color, position.combined()) & !position.color_combined(color))
            | KingType::castles(src, position)
    }
}
