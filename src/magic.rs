use crate::bitboard::{BitBoard, EMPTY};
use crate::color::{Color, NUM_COLORS};
use crate::gen_tables::{
    gen_all_magic, gen_king_moves, gen_knight_moves, gen_pawn_attacks, MagicTables,
};
use crate::piece::Piece;
use crate::square::{Square, NUM_SQUARES};
use lazy_static::lazy_static;

// Attack masks for the pieces whose moves do not depend on occupancy.
struct Leapers {
    knight: [BitBoard; NUM_SQUARES],
    king: [BitBoard; NUM_SQUARES],
    pawn_attacks: [[BitBoard; NUM_SQUARES]; NUM_COLORS],
}

lazy_static! {
    static ref LEAPERS: Leapers = Leapers {
        knight: gen_knight_moves(),
        king: gen_king_moves(),
        pawn_attacks: gen_pawn_attacks(),
    };
    static ref SLIDERS: MagicTables = gen_all_magic();
}

// Force both tables.  Returns the number of slider attack sets built.
pub(crate) fn initialize_tables() -> usize {
    lazy_static::initialize(&LEAPERS);
    lazy_static::initialize(&SLIDERS);
    SLIDERS.len()
}

/// Get the knight moves for a particular square.
#[inline]
pub fn get_knight_moves(sq: Square) -> BitBoard {
    LEAPERS.knight[sq.to_index()]
}

/// Get the king moves for a particular square.
#[inline]
pub fn get_king_moves(sq: Square) -> BitBoard {
    LEAPERS.king[sq.to_index()]
}

/// Get the squares a pawn of `color` on `sq` attacks, whether or not anything stands there.
#[inline]
pub fn get_pawn_attacks(sq: Square, color: Color) -> BitBoard {
    LEAPERS.pawn_attacks[color.to_index()][sq.to_index()]
}

/// Get the moves for a bishop on a particular square, given blockers blocking my movement.
/// The first blocker in each direction is included, whichever side it belongs to.
#[inline]
pub fn get_bishop_moves(sq: Square, blockers: BitBoard) -> BitBoard {
    SLIDERS.attacks(Piece::Bishop, sq, blockers)
}

/// Get the moves for a rook on a particular square, given blockers blocking my movement.
#[inline]
pub fn get_rook_moves(sq: Square, blockers: BitBoard) -> BitBoard {
    SLIDERS.attacks(Piece::Rook, sq, blockers)
}

/// The attack set of a sliding piece, or `EMPTY` for a piece that does not slide.
///
/// ```
/// use chess_core::{get_bishop_moves, get_rook_moves, slider_attacks, Piece, Square, EMPTY};
///
/// let queen = slider_attacks(Piece::Queen, Square::D4, EMPTY);
/// assert_eq!(queen, get_rook_moves(Square::D4, EMPTY) | get_bishop_moves(Square::D4, EMPTY));
/// assert_eq!(queen.popcnt(), 27);
/// assert_eq!(slider_attacks(Piece::Knight, Square::D4, EMPTY), EMPTY);
/// ```
#[inline]
pub fn slider_attacks(piece: Piece, sq: Square, blockers: BitBoard) -> BitBoard {
    match piece {
        Piece::Bishop => get_bishop_moves(sq, blockers),
        Piece::Rook => get_rook_moves(sq, blockers),
        Piece::Queen => get_bishop_moves(sq, blockers) | get_rook_moves(sq, blockers),
        _ => EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bb(squares: &[Square]) -> BitBoard {
        squares
            .iter()
            .fold(EMPTY, |acc, sq| acc | BitBoard::from_square(*sq))
    }

    #[test]
    fn knight_in_the_corner() {
        assert_eq!(get_knight_moves(Square::A1), bb(&[Square::B3, Square::C2]));
        assert_eq!(get_knight_moves(Square::D4).popcnt(), 8);
    }

    #[test]
    fn king_on_the_edge() {
        assert_eq!(get_king_moves(Square::H1).popcnt(), 3);
        assert_eq!(get_king_moves(Square::E1).popcnt(), 5);
        assert_eq!(get_king_moves(Square::E4).popcnt(), 8);
    }

    #[test]
    fn pawn_attacks_point_forward() {
        assert_eq!(get_pawn_attacks(Square::E4, Color::White), bb(&[Square::D5, Square::F5]));
        assert_eq!(get_pawn_attacks(Square::E4, Color::Black), bb(&[Square::D3, Square::F3]));
        assert_eq!(get_pawn_attacks(Square::A2, Color::White), bb(&[Square::B3]));
        assert_eq!(get_pawn_attacks(Square::H8, Color::White), EMPTY);
    }

    #[test]
    fn rook_stops_at_blockers() {
        let blockers = bb(&[Square::D6, Square::B4, Square::D2]);
        let expected = bb(&[
            Square::D5,
            Square::D6,
            Square::C4,
            Square::B4,
            Square::E4,
            Square::F4,
            Square::G4,
            Square::H4,
            Square::D3,
            Square::D2,
        ]);
        assert_eq!(get_rook_moves(Square::D4, blockers), expected);
    }

    #[test]
    fn bishop_stops_at_blockers() {
        let blockers = bb(&[Square::F6, Square::B2]);
        let expected = bb(&[
            Square::E5,
            Square::F6,
            Square::C5,
            Square::B6,
            Square::A7,
            Square::E3,
            Square::F2,
            Square::G1,
            Square::C3,
            Square::B2,
        ]);
        assert_eq!(get_bishop_moves(Square::D4, blockers), expected);
    }

    #[test]
    fn irrelevant_blockers_are_ignored() {
        let far = bb(&[Square::A1, Square::H1, Square::A8, Square::H8]);
        assert_eq!(get_rook_moves(Square::E4, far), get_rook_moves(Square::E4, EMPTY));
        assert_eq!(
            get_bishop_moves(Square::E4, bb(&[Square::E5])),
            get_bishop_moves(Square::E4, EMPTY)
        );
    }
}
