use crate::bitboard::{BitBoard, ALL_DIRECTIONS, EMPTY};
use crate::square::{ALL_SQUARES, NUM_SQUARES};

// Given a square, what are the valid king moves?  One step in each compass direction.
pub fn gen_king_moves() -> [BitBoard; NUM_SQUARES] {
    let mut king_moves = [EMPTY; NUM_SQUARES];
    for src in ALL_SQUARES.iter() {
        let bb = BitBoard::from_square(*src);
        king_moves[src.to_index()] = ALL_DIRECTIONS
            .iter()
            .fold(EMPTY, |moves, dir| moves | bb.shift(*dir));
    }
    king_moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn king_masks() {
        let masks = gen_king_moves();
        assert_eq!(masks[Square::A1.to_index()].popcnt(), 3);
        assert_eq!(masks[Square::H5.to_index()].popcnt(), 5);
        assert_eq!(masks[Square::E4.to_index()].popcnt(), 8);
        assert!(!masks[Square::E4.to_index()].is_set(Square::E4));
        assert!(masks[Square::H8.to_index()].is_set(Square::G7));
    }
}
