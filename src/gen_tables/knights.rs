use crate::bitboard::{BitBoard, EMPTY, FILE_A, FILE_B, FILE_G, FILE_H};
use crate::square::{ALL_SQUARES, NUM_SQUARES};

// Given a square, what are the valid knight moves?
// Each of the eight jumps is a raw shift, after dropping the source if the jump would carry it
// off the A/B or G/H edge.
pub fn gen_knight_moves() -> [BitBoard; NUM_SQUARES] {
    let mut knight_moves = [EMPTY; NUM_SQUARES];
    for src in ALL_SQUARES.iter() {
        let bb = BitBoard::from_square(*src);

        knight_moves[src.to_index()] = ((bb & !FILE_H) << 17)
            | ((bb & !(FILE_G | FILE_H)) << 10)
            | ((bb & !(FILE_G | FILE_H)) >> 6)
            | ((bb & !FILE_H) >> 15)
            | ((bb & !FILE_A) << 15)
            | ((bb & !(FILE_A | FILE_B)) << 6)
            | ((bb & !(FILE_A | FILE_B)) >> 10)
            | ((bb & !FILE_A) >> 17);
    }
    knight_moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    // Same answer, computed the slow way: any square a (1, 2) or (2, 1) step away.
    fn knight_moves_by_distance(src: Square) -> BitBoard {
        ALL_SQUARES
            .iter()
            .filter(|dest| {
                let src_rank = src.get_rank().to_index() as i8;
                let src_file = src.get_file().to_index() as i8;
                let dest_rank = dest.get_rank().to_index() as i8;
                let dest_file = dest.get_file().to_index() as i8;

                ((src_rank - dest_rank).abs() == 2 && (src_file - dest_file).abs() == 1)
                    || ((src_rank - dest_rank).abs() == 1 && (src_file - dest_file).abs() == 2)
            })
            .fold(EMPTY, |b, s| b | BitBoard::from_square(*s))
    }

    #[test]
    fn knight_masks_match_distance_rule() {
        let masks = gen_knight_moves();
        for sq in ALL_SQUARES.iter() {
            assert_eq!(masks[sq.to_index()], knight_moves_by_distance(*sq), "{}", sq);
        }
        assert_eq!(masks[Square::A1.to_index()].popcnt(), 2);
        assert_eq!(masks[Square::D4.to_index()].popcnt(), 8);
    }
}
