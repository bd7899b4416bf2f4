use crate::bitboard::{BitBoard, Direction, EMPTY};
use crate::color::{Color, NUM_COLORS};
use crate::square::{ALL_SQUARES, NUM_SQUARES};

// Given a square, what are the pawn attacks (captures)?  The two forward diagonals.
pub fn gen_pawn_attacks() -> [[BitBoard; NUM_SQUARES]; NUM_COLORS] {
    let mut pawn_attacks = [[EMPTY; NUM_SQUARES]; NUM_COLORS];
    for src in ALL_SQUARES.iter() {
        let bb = BitBoard::from_square(*src);
        pawn_attacks[Color::White.to_index()][src.to_index()] =
            bb.shift(Direction::NorthEast) | bb.shift(Direction::NorthWest);
        pawn_attacks[Color::Black.to_index()][src.to_index()] =
            bb.shift(Direction::SouthEast) | bb.shift(Direction::SouthWest);
    }
    pawn_attacks
}
