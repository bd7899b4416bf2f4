use crate::bitboard::{BitBoard, Direction, EMPTY};
use crate::piece::Piece;
use crate::square::Square;

const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

const BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

// Which way does a rook or a bishop slide?
pub fn slider_directions(piece: Piece) -> &'static [Direction; 4] {
    debug_assert!(piece == Piece::Rook || piece == Piece::Bishop);
    if piece == Piece::Rook {
        &ROOK_DIRECTIONS
    } else {
        &BISHOP_DIRECTIONS
    }
}

// Slide from `sq` in every direction of `piece`, stopping on (and including) the first square
// found in `blockers`.
pub fn slide(sq: Square, piece: Piece, blockers: BitBoard) -> BitBoard {
    let mut attacks = EMPTY;
    for dir in slider_directions(piece).iter() {
        let mut next = BitBoard::from_square(sq).shift(*dir);
        while next != EMPTY {
            attacks |= next;
            if next & blockers != EMPTY {
                break;
            }
            next = next.shift(*dir);
        }
    }
    attacks
}

// Given a square and a piece type (rook or bishop only), what are the squares they
// would attack if no pieces were on the board?
pub fn get_rays(sq: Square, piece: Piece) -> BitBoard {
    slide(sq, piece, EMPTY)
}
