use crate::bitboard::{BitBoard, Direction, EMPTY, FILE_A, FILE_H, RANK_1, RANK_8};
use crate::gen_tables::rays::{get_rays, slide, slider_directions};
use crate::piece::Piece;
use crate::square::Square;
use rand::Rng;

// Generate a random bitboard with a small number of bits.
pub fn random_bitboard<R: Rng>(rng: &mut R) -> BitBoard {
    BitBoard::new(rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>())
}

// Given a square and the type of piece, lookup the RAYS and remove the endpoint squares.
// A blocker on the last square of a ray never changes the attack set, so it is left out of the
// hash.
pub fn magic_mask(sq: Square, piece: Piece) -> BitBoard {
    slider_directions(piece).iter().fold(EMPTY, |mask, dir| {
        let edge = match *dir {
            Direction::North => RANK_8,
            Direction::South => RANK_1,
            Direction::East => FILE_H,
            Direction::West => FILE_A,
            Direction::NorthEast => RANK_8 | FILE_H,
            Direction::NorthWest => RANK_8 | FILE_A,
            Direction::SouthEast => RANK_1 | FILE_H,
            Direction::SouthWest => RANK_1 | FILE_A,
        };
        mask | (ray_towards(sq, *dir) & !edge)
    })
}

// The part of the empty-board ray that leaves `sq` in one direction.
fn ray_towards(sq: Square, dir: Direction) -> BitBoard {
    let mut ray = EMPTY;
    let mut next = BitBoard::from_square(sq).shift(dir);
    while next != EMPTY {
        ray |= next;
        next = next.shift(dir);
    }
    ray
}

// Given a bitboard, generate a list of every possible set of bitboards using those bits.
// AKA, if 'n' bits are set, generate 2^n bitboards where b1|b2|b3|...b(2^n) == mask
fn rays_to_questions(mask: BitBoard) -> Vec<BitBoard> {
    let mut result = Vec::with_capacity(1 << mask.popcnt());

    // Carry-Rippler: walk every subset of `mask`, starting and ending with the empty set.
    let mut current = EMPTY;
    loop {
        result.push(current);
        current = BitBoard(current.0.wrapping_sub(mask.0) & mask.0);
        if current == EMPTY {
            break;
        }
    }

    result
}

// Generate all the possible combinations of blocking pieces for the rook/bishop, and then
// generate all possible moves for each set of blocking pieces.
pub fn questions_and_answers(sq: Square, piece: Piece) -> (Vec<BitBoard>, Vec<BitBoard>) {
    let questions = rays_to_questions(magic_mask(sq, piece));
    let answers = questions
        .iter()
        .map(|question| slide(sq, piece, *question))
        .collect::<Vec<_>>();

    debug_assert_eq!(answers.iter().fold(EMPTY, |b, n| b | *n), get_rays(sq, piece));

    (questions, answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_drop_the_edges() {
        assert_eq!(magic_mask(Square::A1, Piece::Rook).popcnt(), 12);
        assert_eq!(magic_mask(Square::E4, Piece::Rook).popcnt(), 10);
        assert_eq!(magic_mask(Square::D4, Piece::Bishop).popcnt(), 9);
        assert_eq!(magic_mask(Square::A1, Piece::Bishop).popcnt(), 6);
        assert!(!magic_mask(Square::A1, Piece::Rook).is_set(Square::A8));
        assert!(magic_mask(Square::A1, Piece::Rook).is_set(Square::A7));
    }

    #[test]
    fn one_question_per_subset() {
        let mask = magic_mask(Square::D4, Piece::Bishop);
        let (questions, answers) = questions_and_answers(Square::D4, Piece::Bishop);
        assert_eq!(questions.len(), 1 << mask.popcnt());
        assert_eq!(questions.len(), answers.len());
        assert_eq!(questions.iter().fold(EMPTY, |b, n| b | *n), mask);
    }
}
