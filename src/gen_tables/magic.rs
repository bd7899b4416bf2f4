use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::bitboard::{BitBoard, EMPTY};
use crate::gen_tables::magic_helpers::{magic_mask, questions_and_answers, random_bitboard};
use crate::piece::Piece;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};

// Fixed, so every process hashes the same way.
const MAGIC_SEED: u64 = 0x00c0_ffee_b175_5eed;

// Sum of 2^(relevant blockers) over every square: 102400 for rooks, 5248 for bishops.
pub const NUM_MOVES: usize = 102_400 + 5_248;

const ROOK: usize = 0;
const BISHOP: usize = 1;

// This structure is for the "Magic Bitboard" lookup: the moves for a slider on a square live at
// MOVES[offset + ((blockers & mask) * magic_number) >> rightshift].
#[derive(Copy, Clone, Debug, Default)]
pub struct Magic {
    pub magic_number: BitBoard,
    pub mask: BitBoard,
    pub offset: u32,
    pub rightshift: u8,
}

/// Per-square magics for rooks and bishops, and the shared attack table they index.
pub struct MagicTables {
    magics: [[Magic; NUM_SQUARES]; 2],
    moves: Vec<BitBoard>,
}

#[inline]
fn slider_index(piece: Piece) -> usize {
    debug_assert!(piece == Piece::Rook || piece == Piece::Bishop);
    if piece == Piece::Rook {
        ROOK
    } else {
        BISHOP
    }
}

impl MagicTables {
    /// The squares a rook or bishop on `sq` attacks, given every occupied square in `blockers`.
    #[inline]
    pub fn attacks(&self, piece: Piece, sq: Square, blockers: BitBoard) -> BitBoard {
        let magic = &self.magics[slider_index(piece)][sq.to_index()];
        self.moves[(magic.offset as usize)
            + (magic.magic_number * (blockers & magic.mask)).to_size(magic.rightshift)]
    }

    /// How many attack sets are stored.
    pub fn len(&self) -> usize {
        self.moves.len()
    }
}

// Find a perfect hashing function for the move generation for a particular square and piece type
// Append the resulting move array to `moves`, and return the magic that indexes it.
fn generate_magic<R: Rng>(
    sq: Square,
    piece: Piece,
    rng: &mut R,
    moves: &mut Vec<BitBoard>,
) -> Magic {
    let (questions, answers) = questions_and_answers(sq, piece);
    let mask = magic_mask(sq, piece);
    debug_assert_eq!(questions.len(), 1 << mask.popcnt());

    let mut new_magic = Magic {
        magic_number: EMPTY,
        mask: mask,
        offset: moves.len() as u32,
        rightshift: (64 - mask.popcnt()) as u8,
    };

    // `stamp[j] == tries` marks slot j as written during the current attempt, so the scratch
    // table never has to be cleared.
    let mut new_answers = vec![EMPTY; questions.len()];
    let mut stamp = vec![0u32; questions.len()];
    let mut tries = 0u32;

    loop {
        tries += 1;
        let magic_bitboard = random_bitboard(rng);

        // Too few high bits and the hash cannot spread the index range.
        if BitBoard((mask * magic_bitboard).0 & 0xff00_0000_0000_0000).popcnt() < 6 {
            continue;
        }

        let mut done = true;
        for (question, answer) in questions.iter().zip(answers.iter()) {
            let j = (magic_bitboard * *question).to_size(new_magic.rightshift);
            if stamp[j] != tries {
                stamp[j] = tries;
                new_answers[j] = *answer;
            } else if new_answers[j] != *answer {
                done = false;
                break;
            }
        }

        if done {
            new_magic.magic_number = magic_bitboard;
            break;
        }
    }

    trace!("{:?} magic for {} found after {} tries", piece, sq, tries);

    // Slots no blocker set hashes to are never read.
    for (j, answer) in new_answers.iter_mut().enumerate() {
        if stamp[j] != tries {
            *answer = EMPTY;
        }
    }
    moves.extend_from_slice(&new_answers);
    new_magic
}

// Generate the magic each square for both rooks and bishops.
pub fn gen_all_magic() -> MagicTables {
    let mut rng = SmallRng::seed_from_u64(MAGIC_SEED);
    let mut tables = MagicTables {
        magics: [[Magic::default(); NUM_SQUARES]; 2],
        moves: Vec::with_capacity(NUM_MOVES),
    };

    for piece in [Piece::Rook, Piece::Bishop].iter() {
        for sq in ALL_SQUARES.iter() {
            let magic = generate_magic(*sq, *piece, &mut rng, &mut tables.moves);
            tables.magics[slider_index(*piece)][sq.to_index()] = magic;
        }
    }

    debug!("built slider magic tables with {} entries", tables.moves.len());
    tables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen_tables::rays::slide;

    #[test]
    fn tables_are_compact() {
        let _ = env_logger::builder().is_test(true).try_init();
        let tables = gen_all_magic();
        assert_eq!(tables.len(), NUM_MOVES);
        assert_eq!(tables.magics[ROOK][Square::A1.to_index()].rightshift, 64 - 12);
        assert_eq!(tables.magics[BISHOP][Square::E4.to_index()].rightshift, 64 - 9);
    }

    #[test]
    fn magic_lookups_agree_with_sliding() {
        let tables = gen_all_magic();
        let blockers = [
            EMPTY,
            BitBoard(0x0000_0010_0420_8000),
            BitBoard(0x00ff_0000_0000_ff00),
            BitBoard(0x8142_2418_1824_4281),
            !EMPTY,
        ];
        for piece in [Piece::Rook, Piece::Bishop].iter() {
            for sq in ALL_SQUARES.iter() {
                for b in blockers.iter() {
                    assert_eq!(
                        tables.attacks(*piece, *sq, *b),
                        slide(*sq, *piece, *b),
                        "{:?} on {} with\n{}",
                        piece,
                        sq,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn magics_are_deterministic() {
        let a = gen_all_magic();
        let b = gen_all_magic();
        for sq in ALL_SQUARES.iter() {
            for slider in [ROOK, BISHOP].iter() {
                assert_eq!(
                    a.magics[*slider][sq.to_index()].magic_number,
                    b.magics[*slider][sq.to_index()].magic_number
                );
            }
        }
    }
}
