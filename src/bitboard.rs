use crate::file::File;
use crate::rank::Rank;
use crate::square::*;
use std::fmt;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul, Not, Shl, Shr,
};

/// A good old-fashioned bitboard
/// You *do* have access to the actual value, but you are probably better off
/// using the implemented operators to work with this object.
///
/// ```
/// use chess_core::{BitBoard, Square};
///
/// let bb = BitBoard(7); // lower-left 3 squares
///
/// let mut count = 0;
///
/// // Iterate over each square in the bitboard
/// for _ in bb {
///     count += 1;
/// }
///
/// assert_eq!(count, 3);
/// ```
///
#[derive(PartialEq, Eq, PartialOrd, Clone, Copy, Debug, Default, Hash)]
pub struct BitBoard(pub u64);

/// An empty bitboard.  It is sometimes useful to use !EMPTY to get the universe of squares.
///
/// ```
///     use chess_core::EMPTY;
///
///     assert_eq!(EMPTY.popcnt(), 0);
///
///     assert_eq!((!EMPTY).popcnt(), 64);
/// ```
pub const EMPTY: BitBoard = BitBoard(0);

/// Every square on the A file.
pub const FILE_A: BitBoard = BitBoard(0x0101_0101_0101_0101);
/// Every square on the B file.
pub const FILE_B: BitBoard = BitBoard(0x0202_0202_0202_0202);
/// Every square on the G file.
pub const FILE_G: BitBoard = BitBoard(0x4040_4040_4040_4040);
/// Every square on the H file.
pub const FILE_H: BitBoard = BitBoard(0x8080_8080_8080_8080);
/// Every square on the first rank.
pub const RANK_1: BitBoard = BitBoard(0x0000_0000_0000_00ff);
/// Every square on the eighth rank.
pub const RANK_8: BitBoard = BitBoard(0xff00_0000_0000_0000);

/// The eight compass directions a bitboard can be shifted in.  North is towards rank 8, east is
/// towards the H file.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Every direction, orthogonal ones first.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

// Implement a binary operator for every combination of owned and borrowed operands.
macro_rules! impl_bitboard_op {
    ($trait:ident, $method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl $trait for BitBoard {
            type Output = BitBoard;

            #[inline]
            fn $method(self, other: BitBoard) -> BitBoard {
                let ($a, $b) = (self.0, other.0);
                BitBoard($body)
            }
        }

        impl $trait for &BitBoard {
            type Output = BitBoard;

            #[inline]
            fn $method(self, other: &BitBoard) -> BitBoard {
                (*self).$method(*other)
            }
        }

        impl $trait<&BitBoard> for BitBoard {
            type Output = BitBoard;

            #[inline]
            fn $method(self, other: &BitBoard) -> BitBoard {
                self.$method(*other)
            }
        }

        impl $trait<BitBoard> for &BitBoard {
            type Output = BitBoard;

            #[inline]
            fn $method(self, other: BitBoard) -> BitBoard {
                (*self).$method(other)
            }
        }
    };
}

macro_rules! impl_bitboard_assign_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for BitBoard {
            #[inline]
            fn $method(&mut self, other: BitBoard) {
                self.0 $op other.0;
            }
        }

        impl $trait<&BitBoard> for BitBoard {
            #[inline]
            fn $method(&mut self, other: &BitBoard) {
                self.0 $op other.0;
            }
        }
    };
}

impl_bitboard_op!(BitAnd, bitand, |a, b| a & b);
impl_bitboard_op!(BitOr, bitor, |a, b| a | b);
impl_bitboard_op!(BitXor, bitxor, |a, b| a ^ b);
impl_bitboard_op!(Mul, mul, |a, b| a.wrapping_mul(b));

impl_bitboard_assign_op!(BitAndAssign, bitand_assign, &=);
impl_bitboard_assign_op!(BitOrAssign, bitor_assign, |=);
impl_bitboard_assign_op!(BitXorAssign, bitxor_assign, ^=);

impl Not for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn not(self) -> BitBoard {
        BitBoard(!self.0)
    }
}

impl Not for &BitBoard {
    type Output = BitBoard;

    #[inline]
    fn not(self) -> BitBoard {
        BitBoard(!self.0)
    }
}

/// Raw shift towards higher squares.  Bits shifted past H8 are lost, but nothing stops a square
/// on the H file from wrapping onto the A file; use `shift` for that.
impl Shl<u32> for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn shl(self, bits: u32) -> BitBoard {
        BitBoard(self.0 << bits)
    }
}

/// Raw shift towards lower squares.  See the `Shl` caveat.
impl Shr<u32> for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn shr(self, bits: u32) -> BitBoard {
        BitBoard(self.0 >> bits)
    }
}

impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s: String = "".to_owned();
        for rank in (0..8).rev() {
            for file in 0..8 {
                if self.is_set(Square::new(rank * 8 + file)) {
                    s.push_str("X ");
                } else {
                    s.push_str(". ");
                }
            }
            s.push_str("\n");
        }
        write!(f, "{}", s)
    }
}

impl BitBoard {
    /// Construct a new bitboard from a u64
    #[inline]
    pub fn new(b: u64) -> BitBoard {
        BitBoard(b)
    }

    /// Construct a new `BitBoard` with a particular `Square` set
    #[inline]
    pub fn set(rank: Rank, file: File) -> BitBoard {
        BitBoard::from_square(Square::make_square(rank, file))
    }

    /// Construct a new `BitBoard` with a particular `Square` set
    #[inline]
    pub fn from_square(sq: Square) -> BitBoard {
        BitBoard(1u64 << sq.to_int())
    }

    /// Convert an `Option<Square>` to a `BitBoard`, which is empty for `None`.
    #[inline]
    pub fn from_maybe_square(sq: Option<Square>) -> BitBoard {
        sq.map_or(EMPTY, BitBoard::from_square)
    }

    /// Convert a `BitBoard` to a `Square`.  This grabs the least-significant `Square`.
    /// The `BitBoard` must not be empty.
    #[inline]
    pub fn to_square(&self) -> Square {
        debug_assert!(self.0 != 0, "to_square on an empty bitboard");
        Square::new(self.0.trailing_zeros() as u8)
    }

    /// Remove the least-significant `Square` from this `BitBoard` and return it.
    /// The `BitBoard` must not be empty.
    #[inline]
    pub fn pop_lsb(&mut self) -> Square {
        let sq = self.to_square();
        self.0 &= self.0 - 1;
        sq
    }

    /// Is this `BitBoard` free of squares?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Is `sq` a member of this `BitBoard`?
    #[inline]
    pub fn is_set(&self, sq: Square) -> bool {
        self.0 & (1u64 << sq.to_int()) != 0
    }

    /// Add `sq` to this `BitBoard`.
    #[inline]
    pub fn set_bit(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.to_int();
    }

    /// Remove `sq` from this `BitBoard`.
    #[inline]
    pub fn clear_bit(&mut self, sq: Square) {
        self.0 &= !(1u64 << sq.to_int());
    }

    /// Count the number of `Squares` set in this `BitBoard`
    #[inline]
    pub fn popcnt(&self) -> u32 {
        self.0.count_ones()
    }

    /// Move every square one step in `dir`.  Squares that would fall off the board, or wrap
    /// around to the opposite file, are dropped before shifting.
    #[inline]
    pub fn shift(&self, dir: Direction) -> BitBoard {
        match dir {
            Direction::North => (self & !RANK_8) << 8,
            Direction::South => (self & !RANK_1) >> 8,
            Direction::East => (self & !FILE_H) << 1,
            Direction::West => (self & !FILE_A) >> 1,
            Direction::NorthEast => (self & !(FILE_H | RANK_8)) << 9,
            Direction::NorthWest => (self & !(FILE_A | RANK_8)) << 7,
            Direction::SouthEast => (self & !(FILE_H | RANK_1)) >> 7,
            Direction::SouthWest => (self & !(FILE_A | RANK_1)) >> 9,
        }
    }

    /// Convert this `BitBoard` to a `usize` (for table lookups)
    #[inline]
    pub fn to_size(&self, rightshift: u8) -> usize {
        (self.0 >> rightshift) as usize
    }
}

/// For the `BitBoard`, iterate over every `Square` set.
impl Iterator for BitBoard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(self.pop_lsb())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_lsb_extracts_in_ascending_order() {
        let mut bb = BitBoard::from_square(Square::H8) | BitBoard::from_square(Square::C3);
        assert_eq!(bb.pop_lsb(), Square::C3);
        assert_eq!(bb.pop_lsb(), Square::H8);
        assert!(bb.is_empty());
    }

    #[test]
    fn set_and_clear_bits() {
        let mut bb = EMPTY;
        bb.set_bit(Square::D4);
        assert!(bb.is_set(Square::D4));
        assert!(!bb.is_set(Square::D5));
        bb.clear_bit(Square::D4);
        assert_eq!(bb, EMPTY);
    }

    #[test]
    fn shifts_do_not_wrap_files() {
        let h4 = BitBoard::from_square(Square::H4);
        assert_eq!(h4.shift(Direction::East), EMPTY);
        assert_eq!(h4.shift(Direction::NorthEast), EMPTY);
        assert_eq!(h4.shift(Direction::SouthEast), EMPTY);
        assert_eq!(h4.shift(Direction::West), BitBoard::from_square(Square::G4));

        let a4 = BitBoard::from_square(Square::A4);
        assert_eq!(a4.shift(Direction::West), EMPTY);
        assert_eq!(a4.shift(Direction::NorthWest), EMPTY);
        assert_eq!(a4.shift(Direction::SouthWest), EMPTY);
        assert_eq!(a4.shift(Direction::NorthEast), BitBoard::from_square(Square::B5));
    }

    #[test]
    fn shifts_do_not_leave_the_board() {
        assert_eq!(BitBoard::from_square(Square::E8).shift(Direction::North), EMPTY);
        assert_eq!(BitBoard::from_square(Square::E1).shift(Direction::South), EMPTY);
        assert_eq!(RANK_8.shift(Direction::NorthWest), EMPTY);
        assert_eq!(RANK_1.shift(Direction::SouthEast), EMPTY);
    }

    #[test]
    fn every_direction_moves_one_step() {
        let d4 = BitBoard::from_square(Square::D4);
        let expected = [
            Square::D5,
            Square::D3,
            Square::E4,
            Square::C4,
            Square::E5,
            Square::C5,
            Square::E3,
            Square::C3,
        ];
        for (dir, sq) in ALL_DIRECTIONS.iter().zip(expected.iter()) {
            assert_eq!(d4.shift(*dir), BitBoard::from_square(*sq), "{:?}", dir);
        }
    }
}
