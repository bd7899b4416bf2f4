use crate::color::Color;
use crate::error::Error;
use crate::file::File;
use crate::rank::Rank;
use std::fmt;
use std::str::FromStr;

/// Represent a square on the chess board.  Square 0 is A1, square 63 is H8.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Default, Hash)]
pub struct Square(u8);

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

/// A list of every square on the chessboard, in ascending order.
pub const ALL_SQUARES: [Square; NUM_SQUARES] = {
    let mut squares = [Square(0); NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        squares[i] = Square(i as u8);
        i += 1;
    }
    squares
};

impl Square {
    /// Create a new square, given an index.
    /// Note: It is invalid, but allowed, to pass in a number >= 64.  Doing so will crash stuff.
    #[inline]
    pub fn new(sq: u8) -> Square {
        debug_assert!((sq as usize) < NUM_SQUARES);
        Square(sq)
    }

    /// Make a square given a rank and a file
    #[inline]
    pub fn make_square(rank: Rank, file: File) -> Square {
        Square((rank.to_index() as u8) << 3 | (file.to_index() as u8))
    }

    /// Return the rank given this square.
    #[inline]
    pub fn get_rank(&self) -> Rank {
        Rank::from_index((self.0 >> 3) as usize)
    }

    /// Return the file given this square.
    #[inline]
    pub fn get_file(&self) -> File {
        File::from_index((self.0 & 7) as usize)
    }

    /// If there is a square above me, return that.  Otherwise, None.
    #[inline]
    pub fn up(&self) -> Option<Square> {
        if self.get_rank() == Rank::Eighth {
            None
        } else {
            Some(Square(self.0 + 8))
        }
    }

    /// If there is a square below me, return that.  Otherwise, None.
    #[inline]
    pub fn down(&self) -> Option<Square> {
        if self.get_rank() == Rank::First {
            None
        } else {
            Some(Square(self.0 - 8))
        }
    }

    /// If there is a square to the left of me, return that.  Otherwise, None.
    #[inline]
    pub fn left(&self) -> Option<Square> {
        if self.get_file() == File::A {
            None
        } else {
            Some(Square(self.0 - 1))
        }
    }

    /// If there is a square to the right of me, return that.  Otherwise, None.
    #[inline]
    pub fn right(&self) -> Option<Square> {
        if self.get_file() == File::H {
            None
        } else {
            Some(Square(self.0 + 1))
        }
    }

    /// If there is a square "forward", given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn forward(&self, color: Color) -> Option<Square> {
        match color {
            Color::White => self.up(),
            Color::Black => self.down(),
        }
    }

    /// If there is a square "backward" given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn backward(&self, color: Color) -> Option<Square> {
        match color {
            Color::White => self.down(),
            Color::Black => self.up(),
        }
    }

    /// Convert this square to an integer.
    #[inline]
    pub fn to_int(&self) -> u8 {
        self.0
    }

    /// Convert this `Square` to a `usize` for table lookup purposes
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }

    /// Convert a coordinate string such as "e4" to a square.  If invalid, return `None`
    pub fn from_string(s: &str) -> Option<Square> {
        Square::from_str(s).ok()
    }

    /// The square A1.
    pub const A1: Square = Square(0);

    /// The square B1.
    pub const B1: Square = Square(1);

    /// The square C1.
    pub const C1: Square = Square(2);

    /// The square D1.
    pub const D1: Square = Square(3);

    /// The square E1.
    pub const E1: Square = Square(4);

    /// The square F1.
    pub const F1: Square = Square(5);

    /// The square G1.
    pub const G1: Square = Square(6);

    /// The square H1.
    pub const H1: Square = Square(7);

    /// The square A2.
    pub const A2: Square = Square(8);

    /// The square B2.
    pub const B2: Square = Square(9);

    /// The square C2.
    pub const C2: Square = Square(10);

    /// The square D2.
    pub const D2: Square = Square(11);

    /// The square E2.
    pub const E2: Square = Square(12);

    /// The square F2.
    pub const F2: Square = Square(13);

    /// The square G2.
    pub const G2: Square = Square(14);

    /// The square H2.
    pub const H2: Square = Square(15);

    /// The square A3.
    pub const A3: Square = Square(16);

    /// The square B3.
    pub const B3: Square = Square(17);

    /// The square C3.
    pub const C3: Square = Square(18);

    /// The square D3.
    pub const D3: Square = Square(19);

    /// The square E3.
    pub const E3: Square = Square(20);

    /// The square F3.
    pub const F3: Square = Square(21);

    /// The square G3.
    pub const G3: Square = Square(22);

    /// The square H3.
    pub const H3: Square = Square(23);

    /// The square A4.
    pub const A4: Square = Square(24);

    /// The square B4.
    pub const B4: Square = Square(25);

    /// The square C4.
    pub const C4: Square = Square(26);

    /// The square D4.
    pub const D4: Square = Square(27);

    /// The square E4.
    pub const E4: Square = Square(28);

    /// The square F4.
    pub const F4: Square = Square(29);

    /// The square G4.
    pub const G4: Square = Square(30);

    /// The square H4.
    pub const H4: Square = Square(31);

    /// The square A5.
    pub const A5: Square = Square(32);

    /// The square B5.
    pub const B5: Square = Square(33);

    /// The square C5.
    pub const C5: Square = Square(34);

    /// The square D5.
    pub const D5: Square = Square(35);

    /// The square E5.
    pub const E5: Square = Square(36);

    /// The square F5.
    pub const F5: Square = Square(37);

    /// The square G5.
    pub const G5: Square = Square(38);

    /// The square H5.
    pub const H5: Square = Square(39);

    /// The square A6.
    pub const A6: Square = Square(40);

    /// The square B6.
    pub const B6: Square = Square(41);

    /// The square C6.
    pub const C6: Square = Square(42);

    /// The square D6.
    pub const D6: Square = Square(43);

    /// The square E6.
    pub const E6: Square = Square(44);

    /// The square F6.
    pub const F6: Square = Square(45);

    /// The square G6.
    pub const G6: Square = Square(46);

    /// The square H6.
    pub const H6: Square = Square(47);

    /// The square A7.
    pub const A7: Square = Square(48);

    /// The square B7.
    pub const B7: Square = Square(49);

    /// The square C7.
    pub const C7: Square = Square(50);

    /// The square D7.
    pub const D7: Square = Square(51);

    /// The square E7.
    pub const E7: Square = Square(52);

    /// The square F7.
    pub const F7: Square = Square(53);

    /// The square G7.
    pub const G7: Square = Square(54);

    /// The square H7.
    pub const H7: Square = Square(55);

    /// The square A8.
    pub const A8: Square = Square(56);

    /// The square B8.
    pub const B8: Square = Square(57);

    /// The square C8.
    pub const C8: Square = Square(58);

    /// The square D8.
    pub const D8: Square = Square(59);

    /// The square E8.
    pub const E8: Square = Square(60);

    /// The square F8.
    pub const F8: Square = Square(61);

    /// The square G8.
    pub const G8: Square = Square(62);

    /// The square H8.
    pub const H8: Square = Square(63);
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 || !s.is_ascii() {
            return Err(Error::InvalidSquare);
        }
        let file = File::from_str(&s[0..1]).map_err(|_| Error::InvalidSquare)?;
        let rank = Rank::from_str(&s[1..2]).map_err(|_| Error::InvalidSquare)?;
        Ok(Square::make_square(rank, file))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.get_file().to_char(), self.get_rank().to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_and_file_split() {
        assert_eq!(Square::E4.to_index(), 28);
        assert_eq!(Square::E4.get_rank(), Rank::Fourth);
        assert_eq!(Square::E4.get_file(), File::E);
        assert_eq!(Square::make_square(Rank::Eighth, File::H), Square::H8);
    }

    #[test]
    fn neighbours_stop_at_edges() {
        assert_eq!(Square::A1.left(), None);
        assert_eq!(Square::A1.down(), None);
        assert_eq!(Square::H8.right(), None);
        assert_eq!(Square::H8.up(), None);
        assert_eq!(Square::E2.forward(Color::White), Some(Square::E3));
        assert_eq!(Square::E7.forward(Color::Black), Some(Square::E6));
        assert_eq!(Square::E3.backward(Color::White), Some(Square::E2));
    }

    #[test]
    fn square_strings() {
        assert_eq!(Square::from_string("a1"), Some(Square::A1));
        assert_eq!(Square::from_string("H8"), Some(Square::H8));
        assert_eq!(Square::from_string("i1"), None);
        assert_eq!(Square::from_string("a9"), None);
        assert_eq!(Square::from_string("a10"), None);
        assert_eq!(Square::G7.to_string(), "g7");
    }

    #[test]
    fn all_squares_are_ascending() {
        for (i, sq) in ALL_SQUARES.iter().enumerate() {
            assert_eq!(sq.to_index(), i);
        }
    }
}
