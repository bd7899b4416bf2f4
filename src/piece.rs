use crate::color::Color;
use std::fmt;

/// Represent a chess piece as a very simple enum
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// How many piece types are there?
pub const NUM_PIECES: usize = 6;

/// An array representing each piece type, in order of ascending value.  Move generation visits
/// the pieces in this order.
pub const ALL_PIECES: [Piece; NUM_PIECES] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
    Piece::King,
];

impl Piece {
    /// Convert the `Piece` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// Material value used when ordering captures and promotions.
    #[inline]
    pub fn value(&self) -> i32 {
        match *self {
            Piece::Pawn => 100,
            Piece::Knight => 320,
            Piece::Bishop => 330,
            Piece::Rook => 500,
            Piece::Queen => 900,
            Piece::King => 2000,
        }
    }

    /// Convert a piece with a color to a FEN character.  White pieces are uppercase.
    #[inline]
    pub fn to_string(&self, color: Color) -> String {
        let piece = format!("{}", self);
        if color == Color::White {
            piece.to_uppercase()
        } else {
            piece
        }
    }

    /// Parse a FEN piece letter, returning the piece and its color.
    pub fn from_fen_char(c: char) -> Option<(Piece, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        };
        Some((piece, color))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                Piece::Pawn => "p",
                Piece::Knight => "n",
                Piece::Bishop => "b",
                Piece::Rook => "r",
                Piece::Queen => "q",
                Piece::King => "k",
            }
        )
    }
}

/// What a pawn turns into on the last rank.
///
/// `Any` is a wildcard for matching moves (see `ChessMove::matches`); move generation never
/// produces it, and applying it promotes to a queen.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
pub enum PromotionType {
    Knight,
    Bishop,
    Rook,
    Queen,
    Any,
}

/// How many concrete promotions are there?
pub const NUM_PROMOTION_PIECES: usize = 4;

/// Every concrete promotion, in the order the generator emits them.
pub const PROMOTION_PIECES: [PromotionType; NUM_PROMOTION_PIECES] = [
    PromotionType::Queen,
    PromotionType::Rook,
    PromotionType::Knight,
    PromotionType::Bishop,
];

impl PromotionType {
    /// The piece that ends up on the board.
    #[inline]
    pub fn to_piece(&self) -> Piece {
        match *self {
            PromotionType::Knight => Piece::Knight,
            PromotionType::Bishop => Piece::Bishop,
            PromotionType::Rook => Piece::Rook,
            PromotionType::Queen | PromotionType::Any => Piece::Queen,
        }
    }

    /// The suffix letter in coordinate notation.  `Any` is written as a queen.
    #[inline]
    pub fn to_char(&self) -> char {
        match *self {
            PromotionType::Knight => 'n',
            PromotionType::Bishop => 'b',
            PromotionType::Rook => 'r',
            PromotionType::Queen | PromotionType::Any => 'q',
        }
    }

    /// Parse a promotion suffix, ignoring case.
    #[inline]
    pub fn from_char(c: char) -> Option<PromotionType> {
        match c.to_ascii_lowercase() {
            'n' => Some(PromotionType::Knight),
            'b' => Some(PromotionType::Bishop),
            'r' => Some(PromotionType::Rook),
            'q' => Some(PromotionType::Queen),
            _ => None,
        }
    }

    pub(crate) fn to_bits(&self) -> u16 {
        *self as u16 + 1
    }

    pub(crate) fn from_bits(bits: u16) -> Option<PromotionType> {
        match bits {
            1 => Some(PromotionType::Knight),
            2 => Some(PromotionType::Bishop),
            3 => Some(PromotionType::Rook),
            4 => Some(PromotionType::Queen),
            5 => Some(PromotionType::Any),
            _ => None,
        }
    }
}
