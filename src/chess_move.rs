use crate::error::Error;
use crate::piece::{Piece, PromotionType};
use crate::position::Position;
use crate::square::Square;
use std::fmt;
use std::num::NonZeroU16;
use std::str::FromStr;

const SQUARE_MASK: u16 = 0x3f;
const TO_SHIFT: u16 = 6;
const PROMOTION_SHIFT: u16 = 12;
const PROMOTION_MASK: u16 = 0x7;
// Always set, so a real move is never zero and `Option<ChessMove>` stays two bytes.
const MOVE_TAG: u16 = 0x8000;

/// Represent a ChessMove in memory
///
/// The source, destination and promotion are packed into 16 bits, so copies and comparisons are
/// a single integer operation.  There is no null `ChessMove`: "no move" is `None` in an
/// `Option<ChessMove>`, which costs nothing extra.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct ChessMove(NonZeroU16);

impl ChessMove {
    /// Create a new chess move, given a source `Square`, a destination `Square`, and an optional
    /// promotion.
    #[inline]
    pub fn new(source: Square, dest: Square, promotion: Option<PromotionType>) -> ChessMove {
        let promotion = promotion.map_or(0, |p| p.to_bits());
        let bits = MOVE_TAG
            | (source.to_int() as u16)
            | ((dest.to_int() as u16) << TO_SHIFT)
            | (promotion << PROMOTION_SHIFT);
        // MOVE_TAG is set above
        ChessMove(unsafe { NonZeroU16::new_unchecked(bits) })
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        Square::new((self.0.get() & SQUARE_MASK) as u8)
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        Square::new(((self.0.get() >> TO_SHIFT) & SQUARE_MASK) as u8)
    }

    /// Get the promotion piece (maybe).
    #[inline]
    pub fn get_promotion(&self) -> Option<PromotionType> {
        PromotionType::from_bits((self.0.get() >> PROMOTION_SHIFT) & PROMOTION_MASK)
    }

    /// The raw encoding.  Two moves are equal exactly when their raw encodings are.
    #[inline]
    pub fn to_raw(&self) -> u16 {
        self.0.get()
    }

    /// Does this move take something on `position`?  That is, is the destination occupied, or is
    /// a pawn moving onto the en-passant target?
    #[inline]
    pub fn is_capture(&self, position: &Position) -> bool {
        let dest = self.get_dest();
        position.combined().is_set(dest)
            || (position.en_passant() == Some(dest)
                && position.piece_on(self.get_source()) == Some(Piece::Pawn))
    }

    /// Same source and destination, and the same promotion, where a `PromotionType::Any` in
    /// `pattern` accepts any concrete promotion.
    ///
    /// ```
    /// use chess_core::{ChessMove, PromotionType, Square};
    ///
    /// let pattern = ChessMove::new(Square::B7, Square::B8, Some(PromotionType::Any));
    /// let knight = ChessMove::new(Square::B7, Square::B8, Some(PromotionType::Knight));
    ///
    /// assert!(knight.matches(pattern));
    /// assert!(!ChessMove::new(Square::B7, Square::B8, None).matches(pattern));
    /// ```
    #[inline]
    pub fn matches(&self, pattern: ChessMove) -> bool {
        if self.get_source() != pattern.get_source() || self.get_dest() != pattern.get_dest() {
            return false;
        }
        match (self.get_promotion(), pattern.get_promotion()) {
            (Some(_), Some(PromotionType::Any)) => true,
            (mine, theirs) => mine == theirs,
        }
    }

    /// Convert a coordinate string such as "e2e4" or "e7e8q" to a move.  If invalid, return
    /// `None`.
    ///
    /// ```
    /// use chess_core::{ChessMove, PromotionType, Square};
    ///
    /// let mv = ChessMove::new(Square::E7, Square::E8, Some(PromotionType::Queen));
    ///
    /// assert_eq!(ChessMove::from_string("e7e8q").expect("Valid Move"), mv);
    /// ```
    #[inline]
    pub fn from_string(s: &str) -> Option<ChessMove> {
        if s.len() < 4 || s.len() > 5 || !s.is_ascii() {
            return None;
        }
        let source = Square::from_string(&s[0..2])?;
        let dest = Square::from_string(&s[2..4])?;

        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => Some(PromotionType::from_char(c)?),
        };

        Some(ChessMove::new(source, dest, promotion))
    }
}

impl FromStr for ChessMove {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChessMove::from_string(s).ok_or(Error::InvalidUciMove)
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get_promotion() {
            None => write!(f, "{}{}", self.get_source(), self.get_dest()),
            Some(x) => write!(f, "{}{}{}", self.get_source(), self.get_dest(), x.to_char()),
        }
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ChessMove({})", self)
    }
}

/// A move as it travels over a text protocol, where the null move is spelled `null`.
///
/// ```
/// use chess_core::{ChessMove, Square, UciMove};
///
/// assert_eq!(UciMove(None).to_string(), "null");
/// assert_eq!("null".parse::<UciMove>(), Ok(UciMove(None)));
///
/// let e4 = ChessMove::new(Square::E2, Square::E4, None);
/// assert_eq!("E2E4".parse::<UciMove>(), Ok(UciMove(Some(e4))));
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct UciMove(pub Option<ChessMove>);

impl FromStr for UciMove {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("null") {
            Ok(UciMove(None))
        } else {
            Ok(UciMove(Some(ChessMove::from_str(s)?)))
        }
    }
}

impl fmt::Display for UciMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            None => write!(f, "null"),
            Some(m) => write!(f, "{}", m),
        }
    }
}

impl From<ChessMove> for UciMove {
    fn from(m: ChessMove) -> Self {
        UciMove(Some(m))
    }
}
