use crate::bitboard::{BitBoard, EMPTY};
use crate::color::Color;
use crate::square::Square;
use std::fmt;

/// Which castles are still available, for both sides.  Each of the four rights is tracked
/// independently.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Debug, Default, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// Nobody may castle.
    pub const NONE: CastleRights = CastleRights(0);
    /// White may castle kingside (e1g1).
    pub const WHITE_KINGSIDE: CastleRights = CastleRights(1);
    /// White may castle queenside (e1c1).
    pub const WHITE_QUEENSIDE: CastleRights = CastleRights(2);
    /// Black may castle kingside (e8g8).
    pub const BLACK_KINGSIDE: CastleRights = CastleRights(4);
    /// Black may castle queenside (e8c8).
    pub const BLACK_QUEENSIDE: CastleRights = CastleRights(8);
    /// Every right.
    pub const ALL: CastleRights = CastleRights(15);

    /// The kingside right belonging to `color`.
    #[inline]
    pub fn kingside(color: Color) -> CastleRights {
        match color {
            Color::White => CastleRights::WHITE_KINGSIDE,
            Color::Black => CastleRights::BLACK_KINGSIDE,
        }
    }

    /// The queenside right belonging to `color`.
    #[inline]
    pub fn queenside(color: Color) -> CastleRights {
        match color {
            Color::White => CastleRights::WHITE_QUEENSIDE,
            Color::Black => CastleRights::BLACK_QUEENSIDE,
        }
    }

    /// Does this set contain every right in `other`?
    #[inline]
    pub fn contains(&self, other: CastleRights) -> bool {
        self.0 & other.0 == other.0
    }

    /// Can `color` castle kingside?
    #[inline]
    pub fn has_kingside(&self, color: Color) -> bool {
        self.contains(CastleRights::kingside(color))
    }

    /// Can `color` castle queenside?
    #[inline]
    pub fn has_queenside(&self, color: Color) -> bool {
        self.contains(CastleRights::queenside(color))
    }

    /// Can `color` castle at all?
    #[inline]
    pub fn has_any(&self, color: Color) -> bool {
        self.has_kingside(color) || self.has_queenside(color)
    }

    /// Remove castle rights, and return a new `CastleRights`.
    #[inline]
    pub fn remove(&self, remove: CastleRights) -> CastleRights {
        CastleRights(self.0 & !remove.0)
    }

    /// Add some castle rights, and return a new `CastleRights`.
    #[inline]
    pub fn add(&self, add: CastleRights) -> CastleRights {
        CastleRights(self.0 | add.0)
    }

    /// Which rights are lost once a piece leaves, or is captured on, this square?
    #[inline]
    pub fn square_to_castle_rights(sq: Square) -> CastleRights {
        match sq {
            Square::A1 => CastleRights::WHITE_QUEENSIDE,
            Square::E1 => {
                CastleRights(CastleRights::WHITE_KINGSIDE.0 | CastleRights::WHITE_QUEENSIDE.0)
            }
            Square::H1 => CastleRights::WHITE_KINGSIDE,
            Square::A8 => CastleRights::BLACK_QUEENSIDE,
            Square::E8 => {
                CastleRights(CastleRights::BLACK_KINGSIDE.0 | CastleRights::BLACK_QUEENSIDE.0)
            }
            Square::H8 => CastleRights::BLACK_KINGSIDE,
            _ => CastleRights::NONE,
        }
    }

    /// Which rooks can we "guarantee" we haven't moved yet?
    pub fn unmoved_rooks(&self, color: Color) -> BitBoard {
        let (queenside, kingside) = match color {
            Color::White => (Square::A1, Square::H1),
            Color::Black => (Square::A8, Square::H8),
        };
        let mut result = EMPTY;
        if self.has_queenside(color) {
            result.set_bit(queenside);
        }
        if self.has_kingside(color) {
            result.set_bit(kingside);
        }
        result
    }

    /// Parse the castling field of a FEN string.  `-` means no rights.
    pub fn from_fen(s: &str) -> Option<CastleRights> {
        if s == "-" {
            return Some(CastleRights::NONE);
        }
        let mut rights = CastleRights::NONE;
        for c in s.chars() {
            rights = rights.add(match c {
                'K' => CastleRights::WHITE_KINGSIDE,
                'Q' => CastleRights::WHITE_QUEENSIDE,
                'k' => CastleRights::BLACK_KINGSIDE,
                'q' => CastleRights::BLACK_QUEENSIDE,
                _ => return None,
            });
        }
        Some(rights)
    }
}

/// Convert the castle rights to an FEN compatible string.
///
/// ```
/// use chess_core::CastleRights;
///
/// assert_eq!(CastleRights::NONE.to_string(), "-");
/// assert_eq!(CastleRights::ALL.to_string(), "KQkq");
/// assert_eq!(CastleRights::BLACK_QUEENSIDE.to_string(), "q");
/// ```
impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if *self == CastleRights::NONE {
            return write!(f, "-");
        }
        let flags = [
            (CastleRights::WHITE_KINGSIDE, 'K'),
            (CastleRights::WHITE_QUEENSIDE, 'Q'),
            (CastleRights::BLACK_KINGSIDE, 'k'),
            (CastleRights::BLACK_QUEENSIDE, 'q'),
        ];
        for (right, c) in flags.iter() {
            if self.contains(*right) {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rights_are_independent() {
        let rights = CastleRights::ALL.remove(CastleRights::WHITE_QUEENSIDE);
        assert!(rights.has_kingside(Color::White));
        assert!(!rights.has_queenside(Color::White));
        assert!(rights.has_kingside(Color::Black));
        assert!(rights.has_queenside(Color::Black));
    }

    #[test]
    fn king_square_clears_both_sides() {
        let rights = CastleRights::ALL.remove(CastleRights::square_to_castle_rights(Square::E8));
        assert!(!rights.has_any(Color::Black));
        assert!(rights.has_any(Color::White));
        assert_eq!(CastleRights::square_to_castle_rights(Square::D4), CastleRights::NONE);
    }

    #[test]
    fn fen_field_round_trips() {
        for field in ["-", "K", "Qk", "KQkq", "kq"].iter() {
            assert_eq!(
                CastleRights::from_fen(field).map(|r| r.to_string()),
                Some(field.to_string())
            );
        }
        assert_eq!(CastleRights::from_fen("KX"), None);
    }

    #[test]
    fn unmoved_rooks_follow_rights() {
        let rights = CastleRights::WHITE_KINGSIDE;
        assert_eq!(rights.unmoved_rooks(Color::White), BitBoard::from_square(Square::H1));
        assert_eq!(rights.unmoved_rooks(Color::Black), EMPTY);
    }
}
