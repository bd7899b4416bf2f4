use crate::bitboard::{BitBoard, EMPTY, RANK_1, RANK_8};
use crate::castle_rights::CastleRights;
use crate::color::{Color, ALL_COLORS, NUM_COLORS};
use crate::error::Error;
use crate::file::{File, ALL_FILES};
use crate::piece::{Piece, ALL_PIECES, NUM_PIECES};
use crate::rank::{Rank, ALL_RANKS};
use crate::square::Square;

use std::fmt;
use std::str::FromStr;

/// The FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Everything move generation needs to know about a position.
///
/// This is plain data.  It is changed only through a `Board` (or another `Playable`), which
/// keeps the per-piece, per-color and combined bitboards in agreement.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Position {
    pieces: [[BitBoard; NUM_PIECES]; NUM_COLORS],
    color_combined: [BitBoard; NUM_COLORS],
    combined: BitBoard,
    side_to_move: Color,
    castle_rights: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Position {
    /// A position with no pieces on it, white to move.  Not valid for move generation until
    /// both kings have been placed.
    pub fn empty() -> Position {
        Position {
            pieces: [[EMPTY; NUM_PIECES]; NUM_COLORS],
            color_combined: [EMPTY; NUM_COLORS],
            combined: EMPTY,
            side_to_move: Color::White,
            castle_rights: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Every piece of type `piece` belonging to `color`.
    #[inline]
    pub fn pieces(&self, piece: Piece, color: Color) -> BitBoard {
        self.pieces[color.to_index()][piece.to_index()]
    }

    /// Every piece of type `piece`, both colors.
    #[inline]
    pub fn pieces_of_type(&self, piece: Piece) -> BitBoard {
        self.pieces[0][piece.to_index()] | self.pieces[1][piece.to_index()]
    }

    /// Every piece belonging to `color`.
    #[inline]
    pub fn color_combined(&self, color: Color) -> BitBoard {
        self.color_combined[color.to_index()]
    }

    /// Every occupied square.
    #[inline]
    pub fn combined(&self) -> BitBoard {
        self.combined
    }

    /// Whose turn is it?
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The castling rights of both sides.
    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    /// The square a pawn would land on when capturing en passant, if the last move was a double
    /// pawn push.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Half-moves since the last capture or pawn move.
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Starts at one and goes up after every black move.
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// The square `color`'s king stands on.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.pieces(Piece::King, color).to_square()
    }

    /// What piece is on a particular `Square`?  Is there even one?
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        if !self.combined.is_set(square) {
            return None;
        }
        let color = self.color_on(square)?;
        ALL_PIECES
            .iter()
            .copied()
            .find(|p| self.pieces(*p, color).is_set(square))
    }

    /// What color piece is on a particular square?
    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        if self.color_combined(Color::White).is_set(square) {
            Some(Color::White)
        } else if self.color_combined(Color::Black).is_set(square) {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Toggle `bb` for the given piece and color, keeping the occupancy boards in step.
    #[inline]
    pub(crate) fn xor(&mut self, piece: Piece, color: Color, bb: BitBoard) {
        self.pieces[color.to_index()][piece.to_index()] ^= bb;
        self.color_combined[color.to_index()] ^= bb;
        self.combined ^= bb;
    }

    /// Put a piece on an empty square.
    pub fn set_piece(&mut self, square: Square, piece: Piece, color: Color) {
        debug_assert!(!self.combined.is_set(square));
        self.xor(piece, color, BitBoard::from_square(square));
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub(crate) fn set_castle_rights(&mut self, rights: CastleRights) {
        self.castle_rights = rights;
    }

    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    pub(crate) fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
    }

    pub(crate) fn set_fullmove_number(&mut self, number: u32) {
        self.fullmove_number = number;
    }

    /// Structural checks that do not need attack tables: one king per side, no pawns on the
    /// back ranks, castle rights backed by a king and rook on their home squares, and an
    /// en-passant square that a double push could have left.
    pub fn is_sane(&self) -> bool {
        for color in ALL_COLORS.iter() {
            if self.pieces(Piece::King, *color).popcnt() != 1 {
                return false;
            }

            let rights = self.castle_rights;
            if rights.has_any(*color) {
                let home = BitBoard::set(color.to_my_backrank(), File::E);
                if self.pieces(Piece::King, *color) != home {
                    return false;
                }
                let rooks = rights.unmoved_rooks(*color);
                if self.pieces(Piece::Rook, *color) & rooks != rooks {
                    return false;
                }
            }
        }

        if self.pieces_of_type(Piece::Pawn) & (RANK_1 | RANK_8) != EMPTY {
            return false;
        }

        if let Some(ep) = self.en_passant {
            let expected = match self.side_to_move {
                Color::White => Rank::Sixth,
                Color::Black => Rank::Third,
            };
            if ep.get_rank() != expected || self.combined.is_set(ep) {
                return false;
            }
            // The pawn that just moved two squares sits behind the target, and the square it
            // started from is empty.
            let me = self.side_to_move;
            let pushed = ep
                .backward(me)
                .map_or(false, |sq| self.pieces(Piece::Pawn, !me).is_set(sq));
            let origin = ep.forward(me).map_or(false, |sq| !self.combined.is_set(sq));
            if !pushed || !origin {
                return false;
            }
        }

        true
    }
}

impl Default for Position {
    fn default() -> Position {
        match Position::from_str(STARTING_FEN) {
            Ok(position) => position,
            Err(_) => unreachable!("the starting FEN is valid"),
        }
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidFen {
            fen: value.to_string(),
        };

        let tokens: Vec<&str> = value.split_whitespace().collect();
        if tokens.len() < 4 || tokens.len() > 6 {
            return Err(invalid());
        }

        let mut position = Position::empty();

        let ranks: Vec<&str> = tokens[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid());
        }
        for (row, rank) in ALL_RANKS.iter().rev().zip(ranks.iter()) {
            let mut file = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 || skip > 8 {
                        return Err(invalid());
                    }
                    file += skip as usize;
                } else {
                    let (piece, color) = Piece::from_fen_char(c).ok_or_else(invalid)?;
                    if file >= 8 {
                        return Err(invalid());
                    }
                    let sq = Square::make_square(*row, File::from_index(file));
                    position.set_piece(sq, piece, color);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(invalid());
            }
        }

        position.side_to_move = match tokens[1] {
            "w" | "W" => Color::White,
            "b" | "B" => Color::Black,
            _ => return Err(invalid()),
        };

        position.castle_rights = CastleRights::from_fen(tokens[2]).ok_or_else(invalid)?;

        position.en_passant = match tokens[3] {
            "-" => None,
            ep => Some(Square::from_str(ep).map_err(|_| invalid())?),
        };

        if let Some(clock) = tokens.get(4) {
            position.halfmove_clock = clock.parse().map_err(|_| invalid())?;
        }
        if let Some(number) = tokens.get(5) {
            position.fullmove_number = number.parse().map_err(|_| invalid())?;
        }

        if !position.is_sane() {
            return Err(Error::InvalidBoard);
        }

        Ok(position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in ALL_RANKS.iter().rev() {
            let mut count = 0;
            for file in ALL_FILES.iter() {
                let square = Square::make_square(*rank, *file);

                match (self.piece_on(square), self.color_on(square)) {
                    (Some(piece), Some(color)) => {
                        if count != 0 {
                            write!(f, "{}", count)?;
                            count = 0;
                        }
                        write!(f, "{}", piece.to_string(color))?;
                    }
                    _ => count += 1,
                }
            }

            if count != 0 {
                write!(f, "{}", count)?;
            }

            if *rank != Rank::First {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {} ", self.side_to_move, self.castle_rights)?;
        match self.en_passant {
            Some(sq) => write!(f, "{}", sq)?,
            None => write!(f, "-")?,
        }
        write!(f, " {} {}", self.halfmove_clock, self.fullmove_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_initial_position() {
        let position = Position::default();
        assert_eq!(position.to_string(), STARTING_FEN);
        assert_eq!(position.combined().popcnt(), 32);
        assert_eq!(position.piece_on(Square::E1), Some(Piece::King));
        assert_eq!(position.color_on(Square::D8), Some(Color::Black));
        assert_eq!(position.piece_on(Square::E4), None);
        assert_eq!(position.king_square(Color::Black), Square::E8);
        assert_eq!(position.castle_rights(), CastleRights::ALL);
    }

    #[test]
    fn fen_round_trips() {
        let fens = [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/8/1k6/8/2pP4/8/5BK1/8 b - d3 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        ];
        for fen in fens.iter() {
            assert_eq!(Position::from_str(fen).unwrap().to_string(), *fen);
        }
    }

    #[test]
    fn counters_are_optional() {
        let position = Position::from_str("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.fullmove_number(), 1);
    }

    #[test]
    fn malformed_fens() {
        let bad = [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkz - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1",
        ];
        for fen in bad.iter() {
            match Position::from_str(fen) {
                Err(Error::InvalidFen { .. }) => {}
                other => panic!("{} parsed as {:?}", fen, other),
            }
        }
    }

    #[test]
    fn insane_positions() {
        let bad = [
            "8/8/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/4KK2 w - - 0 1",
            "4k3/8/8/8/8/8/8/P3K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w K - 0 1",
            "4k3/8/8/8/8/8/8/3K3R w K - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - e3 0 1",
            "4k3/8/8/8/3p4/8/8/4K3 b - e3 0 1",
            "4k3/8/8/3pP3/8/8/8/4K3 w - e6 0 1",
            "4k3/3r4/8/3pP3/8/8/8/4K3 w - d6 0 1",
        ];
        for fen in bad.iter() {
            assert_eq!(Position::from_str(fen), Err(Error::InvalidBoard), "{}", fen);
        }
    }
}
