use crate::bitboard::BitBoard;
use crate::castle_rights::CastleRights;
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::error::Error;
use crate::file::{File, ALL_FILES};
use crate::movegen::king_in_check;
use crate::piece::Piece;
use crate::position::Position;
use crate::rank::ALL_RANKS;
use crate::square::Square;

use std::fmt;
use std::str::FromStr;

/// Anything the move generator can play moves on.
///
/// Legality is decided by playing a move, looking at the resulting position, and taking the move
/// back, so an implementation must restore the previous position exactly on `undo_move`.
pub trait Playable {
    /// The current position.
    fn position(&self) -> &Position;

    /// Play `m`, which must be at least pseudo-legal in the current position.
    fn make_move(&mut self, m: ChessMove);

    /// Take back the most recent `make_move`.
    fn undo_move(&mut self);

    /// The most recent move played, if any.
    fn last_move(&self) -> Option<ChessMove>;
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
struct Undo {
    previous: Position,
    played: ChessMove,
}

/// A `Position` together with the moves that led to it, so moves can be taken back.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    position: Position,
    history: Vec<Undo>,
}

impl Position {
    /// Make a chess move, returning the resulting position.  `self` is left untouched.
    ///
    /// The move is not checked for legality, but there must be a piece of the side to move on
    /// its source square.  Debug builds assert this; release builds return the position
    /// unchanged.
    ///
    /// ```
    /// use chess_core::{ChessMove, Position, Square};
    ///
    /// let e2e4 = ChessMove::new(Square::E2, Square::E4, None);
    /// let position = Position::default().make_move_new(e2e4);
    /// assert_eq!(position.en_passant(), Some(Square::E3));
    /// ```
    pub fn make_move_new(&self, m: ChessMove) -> Position {
        let mut result = *self;
        let me = self.side_to_move();
        let source = m.get_source();
        let dest = m.get_dest();
        let source_bb = BitBoard::from_square(source);
        let dest_bb = BitBoard::from_square(dest);

        debug_assert!(
            self.color_combined(me).is_set(source),
            "{} played on a position with no {:?} piece on {}",
            m,
            me,
            source
        );
        let moved = match self.piece_on(source) {
            Some(piece) => piece,
            None => return *self,
        };
        let captured = self.piece_on(dest);

        if let Some(victim) = captured {
            result.xor(victim, !me, dest_bb);
        }
        result.xor(moved, me, source_bb ^ dest_bb);

        // A king or rook leaving home, or a rook being taken at home, costs those rights.
        result.set_castle_rights(
            self.castle_rights()
                .remove(CastleRights::square_to_castle_rights(source))
                .remove(CastleRights::square_to_castle_rights(dest)),
        );
        result.set_en_passant(None);

        match moved {
            Piece::Pawn => {
                if self.en_passant() == Some(dest) {
                    if let Some(victim) = dest.backward(me) {
                        result.xor(Piece::Pawn, !me, BitBoard::from_square(victim));
                    }
                }

                if let Some(promotion) = m.get_promotion() {
                    result.xor(Piece::Pawn, me, dest_bb);
                    result.xor(promotion.to_piece(), me, dest_bb);
                } else if source.get_rank() == me.to_second_rank()
                    && source.forward(me).and_then(|sq| sq.forward(me)) == Some(dest)
                {
                    result.set_en_passant(source.forward(me));
                }
            }
            Piece::King => {
                let backrank = me.to_my_backrank();
                let from = source.get_file().to_index();
                let to = dest.get_file().to_index();
                if from == File::E.to_index() && to == File::G.to_index() {
                    result.xor(
                        Piece::Rook,
                        me,
                        BitBoard::set(backrank, File::H) ^ BitBoard::set(backrank, File::F),
                    );
                } else if from == File::E.to_index() && to == File::C.to_index() {
                    result.xor(
                        Piece::Rook,
                        me,
                        BitBoard::set(backrank, File::A) ^ BitBoard::set(backrank, File::D),
                    );
                }
            }
            _ => {}
        }

        if moved == Piece::Pawn || captured.is_some() {
            result.set_halfmove_clock(0);
        } else {
            result.set_halfmove_clock(self.halfmove_clock() + 1);
        }
        if me == Color::Black {
            result.set_fullmove_number(self.fullmove_number() + 1);
        }
        result.set_side_to_move(!me);

        result
    }
}

impl Board {
    /// Start a game from `position`, with nothing to take back.
    pub fn new(position: Position) -> Board {
        Board {
            position: position,
            history: Vec::new(),
        }
    }

    /// How many moves can be taken back.
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Every move played since this board was created, oldest first.
    pub fn moves_played(&self) -> impl Iterator<Item = ChessMove> + '_ {
        self.history.iter().map(|undo| undo.played)
    }
}

impl Playable for Board {
    #[inline]
    fn position(&self) -> &Position {
        &self.position
    }

    fn make_move(&mut self, m: ChessMove) {
        let next = self.position.make_move_new(m);
        self.history.push(Undo {
            previous: self.position,
            played: m,
        });
        self.position = next;
    }

    /// Does nothing when there is nothing to take back.
    fn undo_move(&mut self) {
        if let Some(undo) = self.history.pop() {
            self.position = undo.previous;
        }
    }

    #[inline]
    fn last_move(&self) -> Option<ChessMove> {
        self.history.last().map(|undo| undo.played)
    }
}

impl From<Position> for Board {
    fn from(position: Position) -> Board {
        Board::new(position)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new(Position::default())
    }
}

/// Parse a FEN.  On top of the checks `Position` makes, the side that just moved must not have
/// left its king in check.
impl FromStr for Board {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let position = Position::from_str(value)?;
        if king_in_check(!position.side_to_move(), &position) {
            return Err(Error::InvalidBoard);
        }
        Ok(Board::new(position))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in ALL_RANKS.iter().rev() {
            write!(f, "{} ", rank.to_char())?;
            for file in ALL_FILES.iter() {
                let sq = Square::make_square(*rank, *file);
                match (self.position.piece_on(sq), self.position.color_on(sq)) {
                    (Some(piece), Some(color)) => write!(f, "{} ", piece.to_string(color))?,
                    _ => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        write!(f, "{}", self.position)
    }
}
