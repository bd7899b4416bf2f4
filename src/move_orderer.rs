use crate::board::Playable;
use crate::chess_move::ChessMove;
use crate::heuristics::SearchHeuristics;
use crate::movegen::{MoveClass, MoveList, MAX_MOVES};
use crate::piece::Piece;
use crate::position::Position;

use arrayvec::ArrayVec;

/// The move a transposition table suggested is always tried first.
pub const TT_MOVE_SCORE: i32 = 2_000_000;
/// Base score for captures and promotions.  The victim and attacker values are added on top.
pub const CAPTURE_SCORE: i32 = 1_000_000;
/// Scores for the newest and older killer move at a ply.
pub const KILLER_SCORES: [i32; 2] = [900_000, 899_999];
/// Score for the remembered reply to the previous move.
pub const COUNTER_MOVE_SCORE: i32 = 800_000;

/// Hands out the moves of one node, best first.
///
/// Every move is scored once, when the orderer is built.  The list is never fully sorted:
/// each `get_move(i)` finds the best move among those from `i` on and shifts it into place, so a
/// node that cuts off after a move or two pays for little more than that.  Moves with equal
/// scores come out in the order they were generated.
///
/// ```
/// use chess_core::{legal_moves, Board, MoveClass, MoveOrderer, SearchHeuristics};
///
/// let mut board = Board::default();
/// let moves = legal_moves(&mut board);
/// let heuristics = SearchHeuristics::new();
/// let orderer = MoveOrderer::new(&board, moves, MoveClass::All, 0, None, &heuristics);
///
/// assert_eq!(orderer.count(), 20);
/// ```
#[derive(Clone, Debug)]
pub struct MoveOrderer {
    moves: MoveList,
    scores: ArrayVec<i32, MAX_MOVES>,
    cursor: usize,
}

// Most valuable victim, least valuable attacker.  A pawn taken en passant is not on the
// destination square.
fn capture_score(position: &Position, m: ChessMove, is_capture: bool) -> i32 {
    let attacker = position
        .piece_on(m.get_source())
        .map_or(0, |piece| piece.value());
    let victim = if is_capture {
        position.piece_on(m.get_dest()).unwrap_or(Piece::Pawn).value()
    } else {
        0
    };
    let promoted = m.get_promotion().map_or(0, |p| p.to_piece().value());
    CAPTURE_SCORE + 10 * victim - attacker + promoted
}

impl MoveOrderer {
    /// Score `moves` for the side to move on `board`, which is at `ply` plies from the root.
    ///
    /// With `MoveClass::Captures` only the transposition-table move and the capture scores
    /// are used; killers, counter moves and history are left alone.
    pub fn new<B: Playable + ?Sized>(
        board: &B,
        moves: MoveList,
        class: MoveClass,
        ply: usize,
        tt_move: Option<ChessMove>,
        heuristics: &SearchHeuristics,
    ) -> MoveOrderer {
        let position = board.position();
        let color = position.side_to_move();
        let use_quiet_heuristics = class != MoveClass::Captures;
        let killers = heuristics.killers(ply);
        let counter = board
            .last_move()
            .and_then(|previous| heuristics.counter_move(previous));

        let scores = moves
            .iter()
            .map(|m| {
                let m = *m;
                if Some(m) == tt_move {
                    return TT_MOVE_SCORE;
                }

                let is_capture = m.is_capture(position);
                if is_capture || m.get_promotion().is_some() {
                    return capture_score(position, m, is_capture);
                }

                if !use_quiet_heuristics {
                    0
                } else if killers[0] == Some(m) {
                    KILLER_SCORES[0]
                } else if killers[1] == Some(m) {
                    KILLER_SCORES[1]
                } else if counter == Some(m) {
                    COUNTER_MOVE_SCORE
                } else {
                    heuristics.history_score(m, color)
                }
            })
            .collect();

        MoveOrderer {
            moves: moves,
            scores: scores,
            cursor: 0,
        }
    }

    /// The best move among those at `start` and later, which is moved to `start`.
    ///
    /// Call with `start` = 0, 1, 2, ... in turn.  Panics if `start` is out of range.  Iteration
    /// resumes at `start + 1`.
    pub fn get_move(&mut self, start: usize) -> ChessMove {
        let mut best = start;
        for i in (start + 1)..self.scores.len() {
            if self.scores[i] > self.scores[best] {
                best = i;
            }
        }
        if best != start {
            self.moves[start..=best].rotate_right(1);
            self.scores[start..=best].rotate_right(1);
        }
        self.cursor = start + 1;
        self.moves[start]
    }

    /// The score of the move `get_move(start)` returned.
    #[inline]
    pub fn get_move_score(&self, start: usize) -> i32 {
        self.scores[start]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Moves best first, starting from wherever the last `get_move` call left off.
impl Iterator for MoveOrderer {
    type Item = ChessMove;

    fn next(&mut self) -> Option<ChessMove> {
        if self.cursor >= self.moves.len() {
            return None;
        }
        Some(self.get_move(self.cursor))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.moves.len().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::color::Color;
    use crate::movegen::{capture_moves, legal_moves, moves};
    use crate::square::Square;
    use std::str::FromStr;

    fn mv(s: &str) -> ChessMove {
        ChessMove::from_string(s).unwrap()
    }

    fn scored(orderer: &mut MoveOrderer) -> Vec<(ChessMove, i32)> {
        (0..orderer.len())
            .map(|i| (orderer.get_move(i), orderer.get_move_score(i)))
            .collect()
    }

    #[test]
    fn scores_never_increase() {
        let fens = [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        ];
        let mut heuristics = SearchHeuristics::new();
        heuristics.update_history(mv("a2a3"), &[mv("g2g3")], Color::White, 6);
        for fen in fens.iter() {
            let mut board = Board::from_str(fen).unwrap();
            let legal = legal_moves(&mut board);
            let mut orderer =
                MoveOrderer::new(&board, legal.clone(), MoveClass::All, 0, None, &heuristics);
            let pulled = scored(&mut orderer);
            assert_eq!(pulled.len(), legal.len());
            for pair in pulled.windows(2) {
                assert!(pair[0].1 >= pair[1].1, "{:?} in {}", pair, fen);
            }
            for m in legal.iter() {
                assert!(pulled.iter().any(|(p, _)| p == m));
            }
        }
    }

    #[test]
    fn bands_come_out_in_order() {
        let mut board = Board::from_str("4k3/3p4/8/4P3/8/8/8/R3K3 b Q - 0 1").unwrap();
        board.make_move(mv("d7d5"));
        assert_eq!(board.position().en_passant(), Some(Square::D6));

        let mut heuristics = SearchHeuristics::new();
        heuristics.update_killer(mv("a1a3"), 2);
        heuristics.update_killer(mv("e5e6"), 2);
        heuristics.update_counter(mv("d7d5"), mv("a1b1"));
        heuristics.update_history(mv("a1d1"), &[], Color::White, 5);

        let generated = moves(&board);
        assert_eq!(generated.len(), 18);
        let mut orderer = MoveOrderer::new(
            &board,
            generated.clone(),
            MoveClass::All,
            2,
            Some(mv("a1a2")),
            &heuristics,
        );
        let pulled = scored(&mut orderer);

        let expected = [
            (mv("a1a2"), TT_MOVE_SCORE),
            (mv("e5d6"), CAPTURE_SCORE + 10 * 100 - 100),
            (mv("e5e6"), KILLER_SCORES[0]),
            (mv("a1a3"), KILLER_SCORES[1]),
            (mv("a1b1"), COUNTER_MOVE_SCORE),
            (mv("a1d1"), 25),
        ];
        assert_eq!(&pulled[..6], &expected[..]);

        // Everything else ties at zero and keeps its generated order.
        let rest: Vec<ChessMove> = generated
            .iter()
            .copied()
            .filter(|m| expected.iter().all(|(e, _)| e != m))
            .collect();
        let pulled_rest: Vec<ChessMove> = pulled[6..].iter().map(|(m, _)| *m).collect();
        assert_eq!(pulled_rest, rest);
        assert!(pulled[6..].iter().all(|(_, score)| *score == 0));
    }

    #[test]
    fn captures_ignore_quiet_heuristics() {
        let board = Board::from_str("4k3/8/8/3p4/4P3/8/8/R3K3 w Q - 0 1").unwrap();
        let mut heuristics = SearchHeuristics::new();
        heuristics.update_killer(mv("e4e5"), 0);
        heuristics.update_history(mv("a1a2"), &[], Color::White, 8);

        let all = moves(&board);
        let mut orderer = MoveOrderer::new(&board, all, MoveClass::Captures, 0, None, &heuristics);
        let pulled = scored(&mut orderer);
        assert_eq!(pulled[0].0, mv("e4d5"));
        assert!(pulled[1..].iter().all(|(_, score)| *score == 0));
    }

    #[test]
    fn mvv_lva() {
        let board = Board::from_str("4k3/8/8/8/3q3n/2P2N2/8/3RK3 w - - 0 1").unwrap();
        let heuristics = SearchHeuristics::new();
        let captures = capture_moves(&board);
        let orderer = MoveOrderer::new(&board, captures, MoveClass::Captures, 0, None, &heuristics);
        let order: Vec<ChessMove> = orderer.collect();
        assert_eq!(order, vec![mv("c3d4"), mv("f3d4"), mv("d1d4"), mv("f3h4")]);
    }

    #[test]
    fn en_passant_and_promotions() {
        let board = Board::from_str("4k3/1P6/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let heuristics = SearchHeuristics::new();
        let all = moves(&board);
        let mut orderer = MoveOrderer::new(&board, all, MoveClass::All, 0, None, &heuristics);
        let pulled = scored(&mut orderer);

        assert_eq!(pulled[0], (mv("e5d6"), CAPTURE_SCORE + 10 * 100 - 100));
        assert_eq!(pulled[1], (mv("b7b8q"), CAPTURE_SCORE - 100 + 900));
        assert_eq!(pulled[2], (mv("b7b8r"), CAPTURE_SCORE - 100 + 500));
        assert_eq!(pulled[3], (mv("b7b8b"), CAPTURE_SCORE - 100 + 330));
        assert_eq!(pulled[4], (mv("b7b8n"), CAPTURE_SCORE - 100 + 320));
    }

    #[test]
    fn iterator_yields_best_first() {
        let board = Board::default();
        let heuristics = SearchHeuristics::new();
        let tt_move = Some(mv("g1f3"));
        let mut orderer =
            MoveOrderer::new(&board, moves(&board), MoveClass::All, 0, tt_move, &heuristics);
        assert_eq!(orderer.len(), 20);
        assert_eq!(orderer.next(), Some(mv("g1f3")));
        assert_eq!(orderer.len(), 20);
        assert_eq!(orderer.size_hint(), (19, Some(19)));
        assert_eq!(orderer.next(), Some(mv("a2a3")));
        assert_eq!(orderer.count(), 18);
    }

    #[test]
    fn iterator_picks_up_after_get_move() {
        let board = Board::default();
        let heuristics = SearchHeuristics::new();
        let mut orderer =
            MoveOrderer::new(&board, moves(&board), MoveClass::All, 0, None, &heuristics);
        assert_eq!(orderer.get_move(0), mv("a2a3"));
        assert_eq!(orderer.get_move(1), mv("a2a4"));
        assert_eq!(orderer.size_hint(), (18, Some(18)));
        assert_eq!(orderer.next(), Some(mv("b2b3")));
        assert_eq!(orderer.next(), Some(mv("b2b4")));

        // Going back to an earlier index restarts iteration from there.
        assert_eq!(orderer.get_move(0), mv("a2a3"));
        assert_eq!(orderer.next(), Some(mv("a2a4")));
        assert_eq!(orderer.count(), 18);
    }
}
