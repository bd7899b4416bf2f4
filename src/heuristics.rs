use crate::chess_move::ChessMove;
use crate::color::{Color, NUM_COLORS};
use crate::square::NUM_SQUARES;
use log::debug;

/// How deep (in plies from the root) a search may record killer moves.
pub const MAX_PLY: usize = 128;

/// How many killer moves are remembered per ply.
pub const NUM_KILLER_MOVES: usize = 2;

/// History scores stay within `-HISTORY_MAX..=HISTORY_MAX`.
pub const HISTORY_MAX: i32 = 16_384;

type HistoryTable = [[[i32; NUM_SQUARES]; NUM_SQUARES]; NUM_COLORS];

/// What a search has learned about quiet moves: killer moves per ply, a refutation for each
/// previous move, and a history score per (color, source, destination).
///
/// One of these belongs to each search.  Nothing here affects which moves are legal; it only
/// changes the order in which a `MoveOrderer` hands them out.
///
/// ```
/// use chess_core::{ChessMove, Color, SearchHeuristics, Square, HISTORY_MAX};
///
/// let mut heuristics = SearchHeuristics::new();
/// let m = ChessMove::new(Square::G1, Square::F3, None);
/// for _ in 0..100 {
///     heuristics.update_history(m, &[], Color::White, 30);
/// }
/// assert!(heuristics.history_score(m, Color::White) <= HISTORY_MAX);
/// assert_eq!(heuristics.history_score(m, Color::Black), 0);
/// ```
#[derive(Clone)]
pub struct SearchHeuristics {
    killers: [[Option<ChessMove>; NUM_KILLER_MOVES]; MAX_PLY],
    counters: [[Option<ChessMove>; NUM_SQUARES]; NUM_SQUARES],
    history: Box<HistoryTable>,
}

impl Default for SearchHeuristics {
    fn default() -> Self {
        SearchHeuristics::new()
    }
}

// Move `entry` towards +/-HISTORY_MAX by `bonus`, more slowly the closer it already is.
#[inline]
fn apply_gravity(entry: &mut i32, bonus: i32) {
    *entry += bonus - *entry * bonus.abs() / HISTORY_MAX;
    *entry = (*entry).max(-HISTORY_MAX).min(HISTORY_MAX);
}

#[inline]
fn depth_bonus(depth: u32) -> i32 {
    let depth = depth.min(HISTORY_MAX as u32) as i64;
    (depth * depth).min(HISTORY_MAX as i64) as i32
}

impl SearchHeuristics {
    pub fn new() -> SearchHeuristics {
        SearchHeuristics {
            killers: [[None; NUM_KILLER_MOVES]; MAX_PLY],
            counters: [[None; NUM_SQUARES]; NUM_SQUARES],
            history: Box::new([[[0; NUM_SQUARES]; NUM_SQUARES]; NUM_COLORS]),
        }
    }

    /// Remember that `m` caused a cutoff at `ply`.  The older of the two killers is forgotten,
    /// unless `m` is already the newest.
    pub fn update_killer(&mut self, m: ChessMove, ply: usize) {
        if ply >= MAX_PLY {
            return;
        }
        let slots = &mut self.killers[ply];
        if slots[0] != Some(m) {
            slots[1] = slots[0];
            slots[0] = Some(m);
        }
    }

    /// The killers at `ply`, newest first.
    #[inline]
    pub fn killers(&self, ply: usize) -> [Option<ChessMove>; NUM_KILLER_MOVES] {
        if ply < MAX_PLY {
            self.killers[ply]
        } else {
            [None; NUM_KILLER_MOVES]
        }
    }

    /// Remember `counter` as the reply to `previous`.
    #[inline]
    pub fn update_counter(&mut self, previous: ChessMove, counter: ChessMove) {
        self.counters[previous.get_source().to_index()][previous.get_dest().to_index()] =
            Some(counter);
    }

    /// The remembered reply to `previous`, if any.
    #[inline]
    pub fn counter_move(&self, previous: ChessMove) -> Option<ChessMove> {
        self.counters[previous.get_source().to_index()][previous.get_dest().to_index()]
    }

    /// `m` caused a cutoff at `depth` for `color`, after the quiet moves in `rejected` failed
    /// to.  Reward `m` and penalize the others.
    pub fn update_history(
        &mut self,
        m: ChessMove,
        rejected: &[ChessMove],
        color: Color,
        depth: u32,
    ) {
        let bonus = depth_bonus(depth);
        apply_gravity(self.entry(m, color), bonus);
        for other in rejected.iter().filter(|other| **other != m) {
            apply_gravity(self.entry(*other, color), -bonus);
        }
    }

    /// Penalize every move in `moves`, as after a node where nothing beat alpha.
    pub fn penalize_history(&mut self, moves: &[ChessMove], color: Color, depth: u32) {
        let bonus = depth_bonus(depth);
        for m in moves.iter() {
            apply_gravity(self.entry(*m, color), -bonus);
        }
    }

    /// The history score of `m` when played by `color`.
    #[inline]
    pub fn history_score(&self, m: ChessMove, color: Color) -> i32 {
        self.history[color.to_index()][m.get_source().to_index()][m.get_dest().to_index()]
    }

    #[inline]
    fn entry(&mut self, m: ChessMove, color: Color) -> &mut i32 {
        &mut self.history[color.to_index()][m.get_source().to_index()][m.get_dest().to_index()]
    }

    pub fn clear_history(&mut self) {
        debug!("clearing history scores");
        *self.history = [[[0; NUM_SQUARES]; NUM_SQUARES]; NUM_COLORS];
    }

    pub fn clear_killers(&mut self, ply: usize) {
        if ply < MAX_PLY {
            self.killers[ply] = [None; NUM_KILLER_MOVES];
        }
    }

    pub fn clear_counters(&mut self) {
        debug!("clearing counter moves");
        self.counters = [[None; NUM_SQUARES]; NUM_SQUARES];
    }

    /// Forget everything, as before a new game.
    pub fn clear(&mut self) {
        debug!("clearing all search heuristics");
        self.killers = [[None; NUM_KILLER_MOVES]; MAX_PLY];
        self.clear_counters();
        self.clear_history();
    }
}
