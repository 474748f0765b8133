//! Killer move table and history heuristic for quiet move ordering.

use tessera_core::{Color, Move, Square};

use crate::search::negamax::MAX_PLY;

/// Two killer moves per ply: quiet moves that caused beta cutoffs.
pub struct KillerTable {
    slots: [[Move; 2]; MAX_PLY],
}

impl KillerTable {
    /// Create an empty killer table.
    pub fn new() -> Self {
        Self {
            slots: [[Move::NULL; 2]; MAX_PLY],
        }
    }

    /// Store a killer move at the given ply.
    ///
    /// Shifts slot 0 to slot 1 if the new move differs from slot 0.
    pub fn store(&mut self, ply: usize, mv: Move) {
        if ply >= MAX_PLY {
            return;
        }
        if self.slots[ply][0] != mv {
            self.slots[ply][1] = self.slots[ply][0];
            self.slots[ply][0] = mv;
        }
    }

    /// Check if a move is a killer at the given ply.
    pub fn is_killer(&self, ply: usize, mv: Move) -> bool {
        if ply >= MAX_PLY || mv.is_null() {
            return false;
        }
        self.slots[ply][0] == mv || self.slots[ply][1] == mv
    }
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Maximum absolute value for history scores (prevents overflow).
const HISTORY_MAX: i32 = 16_384;

/// History heuristic table, indexed by `[side][from][to]`.
///
/// Rewards quiet moves that cause beta cutoffs with `depth²`.
pub struct HistoryTable {
    table: [[[i32; Square::COUNT]; Square::COUNT]; Color::COUNT],
}

impl HistoryTable {
    /// Create a zeroed history table.
    pub fn new() -> Self {
        Self {
            table: [[[0; Square::COUNT]; Square::COUNT]; Color::COUNT],
        }
    }

    /// Reward a quiet move that caused a beta cutoff.
    pub fn reward(&mut self, side: Color, mv: Move, depth: i32) {
        let depth = depth.max(0);
        let entry = &mut self.table[side.index()][mv.from().index()][mv.to().index()];
        *entry = (*entry + depth * depth).min(HISTORY_MAX);
    }

    /// Get the history score for a move.
    pub fn score(&self, side: Color, mv: Move) -> i32 {
        self.table[side.index()][mv.from().index()][mv.to().index()]
    }

    /// Return `true` if no move has been rewarded yet.
    pub fn is_empty(&self) -> bool {
        self.table.iter().flatten().flatten().all(|&weight| weight == 0)
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::{MoveKind, Piece};

    fn quiet(from: Square, to: Square) -> Move {
        Move::new(from, to, Piece::WHITE_PAWN, None, MoveKind::Normal)
    }

    #[test]
    fn killer_store_and_check() {
        let mut kt = KillerTable::new();
        let mv1 = quiet(Square::E2, Square::E3);
        let mv2 = quiet(Square::D2, Square::D3);

        kt.store(5, mv1);
        assert!(kt.is_killer(5, mv1));
        assert!(!kt.is_killer(5, mv2));

        // mv1 shifts to slot 1
        kt.store(5, mv2);
        assert!(kt.is_killer(5, mv1));
        assert!(kt.is_killer(5, mv2));
    }

    #[test]
    fn killer_third_move_evicts_oldest() {
        let mut kt = KillerTable::new();
        let mv1 = quiet(Square::E2, Square::E3);
        let mv2 = quiet(Square::D2, Square::D3);
        let mv3 = quiet(Square::C2, Square::C3);
        kt.store(0, mv1);
        kt.store(0, mv2);
        kt.store(0, mv2);
        assert!(kt.is_killer(0, mv1), "re-storing slot 0 must not shift");
        kt.store(0, mv3);
        assert!(!kt.is_killer(0, mv1));
        assert!(kt.is_killer(0, mv2) && kt.is_killer(0, mv3));
    }

    #[test]
    fn killer_different_plies_independent() {
        let mut kt = KillerTable::new();
        let mv = quiet(Square::E2, Square::E3);
        kt.store(3, mv);
        assert!(kt.is_killer(3, mv));
        assert!(!kt.is_killer(4, mv));
        assert!(!kt.is_killer(MAX_PLY + 1, mv));
    }

    #[test]
    fn empty_slots_never_match_null() {
        assert!(!KillerTable::new().is_killer(0, Move::NULL));
    }

    #[test]
    fn history_rewards_depth_squared_per_side() {
        let mut ht = HistoryTable::new();
        let mv = quiet(Square::E2, Square::E3);
        assert_eq!(ht.score(Color::White, mv), 0);

        ht.reward(Color::White, mv, 4);
        ht.reward(Color::White, mv, 3);
        assert_eq!(ht.score(Color::White, mv), 16 + 9);
        assert_eq!(ht.score(Color::Black, mv), 0);
    }

    #[test]
    fn history_empty_until_rewarded() {
        let mut ht = HistoryTable::new();
        assert!(ht.is_empty());
        ht.reward(Color::Black, quiet(Square::G8, Square::F6), 2);
        assert!(!ht.is_empty());
    }

    #[test]
    fn history_clamped() {
        let mut ht = HistoryTable::new();
        let mv = quiet(Square::A2, Square::A3);
        for _ in 0..400 {
            ht.reward(Color::White, mv, 10);
        }
        assert_eq!(ht.score(Color::White, mv), HISTORY_MAX);
    }
}
