//! Perft (performance test) for move generation correctness verification.
//!
//! Promotion always yields a queen here, so reference counts only match at
//! depths where no promotion is reachable.

use crate::make_move::apply_move;
use crate::movegen::generate_legal_moves;
use crate::position::Position;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without applying them a second time.
pub fn perft(pos: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let side = pos.side_to_move();
    let moves = generate_legal_moves(pos, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .as_slice()
        .iter()
        .filter_map(|mv| apply_move(pos, side, *mv))
        .map(|child| perft(&child, depth - 1))
        .sum()
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(uci_move, node_count)` pairs sorted alphabetically.
pub fn divide(pos: &Position, depth: usize) -> Vec<(String, u64)> {
    let side = pos.side_to_move();
    let mut results: Vec<(String, u64)> = generate_legal_moves(pos, side)
        .as_slice()
        .iter()
        .filter_map(|mv| {
            let child = apply_move(pos, side, *mv)?;
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            Some((mv.to_uci(), count))
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    #[test]
    fn perft_depth_0() {
        assert_eq!(perft(&Position::starting_position(), 0), 1);
    }

    #[test]
    fn perft_startpos_shallow() {
        let p = Position::starting_position();
        assert_eq!(perft(&p, 1), 20);
        assert_eq!(perft(&p, 2), 400);
        assert_eq!(perft(&p, 3), 8_902);
    }

    #[test]
    fn perft_startpos_depth_4() {
        assert_eq!(perft(&Position::starting_position(), 4), 197_281);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_5() {
        assert_eq!(perft(&Position::starting_position(), 5), 4_865_609);
    }

    // Castling through and out of check, en passant and pins all show up by depth 3.
    #[test]
    fn perft_kiwipete() {
        let p = pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        assert_eq!(perft(&p, 1), 48);
        assert_eq!(perft(&p, 2), 2_039);
        assert_eq!(perft(&p, 3), 97_862);
    }

    // Horizontal pins through an en passant capture.
    #[test]
    fn perft_rook_endgame() {
        let p = pos("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
        assert_eq!(perft(&p, 1), 14);
        assert_eq!(perft(&p, 2), 191);
        assert_eq!(perft(&p, 3), 2_812);
        assert_eq!(perft(&p, 4), 43_238);
    }

    #[test]
    fn perft_in_check_evasions() {
        let p = pos("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1");
        assert_eq!(perft(&p, 1), 6);
    }

    #[test]
    fn divide_startpos_depth_1() {
        let results = divide(&Position::starting_position(), 1);
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|(_, count)| *count == 1));
    }

    #[test]
    fn divide_sums_to_perft() {
        let p = Position::starting_position();
        let total: u64 = divide(&p, 3).iter().map(|(_, count)| count).sum();
        assert_eq!(total, perft(&p, 3));
    }
}
