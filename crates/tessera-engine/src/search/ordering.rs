//! Move ordering: MVV-LVA captures, then killers, then history.

use std::cmp::Reverse;

use tessera_core::{Color, Move, MoveList, PieceKind};

use crate::eval::material::piece_value;
use crate::search::heuristics::{HistoryTable, KillerTable};

/// Base key for captures and promotions, above every quiet move.
const CAPTURE_BASE: i32 = 1_000_000;

/// Key for a killer move at the current ply.
const KILLER_SCORE: i32 = 900_000;

/// Score a move for ordering purposes.
///
/// Score bands:
/// - Captures and promotions: `CAPTURE_BASE + victim * 10 - attacker`, with a
///   promotion counted as capturing a queen
/// - Killer moves at this ply: 900,000
/// - Other quiet moves: their history weight (0..=16,384)
pub fn score_move(
    mv: Move,
    side: Color,
    ply: usize,
    killers: &KillerTable,
    history: &HistoryTable,
) -> i32 {
    let victim = if mv.is_promotion() {
        Some(PieceKind::Queen)
    } else {
        mv.captured().map(|piece| piece.kind())
    };

    match victim {
        Some(victim) => CAPTURE_BASE + piece_value(victim) * 10 - piece_value(mv.piece().kind()),
        None if killers.is_killer(ply, mv) => KILLER_SCORE,
        None => history.score(side, mv),
    }
}

/// Sort `moves` by descending ordering key. Ties keep generation order.
pub fn order_moves(
    moves: &mut MoveList,
    side: Color,
    ply: usize,
    killers: &KillerTable,
    history: &HistoryTable,
) {
    moves
        .as_mut_slice()
        .sort_by_cached_key(|&mv| Reverse(score_move(mv, side, ply, killers, history)));
}
