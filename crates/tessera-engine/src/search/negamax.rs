//! Negamax alpha-beta search with quiescence.
//!
//! Both searches are fail-hard: returned scores are clamped to the
//! `[alpha, beta]` window they were called with.

use tessera_core::{Move, Position, apply_move, generate_captures, generate_pseudo_legal, is_in_check};

use crate::eval::evaluate_relative;
use crate::search::SearchParams;
use crate::search::control::SearchControl;
use crate::search::heuristics::{HistoryTable, KillerTable};
use crate::search::ordering::order_moves;

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 30_000;

/// Base score for checkmate (adjusted by ply for mate distance).
pub const MATE_SCORE: i32 = 29_000;

/// Scores above this threshold indicate a forced mate.
pub const MATE_THRESHOLD: i32 = 28_000;

/// Maximum search depth (in plies) for array sizing and recursion limits.
pub const MAX_PLY: usize = 128;

/// Search state threaded through negamax calls.
pub(super) struct SearchContext<'a> {
    /// Total nodes visited.
    pub nodes: u64,
    /// Pruning and reduction tunables.
    pub params: &'a SearchParams,
    /// Stop flag, consulted between root moves.
    pub control: &'a SearchControl,
    /// Set when a root move loop was cut short by the stop flag.
    pub aborted: bool,
    /// Whether the stop flag is honoured in this iteration.
    pub stoppable: bool,
    pub killers: KillerTable,
    pub history: HistoryTable,
}

impl<'a> SearchContext<'a> {
    pub fn new(params: &'a SearchParams, control: &'a SearchControl) -> Self {
        Self {
            nodes: 0,
            params,
            control,
            aborted: false,
            stoppable: false,
            killers: KillerTable::new(),
            history: HistoryTable::new(),
        }
    }
}

/// Negamax alpha-beta search.
///
/// Returns the score for the side to move. When `pv` is supplied it receives
/// the principal variation found below this node.
#[allow(clippy::too_many_arguments)]
pub(super) fn alphabeta(
    pos: &Position,
    depth: i32,
    ply: usize,
    mut alpha: i32,
    beta: i32,
    allow_null: bool,
    mut pv: Option<&mut Vec<Move>>,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    if depth <= 0 {
        return quiesce(pos, ply, alpha, beta, ctx);
    }
    if ply >= MAX_PLY {
        return evaluate_relative(pos).clamp(alpha, beta);
    }

    ctx.nodes += 1;
    let side = pos.side_to_move();
    let in_check = is_in_check(pos, side);
    let depth = if in_check { depth + 1 } else { depth };
    let params = ctx.params;

    if ply > 0 && !in_check {
        // Reverse futility pruning
        if depth <= params.rfp_max_depth {
            let static_eval = evaluate_relative(pos);
            if static_eval - params.rfp_margin * depth >= beta {
                return beta;
            }
        }

        // Null-move pruning
        if allow_null && depth >= params.null_move_min_depth && pos.has_non_pawn_material(side) {
            let passed = pos.make_null_move();
            let reduced = depth - 1 - params.null_move_reduction;
            let score = -alphabeta(&passed, reduced, ply + 1, -beta, -beta + 1, false, None, ctx);
            if score >= beta {
                return beta;
            }
        }
    }

    let mut moves = generate_pseudo_legal(pos, side);
    order_moves(&mut moves, side, ply, &ctx.killers, &ctx.history);

    let mut searched = 0usize;
    for &mv in &moves {
        if ply == 0 && ctx.stoppable && ctx.control.should_stop() {
            ctx.aborted = true;
            break;
        }

        let Some(child) = apply_move(pos, side, mv) else {
            continue;
        };

        let mut line = Vec::new();
        let quiet = mv.is_quiet();
        let reducible = searched >= params.lmr_min_moves
            && depth >= params.lmr_min_depth
            && quiet
            && !in_check
            && !is_in_check(&child, side.flip());
        searched += 1;

        let score = if reducible {
            let reduced_depth = depth - 1 - params.lmr_reduction;
            let reduced = -alphabeta(&child, reduced_depth, ply + 1, -alpha - 1, -alpha, true, None, ctx);
            if reduced > alpha {
                let child_pv = pv.is_some().then_some(&mut line);
                -alphabeta(&child, depth - 1, ply + 1, -beta, -alpha, true, child_pv, ctx)
            } else {
                reduced
            }
        } else {
            let child_pv = pv.is_some().then_some(&mut line);
            -alphabeta(&child, depth - 1, ply + 1, -beta, -alpha, true, child_pv, ctx)
        };

        if score >= beta {
            if quiet {
                ctx.killers.store(ply, mv);
                ctx.history.reward(side, mv, depth);
            }
            return beta;
        }

        if score > alpha {
            alpha = score;
            if let Some(pv) = pv.as_mut() {
                pv.clear();
                pv.push(mv);
                pv.append(&mut line);
            }
        }
    }

    if searched == 0 && !ctx.aborted {
        return if in_check {
            -(MATE_SCORE - ply as i32)
        } else {
            0
        };
    }

    alpha
}

/// Quiescence search: resolve captures before trusting the static evaluation.
pub(super) fn quiesce(
    pos: &Position,
    ply: usize,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    ctx.nodes += 1;

    let stand_pat = evaluate_relative(pos);
    if ply >= MAX_PLY {
        return stand_pat.clamp(alpha, beta);
    }

    // Stand-pat: the side to move can choose not to capture
    if stand_pat >= beta {
        return beta;
    }
    // Delta pruning: not even winning a queen would reach alpha
    if stand_pat + ctx.params.delta_margin < alpha {
        return alpha;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let side = pos.side_to_move();
    let mut captures = generate_captures(pos, side);
    order_moves(&mut captures, side, ply, &ctx.killers, &ctx.history);

    for &mv in &captures {
        let Some(child) = apply_move(pos, side, mv) else {
            continue;
        };
        let score = -quiesce(&child, ply + 1, -beta, -alpha, ctx);
        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}
