//! Search algorithms and move ordering.

pub mod control;
pub mod heuristics;
pub mod negamax;
pub mod ordering;

use std::fmt;

use tessera_core::{Move, Position, apply_move, generate_pseudo_legal};
use tracing::debug;

use control::SearchControl;
use negamax::{INF, MATE_THRESHOLD, SearchContext, alphabeta};
use ordering::order_moves;

/// Pruning and reduction tunables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Deepest remaining depth at which reverse futility pruning applies.
    pub rfp_max_depth: i32,
    /// Reverse futility margin per ply of remaining depth.
    pub rfp_margin: i32,
    /// Shallowest remaining depth at which a null move is tried.
    pub null_move_min_depth: i32,
    /// Extra depth reduction for the null-move search.
    pub null_move_reduction: i32,
    /// Shallowest remaining depth at which late moves are reduced.
    pub lmr_min_depth: i32,
    /// Number of moves searched at full depth before reductions start.
    pub lmr_min_moves: usize,
    /// Plies taken off a reduced move's first search.
    pub lmr_reduction: i32,
    /// Quiescence gives up when stand-pat trails alpha by more than this.
    pub delta_margin: i32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            rfp_max_depth: 3,
            rfp_margin: 120,
            null_move_min_depth: 3,
            null_move_reduction: 2,
            lmr_min_depth: 3,
            lmr_min_moves: 3,
            lmr_reduction: 1,
            delta_margin: 1_100,
        }
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Score in centipawns for the side to move.
    pub score: i32,
    /// Principal variation; empty when the side to move has no legal move.
    pub pv: Vec<Move>,
    /// Total nodes visited, quiescence included.
    pub nodes: u64,
    /// Depth of the last completed iteration.
    pub depth: u8,
}

impl SearchResult {
    /// First move of the principal variation.
    pub fn best_move(&self) -> Option<Move> {
        self.pv.first().copied()
    }

    /// Whether the score announces a forced mate for either side.
    pub fn is_mate(&self) -> bool {
        self.score.abs() > MATE_THRESHOLD
    }
}

/// One root move with its score and the line it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredLine {
    /// Score in centipawns for the side to move at the root.
    pub score: i32,
    /// The root move followed by the expected continuation.
    pub line: Vec<Move>,
}

impl ScoredLine {
    /// The root move.
    pub fn first_move(&self) -> Option<Move> {
        self.line.first().copied()
    }
}

impl fmt::Display for ScoredLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+} {}", self.score, format_line(&self.line))
    }
}

/// Moves in coordinate notation separated by spaces.
pub fn format_line(line: &[Move]) -> String {
    line.iter()
        .map(|mv| mv.to_uci())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Iterative-deepening searcher.
///
/// Killer and history tables are rebuilt for every top-level call and shared
/// by the iterations within it.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    params: SearchParams,
    control: SearchControl,
}

impl Searcher {
    /// Create a searcher with default tunables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a searcher with the given tunables.
    pub fn with_params(params: SearchParams) -> Self {
        Self {
            params,
            control: SearchControl::new(),
        }
    }

    /// Use `control` as this searcher's stop flag.
    pub fn with_control(mut self, control: SearchControl) -> Self {
        self.control = control;
        self
    }

    /// The tunables in use.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// The stop flag; clone it to stop the search from another thread.
    pub fn control(&self) -> &SearchControl {
        &self.control
    }

    /// Run iterative deepening on `pos` for depths `1..=max_depth`.
    ///
    /// Depth 1 always completes. Deeper iterations are abandoned as soon as
    /// the stop flag is seen, and the last completed one is returned.
    pub fn search(&self, pos: &Position, max_depth: u8) -> SearchResult {
        let mut ctx = SearchContext::new(&self.params, &self.control);
        let mut result = SearchResult {
            score: 0,
            pv: Vec::new(),
            nodes: 0,
            depth: 0,
        };

        for depth in 1..=max_depth.max(1) {
            ctx.stoppable = depth > 1;
            if ctx.stoppable && self.control.should_stop() {
                break;
            }

            let mut line = Vec::new();
            let score = alphabeta(pos, i32::from(depth), 0, -INF, INF, true, Some(&mut line), &mut ctx);
            if ctx.aborted {
                debug!(depth, nodes = ctx.nodes, "iteration aborted");
                break;
            }

            debug!(depth, score, nodes = ctx.nodes, pv = %format_line(&line), "iteration complete");
            result.score = score;
            result.pv = line;
            result.depth = depth;
        }

        result.nodes = ctx.nodes;
        result
    }

    /// Score every legal root move and return the best `n` lines.
    ///
    /// Each child is searched at `depth - 1` with a full window. Lines are
    /// sorted best first for the side to move; ties keep move-ordering order.
    /// Returns an empty list when there is no legal move.
    pub fn top_moves(&self, pos: &Position, depth: u8, n: usize) -> Vec<ScoredLine> {
        let side = pos.side_to_move();
        let mut ctx = SearchContext::new(&self.params, &self.control);

        let mut moves = generate_pseudo_legal(pos, side);
        order_moves(&mut moves, side, 0, &ctx.killers, &ctx.history);

        let mut lines = Vec::new();
        for &mv in &moves {
            if !lines.is_empty() && self.control.should_stop() {
                break;
            }
            let Some(child) = apply_move(pos, side, mv) else {
                continue;
            };

            let mut rest = Vec::new();
            let score = -alphabeta(&child, i32::from(depth) - 1, 1, -INF, INF, true, Some(&mut rest), &mut ctx);
            let mut line = Vec::with_capacity(rest.len() + 1);
            line.push(mv);
            line.append(&mut rest);

            debug!(%mv, score, line = %format_line(&line), "root move scored");
            lines.push(ScoredLine { score, line });
        }

        lines.sort_by(|a, b| b.score.cmp(&a.score));
        lines.truncate(n);
        lines
    }
}
