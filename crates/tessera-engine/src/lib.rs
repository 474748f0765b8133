//! Evaluation and search for tessera.
//!
//! [`evaluate`] scores a position from White's point of view; [`Searcher`]
//! runs iterative-deepening negamax on top of it and reports scores for the
//! side to move.

pub mod eval;
pub mod search;

pub use eval::{evaluate, evaluate_relative, win_probability};
pub use search::control::SearchControl;
pub use search::negamax::{MATE_SCORE, MATE_THRESHOLD};
pub use search::{ScoredLine, SearchParams, SearchResult, Searcher, format_line};
