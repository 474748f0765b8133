//! Static evaluation.
//!
//! [`evaluate`] sums independent terms, each scored from White's perspective:
//! material (with the bishop pair), piece-square tables, mobility, pawn
//! structure, king safety, threats and central control, plus a tempo bonus for
//! the side to move. The search works with [`evaluate_relative`].

pub mod center;
pub mod king_safety;
pub mod material;
pub mod mobility;
pub mod pawns;
pub mod pst;
pub mod threats;

use tessera_core::{Color, Position};

use self::center::evaluate_center;
use self::king_safety::evaluate_king_safety;
use self::material::material;
use self::mobility::evaluate_mobility;
use self::pawns::evaluate_pawns;
use self::pst::evaluate_pst;
use self::threats::evaluate_threats;

/// Bonus for having the move.
pub const TEMPO_BONUS: i32 = 10;

/// Evaluate `pos` in centipawns, positive when White is better.
pub fn evaluate(pos: &Position) -> i32 {
    let tempo = match pos.side_to_move() {
        Color::White => TEMPO_BONUS,
        Color::Black => -TEMPO_BONUS,
    };

    material(pos)
        + evaluate_pst(pos)
        + evaluate_mobility(pos)
        + evaluate_pawns(pos)
        + evaluate_king_safety(pos)
        + evaluate_threats(pos)
        + evaluate_center(pos)
        + tempo
}

/// Evaluate `pos` from the side to move's perspective.
#[inline]
pub fn evaluate_relative(pos: &Position) -> i32 {
    match pos.side_to_move() {
        Color::White => evaluate(pos),
        Color::Black => -evaluate(pos),
    }
}

/// Map a White-relative score to White's winning chances in percent.
///
/// A logistic curve with a 100 centipawn scale: 0 maps to 50%. For display only.
pub fn win_probability(score: i32) -> f64 {
    100.0 / (1.0 + (-f64::from(score) / 100.0).exp())
}
