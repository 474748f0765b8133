//! Central control: occupation of and pressure on d4, e4, d5 and e5.
//!
//! All scores are from White's perspective.

use tessera_core::{Color, Position, Square, is_attacked};

/// The four center squares.
pub const CENTER: [Square; 4] = [Square::D4, Square::E4, Square::D5, Square::E5];

/// Bonus for each own piece standing on a center square.
const OCCUPATION_BONUS: i32 = 10;

/// Bonus for each center square a side attacks.
const CONTROL_BONUS: i32 = 5;

fn center_for_side(pos: &Position, color: Color) -> i32 {
    CENTER
        .iter()
        .map(|&sq| {
            let occupied = pos.piece_at(sq).is_some_and(|piece| piece.is(color));
            let controlled = is_attacked(pos, sq, color);
            i32::from(occupied) * OCCUPATION_BONUS + i32::from(controlled) * CONTROL_BONUS
        })
        .sum()
}

/// Evaluate central occupation and control from White's perspective.
pub fn evaluate_center(pos: &Position) -> i32 {
    center_for_side(pos, Color::White) - center_for_side(pos, Color::Black)
}
