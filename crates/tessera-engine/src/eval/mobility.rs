//! Piece mobility evaluation.
//!
//! Mobility counts the pseudo-legal destinations of each knight, bishop, rook
//! and queen: empty squares and enemy-occupied squares, with rays stopping at
//! the first piece. Kings and pawns are not scored here.

use tessera_core::directions::{DIAGONAL, KING, KNIGHT, ORTHOGONAL};
use tessera_core::{Color, Piece, PieceKind, Position, Square};

/// Bonus per reachable square.
const MOBILITY_BONUS: i32 = 3;

/// Number of pseudo-legal destinations for `piece` standing on `from`.
pub(crate) fn destinations(pos: &Position, from: Square, piece: Piece) -> u32 {
    match piece.kind() {
        PieceKind::Knight => KNIGHT
            .iter()
            .filter_map(|&(df, dr)| from.offset(df, dr))
            .filter(|&sq| reachable(pos, sq, piece.color()))
            .count() as u32,
        PieceKind::Bishop => ray_destinations(pos, from, piece.color(), &DIAGONAL),
        PieceKind::Rook => ray_destinations(pos, from, piece.color(), &ORTHOGONAL),
        PieceKind::Queen => ray_destinations(pos, from, piece.color(), &KING),
        PieceKind::Pawn | PieceKind::King => 0,
    }
}

fn reachable(pos: &Position, sq: Square, color: Color) -> bool {
    pos.piece_at(sq).is_none_or(|occupant| !occupant.is(color))
}

fn ray_destinations(pos: &Position, from: Square, color: Color, dirs: &[(i8, i8)]) -> u32 {
    let mut count = 0;
    for &(df, dr) in dirs {
        let mut sq = from;
        while let Some(next) = sq.offset(df, dr) {
            match pos.piece_at(next) {
                None => count += 1,
                Some(occupant) => {
                    if !occupant.is(color) {
                        count += 1;
                    }
                    break;
                }
            }
            sq = next;
        }
    }
    count
}

fn evaluate_mobility_for_side(pos: &Position, color: Color) -> i32 {
    pos.pieces_of(color)
        .map(|(sq, piece)| destinations(pos, sq, piece) as i32 * MOBILITY_BONUS)
        .sum()
}

/// Evaluate piece mobility from White's perspective.
pub fn evaluate_mobility(pos: &Position) -> i32 {
    evaluate_mobility_for_side(pos, Color::White) - evaluate_mobility_for_side(pos, Color::Black)
}
