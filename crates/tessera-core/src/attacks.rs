//! Attack and check detection by scanning outward from the target square.
//!
//! No precomputed attack tables: every query walks the shared step tables in
//! [`crate::directions`]. Rays stop at the first occupied cell.

use crate::color::Color;
use crate::directions::{DIAGONAL, KING, KNIGHT, ORTHOGONAL, PAWN_CAPTURE_FILES};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Return `true` if any piece of `by` attacks `target`.
///
/// The contents of `target` itself are ignored, so this also answers
/// "is this piece defended" when asked about its own color.
pub fn is_attacked(pos: &Position, target: Square, by: Color) -> bool {
    // A pawn of `by` attacks from one rank behind the target, from its point of view.
    let pawn = Piece::new(PieceKind::Pawn, by);
    for file_delta in PAWN_CAPTURE_FILES {
        if let Some(sq) = target.offset(file_delta, -by.forward())
            && pos.piece_at(sq) == Some(pawn)
        {
            return true;
        }
    }

    if any_step_holds(pos, target, &KNIGHT, Piece::new(PieceKind::Knight, by)) {
        return true;
    }
    if any_step_holds(pos, target, &KING, Piece::new(PieceKind::King, by)) {
        return true;
    }

    let rook = Piece::new(PieceKind::Rook, by);
    let bishop = Piece::new(PieceKind::Bishop, by);
    let queen = Piece::new(PieceKind::Queen, by);

    ORTHOGONAL.iter().any(|&dir| {
        first_piece_along(pos, target, dir).is_some_and(|p| p == rook || p == queen)
    }) || DIAGONAL.iter().any(|&dir| {
        first_piece_along(pos, target, dir).is_some_and(|p| p == bishop || p == queen)
    })
}

/// Return `true` if `side`'s king is attacked.
///
/// A board without a king for `side` is never in check.
pub fn is_in_check(pos: &Position, side: Color) -> bool {
    pos.king_square(side)
        .is_some_and(|king| is_attacked(pos, king, side.flip()))
}

fn any_step_holds(pos: &Position, from: Square, steps: &[(i8, i8)], piece: Piece) -> bool {
    steps.iter().any(|&(df, dr)| {
        from.offset(df, dr)
            .is_some_and(|sq| pos.piece_at(sq) == Some(piece))
    })
}

/// Walk from `from` (exclusive) in direction `dir` and return the first piece met.
pub(crate) fn first_piece_along(pos: &Position, from: Square, dir: (i8, i8)) -> Option<Piece> {
    let mut sq = from;
    while let Some(next) = sq.offset(dir.0, dir.1) {
        if let Some(piece) = pos.piece_at(next) {
            return Some(piece);
        }
        sq = next;
    }
    None
}
