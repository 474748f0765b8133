//! Knight moves from the fixed leap table.

use crate::chess_move::{Move, MoveKind};
use crate::directions::KNIGHT;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

use super::MoveList;

pub(super) fn gen_knight(pos: &Position, from: Square, piece: Piece, list: &mut MoveList) {
    gen_steps(pos, from, piece, &KNIGHT, list);
}

/// One move per step that lands on an empty or enemy-occupied square.
pub(super) fn gen_steps(
    pos: &Position,
    from: Square,
    piece: Piece,
    steps: &[(i8, i8)],
    list: &mut MoveList,
) {
    for &(df, dr) in steps {
        let Some(to) = from.offset(df, dr) else {
            continue;
        };
        match pos.piece_at(to) {
            None => list.push(Move::new(from, to, piece, None, MoveKind::Normal)),
            Some(target) if !target.is(piece.color()) => {
                list.push(Move::new(from, to, piece, Some(target), MoveKind::Normal));
            }
            Some(_) => {}
        }
    }
}
