//! Rook, bishop and queen moves: walk each ray until blocked.

use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

use super::MoveList;

/// Emit quiet moves along each ray in `dirs` and one capture at the first enemy piece.
pub(super) fn gen_slider(
    pos: &Position,
    from: Square,
    piece: Piece,
    dirs: &[(i8, i8)],
    list: &mut MoveList,
) {
    let us = piece.color();
    for &(df, dr) in dirs {
        let mut sq = from;
        while let Some(to) = sq.offset(df, dr) {
            match pos.piece_at(to) {
                None => list.push(Move::new(from, to, piece, None, MoveKind::Normal)),
                Some(target) => {
                    if !target.is(us) {
                        list.push(Move::new(from, to, piece, Some(target), MoveKind::Normal));
                    }
                    break;
                }
            }
            sq = to;
        }
    }
}
