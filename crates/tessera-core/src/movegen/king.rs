//! King steps and castling.

use crate::attacks::is_attacked;
use crate::castle_rights::{CastleSide, king_home};
use crate::chess_move::{Move, MoveKind};
use crate::directions::KING;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::MoveList;
use super::knights::gen_steps;

pub(super) fn gen_king(pos: &Position, from: Square, piece: Piece, list: &mut MoveList) {
    gen_steps(pos, from, piece, &KING, list);
    gen_castling(pos, from, piece, list);
}

/// Castling: king and rook on their home squares, the right still held, the
/// squares between them empty, and the king's start, crossing and landing
/// squares not attacked.
fn gen_castling(pos: &Position, from: Square, piece: Piece, list: &mut MoveList) {
    let us = piece.color();
    let them = us.flip();
    if from != king_home(us) {
        return;
    }

    for side in CastleSide::ALL {
        if !pos.castling().has(us, side) {
            continue;
        }
        if pos.piece_at(side.rook_from(us)) != Some(Piece::new(PieceKind::Rook, us)) {
            continue;
        }
        if !side.between(us).iter().all(|&sq| pos.is_empty(sq)) {
            continue;
        }
        let to = side.king_to(us);
        let safe = [from, side.king_crosses(us), to]
            .iter()
            .all(|&sq| !is_attacked(pos, sq, them));
        if safe {
            list.push(Move::new(from, to, piece, None, MoveKind::Castling));
        }
    }
}
