//! Pawn pushes, captures, en passant and promotion.

use crate::chess_move::{Move, MoveKind};
use crate::directions::PAWN_CAPTURE_FILES;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::MoveList;

pub(super) fn gen_pawn(pos: &Position, from: Square, piece: Piece, list: &mut MoveList) {
    let us = piece.color();
    let forward = us.forward();

    let kind_for = |to: Square| {
        if to.rank() == us.promotion_rank() {
            MoveKind::Promotion
        } else {
            MoveKind::Normal
        }
    };

    if let Some(one) = from.offset(0, forward)
        && pos.is_empty(one)
    {
        list.push(Move::new(from, one, piece, None, kind_for(one)));

        if from.rank() == us.pawn_rank()
            && let Some(two) = one.offset(0, forward)
            && pos.is_empty(two)
        {
            list.push(Move::new(from, two, piece, None, MoveKind::DoublePush));
        }
    }

    for file_delta in PAWN_CAPTURE_FILES {
        let Some(to) = from.offset(file_delta, forward) else {
            continue;
        };
        if let Some(target) = pos.piece_at(to)
            && !target.is(us)
        {
            list.push(Move::new(from, to, piece, Some(target), kind_for(to)));
        }
    }

    gen_en_passant(pos, from, piece, list);
}

/// Capture a pawn that double-pushed last ply and now stands beside `from`.
fn gen_en_passant(pos: &Position, from: Square, piece: Piece, list: &mut MoveList) {
    let Some(last) = pos.last_move() else {
        return;
    };
    let Some(target) = last.en_passant_target() else {
        return;
    };

    let victim = Piece::new(PieceKind::Pawn, piece.color().flip());
    let beside = last.to.rank() == from.rank() && last.to.file().abs_diff(from.file()) == 1;
    let lands_forward = target.rank() as i8 == from.rank() as i8 + piece.color().forward();

    if beside && lands_forward && pos.piece_at(last.to) == Some(victim) && pos.is_empty(target) {
        list.push(Move::new(from, target, piece, Some(victim), MoveKind::EnPassant));
    }
}
