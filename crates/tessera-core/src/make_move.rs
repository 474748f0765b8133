//! Copy-make move application. The single place where legality is decided.

use tracing::trace;

use crate::attacks::is_in_check;
use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::{LastMove, Position};
use crate::square::Square;

/// Apply `mv` for `side` to a copy of `pos`.
///
/// Relocates the piece, moves the rook when castling, substitutes a queen on
/// promotion and removes the bypassed pawn on en passant. Castling rights tied
/// to the origin or destination square are revoked, the last-move record and
/// counters are updated and the turn passes to the opponent.
///
/// Returns `None` if the result leaves `side`'s king in check. `pos` itself is
/// never modified.
pub fn apply_move(pos: &Position, side: Color, mv: Move) -> Option<Position> {
    debug_assert_eq!(
        pos.piece_at(mv.from()),
        Some(mv.piece()),
        "move {mv} does not match the board"
    );

    let mut next = *pos;
    let from = mv.from();
    let to = mv.to();

    next.clear(from);
    match mv.kind() {
        MoveKind::EnPassant => {
            // The bypassed pawn sits beside the origin, on the destination file.
            if let Some(victim) = Square::new(to.file(), from.rank()) {
                next.clear(victim);
            }
        }
        MoveKind::Castling => {
            if let Some(wing) = CastleSide::from_king_to(to) {
                let rook_from = wing.rook_from(side);
                if let Some(rook) = next.piece_at(rook_from) {
                    next.clear(rook_from);
                    next.put(wing.rook_to(side), rook);
                }
            }
        }
        MoveKind::Normal | MoveKind::DoublePush | MoveKind::Promotion => {}
    }
    next.put(to, mv.placed_piece());

    next.revoke_castling(from);
    next.revoke_castling(to);

    next.set_last_move(Some(LastMove {
        from,
        to,
        kind: mv.piece().kind(),
        captured: mv.captured().map(|piece| piece.kind()),
    }));

    let halfmove = if mv.piece().kind() == PieceKind::Pawn || mv.is_capture() {
        0
    } else {
        pos.halfmove_clock().saturating_add(1)
    };
    let fullmove = match side {
        Color::White => pos.fullmove_number(),
        Color::Black => pos.fullmove_number().saturating_add(1),
    };
    next.set_counters(halfmove, fullmove);
    next.set_side_to_move(side.flip());

    if is_in_check(&next, side) {
        trace!(%mv, "rejected: leaves own king in check");
        return None;
    }
    Some(next)
}

impl Position {
    /// Apply `mv` for the side to move. See [`apply_move`].
    pub fn make_move(&self, mv: Move) -> Option<Position> {
        apply_move(self, self.side_to_move(), mv)
    }

    /// Pass the turn without moving.
    ///
    /// Clears the en passant opportunity. Used by null-move pruning; never
    /// call it while the side to move is in check.
    pub fn make_null_move(&self) -> Position {
        let mut next = *self;
        next.set_last_move(None);
        next.set_counters(
            self.halfmove_clock().saturating_add(1),
            self.fullmove_number(),
        );
        next.set_side_to_move(self.side_to_move().flip());
        next
    }
}
