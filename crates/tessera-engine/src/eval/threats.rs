//! Threat evaluation: penalties for pieces standing en prise.
//!
//! A knight, bishop, rook or queen attacked by the opponent costs a fixed
//! amount; the penalty doubles when no friendly piece defends it.
//! All scores are from White's perspective.

use tessera_core::{Color, PieceKind, Position, is_attacked};

/// Penalty for an attacked piece, by kind. Pawns and kings are never scored.
const fn threat_penalty(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Queen => -40,
        PieceKind::Rook => -25,
        PieceKind::Bishop | PieceKind::Knight => -15,
        PieceKind::Pawn | PieceKind::King => 0,
    }
}

fn threats_for_side(pos: &Position, color: Color) -> i32 {
    let mut score = 0;
    for (sq, piece) in pos.pieces_of(color) {
        let penalty = threat_penalty(piece.kind());
        if penalty == 0 || !is_attacked(pos, sq, color.flip()) {
            continue;
        }
        score += if is_attacked(pos, sq, color) {
            penalty
        } else {
            penalty * 2
        };
    }
    score
}

/// Evaluate hanging and attacked pieces from White's perspective.
pub fn evaluate_threats(pos: &Position) -> i32 {
    threats_for_side(pos, Color::White) - threats_for_side(pos, Color::Black)
}

#[cfg(test)]
mod tests {
    use tessera_core::Position;

    use super::evaluate_threats;

    #[test]
    fn starting_position_is_zero() {
        assert_eq!(evaluate_threats(&Position::starting_position()), 0);
    }

    #[test]
    fn undefended_knight_attacked_by_pawn() {
        let pos: Position = "4k3/8/8/3p4/4N3/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_threats(&pos), -30);
    }

    #[test]
    fn defended_knight_attacked_by_pawn() {
        let pos: Position = "4k3/8/8/3p4/4N3/5P2/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_threats(&pos), -15);
    }

    #[test]
    fn mutual_queen_and_rook_threats() {
        // Queen d1 and rook d8 face each other; each is guarded by its king.
        let pos: Position = "3rk3/8/8/8/8/8/8/3QK3 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_threats(&pos), -40 + 25);
    }

    #[test]
    fn attacked_pawns_are_ignored() {
        let pos: Position = "4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_threats(&pos), 0);
    }
}
