//! Pawn structure evaluation.
//!
//! Scores isolated, doubled, connected and passed pawns.
//! All scores are from White's perspective (positive = White advantage).

use tessera_core::{Color, Piece, PieceKind, Position, Square};

/// Penalty for an isolated pawn (no friendly pawns on adjacent files).
const ISOLATED_PAWN_PENALTY: i32 = -15;

/// Penalty for each pawn that shares its file with another friendly pawn.
const DOUBLED_PAWN_PENALTY: i32 = -10;

/// Bonus for a pawn with a friendly pawn beside it or diagonally behind it.
const CONNECTED_PAWN_BONUS: i32 = 7;

/// Passed pawn bonus per rank advanced from the pawn's own back rank.
const PASSED_PAWN_BONUS_PER_RANK: i32 = 10;

/// Evaluate pawn structure from White's perspective.
pub fn evaluate_pawns(pos: &Position) -> i32 {
    evaluate_pawns_for_side(pos, Color::White) - evaluate_pawns_for_side(pos, Color::Black)
}

/// Pawn file occupancy for one color.
fn file_counts(pos: &Position, pawn: Piece) -> [u8; 8] {
    let mut counts = [0u8; 8];
    for (sq, _) in pos.pieces().filter(|&(_, piece)| piece == pawn) {
        counts[sq.file() as usize] += 1;
    }
    counts
}

/// Accumulate the pawn-structure score for one side, from that side's perspective.
fn evaluate_pawns_for_side(pos: &Position, color: Color) -> i32 {
    let friendly = Piece::new(PieceKind::Pawn, color);
    let enemy = Piece::new(PieceKind::Pawn, color.flip());
    let files = file_counts(pos, friendly);

    let mut score = 0;
    for (sq, _) in pos.pieces().filter(|&(_, piece)| piece == friendly) {
        let file = sq.file() as usize;

        let left = file.checked_sub(1).map_or(0, |f| files[f]);
        let right = files.get(file + 1).copied().unwrap_or(0);
        if left == 0 && right == 0 {
            score += ISOLATED_PAWN_PENALTY;
        }

        if files[file] > 1 {
            score += DOUBLED_PAWN_PENALTY;
        }

        if is_connected(pos, sq, color, friendly) {
            score += CONNECTED_PAWN_BONUS;
        }

        if is_passed(pos, sq, color, enemy) {
            score += PASSED_PAWN_BONUS_PER_RANK * color.relative_rank(sq.rank()) as i32;
        }
    }
    score
}

/// A friendly pawn stands on an adjacent file, level with `sq` or one rank behind.
fn is_connected(pos: &Position, sq: Square, color: Color, friendly: Piece) -> bool {
    [-1, 1].into_iter().any(|df| {
        [0, -color.forward()].into_iter().any(|dr| {
            sq.offset(df, dr)
                .is_some_and(|neighbour| pos.piece_at(neighbour) == Some(friendly))
        })
    })
}

/// No enemy pawn stands ahead of `sq` on its own or an adjacent file.
fn is_passed(pos: &Position, sq: Square, color: Color, enemy: Piece) -> bool {
    let rank = color.relative_rank(sq.rank());
    !pos.pieces().any(|(other, piece)| {
        piece == enemy
            && other.file().abs_diff(sq.file()) <= 1
            && color.relative_rank(other.rank()) > rank
    })
}
