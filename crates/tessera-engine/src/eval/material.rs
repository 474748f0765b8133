//! Material balance evaluation.
//!
//! Counts weighted piece material for each side and adds a bishop-pair bonus.
//! All scores are returned from White's perspective (positive = White ahead).

use tessera_core::{Color, Piece, PieceKind, Position};

/// Base material values indexed by [`PieceKind::index()`].
///
/// | Piece  | value |
/// |--------|-------|
/// | Pawn   | 100   |
/// | Rook   | 500   |
/// | Bishop | 330   |
/// | Knight | 320   |
/// | Queen  | 900   |
/// | King   |   0   |
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [
    100, // Pawn
    500, // Rook
    330, // Bishop
    320, // Knight
    900, // Queen
    0,   // King
];

/// Bonus awarded to a side that has two or more bishops.
pub const BISHOP_PAIR_BONUS: i32 = 30;

/// Material value of a piece kind.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    MATERIAL_VALUE[kind.index()]
}

/// Evaluate material balance from White's perspective, bishop pair included.
pub fn material(pos: &Position) -> i32 {
    let mut score = 0;

    for (_, piece) in pos.pieces() {
        let value = piece_value(piece.kind());
        match piece.color() {
            Color::White => score += value,
            Color::Black => score -= value,
        }
    }

    if pos.count(Piece::WHITE_BISHOP) >= 2 {
        score += BISHOP_PAIR_BONUS;
    }
    if pos.count(Piece::BLACK_BISHOP) >= 2 {
        score -= BISHOP_PAIR_BONUS;
    }

    score
}

#[cfg(test)]
mod tests {
    use tessera_core::{PieceKind, Position};

    use super::{BISHOP_PAIR_BONUS, material, piece_value};

    #[test]
    fn starting_position_is_zero() {
        // Both bishop pairs cancel as well.
        assert_eq!(material(&Position::starting_position()), 0);
    }

    #[test]
    fn missing_black_queen_gives_queen_advantage() {
        let pos = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse::<Position>()
            .unwrap();
        assert_eq!(material(&pos), piece_value(PieceKind::Queen));
    }

    #[test]
    fn bishop_pair_bonus_white_only() {
        // Black has lost both bishops.
        let pos = "rn1qk1nr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse::<Position>()
            .unwrap();
        let expected = piece_value(PieceKind::Bishop) * 2 + BISHOP_PAIR_BONUS;
        assert_eq!(material(&pos), expected);
    }

    #[test]
    fn single_bishop_earns_no_pair_bonus() {
        let pos = "rn1qkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse::<Position>()
            .unwrap();
        assert_eq!(material(&pos), piece_value(PieceKind::Bishop) + BISHOP_PAIR_BONUS);
    }

    #[test]
    fn score_is_negated_when_black_is_ahead() {
        let pos = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1"
            .parse::<Position>()
            .unwrap();
        assert_eq!(material(&pos), -piece_value(PieceKind::Queen));
    }

    #[test]
    fn king_is_worth_nothing() {
        assert_eq!(piece_value(PieceKind::King), 0);
    }
}
