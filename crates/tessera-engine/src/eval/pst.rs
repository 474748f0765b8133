//! Piece-square tables (PST) for all six piece kinds.
//!
//! All tables are defined from White's perspective in LERF order:
//! index 0 = A1, index 7 = H1, index 8 = A2, ..., index 63 = H8.
//! Use [`pst_value`] to look up the value for either color.

use tessera_core::{Color, PieceKind, Position, Square};

/// Pawn PST. Rank 1 and rank 8 entries are zero since pawns never sit there.
#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
    // Rank 1
      0,   0,   0,   0,   0,   0,   0,   0,
    // Rank 2
      5,  10,  10, -20, -20,  10,  10,   5,
    // Rank 3
      5,  -5, -10,   0,   0, -10,  -5,   5,
    // Rank 4
      0,   0,   0,  20,  20,   0,   0,   0,
    // Rank 5
      5,   5,  10,  25,  25,  10,   5,   5,
    // Rank 6
     10,  10,  20,  30,  30,  20,  10,  10,
    // Rank 7
     50,  50,  50,  50,  50,  50,  50,  50,
    // Rank 8
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
      0,   0,   0,   5,   5,   0,   0,   0,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      5,  10,  10,  10,  10,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -10,   5,   5,   5,   5,   5,   0, -10,
      0,   0,   5,   5,   5,   5,   0,  -5,
     -5,   0,   5,   5,   5,   5,   0,  -5,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

/// King PST. Rewards the castled corners and keeps the king off the open board.
#[rustfmt::skip]
const KING_PST: [i32; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20,
     20,  20,   0,   0,   0,   0,  20,  20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
];

/// Piece-square table values indexed `[piece_kind][square]`, in
/// [`PieceKind::index()`] order.
pub static PST: [[i32; 64]; PieceKind::COUNT] = [
    PAWN_PST,
    ROOK_PST,
    BISHOP_PST,
    KNIGHT_PST,
    QUEEN_PST,
    KING_PST,
];

/// Look up the PST bonus for a piece of the given kind and color on `sq`.
///
/// For Black pieces the square is mirrored vertically so that the tables,
/// which are defined from White's perspective, apply symmetrically.
#[inline]
pub fn pst_value(kind: PieceKind, color: Color, sq: Square) -> i32 {
    let sq = match color {
        Color::White => sq,
        Color::Black => sq.flip_rank(),
    };
    PST[kind.index()][sq.index()]
}

/// Sum of piece-square values from White's perspective.
pub fn evaluate_pst(pos: &Position) -> i32 {
    pos.pieces()
        .map(|(sq, piece)| {
            let value = pst_value(piece.kind(), piece.color(), sq);
            match piece.color() {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use tessera_core::{Color, PieceKind, Position, Square};

    use super::{evaluate_pst, pst_value};

    #[test]
    fn pawn_white_e4() {
        assert_eq!(pst_value(PieceKind::Pawn, Color::White, Square::E4), 20);
    }

    #[test]
    fn pawn_black_e5_mirrors_white_e4() {
        let white_e4 = pst_value(PieceKind::Pawn, Color::White, Square::E4);
        let black_e5 = pst_value(PieceKind::Pawn, Color::Black, Square::E5);
        assert_eq!(white_e4, black_e5);
    }

    #[test]
    fn knight_a1_h1_symmetric() {
        let a1 = pst_value(PieceKind::Knight, Color::White, Square::A1);
        let h1 = pst_value(PieceKind::Knight, Color::White, Square::H1);
        assert_eq!(a1, h1);
    }

    #[test]
    fn castled_king_preferred_over_center() {
        let g1 = pst_value(PieceKind::King, Color::White, Square::G1);
        let e4 = pst_value(PieceKind::King, Color::White, Square::E4);
        assert!(g1 > e4);
    }

    #[test]
    fn black_rank1_mirrors_white_rank8() {
        let black_a1 = pst_value(PieceKind::King, Color::Black, Square::A1);
        let white_a8 = pst_value(PieceKind::King, Color::White, Square::A8);
        assert_eq!(black_a1, white_a8);
    }

    #[test]
    fn starting_position_balances() {
        assert_eq!(evaluate_pst(&Position::starting_position()), 0);
    }

    #[test]
    fn advanced_pawn_scores_for_its_owner() {
        // White pawn on e4 (+20) against a black pawn still on e7 (-20 mirrored to e2).
        let pos: Position = "4k3/4p3/8/8/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_pst(&pos), 20 - (-20));
    }
}
