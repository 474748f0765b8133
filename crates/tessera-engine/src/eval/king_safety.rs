//! King safety evaluation: pawn shield and open files next to the king.
//!
//! All scores are from White's perspective.

use tessera_core::{Color, Piece, PieceKind, Position};

/// Bonus for a friendly pawn directly in front of the king.
const SHIELD_FRONT_BONUS: i32 = 15;

/// Bonus for a friendly pawn diagonally in front of the king.
const SHIELD_DIAGONAL_BONUS: i32 = 10;

/// Penalty for each file among the king's file and its neighbours with no friendly pawn.
const OPEN_FILE_PENALTY: i32 = -20;

fn king_safety_for_side(pos: &Position, color: Color) -> i32 {
    let Some(king) = pos.king_square(color) else {
        return 0;
    };
    let pawn = Piece::new(PieceKind::Pawn, color);

    let mut score = 0;
    for df in -1i8..=1 {
        if let Some(sq) = king.offset(df, color.forward())
            && pos.piece_at(sq) == Some(pawn)
        {
            score += if df == 0 {
                SHIELD_FRONT_BONUS
            } else {
                SHIELD_DIAGONAL_BONUS
            };
        }
    }

    for df in -1i8..=1 {
        let Some(file) = king.file().checked_add_signed(df).filter(|&f| f < 8) else {
            continue;
        };
        let has_pawn = pos
            .pieces()
            .any(|(sq, piece)| piece == pawn && sq.file() == file);
        if !has_pawn {
            score += OPEN_FILE_PENALTY;
        }
    }

    score
}

/// Evaluate king safety from White's perspective.
pub fn evaluate_king_safety(pos: &Position) -> i32 {
    king_safety_for_side(pos, Color::White) - king_safety_for_side(pos, Color::Black)
}

#[cfg(test)]
mod tests {
    use tessera_core::Position;

    use super::evaluate_king_safety;

    #[test]
    fn starting_position_is_zero() {
        assert_eq!(evaluate_king_safety(&Position::starting_position()), 0);
    }

    #[test]
    fn missing_white_shield_pawn() {
        // White king g1 with f2 and h2 but the g-file empty. Black has a full shield.
        let pos: Position = "4k3/pppppppp/8/8/8/8/PPPPPP1P/6K1 w - - 0 1"
            .parse()
            .unwrap();
        let white = 10 + 10 - 20;
        let black = 10 + 15 + 10;
        assert_eq!(evaluate_king_safety(&pos), white - black);
    }

    #[test]
    fn edge_king_counts_only_files_on_the_board() {
        // White king a1 behind a2 and b2: no open files, full two-pawn shield.
        let pos: Position = "4k3/3ppp2/8/8/8/8/PP6/K7 w - - 0 1".parse().unwrap();
        let white = 15 + 10;
        let black = 10 + 15 + 10;
        assert_eq!(evaluate_king_safety(&pos), white - black);
    }

    #[test]
    fn bare_kings_on_open_files() {
        let pos: Position = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate_king_safety(&pos), 0);
    }

    #[test]
    fn exposed_black_king_favours_white() {
        let pos: Position = "4k3/8/8/8/8/8/3PPP2/4K3 w - - 0 1".parse().unwrap();
        let white = 10 + 15 + 10;
        let black = -60;
        assert_eq!(evaluate_king_safety(&pos), white - black);
    }
}
