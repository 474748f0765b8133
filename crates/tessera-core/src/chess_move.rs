//! Candidate moves as produced by the generator.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// How a move changes the board beyond relocating one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Plain relocation, with or without a capture.
    Normal,
    /// Pawn advance of two ranks from its starting rank.
    DoublePush,
    /// Pawn capture onto the square behind a pawn that just double-pushed.
    EnPassant,
    /// King's two-square move; the rook is relocated on application.
    Castling,
    /// Pawn reaching its last rank; always becomes a queen.
    Promotion,
}

/// A candidate move: `{from, to, moved piece, captured piece, kind}`.
///
/// Whether it is legal depends on the position it is applied to. The same
/// square pair may be legal in one position and illegal in another.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    /// Placeholder used to pre-fill fixed-size move buffers.
    pub const NULL: Move = Move {
        from: Square::A1,
        to: Square::A1,
        piece: Piece::WHITE_PAWN,
        captured: None,
        kind: MoveKind::Normal,
    };

    /// Create a move.
    #[inline]
    pub const fn new(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        kind: MoveKind,
    ) -> Move {
        Move {
            from,
            to,
            piece,
            captured,
            kind,
        }
    }

    /// Return `true` for the buffer placeholder.
    #[inline]
    pub fn is_null(self) -> bool {
        self == Move::NULL
    }

    /// Origin square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The piece being moved.
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// The side making the move.
    #[inline]
    pub const fn color(self) -> Color {
        self.piece.color()
    }

    /// The captured piece, if any. For en passant this is the bypassed pawn.
    #[inline]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// Move kind tag.
    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Return `true` if the move removes an enemy piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Return `true` if the move promotes a pawn.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion)
    }

    /// Return `true` for moves that neither capture nor promote.
    #[inline]
    pub const fn is_quiet(self) -> bool {
        !self.is_capture() && !self.is_promotion()
    }

    /// The piece standing on the destination once the move is applied.
    #[inline]
    pub const fn placed_piece(self) -> Piece {
        if self.is_promotion() {
            Piece::new(PieceKind::Queen, self.piece.color())
        } else {
            self.piece
        }
    }

    /// Coordinate notation, e.g. `e2e4` or `e7e8q`.
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "0000")
        } else if self.is_promotion() {
            write!(f, "{}{}q", self.from, self.to)
        } else {
            write!(f, "{}{}", self.from, self.to)
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?} kind={:?}", self, self.piece, self.kind)?;
        if let Some(captured) = self.captured {
            write!(f, " x{captured:?}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveKind};
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn quiet_push() {
        let mv = Move::new(Square::E2, Square::E4, Piece::WHITE_PAWN, None, MoveKind::DoublePush);
        assert!(mv.is_quiet());
        assert!(!mv.is_capture());
        assert_eq!(mv.to_uci(), "e2e4");
        assert_eq!(mv.placed_piece(), Piece::WHITE_PAWN);
    }

    #[test]
    fn capture_is_not_quiet() {
        let mv = Move::new(
            Square::D4,
            Square::E5,
            Piece::WHITE_PAWN,
            Some(Piece::BLACK_KNIGHT),
            MoveKind::Normal,
        );
        assert!(mv.is_capture());
        assert!(!mv.is_quiet());
    }

    #[test]
    fn promotion_places_queen() {
        let mv = Move::new(Square::B2, Square::B1, Piece::BLACK_PAWN, None, MoveKind::Promotion);
        assert!(mv.is_promotion());
        assert!(!mv.is_quiet());
        assert_eq!(mv.placed_piece(), Piece::BLACK_QUEEN);
        assert_eq!(mv.to_uci(), "b2b1q");
    }

    #[test]
    fn null_move_display() {
        assert!(Move::NULL.is_null());
        assert_eq!(format!("{}", Move::NULL), "0000");
    }

    #[test]
    fn debug_includes_capture() {
        let mv = Move::new(
            Square::E4,
            Square::D5,
            Piece::WHITE_PAWN,
            Some(Piece::BLACK_PAWN),
            MoveKind::Normal,
        );
        assert_eq!(format!("{mv:?}"), "Move(e4d5 WP kind=Normal xBP)");
    }
}
