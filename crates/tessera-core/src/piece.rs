//! Colored chess piece stored as a signed cell code.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece.
///
/// The inner value is exactly what a board cell holds: the magnitude is the
/// [`PieceKind`] code and the sign is the [`Color`] (positive for White).
/// Zero is never a valid `Piece`; empty cells are `None` at the API level.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(i8);

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece(kind.code() as i8 * color.sign())
    }

    /// Decode a board cell. Returns `None` for empty (zero) or out-of-range cells.
    #[inline]
    pub const fn from_code(code: i8) -> Option<Piece> {
        if code == 0 {
            return None;
        }
        match PieceKind::from_code(code.unsigned_abs()) {
            Some(_) => Some(Piece(code)),
            None => None,
        }
    }

    /// Parse a FEN character into a piece.
    ///
    /// Uppercase letters produce White pieces; lowercase letters produce Black pieces.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// Return the signed cell code.
    #[inline]
    pub const fn code(self) -> i8 {
        self.0
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match PieceKind::from_code(self.0.unsigned_abs()) {
            Some(kind) => kind,
            // Unreachable for values built through `new`/`from_code`.
            None => PieceKind::Pawn,
        }
    }

    /// Return the color.
    #[inline]
    pub const fn color(self) -> Color {
        if self.0 > 0 { Color::White } else { Color::Black }
    }

    /// Return `true` if this piece belongs to `color`.
    #[inline]
    pub const fn is(self, color: Color) -> bool {
        (self.0 > 0) == matches!(color, Color::White)
    }

    /// Return `true` if this piece is of `kind` and belongs to `color`.
    #[inline]
    pub const fn matches(self, kind: PieceKind, color: Color) -> bool {
        self.0 == Piece::new(kind, color).0
    }

    /// The same kind with the opposite color.
    #[inline]
    pub const fn flipped(self) -> Piece {
        Piece(-self.0)
    }

    /// Return the FEN character for this piece.
    #[inline]
    pub fn fen_char(self) -> char {
        let base = self.kind().fen_char();
        match self.color() {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind().fen_char().to_ascii_uppercase();
        write!(f, "{}{}", color_prefix, kind_char)
    }
}
