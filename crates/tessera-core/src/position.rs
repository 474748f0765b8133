//! Mailbox position: 64 signed cells plus side to move, castling rights and
//! the record of the last move.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::PositionError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// What the previous ply did. Only consulted to recognise en passant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMove {
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// Kind of the piece that moved.
    pub kind: PieceKind,
    /// Kind of the piece it captured, if any.
    pub captured: Option<PieceKind>,
}

impl LastMove {
    /// The square a pawn may capture onto en passant, if this was a double push.
    pub const fn en_passant_target(self) -> Option<Square> {
        if !matches!(self.kind, PieceKind::Pawn) || self.from.file() != self.to.file() {
            return None;
        }
        if self.from.rank().abs_diff(self.to.rank()) != 2 {
            return None;
        }
        Square::new(self.from.file(), (self.from.rank() + self.to.rank()) / 2)
    }
}

/// A chess position stored as a mailbox.
///
/// Each cell is `0` when empty, otherwise `±kind` where the sign is the color
/// (positive for White) and the magnitude the [`PieceKind`] code. Positions are
/// small `Copy` values: applying a move yields a new position and never mutates
/// the one it came from.
///
/// Equality and hashing cover every field, including the last-move record and
/// both counters. The same placement reached by different move orders, or
/// reparsed from FEN after a non-pawn move, compares unequal; compare
/// [`Display`](fmt::Display) output to check placement, side, rights and the
/// en passant square only.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    cells: [i8; 64],
    side_to_move: Color,
    castling: CastleRights,
    last_move: Option<LastMove>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

/// Back rank piece order from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Position {
    /// An empty board with White to move and no rights.
    pub const fn empty() -> Position {
        Position {
            cells: [0; 64],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            last_move: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard starting position.
    pub fn starting_position() -> Position {
        let mut pos = Position::empty();
        for color in Color::ALL {
            for (file, kind) in BACK_RANK.iter().enumerate() {
                let back = Square::from_index_unchecked(color.back_rank() * 8 + file as u8);
                let pawn = Square::from_index_unchecked(color.pawn_rank() * 8 + file as u8);
                pos.put(back, Piece::new(*kind, color));
                pos.put(pawn, Piece::new(PieceKind::Pawn, color));
            }
        }
        pos.castling = CastleRights::ALL;
        pos
    }

    /// Raw signed cell value.
    #[inline]
    pub const fn cell(&self, sq: Square) -> i8 {
        self.cells[sq.index()]
    }

    /// The piece on `sq`, if any.
    #[inline]
    pub const fn piece_at(&self, sq: Square) -> Option<Piece> {
        Piece::from_code(self.cells[sq.index()])
    }

    /// Return `true` if `sq` holds no piece.
    #[inline]
    pub const fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()] == 0
    }

    /// Place `piece` on `sq`, replacing whatever was there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.index()] = piece.code();
    }

    /// Empty `sq`.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.cells[sq.index()] = 0;
    }

    /// The side to move.
    #[inline]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Set the side to move.
    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Current castling rights.
    #[inline]
    pub const fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Replace the castling rights wholesale (position setup only).
    #[inline]
    pub fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    /// Permanently drop every castling right tied to `sq`.
    #[inline]
    pub fn revoke_castling(&mut self, sq: Square) {
        self.castling = self.castling.revoke(sq);
    }

    /// Record of the previous ply.
    #[inline]
    pub const fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Replace the last-move record.
    #[inline]
    pub fn set_last_move(&mut self, last: Option<LastMove>) {
        self.last_move = last;
    }

    /// Square a pawn may capture onto en passant this ply.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.last_move.and_then(LastMove::en_passant_target)
    }

    /// Plies since the last capture or pawn move.
    #[inline]
    pub const fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Full move number, starting at 1 and incremented after Black moves.
    #[inline]
    pub const fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub(crate) fn set_counters(&mut self, halfmove_clock: u16, fullmove_number: u16) {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
    }

    /// All occupied squares with their pieces, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(|(index, &code)| {
            Piece::from_code(code).map(|piece| (Square::from_index_unchecked(index as u8), piece))
        })
    }

    /// Occupied squares of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.is(color))
    }

    /// Number of `piece` on the board.
    pub fn count(&self, piece: Piece) -> u32 {
        self.cells.iter().filter(|&&code| code == piece.code()).count() as u32
    }

    /// Locate the king of `color` by scanning the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color).code();
        self.cells
            .iter()
            .position(|&code| code == king)
            .map(|index| Square::from_index_unchecked(index as u8))
    }

    /// Return `true` if `color` owns anything besides its king and pawns.
    pub fn has_non_pawn_material(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(_, piece)| !matches!(piece.kind(), PieceKind::Pawn | PieceKind::King))
    }

    /// Check structural invariants.
    ///
    /// Each side has exactly one king, no pawn stands on a back rank, and the
    /// side that just moved is not in check.
    pub fn validate(&self) -> Result<(), PositionError> {
        for (color, name) in [(Color::White, "white"), (Color::Black, "black")] {
            let count = self.count(Piece::new(PieceKind::King, color));
            if count != 1 {
                return Err(PositionError::InvalidKingCount { color: name, count });
            }
        }

        let pawn_on_back_rank = self.pieces().any(|(sq, piece)| {
            piece.kind() == PieceKind::Pawn && (sq.rank() == 0 || sq.rank() == 7)
        });
        if pawn_on_back_rank {
            return Err(PositionError::PawnsOnBackRank);
        }

        if crate::attacks::is_in_check(self, self.side_to_move.flip()) {
            return Err(PositionError::OpponentInCheck);
        }

        Ok(())
    }

    /// Mirror the position top-to-bottom and swap colors.
    ///
    /// The result is the same position seen from the other side: every
    /// evaluation term should come out negated.
    pub fn flipped(&self) -> Position {
        let mut out = Position::empty();
        for (sq, piece) in self.pieces() {
            out.put(sq.flip_rank(), piece.flipped());
        }
        out.side_to_move = self.side_to_move.flip();
        out.castling = self.castling.flipped();
        out.last_move = self.last_move.map(|last| LastMove {
            from: last.from.flip_rank(),
            to: last.to.flip_rank(),
            ..last
        });
        out.halfmove_clock = self.halfmove_clock;
        out.fullmove_number = self.fullmove_number;
        out
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{self}\")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_validates() {
        Position::starting_position().validate().unwrap();
    }

    #[test]
    fn starting_position_cells() {
        let pos = Position::starting_position();
        assert_eq!(pos.cell(Square::E1), 6);
        assert_eq!(pos.cell(Square::D8), -5);
        assert_eq!(pos.cell(Square::A1), 2);
        assert_eq!(pos.cell(Square::B8), -4);
        assert_eq!(pos.cell(Square::C1), 3);
        assert_eq!(pos.cell(Square::H7), -1);
        assert_eq!(pos.cell(Square::E4), 0);
        assert_eq!(pos.pieces().count(), 32);
        assert_eq!(pos.castling(), CastleRights::ALL);
    }

    #[test]
    fn king_found_by_scanning() {
        let mut pos = Position::starting_position();
        assert_eq!(pos.king_square(Color::White), Some(Square::E1));
        assert_eq!(pos.king_square(Color::Black), Some(Square::E8));

        pos.clear(Square::E1);
        pos.put(Square::G1, Piece::WHITE_KING);
        assert_eq!(pos.king_square(Color::White), Some(Square::G1));

        pos.clear(Square::G1);
        assert_eq!(pos.king_square(Color::White), None);
    }

    #[test]
    fn revoke_castling_is_permanent() {
        let mut pos = Position::starting_position();
        pos.revoke_castling(Square::H1);
        assert!(!pos.castling().contains(CastleRights::WHITE_KING));
        pos.revoke_castling(Square::E8);
        assert_eq!(pos.castling(), CastleRights::WHITE_QUEEN);
    }

    #[test]
    fn en_passant_target_only_after_double_push() {
        let mut pos = Position::starting_position();
        pos.set_last_move(Some(LastMove {
            from: Square::E2,
            to: Square::E4,
            kind: PieceKind::Pawn,
            captured: None,
        }));
        assert_eq!(pos.en_passant_target(), Some(Square::E3));

        pos.set_last_move(Some(LastMove {
            from: Square::E2,
            to: Square::E3,
            kind: PieceKind::Pawn,
            captured: None,
        }));
        assert_eq!(pos.en_passant_target(), None);

        pos.set_last_move(Some(LastMove {
            from: Square::D1,
            to: Square::D3,
            kind: PieceKind::Queen,
            captured: None,
        }));
        assert_eq!(pos.en_passant_target(), None);
    }

    #[test]
    fn validate_rejects_missing_king() {
        let mut pos = Position::starting_position();
        pos.clear(Square::E8);
        assert_eq!(
            pos.validate(),
            Err(PositionError::InvalidKingCount {
                color: "black",
                count: 0
            })
        );
    }

    #[test]
    fn validate_rejects_back_rank_pawn() {
        let mut pos = Position::starting_position();
        pos.put(Square::A1, Piece::WHITE_PAWN);
        assert_eq!(pos.validate(), Err(PositionError::PawnsOnBackRank));
    }

    #[test]
    fn flipped_twice_is_identity() {
        let pos = Position::starting_position();
        assert_eq!(pos.flipped().flipped(), pos);
    }

    #[test]
    fn flipped_start_swaps_side_only() {
        let pos = Position::starting_position();
        let flipped = pos.flipped();
        assert_eq!(flipped.side_to_move(), Color::Black);
        for sq in Square::all() {
            assert_eq!(flipped.cell(sq), pos.cell(sq), "start position is color-symmetric at {sq}");
        }
    }

    #[test]
    fn non_pawn_material() {
        let pos: Position = "4k3/pppp4/8/8/8/8/4P3/4K2R w K - 0 1".parse().unwrap();
        assert!(pos.has_non_pawn_material(Color::White));
        assert!(!pos.has_non_pawn_material(Color::Black));
    }
}
