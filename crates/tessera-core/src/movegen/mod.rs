//! Pseudo-legal move generation with legality decided by move application.
//!
//! Generators only look at piece movement rules. Whether a move leaves the
//! mover's king in check is settled afterwards by [`apply_move`], which is the
//! one legality filter in the crate.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::attacks::is_in_check;
use crate::chess_move::Move;
use crate::color::Color;
use crate::directions::{DIAGONAL, KING, ORTHOGONAL};
use crate::make_move::apply_move;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// Stack-allocated buffer for generated moves. Capacity 256 covers the theoretical max of 218.
pub struct MoveList {
    moves: [Move; 256],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; 256],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < 256);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Return a mutable slice of the moves (for in-place ordering).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len as usize]
    }

    /// Keep only the moves for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        let mut kept = 0usize;
        for i in 0..self.len as usize {
            let mv = self.moves[i];
            if keep(&mv) {
                self.moves[kept] = mv;
                kept += 1;
            }
        }
        self.len = kept as u16;
    }

    /// Find the move with the given origin and destination.
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.as_slice()
            .iter()
            .copied()
            .find(|mv| mv.from() == from && mv.to() == to)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice().iter().map(|mv| mv.to_uci())).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Terminal classification of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    Ongoing,
    /// No legal move and the king is attacked.
    Checkmate,
    /// No legal move and the king is safe.
    Stalemate,
}

/// Generate every pseudo-legal move for `side`.
///
/// Moves may leave `side`'s own king in check; filter with [`apply_move`] or
/// use [`generate_legal_moves`].
pub fn generate_pseudo_legal(pos: &Position, side: Color) -> MoveList {
    let mut list = MoveList::new();
    for (from, piece) in pos.pieces_of(side) {
        match piece.kind() {
            PieceKind::Pawn => gen_pawn(pos, from, piece, &mut list),
            PieceKind::Knight => gen_knight(pos, from, piece, &mut list),
            PieceKind::Bishop => gen_slider(pos, from, piece, &DIAGONAL, &mut list),
            PieceKind::Rook => gen_slider(pos, from, piece, &ORTHOGONAL, &mut list),
            PieceKind::Queen => gen_slider(pos, from, piece, &KING, &mut list),
            PieceKind::King => gen_king(pos, from, piece, &mut list),
        }
    }
    list
}

/// Generate all legal moves for `side`.
pub fn generate_legal_moves(pos: &Position, side: Color) -> MoveList {
    let mut list = generate_pseudo_legal(pos, side);
    list.retain(|mv| apply_move(pos, side, *mv).is_some());
    list
}

/// Pseudo-legal captures for `side`, including en passant and capturing promotions.
pub fn generate_captures(pos: &Position, side: Color) -> MoveList {
    let mut list = generate_pseudo_legal(pos, side);
    list.retain(|mv| mv.is_capture());
    list
}

/// Return `true` if `side` has at least one legal move.
pub fn has_legal_move(pos: &Position, side: Color) -> bool {
    generate_pseudo_legal(pos, side)
        .as_slice()
        .iter()
        .any(|mv| apply_move(pos, side, *mv).is_some())
}

impl Position {
    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        generate_legal_moves(self, self.side_to_move())
    }

    /// Classify the position for the side to move.
    pub fn status(&self) -> GameStatus {
        let side = self.side_to_move();
        if has_legal_move(self, side) {
            GameStatus::Ongoing
        } else if is_in_check(self, side) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }
}
