//! Core chess rules: a mailbox position, attack detection, move generation and
//! copy-make move application.
//!
//! Generators produce pseudo-legal moves; [`apply_move`] is the only place a
//! move is judged legal, by rejecting any result that leaves the mover in check.

mod attacks;
mod castle_rights;
mod chess_move;
mod color;
pub mod directions;
mod error;
mod fen;
mod make_move;
mod movegen;
mod notation;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod square;

pub use attacks::{is_attacked, is_in_check};
pub use castle_rights::{CastleRights, CastleSide, king_home};
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::{FenError, MoveError, PositionError};
pub use fen::STARTING_FEN;
pub use make_move::apply_move;
pub use movegen::{
    GameStatus, MoveList, generate_captures, generate_legal_moves, generate_pseudo_legal,
    has_legal_move,
};
pub use notation::{MoveText, parse_move_text};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{LastMove, Position};
pub use square::Square;
