//! Coordinate move text (`e2e4`, `e2-e4`, `e7e8q`) and validated move input.

use tracing::trace;

use crate::chess_move::Move;
use crate::error::MoveError;
use crate::make_move::apply_move;
use crate::movegen::generate_pseudo_legal;
use crate::position::Position;
use crate::square::Square;

/// Parsed square pair from external move text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveText {
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// Whether a trailing promotion letter was given. Promotion is always to a
    /// queen, so the letter itself is only validated.
    pub promotion_hint: bool,
}

/// Parse coordinate move text.
///
/// Accepts `e2e4`, `e2-e4` and an optional trailing `q`, `r`, `b` or `n` in
/// either case. Rejects anything else before a position is consulted.
pub fn parse_move_text(text: &str) -> Result<MoveText, MoveError> {
    let malformed = || MoveError::Malformed {
        text: text.to_string(),
    };

    let trimmed = text.trim();
    let compact: String = match trimmed.char_indices().nth(2) {
        Some((2, '-')) => format!("{}{}", &trimmed[..2], &trimmed[3..]),
        _ => trimmed.to_string(),
    };
    if !compact.is_ascii() {
        return Err(malformed());
    }

    let promotion_hint = match compact.len() {
        4 => false,
        5 => match compact.as_bytes()[4].to_ascii_lowercase() {
            b'q' | b'r' | b'b' | b'n' => true,
            _ => return Err(malformed()),
        },
        _ => return Err(malformed()),
    };

    let from = Square::from_algebraic(&compact[0..2]).ok_or_else(malformed)?;
    let to = Square::from_algebraic(&compact[2..4]).ok_or_else(malformed)?;
    if from == to {
        return Err(MoveError::SameSquare { square: from });
    }

    Ok(MoveText {
        from,
        to,
        promotion_hint,
    })
}

impl Position {
    /// Resolve move text into a legal move for the side to move.
    ///
    /// Checks run in order: syntax, an occupied origin, ownership of the
    /// piece, then the rules of movement and finally king safety. A promotion
    /// letter is only accepted on a move that promotes.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveError> {
        let parsed = parse_move_text(text).inspect_err(|err| trace!(text, %err, "rejected move text"))?;
        let side = self.side_to_move();

        let piece = self
            .piece_at(parsed.from)
            .ok_or(MoveError::EmptySquare { square: parsed.from })?;
        if !piece.is(side) {
            trace!(text, %side, "rejected: not your turn");
            return Err(MoveError::NotYourTurn { square: parsed.from });
        }

        let illegal = || MoveError::Illegal {
            text: format!("{}{}", parsed.from, parsed.to),
        };
        let mv = generate_pseudo_legal(self, side)
            .find(parsed.from, parsed.to)
            .ok_or_else(illegal)?;
        if parsed.promotion_hint && !mv.is_promotion() {
            trace!(text, "rejected: promotion letter on a non-promotion");
            return Err(MoveError::Malformed {
                text: text.to_string(),
            });
        }
        if apply_move(self, side, mv).is_none() {
            return Err(illegal());
        }
        Ok(mv)
    }

    /// Parse and apply move text, returning the resulting position.
    ///
    /// On error `self` is unchanged and can be retried.
    pub fn play(&self, text: &str) -> Result<Position, MoveError> {
        let mv = self.parse_move(text)?;
        apply_move(self, self.side_to_move(), mv).ok_or_else(|| MoveError::Illegal {
            text: mv.to_uci(),
        })
    }
}
