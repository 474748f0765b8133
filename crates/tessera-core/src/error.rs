//! Error types for FEN parsing, position validation and move input.

use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have 4 or 6 space-separated fields.
    #[error("expected 4 or 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a square on the third or sixth rank.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter (halfmove clock or fullmove number) is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed position fails structural validation.
    #[error("invalid position: {source}")]
    InvalidPosition {
        /// The underlying validation error.
        #[from]
        source: PositionError,
    },
}

/// Errors from structural validation of a [`Position`](crate::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: u32,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    /// The side that just moved left its king in check.
    #[error("side not to move is in check")]
    OpponentInCheck,
}

/// Rejections of externally supplied move text.
///
/// None of these are fatal: the position the move was tried against is
/// never modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The text is not a square pair such as `e2e4`, `e2-e4` or `e7e8q`.
    #[error("malformed move text: \"{text}\"")]
    Malformed {
        /// The text as received.
        text: String,
    },
    /// Origin and destination are the same square.
    #[error("move starts and ends on {square}")]
    SameSquare {
        /// The repeated square.
        square: Square,
    },
    /// There is no piece on the origin square.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The origin square.
        square: Square,
    },
    /// The piece on the origin square belongs to the side not to move.
    #[error("not your turn: the piece on {square} belongs to the opponent")]
    NotYourTurn {
        /// The origin square.
        square: Square,
    },
    /// The move breaks the rules or leaves the mover's king in check.
    #[error("illegal move: {text}")]
    Illegal {
        /// The move in coordinate notation.
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{FenError, MoveError, PositionError};
    use crate::square::Square;

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongFieldCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 4 or 6 FEN fields, found 4");
    }

    #[test]
    fn position_error_display() {
        let err = PositionError::PawnsOnBackRank;
        assert_eq!(format!("{err}"), "pawns found on back rank");
    }

    #[test]
    fn fen_error_from_position_error() {
        let fen_err: FenError = PositionError::OpponentInCheck.into();
        assert!(matches!(fen_err, FenError::InvalidPosition { .. }));
        assert!(std::error::Error::source(&fen_err).is_some());
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::NotYourTurn { square: Square::E7 };
        assert_eq!(
            format!("{err}"),
            "not your turn: the piece on e7 belongs to the opponent"
        );
        let err = MoveError::SameSquare { square: Square::A1 };
        assert_eq!(format!("{err}"), "move starts and ends on a1");
    }
}
