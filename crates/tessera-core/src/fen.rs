//! FEN parsing and serialization for [`Position`].
//!
//! The FEN en passant square has no slot of its own in a [`Position`]; it is
//! turned into the equivalent last-move record (the double push that made it
//! possible) and recovered from that record on output.

use std::fmt;
use std::str::FromStr;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::{LastMove, Position};
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Position {
    type Err = FenError;

    /// Parse a FEN string. The two move counters are optional and default to `0 1`.
    fn from_str(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 && fields.len() != 4 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let mut pos = Position::empty();
        parse_placement(fields[0], &mut pos)?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };
        pos.set_side_to_move(side_to_move);
        pos.set_castling(CastleRights::from_fen(fields[2])?);
        pos.set_last_move(parse_en_passant(fields[3], side_to_move)?);

        let (halfmove_clock, fullmove_number) = match fields.get(4..6) {
            Some(&[halfmove, fullmove]) => (
                parse_counter(halfmove, "halfmove clock")?,
                parse_counter(fullmove, "fullmove number")?,
            ),
            _ => (0, 1),
        };
        pos.set_counters(halfmove_clock, fullmove_number);

        pos.validate()?;
        Ok(pos)
    }
}

fn parse_placement(placement: &str, pos: &mut Position) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    // FEN ranks go from 8 to 1 (top to bottom)
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_index as u8;
        let mut file: u8 = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                let length = file as usize + digit as usize;
                if length > 8 {
                    return Err(FenError::BadRankLength { rank_index, length });
                }
                file += digit as u8;
                continue;
            }

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let sq = Square::new(file, rank).ok_or(FenError::BadRankLength {
                rank_index,
                length: file as usize + 1,
            })?;
            pos.put(sq, piece);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file as usize,
            });
        }
    }
    Ok(())
}

/// Rebuild the double push implied by a FEN en passant square.
fn parse_en_passant(field: &str, side_to_move: Color) -> Result<Option<LastMove>, FenError> {
    if field == "-" {
        return Ok(None);
    }

    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let target = Square::from_algebraic(field).ok_or_else(invalid)?;

    // The pawn that just moved belongs to the other side and passed over `target`.
    let mover = side_to_move.flip();
    let expected_rank = mover.relative_rank(2);
    if target.rank() != expected_rank {
        return Err(invalid());
    }
    let from = target.offset(0, -mover.forward()).ok_or_else(invalid)?;
    let to = target.offset(0, mover.forward()).ok_or_else(invalid)?;

    Ok(Some(LastMove {
        from,
        to,
        kind: PieceKind::Pawn,
        captured: None,
    }))
}

fn parse_counter(field: &str, name: &'static str) -> Result<u16, FenError> {
    field.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
        field: name,
        found: field.to_string(),
    })
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty_count = 0u8;

            for file in 0u8..8 {
                let sq = Square::from_index_unchecked(rank * 8 + file);
                match self.piece_at(sq) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling())?;

        match self.en_passant_target() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }

        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::error::{FenError, PositionError};
    use crate::position::Position;
    use crate::square::Square;

    fn roundtrip(fen: &str) {
        let pos: Position = fen.parse().unwrap();
        let output = format!("{pos}");
        assert_eq!(output, fen, "FEN roundtrip failed");
        let pos2: Position = output.parse().unwrap();
        assert_eq!(pos, pos2);
    }

    #[test]
    fn roundtrip_starting() {
        roundtrip(STARTING_FEN);
    }

    #[test]
    fn roundtrip_sicilian() {
        roundtrip("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2");
    }

    #[test]
    fn roundtrip_kiwipete() {
        roundtrip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    }

    #[test]
    fn roundtrip_black_to_move() {
        roundtrip("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    }

    #[test]
    fn starting_position_matches_fen() {
        let from_fen: Position = STARTING_FEN.parse().unwrap();
        assert_eq!(Position::starting_position(), from_fen);
    }

    #[test]
    fn en_passant_square_becomes_last_move() {
        let pos: Position = "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2"
            .parse()
            .unwrap();
        let last = pos.last_move().unwrap();
        assert_eq!((last.from, last.to), (Square::C7, Square::C5));
    }

    #[test]
    fn counters_are_optional() {
        let pos: Position = "4k3/8/8/8/8/8/8/4K3 b - -".parse().unwrap();
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.fullmove_number(), 1);
    }

    #[test]
    fn error_wrong_field_count() {
        assert_eq!(
            "e4 e5".parse::<Position>(),
            Err(FenError::WrongFieldCount { found: 2 })
        );
    }

    #[test]
    fn error_invalid_piece_char() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1".parse::<Position>();
        assert_eq!(result, Err(FenError::InvalidPieceChar { character: 'X' }));
    }

    #[test]
    fn error_bad_rank_length() {
        let result = "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Position>();
        assert!(matches!(result, Err(FenError::BadRankLength { rank_index: 1, .. })));
        let result = "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Position>();
        assert!(matches!(result, Err(FenError::BadRankLength { rank_index: 1, .. })));
    }

    #[test]
    fn error_rank_of_many_empty_runs() {
        let rank = "8".repeat(33);
        let fen = format!("4k3/8/8/8/{rank}/8/8/4K3 w - - 0 1");
        assert_eq!(
            fen.parse::<Position>(),
            Err(FenError::BadRankLength {
                rank_index: 4,
                length: 16
            })
        );
        let result = "4k3/8/8/8/44p/8/8/4K3 w - - 0 1".parse::<Position>();
        assert!(matches!(result, Err(FenError::BadRankLength { rank_index: 4, .. })));
    }

    #[test]
    fn error_invalid_color() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1".parse::<Position>();
        assert!(matches!(result, Err(FenError::InvalidColor { .. })));
    }

    #[test]
    fn error_invalid_castling() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1".parse::<Position>();
        assert_eq!(result, Err(FenError::InvalidCastlingChar { character: 'X' }));
    }

    #[test]
    fn error_invalid_en_passant() {
        for ep in ["z9", "e4", "e6"] {
            let fen = format!("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq {ep} 0 1");
            assert!(
                matches!(fen.parse::<Position>(), Err(FenError::InvalidEnPassant { .. })),
                "{ep} is not a valid target with black to move"
            );
        }
    }

    #[test]
    fn error_invalid_move_counter() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - abc 1".parse::<Position>();
        assert!(matches!(
            result,
            Err(FenError::InvalidMoveCounter { field: "halfmove clock", .. })
        ));
    }

    #[test]
    fn error_invalid_position() {
        let result = "8/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Position>();
        assert_eq!(
            result,
            Err(FenError::InvalidPosition {
                source: PositionError::InvalidKingCount {
                    color: "black",
                    count: 0
                }
            })
        );
    }
}
