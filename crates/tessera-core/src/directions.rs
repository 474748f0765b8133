//! Step tables shared by the attack detector, move generator and evaluator.
//!
//! Every entry is a `(file_delta, rank_delta)` pair applied through
//! [`Square::offset`](crate::Square::offset), which rejects off-board steps.

/// Rook rays: down, up, left, right.
pub const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Bishop rays.
pub const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Knight leaps.
pub const KNIGHT: [(i8, i8); 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
];

/// King steps (also the queen's eight ray directions).
pub const KING: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// File deltas of a pawn capture.
pub const PAWN_CAPTURE_FILES: [i8; 2] = [-1, 1];
