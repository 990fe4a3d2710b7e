//! Constants for board dimensions and bot search parameters.
//!
//! # Board Size Configuration
//!
//! The board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! To compile for a specific board size:
//! ```sh
//! cargo build                           # 9x9 (default)
//! cargo build --no-default-features --features board13x13  # 13x13
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(feature = "board13x13")]
pub const N: usize = 13;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Maximum playout length (3 times board area).
pub const MAX_GAME_LEN: usize = N * N * 3;

// =============================================================================
// Search Scores
// =============================================================================

/// Minimax score for a forced win. Its negation is a forced loss.
pub const WIN_SCORE: i32 = 1000;

/// Loss count substituted for zero when ranking Monte-Carlo candidates.
pub const ZERO_LOSSES: f64 = 0.1;

// =============================================================================
// Neighbor Offsets (row, col)
// =============================================================================

/// Orthogonal neighbors. Order: West, East, North, South.
pub const NEIGHBORS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Diagonal neighbors. Order: NW, NE, SW, SE.
pub const CORNERS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The 3x3 ring around a point.
pub const LOCALITY: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The 5x5 square around a point, without the point itself.
pub const LOCALITY2: [(i32, i32); 24] = [
    (-2, -2),
    (-2, -1),
    (-2, 0),
    (-2, 1),
    (-2, 2),
    (-1, -2),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (-1, 2),
    (0, -2),
    (0, -1),
    (0, 1),
    (0, 2),
    (1, -2),
    (1, -1),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, -2),
    (2, -1),
    (2, 0),
    (2, 1),
    (2, 2),
];
