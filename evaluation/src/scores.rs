// Score scale constants. Everything here is White-perspective centipawns.

/// Centipawn value a forced mate collapses to. Larger than any realistic material score.
pub const MATE_IN_ONE_CP: i32 = 25_000;

/// Extra centipawns per move of mate distance under the distance-scaled mapping.
pub const MATE_DISTANCE_STEP: i32 = 10;

/// Mate distances at or beyond this many moves all map to `MATE_IN_ONE_CP`.
pub const MATE_DISTANCE_HORIZON: i32 = 100;

/// Baseline used as the "previous" score before the first move of a game: a balanced position.
pub const NO_PREVIOUS_SCORE: i32 = 0;

// Default classification thresholds (centipawns of regression, compared with `>`).
pub const INACCURACY_CP: i32 = 40;
pub const MISTAKE_CP: i32 = 90;
pub const BLUNDER_CP: i32 = 200;
