use cozy_chess::Color;

use crate::def::{Perspective, RawEvaluation, ScoreKind};
use crate::error::{ConfigError, EvalError};
use crate::scores::{MATE_DISTANCE_HORIZON, MATE_IN_ONE_CP};

/// How a forced mate is put on the centipawn scale.
///
/// Every mapping keeps mates at or above `mate_cp` in magnitude, so a mate
/// always outranks any centipawn score smaller than `mate_cp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MateMapping {
    /// Every mate becomes `±mate_cp`; mate distance is discarded.
    Flat { mate_cp: i32 },
    /// Shorter mates score higher: `mate_cp + step * (horizon - min(n, horizon))`.
    DistanceScaled {
        mate_cp: i32,
        step: i32,
        horizon: i32,
    },
}

impl Default for MateMapping {
    fn default() -> Self {
        MateMapping::Flat {
            mate_cp: MATE_IN_ONE_CP,
        }
    }
}

impl MateMapping {
    pub fn flat(mate_cp: i32) -> Self {
        MateMapping::Flat { mate_cp }
    }

    pub fn distance_scaled(mate_cp: i32, step: i32) -> Self {
        MateMapping::DistanceScaled {
            mate_cp,
            step,
            horizon: MATE_DISTANCE_HORIZON,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (mate_cp, step, horizon) = match *self {
            MateMapping::Flat { mate_cp } => (mate_cp, 1, 1),
            MateMapping::DistanceScaled {
                mate_cp,
                step,
                horizon,
            } => (mate_cp, step, horizon),
        };

        if mate_cp <= 0 {
            return Err(ConfigError::InvalidMateMapping(format!(
                "mate score must be positive (got {})",
                mate_cp
            )));
        }
        if step <= 0 || horizon <= 0 {
            return Err(ConfigError::InvalidMateMapping(format!(
                "step and horizon must be positive (got step {}, horizon {})",
                step, horizon
            )));
        }
        Ok(())
    }

    /// Smallest magnitude any mate maps to.
    #[inline]
    pub fn mate_cp(&self) -> i32 {
        match *self {
            MateMapping::Flat { mate_cp } | MateMapping::DistanceScaled { mate_cp, .. } => mate_cp,
        }
    }

    /// True when `score` can only have come from a mate under this mapping.
    #[inline]
    pub fn is_mate_score(&self, score: i32) -> bool {
        score.unsigned_abs() >= self.mate_cp().unsigned_abs()
    }

    /// Maps a signed moves-to-mate count onto centipawns.
    ///
    /// `mate 0` means the perspective player is already mated, so it maps to
    /// the most negative value of the mapping.
    pub fn to_centipawns(&self, moves: i32) -> i32 {
        let magnitude = match *self {
            MateMapping::Flat { mate_cp } => mate_cp,
            MateMapping::DistanceScaled {
                mate_cp,
                step,
                horizon,
            } => {
                let distance = moves.unsigned_abs().min(horizon as u32) as i32;
                mate_cp.saturating_add(step.saturating_mul(horizon - distance))
            }
        };

        if moves > 0 {
            magnitude
        } else {
            -magnitude
        }
    }
}

/// Flip a score between White's view and the view of `side`.
#[inline(always)]
pub fn flip_perspective(side: Color, score: i32) -> i32 {
    if side == Color::White {
        score
    } else {
        score.saturating_neg()
    }
}

/// Puts a raw engine score on the White-perspective centipawn scale.
///
/// Mates are mapped first (keeping their sign relative to the perspective
/// player), then the value is flipped into White's frame.
pub fn normalize(raw: &RawEvaluation, mapping: &MateMapping) -> Result<i32, EvalError> {
    let value = raw.value.ok_or(EvalError::MissingValue)?;

    let score = match raw.kind {
        ScoreKind::Centipawns => value,
        ScoreKind::Mate => mapping.to_centipawns(value),
    };

    Ok(match raw.perspective {
        Perspective::White => score,
        Perspective::Black => score.saturating_neg(),
        Perspective::SideToMove(side) => flip_perspective(side, score),
    })
}
