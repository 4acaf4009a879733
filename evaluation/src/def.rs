use std::fmt;
use std::str::FromStr;

use cozy_chess::Color;

use crate::error::EvalError;

/// Whose point of view a raw score is expressed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    White,
    Black,
    /// Relative to the side to move in the evaluated position (UCI engines report this way).
    SideToMove(Color),
}

/// Unit of a raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreKind {
    Centipawns,
    /// Signed moves-to-mate. Positive = perspective player mates, negative = gets mated.
    Mate,
}

impl FromStr for ScoreKind {
    type Err = EvalError;

    /// Parses the UCI score tokens `cp` and `mate`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cp" => Ok(ScoreKind::Centipawns),
            "mate" => Ok(ScoreKind::Mate),
            _ => Err(EvalError::UnknownKind(s.to_string())),
        }
    }
}

/// A score exactly as an engine produced it, before normalization.
///
/// The value is optional so that a search which never reported a score is
/// carried to the normalizer as an explicit absence instead of a made-up zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEvaluation {
    pub perspective: Perspective,
    pub kind: ScoreKind,
    pub value: Option<i32>,
}

impl RawEvaluation {
    pub fn new(perspective: Perspective, kind: ScoreKind, value: i32) -> Self {
        Self {
            perspective,
            kind,
            value: Some(value),
        }
    }

    pub fn centipawns(perspective: Perspective, cp: i32) -> Self {
        Self::new(perspective, ScoreKind::Centipawns, cp)
    }

    pub fn mate(perspective: Perspective, moves: i32) -> Self {
        Self::new(perspective, ScoreKind::Mate, moves)
    }

    /// A score whose kind is known but whose value was never reported.
    pub fn missing(perspective: Perspective, kind: ScoreKind) -> Self {
        Self {
            perspective,
            kind,
            value: None,
        }
    }

    #[inline]
    pub fn is_mate(&self) -> bool {
        self.kind == ScoreKind::Mate
    }
}

impl fmt::Display for RawEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.value) {
            (ScoreKind::Centipawns, Some(cp)) => write!(f, "{:+.2}", cp as f64 / 100.0),
            (ScoreKind::Mate, Some(moves)) if moves > 0 => write!(f, "#+{}", moves),
            (ScoreKind::Mate, Some(moves)) => write!(f, "#-{}", moves.abs()),
            (_, None) => write!(f, "?"),
        }
    }
}
