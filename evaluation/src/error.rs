use std::error::Error;
use std::fmt;

/// A raw engine score that cannot be put on the centipawn scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The engine named a score kind other than `cp` or `mate`.
    UnknownKind(String),
    /// The score kind is known but no value came with it.
    MissingValue,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnknownKind(kind) => {
                write!(f, "unknown score kind '{}', expected 'cp' or 'mate'", kind)
            }
            EvalError::MissingValue => write!(f, "evaluation has no score value"),
        }
    }
}

impl Error for EvalError {}

/// Rejected classification settings. Raised once when thresholds are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NegativeThreshold {
        name: &'static str,
        value: i32,
    },
    /// Thresholds must be strictly increasing: inaccuracy < mistake < blunder.
    NotIncreasing {
        lower: &'static str,
        lower_value: i32,
        upper: &'static str,
        upper_value: i32,
    },
    /// The mate-announcement boundary has to sit above the blunder threshold.
    ForcedMateTooLow { forced_mate: i32, blunder: i32 },
    /// Mate mapping parameters must be positive.
    InvalidMateMapping(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NegativeThreshold { name, value } => {
                write!(f, "{} threshold must not be negative (got {})", name, value)
            }
            ConfigError::NotIncreasing {
                lower,
                lower_value,
                upper,
                upper_value,
            } => write!(
                f,
                "{} threshold ({}) must be below {} threshold ({})",
                lower, lower_value, upper, upper_value
            ),
            ConfigError::ForcedMateTooLow {
                forced_mate,
                blunder,
            } => write!(
                f,
                "forced mate boundary ({}) must be above blunder threshold ({})",
                forced_mate, blunder
            ),
            ConfigError::InvalidMateMapping(reason) => write!(f, "invalid mate mapping: {}", reason),
        }
    }
}

impl Error for ConfigError {}
