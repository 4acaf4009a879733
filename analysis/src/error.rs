use std::error::Error;
use std::fmt;

use evaluation::EvalError;
use uci::PositionError;

#[derive(Debug)]
pub enum AnalysisError {
    /// The game text could not be read as a start position and moves.
    Game(PositionError),
    /// The evaluator failed while searching around a move.
    Evaluator {
        ply: usize,
        mv: String,
        source: Box<dyn Error>,
    },
    /// The evaluator answered, but its score could not be normalized.
    Score {
        ply: usize,
        mv: String,
        source: EvalError,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Game(e) => write!(f, "invalid game: {}", e),
            AnalysisError::Evaluator { ply, mv, source } => {
                write!(f, "evaluation failed at ply {} ({}): {}", ply + 1, mv, source)
            }
            AnalysisError::Score { ply, mv, source } => {
                write!(f, "unusable score at ply {} ({}): {}", ply + 1, mv, source)
            }
        }
    }
}

impl Error for AnalysisError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AnalysisError::Game(e) => Some(e),
            AnalysisError::Evaluator { source, .. } => Some(source.as_ref()),
            AnalysisError::Score { source, .. } => Some(source),
        }
    }
}

impl From<PositionError> for AnalysisError {
    fn from(e: PositionError) -> Self {
        AnalysisError::Game(e)
    }
}
