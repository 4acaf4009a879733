use std::error::Error;
use std::fmt;

use cozy_chess::Board;
use evaluation::RawEvaluation;
use uci::commands::GoParams;

/// Think time per position when the engine plays at a fixed Elo.
pub const ELO_MOVE_TIME_MS: u64 = 1000;

/// How much effort the engine spends on each position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBudget {
    /// Search to a fixed depth in plies.
    Depth(u8),
    /// Think for this many milliseconds.
    MoveTime(u64),
    /// Play at this strength; configured on the engine once, searched with `ELO_MOVE_TIME_MS`.
    Elo(u32),
}

impl SearchBudget {
    pub fn go_params(&self) -> GoParams {
        match *self {
            SearchBudget::Depth(depth) => GoParams {
                depth: Some(depth),
                ..Default::default()
            },
            SearchBudget::MoveTime(ms) => GoParams {
                move_time: Some(ms),
                ..Default::default()
            },
            SearchBudget::Elo(_) => GoParams {
                move_time: Some(ELO_MOVE_TIME_MS),
                ..Default::default()
            },
        }
    }
}

impl fmt::Display for SearchBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchBudget::Depth(depth) => write!(f, "depth {}", depth),
            SearchBudget::MoveTime(ms) => write!(f, "{} ms per position", ms),
            SearchBudget::Elo(elo) => write!(f, "Elo {}", elo),
        }
    }
}

/// What an evaluator found for one position.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineReport {
    pub score: RawEvaluation,
    /// Best line found, as UCI moves from the evaluated position.
    pub pv: Vec<String>,
    pub depth: u8,
}

/// Position evaluator interface.
pub trait Evaluator {
    fn name(&self) -> String;

    fn evaluate(
        &mut self,
        position: &Board,
        budget: &SearchBudget,
    ) -> Result<EngineReport, Box<dyn Error>>;
}
