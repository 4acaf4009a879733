use std::path::PathBuf;

use evaluation::{MateMapping, Thresholds};

use crate::def::SearchBudget;

/// Engine setup, fixed for the whole run.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub path: PathBuf,
    /// Transposition table size in MB (`Hash`).
    pub hash_mb: Option<u32>,
    pub threads: Option<u32>,
    pub budget: SearchBudget,
}

/// What a move's score is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    /// The score after the previous ply. One search per ply.
    Carry,
    /// A fresh search of the position before the move.
    Reevaluate,
}

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub baseline: Baseline,
    /// Score the first move is compared against under `Baseline::Carry`.
    /// `None` means a balanced position.
    pub opening_score: Option<i32>,
    pub thresholds: Thresholds,
    pub mate_mapping: MateMapping,
    /// Also grade each move against the engine's best move in the same position.
    pub compare_best: bool,
    pub show_progress: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            baseline: Baseline::Carry,
            opening_score: None,
            thresholds: Thresholds::default(),
            mate_mapping: MateMapping::default(),
            compare_best: true,
            show_progress: false,
        }
    }
}

impl AnalysisConfig {
    /// The engine must search the position before each move.
    #[inline]
    pub fn needs_pre_move_search(&self) -> bool {
        self.compare_best || self.baseline == Baseline::Reevaluate
    }
}
