// Engine-backed game analysis: drives an `Evaluator` over every position of
// a game and grades each move with the `evaluation` classifier.

mod analyzer;
mod config;
mod def;
mod engine;
mod error;
mod game;
mod notation;
mod progress;
mod record;
mod summary;

pub use analyzer::Analyzer;
pub use config::{AnalysisConfig, Baseline, EngineConfig};
pub use def::{EngineReport, Evaluator, SearchBudget, ELO_MOVE_TIME_MS};
pub use engine::{EngineError, EngineProcess};
pub use error::AnalysisError;
pub use game::Game;
pub use notation::to_san;
pub use record::PlyRecord;
pub use summary::Summary;
