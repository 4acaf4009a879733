use std::path::PathBuf;

use analysis::{Baseline, SearchBudget};
use clap::{ArgGroup, Parser, ValueEnum};
use evaluation::scores::{BLUNDER_CP, INACCURACY_CP, MATE_DISTANCE_STEP, MATE_IN_ONE_CP, MISTAKE_CP};
use evaluation::MateMapping;

/// Depth used when no search budget is given.
const DEFAULT_DEPTH: u8 = 18;

#[derive(Parser, Debug)]
#[command(name = "Appraise")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Grades every move of a chess game with a UCI engine")]
#[command(group(ArgGroup::new("input").args(["game", "moves"]).required(true)))]
#[command(group(ArgGroup::new("budget").args(["depth", "time", "elo"])))]
pub struct Args {
    /// Path to a UCI engine binary.
    #[arg(short, long)]
    pub engine: PathBuf,

    /// Game file: `startpos|fen <FEN> [moves ...]`, `#` starts a comment.
    #[arg(short, long)]
    pub game: Option<PathBuf>,

    /// Moves from the start position, in UCI notation.
    #[arg(short, long)]
    pub moves: Option<String>,

    /// Search each position to this depth.
    #[arg(short, long)]
    pub depth: Option<u8>,

    /// Search each position for this many milliseconds.
    #[arg(short, long)]
    pub time: Option<u64>,

    /// Limit the engine to this Elo.
    #[arg(long)]
    pub elo: Option<u32>,

    /// Engine hash size in MB.
    #[arg(long)]
    pub hash: Option<u32>,

    #[arg(long)]
    pub threads: Option<u32>,

    /// What each move's score is compared against.
    #[arg(long, value_enum, default_value_t = BaselineArg::Carry)]
    pub baseline: BaselineArg,

    /// Score the first move is compared against, in centipawns for White.
    #[arg(long, allow_negative_numbers = true)]
    pub opening_score: Option<i32>,

    #[arg(long, default_value_t = INACCURACY_CP)]
    pub inaccuracy: i32,

    #[arg(long, default_value_t = MISTAKE_CP)]
    pub mistake: i32,

    #[arg(long, default_value_t = BLUNDER_CP)]
    pub blunder: i32,

    /// Report moves that leave the mover this far behind as walking into mate.
    #[arg(long)]
    pub forced_mate: Option<i32>,

    /// Centipawn value of a forced mate.
    #[arg(long, default_value_t = MATE_IN_ONE_CP)]
    pub mate_score: i32,

    /// Score shorter mates higher than longer ones.
    #[arg(long)]
    pub distance_scaled: bool,

    /// Centipawns per move of mate distance under `--distance-scaled`.
    #[arg(long, default_value_t = MATE_DISTANCE_STEP)]
    pub mate_step: i32,

    /// Skip grading moves against the engine's own choice.
    #[arg(long)]
    pub no_compare_best: bool,

    /// Print every move, not only the flagged ones.
    #[arg(short, long)]
    pub all: bool,

    /// Write debug logs (including UCI traffic) to this file or directory.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long)]
    pub no_progress: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaselineArg {
    /// Compare against the score after the previous move.
    Carry,
    /// Search the position again before every move.
    Reevaluate,
}

impl From<BaselineArg> for Baseline {
    fn from(arg: BaselineArg) -> Self {
        match arg {
            BaselineArg::Carry => Baseline::Carry,
            BaselineArg::Reevaluate => Baseline::Reevaluate,
        }
    }
}

impl Args {
    pub fn mate_mapping(&self) -> MateMapping {
        if self.distance_scaled {
            MateMapping::distance_scaled(self.mate_score, self.mate_step)
        } else {
            MateMapping::flat(self.mate_score)
        }
    }

    pub fn budget(&self) -> SearchBudget {
        match (self.depth, self.time, self.elo) {
            (_, Some(ms), _) => SearchBudget::MoveTime(ms),
            (_, _, Some(elo)) => SearchBudget::Elo(elo),
            (depth, _, _) => SearchBudget::Depth(depth.unwrap_or(DEFAULT_DEPTH)),
        }
    }
}
