use crate::options::UciOption;

/// Commands we send to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    SetOption {
        name: String,
        value: Option<String>,
    },
    Position {
        fen: String,
        moves: Vec<String>,
    },
    Go(GoParams),
    Quit,
}

/// Lines the engine sends back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineOutput {
    IdName(String),
    IdAuthor(String),
    UciOk,
    ReadyOk,
    BestMove {
        /// `None` when the engine answers `bestmove (none)` (no legal moves).
        best_move: Option<String>,
        ponder: Option<String>,
    },
    Info(Info),
    InfoString(String),
    Option(UciOption),
    Unknown(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Info {
    pub depth: Option<u8>,
    pub sel_depth: Option<u8>,
    pub multi_pv: Option<u8>,
    pub nodes: Option<u64>,
    pub nodes_per_second: Option<u64>,
    pub time: Option<u64>,
    pub pv: Vec<String>,
    pub score: Option<Score>,
    pub bound: Option<Bound>,
}

impl Info {
    /// Lines from the first principal variation (engines omit `multipv` when there is only one).
    #[inline]
    pub fn is_main_line(&self) -> bool {
        self.multi_pv.map_or(true, |n| n == 1)
    }
}

/// Engine score, always relative to the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Centipawns(i32), // centipawns
    Mate(i32),       // Positive for mate-in-n, negative for mated-in-n
}

/// Set when the reported score is only a bound from an aspiration re-search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Lower,
    Upper,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    // Search depth ply only.
    pub depth: Option<u8>,

    // Search exactly movetime milliseconds.
    pub move_time: Option<u64>,
}
