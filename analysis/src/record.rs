use cozy_chess::Color;
use evaluation::{regression, Category, RawEvaluation};

/// One played move and how it was graded.
#[derive(Debug, Clone, PartialEq)]
pub struct PlyRecord {
    /// 0-based index into the game's moves.
    pub ply: usize,
    pub move_number: u16,
    /// The side that made the move.
    pub side_to_move: Color,
    pub uci: String,
    pub san: String,
    /// White-perspective centipawns before the move.
    pub score_before: i32,
    /// White-perspective centipawns after the move.
    pub score_after: i32,
    /// The engine's score for the position after the move, as reported.
    pub raw_after: RawEvaluation,
    pub category: Category,
    /// Engine's preferred move in the pre-move position (SAN).
    pub best_move: Option<String>,
    pub best_score: Option<i32>,
    /// Grade against `best_score` rather than `score_before`.
    pub engine_category: Option<Category>,
    /// Depth reached by the search that produced `score_after`.
    pub depth: u8,
}

impl PlyRecord {
    /// How much the mover's own score dropped. Negative for improving moves.
    #[inline]
    pub fn regression(&self) -> i32 {
        regression(self.score_before, self.score_after, self.side_to_move)
    }

    /// A mate on the board after the move: who mates, and in how many moves.
    /// Zero moves means the move delivered checkmate.
    pub fn announced_mate(&self) -> Option<(Color, i32)> {
        if !self.raw_after.is_mate() {
            return None;
        }
        let moves = self.raw_after.value?.abs();
        let winner = if self.score_after > 0 {
            Color::White
        } else {
            Color::Black
        };
        Some((winner, moves))
    }

    /// The played move was the engine's first choice.
    pub fn matches_best(&self) -> bool {
        self.best_move.as_deref() == Some(self.san.as_str())
    }

    /// `12.` for White moves, `12...` for Black.
    pub fn move_label(&self) -> String {
        match self.side_to_move {
            Color::White => format!("{}.", self.move_number),
            Color::Black => format!("{}...", self.move_number),
        }
    }
}
