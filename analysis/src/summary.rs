use std::fmt;

use ahash::AHashMap;
use cozy_chess::Color;
use evaluation::Category;

use crate::record::PlyRecord;

#[derive(Default)]
struct SideSummary {
    moves: u32,
    /// Sum of clamped regressions, in centipawns.
    total_loss: i64,
}

impl SideSummary {
    #[inline]
    fn average_loss(&self) -> f64 {
        if self.moves == 0 {
            0.0
        } else {
            self.total_loss as f64 / self.moves as f64
        }
    }
}

/// Per-colour tallies over an analyzed game.
pub struct Summary {
    counts: AHashMap<(Color, Category), u32>,
    sides: AHashMap<Color, SideSummary>,
    engine: Option<String>,
}

impl Summary {
    /// `loss_cap` bounds each move's contribution to the average, so one
    /// mate swing does not swamp the rest of the game.
    pub fn new(records: &[PlyRecord], loss_cap: i32) -> Self {
        let mut counts = AHashMap::new();
        let mut sides: AHashMap<Color, SideSummary> = AHashMap::new();

        for record in records {
            *counts
                .entry((record.side_to_move, record.category))
                .or_insert(0) += 1;

            let side = sides.entry(record.side_to_move).or_default();
            side.moves += 1;
            side.total_loss += record.regression().clamp(0, loss_cap) as i64;
        }

        Summary {
            counts,
            sides,
            engine: None,
        }
    }

    pub fn with_engine(mut self, name: String) -> Self {
        self.engine = Some(name);
        self
    }

    #[inline]
    pub fn count(&self, side: Color, category: Category) -> u32 {
        self.counts.get(&(side, category)).copied().unwrap_or(0)
    }

    #[inline]
    pub fn moves(&self, side: Color) -> u32 {
        self.sides.get(&side).map_or(0, |s| s.moves)
    }

    /// Mean centipawn loss of `side`'s moves. Improving moves count as zero.
    #[inline]
    pub fn average_loss(&self, side: Color) -> f64 {
        self.sides.get(&side).map_or(0.0, SideSummary::average_loss)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis Summary")?;
        writeln!(f, "================")?;
        if let Some(engine) = &self.engine {
            writeln!(f, "Engine: {}", engine)?;
        }
        writeln!(f)?;

        for side in [Color::White, Color::Black] {
            writeln!(f, "{:?} ({} moves)", side, self.moves(side))?;
            for category in Category::ALL {
                if category == Category::Ok {
                    continue;
                }
                writeln!(f, "   {}: {}", category.description(), self.count(side, category))?;
            }
            writeln!(f, "   Average loss: {:.1} cp", self.average_loss(side))?;
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluation::{Perspective, RawEvaluation};

    fn record(side: Color, before: i32, after: i32, category: Category) -> PlyRecord {
        PlyRecord {
            ply: 0,
            move_number: 1,
            side_to_move: side,
            uci: String::new(),
            san: String::new(),
            score_before: before,
            score_after: after,
            raw_after: RawEvaluation::centipawns(Perspective::White, after),
            category,
            best_move: None,
            best_score: None,
            engine_category: None,
            depth: 0,
        }
    }

    #[test]
    fn test_counts_per_side() {
        let records = vec![
            record(Color::White, 0, -250, Category::Blunder),
            record(Color::Black, -250, -200, Category::Inaccuracy),
            record(Color::White, -200, -300, Category::Mistake),
            record(Color::Black, -300, -310, Category::Ok),
        ];
        let summary = Summary::new(&records, 25_000);

        assert_eq!(summary.count(Color::White, Category::Blunder), 1);
        assert_eq!(summary.count(Color::White, Category::Mistake), 1);
        assert_eq!(summary.count(Color::Black, Category::Inaccuracy), 1);
        assert_eq!(summary.count(Color::Black, Category::Blunder), 0);
        assert_eq!(summary.moves(Color::White), 2);
        assert_eq!(summary.moves(Color::Black), 2);
    }

    #[test]
    fn test_average_loss_ignores_improvements_and_caps_mates() {
        let records = vec![
            record(Color::White, 0, -100, Category::Mistake),
            record(Color::White, -100, 300, Category::Ok),
            record(Color::White, 300, -25_000, Category::Blunder),
        ];
        let summary = Summary::new(&records, 1_000);
        assert!((summary.average_loss(Color::White) - 1100.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.average_loss(Color::Black), 0.0);
    }

    #[test]
    fn test_display_names_engine() {
        let summary = Summary::new(&[], 25_000).with_engine("Stockfish".to_string());
        let text = summary.to_string();
        assert!(text.contains("Engine: Stockfish"));
        assert!(text.contains("White (0 moves)"));
    }
}
