use cozy_chess::{Board, Color, GameStatus, Move};
use evaluation::scores::NO_PREVIOUS_SCORE;
use evaluation::{classify, classify_against_best, normalize, Perspective, RawEvaluation};
use uci::{move_to_uci, uci_to_move};

use crate::config::{AnalysisConfig, Baseline};
use crate::def::{Evaluator, SearchBudget};
use crate::error::AnalysisError;
use crate::game::Game;
use crate::notation::to_san;
use crate::progress::AnalysisProgressBar;
use crate::record::PlyRecord;

/// A searched position, already on the White-perspective scale.
#[derive(Debug, Clone, Copy)]
struct Searched {
    raw: RawEvaluation,
    score: i32,
    best: Option<Move>,
    depth: u8,
}

/// Walks a game ply by ply, asking the evaluator about each position and
/// grading every move.
pub struct Analyzer<E> {
    evaluator: E,
    budget: SearchBudget,
    config: AnalysisConfig,
}

impl<E: Evaluator> Analyzer<E> {
    pub fn new(evaluator: E, budget: SearchBudget, config: AnalysisConfig) -> Self {
        Self {
            evaluator,
            budget,
            config,
        }
    }

    pub fn into_inner(self) -> E {
        self.evaluator
    }

    pub fn analyze(&mut self, game: &Game) -> Result<Vec<PlyRecord>, AnalysisError> {
        log::info!(
            "Analyzing {} plies with {} ({:?} baseline)",
            game.len(),
            self.budget,
            self.config.baseline
        );

        let progress = AnalysisProgressBar::new(game.len(), self.config.show_progress);
        let mut board = game.start.clone();
        let mut previous = self.config.opening_score;
        let mut records = Vec::with_capacity(game.len());

        for (ply, &mv) in game.moves.iter().enumerate() {
            let record = self.analyze_ply(ply, &board, mv, previous)?;

            log::debug!(
                "{} {}: {} -> {} ({})",
                record.move_label(),
                record.san,
                record.score_before,
                record.score_after,
                record.category
            );
            progress.update(&format!("{} {}", record.move_label(), record.san));

            previous = Some(record.score_after);
            board.play_unchecked(mv);
            records.push(record);
        }

        progress.finish();
        Ok(records)
    }

    fn analyze_ply(
        &mut self,
        ply: usize,
        board: &Board,
        mv: Move,
        previous: Option<i32>,
    ) -> Result<PlyRecord, AnalysisError> {
        let side = board.side_to_move();
        let uci = move_to_uci(board, mv);
        let san = to_san(board, mv);

        let pre = if self.config.needs_pre_move_search() {
            Some(self.search(board, ply, &uci)?)
        } else {
            None
        };

        // Playing the engine's own choice cannot change its assessment
        let after = match pre.filter(|p| p.best == Some(mv)) {
            Some(p) => p,
            None => {
                let mut next = board.clone();
                next.play_unchecked(mv);
                self.search(&next, ply, &uci)?
            }
        };
        let score_after = after.score;

        let score_before = match (self.config.baseline, pre) {
            (Baseline::Reevaluate, Some(p)) => p.score,
            _ => previous.unwrap_or(NO_PREVIOUS_SCORE),
        };

        let thresholds = &self.config.thresholds;
        let category = classify(score_before, score_after, side, thresholds);

        let best = pre.and_then(|p| p.best.map(|best| (best, p.score)));
        let engine_category = match best {
            Some((_, best_score)) if self.config.compare_best => Some(classify_against_best(
                best_score,
                score_after,
                side,
                thresholds,
            )),
            _ => None,
        };

        Ok(PlyRecord {
            ply,
            move_number: board.fullmove_number(),
            side_to_move: side,
            uci,
            san,
            score_before,
            score_after,
            raw_after: after.raw,
            category,
            best_move: best.map(|(best, _)| to_san(board, best)),
            best_score: best.map(|(_, score)| score),
            engine_category,
            depth: after.depth,
        })
    }

    fn search(&mut self, board: &Board, ply: usize, uci: &str) -> Result<Searched, AnalysisError> {
        let perspective = Perspective::SideToMove(board.side_to_move());

        // Finished games are scored without asking the engine
        let (raw, best, depth) = match board.status() {
            GameStatus::Won => (RawEvaluation::mate(perspective, 0), None, 0),
            GameStatus::Drawn => (RawEvaluation::centipawns(perspective, 0), None, 0),
            GameStatus::Ongoing => {
                let report = self
                    .evaluator
                    .evaluate(board, &self.budget)
                    .map_err(|source| AnalysisError::Evaluator {
                        ply,
                        mv: uci.to_string(),
                        source,
                    })?;
                let best = report.pv.first().and_then(|mv| uci_to_move(board, mv));
                (report.score, best, report.depth)
            }
        };

        let score = normalize(&raw, &self.config.mate_mapping).map_err(|source| {
            AnalysisError::Score {
                ply,
                mv: uci.to_string(),
                source,
            }
        })?;

        log::debug!(
            "{} to move, {} -> {} (depth {})",
            color_name(board.side_to_move()),
            raw,
            score,
            depth
        );

        Ok(Searched {
            raw,
            score,
            best,
            depth,
        })
    }
}

#[inline]
fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}
