use std::collections::HashMap;
use std::error::Error;

use analysis::{
    AnalysisConfig, AnalysisError, Analyzer, Baseline, EngineReport, Evaluator, Game, SearchBudget,
};
use cozy_chess::{Board, Color};
use evaluation::{Category, Perspective, RawEvaluation, ScoreKind, Thresholds};

/// Answers from a fixed table of positions and remembers what it was asked.
#[derive(Default)]
struct ScriptedEvaluator {
    reports: HashMap<String, EngineReport>,
    calls: Vec<String>,
}

impl ScriptedEvaluator {
    fn centipawns(mut self, board: &Board, cp: i32, pv: &[&str]) -> Self {
        let perspective = Perspective::SideToMove(board.side_to_move());
        self.insert(board, RawEvaluation::centipawns(perspective, cp), pv);
        self
    }

    fn mate(mut self, board: &Board, moves: i32, pv: &[&str]) -> Self {
        let perspective = Perspective::SideToMove(board.side_to_move());
        self.insert(board, RawEvaluation::mate(perspective, moves), pv);
        self
    }

    fn missing(mut self, board: &Board) -> Self {
        let perspective = Perspective::SideToMove(board.side_to_move());
        self.insert(board, RawEvaluation::missing(perspective, ScoreKind::Centipawns), &[]);
        self
    }

    fn insert(&mut self, board: &Board, score: RawEvaluation, pv: &[&str]) {
        self.reports.insert(
            board.to_string(),
            EngineReport {
                score,
                pv: pv.iter().map(|mv| mv.to_string()).collect(),
                depth: 12,
            },
        );
    }
}

impl Evaluator for ScriptedEvaluator {
    fn name(&self) -> String {
        "scripted".to_string()
    }

    fn evaluate(
        &mut self,
        position: &Board,
        _budget: &SearchBudget,
    ) -> Result<EngineReport, Box<dyn Error>> {
        let fen = position.to_string();
        self.calls.push(fen.clone());
        self.reports
            .get(&fen)
            .cloned()
            .ok_or_else(|| format!("unscripted position {}", fen).into())
    }
}

/// Board after the first `plies` moves of `game`.
fn position(game: &Game, plies: usize) -> Board {
    let mut board = game.start.clone();
    for &mv in &game.moves[..plies] {
        board.play_unchecked(mv);
    }
    board
}

fn config(baseline: Baseline, compare_best: bool) -> AnalysisConfig {
    AnalysisConfig {
        baseline,
        compare_best,
        ..Default::default()
    }
}

fn run(
    evaluator: ScriptedEvaluator,
    config: AnalysisConfig,
    game: &Game,
) -> (Result<Vec<analysis::PlyRecord>, AnalysisError>, ScriptedEvaluator) {
    let mut analyzer = Analyzer::new(evaluator, SearchBudget::Depth(12), config);
    let result = analyzer.analyze(game);
    (result, analyzer.into_inner())
}

#[test]
fn test_carry_baseline_uses_previous_score() {
    let game = Game::from_moves("e2e4 e7e5 g1f3").unwrap();
    let evaluator = ScriptedEvaluator::default()
        .centipawns(&position(&game, 1), -30, &[])
        .centipawns(&position(&game, 2), 25, &[])
        .centipawns(&position(&game, 3), 200, &[]);

    let (records, evaluator) = run(evaluator, config(Baseline::Carry, false), &game);
    let records = records.unwrap();

    let scores: Vec<_> = records.iter().map(|r| (r.score_before, r.score_after)).collect();
    assert_eq!(scores, vec![(0, 30), (30, 25), (25, -200)]);

    let categories: Vec<_> = records.iter().map(|r| r.category).collect();
    assert_eq!(categories, vec![Category::Ok, Category::Ok, Category::Blunder]);

    // Only the position after each move is searched
    assert_eq!(evaluator.calls.len(), 3);
    assert!(records.iter().all(|r| r.best_move.is_none() && r.engine_category.is_none()));
    assert_eq!(records[2].san, "Nf3");
    assert_eq!(records[2].move_number, 2);
}

#[test]
fn test_opening_score_seeds_first_move() {
    let game = Game::from_moves("e2e4").unwrap();
    let evaluator = ScriptedEvaluator::default().centipawns(&position(&game, 1), 20, &[]);
    let config = AnalysisConfig {
        opening_score: Some(100),
        ..config(Baseline::Carry, false)
    };

    let (records, _) = run(evaluator, config, &game);
    let records = records.unwrap();
    assert_eq!(records[0].score_before, 100);
    assert_eq!(records[0].score_after, -20);
    assert_eq!(records[0].category, Category::Mistake);
}

#[test]
fn test_reevaluate_searches_before_each_move() {
    let game = Game::from_moves("e2e4").unwrap();
    let evaluator = ScriptedEvaluator::default()
        .centipawns(&position(&game, 0), 50, &["d2d4", "d7d5"])
        .centipawns(&position(&game, 1), 60, &["c7c5"]);

    let (records, evaluator) = run(evaluator, config(Baseline::Reevaluate, false), &game);
    let record = &records.unwrap()[0];

    assert_eq!(record.score_before, 50);
    assert_eq!(record.score_after, -60);
    assert_eq!(record.category, Category::Mistake);
    assert_eq!(record.best_move.as_deref(), Some("d4"));
    assert_eq!(record.engine_category, None);
    assert_eq!(evaluator.calls.len(), 2);
}

#[test]
fn test_compare_best_under_carry() {
    let game = Game::from_moves("e2e4").unwrap();
    let evaluator = ScriptedEvaluator::default()
        .centipawns(&position(&game, 0), 50, &["d2d4"])
        .centipawns(&position(&game, 1), 60, &[]);

    let (records, _) = run(evaluator, config(Baseline::Carry, true), &game);
    let record = &records.unwrap()[0];

    assert_eq!(record.score_before, 0);
    assert_eq!(record.category, Category::Inaccuracy);
    assert_eq!(record.best_score, Some(50));
    assert_eq!(record.engine_category, Some(Category::Mistake));
    assert!(!record.matches_best());
}

#[test]
fn test_best_move_reuses_pre_move_score() {
    let game = Game::from_moves("e2e4").unwrap();
    // The position after e4 is deliberately unscripted
    let evaluator = ScriptedEvaluator::default().centipawns(&position(&game, 0), 35, &["e2e4", "e7e5"]);

    let (records, evaluator) = run(evaluator, config(Baseline::Reevaluate, true), &game);
    let record = &records.unwrap()[0];

    assert_eq!(evaluator.calls.len(), 1);
    assert_eq!(record.score_before, 35);
    assert_eq!(record.score_after, 35);
    assert_eq!(record.category, Category::Ok);
    assert_eq!(record.engine_category, Some(Category::Ok));
    assert!(record.matches_best());
}

#[test]
fn test_checkmate_is_scored_without_engine() {
    let game = Game::parse("fen 6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1 moves a1a8").unwrap();

    let (records, evaluator) = run(ScriptedEvaluator::default(), config(Baseline::Carry, false), &game);
    let record = &records.unwrap()[0];

    assert!(evaluator.calls.is_empty());
    assert_eq!(record.san, "Ra8#");
    assert_eq!(record.score_after, 25_000);
    assert_eq!(record.announced_mate(), Some((Color::White, 0)));
    assert_eq!(record.category, Category::Ok);
}

#[test]
fn test_mating_line_from_engine() {
    let game = Game::parse("fen 6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1 moves a1a8").unwrap();
    let evaluator = ScriptedEvaluator::default().mate(&position(&game, 0), 1, &["a1a8"]);

    let (records, evaluator) = run(evaluator, config(Baseline::Reevaluate, true), &game);
    let record = &records.unwrap()[0];

    assert_eq!(evaluator.calls.len(), 1);
    assert_eq!(record.score_before, 25_000);
    assert_eq!(record.score_after, 25_000);
    assert_eq!(record.category, Category::Ok);
}

#[test]
fn test_walking_into_mate() {
    let game = Game::from_moves("f2f3").unwrap();
    // Black to move and mating in two
    let evaluator = ScriptedEvaluator::default().mate(&position(&game, 1), 2, &["e7e5"]);

    let (records, _) = run(evaluator, config(Baseline::Carry, false), &game);
    let record = &records.unwrap()[0];
    assert_eq!(record.score_after, -25_000);
    assert_eq!(record.category, Category::Blunder);
    assert_eq!(record.announced_mate(), Some((Color::Black, 2)));

    let evaluator = ScriptedEvaluator::default().mate(&position(&game, 1), 2, &["e7e5"]);
    let config = AnalysisConfig {
        thresholds: Thresholds::default().with_forced_mate(10_000).unwrap(),
        ..config(Baseline::Carry, false)
    };
    let (records, _) = run(evaluator, config, &game);
    assert_eq!(records.unwrap()[0].category, Category::ForcedMate);
}

#[test]
fn test_missing_score_is_an_error() {
    let game = Game::from_moves("e2e4 e7e5").unwrap();
    let evaluator = ScriptedEvaluator::default()
        .centipawns(&position(&game, 1), -30, &[])
        .missing(&position(&game, 2));

    let (result, _) = run(evaluator, config(Baseline::Carry, false), &game);
    match result {
        Err(AnalysisError::Score { ply, mv, .. }) => {
            assert_eq!(ply, 1);
            assert_eq!(mv, "e7e5");
        }
        other => panic!("expected a score error, got {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn test_evaluator_failure_names_the_move() {
    let game = Game::from_moves("d2d4").unwrap();

    let (result, _) = run(ScriptedEvaluator::default(), config(Baseline::Carry, false), &game);
    let err = result.unwrap_err();
    assert!(matches!(err, AnalysisError::Evaluator { ply: 0, .. }));
    assert!(err.to_string().contains("d2d4"));
}
