mod args;
mod report;

use std::error::Error;
use std::fs::{self, File};

use analysis::{AnalysisConfig, Analyzer, EngineConfig, EngineProcess, Evaluator, Game, Summary};
use args::Args;
use chrono::Local;
use clap::Parser;
use evaluation::Thresholds;
use log::LevelFilter;
use simplelog::{Config, SimpleLogger, WriteLogger};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let game = read_game(&args)?;
    let analysis_config = analysis_config(&args)?;
    let budget = args.budget();
    let loss_cap = analysis_config.mate_mapping.mate_cp();

    let engine_config = EngineConfig {
        path: args.engine.clone(),
        hash_mb: args.hash,
        threads: args.threads,
        budget,
    };

    let mut engine = EngineProcess::new(&engine_config)?;
    engine.new_game()?;
    let engine_name = engine.name();

    let mut analyzer = Analyzer::new(engine, budget, analysis_config);
    let records = analyzer.analyze(&game)?;

    report::print(&records, args.all);
    println!();
    print!("{}", Summary::new(&records, loss_cap).with_engine(engine_name));

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    match &args.log_file {
        Some(path) => {
            let path = if path.is_dir() {
                let timestamp = Local::now().format("%Y%m%d-%H%M%S");
                path.join(format!("analysis.debug.{}.log", timestamp))
            } else {
                path.clone()
            };
            WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(path)?)?;
        }
        None => {
            let level = if args.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            };
            SimpleLogger::init(level, Config::default())?;
        }
    }

    Ok(args)
}

fn read_game(args: &Args) -> Result<Game, Box<dyn Error>> {
    let game = match (&args.game, &args.moves) {
        (Some(path), _) => Game::parse(&fs::read_to_string(path)?)?,
        (None, Some(moves)) => Game::from_moves(moves)?,
        (None, None) => return Err("no game given (use --game or --moves)".into()),
    };
    log::info!("Loaded game: {} plies from {}", game.len(), game.start);
    Ok(game)
}

fn analysis_config(args: &Args) -> Result<AnalysisConfig, Box<dyn Error>> {
    let mut thresholds = Thresholds::new(args.inaccuracy, args.mistake, args.blunder)?;
    if let Some(boundary) = args.forced_mate {
        thresholds = thresholds.with_forced_mate(boundary)?;
    }

    let mate_mapping = args.mate_mapping();
    mate_mapping.validate()?;

    Ok(AnalysisConfig {
        baseline: args.baseline.into(),
        opening_score: args.opening_score,
        thresholds,
        mate_mapping,
        compare_best: !args.no_compare_best,
        show_progress: !args.no_progress,
    })
}
