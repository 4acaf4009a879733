use std::error::Error;
use std::fmt;
use std::io::{self, BufReader, BufWriter};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::Duration;

use cozy_chess::Board;
use evaluation::{Perspective, RawEvaluation, ScoreKind};
use uci::commands::Score;
use uci::{EngineId, UciCommand, UciConnection, UciError};

use crate::config::EngineConfig;
use crate::def::{EngineReport, Evaluator, SearchBudget};

#[derive(Debug)]
pub enum EngineError {
    Spawn { path: String, source: io::Error },
    Protocol(UciError),
    /// A search asked for an Elo the engine was not started with.
    StrengthMismatch { configured: Option<u32>, requested: u32 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Spawn { path, source } => {
                write!(f, "failed to start engine {}: {}", path, source)
            }
            EngineError::Protocol(e) => write!(f, "{}", e),
            EngineError::StrengthMismatch {
                configured,
                requested,
            } => match configured {
                Some(elo) => write!(f, "engine plays at Elo {}, not {}", elo, requested),
                None => write!(f, "engine was started at full strength, not Elo {}", requested),
            },
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EngineError::Spawn { source, .. } => Some(source),
            EngineError::Protocol(e) => Some(e),
            EngineError::StrengthMismatch { .. } => None,
        }
    }
}

impl From<UciError> for EngineError {
    fn from(e: UciError) -> Self {
        EngineError::Protocol(e)
    }
}

/// A UCI engine running as a child process.
pub struct EngineProcess {
    child: Child,
    uci: UciConnection<BufReader<ChildStdout>, BufWriter<ChildStdin>>,
    id: EngineId,
    elo: Option<u32>,
}

impl EngineProcess {
    /// Starts the engine, applies `config` and waits until it is ready.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let path = config.path.display().to_string();
        let spawn_error = |source| EngineError::Spawn {
            path: path.clone(),
            source,
        };

        let mut child = Command::new(&config.path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| spawn_error(io::Error::other("stdin not captured")))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| spawn_error(io::Error::other("stdout not captured")))?;

        let mut uci = UciConnection::new(BufReader::new(stdout), BufWriter::new(stdin));
        let id = uci.handshake()?;
        log::info!(
            "Engine: {} ({} options)",
            id.name.as_deref().unwrap_or(&path),
            id.options.len()
        );

        let mut engine = Self {
            child,
            uci,
            id,
            elo: None,
        };
        engine.configure(config)?;
        engine.uci.sync()?;

        Ok(engine)
    }

    fn configure(&mut self, config: &EngineConfig) -> Result<(), EngineError> {
        if let Some(hash) = config.hash_mb {
            self.uci.set_option(&self.id, "Hash", &hash.to_string())?;
        }
        if let Some(threads) = config.threads {
            self.uci.set_option(&self.id, "Threads", &threads.to_string())?;
        }
        if let SearchBudget::Elo(elo) = config.budget {
            // Elo is ignored unless strength limiting is switched on
            self.uci.set_option(&self.id, "UCI_LimitStrength", "true")?;
            self.uci.set_option(&self.id, "UCI_Elo", &elo.to_string())?;
            self.elo = Some(elo);
        }
        Ok(())
    }

    /// Clears engine state (hash tables, history) before a new game.
    pub fn new_game(&mut self) -> Result<(), EngineError> {
        self.uci.send(&UciCommand::UciNewGame)?;
        self.uci.sync()?;
        Ok(())
    }

    fn search(&mut self, board: &Board, budget: &SearchBudget) -> Result<EngineReport, EngineError> {
        if let SearchBudget::Elo(requested) = *budget {
            if self.elo != Some(requested) {
                return Err(EngineError::StrengthMismatch {
                    configured: self.elo,
                    requested,
                });
            }
        }

        let output = self.uci.search(&board.to_string(), budget.go_params())?;

        let perspective = Perspective::SideToMove(board.side_to_move());
        let info = output.info.unwrap_or_default();
        log::debug!(
            "Search: depth {:?}/{:?}, {:?} nodes, {:?} nps, {:?} ms",
            info.depth,
            info.sel_depth,
            info.nodes,
            info.nodes_per_second,
            info.time
        );
        let score = match info.score {
            Some(Score::Centipawns(cp)) => RawEvaluation::centipawns(perspective, cp),
            Some(Score::Mate(moves)) => RawEvaluation::mate(perspective, moves),
            None => RawEvaluation::missing(perspective, ScoreKind::Centipawns),
        };

        // Some engines stop printing the pv at low depths; fall back to bestmove
        let pv = if info.pv.is_empty() {
            output.best_move.into_iter().collect()
        } else {
            info.pv
        };

        Ok(EngineReport {
            score,
            pv,
            depth: info.depth.unwrap_or(0),
        })
    }
}

impl Evaluator for EngineProcess {
    fn name(&self) -> String {
        self.id.name.clone().unwrap_or_else(|| "engine".to_string())
    }

    fn evaluate(
        &mut self,
        position: &Board,
        budget: &SearchBudget,
    ) -> Result<EngineReport, Box<dyn Error>> {
        Ok(self.search(position, budget)?)
    }
}

impl Drop for EngineProcess {
    fn drop(&mut self) {
        // Send quit command to gracefully shutdown the engine
        if self.uci.send(&UciCommand::Quit).is_err() {
            // If we can't send quit, force kill the process
            let _ = self.child.kill();
            return;
        }

        // Give the engine a moment to quit gracefully
        std::thread::sleep(Duration::from_millis(100));

        match self.child.try_wait() {
            Ok(Some(_)) => {}
            Ok(None) => {
                // Process is still running, force kill it
                let _ = self.child.kill();
                let _ = self.child.wait();
            }
            Err(_) => {
                let _ = self.child.kill();
            }
        }
    }
}

