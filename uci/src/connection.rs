use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};

use log::debug;

use super::commands::{EngineOutput, GoParams, Info, UciCommand};
use super::decoder::Decoder;
use super::encoder::Encoder;
use super::options::UciOption;

#[derive(Debug)]
pub enum UciError {
    Io(io::Error),
    /// The engine closed its output before answering.
    Disconnected,
    UnknownOption(String),
    InvalidOption { name: String, reason: String },
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::Io(e) => write!(f, "engine I/O failed: {}", e),
            UciError::Disconnected => write!(f, "engine closed the connection"),
            UciError::UnknownOption(name) => write!(f, "engine has no option '{}'", name),
            UciError::InvalidOption { name, reason } => {
                write!(f, "invalid value for option '{}': {}", name, reason)
            }
        }
    }
}

impl Error for UciError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            UciError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for UciError {
    fn from(e: io::Error) -> Self {
        UciError::Io(e)
    }
}

/// What the engine told us during the `uci` handshake.
#[derive(Debug, Clone, Default)]
pub struct EngineId {
    pub name: Option<String>,
    pub author: Option<String>,
    pub options: Vec<UciOption>,
}

impl EngineId {
    pub fn option(&self, name: &str) -> Option<&UciOption> {
        self.options
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(name))
    }
}

/// Result of one `go` command.
#[derive(Debug, Clone, Default)]
pub struct SearchOutput {
    pub best_move: Option<String>,
    pub ponder: Option<String>,
    /// Last main-line `info` that carried a score, preferring exact scores over bounds.
    pub info: Option<Info>,
}

/// The GUI side of a UCI conversation over any line-based reader and writer.
pub struct UciConnection<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    encoder: Encoder,
    decoder: Decoder,
}

impl<R: BufRead, W: Write> UciConnection<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            encoder: Encoder {},
            decoder: Decoder::new(),
        }
    }

    pub fn send(&mut self, command: &UciCommand) -> Result<(), UciError> {
        let out_line = self.encoder.encode(command);
        debug!("Output: {:?}", out_line);

        self.writer.write_all(out_line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn recv(&mut self) -> Result<EngineOutput, UciError> {
        let mut in_line = String::new();
        if self.reader.read_line(&mut in_line)? == 0 {
            return Err(UciError::Disconnected);
        }

        let in_line = in_line.trim();
        debug!("Input: {:?}", in_line);

        Ok(self.decoder.decode(in_line))
    }

    /// `uci` → collect id and options until `uciok`.
    pub fn handshake(&mut self) -> Result<EngineId, UciError> {
        self.send(&UciCommand::Uci)?;

        let mut id = EngineId::default();
        loop {
            match self.recv()? {
                EngineOutput::IdName(name) => id.name = Some(name),
                EngineOutput::IdAuthor(author) => id.author = Some(author),
                EngineOutput::Option(option) => id.options.push(option),
                EngineOutput::UciOk => return Ok(id),
                _ => {}
            }
        }
    }

    /// `isready` → wait for `readyok`.
    pub fn sync(&mut self) -> Result<(), UciError> {
        self.send(&UciCommand::IsReady)?;
        loop {
            if let EngineOutput::ReadyOk = self.recv()? {
                return Ok(());
            }
        }
    }

    /// Validates `value` against the advertised option, then sends `setoption`.
    pub fn set_option(&mut self, id: &EngineId, name: &str, value: &str) -> Result<(), UciError> {
        let option = id
            .option(name)
            .ok_or_else(|| UciError::UnknownOption(name.to_string()))?;

        option
            .option_type
            .validate(value)
            .map_err(|reason| UciError::InvalidOption {
                name: option.name.clone(),
                reason,
            })?;

        self.send(&UciCommand::SetOption {
            name: option.name.clone(),
            value: Some(value.to_string()),
        })
    }

    /// Sends `position` and `go`, then reads until `bestmove`.
    pub fn search(&mut self, fen: &str, params: GoParams) -> Result<SearchOutput, UciError> {
        self.send(&UciCommand::Position {
            fen: fen.to_string(),
            moves: Vec::new(),
        })?;
        self.send(&UciCommand::Go(params))?;

        let mut exact: Option<Info> = None;
        let mut bounded: Option<Info> = None;

        loop {
            match self.recv()? {
                EngineOutput::Info(info) if info.score.is_some() && info.is_main_line() => {
                    if info.bound.is_none() {
                        exact = Some(info);
                    } else {
                        bounded = Some(info);
                    }
                }
                EngineOutput::BestMove { best_move, ponder } => {
                    return Ok(SearchOutput {
                        best_move,
                        ponder,
                        info: exact.or(bounded),
                    });
                }
                _ => {}
            }
        }
    }
}
