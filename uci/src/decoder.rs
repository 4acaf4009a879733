use evaluation::ScoreKind;
use log::debug;

use super::commands::{Bound, EngineOutput, Info, Score};
use super::options::UciOption;

pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, input: &str) -> EngineOutput {
        let input = input.trim();
        match input {
            "uciok" => EngineOutput::UciOk,
            "readyok" => EngineOutput::ReadyOk,

            _ if input.starts_with("id name ") => {
                EngineOutput::IdName(input["id name ".len()..].trim().to_string())
            }
            _ if input.starts_with("id author ") => {
                EngineOutput::IdAuthor(input["id author ".len()..].trim().to_string())
            }
            _ if input.starts_with("bestmove") => self.decode_bestmove(input),
            _ if input.starts_with("info string") => {
                EngineOutput::InfoString(input["info string".len()..].trim().to_string())
            }
            _ if input.starts_with("info") => EngineOutput::Info(self.decode_info(input)),
            _ if input.starts_with("option ") => match UciOption::parse(&input["option ".len()..]) {
                Some(option) => EngineOutput::Option(option),
                None => EngineOutput::Unknown(input.to_string()),
            },

            _ => EngineOutput::Unknown(input.to_string()),
        }
    }

    fn decode_bestmove(&self, input: &str) -> EngineOutput {
        let mut tokens = input.split_whitespace().skip(1);

        // Engines answer "(none)" or "0000" when the position has no legal moves
        let best_move = tokens
            .next()
            .filter(|mv| *mv != "(none)" && *mv != "0000")
            .map(str::to_string);

        let ponder = match tokens.next() {
            Some("ponder") => tokens.next().map(str::to_string),
            _ => None,
        };

        EngineOutput::BestMove { best_move, ponder }
    }

    fn decode_info(&self, input: &str) -> Info {
        let mut info = Info::default();
        let mut tokens = input.split_whitespace().skip(1).peekable();

        while let Some(token) = tokens.next() {
            match token {
                "depth" => info.depth = tokens.next().and_then(|t| t.parse().ok()),
                "seldepth" => info.sel_depth = tokens.next().and_then(|t| t.parse().ok()),
                "multipv" => info.multi_pv = tokens.next().and_then(|t| t.parse().ok()),
                "nodes" => info.nodes = tokens.next().and_then(|t| t.parse().ok()),
                "nps" => info.nodes_per_second = tokens.next().and_then(|t| t.parse().ok()),
                "time" => info.time = tokens.next().and_then(|t| t.parse().ok()),
                "score" => {
                    let kind = tokens.next().unwrap_or_default();
                    let value = tokens.next().and_then(|t| t.parse::<i32>().ok());

                    info.score = match (kind.parse::<ScoreKind>(), value) {
                        (Ok(ScoreKind::Centipawns), Some(cp)) => Some(Score::Centipawns(cp)),
                        (Ok(ScoreKind::Mate), Some(moves)) => Some(Score::Mate(moves)),
                        (Ok(_), None) => {
                            debug!("Score without value: {:?}", input);
                            None
                        }
                        (Err(e), _) => {
                            debug!("Ignoring score in {:?}: {}", input, e);
                            None
                        }
                    };

                    info.bound = match tokens.peek() {
                        Some(&"lowerbound") => Some(Bound::Lower),
                        Some(&"upperbound") => Some(Bound::Upper),
                        _ => None,
                    };
                    if info.bound.is_some() {
                        tokens.next();
                    }
                }
                // pv runs to the end of the line
                "pv" => {
                    info.pv = tokens.by_ref().map(str::to_string).collect();
                }
                _ => {}
            }
        }

        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_outputs() {
        assert!(matches!(Decoder.decode("uciok"), EngineOutput::UciOk));
        assert!(matches!(Decoder.decode("readyok"), EngineOutput::ReadyOk));
        assert!(matches!(
            Decoder.decode("readyok\r\n"),
            EngineOutput::ReadyOk
        ));
    }

    #[test]
    fn test_id() {
        assert_eq!(
            Decoder.decode("id name Stockfish 16.1"),
            EngineOutput::IdName("Stockfish 16.1".to_string())
        );
        assert_eq!(
            Decoder.decode("id author the Stockfish developers"),
            EngineOutput::IdAuthor("the Stockfish developers".to_string())
        );
    }

    #[test]
    fn test_bestmove() {
        assert_eq!(
            Decoder.decode("bestmove e2e4 ponder e7e5"),
            EngineOutput::BestMove {
                best_move: Some("e2e4".to_string()),
                ponder: Some("e7e5".to_string()),
            }
        );
        assert_eq!(
            Decoder.decode("bestmove g1f3"),
            EngineOutput::BestMove {
                best_move: Some("g1f3".to_string()),
                ponder: None,
            }
        );
    }

    #[test]
    fn test_bestmove_none() {
        assert_eq!(
            Decoder.decode("bestmove (none)"),
            EngineOutput::BestMove {
                best_move: None,
                ponder: None,
            }
        );
    }

    #[test]
    fn test_info_centipawns() {
        let EngineOutput::Info(info) = Decoder.decode(
            "info depth 20 seldepth 27 multipv 1 score cp 31 nodes 812345 nps 1203456 hashfull 312 tbhits 0 time 675 pv e2e4 e7e5 g1f3",
        ) else {
            panic!("Expected Info")
        };
        assert_eq!(info.depth, Some(20));
        assert_eq!(info.sel_depth, Some(27));
        assert_eq!(info.multi_pv, Some(1));
        assert_eq!(info.score, Some(Score::Centipawns(31)));
        assert_eq!(info.bound, None);
        assert_eq!(info.nodes, Some(812345));
        assert_eq!(info.time, Some(675));
        assert_eq!(info.pv, vec!["e2e4", "e7e5", "g1f3"]);
        assert!(info.is_main_line());
    }

    #[test]
    fn test_info_mate() {
        let EngineOutput::Info(info) =
            Decoder.decode("info depth 12 score mate -3 nodes 1000 pv h7h8 g8h8")
        else {
            panic!("Expected Info")
        };
        assert_eq!(info.score, Some(Score::Mate(-3)));
    }

    #[test]
    fn test_info_mated_position() {
        let EngineOutput::Info(info) = Decoder.decode("info depth 0 score mate 0") else {
            panic!("Expected Info")
        };
        assert_eq!(info.score, Some(Score::Mate(0)));
        assert!(info.pv.is_empty());
    }

    #[test]
    fn test_info_bound() {
        let EngineOutput::Info(info) =
            Decoder.decode("info depth 18 score cp 45 lowerbound nodes 10 pv d2d4")
        else {
            panic!("Expected Info")
        };
        assert_eq!(info.score, Some(Score::Centipawns(45)));
        assert_eq!(info.bound, Some(Bound::Lower));
        assert_eq!(info.nodes, Some(10));
    }

    #[test]
    fn test_info_unknown_score_kind() {
        let EngineOutput::Info(info) = Decoder.decode("info depth 5 score wdl 500 300 200") else {
            panic!("Expected Info")
        };
        assert_eq!(info.score, None);
    }

    #[test]
    fn test_info_secondary_line() {
        let EngineOutput::Info(info) =
            Decoder.decode("info depth 10 multipv 2 score cp -12 pv d2d4")
        else {
            panic!("Expected Info")
        };
        assert!(!info.is_main_line());
    }

    #[test]
    fn test_info_string() {
        assert_eq!(
            Decoder.decode("info string NNUE evaluation using nn-1111.nnue"),
            EngineOutput::InfoString("NNUE evaluation using nn-1111.nnue".to_string())
        );
    }

    #[test]
    fn test_option() {
        let EngineOutput::Option(option) =
            Decoder.decode("option name Hash type spin default 16 min 1 max 33554432")
        else {
            panic!("Expected Option")
        };
        assert_eq!(option.name, "Hash");
    }

    #[test]
    fn test_unknown_output() {
        assert!(matches!(
            Decoder.decode("Stockfish 16.1 by the Stockfish developers"),
            EngineOutput::Unknown(_)
        ));
    }
}
