use super::commands::{GoParams, UciCommand};

pub struct Encoder {}

impl Encoder {
    pub fn encode(&self, command: &UciCommand) -> String {
        match command {
            UciCommand::Uci => "uci".to_string(),
            UciCommand::IsReady => "isready".to_string(),
            UciCommand::UciNewGame => "ucinewgame".to_string(),

            UciCommand::SetOption { name, value } => match value {
                Some(value) => format!("setoption name {} value {}", name, value),
                None => format!("setoption name {}", name),
            },
            UciCommand::Position { fen, moves } => {
                if moves.is_empty() {
                    format!("position fen {}", fen)
                } else {
                    format!("position fen {} moves {}", fen, moves.join(" "))
                }
            }
            UciCommand::Go(params) => encode_go(params),
            UciCommand::Quit => "quit".to_string(),
        }
    }
}

fn encode_go(params: &GoParams) -> String {
    let mut out = String::from("go");
    if let Some(depth) = params.depth {
        out.push_str(&format!(" depth {}", depth));
    }
    if let Some(move_time) = params.move_time {
        out.push_str(&format!(" movetime {}", move_time));
    }
    out
}
