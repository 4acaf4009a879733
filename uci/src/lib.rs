mod connection;
mod decoder;
mod encoder;
mod options;
mod position;
mod utils;

pub mod commands;

pub use commands::{EngineOutput, UciCommand};
pub use connection::{EngineId, SearchOutput, UciConnection, UciError};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use options::{UciOption, UciOptionType};
pub use position::{parse_position, PositionError};
pub use utils::{move_to_uci, uci_to_move};
