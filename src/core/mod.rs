pub mod config;
pub mod error;
pub mod snapshot;
pub mod types;

pub use config::BotConfig;
pub use error::{BotError, Result};
pub use snapshot::{Pac, Pellet, RoundSnapshot};
pub use types::{Coord, PacId, PacType, Round};
