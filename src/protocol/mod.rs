//! Text protocol spoken with the game referee over stdin/stdout

pub mod reader;
pub mod writer;

pub use reader::InputReader;
pub use writer::{render_batch, write_batch};
