//! Round orchestration and the per-match session

pub mod round;
pub mod session;

pub use round::run_round;
pub use session::Bot;
