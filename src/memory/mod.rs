//! Memory of pellet values the bot can no longer see

pub mod pellets;

pub use pellets::PelletMemory;
