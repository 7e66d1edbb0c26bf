//! Terminal raffle wheel.
//!
//! Options are read from a file, arranged in a circular ring, and spun
//! through frame by frame until the wheel stops on a random entry.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod logger;
pub mod options;
pub mod render;
pub mod ring;
pub mod spin;
pub mod terminal;
