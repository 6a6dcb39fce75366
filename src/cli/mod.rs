pub mod analyze;
pub mod commands;
pub mod serve;
pub mod shops;

pub use commands::{Cli, Commands};
