mod board;
mod common;
mod config;
mod engine;
mod logging;
pub mod server;
mod shape;

pub use board::*;
pub use common::*;
pub use config::*;
pub use engine::*;
pub use logging::init_logging;
pub use shape::*;
