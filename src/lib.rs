pub mod board;
pub mod config;
pub mod logging;
pub mod tui;
