pub mod config;
pub mod export;
pub mod render;
pub mod tui;
