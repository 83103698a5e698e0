//! Terminal UI for DevOps Center.
//!
//! A single-screen dashboard with four sections (overview, CI/CD, monitoring
//! and a deploy guide) rendered from compiled-in sample data, built on
//! ratatui and crossterm.

mod app;
mod clipboard;
mod error;
mod keybindings;
mod snapshot;
mod state;
mod terminal;
mod theme;
mod widgets;

pub mod catalog;
pub mod templates;
pub mod views;

pub use app::{App, DEFAULT_TICK_RATE, TuiConfig};
pub use clipboard::copy_to_clipboard;
pub use error::{Error, Result};
pub use keybindings::{Action, KeyBindings};
pub use snapshot::render_snapshot;
pub use state::{AppState, Mode, StackTab};
pub use templates::{Template, UnknownTemplate, export, guide_markdown};
pub use terminal::{DevopsTerminal, install_panic_hook, restore_terminal, setup_terminal};
pub use theme::{Theme, devops_default};
pub use views::{Section, SectionSelector, UnknownSection, ViewRenderer};
