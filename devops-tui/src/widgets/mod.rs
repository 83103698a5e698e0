//! Widgets for the DevOps Center TUI.
//!
//! Reusable pieces shared by the section views: navigation chrome,
//! overlays, cards, badges and code blocks.

mod accordion;
mod badge;
mod card;
mod code_block;
mod glyph;
mod help;
mod nav_bar;
mod section_menu;
mod status_bar;
mod tab_strip;

pub use accordion::Accordion;
pub use badge::{BadgeVariant, badge};
pub use card::{CARD_CHROME, FeatureTile, card, tile_block};
pub use code_block::CodeBlock;
pub use glyph::{dot, run_glyph, step_glyph};
pub use help::render_help;
pub use nav_bar::{COMPACT_WIDTH, NAV_HEIGHT, NavBar};
pub use section_menu::SectionMenu;
pub use status_bar::{STATUS_HEIGHT, StatusBar};
pub use tab_strip::TabStrip;
