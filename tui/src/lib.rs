//! TUI layer for questlog using ratatui.

mod app;
mod effects;
mod input;
mod theme;
mod ui;

pub use app::{App, Decor};
pub use input::handle_events;
pub use theme::{Glyphs, Palette, Theme};
pub use ui::draw;
