//! Core domain types for questlog.
//!
//! Everything here is plain data: no IO, no async, no ratatui. The list
//! controller, the XP meter, and the animation timers are all testable
//! without a terminal.

mod ids;
mod label;
mod list;
pub mod ui;
mod variant;
mod xp;

pub use ids::ItemId;
pub use label::{EmptyLabelError, Label};
pub use list::{CompletionPolicy, Item, SubmitOutcome, TodoList, ToggleOutcome};
pub use variant::Variant;
pub use xp::{XpGain, XpMeter, XP_PER_COMPLETION, XP_PER_SUBMIT};
