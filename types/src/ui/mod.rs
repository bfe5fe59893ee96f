//! UI state types for the TUI layer.
//!
//! Pure data with no IO and no ratatui dependency. The app layer owns these
//! and advances them by elapsed wall-clock time; the render layer only maps
//! their progress to terminal offsets and colors.

mod animation;
mod input;
mod options;
mod transition;

pub use animation::{AnimPhase, EffectTimer, MeterAnim};
pub use input::{DraftInput, InputMode};
pub use options::UiOptions;
pub use transition::{StepKind, Transition, TransitionKind};
