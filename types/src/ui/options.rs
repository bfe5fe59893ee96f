/// UI rendering options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Substitute ASCII glyphs for all Unicode chrome.
    pub ascii_only: bool,
    /// Freeze looping chrome and render one-shot transitions at their
    /// final state.
    pub reduced_motion: bool,
}
