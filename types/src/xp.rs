//! The decorative experience meter.
//!
//! Purely presentational derived state: progress grows with submit and
//! completion events, clamps at full, and wraps into a level-up. Progress
//! is tracked in integer hundredths so repeated submits accumulate exactly
//! (ten submits is precisely one level, with no float drift).

/// Progress gained per submitted item.
pub const XP_PER_SUBMIT: u32 = 10;
/// Progress gained per completed item.
pub const XP_PER_COMPLETION: u32 = 25;

const FULL: u32 = 100;

/// Outcome of recording an XP event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XpGain {
    Gained,
    /// Progress reached full, wrapped to zero, and the level incremented.
    LeveledUp { new_level: u32 },
}

#[derive(Debug, Clone, Copy)]
pub struct XpMeter {
    level: u32,
    /// Hundredths of a bar, always in `0..FULL`.
    progress: u32,
}

impl Default for XpMeter {
    fn default() -> Self {
        Self {
            level: 1,
            progress: 0,
        }
    }
}

impl XpMeter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Bar fill in `0.0..1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress as f32 / FULL as f32
    }

    pub fn note_submit(&mut self) -> XpGain {
        self.gain(XP_PER_SUBMIT)
    }

    pub fn note_completion(&mut self) -> XpGain {
        self.gain(XP_PER_COMPLETION)
    }

    fn gain(&mut self, amount: u32) -> XpGain {
        // Clamp before wrapping: overshoot past a full bar is discarded,
        // matching the meter's display behavior.
        let next = (self.progress + amount).min(FULL);
        if next >= FULL {
            self.level += 1;
            self.progress = 0;
            XpGain::LeveledUp {
                new_level: self.level,
            }
        } else {
            self.progress = next;
            XpGain::Gained
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{XpGain, XpMeter};

    #[test]
    fn starts_at_level_one_empty() {
        let xp = XpMeter::new();
        assert_eq!(xp.level(), 1);
        assert_eq!(xp.progress(), 0.0);
    }

    #[test]
    fn ten_submits_level_up_exactly() {
        let mut xp = XpMeter::new();
        for _ in 0..9 {
            assert_eq!(xp.note_submit(), XpGain::Gained);
        }
        assert_eq!(xp.note_submit(), XpGain::LeveledUp { new_level: 2 });
        assert_eq!(xp.progress(), 0.0);
    }

    #[test]
    fn submit_and_completions_accumulate() {
        let mut xp = XpMeter::new();
        xp.note_submit();
        xp.note_completion();
        xp.note_completion();
        xp.note_completion();
        assert_eq!(xp.level(), 1);
        assert!((xp.progress() - 0.85).abs() < f32::EPSILON);
    }

    #[test]
    fn overshoot_is_discarded_on_wrap() {
        let mut xp = XpMeter::new();
        for _ in 0..9 {
            xp.note_submit();
        }
        // 0.90 + 0.25 clamps at full, wraps to zero.
        assert_eq!(xp.note_completion(), XpGain::LeveledUp { new_level: 2 });
        assert_eq!(xp.progress(), 0.0);
    }
}
