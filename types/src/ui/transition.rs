//! One-shot item transitions as explicit step sequences.
//!
//! A transition is a finite list of timed sub-steps; step N+1 starts only
//! once step N's timer completes. This replaces nested animation callback
//! chains with plain data a single per-frame advance can drive. Each item
//! owns at most one transition at a time, kept in a side table keyed by
//! item id - never on the item itself.

use std::time::Duration;

use super::animation::EffectTimer;

/// A single timed sub-step of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Entry: row slides in from the right edge.
    SlideInRight,
    /// Entry: small overshoot settle after the slide.
    Bounce,
    /// Exit/reject: horizontal oscillation with decay.
    Shake,
    /// Exit: brightness flash.
    Flash,
    /// Exit: fade toward the background, ending invisible.
    FadeOut,
}

impl StepKind {
    #[must_use]
    pub fn duration(self) -> Duration {
        match self {
            Self::SlideInRight => Duration::from_millis(300),
            Self::Bounce => Duration::from_millis(150),
            Self::Shake => Duration::from_millis(200),
            Self::Flash => Duration::from_millis(300),
            Self::FadeOut => Duration::from_millis(800),
        }
    }
}

/// Which semantic event the sequence decorates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Triggered by submit; purely decorative.
    Appear,
    /// Triggered by terminal completion; the owner removes the item when
    /// this sequence finishes.
    Complete,
    /// Triggered by a rejected empty submission (applied to the input box).
    Reject,
}

const APPEAR_STEPS: &[StepKind] = &[StepKind::SlideInRight, StepKind::Bounce];
const COMPLETE_STEPS: &[StepKind] = &[StepKind::Shake, StepKind::Flash, StepKind::FadeOut];
const REJECT_STEPS: &[StepKind] = &[StepKind::Shake];

/// An in-flight step sequence.
///
/// Runs to completion once started; there is no cancellation.
#[derive(Debug, Clone)]
pub struct Transition {
    kind: TransitionKind,
    steps: &'static [StepKind],
    current: usize,
    timer: EffectTimer,
}

impl Transition {
    #[must_use]
    pub fn appear() -> Self {
        Self::with_steps(TransitionKind::Appear, APPEAR_STEPS)
    }

    #[must_use]
    pub fn complete() -> Self {
        Self::with_steps(TransitionKind::Complete, COMPLETE_STEPS)
    }

    #[must_use]
    pub fn reject() -> Self {
        Self::with_steps(TransitionKind::Reject, REJECT_STEPS)
    }

    fn with_steps(kind: TransitionKind, steps: &'static [StepKind]) -> Self {
        debug_assert!(!steps.is_empty());
        Self {
            kind,
            steps,
            current: 0,
            timer: EffectTimer::new(steps[0].duration()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Total wall-clock duration of the whole sequence.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|step| step.duration()).sum()
    }

    /// Advance by a frame delta, promoting to the next step as timers
    /// complete. Leftover delta carries into the successor step.
    pub fn advance(&mut self, delta: Duration) {
        let mut remaining = delta;
        loop {
            let before = self.timer.progress();
            self.timer.advance(remaining);
            if !self.timer.is_finished() {
                return;
            }

            let step_total = self.steps[self.current].duration();
            let consumed = step_total.mul_f32(1.0 - before);
            remaining = remaining.saturating_sub(consumed);

            if self.current + 1 >= self.steps.len() {
                // Finished; stay parked on the last step at full progress.
                return;
            }
            self.current += 1;
            self.timer = EffectTimer::new(self.steps[self.current].duration());
            if remaining.is_zero() {
                return;
            }
        }
    }

    /// The currently active step and its progress, or `None` once finished.
    #[must_use]
    pub fn active(&self) -> Option<(StepKind, f32)> {
        if self.is_finished() {
            None
        } else {
            Some((self.steps[self.current], self.timer.progress()))
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current + 1 == self.steps.len() && self.timer.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::{StepKind, Transition, TransitionKind};
    use std::time::Duration;

    #[test]
    fn appear_sequence_totals_450ms() {
        assert_eq!(
            Transition::appear().total_duration(),
            Duration::from_millis(450)
        );
    }

    #[test]
    fn complete_sequence_totals_1300ms() {
        assert_eq!(
            Transition::complete().total_duration(),
            Duration::from_millis(1300)
        );
    }

    #[test]
    fn steps_run_strictly_in_order() {
        let mut transition = Transition::complete();
        assert!(matches!(transition.active(), Some((StepKind::Shake, _))));

        transition.advance(Duration::from_millis(200));
        assert!(matches!(transition.active(), Some((StepKind::Flash, _))));

        transition.advance(Duration::from_millis(300));
        assert!(matches!(transition.active(), Some((StepKind::FadeOut, _))));

        transition.advance(Duration::from_millis(800));
        assert!(transition.is_finished());
        assert!(transition.active().is_none());
    }

    #[test]
    fn leftover_delta_carries_into_next_step() {
        let mut transition = Transition::appear();
        // 350ms lands 50ms into the 150ms bounce step.
        transition.advance(Duration::from_millis(350));
        let Some((StepKind::Bounce, progress)) = transition.active() else {
            panic!("expected bounce step");
        };
        assert!((progress - 1.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn one_large_delta_finishes_the_sequence() {
        let mut transition = Transition::complete();
        transition.advance(Duration::from_secs(5));
        assert!(transition.is_finished());
    }

    #[test]
    fn finished_transition_stays_finished() {
        let mut transition = Transition::reject();
        transition.advance(Duration::from_millis(200));
        assert!(transition.is_finished());
        transition.advance(Duration::from_millis(200));
        assert!(transition.is_finished());
        assert_eq!(transition.kind(), TransitionKind::Reject);
    }
}
