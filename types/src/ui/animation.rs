use std::time::Duration;

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Where a one-shot effect is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f32 },
    Completed,
}

/// A fixed-duration timer advanced by frame deltas.
///
/// Zero-duration timers are immediately completed.
#[derive(Debug, Clone)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }
}

/// Interpolation from one meter value to another over a fixed duration.
///
/// Used for the XP bar, which eases toward its new fill instead of jumping.
/// Display state only; the meter itself always holds the target value.
#[derive(Debug, Clone)]
pub struct MeterAnim {
    from: f32,
    to: f32,
    timer: EffectTimer,
}

impl MeterAnim {
    #[must_use]
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Current displayed value, eased.
    #[must_use]
    pub fn value(&self) -> f32 {
        let t = self.timer.progress();
        // ease-out cubic
        let inv = 1.0 - t;
        let eased = 1.0 - inv * inv * inv;
        self.from + (self.to - self.from) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimPhase, EffectTimer, MeterAnim};
    use std::time::Duration;

    #[test]
    fn timer_runs_then_completes() {
        let mut timer = EffectTimer::new(Duration::from_millis(200));
        assert!(matches!(timer.phase(), AnimPhase::Running { progress } if progress < 0.1));

        timer.advance(Duration::from_millis(100));
        assert!(matches!(timer.phase(), AnimPhase::Running { progress } if progress > 0.4));

        timer.advance(Duration::from_millis(150));
        assert_eq!(timer.phase(), AnimPhase::Completed);
    }

    #[test]
    fn zero_duration_immediately_completed() {
        let timer = EffectTimer::new(Duration::ZERO);
        assert_eq!(timer.phase(), AnimPhase::Completed);
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn progress_clamped_at_one() {
        let mut timer = EffectTimer::new(Duration::from_millis(10));
        timer.advance(Duration::from_millis(1000));
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn meter_anim_starts_at_from_and_ends_at_to() {
        let mut anim = MeterAnim::new(0.2, 0.7, Duration::from_millis(800));
        assert!((anim.value() - 0.2).abs() < 0.01);

        anim.advance(Duration::from_millis(900));
        assert!(anim.is_finished());
        assert!((anim.value() - 0.7).abs() < 0.001);
    }

    #[test]
    fn meter_anim_moves_monotonically_upward() {
        let mut anim = MeterAnim::new(0.0, 1.0, Duration::from_millis(100));
        let mut last = anim.value();
        for _ in 0..10 {
            anim.advance(Duration::from_millis(10));
            let now = anim.value();
            assert!(now >= last);
            last = now;
        }
    }
}
