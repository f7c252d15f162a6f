use std::time::{Duration, Instant};

/// Fixed-interval tick pacing, decoupled from the render frame rate.
///
/// The reference time advances by exactly one interval per committed
/// tick, never to "now", so leftover elapsed time carries into the next
/// frame and the logical rate does not drift with frame timing. A
/// blocked tick leaves the reference alone, which keeps the tick due
/// and lets the collision be re-judged every frame while the mercy
/// window runs.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    reference: Instant,
}

impl TickScheduler {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            reference: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether at least one full interval has elapsed since the reference.
    pub fn due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.reference) >= self.interval
    }

    /// Consume one interval after a committed tick.
    pub fn complete_tick(&mut self) {
        self.reference += self.interval;
    }

    /// Re-base the reference, discarding accumulated time. Used when play
    /// starts or resumes after a countdown.
    pub fn reset(&mut self, now: Instant) {
        self.reference = now;
    }

    /// Fractional progress through the current interval, clamped to [0, 1].
    pub fn alpha(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.reference);
        (elapsed.as_secs_f64() / self.interval.as_secs_f64()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn test_not_due_before_interval() {
        let t0 = Instant::now();
        let scheduler = TickScheduler::new(INTERVAL, t0);

        assert!(!scheduler.due(t0));
        assert!(!scheduler.due(t0 + Duration::from_millis(99)));
        assert!(scheduler.due(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn test_remainder_carries() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(INTERVAL, t0);

        // 130ms elapsed: one tick fires, 30ms remainder carries.
        let now = t0 + Duration::from_millis(130);
        assert!(scheduler.due(now));
        scheduler.complete_tick();
        assert!(!scheduler.due(now));

        // 70ms more completes the next interval off the remainder.
        assert!(scheduler.due(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_no_drift_over_many_ticks() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(INTERVAL, t0);
        let mut ticks = 0u32;

        // Frames every 16ms for 10s; at most one tick per frame.
        let mut now = t0;
        for _ in 0..625 {
            now += Duration::from_millis(16);
            if scheduler.due(now) {
                scheduler.complete_tick();
                ticks += 1;
            }
        }

        // 10s / 100ms = 100 ticks, within one interval's tolerance.
        let expected = ((now - t0).as_millis() / INTERVAL.as_millis()) as u32;
        assert!(ticks.abs_diff(expected) <= 1, "ticks = {ticks}");
    }

    #[test]
    fn test_alpha_bounds() {
        let t0 = Instant::now();
        let scheduler = TickScheduler::new(INTERVAL, t0);

        assert_eq!(scheduler.alpha(t0), 0.0);
        assert!((scheduler.alpha(t0 + Duration::from_millis(50)) - 0.5).abs() < 1e-9);
        assert_eq!(scheduler.alpha(t0 + Duration::from_millis(100)), 1.0);
        // Clamped when the tick is overdue.
        assert_eq!(scheduler.alpha(t0 + Duration::from_millis(250)), 1.0);
    }

    #[test]
    fn test_reset_discards_accumulated_time() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(INTERVAL, t0);

        let later = t0 + Duration::from_millis(500);
        assert!(scheduler.due(later));
        scheduler.reset(later);
        assert!(!scheduler.due(later));
        assert_eq!(scheduler.alpha(later), 0.0);
    }
}
