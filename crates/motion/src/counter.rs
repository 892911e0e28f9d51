// =============================================================================
// Folio Motion - Count-up Counter
// =============================================================================

/// Fixed-step counter that climbs from zero to a target.
///
/// Driven by an interval of `step_ms`; after `duration_ms / step_ms` ticks the
/// displayed value lands exactly on the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    increment: f64,
    accumulated: f64,
    display: u32,
    finished: bool,
}

impl CountUp {
    pub const DURATION_MS: u32 = 2000;
    pub const STEP_MS: u32 = 50;

    pub fn new(target: u32) -> Self {
        Self::with_timing(target, Self::DURATION_MS, Self::STEP_MS)
    }

    pub fn with_timing(target: u32, duration_ms: u32, step_ms: u32) -> Self {
        let steps = (duration_ms / step_ms.max(1)).max(1);
        Self {
            target,
            increment: f64::from(target) / f64::from(steps),
            accumulated: 0.0,
            display: 0,
            finished: target == 0,
        }
    }

    pub fn display(&self) -> u32 {
        self.display
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one step and return the value to show.
    pub fn tick(&mut self) -> u32 {
        if self.finished {
            return self.display;
        }
        self.accumulated += self.increment;
        if self.accumulated >= f64::from(self.target) {
            self.display = self.target;
            self.finished = true;
        } else {
            self.display = self.accumulated.round() as u32;
        }
        self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaches_target_in_forty_steps() {
        let mut counter = CountUp::new(40);
        let mut ticks = 0;
        while !counter.is_finished() {
            counter.tick();
            ticks += 1;
            assert!(ticks <= 41, "counter never finished");
        }
        assert!((40..=41).contains(&ticks));
        assert_eq!(counter.display(), 40);
    }

    #[test]
    fn test_small_target_rounds() {
        let mut counter = CountUp::new(6);
        // 6 / 40 = 0.15 per step
        assert_eq!(counter.tick(), 0);
        assert_eq!(counter.tick(), 0);
        assert_eq!(counter.tick(), 0);
        assert_eq!(counter.tick(), 1);
    }

    #[test]
    fn test_display_is_monotonic() {
        let mut counter = CountUp::new(15);
        let mut last = 0;
        for _ in 0..50 {
            let value = counter.tick();
            assert!(value >= last);
            assert!(value <= 15);
            last = value;
        }
        assert_eq!(last, 15);
    }

    #[test]
    fn test_zero_target_is_finished() {
        let mut counter = CountUp::new(0);
        assert!(counter.is_finished());
        assert_eq!(counter.tick(), 0);
    }
}
