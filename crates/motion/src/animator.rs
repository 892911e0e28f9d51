// =============================================================================
// Folio Motion - Smooth Scroll Trajectory
// =============================================================================
// Pure trajectory math for programmatic scrolling. The navigation controller
// owns the frame loop and state; this module only answers "where should the
// scroll offset be at time t".
// =============================================================================

use crate::config::ScrollAnimationConfig;

/// Quartic ease-out, `1 - (1 - t)^4`.
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// `clamp(|distance| * ms_per_px, min, max)` in milliseconds.
pub fn transition_duration(distance: f64, config: &ScrollAnimationConfig) -> f64 {
    (distance.abs() * config.ms_per_px).clamp(config.min_duration_ms, config.max_duration_ms)
}

/// One in-flight programmatic scroll.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTransition {
    pub target_index: usize,
    pub start_offset: f64,
    /// Signed, `target - start`.
    pub distance: f64,
    pub duration_ms: f64,
    pub started_at_ms: f64,
}

impl ScrollTransition {
    pub fn new(
        target_index: usize,
        start_offset: f64,
        target_offset: f64,
        started_at_ms: f64,
        config: &ScrollAnimationConfig,
    ) -> Self {
        let distance = target_offset - start_offset;
        Self {
            target_index,
            start_offset,
            distance,
            duration_ms: transition_duration(distance, config),
            started_at_ms,
        }
    }

    /// Normalised elapsed time in `[0, 1]`. A zero-length transition is
    /// complete immediately.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Scroll offset for a given moment.
    pub fn offset_at(&self, now_ms: f64) -> f64 {
        self.start_offset + self.distance * ease_out_quart(self.progress(now_ms))
    }

    pub fn target_offset(&self) -> f64 {
        self.start_offset + self.distance
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}
