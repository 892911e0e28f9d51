// =============================================================================
// Folio Motion - Scroll Parallax
// =============================================================================
// Scroll offset is mapped through clamped linear ranges, then smoothed by a
// damped spring so layers lag slightly behind the page.
// =============================================================================

use serde::{Deserialize, Serialize};

/// Clamped linear map from an input interval to an output interval.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollRange {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl ScrollRange {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn map(&self, value: f64) -> f64 {
        interpolate(value, &[self.input.0, self.input.1], &[self.output.0, self.output.1])
    }
}

/// Piecewise-linear map through matching keyframes, clamped at both ends.
///
/// `input` must be ascending and the same length as `output`. A segment of
/// zero width resolves to its left output.
pub fn interpolate(value: f64, input: &[f64], output: &[f64]) -> f64 {
    let len = input.len().min(output.len());
    if len == 0 {
        return 0.0;
    }
    if value <= input[0] || len == 1 {
        return output[0];
    }
    for i in 1..len {
        if value <= input[i] {
            let (lo, hi) = (input[i - 1], input[i]);
            if hi == lo {
                return output[i - 1];
            }
            let t = (value - lo) / (hi - lo);
            return output[i - 1] + (output[i] - output[i - 1]) * t;
        }
    }
    output[len - 1]
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self { stiffness, damping }
    }
}

/// Unit-mass damped spring chasing a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    const REST_DELTA: f64 = 0.001;
    /// Larger frame gaps (tab switches) are integrated in slices of this size.
    const MAX_STEP_S: f64 = 1.0 / 60.0;

    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self { config, value: initial, velocity: 0.0, target: initial }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < Self::REST_DELTA && self.velocity.abs() < Self::REST_DELTA
    }

    /// Semi-implicit Euler over `dt_s` seconds.
    pub fn step(&mut self, dt_s: f64) -> f64 {
        let mut remaining = dt_s.max(0.0);
        while remaining > 0.0 {
            let dt = remaining.min(Self::MAX_STEP_S);
            let force = -self.config.stiffness * (self.value - self.target)
                - self.config.damping * self.velocity;
            self.velocity += force * dt;
            self.value += self.velocity * dt;
            remaining -= dt;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

/// One animated style property driven by scroll offset.
#[derive(Clone, Copy, Debug)]
pub struct ParallaxChannel {
    range: ScrollRange,
    spring: Spring,
}

impl ParallaxChannel {
    pub fn new(range: ScrollRange, spring: SpringConfig) -> Self {
        Self { range, spring: Spring::new(spring, range.map(0.0)) }
    }

    pub fn update(&mut self, scroll_offset: f64, dt_s: f64) -> f64 {
        self.spring.set_target(self.range.map(scroll_offset));
        self.spring.step(dt_s)
    }

    pub fn value(&self) -> f64 {
        self.spring.value()
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }
}

/// Style values for the particle backdrop layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ParallaxFrame {
    pub canvas_y: f64,
    pub canvas_scale: f64,
    pub canvas_opacity: f64,
    /// Bottom gradient overlay.
    pub overlay_y: f64,
    pub glow_y: f64,
    pub glow_scale: f64,
    /// Upper-right floating orb.
    pub orb_x: f64,
    pub orb_y: f64,
    /// Lower-left floating orb, drifting upward.
    pub low_orb_y: f64,
}

/// The backdrop's parallax layers.
#[derive(Clone, Debug)]
pub struct ParallaxRig {
    canvas_y: ParallaxChannel,
    canvas_scale: ParallaxChannel,
    canvas_opacity: ParallaxChannel,
    overlay_y: ParallaxChannel,
    glow_y: ParallaxChannel,
    glow_scale: ParallaxChannel,
    orb_x: ParallaxChannel,
    orb_y: ParallaxChannel,
    low_orb_y: ParallaxChannel,
}

impl Default for ParallaxRig {
    fn default() -> Self {
        let canvas = SpringConfig::new(50.0, 20.0);
        let glow = SpringConfig::new(30.0, 15.0);
        let orb = SpringConfig::new(40.0, 15.0);
        let low_orb = SpringConfig::new(30.0, 20.0);
        Self {
            canvas_y: ParallaxChannel::new(ScrollRange::new((0.0, 1000.0), (0.0, 300.0)), canvas),
            canvas_scale: ParallaxChannel::new(ScrollRange::new((0.0, 500.0), (1.0, 1.1)), canvas),
            canvas_opacity: ParallaxChannel::new(ScrollRange::new((0.0, 600.0), (1.0, 0.3)), canvas),
            overlay_y: ParallaxChannel::new(ScrollRange::new((0.0, 500.0), (0.0, 50.0)), canvas),
            glow_y: ParallaxChannel::new(ScrollRange::new((0.0, 800.0), (0.0, 200.0)), glow),
            glow_scale: ParallaxChannel::new(ScrollRange::new((0.0, 500.0), (1.0, 1.5)), glow),
            orb_x: ParallaxChannel::new(ScrollRange::new((0.0, 800.0), (0.0, -50.0)), orb),
            orb_y: ParallaxChannel::new(ScrollRange::new((0.0, 800.0), (0.0, 150.0)), orb),
            low_orb_y: ParallaxChannel::new(ScrollRange::new((0.0, 800.0), (0.0, -100.0)), low_orb),
        }
    }
}

impl ParallaxRig {
    pub fn update(&mut self, scroll_offset: f64, dt_s: f64) -> ParallaxFrame {
        for channel in self.channels_mut() {
            channel.update(scroll_offset, dt_s);
        }
        self.frame()
    }

    /// Current values without advancing the springs.
    pub fn frame(&self) -> ParallaxFrame {
        ParallaxFrame {
            canvas_y: self.canvas_y.value(),
            canvas_scale: self.canvas_scale.value(),
            canvas_opacity: self.canvas_opacity.value(),
            overlay_y: self.overlay_y.value(),
            glow_y: self.glow_y.value(),
            glow_scale: self.glow_scale.value(),
            orb_x: self.orb_x.value(),
            orb_y: self.orb_y.value(),
            low_orb_y: self.low_orb_y.value(),
        }
    }

    pub fn is_settled(&self) -> bool {
        [
            &self.canvas_y,
            &self.canvas_scale,
            &self.canvas_opacity,
            &self.overlay_y,
            &self.glow_y,
            &self.glow_scale,
            &self.orb_x,
            &self.orb_y,
            &self.low_orb_y,
        ]
        .iter()
        .all(|c| c.is_settled())
    }

    fn channels_mut(&mut self) -> [&mut ParallaxChannel; 9] {
        [
            &mut self.canvas_y,
            &mut self.canvas_scale,
            &mut self.canvas_opacity,
            &mut self.overlay_y,
            &mut self.glow_y,
            &mut self.glow_scale,
            &mut self.orb_x,
            &mut self.orb_y,
            &mut self.low_orb_y,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_range_map_clamps() {
        let range = ScrollRange::new((0.0, 1000.0), (0.0, 300.0));
        assert_eq!(range.map(-50.0), 0.0);
        assert_eq!(range.map(500.0), 150.0);
        assert_eq!(range.map(5000.0), 300.0);

        let fade = ScrollRange::new((0.0, 600.0), (1.0, 0.3));
        assert_abs_diff_eq!(fade.map(300.0), 0.65, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(ScrollRange::new((5.0, 5.0), (1.0, 2.0)).map(10.0), 1.0);
    }

    #[test]
    fn test_spring_converges() {
        let mut spring = Spring::new(SpringConfig::new(50.0, 20.0), 0.0);
        spring.set_target(300.0);
        for _ in 0..600 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 300.0);
    }

    #[test]
    fn test_spring_lags_target() {
        let mut spring = Spring::new(SpringConfig::new(50.0, 20.0), 0.0);
        spring.set_target(100.0);
        let first = spring.step(1.0 / 60.0);
        assert!(first > 0.0 && first < 100.0);
    }

    #[test]
    fn test_large_gap_is_stable() {
        let mut spring = Spring::new(SpringConfig::new(30.0, 15.0), 0.0);
        spring.set_target(200.0);
        let value = spring.step(5.0);
        assert!(value.is_finite());
        assert_abs_diff_eq!(value, 200.0, epsilon = 1.0);
    }

    #[test]
    fn test_interpolate_keyframes() {
        let input = [0.0, 0.5, 1.0];
        let output = [0.98, 1.0, 0.98];
        assert_eq!(interpolate(-1.0, &input, &output), 0.98);
        assert_eq!(interpolate(0.5, &input, &output), 1.0);
        assert_abs_diff_eq!(interpolate(0.25, &input, &output), 0.99, epsilon = 1e-12);
        assert_abs_diff_eq!(interpolate(0.75, &input, &output), 0.99, epsilon = 1e-12);
        assert_eq!(interpolate(2.0, &input, &output), 0.98);
        assert_eq!(interpolate(1.0, &[], &[]), 0.0);
    }

    #[test]
    fn test_rig_starts_at_rest() {
        let mut rig = ParallaxRig::default();
        assert!(rig.is_settled());
        assert_eq!(rig.frame().glow_scale, 1.0);

        let frame = rig.update(0.0, 1.0 / 60.0);
        assert_eq!(frame.canvas_scale, 1.0);
        assert_eq!(frame.canvas_opacity, 1.0);
        assert_eq!(frame.glow_y, 0.0);
        assert_eq!(frame.overlay_y, 0.0);
    }

    #[test]
    fn test_rig_layers_settle_at_range_ends() {
        let mut rig = ParallaxRig::default();
        for _ in 0..1200 {
            rig.update(2000.0, 1.0 / 60.0);
        }
        assert!(rig.is_settled());

        let frame = rig.frame();
        assert_eq!(frame.canvas_y, 300.0);
        assert_eq!(frame.overlay_y, 50.0);
        assert_eq!(frame.orb_x, -50.0);
        assert_eq!(frame.orb_y, 150.0);
        assert_eq!(frame.low_orb_y, -100.0);
        assert_abs_diff_eq!(frame.canvas_opacity, 0.3, epsilon = 1e-12);
    }
}
