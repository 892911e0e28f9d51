// =============================================================================
// Folio Motion - Section Reveal
// =============================================================================
// Table of Contents:
// 1. Config and geometry
// 2. Visibility and scroll progress
// 3. SectionReveal (one-shot reveal + springy drift)
// =============================================================================
//
// A content section fades in the first time enough of it enters the
// viewport, and drifts slightly while it crosses the screen.

use serde::{Deserialize, Serialize};

use crate::parallax::{interpolate, Spring, SpringConfig};

// -----------------------------------------------------------------------------
// 1. Config and geometry
// -----------------------------------------------------------------------------

/// Side the content slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl RevealDirection {
    /// `(x, y)` offset the hidden content starts at.
    pub fn initial_offset(&self, travel: f64) -> (f64, f64) {
        match self {
            RevealDirection::Up => (0.0, travel),
            RevealDirection::Down => (0.0, -travel),
            RevealDirection::Left => (travel, 0.0),
            RevealDirection::Right => (-travel, 0.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Shrinks the viewport by this much at the top and bottom.
    pub margin_px: f64,
    /// Visible fraction of the element that triggers the reveal.
    pub amount: f64,
    /// Slide distance of the entrance.
    pub travel_px: f64,
    /// Drift amplitude is `50 * parallax_speed` px either side of rest.
    pub parallax_speed: f64,
    pub spring: SpringConfig,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            margin_px: 50.0,
            amount: 0.1,
            travel_px: 80.0,
            parallax_speed: 0.15,
            spring: SpringConfig::new(100.0, 30.0),
        }
    }
}

/// Element box relative to the top of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

// -----------------------------------------------------------------------------
// 2. Visibility and scroll progress
// -----------------------------------------------------------------------------

/// At least `amount` of the element lies inside the margin-shrunk viewport.
pub fn is_in_view(rect: ElementRect, viewport_height: f64, config: &RevealConfig) -> bool {
    let root_top = config.margin_px;
    let root_bottom = viewport_height - config.margin_px;
    if root_bottom <= root_top {
        return false;
    }
    if rect.height <= 0.0 {
        return rect.top >= root_top && rect.top <= root_bottom;
    }
    let overlap = (rect.top + rect.height).min(root_bottom) - rect.top.max(root_top);
    overlap > 0.0 && overlap / rect.height >= config.amount
}

/// 0 while the element's top is at the viewport bottom, 1 once its bottom
/// has passed the viewport top.
pub fn scroll_progress(rect: ElementRect, viewport_height: f64) -> f64 {
    let span = viewport_height + rect.height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect.top) / span).clamp(0.0, 1.0)
}

// -----------------------------------------------------------------------------
// 3. SectionReveal
// -----------------------------------------------------------------------------

const SCALE_STOPS: [f64; 3] = [0.0, 0.5, 1.0];
const SCALE_VALUES: [f64; 3] = [0.98, 1.0, 0.98];

/// Style values for one revealed section.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RevealFrame {
    pub revealed: bool,
    pub parallax_y: f64,
    pub parallax_scale: f64,
}

#[derive(Clone, Debug)]
pub struct SectionReveal {
    config: RevealConfig,
    revealed: bool,
    drift: Spring,
    scale: Spring,
}

impl SectionReveal {
    pub fn new(config: RevealConfig) -> Self {
        let amplitude = config.parallax_speed * 50.0;
        Self {
            drift: Spring::new(config.spring, amplitude),
            scale: Spring::new(config.spring, SCALE_VALUES[0]),
            revealed: false,
            config,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Once revealed, a section stays revealed.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_settled(&self) -> bool {
        self.drift.is_settled() && self.scale.is_settled()
    }

    pub fn frame(&self) -> RevealFrame {
        RevealFrame {
            revealed: self.revealed,
            parallax_y: self.drift.value(),
            parallax_scale: self.scale.value(),
        }
    }

    pub fn update(&mut self, rect: ElementRect, viewport_height: f64, dt_s: f64) -> RevealFrame {
        if !self.revealed && is_in_view(rect, viewport_height, &self.config) {
            self.revealed = true;
        }

        let progress = scroll_progress(rect, viewport_height);
        let amplitude = self.config.parallax_speed * 50.0;
        self.drift.set_target(interpolate(progress, &[0.0, 1.0], &[amplitude, -amplitude]));
        self.scale.set_target(interpolate(progress, &SCALE_STOPS, &SCALE_VALUES));
        self.drift.step(dt_s);
        self.scale.step(dt_s);

        self.frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const VIEWPORT: f64 = 700.0;

    fn settle(reveal: &mut SectionReveal, rect: ElementRect) -> RevealFrame {
        for _ in 0..600 {
            reveal.update(rect, VIEWPORT, 1.0 / 60.0);
        }
        reveal.frame()
    }

    #[test]
    fn test_in_view_needs_amount_inside_margin() {
        let config = RevealConfig::default();
        // 400px tall, top edge 60px above the shrunk bottom: 15% visible.
        assert!(is_in_view(ElementRect::new(590.0, 400.0), VIEWPORT, &config));
        // Only 20px inside: 5%.
        assert!(!is_in_view(ElementRect::new(630.0, 400.0), VIEWPORT, &config));
        // Inside the real viewport but within the bottom margin.
        assert!(!is_in_view(ElementRect::new(660.0, 400.0), VIEWPORT, &config));
        // Scrolled past the top.
        assert!(!is_in_view(ElementRect::new(-500.0, 400.0), VIEWPORT, &config));
    }

    #[test]
    fn test_in_view_tiny_viewport() {
        let config = RevealConfig::default();
        assert!(!is_in_view(ElementRect::new(10.0, 50.0), 80.0, &config));
    }

    #[test]
    fn test_scroll_progress_endpoints() {
        assert_eq!(scroll_progress(ElementRect::new(700.0, 300.0), VIEWPORT), 0.0);
        assert_eq!(scroll_progress(ElementRect::new(200.0, 300.0), VIEWPORT), 0.5);
        assert_eq!(scroll_progress(ElementRect::new(-300.0, 300.0), VIEWPORT), 1.0);
        assert_eq!(scroll_progress(ElementRect::new(-900.0, 300.0), VIEWPORT), 1.0);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut reveal = SectionReveal::new(RevealConfig::default());
        let below = ElementRect::new(900.0, 300.0);
        assert!(!reveal.update(below, VIEWPORT, 0.016).revealed);

        assert!(reveal.update(ElementRect::new(300.0, 300.0), VIEWPORT, 0.016).revealed);
        assert!(reveal.update(below, VIEWPORT, 0.016).revealed);
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_drift_follows_progress() {
        let mut reveal = SectionReveal::new(RevealConfig::default());
        let initial = reveal.frame();
        assert_eq!(initial.parallax_y, 7.5);
        assert_eq!(initial.parallax_scale, 0.98);

        let centred = settle(&mut reveal, ElementRect::new(200.0, 300.0));
        assert!(reveal.is_settled());
        assert_abs_diff_eq!(centred.parallax_y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(centred.parallax_scale, 1.0, epsilon = 1e-12);

        let gone = settle(&mut reveal, ElementRect::new(-400.0, 300.0));
        assert_eq!(gone.parallax_y, -7.5);
        assert_abs_diff_eq!(gone.parallax_scale, 0.98, epsilon = 1e-12);
    }

    #[test]
    fn test_drift_is_smoothed() {
        let mut reveal = SectionReveal::new(RevealConfig::default());
        let frame = reveal.update(ElementRect::new(-400.0, 300.0), VIEWPORT, 1.0 / 60.0);
        assert!(frame.parallax_y < 7.5 && frame.parallax_y > -7.5);
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(RevealDirection::Up.initial_offset(80.0), (0.0, 80.0));
        assert_eq!(RevealDirection::Down.initial_offset(80.0), (0.0, -80.0));
        assert_eq!(RevealDirection::Left.initial_offset(80.0), (80.0, 0.0));
        assert_eq!(RevealDirection::Right.initial_offset(80.0), (-80.0, 0.0));
    }
}
