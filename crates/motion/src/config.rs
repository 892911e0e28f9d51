// =============================================================================
// Folio Motion - Configuration
// =============================================================================
// Table of Contents:
// 1. Tracker Config
// 2. Scroll Animation Config
// 3. Particle Config
// 4. Root Config (load + validate)
// =============================================================================
//
// Every field defaults to the tuned constants the site ships with; a JSON
// override only needs to name the fields it changes.

use serde::{Deserialize, Serialize};

use crate::cursor::CursorConfig;
use crate::error::{MotionError, Result};
use crate::reveal::RevealConfig;
use crate::types::Hsla;

// -----------------------------------------------------------------------------
// 1. Tracker Config
// -----------------------------------------------------------------------------

/// Where the probe line sits relative to the top of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Probe {
    /// A fraction of the viewport height (section-dot nav uses 1/3).
    ViewportFraction(f64),
    /// A fixed pixel offset (the header bar uses 150px).
    FixedOffset(f64),
}

impl Probe {
    /// Absolute document offset of the probe line.
    pub fn position(&self, scroll_offset: f64, viewport_height: f64) -> f64 {
        match *self {
            Probe::ViewportFraction(fraction) => scroll_offset + viewport_height * fraction,
            Probe::FixedOffset(offset) => scroll_offset + offset,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub probe: Probe,
    /// Chrome becomes visible once scrolled strictly past this offset.
    pub visibility_threshold: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            probe: Probe::ViewportFraction(1.0 / 3.0),
            visibility_threshold: 200.0,
        }
    }
}

impl TrackerConfig {
    /// Settings for the fixed top header bar.
    pub fn header() -> Self {
        Self {
            probe: Probe::FixedOffset(150.0),
            visibility_threshold: 50.0,
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Scroll Animation Config
// -----------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollAnimationConfig {
    /// Milliseconds of animation per pixel travelled, before clamping.
    pub ms_per_px: f64,
    pub min_duration_ms: f64,
    pub max_duration_ms: f64,
    /// Delay between arrival and handing control back to the tracker.
    pub settle_delay_ms: u32,
}

impl Default for ScrollAnimationConfig {
    fn default() -> Self {
        Self {
            ms_per_px: 0.5,
            min_duration_ms: 600.0,
            max_duration_ms: 1200.0,
            settle_delay_ms: 100,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub tracker: TrackerConfig,
    pub animation: ScrollAnimationConfig,
}

// -----------------------------------------------------------------------------
// 3. Particle Config
// -----------------------------------------------------------------------------

/// Closed range used for random particle attributes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub max_count: usize,
    /// One particle per this many pixels of viewport width.
    pub px_per_particle: f64,
    pub size: Range,
    /// Per-axis velocity in px/frame.
    pub velocity: Range,
    pub opacity: Range,
    pub pointer_radius: f64,
    /// Fraction of the pointer delta applied as repulsion each frame.
    pub repulsion: f64,
    pub link_distance: f64,
    pub link_max_opacity: f64,
    pub link_width: f64,
    pub color: Hsla,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            max_count: 80,
            px_per_particle: 15.0,
            size: Range::new(1.0, 3.0),
            velocity: Range::new(-0.25, 0.25),
            opacity: Range::new(0.2, 0.7),
            pointer_radius: 100.0,
            repulsion: 0.02,
            link_distance: 150.0,
            link_max_opacity: 0.15,
            link_width: 0.5,
            color: Hsla::new(166.0, 76.0, 50.0, 1.0),
        }
    }
}

// -----------------------------------------------------------------------------
// 4. Root Config
// -----------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub navigation: NavigationConfig,
    #[serde(deserialize_with = "header_tracker")]
    pub header: TrackerConfig,
    pub particles: ParticleConfig,
    pub reveal: RevealConfig,
    pub cursor: CursorConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationConfig::default(),
            header: TrackerConfig::header(),
            particles: ParticleConfig::default(),
            reveal: RevealConfig::default(),
            cursor: CursorConfig::default(),
        }
    }
}

impl MotionConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MotionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        let anim = &self.navigation.animation;
        if anim.ms_per_px < 0.0 {
            return Err(invalid("animation.ms_per_px must be non-negative"));
        }
        if anim.min_duration_ms <= 0.0 || anim.min_duration_ms > anim.max_duration_ms {
            return Err(invalid("animation duration bounds must satisfy 0 < min <= max"));
        }

        for (name, tracker) in [("navigation.tracker", &self.navigation.tracker), ("header", &self.header)] {
            if tracker.visibility_threshold < 0.0 {
                return Err(invalid(format!("{name}.visibility_threshold must be non-negative")));
            }
            if let Probe::ViewportFraction(f) = tracker.probe {
                if !(0.0..=1.0).contains(&f) {
                    return Err(invalid(format!("{name}.probe fraction must be within [0, 1]")));
                }
            }
        }

        let p = &self.particles;
        if p.px_per_particle <= 0.0 {
            return Err(invalid("particles.px_per_particle must be positive"));
        }
        for (name, range) in [("size", p.size), ("velocity", p.velocity), ("opacity", p.opacity)] {
            if range.min > range.max {
                return Err(invalid(format!("particles.{name} range is inverted")));
            }
        }
        if p.link_distance <= 0.0 {
            return Err(invalid("particles.link_distance must be positive"));
        }

        if !(0.0..=1.0).contains(&self.reveal.amount) || self.reveal.margin_px < 0.0 {
            return Err(invalid("reveal.amount must be within [0, 1] and reveal.margin_px non-negative"));
        }
        for (name, spring) in [("reveal.spring", self.reveal.spring), ("cursor.spring", self.cursor.spring)] {
            if spring.stiffness <= 0.0 || spring.damping < 0.0 {
                return Err(invalid(format!("{name} needs positive stiffness and non-negative damping")));
            }
        }
        Ok(())
    }
}

/// Header overrides fill gaps from `TrackerConfig::header()`, not the
/// section-nav defaults.
fn header_tracker<'de, D>(deserializer: D) -> std::result::Result<TrackerConfig, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Partial {
        probe: Option<Probe>,
        visibility_threshold: Option<f64>,
    }

    let partial = Partial::deserialize(deserializer)?;
    let base = TrackerConfig::header();
    Ok(TrackerConfig {
        probe: partial.probe.unwrap_or(base.probe),
        visibility_threshold: partial.visibility_threshold.unwrap_or(base.visibility_threshold),
    })
}

fn invalid(message: impl Into<String>) -> MotionError {
    MotionError::InvalidConfig(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(MotionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_probe_position() {
        let probe = Probe::ViewportFraction(1.0 / 3.0);
        assert_eq!(probe.position(650.0, 600.0), 850.0);
        assert_eq!(Probe::FixedOffset(150.0).position(100.0, 600.0), 250.0);
    }

    #[test]
    fn test_partial_json_override() {
        let config = MotionConfig::from_json(
            r#"{ "navigation": { "animation": { "max_duration_ms": 900.0 } },
                 "particles": { "max_count": 40 } }"#,
        )
        .unwrap();

        assert_eq!(config.navigation.animation.max_duration_ms, 900.0);
        assert_eq!(config.navigation.animation.min_duration_ms, 600.0);
        assert_eq!(config.particles.max_count, 40);
        assert_eq!(config.header, TrackerConfig::header());
    }

    #[test]
    fn test_probe_json_shape() {
        let config = MotionConfig::from_json(
            r#"{ "header": { "probe": { "kind": "fixed_offset", "value": 120.0 } } }"#,
        )
        .unwrap();
        assert_eq!(config.header.probe, Probe::FixedOffset(120.0));
        assert_eq!(config.header.visibility_threshold, 50.0);
    }

    #[test]
    fn test_rejects_inverted_duration() {
        let err = MotionConfig::from_json(
            r#"{ "navigation": { "animation": { "min_duration_ms": 2000.0 } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, MotionError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let mut config = MotionConfig::default();
        config.particles.opacity = Range::new(0.9, 0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_effect_overrides() {
        let config = MotionConfig::from_json(
            r#"{ "reveal": { "amount": 0.3 }, "cursor": { "hidden_at": -50.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.reveal.amount, 0.3);
        assert_eq!(config.reveal.travel_px, 80.0);
        assert_eq!(config.cursor.hidden_at, -50.0);

        let err = MotionConfig::from_json(r#"{ "reveal": { "amount": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, MotionError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = MotionConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, MotionError::ConfigParse(_)));
    }
}
