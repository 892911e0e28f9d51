// =============================================================================
// Folio Motion - Custom Cursor
// =============================================================================
// Table of Contents:
// 1. Config and modes
// 2. CursorFollower
// =============================================================================
//
// A dot and a trailing ring follow the pointer through springs. Hovering an
// interactive element grows both, pressing shrinks the dot.

use serde::{Deserialize, Serialize};

use crate::parallax::{Spring, SpringConfig};
use crate::types::Point;

// -----------------------------------------------------------------------------
// 1. Config and modes
// -----------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub spring: SpringConfig,
    /// Off-screen coordinate the cursor parks at before the first move.
    pub hidden_at: f64,
    pub dot_size: f64,
    pub hover_dot_size: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::new(400.0, 25.0),
            hidden_at: -100.0,
            dot_size: 12.0,
            hover_dot_size: 40.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorMode {
    #[default]
    Idle,
    Hovering,
    Pressed,
}

impl CursorMode {
    fn dot_scale(self) -> f64 {
        match self {
            CursorMode::Idle => 1.0,
            CursorMode::Hovering => 1.5,
            CursorMode::Pressed => 0.8,
        }
    }

    fn ring_scale(self) -> f64 {
        match self {
            CursorMode::Idle => 1.0,
            CursorMode::Hovering => 2.0,
            CursorMode::Pressed => 1.5,
        }
    }
}

/// Style values for the dot and ring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CursorFrame {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
    pub dot_scale: f64,
    pub ring_scale: f64,
    pub dot_opacity: f64,
    pub ring_opacity: f64,
    pub dot_size: f64,
}

// -----------------------------------------------------------------------------
// 2. CursorFollower
// -----------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct CursorFollower {
    config: CursorConfig,
    x: Spring,
    y: Spring,
    visible: bool,
    hovering: bool,
    pressed: bool,
}

impl CursorFollower {
    pub fn new(config: CursorConfig) -> Self {
        Self {
            x: Spring::new(config.spring, config.hidden_at),
            y: Spring::new(config.spring, config.hidden_at),
            visible: false,
            hovering: false,
            pressed: false,
            config,
        }
    }

    pub fn pointer_moved(&mut self, pointer: Point) {
        self.x.set_target(pointer.x);
        self.y.set_target(pointer.y);
        self.visible = true;
    }

    pub fn pointer_left(&mut self) {
        self.visible = false;
    }

    pub fn pointer_entered(&mut self) {
        self.visible = true;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Pressing wins over hovering.
    pub fn mode(&self) -> CursorMode {
        if self.pressed {
            CursorMode::Pressed
        } else if self.hovering {
            CursorMode::Hovering
        } else {
            CursorMode::Idle
        }
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }

    pub fn update(&mut self, dt_s: f64) -> CursorFrame {
        self.x.step(dt_s);
        self.y.step(dt_s);
        self.frame()
    }

    pub fn frame(&self) -> CursorFrame {
        let mode = self.mode();
        CursorFrame {
            x: self.x.value(),
            y: self.y.value(),
            visible: self.visible,
            dot_scale: mode.dot_scale(),
            ring_scale: mode.ring_scale(),
            dot_opacity: if self.visible { 1.0 } else { 0.0 },
            ring_opacity: if self.visible { 0.5 } else { 0.0 },
            dot_size: if self.hovering { self.config.hover_dot_size } else { self.config.dot_size },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden_offscreen() {
        let cursor = CursorFollower::new(CursorConfig::default());
        let frame = cursor.frame();
        assert!(!frame.visible);
        assert_eq!((frame.x, frame.y), (-100.0, -100.0));
        assert_eq!(frame.dot_opacity, 0.0);
        assert_eq!(frame.ring_opacity, 0.0);
        assert!(cursor.is_settled());
    }

    #[test]
    fn test_follows_pointer_with_lag() {
        let mut cursor = CursorFollower::new(CursorConfig::default());
        cursor.pointer_moved(Point::new(300.0, 200.0));

        let first = cursor.update(1.0 / 60.0);
        assert!(first.visible);
        assert!(first.x > -100.0 && first.x < 300.0);

        for _ in 0..300 {
            cursor.update(1.0 / 60.0);
        }
        assert!(cursor.is_settled());
        assert_eq!((cursor.frame().x, cursor.frame().y), (300.0, 200.0));
    }

    #[test]
    fn test_press_overrides_hover() {
        let mut cursor = CursorFollower::new(CursorConfig::default());
        cursor.set_hovering(true);
        assert_eq!(cursor.mode(), CursorMode::Hovering);
        assert_eq!(cursor.frame().dot_size, 40.0);
        assert_eq!(cursor.frame().ring_scale, 2.0);

        cursor.set_pressed(true);
        let frame = cursor.frame();
        assert_eq!(cursor.mode(), CursorMode::Pressed);
        assert_eq!(frame.dot_scale, 0.8);
        assert_eq!(frame.ring_scale, 1.5);
        assert_eq!(frame.dot_size, 40.0);

        cursor.set_pressed(false);
        cursor.set_hovering(false);
        assert_eq!(cursor.mode(), CursorMode::Idle);
        assert_eq!(cursor.frame().dot_size, 12.0);
    }

    #[test]
    fn test_leave_and_enter_toggle_visibility() {
        let mut cursor = CursorFollower::new(CursorConfig::default());
        cursor.pointer_moved(Point::new(10.0, 10.0));
        cursor.pointer_left();
        assert!(!cursor.frame().visible);
        assert_eq!(cursor.frame().ring_opacity, 0.0);

        cursor.pointer_entered();
        assert!(cursor.frame().visible);
        assert_eq!(cursor.frame().ring_opacity, 0.5);
    }
}
