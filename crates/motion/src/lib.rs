// =============================================================================
// Folio Motion - Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// =============================================================================
//
// Scroll-driven section tracking, smooth-scroll navigation, the particle
// backdrop and the section/cursor effects, written against `Environment`,
// `FrameScheduler` and `Surface` so the same code runs in the browser and
// under test.

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod animator;
pub mod config;
pub mod counter;
pub mod cursor;
pub mod environment;
pub mod error;
pub mod lifecycle;
pub mod navigation;
pub mod parallax;
pub mod particles;
pub mod preloader;
pub mod reveal;
pub mod scheduler;
pub mod sections;
pub mod surface;
pub mod theme;
pub mod tracker;
pub mod types;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use animator::{ease_out_quart, transition_duration, ScrollTransition};
pub use config::{
    MotionConfig, NavigationConfig, ParticleConfig, Probe, Range, ScrollAnimationConfig,
    TrackerConfig,
};
pub use counter::CountUp;
pub use cursor::{CursorConfig, CursorFollower, CursorFrame, CursorMode};
pub use environment::{EnvEvent, Environment, FakeEnvironment};
pub use error::{MotionError, Result};
pub use lifecycle::{Disposers, Subscription};
pub use navigation::{NavigateOutcome, NavigationController, NavigationState};
pub use parallax::{interpolate, ParallaxFrame, ParallaxRig, ScrollRange, Spring, SpringConfig};
pub use particles::{Particle, ParticleField, ParticleRenderer};
pub use preloader::{PreloadProgress, PreloadTick};
pub use reveal::{
    is_in_view, scroll_progress, ElementRect, RevealConfig, RevealDirection, RevealFrame, SectionReveal,
};
pub use scheduler::{FrameHandle, FrameLoop, FrameScheduler, ManualScheduler, TimerHandle};
pub use sections::{Direction, SectionDescriptor, SectionList};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use theme::Theme;
pub use tracker::{ScrollTracker, TrackerSample};
pub use types::{Hsla, Point, Viewport};
