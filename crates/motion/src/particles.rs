// =============================================================================
// Folio Motion - Particle Field
// =============================================================================
// Table of Contents:
// 1. Particle
// 2. Particle Field (generation, per-frame update, links)
// 3. Particle Renderer (lifecycle + frame loop)
// =============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::{ParticleConfig, Range};
use crate::environment::{EnvEvent, Environment};
use crate::lifecycle::Disposers;
use crate::scheduler::{FrameLoop, FrameScheduler};
use crate::surface::Surface;
use crate::types::{Point, Viewport};

// -----------------------------------------------------------------------------
// 1. Particle
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// px per frame
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn random(rng: &mut impl Rng, viewport: Viewport, config: &ParticleConfig) -> Self {
        Self {
            x: rng.gen::<f64>() * viewport.width,
            y: rng.gen::<f64>() * viewport.height,
            size: sample(rng, config.size),
            velocity_x: sample(rng, config.velocity),
            velocity_y: sample(rng, config.velocity),
            opacity: sample(rng, config.opacity),
        }
    }

    /// Drift, pointer repulsion, then wraparound.
    fn advance(&mut self, pointer: Option<Point>, width: f64, height: f64, config: &ParticleConfig) {
        self.x += self.velocity_x;
        self.y += self.velocity_y;

        if let Some(pointer) = pointer {
            let dx = pointer.x - self.x;
            let dy = pointer.y - self.y;
            if (dx * dx + dy * dy).sqrt() < config.pointer_radius {
                self.x -= dx * config.repulsion;
                self.y -= dy * config.repulsion;
            }
        }

        if self.x < 0.0 {
            self.x = width;
        } else if self.x > width {
            self.x = 0.0;
        }
        if self.y < 0.0 {
            self.y = height;
        } else if self.y > height {
            self.y = 0.0;
        }
    }
}

fn sample(rng: &mut impl Rng, range: Range) -> f64 {
    if range.min >= range.max {
        range.min
    } else {
        rng.gen_range(range.min..=range.max)
    }
}

/// `min(max_count, floor(width / px_per_particle))`.
pub fn particle_count(width: f64, config: &ParticleConfig) -> usize {
    if width <= 0.0 {
        return 0;
    }
    let by_width = (width / config.px_per_particle).floor() as usize;
    by_width.min(config.max_count)
}

// -----------------------------------------------------------------------------
// 2. Particle Field
// -----------------------------------------------------------------------------

/// A connective line between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Point,
    pub to: Point,
    pub opacity: f64,
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    config: ParticleConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    /// Set when the last resize saw no drawable area.
    stale: bool,
}

impl ParticleField {
    pub fn new(config: ParticleConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            stale: true,
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// True until a regeneration happens with a non-empty viewport.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Replace the whole set for a new surface size.
    pub fn regenerate(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        self.width = viewport.width.max(0.0);
        self.height = viewport.height.max(0.0);
        self.particles.clear();

        if viewport.is_empty() {
            self.stale = true;
            return;
        }
        self.stale = false;

        let count = particle_count(viewport.width, &self.config);
        self.particles
            .extend((0..count).map(|_| Particle::random(&mut *rng, viewport, &self.config)));
        log::debug!(
            "Particle field regenerated: {count} particles on {}x{}",
            viewport.width,
            viewport.height
        );
    }

    /// Advance every particle one frame.
    pub fn step(&mut self, pointer: Option<Point>) {
        if self.stale {
            return;
        }
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(pointer, width, height, &self.config);
        }
    }

    /// Every unordered pair closer than the link distance.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let max = self.config.link_distance;
        let peak = self.config.link_max_opacity;
        self.particles.iter().enumerate().flat_map(move |(i, a)| {
            self.particles[i + 1..].iter().filter_map(move |b| {
                let distance = a.position().distance(b.position());
                (distance < max).then(|| Link {
                    from: a.position(),
                    to: b.position(),
                    opacity: peak * (1.0 - distance / max),
                })
            })
        })
    }

    /// Clear and draw one frame.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();
        if self.stale {
            return;
        }
        let color = self.config.color;
        for particle in &self.particles {
            surface.fill_circle(particle.position(), particle.size, color.with_alpha(particle.opacity));
        }
        for link in self.links() {
            surface.stroke_line(link.from, link.to, self.config.link_width, color.with_alpha(link.opacity));
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Particle Renderer
// -----------------------------------------------------------------------------

struct RendererShared {
    env: Rc<dyn Environment>,
    field: RefCell<ParticleField>,
    surface: RefCell<Box<dyn Surface>>,
    rng: RefCell<SmallRng>,
    pointer: Cell<Option<Point>>,
    disposers: RefCell<Disposers>,
}

/// Owns a particle field, its drawing surface and its frame loop.
pub struct ParticleRenderer {
    shared: Rc<RendererShared>,
    frame_loop: FrameLoop,
}

impl ParticleRenderer {
    pub fn new(
        config: ParticleConfig,
        env: Rc<dyn Environment>,
        scheduler: Rc<dyn FrameScheduler>,
        surface: Box<dyn Surface>,
    ) -> Self {
        Self::with_rng(config, env, scheduler, surface, SmallRng::from_entropy())
    }

    /// Deterministic placement for tests.
    pub fn with_rng(
        config: ParticleConfig,
        env: Rc<dyn Environment>,
        scheduler: Rc<dyn FrameScheduler>,
        surface: Box<dyn Surface>,
        rng: SmallRng,
    ) -> Self {
        let shared = Rc::new(RendererShared {
            env,
            field: RefCell::new(ParticleField::new(config)),
            surface: RefCell::new(surface),
            rng: RefCell::new(rng),
            pointer: Cell::new(None),
            disposers: RefCell::new(Disposers::new()),
        });

        let weak = Rc::downgrade(&shared);
        let frame_loop = FrameLoop::new(scheduler, move |_| {
            if let Some(shared) = weak.upgrade() {
                render_frame(&shared);
            }
        });

        Self { shared, frame_loop }
    }

    /// Size the surface, seed particles, attach listeners, start the loop.
    pub fn start(&self) {
        if self.frame_loop.is_running() {
            return;
        }
        let shared = &self.shared;
        resize(shared);
        shared.pointer.set(shared.env.pointer());

        let weak = Rc::downgrade(shared);
        let on_resize = shared.env.subscribe(
            EnvEvent::Resize,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    resize(&shared);
                }
            }),
        );
        let weak = Rc::downgrade(shared);
        let on_pointer = shared.env.subscribe(
            EnvEvent::PointerMove,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.pointer.set(shared.env.pointer());
                }
            }),
        );
        {
            let mut disposers = shared.disposers.borrow_mut();
            disposers.push(on_resize);
            disposers.push(on_pointer);
        }

        self.frame_loop.start();
    }

    /// Cancel the loop and detach every listener `start` attached.
    pub fn stop(&self) {
        self.frame_loop.stop();
        let disposers = self.shared.disposers.borrow_mut().take();
        disposers.release_all();
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.shared.field.borrow().len()
    }

    /// Snapshot of the current particle set.
    pub fn particles(&self) -> Vec<Particle> {
        self.shared.field.borrow().particles().to_vec()
    }
}

impl Drop for ParticleRenderer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn resize(shared: &RendererShared) {
    let viewport = shared.env.viewport();
    shared.surface.borrow_mut().resize(viewport.width, viewport.height);
    let mut rng = shared.rng.borrow_mut();
    shared.field.borrow_mut().regenerate(viewport, &mut *rng);
}

fn render_frame(shared: &RendererShared) {
    if shared.field.borrow().is_stale() {
        if shared.env.viewport().is_empty() {
            return;
        }
        resize(shared);
    }

    let mut field = shared.field.borrow_mut();
    field.step(shared.pointer.get());
    field.draw(&mut **shared.surface.borrow_mut());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FakeEnvironment;
    use crate::scheduler::ManualScheduler;
    use crate::surface::RecordingSurface;
    use approx::assert_abs_diff_eq;

    fn still(x: f64, y: f64) -> Particle {
        Particle { x, y, size: 2.0, velocity_x: 0.0, velocity_y: 0.0, opacity: 0.5 }
    }

    fn field_with(particles: Vec<Particle>, width: f64, height: f64) -> ParticleField {
        ParticleField {
            config: ParticleConfig::default(),
            width,
            height,
            particles,
            stale: false,
        }
    }

    #[test]
    fn test_particle_count() {
        let config = ParticleConfig::default();
        assert_eq!(particle_count(1920.0, &config), 80);
        assert_eq!(particle_count(1200.0, &config), 80);
        assert_eq!(particle_count(1199.0, &config), 79);
        assert_eq!(particle_count(375.0, &config), 25);
        assert_eq!(particle_count(14.0, &config), 0);
        assert_eq!(particle_count(0.0, &config), 0);
    }

    #[test]
    fn test_regenerate_respects_ranges() {
        let mut field = ParticleField::new(ParticleConfig::default());
        let mut rng = SmallRng::seed_from_u64(7);
        field.regenerate(Viewport::new(900.0, 700.0), &mut rng);

        assert_eq!(field.len(), 60);
        let config = field.config().clone();
        for p in field.particles() {
            assert!((0.0..=900.0).contains(&p.x));
            assert!((0.0..=700.0).contains(&p.y));
            assert!(config.size.contains(p.size));
            assert!(config.velocity.contains(p.velocity_x));
            assert!(config.velocity.contains(p.velocity_y));
            assert!(config.opacity.contains(p.opacity));
        }
    }

    #[test]
    fn test_pointer_repulsion() {
        let mut field = field_with(vec![still(500.0, 500.0)], 1000.0, 1000.0);
        field.step(Some(Point::new(550.0, 520.0)));

        let p = field.particles()[0];
        assert_abs_diff_eq!(p.x, 500.0 - 0.02 * 50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 500.0 - 0.02 * 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pointer_out_of_range_has_no_effect() {
        let mut field = field_with(vec![still(500.0, 500.0)], 1000.0, 1000.0);
        field.step(Some(Point::new(600.0, 500.0)));
        assert_eq!(field.particles()[0].position(), Point::new(500.0, 500.0));
        field.step(None);
        assert_eq!(field.particles()[0].position(), Point::new(500.0, 500.0));
    }

    #[test]
    fn test_wraparound_all_edges() {
        let drifting = |x, y, vx, vy| Particle { velocity_x: vx, velocity_y: vy, ..still(x, y) };
        let mut field = field_with(
            vec![
                drifting(0.1, 50.0, -0.2, 0.0),
                drifting(799.9, 50.0, 0.2, 0.0),
                drifting(50.0, 0.1, 0.0, -0.2),
                drifting(50.0, 599.9, 0.0, 0.2),
            ],
            800.0,
            600.0,
        );
        field.step(None);

        let p = field.particles();
        assert_eq!(p[0].x, 800.0);
        assert_eq!(p[1].x, 0.0);
        assert_eq!(p[2].y, 600.0);
        assert_eq!(p[3].y, 0.0);
    }

    #[test]
    fn test_links_fade_with_distance() {
        let field = field_with(
            vec![still(0.0, 0.0), still(75.0, 0.0), still(400.0, 400.0)],
            1000.0,
            1000.0,
        );
        let links: Vec<Link> = field.links().collect();

        assert_eq!(links.len(), 1);
        assert_abs_diff_eq!(links[0].opacity, 0.075, epsilon = 1e-12);
    }

    #[test]
    fn test_link_threshold_is_exclusive() {
        let field = field_with(vec![still(0.0, 0.0), still(150.0, 0.0)], 1000.0, 1000.0);
        assert_eq!(field.links().count(), 0);
    }

    #[test]
    fn test_empty_viewport_skips_draw() {
        let mut field = ParticleField::new(ParticleConfig::default());
        let mut rng = SmallRng::seed_from_u64(1);
        field.regenerate(Viewport::new(0.0, 0.0), &mut rng);
        assert!(field.is_stale());

        let mut surface = RecordingSurface::new();
        field.step(None);
        field.draw(&mut surface);
        assert_eq!(surface.commands, vec![crate::surface::DrawCommand::Clear]);
    }

    struct RendererRig {
        env: FakeEnvironment,
        scheduler: Rc<ManualScheduler>,
        surface: Rc<RefCell<RecordingSurface>>,
        renderer: ParticleRenderer,
    }

    fn renderer_rig(width: f64, height: f64) -> RendererRig {
        renderer_rig_with(ParticleConfig::default(), width, height)
    }

    fn renderer_rig_with(config: ParticleConfig, width: f64, height: f64) -> RendererRig {
        let env = FakeEnvironment::new(Viewport::new(width, height));
        let scheduler = Rc::new(ManualScheduler::new());
        let surface = Rc::new(RefCell::new(RecordingSurface::new()));
        let renderer = ParticleRenderer::with_rng(
            config,
            Rc::new(env.clone()),
            scheduler.clone(),
            Box::new(surface.clone()),
            SmallRng::seed_from_u64(42),
        );
        RendererRig { env, scheduler, surface, renderer }
    }

    #[test]
    fn test_renderer_draws_every_frame() {
        let rig = renderer_rig(600.0, 400.0);
        rig.renderer.start();
        assert_eq!(rig.renderer.particle_count(), 40);

        rig.scheduler.run_frame(16.0);
        assert_eq!(rig.surface.borrow().circles(), 40);
        rig.scheduler.run_frame(32.0);
        assert_eq!(rig.surface.borrow().circles(), 40);
        assert_eq!(rig.scheduler.pending_frames(), 1);
    }

    #[test]
    fn test_renderer_regenerates_on_resize() {
        let rig = renderer_rig(1920.0, 1080.0);
        rig.renderer.start();
        assert_eq!(rig.renderer.particle_count(), 80);

        rig.env.resize(300.0, 500.0);
        assert_eq!(rig.renderer.particle_count(), 20);
        assert!(rig
            .surface
            .borrow()
            .commands
            .contains(&crate::surface::DrawCommand::Resize { width: 300.0, height: 500.0 }));
    }

    #[test]
    fn test_renderer_recovers_from_zero_viewport() {
        let rig = renderer_rig(0.0, 0.0);
        rig.renderer.start();
        assert_eq!(rig.renderer.particle_count(), 0);
        rig.scheduler.run_frame(16.0);
        assert_eq!(rig.surface.borrow().circles(), 0);

        // Dimensions become valid without a resize event.
        rig.env.set_viewport(450.0, 300.0);
        rig.scheduler.run_frame(32.0);
        assert_eq!(rig.renderer.particle_count(), 30);
        assert_eq!(rig.surface.borrow().circles(), 30);
    }

    #[test]
    fn test_renderer_tracks_pointer() {
        let config = ParticleConfig { velocity: Range::new(0.0, 0.0), ..ParticleConfig::default() };
        let rig = renderer_rig_with(config, 600.0, 400.0);
        rig.renderer.start();
        rig.scheduler.run_frame(16.0);

        let before = rig.renderer.particles()[0];
        // Push towards the centre so the nudge never wraps.
        let offset = if before.x > 300.0 { 10.0 } else { -10.0 };
        rig.env.move_pointer(before.x + offset, before.y);
        rig.scheduler.run_frame(32.0);

        let after = rig.renderer.particles()[0];
        assert_abs_diff_eq!(after.x, before.x - 0.02 * offset, epsilon = 1e-9);
        assert_abs_diff_eq!(after.y, before.y, epsilon = 1e-9);
    }

    #[test]
    fn test_renderer_stop_releases_everything() {
        let rig = renderer_rig(600.0, 400.0);
        rig.renderer.start();
        assert_eq!(rig.env.listener_count(EnvEvent::Resize), 1);
        assert_eq!(rig.env.listener_count(EnvEvent::PointerMove), 1);

        rig.renderer.stop();
        assert!(!rig.renderer.is_running());
        assert_eq!(rig.env.listener_count(EnvEvent::Resize), 0);
        assert_eq!(rig.env.listener_count(EnvEvent::PointerMove), 0);
        assert_eq!(rig.scheduler.pending_frames(), 0);

        let drawn = rig.surface.borrow().commands.len();
        rig.scheduler.run_frame(16.0);
        assert_eq!(rig.surface.borrow().commands.len(), drawn);
    }
}
