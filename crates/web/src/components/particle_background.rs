// =============================================================================
// Folio Web - Particle Backdrop
// =============================================================================
// Table of Contents:
// 1. ParticleBackground component
// 2. Backdrop wiring (renderer + parallax loop)
// =============================================================================

use std::cell::Cell;
use std::rc::Rc;

use folio_motion::environment::Environment;
use folio_motion::scheduler::FrameScheduler;
use folio_motion::{FrameLoop, ParallaxFrame, ParallaxRig, ParticleConfig, ParticleRenderer};
use leptos::html;
use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::error::WebResult;
use crate::services::{BrowserEnvironment, CanvasSurface, RafScheduler};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. ParticleBackground
// -----------------------------------------------------------------------------

/// Animated particle canvas behind the hero, with scroll parallax.
#[component]
pub fn ParticleBackground() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let backdrop: StoredValue<Option<Backdrop>, LocalStorage> = StoredValue::new_local(None);
    let parallax = RwSignal::new(ParallaxRig::default().frame());

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if backdrop.with_value(Option::is_some) {
            return;
        }
        let config = app_state.config.with_value(|c| c.motion.particles.clone());
        match Backdrop::start(canvas, config, parallax) {
            Ok(started) => backdrop.set_value(Some(started)),
            Err(err) => log::warn!("Particle backdrop disabled: {err}"),
        }
    });

    on_cleanup(move || {
        if let Some(Some(started)) = backdrop.try_update_value(Option::take) {
            started.stop();
        }
    });

    let canvas_style = move || {
        let f = parallax.get();
        format!(
            "transform: translateY({:.1}px) scale({:.4}); opacity: {:.3};",
            f.canvas_y, f.canvas_scale, f.canvas_opacity
        )
    };
    let glow_style = move || {
        let f = parallax.get();
        format!("transform: translateY({:.1}px) scale({:.4});", f.glow_y, f.glow_scale)
    };
    let overlay_style = move || format!("transform: translateY({:.1}px);", parallax.get().overlay_y);
    let high_orb_style = move || {
        let f = parallax.get();
        format!("transform: translate({:.1}px, {:.1}px);", f.orb_x, f.orb_y)
    };
    let low_orb_style = move || format!("transform: translateY({:.1}px);", parallax.get().low_orb_y);

    view! {
        <div class="particle-backdrop" aria-hidden="true">
            <canvas node_ref=canvas_ref class="particle-canvas" style=canvas_style></canvas>
            <div class="backdrop-glow" style=glow_style></div>
            <div class="backdrop-orb orb-high" style=high_orb_style></div>
            <div class="backdrop-orb orb-low" style=low_orb_style></div>
            <div class="backdrop-fade" style=overlay_style></div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Backdrop wiring
// -----------------------------------------------------------------------------

struct Backdrop {
    renderer: ParticleRenderer,
    parallax_loop: FrameLoop,
}

impl Backdrop {
    fn start(
        canvas: HtmlCanvasElement,
        config: ParticleConfig,
        parallax: RwSignal<ParallaxFrame>,
    ) -> WebResult<Self> {
        let env: Rc<dyn Environment> = Rc::new(BrowserEnvironment::new()?);
        let scheduler: Rc<dyn FrameScheduler> = Rc::new(RafScheduler::new()?);
        let surface = CanvasSurface::new(canvas)?;

        let renderer = ParticleRenderer::new(config, env.clone(), scheduler.clone(), Box::new(surface));
        renderer.start();

        let mut rig = ParallaxRig::default();
        let last_frame = Cell::new(None::<f64>);
        let parallax_loop = FrameLoop::new(scheduler, move |timestamp| {
            let dt_s = last_frame
                .replace(Some(timestamp))
                .map(|last| (timestamp - last).max(0.0) / 1000.0)
                .unwrap_or(0.0);
            let frame = rig.update(env.scroll_offset(), dt_s);
            if parallax.try_get_untracked().is_some_and(|current| current != frame) {
                parallax.set(frame);
            }
        });
        parallax_loop.start();

        log::debug!("Particle backdrop started with {} particles", renderer.particle_count());
        Ok(Self { renderer, parallax_loop })
    }

    fn stop(self) {
        self.parallax_loop.stop();
        self.renderer.stop();
    }
}
