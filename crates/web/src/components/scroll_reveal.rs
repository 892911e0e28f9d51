// =============================================================================
// Folio Web - Scroll Reveal
// =============================================================================
// Table of Contents:
// 1. ScrollReveal component
// 2. Reveal loop (element rect -> SectionReveal)
// =============================================================================

use std::cell::Cell;
use std::rc::Rc;

use folio_motion::environment::Environment;
use folio_motion::scheduler::FrameScheduler;
use folio_motion::{ElementRect, FrameLoop, RevealConfig, RevealDirection, RevealFrame, SectionReveal};
use leptos::html;
use leptos::prelude::*;
use web_sys::Element;

use crate::error::WebResult;
use crate::services::{BrowserEnvironment, RafScheduler};
use crate::state::AppState;
use crate::utils::class_if;

// -----------------------------------------------------------------------------
// 1. ScrollReveal
// -----------------------------------------------------------------------------

/// Fades its children in once they scroll into view, then lets them drift
/// with the page.
#[component]
pub fn ScrollReveal(
    #[prop(optional)] direction: RevealDirection,
    #[prop(optional)] delay_ms: u32,
    /// Also grow from 95% while entering.
    #[prop(optional)]
    scale: bool,
    children: Children,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let config = app_state.config.with_value(|c| c.motion.reveal.clone());
    let root_ref = NodeRef::<html::Div>::new();
    let frame = RwSignal::new(SectionReveal::new(config.clone()).frame());
    let driver: StoredValue<Option<FrameLoop>, LocalStorage> = StoredValue::new_local(None);

    let (offset_x, offset_y) = direction.initial_offset(config.travel_px);
    let entrance_style =
        format!("--reveal-x: {offset_x}px; --reveal-y: {offset_y}px; transition-delay: {delay_ms}ms;");
    let base_class = if scale { "scroll-reveal reveal-scale" } else { "scroll-reveal" };

    Effect::new(move |_| {
        let Some(root) = root_ref.get() else {
            return;
        };
        if driver.with_value(Option::is_some) {
            return;
        }
        match start_reveal(root.into(), config.clone(), frame) {
            Ok(started) => driver.set_value(Some(started)),
            Err(err) => {
                // Without a loop the content would stay hidden.
                log::warn!("Scroll reveal disabled: {err}");
                frame.set(RevealFrame { revealed: true, parallax_y: 0.0, parallax_scale: 1.0 });
            }
        }
    });

    on_cleanup(move || {
        if let Some(Some(started)) = driver.try_update_value(Option::take) {
            started.stop();
        }
    });

    let drift_style = move || {
        let f = frame.get();
        format!("transform: translateY({:.2}px) scale({:.4});", f.parallax_y, f.parallax_scale)
    };

    view! {
        <div
            node_ref=root_ref
            class=move || class_if(base_class, "revealed", frame.with(|f| f.revealed))
            style=entrance_style
        >
            <div class="reveal-parallax" style=drift_style>
                {children()}
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Reveal loop
// -----------------------------------------------------------------------------

fn start_reveal(element: Element, config: RevealConfig, frame: RwSignal<RevealFrame>) -> WebResult<FrameLoop> {
    let env = BrowserEnvironment::new()?;
    let scheduler: Rc<dyn FrameScheduler> = Rc::new(RafScheduler::new()?);

    let mut reveal = SectionReveal::new(config);
    let last_frame = Cell::new(None::<f64>);
    let driver = FrameLoop::new(scheduler, move |timestamp| {
        let dt_s = last_frame
            .replace(Some(timestamp))
            .map(|last| (timestamp - last).max(0.0) / 1000.0)
            .unwrap_or(0.0);
        let rect = element.get_bounding_client_rect();
        let next = reveal.update(ElementRect::new(rect.top(), rect.height()), env.viewport().height, dt_s);
        if frame.try_get_untracked().is_some_and(|current| current != next) {
            frame.set(next);
        }
    });
    driver.start();
    Ok(driver)
}
