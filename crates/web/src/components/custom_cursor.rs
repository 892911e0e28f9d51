// =============================================================================
// Folio Web - Custom Cursor
// =============================================================================
// Table of Contents:
// 1. CustomCursor component
// 2. Cursor wiring (listeners + spring loop)
// =============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_motion::environment::{EnvEvent, Environment};
use folio_motion::scheduler::FrameScheduler;
use folio_motion::{CursorConfig, CursorFollower, CursorFrame, Disposers, FrameLoop};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::error::{WebError, WebResult};
use crate::services::{listen, BrowserEnvironment, RafScheduler};
use crate::state::AppState;

const INTERACTIVE: &str = "a, button, [role='button'], .cursor-pointer";

// -----------------------------------------------------------------------------
// 1. CustomCursor
// -----------------------------------------------------------------------------

/// Spring-following dot and ring. Only rendered for fine pointers.
#[component]
pub fn CustomCursor() -> impl IntoView {
    if !has_fine_pointer() {
        return ().into_any();
    }

    let app_state = expect_context::<AppState>();
    let config = app_state.config.with_value(|c| c.motion.cursor.clone());
    let frame = RwSignal::new(CursorFollower::new(config.clone()).frame());
    let cursor: StoredValue<Option<Cursor>, LocalStorage> = StoredValue::new_local(None);

    match Cursor::start(config, frame) {
        Ok(started) => cursor.set_value(Some(started)),
        Err(err) => log::warn!("Custom cursor disabled: {err}"),
    }

    on_cleanup(move || {
        if let Some(Some(started)) = cursor.try_update_value(Option::take) {
            started.stop();
        }
    });

    let dot_style = move || {
        let f = frame.get();
        format!(
            "transform: translate({:.1}px, {:.1}px) translate(-50%, -50%) scale({}); \
             width: {}px; height: {}px; opacity: {};",
            f.x, f.y, f.dot_scale, f.dot_size, f.dot_size, f.dot_opacity
        )
    };
    let ring_style = move || {
        let f = frame.get();
        format!(
            "transform: translate({:.1}px, {:.1}px) translate(-50%, -50%) scale({}); opacity: {};",
            f.x, f.y, f.ring_scale, f.ring_opacity
        )
    };

    view! {
        <div class="cursor-layer" aria-hidden="true">
            <div class="cursor-dot" style=dot_style></div>
            <div class="cursor-ring" style=ring_style></div>
        </div>
    }
    .into_any()
}

fn has_fine_pointer() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(pointer: fine)").ok().flatten())
        .is_some_and(|query| query.matches())
}

// -----------------------------------------------------------------------------
// 2. Cursor wiring
// -----------------------------------------------------------------------------

struct Cursor {
    listeners: Disposers,
    driver: FrameLoop,
}

impl Cursor {
    fn start(config: CursorConfig, frame: RwSignal<CursorFrame>) -> WebResult<Self> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoWindow)?;
        let root = document
            .document_element()
            .ok_or_else(|| WebError::Dom("document has no root element".into()))?;
        let env = Rc::new(BrowserEnvironment::new()?);
        let scheduler: Rc<dyn FrameScheduler> = Rc::new(RafScheduler::new()?);
        let follower = Rc::new(RefCell::new(CursorFollower::new(config)));

        let mut listeners = Disposers::new();
        listeners.push(env.subscribe(EnvEvent::PointerMove, {
            let (env, follower) = (env.clone(), follower.clone());
            Box::new(move || {
                if let Some(pointer) = env.pointer() {
                    follower.borrow_mut().pointer_moved(pointer);
                }
            })
        }));
        for (name, pressed) in [("mousedown", true), ("mouseup", false)] {
            let follower = follower.clone();
            listeners.push(listen(&window, name, move |_| follower.borrow_mut().set_pressed(pressed))?);
        }
        listeners.push(listen(&document, "mouseover", {
            let follower = follower.clone();
            move |event: Event| follower.borrow_mut().set_hovering(is_interactive(&event))
        })?);
        for (name, inside) in [("mouseleave", false), ("mouseenter", true)] {
            let follower = follower.clone();
            listeners.push(listen(&root, name, move |_| {
                let mut follower = follower.borrow_mut();
                if inside {
                    follower.pointer_entered();
                } else {
                    follower.pointer_left();
                }
            })?);
        }

        let last_frame = Cell::new(None::<f64>);
        let driver = FrameLoop::new(scheduler, move |timestamp| {
            let dt_s = last_frame
                .replace(Some(timestamp))
                .map(|last| (timestamp - last).max(0.0) / 1000.0)
                .unwrap_or(0.0);
            let next = follower.borrow_mut().update(dt_s);
            if frame.try_get_untracked().is_some_and(|current| current != next) {
                frame.set(next);
            }
        });
        driver.start();

        Ok(Self { listeners, driver })
    }

    fn stop(self) {
        self.driver.stop();
        self.listeners.release_all();
    }
}

fn is_interactive(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(INTERACTIVE).ok().flatten())
        .is_some()
}
