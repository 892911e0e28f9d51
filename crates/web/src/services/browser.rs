// =============================================================================
// Folio Web - Browser Bindings for the Motion Core
// =============================================================================
// Table of Contents:
// 1. BrowserEnvironment (window, scroll, pointer, element geometry) + listen
// 2. RafScheduler (requestAnimationFrame + setTimeout)
// 3. CanvasSurface (2D canvas drawing)
// =============================================================================

use std::cell::Cell;
use std::rc::Rc;

use folio_motion::environment::{EnvEvent, Environment, EventHandler};
use folio_motion::scheduler::{FrameCallback, FrameHandle, FrameScheduler, TimerCallback, TimerHandle};
use folio_motion::{Hsla, Point, Subscription, Surface, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement,
    HtmlElement, MouseEvent, Window,
};

use crate::error::{WebError, WebResult};

fn browser_window() -> WebResult<Window> {
    web_sys::window().ok_or(WebError::NoWindow)
}

// -----------------------------------------------------------------------------
// 1. BrowserEnvironment
// -----------------------------------------------------------------------------

/// `Environment` backed by the live window and document.
#[derive(Clone)]
pub struct BrowserEnvironment {
    window: Window,
    pointer: Rc<Cell<Option<Point>>>,
}

impl BrowserEnvironment {
    pub fn new() -> WebResult<Self> {
        Ok(Self {
            window: browser_window()?,
            pointer: Rc::new(Cell::new(None)),
        })
    }

    fn event_name(event: EnvEvent) -> &'static str {
        match event {
            EnvEvent::Scroll => "scroll",
            EnvEvent::Resize => "resize",
            EnvEvent::PointerMove => "mousemove",
        }
    }
}

impl Environment for BrowserEnvironment {
    fn viewport(&self) -> Viewport {
        let read = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Viewport::new(read(self.window.inner_width()), read(self.window.inner_height()))
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&self, offset: f64) {
        self.window.scroll_to_with_x_and_y(0.0, offset);
    }

    fn pointer(&self) -> Option<Point> {
        self.pointer.get()
    }

    /// Document offset summed up the `offsetParent` chain, so positioned
    /// wrappers around a section don't shift it.
    fn section_offset_top(&self, id: &str) -> Option<f64> {
        let element = self.window.document()?.get_element_by_id(id)?;
        let mut current = element.dyn_into::<HtmlElement>().ok();
        let mut top = 0.0;
        while let Some(node) = current {
            top += f64::from(node.offset_top());
            current = node.offset_parent().and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
        }
        Some(top)
    }

    fn now_ms(&self) -> f64 {
        self.window.performance().map(|p| p.now()).unwrap_or(0.0)
    }

    fn subscribe(&self, event: EnvEvent, mut handler: EventHandler) -> Subscription {
        let name = Self::event_name(event);
        let pointer = self.pointer.clone();
        let result = listen(&self.window, name, move |event: Event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                pointer.set(Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()))));
            }
            handler();
        });
        result.unwrap_or_else(|err| {
            log::warn!("Could not listen for '{name}': {err}");
            Subscription::noop()
        })
    }
}

/// Attach a passive listener to any DOM target. The returned subscription
/// removes it again.
pub fn listen(
    target: &EventTarget,
    name: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> WebResult<Subscription> {
    let closure: Closure<dyn FnMut(Event)> = Closure::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        name,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;

    let target = target.clone();
    Ok(Subscription::new(move || {
        let _ = target.remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    }))
}

// -----------------------------------------------------------------------------
// 2. RafScheduler
// -----------------------------------------------------------------------------

/// `FrameScheduler` over `requestAnimationFrame` and `setTimeout`.
///
/// Callbacks are handed to JS as one-shot closures; a cancelled callback is
/// never invoked and its closure is left to the JS garbage collector.
///
/// If the browser refuses a request the callback never runs: a `FrameLoop`
/// or an in-flight navigation driven by it stops at that frame, and only a
/// warning is logged.
#[derive(Clone)]
pub struct RafScheduler {
    window: Window,
}

impl RafScheduler {
    pub fn new() -> WebResult<Self> {
        Ok(Self { window: browser_window()? })
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle {
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        match self.window.request_animation_frame(closure.unchecked_ref::<js_sys::Function>()) {
            Ok(id) => FrameHandle(id as u64),
            Err(err) => {
                log::warn!("requestAnimationFrame failed: {:?}", err);
                FrameHandle(0)
            }
        }
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0 as i32);
    }

    fn set_timeout(&self, delay_ms: u32, callback: TimerCallback) -> TimerHandle {
        let closure = Closure::once_into_js(move || callback());
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref::<js_sys::Function>(), delay)
        {
            Ok(id) => TimerHandle(id as u64),
            Err(err) => {
                log::warn!("setTimeout failed: {:?}", err);
                TimerHandle(0)
            }
        }
    }

    fn clear_timeout(&self, handle: TimerHandle) {
        self.window.clear_timeout_with_handle(handle.0 as i32);
    }
}

// -----------------------------------------------------------------------------
// 3. CanvasSurface
// -----------------------------------------------------------------------------

/// `Surface` drawing into a `<canvas>` 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> WebResult<Self> {
        let context = canvas
            .get_context("2d")?
            .ok_or(WebError::NoCanvasContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WebError::NoCanvasContext)?;
        Ok(Self { canvas, context })
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear(&mut self) {
        self.context.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Hsla) {
        self.context.begin_path();
        if self
            .context
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
            .is_err()
        {
            return;
        }
        self.context.set_fill_style_str(&color.to_css());
        self.context.fill();
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Hsla) {
        self.context.begin_path();
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        self.context.set_stroke_style_str(&color.to_css());
        self.context.set_line_width(width);
        self.context.stroke();
    }
}
