// =============================================================================
// Folio Motion - Environment Abstraction
// =============================================================================
// Table of Contents:
// 1. Environment Trait
// 2. Fake Environment (tests, headless runs)
// =============================================================================
//
// The viewport, scroll offset, pointer and element geometry are process-wide
// state in a browser. The core never reads them ambiently: every component is
// handed an `Environment` and goes through it.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::lifecycle::Subscription;
use crate::types::{Point, Viewport};

// -----------------------------------------------------------------------------
// 1. Environment Trait
// -----------------------------------------------------------------------------

/// Asynchronous notifications the core listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnvEvent {
    Scroll,
    Resize,
    PointerMove,
}

pub type EventHandler = Box<dyn FnMut()>;

/// Everything the motion core reads from or writes to its host.
pub trait Environment {
    /// Inner viewport dimensions.
    fn viewport(&self) -> Viewport;

    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Jump the vertical scroll offset (no native smoothing).
    fn scroll_to(&self, offset: f64);

    /// Last pointer position seen, if the pointer ever moved.
    fn pointer(&self) -> Option<Point>;

    /// Document offset-top of the element with this id.
    fn section_offset_top(&self, id: &str) -> Option<f64>;

    /// Monotonic clock in milliseconds, same timebase as frame timestamps.
    fn now_ms(&self) -> f64;

    /// Register a handler; disposing the subscription detaches it.
    fn subscribe(&self, event: EnvEvent, handler: EventHandler) -> Subscription;
}

// -----------------------------------------------------------------------------
// 2. Fake Environment
// -----------------------------------------------------------------------------

type SharedHandler = Rc<RefCell<EventHandler>>;

#[derive(Default)]
struct FakeState {
    viewport: Cell<Viewport>,
    scroll_offset: Cell<f64>,
    pointer: Cell<Option<Point>>,
    now_ms: Cell<f64>,
    sections: RefCell<HashMap<String, f64>>,
    listeners: RefCell<Vec<(u64, EnvEvent, SharedHandler)>>,
    next_listener: Cell<u64>,
    scroll_writes: RefCell<Vec<f64>>,
}

/// In-memory environment with manually driven events.
///
/// Cloning shares the same state, so a test can keep one handle while the
/// component under test owns another.
#[derive(Clone, Default)]
pub struct FakeEnvironment {
    state: Rc<FakeState>,
}

impl FakeEnvironment {
    pub fn new(viewport: Viewport) -> Self {
        let env = Self::default();
        env.state.viewport.set(viewport);
        env
    }

    /// Place a section anchor at a document offset.
    pub fn set_section(&self, id: &str, offset_top: f64) {
        self.state.sections.borrow_mut().insert(id.to_string(), offset_top);
    }

    pub fn remove_section(&self, id: &str) {
        self.state.sections.borrow_mut().remove(id);
    }

    pub fn set_now(&self, now_ms: f64) {
        self.state.now_ms.set(now_ms);
    }

    /// Set the scroll offset without notifying listeners.
    pub fn set_scroll_offset(&self, offset: f64) {
        self.state.scroll_offset.set(offset);
    }

    /// User scroll: set the offset and fire `Scroll`.
    pub fn scroll(&self, offset: f64) {
        self.set_scroll_offset(offset);
        self.emit(EnvEvent::Scroll);
    }

    /// Set the viewport without notifying listeners.
    pub fn set_viewport(&self, width: f64, height: f64) {
        self.state.viewport.set(Viewport::new(width, height));
    }

    /// Window resize: set the viewport and fire `Resize`.
    pub fn resize(&self, width: f64, height: f64) {
        self.set_viewport(width, height);
        self.emit(EnvEvent::Resize);
    }

    /// Pointer move: record the position and fire `PointerMove`.
    pub fn move_pointer(&self, x: f64, y: f64) {
        self.state.pointer.set(Some(Point::new(x, y)));
        self.emit(EnvEvent::PointerMove);
    }

    /// Invoke every handler registered for `event`.
    ///
    /// A handler that is already running (re-entrant emit) is skipped.
    pub fn emit(&self, event: EnvEvent) {
        let handlers: Vec<SharedHandler> = self
            .state
            .listeners
            .borrow()
            .iter()
            .filter(|(_, e, _)| *e == event)
            .map(|(_, _, handler)| handler.clone())
            .collect();

        for handler in handlers {
            if let Ok(mut handler) = handler.try_borrow_mut() {
                (handler)();
            }
        }
    }

    pub fn listener_count(&self, event: EnvEvent) -> usize {
        self.state
            .listeners
            .borrow()
            .iter()
            .filter(|(_, e, _)| *e == event)
            .count()
    }

    /// Every offset written through `scroll_to`, oldest first.
    pub fn scroll_writes(&self) -> Vec<f64> {
        self.state.scroll_writes.borrow().clone()
    }
}

impl Environment for FakeEnvironment {
    fn viewport(&self) -> Viewport {
        self.state.viewport.get()
    }

    fn scroll_offset(&self) -> f64 {
        self.state.scroll_offset.get()
    }

    fn scroll_to(&self, offset: f64) {
        self.state.scroll_offset.set(offset);
        self.state.scroll_writes.borrow_mut().push(offset);
    }

    fn pointer(&self) -> Option<Point> {
        self.state.pointer.get()
    }

    fn section_offset_top(&self, id: &str) -> Option<f64> {
        self.state.sections.borrow().get(id).copied()
    }

    fn now_ms(&self) -> f64 {
        self.state.now_ms.get()
    }

    fn subscribe(&self, event: EnvEvent, handler: EventHandler) -> Subscription {
        let id = self.state.next_listener.get();
        self.state.next_listener.set(id + 1);
        self.state
            .listeners
            .borrow_mut()
            .push((id, event, Rc::new(RefCell::new(handler))));

        let state = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = state.upgrade() {
                state.listeners.borrow_mut().retain(|(l, _, _)| *l != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_emit_dispose() {
        let env = FakeEnvironment::new(Viewport::new(1280.0, 720.0));
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        let sub = env.subscribe(EnvEvent::Scroll, Box::new(move || counter.set(counter.get() + 1)));
        assert_eq!(env.listener_count(EnvEvent::Scroll), 1);

        env.scroll(300.0);
        env.emit(EnvEvent::Resize);
        assert_eq!(hits.get(), 1);
        assert_eq!(env.scroll_offset(), 300.0);

        sub.dispose();
        env.scroll(400.0);
        assert_eq!(hits.get(), 1);
        assert_eq!(env.listener_count(EnvEvent::Scroll), 0);
    }

    #[test]
    fn test_scroll_to_records_writes() {
        let env = FakeEnvironment::new(Viewport::new(800.0, 600.0));
        env.scroll_to(10.0);
        env.scroll_to(20.0);
        assert_eq!(env.scroll_writes(), vec![10.0, 20.0]);
        assert_eq!(env.scroll_offset(), 20.0);
    }

    #[test]
    fn test_pointer_and_sections() {
        let env = FakeEnvironment::new(Viewport::new(800.0, 600.0));
        assert_eq!(env.pointer(), None);
        env.move_pointer(5.0, 6.0);
        assert_eq!(env.pointer(), Some(Point::new(5.0, 6.0)));

        env.set_section("about", 800.0);
        assert_eq!(env.section_offset_top("about"), Some(800.0));
        env.remove_section("about");
        assert_eq!(env.section_offset_top("about"), None);
    }
}
