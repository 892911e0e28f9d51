// =============================================================================
// Folio Motion - Navigation Controller
// =============================================================================
// Table of Contents:
// 1. Navigation State
// 2. Controller (lifecycle, observers)
// 3. Scroll Tracking
// 4. Smooth Scroll Navigation
// =============================================================================
//
// The controller is the single owner of `NavigationState`. Organic scrolling
// updates it through the tracker; `navigate_to` hands the scroll offset to an
// eased transition and suspends the tracker until the transition settles.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use serde::Serialize;

use crate::animator::ScrollTransition;
use crate::config::{NavigationConfig, ScrollAnimationConfig};
use crate::environment::{EnvEvent, Environment};
use crate::lifecycle::Disposers;
use crate::scheduler::{FrameHandle, FrameScheduler, TimerHandle};
use crate::sections::{Direction, SectionList};
use crate::tracker::ScrollTracker;

// -----------------------------------------------------------------------------
// 1. Navigation State
// -----------------------------------------------------------------------------

/// What navigation chrome renders from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NavigationState {
    pub active_section_id: String,
    pub is_visible: bool,
    pub is_transitioning: bool,
    pub transition_direction: Direction,
}

impl NavigationState {
    /// First section active, chrome hidden, idle.
    pub fn initial(sections: &SectionList) -> Self {
        Self {
            active_section_id: sections.first().id.clone(),
            is_visible: false,
            is_transitioning: false,
            transition_direction: Direction::Down,
        }
    }
}

/// Result of a `navigate_to` request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavigateOutcome {
    Started { direction: Direction, duration_ms: f64 },
    /// A transition is in flight; the request was dropped.
    AlreadyTransitioning,
    /// Id is not one of the tracked sections.
    UnknownSection,
    /// The section's anchor element is not in the document.
    MissingTarget,
}

// -----------------------------------------------------------------------------
// 2. Controller
// -----------------------------------------------------------------------------

type Observer = Rc<dyn Fn(&NavigationState)>;

struct Shared {
    env: Rc<dyn Environment>,
    scheduler: Rc<dyn FrameScheduler>,
    sections: SectionList,
    tracker: ScrollTracker,
    animation: ScrollAnimationConfig,
    state: RefCell<NavigationState>,
    transition: RefCell<Option<ScrollTransition>>,
    /// Bumped by `stop()`; frames and timers from an older generation no-op.
    generation: Cell<u64>,
    pending_frame: Cell<Option<FrameHandle>>,
    pending_settle: Cell<Option<TimerHandle>>,
    observers: RefCell<Vec<Observer>>,
    disposers: RefCell<Disposers>,
    started: Cell<bool>,
}

/// Scroll tracker plus smooth-scroll animator over one section list.
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct NavigationController {
    shared: Rc<Shared>,
}

impl NavigationController {
    pub fn new(
        sections: SectionList,
        config: NavigationConfig,
        env: Rc<dyn Environment>,
        scheduler: Rc<dyn FrameScheduler>,
    ) -> Self {
        let state = NavigationState::initial(&sections);
        Self {
            shared: Rc::new(Shared {
                env,
                scheduler,
                tracker: ScrollTracker::new(config.tracker),
                animation: config.animation,
                sections,
                state: RefCell::new(state),
                transition: RefCell::new(None),
                generation: Cell::new(0),
                pending_frame: Cell::new(None),
                pending_settle: Cell::new(None),
                observers: RefCell::new(Vec::new()),
                disposers: RefCell::new(Disposers::new()),
                started: Cell::new(false),
            }),
        }
    }

    pub fn sections(&self) -> &SectionList {
        &self.shared.sections
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> NavigationState {
        self.shared.state.borrow().clone()
    }

    pub fn is_started(&self) -> bool {
        self.shared.started.get()
    }

    /// Fraction of the page reached by the active section.
    pub fn progress(&self) -> f64 {
        let state = self.shared.state.borrow();
        self.shared.sections.progress(&state.active_section_id)
    }

    /// Called with a fresh snapshot after every state change.
    pub fn on_change(&self, observer: impl Fn(&NavigationState) + 'static) {
        self.shared.observers.borrow_mut().push(Rc::new(observer));
    }

    /// Attach the scroll listener and take an initial reading.
    pub fn start(&self) {
        let shared = &self.shared;
        if shared.started.replace(true) {
            return;
        }
        *shared.state.borrow_mut() = NavigationState::initial(&shared.sections);

        let weak = Rc::downgrade(shared);
        let subscription = shared.env.subscribe(
            EnvEvent::Scroll,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    refresh(&shared);
                }
            }),
        );
        shared.disposers.borrow_mut().push(subscription);

        log::debug!("Navigation started over {} sections", shared.sections.len());
        notify(shared);
        refresh(shared);
    }

    /// Detach listeners and abandon any in-flight transition.
    pub fn stop(&self) {
        let shared = &self.shared;
        if !shared.started.replace(false) {
            return;
        }
        shared.generation.set(shared.generation.get() + 1);
        if let Some(handle) = shared.pending_frame.take() {
            shared.scheduler.cancel_frame(handle);
        }
        if let Some(handle) = shared.pending_settle.take() {
            shared.scheduler.clear_timeout(handle);
        }
        shared.transition.borrow_mut().take();
        let was_transitioning = std::mem::replace(&mut shared.state.borrow_mut().is_transitioning, false);

        let disposers = shared.disposers.borrow_mut().take();
        disposers.release_all();
        log::debug!("Navigation stopped");
        if was_transitioning {
            notify(shared);
        }
    }

    /// Re-sample the scroll position (what the scroll listener runs).
    pub fn refresh(&self) {
        refresh(&self.shared);
    }

    /// Smooth-scroll to a section. Dropped while another transition runs.
    pub fn navigate_to(&self, id: &str) -> NavigateOutcome {
        navigate_to(&self.shared, id)
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        // Listeners go with `disposers`; pending callbacks only hold `Weak`.
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        if let Some(handle) = self.pending_settle.take() {
            self.scheduler.clear_timeout(handle);
        }
    }
}

fn notify(shared: &Shared) {
    let snapshot = shared.state.borrow().clone();
    let observers: Vec<Observer> = shared.observers.borrow().clone();
    for observer in observers {
        observer(&snapshot);
    }
}

// -----------------------------------------------------------------------------
// 3. Scroll Tracking
// -----------------------------------------------------------------------------

fn refresh(shared: &Shared) {
    if shared.state.borrow().is_transitioning {
        return;
    }

    let sample = shared.tracker.sample(&shared.sections, shared.env.as_ref());
    let changed = {
        let mut state = shared.state.borrow_mut();
        let mut changed = false;
        if state.is_visible != sample.visible {
            state.is_visible = sample.visible;
            changed = true;
        }
        if let Some(section) = sample.active_index.and_then(|i| shared.sections.get(i)) {
            if state.active_section_id != section.id {
                state.active_section_id.clone_from(&section.id);
                changed = true;
            }
        }
        changed
    };

    if changed {
        notify(shared);
    }
}

// -----------------------------------------------------------------------------
// 4. Smooth Scroll Navigation
// -----------------------------------------------------------------------------

fn navigate_to(shared: &Rc<Shared>, id: &str) -> NavigateOutcome {
    if shared.state.borrow().is_transitioning {
        log::debug!("Navigation to '{id}' dropped: transition in flight");
        return NavigateOutcome::AlreadyTransitioning;
    }
    let Some(target_index) = shared.sections.index_of(id) else {
        log::debug!("Navigation to unknown section '{id}' ignored");
        return NavigateOutcome::UnknownSection;
    };
    let Some(target_offset) = shared.env.section_offset_top(id) else {
        log::debug!("Navigation target '{id}' not found in document");
        return NavigateOutcome::MissingTarget;
    };

    let transition = ScrollTransition::new(
        target_index,
        shared.env.scroll_offset(),
        target_offset,
        shared.env.now_ms(),
        &shared.animation,
    );
    let duration_ms = transition.duration_ms;

    let direction = {
        let mut state = shared.state.borrow_mut();
        let current_index = shared.sections.index_of(&state.active_section_id);
        let direction = Direction::between(current_index, target_index);
        state.is_transitioning = true;
        state.transition_direction = direction;
        direction
    };
    *shared.transition.borrow_mut() = Some(transition);

    log::debug!(
        "Navigating {} to '{id}' over {duration_ms:.0}ms",
        direction.as_str()
    );
    notify(shared);
    schedule_frame(shared, shared.generation.get());

    NavigateOutcome::Started { direction, duration_ms }
}

fn schedule_frame(shared: &Rc<Shared>, generation: u64) {
    let weak: Weak<Shared> = Rc::downgrade(shared);
    let handle = shared.scheduler.request_frame(Box::new(move |timestamp| {
        if let Some(shared) = weak.upgrade() {
            step(&shared, generation, timestamp);
        }
    }));
    shared.pending_frame.set(Some(handle));
}

fn step(shared: &Rc<Shared>, generation: u64, timestamp: f64) {
    shared.pending_frame.set(None);
    if shared.generation.get() != generation {
        return;
    }

    let Some((offset, complete, target_index)) = shared
        .transition
        .borrow()
        .as_ref()
        .map(|t| (t.offset_at(timestamp), t.is_complete(timestamp), t.target_index))
    else {
        return;
    };

    shared.env.scroll_to(offset);

    if !complete {
        schedule_frame(shared, generation);
        return;
    }

    shared.transition.borrow_mut().take();
    if let Some(section) = shared.sections.get(target_index) {
        shared.state.borrow_mut().active_section_id.clone_from(&section.id);
    }
    notify(shared);

    let weak = Rc::downgrade(shared);
    let handle = shared.scheduler.set_timeout(
        shared.animation.settle_delay_ms,
        Box::new(move || {
            let Some(shared) = weak.upgrade() else { return };
            if shared.generation.get() != generation {
                return;
            }
            shared.pending_settle.set(None);
            shared.state.borrow_mut().is_transitioning = false;
            notify(&shared);
            // Organic tracking resumes from wherever the page settled.
            refresh(&shared);
        }),
    );
    shared.pending_settle.set(Some(handle));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FakeEnvironment;
    use crate::scheduler::ManualScheduler;
    use crate::types::Viewport;

    struct Rig {
        env: FakeEnvironment,
        scheduler: Rc<ManualScheduler>,
        nav: NavigationController,
    }

    fn rig() -> Rig {
        let env = FakeEnvironment::new(Viewport::new(1280.0, 600.0));
        env.set_section("a", 0.0);
        env.set_section("b", 800.0);
        env.set_section("c", 1600.0);
        let scheduler = Rc::new(ManualScheduler::new());
        let sections = SectionList::from_pairs(&[("a", "A"), ("b", "B"), ("c", "C")]).unwrap();
        let nav = NavigationController::new(
            sections,
            NavigationConfig::default(),
            Rc::new(env.clone()),
            scheduler.clone(),
        );
        nav.start();
        Rig { env, scheduler, nav }
    }

    /// Drive frames until the transition has settled.
    fn finish(rig: &Rig) {
        let mut t = rig.scheduler.now_ms();
        while rig.nav.state().is_transitioning {
            t += 16.0;
            rig.env.set_now(t);
            rig.scheduler.run_frame(t);
            assert!(t < 10_000.0, "transition never settled");
        }
    }

    #[test]
    fn test_initial_state() {
        let rig = rig();
        let state = rig.nav.state();
        assert_eq!(state.active_section_id, "a");
        assert!(!state.is_visible);
        assert!(!state.is_transitioning);
        assert_eq!(rig.env.listener_count(EnvEvent::Scroll), 1);
    }

    #[test]
    fn test_start_is_idempotent() {
        let rig = rig();
        rig.nav.start();
        assert_eq!(rig.env.listener_count(EnvEvent::Scroll), 1);
    }

    #[test]
    fn test_organic_scroll_tracking() {
        let rig = rig();
        rig.env.scroll(650.0);
        assert_eq!(rig.nav.state().active_section_id, "b");
        assert!(rig.nav.state().is_visible);

        rig.env.scroll(1500.0);
        assert_eq!(rig.nav.state().active_section_id, "c");

        rig.env.scroll(100.0);
        assert_eq!(rig.nav.state().active_section_id, "a");
        assert!(!rig.nav.state().is_visible);
    }

    #[test]
    fn test_observers_only_see_changes() {
        let rig = rig();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        rig.nav.on_change(move |s| sink.borrow_mut().push(s.active_section_id.clone()));

        rig.env.scroll(650.0);
        rig.env.scroll(660.0);
        rig.env.scroll(670.0);

        assert_eq!(*seen.borrow(), vec!["b".to_string()]);
    }

    #[test]
    fn test_navigate_completes_at_target() {
        let rig = rig();
        rig.env.set_now(0.0);

        let outcome = rig.nav.navigate_to("c");
        assert_eq!(
            outcome,
            NavigateOutcome::Started { direction: Direction::Down, duration_ms: 800.0 }
        );
        assert!(rig.nav.state().is_transitioning);
        assert_eq!(rig.nav.state().transition_direction, Direction::Down);

        finish(&rig);

        let state = rig.nav.state();
        assert_eq!(state.active_section_id, "c");
        assert!(!state.is_transitioning);
        assert_eq!(rig.env.scroll_offset(), 1600.0);
        assert_eq!(rig.scheduler.pending_frames(), 0);
    }

    #[test]
    fn test_navigate_up() {
        let rig = rig();
        rig.env.scroll(1500.0);
        rig.env.set_now(0.0);

        let outcome = rig.nav.navigate_to("a");
        assert!(matches!(outcome, NavigateOutcome::Started { direction: Direction::Up, .. }));
        finish(&rig);

        assert_eq!(rig.nav.state().active_section_id, "a");
        assert_eq!(rig.env.scroll_offset(), 0.0);
    }

    #[test]
    fn test_trajectory_is_monotonic_and_eased() {
        let rig = rig();
        rig.env.set_now(0.0);
        rig.nav.navigate_to("b");
        finish(&rig);

        let writes = rig.env.scroll_writes();
        assert!(writes.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(*writes.last().unwrap(), 800.0);
        // Ease-out covers more ground in the first half than the second.
        let halfway = writes[writes.len() / 2];
        assert!(halfway > 400.0);
    }

    #[test]
    fn test_request_during_transition_is_dropped() {
        let rig = rig();
        rig.env.set_now(0.0);
        rig.nav.navigate_to("c");
        rig.scheduler.run_frame(16.0);
        let before = rig.nav.state();

        assert_eq!(rig.nav.navigate_to("b"), NavigateOutcome::AlreadyTransitioning);
        assert_eq!(rig.nav.navigate_to("c"), NavigateOutcome::AlreadyTransitioning);
        assert_eq!(rig.nav.state(), before);

        finish(&rig);
        assert_eq!(rig.nav.state().active_section_id, "c");
    }

    #[test]
    fn test_tracker_suspended_during_transition() {
        let rig = rig();
        rig.env.set_now(0.0);
        rig.nav.navigate_to("c");

        // Mid-flight scroll events must not move the active section.
        rig.env.set_now(200.0);
        rig.scheduler.run_frame(200.0);
        rig.env.emit(EnvEvent::Scroll);
        assert_eq!(rig.nav.state().active_section_id, "a");

        finish(&rig);
        assert_eq!(rig.nav.state().active_section_id, "c");
    }

    #[test]
    fn test_settle_delay_holds_transition_flag() {
        let rig = rig();
        rig.env.set_now(0.0);
        rig.nav.navigate_to("b");

        // 600ms minimum duration; arrive exactly at 600.
        rig.scheduler.run_frame(600.0);
        let state = rig.nav.state();
        assert_eq!(state.active_section_id, "b");
        assert!(state.is_transitioning);

        rig.scheduler.advance_to(699.0, 1000.0);
        assert!(rig.nav.state().is_transitioning);
        rig.scheduler.advance_to(700.0, 1000.0);
        assert!(!rig.nav.state().is_transitioning);
    }

    #[test]
    fn test_tracker_resumes_after_settle() {
        let rig = rig();
        rig.env.set_now(0.0);
        rig.nav.navigate_to("c");
        rig.scheduler.run_frame(800.0);

        // The page moved after arrival (e.g. layout shift) before settling.
        rig.env.set_scroll_offset(700.0);
        rig.scheduler.advance_to(900.0, 1000.0);

        assert!(!rig.nav.state().is_transitioning);
        assert_eq!(rig.nav.state().active_section_id, "b");
    }

    #[test]
    fn test_unknown_and_missing_targets_are_noops() {
        let rig = rig();
        assert_eq!(rig.nav.navigate_to("nope"), NavigateOutcome::UnknownSection);

        rig.env.remove_section("b");
        assert_eq!(rig.nav.navigate_to("b"), NavigateOutcome::MissingTarget);

        assert!(!rig.nav.state().is_transitioning);
        assert_eq!(rig.scheduler.pending_frames(), 0);
    }

    #[test]
    fn test_stop_detaches_and_abandons_transition() {
        let rig = rig();
        rig.env.set_now(0.0);
        rig.nav.navigate_to("c");
        rig.scheduler.run_frame(16.0);
        let writes = rig.env.scroll_writes().len();

        rig.nav.stop();
        rig.scheduler.advance_to(2000.0, 16.0);

        assert_eq!(rig.env.scroll_writes().len(), writes);
        assert_eq!(rig.env.listener_count(EnvEvent::Scroll), 0);
        assert!(!rig.nav.state().is_transitioning);
        assert!(!rig.nav.is_started());
    }

    #[test]
    fn test_stop_mid_transition_notifies_observers() {
        let rig = rig();
        let last = Rc::new(Cell::new(None::<bool>));
        let sink = last.clone();
        rig.nav.on_change(move |s| sink.set(Some(s.is_transitioning)));

        rig.env.set_now(0.0);
        rig.nav.navigate_to("c");
        assert_eq!(last.get(), Some(true));

        rig.nav.stop();
        assert_eq!(last.get(), Some(false));
    }

    #[test]
    fn test_dropping_started_controller_detaches() {
        let rig = rig();
        rig.env.set_now(0.0);
        rig.nav.navigate_to("b");
        let Rig { env, scheduler, nav } = rig;
        assert_eq!(env.listener_count(EnvEvent::Scroll), 1);

        drop(nav);

        assert_eq!(env.listener_count(EnvEvent::Scroll), 0);
        assert_eq!(scheduler.pending_frames(), 0);
        env.scroll(900.0);
    }

    #[test]
    fn test_zero_length_navigation_settles() {
        let env = FakeEnvironment::new(Viewport::new(1280.0, 600.0));
        env.set_section("a", 0.0);
        env.set_section("b", 800.0);
        let scheduler = Rc::new(ManualScheduler::new());
        let mut config = NavigationConfig::default();
        config.animation.min_duration_ms = 0.0;
        let nav = NavigationController::new(
            SectionList::from_pairs(&[("a", "A"), ("b", "B")]).unwrap(),
            config,
            Rc::new(env.clone()),
            scheduler.clone(),
        );
        nav.start();
        env.set_scroll_offset(800.0);
        env.set_now(0.0);

        assert!(matches!(nav.navigate_to("b"), NavigateOutcome::Started { duration_ms, .. } if duration_ms == 0.0));
        scheduler.advance_to(500.0, 16.0);

        assert!(!nav.state().is_transitioning);
        assert_eq!(nav.state().active_section_id, "b");
        assert_eq!(scheduler.pending_frames(), 0);
    }

    #[test]
    fn test_progress() {
        let rig = rig();
        assert_eq!(rig.nav.progress(), 1.0 / 3.0);
        rig.env.scroll(1500.0);
        assert_eq!(rig.nav.progress(), 1.0);
    }
}
