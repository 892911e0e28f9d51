// =============================================================================
// Folio Web - Section Navigation
// =============================================================================
// Table of Contents:
// 1. SectionNav (controller lifecycle)
// 2. Transition Overlay
// 3. Dot Rail
// =============================================================================
//
// Owns the page's `NavigationController`. The rail shows one dot per section,
// a progress line, and a sweep overlay while a smooth scroll is running.

use std::rc::Rc;

use folio_motion::{NavigationController, SectionList};
use leptos::prelude::*;

use crate::services::{BrowserEnvironment, RafScheduler};
use crate::state::AppState;
use crate::utils::{class_if, css_percent};

// -----------------------------------------------------------------------------
// 1. SectionNav
// -----------------------------------------------------------------------------

/// Fixed dot navigation on the right edge.
#[component]
pub fn SectionNav(sections: SectionList) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    // Sections are in the DOM once this effect runs.
    let controller_sections = sections.clone();
    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        match (BrowserEnvironment::new(), RafScheduler::new()) {
            (Ok(env), Ok(scheduler)) => {
                let config = app_state.config.with_value(|c| c.motion.navigation.clone());
                let controller = NavigationController::new(
                    controller_sections.clone(),
                    config,
                    Rc::new(env),
                    Rc::new(scheduler),
                );
                app_state.attach_navigation(controller.clone());
                controller.start();
                true
            }
            (Err(err), _) | (_, Err(err)) => {
                log::warn!("Section navigation disabled: {err}");
                false
            }
        }
    });

    on_cleanup(move || app_state.detach_navigation());

    view! {
        <TransitionOverlay />
        <DotRail sections=sections />
    }
}

// -----------------------------------------------------------------------------
// 2. Transition Overlay
// -----------------------------------------------------------------------------

#[component]
fn TransitionOverlay() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let nav = app_state.nav;

    view! {
        <Show when=move || nav.with(|s| s.is_transitioning)>
            <div class=move || {
                format!("transition-overlay sweep-{}", nav.with(|s| s.transition_direction.as_str()))
            }>
                <div class="transition-sweep"></div>
                <div class="transition-vignette"></div>
            </div>
        </Show>
    }
}

// -----------------------------------------------------------------------------
// 3. Dot Rail
// -----------------------------------------------------------------------------

#[component]
fn DotRail(sections: SectionList) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let nav = app_state.nav;
    let transitioning = move || nav.with(|s| s.is_transitioning);

    let progress_sections = sections.clone();
    let progress = move || nav.with(|s| progress_sections.progress(&s.active_section_id));

    let dots = sections
        .iter()
        .map(|section| {
            let id = section.id.clone();
            let click_id = section.id.clone();
            let label = section.label.clone();
            let aria_label = section.label.clone();
            let is_active = move || nav.with(|s| s.active_section_id == id);
            let dot_active = is_active.clone();

            view! {
                <button
                    class="section-nav-item"
                    aria-label=aria_label
                    disabled=transitioning
                    on:click=move |_| {
                        app_state.navigate_to(&click_id);
                    }
                >
                    <span class=move || class_if("section-nav-label", "active", is_active())>
                        {label}
                    </span>
                    <span class=move || class_if("section-nav-dot", "active", dot_active())></span>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav
            class=move || class_if("section-nav", "visible", nav.with(|s| s.is_visible))
            aria-label="Section navigation"
        >
            {dots}
            <div class="section-nav-track">
                <div class="section-nav-progress" style:height=move || css_percent(progress())></div>
            </div>
        </nav>
    }
}
