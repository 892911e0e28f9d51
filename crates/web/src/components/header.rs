// =============================================================================
// Folio Web - Header Bar
// =============================================================================
// Fixed top bar: logo, section links, theme toggle, "Hire Me", and a mobile
// drop-down menu. The bar tracks its own active link with a fixed 150px probe
// and turns opaque once the page scrolls past 50px.
// =============================================================================

use std::rc::Rc;

use folio_motion::environment::{EnvEvent, Environment};
use folio_motion::{ScrollTracker, SectionList, Subscription};
use leptos::prelude::*;

use crate::components::{Button, ThemeToggle};
use crate::content::PROFILE;
use crate::services::BrowserEnvironment;
use crate::state::AppState;
use crate::utils::class_if;

/// Fixed header with section links.
#[component]
pub fn Header(sections: SectionList) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let scrolled = RwSignal::new(false);
    let active = RwSignal::new(None::<String>);
    let menu_open = RwSignal::new(false);
    let listener: StoredValue<Option<Subscription>, LocalStorage> = StoredValue::new_local(None);

    let tracked_sections = sections.clone();
    Effect::new(move |_| {
        if listener.with_value(Option::is_some) {
            return;
        }
        let env = match BrowserEnvironment::new() {
            Ok(env) => Rc::new(env),
            Err(err) => {
                log::warn!("Header tracking disabled: {err}");
                return;
            }
        };
        let tracker = ScrollTracker::new(app_state.config.with_value(|c| c.motion.header.clone()));
        let sections = tracked_sections.clone();
        let sampler_env = env.clone();
        let sample = move || {
            let sample = tracker.sample(&sections, sampler_env.as_ref());
            if scrolled.get_untracked() != sample.visible {
                scrolled.set(sample.visible);
            }
            if let Some(section) = sample.active_index.and_then(|i| sections.get(i)) {
                if active.with_untracked(|a| a.as_deref() != Some(section.id.as_str())) {
                    active.set(Some(section.id.clone()));
                }
            }
        };
        sample();
        listener.set_value(Some(env.subscribe(EnvEvent::Scroll, Box::new(sample))));
    });

    on_cleanup(move || {
        if let Some(Some(subscription)) = listener.try_update_value(Option::take) {
            subscription.dispose();
        }
    });

    let go = move |id: &str| {
        menu_open.set(false);
        app_state.navigate_to(id);
    };

    let links = move |mobile: bool| {
        sections
            .iter()
            .map(|section| {
                let id = section.id.clone();
                let click_id = section.id.clone();
                let base = if mobile { "mobile-nav-link" } else { "header-link" };
                view! {
                    <button
                        class=move || class_if(base, "active", active.with(|a| a.as_deref() == Some(id.as_str())))
                        on:click=move |_| go(&click_id)
                    >
                        {section.label.clone()}
                    </button>
                }
            })
            .collect_view()
    };
    let desktop_links = links(false);

    view! {
        <header class=move || class_if("site-header", "scrolled", scrolled.get())>
            <nav class="header-inner">
                <a
                    href="#hero"
                    class="header-logo"
                    on:click=move |e| {
                        e.prevent_default();
                        go("hero");
                    }
                >
                    {PROFILE.short_name}
                    <span class="logo-dot">"."</span>
                </a>

                <div class="header-links desktop-only">{desktop_links}</div>

                <div class="header-actions">
                    <ThemeToggle />
                    <div class="desktop-only">
                        <Button label="Hire Me" on_click=Callback::new(move |_| go("contact")) />
                    </div>
                    <button
                        class="hamburger-btn mobile-only"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>
        </header>

        <Show when=move || menu_open.get()>
            <div class="mobile-menu mobile-only">
                <nav class="mobile-menu-links">
                    {links(true)}
                    <Button label="Hire Me" on_click=Callback::new(move |_| go("contact")) />
                </nav>
            </div>
        </Show>
    }
}
