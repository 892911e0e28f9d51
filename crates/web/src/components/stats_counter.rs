// =============================================================================
// Folio Web - Stats Counter
// =============================================================================
// Counters start once navigation reaches the stats section and climb to their
// targets over two seconds.
// =============================================================================

use folio_motion::CountUp;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::content::{PAGE_SECTIONS, STATS};
use crate::state::AppState;
use crate::utils::class_if;

const SECTION_ID: &str = "stats";

fn section_index(id: &str) -> Option<usize> {
    PAGE_SECTIONS.iter().position(|(section, _)| *section == id)
}

/// Grid of count-up figures.
#[component]
pub fn StatsCounter() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let started = RwSignal::new(false);

    Effect::new(move |_| {
        if started.get_untracked() {
            return;
        }
        let reached = app_state.nav.with(|s| {
            matches!(
                (section_index(&s.active_section_id), section_index(SECTION_ID)),
                (Some(active), Some(stats)) if active >= stats
            )
        });
        if reached {
            started.set(true);
        }
    });

    let cards = STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="stat-card">
                    <Counter target=stat.value suffix=stat.suffix started=started />
                    <p class="stat-label">{stat.label}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=SECTION_ID class=move || class_if("section stats-section", "in-view", started.get())>
            <div class="container stats-grid">{cards}</div>
        </section>
    }
}

#[component]
fn Counter(target: u32, suffix: &'static str, started: RwSignal<bool>) -> impl IntoView {
    let display = RwSignal::new(0u32);

    Effect::new(move |running: Option<bool>| {
        if running == Some(true) || !started.get() {
            return running.unwrap_or(false);
        }
        spawn_local(async move {
            let mut counter = CountUp::new(target);
            while !counter.is_finished() {
                TimeoutFuture::new(CountUp::STEP_MS).await;
                // Unmounted: stop ticking.
                if display.try_set(counter.tick()).is_some() {
                    break;
                }
            }
        });
        true
    });

    view! {
        <span class="stat-value">
            {move || display.get()}
            <span class="stat-suffix">{suffix}</span>
        </span>
    }
}
