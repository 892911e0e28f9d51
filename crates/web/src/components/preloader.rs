// =============================================================================
// Folio Web - Preloader
// =============================================================================

use folio_motion::{PreloadProgress, PreloadTick};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::content::PROFILE;
use crate::state::AppState;
use crate::utils::css_percent;

/// Full-screen loader shown until the progress bar fills.
///
/// On completion it clears `AppState::loading`, then reveals the page
/// content a beat later.
#[component]
pub fn Preloader() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let percent = RwSignal::new(0u8);

    Effect::new(move |_| {
        spawn_local(async move {
            let mut progress = PreloadProgress::new();
            loop {
                TimeoutFuture::new(PreloadProgress::TICK_MS).await;
                match progress.tick() {
                    PreloadTick::Advanced(value) => {
                        if percent.try_set(value).is_some() {
                            return;
                        }
                    }
                    PreloadTick::Finished | PreloadTick::Idle => break,
                }
            }
            TimeoutFuture::new(PreloadProgress::COMPLETE_DELAY_MS).await;
            app_state.loading.set(false);
            log::debug!("Preloader finished");
            TimeoutFuture::new(PreloadProgress::REVEAL_DELAY_MS).await;
            app_state.content_visible.set(true);
        });
    });

    view! {
        <div class="preloader">
            <div class="preloader-grid"></div>
            <div class="preloader-brand">
                <h1 class="preloader-name">{PROFILE.name}</h1>
                <p class="preloader-role">{PROFILE.role}</p>
            </div>
            <div class="preloader-bar">
                <div class="preloader-track">
                    <div class="preloader-fill" style:width=move || css_percent(f64::from(percent.get()) / 100.0)></div>
                </div>
                <div class="preloader-meta">
                    <span class="preloader-caption">"Loading assets..."</span>
                    <span class="preloader-percent">{move || format!("{}%", percent.get())}</span>
                </div>
            </div>
        </div>
    }
}
