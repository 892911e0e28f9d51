// =============================================================================
// Folio Web - Theme Toggle
// =============================================================================

use leptos::prelude::*;

use crate::state::AppState;

/// Round moon/sun button flipping the color theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let is_dark = move || app_state.theme.get().is_dark();

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            on:click=move |_| app_state.toggle_theme()
        >
            <span class=move || if is_dark() { "theme-icon" } else { "theme-icon flipped" }>
                {move || if is_dark() { "☾" } else { "☀" }}
            </span>
        </button>
    }
}
