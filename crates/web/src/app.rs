// =============================================================================
// Folio Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

use crate::config::AppConfig;
use crate::content::PROFILE;
use crate::pages::HomePage;
use crate::services::theme;
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_state = AppState::new(AppConfig::from_build_env());

    // Saved or system theme goes on <html> before the first paint of content.
    theme::apply_theme(app_state.theme.get_untracked());

    provide_context(app_state);

    view! {
        <Title text=format!("{} | {}", PROFILE.name, PROFILE.role) />
        <Meta name="description" content=PROFILE.tagline />
        <HomePage />
    }
}
