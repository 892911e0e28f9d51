// =============================================================================
// Folio Web - Footer
// =============================================================================

use leptos::prelude::*;

use crate::content::{PROFILE, SOCIAL_LINKS};
use crate::state::AppState;

/// Site footer with social links and a back-to-top button.
#[component]
pub fn Footer() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <footer class="site-footer">
            <div class="footer-main">
                <div class="footer-brand">
                    <span class="footer-logo">{PROFILE.short_name}<span class="logo-dot">"."</span></span>
                    <p class="footer-tagline">{PROFILE.role}</p>
                </div>
                <div class="footer-social">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| view! {
                            <a href=link.href target="_blank" rel="noopener noreferrer" class="footer-link">
                                {link.label}
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="footer-bottom">
                <p class="footer-copyright">{format!("© {}. Built with Rust and Leptos.", PROFILE.name)}</p>
                <button
                    class="back-to-top"
                    aria-label="Back to top"
                    on:click=move |_| {
                        app_state.navigate_to("hero");
                    }
                >
                    "↑"
                </button>
            </div>
        </footer>
    }
}
