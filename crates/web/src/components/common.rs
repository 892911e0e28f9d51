// =============================================================================
// Folio Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Button
// 2. Section Heading
// 3. Notice Toast
// =============================================================================

use leptos::prelude::*;

use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. Button
// -----------------------------------------------------------------------------

/// Button variant styles.
#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// Reusable button component.
#[component]
pub fn Button(
    #[prop(into)] label: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] button_type: Option<String>,
    #[prop(optional, into)] loading: MaybeProp<bool>,
    #[prop(optional, into)] loading_label: Option<String>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let is_loading = move || loading.get().unwrap_or(false);
    let busy_label = loading_label.unwrap_or_else(|| label.clone());

    view! {
        <button
            type=button_type.unwrap_or_else(|| "button".to_string())
            class=variant.class()
            disabled=is_loading
            on:click=move |_| {
                if let Some(callback) = &on_click {
                    callback.run(());
                }
            }
        >
            {move || if is_loading() {
                view! {
                    <span class="spinner-small"></span>
                    <span>{busy_label.clone()}</span>
                }.into_any()
            } else {
                view! { <span>{label.clone()}</span> }.into_any()
            }}
        </button>
    }
}

// -----------------------------------------------------------------------------
// 2. Section Heading
// -----------------------------------------------------------------------------

/// Eyebrow tag, title and optional lead paragraph.
#[component]
pub fn SectionHeading(
    #[prop(into)] tag: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] lead: Option<String>,
) -> impl IntoView {
    view! {
        <div class="section-heading">
            <span class="section-tag">{tag}</span>
            <h2 class="section-title">{title}</h2>
            {lead.map(|l| view! { <p class="section-lead">{l}</p> })}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Notice Toast
// -----------------------------------------------------------------------------

/// Shows `AppState::notice` until it expires or is dismissed.
#[component]
pub fn NoticeToast() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        {move || app_state.notice.get().map(|notice| view! {
            <div class="toast" role="status">
                <div class="toast-text">
                    <strong class="toast-title">{notice.title}</strong>
                    <p class="toast-body">{notice.body}</p>
                </div>
                <button
                    class="toast-dismiss"
                    aria-label="Dismiss"
                    on:click=move |_| app_state.dismiss_notice()
                >
                    "✕"
                </button>
            </div>
        })}
    }
}
