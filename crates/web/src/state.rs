// =============================================================================
// Folio Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. App State
// 2. Theme Actions
// 3. Navigation Actions
// 4. Notices
// =============================================================================

use folio_motion::{NavigateOutcome, NavigationController, NavigationState, Theme};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::content;
use crate::services::theme;

/// How long a notice stays on screen.
const NOTICE_MS: u32 = 4000;

// -----------------------------------------------------------------------------
// 1. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Build-time configuration.
    pub config: StoredValue<AppConfig>,

    /// Active color theme.
    pub theme: RwSignal<Theme>,

    /// Snapshot published by the navigation controller.
    pub nav: RwSignal<NavigationState>,

    /// Preloader still on screen.
    pub loading: RwSignal<bool>,

    /// Page content revealed after the preloader.
    pub content_visible: RwSignal<bool>,

    /// Transient message ("Message sent!").
    pub notice: RwSignal<Option<Notice>>,

    /// The controller owned by the section nav, once mounted.
    navigation: StoredValue<Option<NavigationController>, LocalStorage>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let initial_nav = match content::page_sections() {
            Ok(sections) => NavigationState::initial(&sections),
            Err(err) => {
                log::error!("Section list is invalid: {err}");
                NavigationState {
                    active_section_id: String::new(),
                    is_visible: false,
                    is_transitioning: false,
                    transition_direction: Default::default(),
                }
            }
        };

        Self {
            config: StoredValue::new(config),
            theme: RwSignal::new(theme::load_theme()),
            nav: RwSignal::new(initial_nav),
            loading: RwSignal::new(true),
            content_visible: RwSignal::new(false),
            notice: RwSignal::new(None),
            navigation: StoredValue::new_local(None),
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Theme Actions
// -----------------------------------------------------------------------------

impl AppState {
    /// Flip the theme, apply it to the document and persist it.
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        theme::apply_theme(next);
        theme::save_theme(next);
    }
}

// -----------------------------------------------------------------------------
// 3. Navigation Actions
// -----------------------------------------------------------------------------

impl AppState {
    /// Install the controller and mirror its state into `nav`.
    pub fn attach_navigation(&self, controller: NavigationController) {
        let nav = self.nav;
        controller.on_change(move |state| {
            nav.set(state.clone());
        });
        self.navigation.set_value(Some(controller));
    }

    /// Stop and drop the controller.
    pub fn detach_navigation(&self) {
        if let Some(Some(controller)) = self.navigation.try_update_value(Option::take) {
            controller.stop();
        }
    }

    /// Smooth-scroll to a section; no-op until the section nav is mounted.
    pub fn navigate_to(&self, id: &str) -> Option<NavigateOutcome> {
        let controller = self.navigation.try_with_value(Clone::clone).flatten()?;
        Some(controller.navigate_to(id))
    }
}

// -----------------------------------------------------------------------------
// 4. Notices
// -----------------------------------------------------------------------------

impl AppState {
    /// Show a notice and clear it after a few seconds.
    pub fn notify(&self, title: impl Into<String>, body: impl Into<String>) {
        let notice = Notice { title: title.into(), body: body.into() };
        self.notice.set(Some(notice.clone()));

        let slot = self.notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            // Leave a newer notice alone.
            if slot.try_get_untracked().flatten().as_ref() == Some(&notice) {
                slot.set(None);
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }
}
