// =============================================================================
// Folio Web - Theme Persistence
// =============================================================================
// The saved preference lives in localStorage as a bare "dark" / "light"
// string; the `dark` class on <html> switches the palette.
// =============================================================================

use folio_motion::theme::THEME_STORAGE_KEY;
use folio_motion::Theme;
use gloo_storage::Storage;

/// Saved preference, else the system color scheme.
pub fn load_theme() -> Theme {
    let saved = gloo_storage::LocalStorage::raw()
        .get_item(THEME_STORAGE_KEY)
        .ok()
        .flatten();
    Theme::resolve(saved.as_deref(), prefers_dark())
}

pub fn save_theme(theme: Theme) {
    if let Err(err) = gloo_storage::LocalStorage::raw().set_item(THEME_STORAGE_KEY, theme.as_str()) {
        log::warn!("Could not persist theme: {:?}", err);
    }
}

/// Toggle the `dark` class on the document element.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(err) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        log::warn!("Could not apply theme: {:?}", err);
    }
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(true)
}
