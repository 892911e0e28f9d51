// =============================================================================
// Folio Web - WASM Entry Point
// =============================================================================
// Trunk compiles this binary and injects it into index.html.
// =============================================================================

use folio_web::{App, AppConfig};

fn main() {
    console_error_panic_hook::set_once();

    // Ignore if the logger was already set up by `mount`.
    let _ = console_log::init_with_level(AppConfig::from_build_env().log_level());

    log::info!("Starting Folio web...");

    leptos::mount::mount_to_body(App);
}
