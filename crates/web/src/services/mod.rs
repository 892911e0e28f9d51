// =============================================================================
// Folio Web - Browser Services
// =============================================================================

pub mod browser;
pub mod theme;

pub use browser::{listen, BrowserEnvironment, CanvasSurface, RafScheduler};
