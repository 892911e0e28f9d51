// =============================================================================
// Folio Web - Pages
// =============================================================================

pub mod home;

pub use home::HomePage;
