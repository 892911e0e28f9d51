// =============================================================================
// Folio Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Common & Form Components
// 2. Page Chrome (header, section nav, footer)
// 3. Motion Components (backdrop, reveal, cursor, counters, preloader)
// =============================================================================

pub mod common;
pub mod contact_form;
pub mod custom_cursor;
pub mod footer;
pub mod forms;
pub mod header;
pub mod particle_background;
pub mod preloader;
pub mod scroll_reveal;
pub mod section_nav;
pub mod stats_counter;
pub mod theme_toggle;

pub use common::{Button, ButtonVariant, NoticeToast, SectionHeading};
pub use contact_form::ContactForm;
pub use custom_cursor::CustomCursor;
pub use footer::Footer;
pub use forms::{TextArea, TextInput};
pub use header::Header;
pub use particle_background::ParticleBackground;
pub use preloader::Preloader;
pub use scroll_reveal::ScrollReveal;
pub use section_nav::SectionNav;
pub use stats_counter::StatsCounter;
pub use theme_toggle::ThemeToggle;
