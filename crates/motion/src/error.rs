// =============================================================================
// Folio Motion - Error Types
// =============================================================================

use thiserror::Error;

/// Errors raised while building the motion core.
///
/// Runtime conditions (navigating to a missing section, a zero-sized canvas)
/// are not errors: they are logged and skipped.
#[derive(Error, Debug)]
pub enum MotionError {
    #[error("Section list is empty")]
    EmptySections,

    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MotionError>;
