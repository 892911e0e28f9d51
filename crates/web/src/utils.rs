// =============================================================================
// Folio Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. Format Utilities
// 2. Validation Utilities
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Format Utilities
// -----------------------------------------------------------------------------

/// Format a 0..=1 fraction as a CSS percentage.
pub fn css_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction.clamp(0.0, 1.0) * 100.0)
}

/// Class list with an extra class when `on`.
pub fn class_if(base: &str, extra: &str, on: bool) -> String {
    if on {
        format!("{base} {extra}")
    } else {
        base.to_string()
    }
}

// -----------------------------------------------------------------------------
// 2. Validation Utilities
// -----------------------------------------------------------------------------

/// Validate an email address (basic check).
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}
