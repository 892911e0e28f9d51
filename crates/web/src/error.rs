// =============================================================================
// Folio Web - Error Types
// =============================================================================

use folio_motion::MotionError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the page to the browser.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("canvas has no 2D rendering context")]
    NoCanvasContext,

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error(transparent)]
    Motion(#[from] MotionError),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type WebResult<T> = Result<T, WebError>;
