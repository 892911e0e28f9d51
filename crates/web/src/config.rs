// =============================================================================
// Folio Web - Build-time Configuration
// =============================================================================
// Table of Contents:
// 1. App Config
// 2. Tests
// =============================================================================
//
// Both knobs are baked in at compile time:
//   FOLIO_ENV            "development" turns on debug logging
//   FOLIO_MOTION_CONFIG  JSON override for `MotionConfig` (partial is fine)

use folio_motion::MotionConfig;

use crate::error::WebResult;

// -----------------------------------------------------------------------------
// 1. App Config
// -----------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Deployment environment name.
    pub environment: String,

    /// Motion tuning: navigation timing, header tracking, particles.
    pub motion: MotionConfig,
}

impl AppConfig {
    /// Read the values captured by the compiler.
    ///
    /// A bad motion override is logged and replaced with the defaults.
    pub fn from_build_env() -> Self {
        let environment = option_env!("FOLIO_ENV");
        match Self::from_parts(environment, option_env!("FOLIO_MOTION_CONFIG")) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring FOLIO_MOTION_CONFIG: {err}");
                Self::from_parts(environment, None).unwrap_or_default()
            }
        }
    }

    pub fn from_parts(environment: Option<&str>, motion_json: Option<&str>) -> WebResult<Self> {
        let motion = match motion_json.map(str::trim).filter(|json| !json.is_empty()) {
            Some(json) => MotionConfig::from_json(json)?,
            None => MotionConfig::default(),
        };
        Ok(Self {
            environment: environment.unwrap_or("production").to_string(),
            motion,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn log_level(&self) -> log::Level {
        if self.is_development() {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "production".to_string(),
            motion: MotionConfig::default(),
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Tests
// -----------------------------------------------------------------------------
