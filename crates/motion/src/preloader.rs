// =============================================================================
// Folio Motion - Preloader Progress
// =============================================================================

/// What a preloader tick produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloadTick {
    /// Progress moved to this percentage.
    Advanced(u8),
    /// Progress sat at 100 for a tick; stop the interval and schedule completion.
    Finished,
    /// Already finished; nothing to do.
    Idle,
}

/// Fake asset-loading progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreloadProgress {
    percent: u8,
    finished: bool,
}

impl Default for PreloadProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl PreloadProgress {
    pub const TICK_MS: u32 = 25;
    pub const STEP: u8 = 2;
    /// Delay between reaching 100% and reporting completion.
    pub const COMPLETE_DELAY_MS: u32 = 600;
    /// Delay between completion and revealing page content.
    pub const REVEAL_DELAY_MS: u32 = 100;

    pub const fn new() -> Self {
        Self { percent: 0, finished: false }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self) -> PreloadTick {
        if self.finished {
            return PreloadTick::Idle;
        }
        if self.percent >= 100 {
            self.finished = true;
            return PreloadTick::Finished;
        }
        self.percent = (self.percent + Self::STEP).min(100);
        PreloadTick::Advanced(self.percent)
    }
}
