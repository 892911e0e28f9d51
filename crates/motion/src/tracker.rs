// =============================================================================
// Folio Motion - Scroll Tracker
// =============================================================================
// Maps a scroll offset to the "active" section: the last section, in page
// order, whose top edge is at or above the probe line. Runs on every scroll
// event, so the scan is linear and allocation-free.
// =============================================================================

use crate::config::TrackerConfig;
use crate::environment::Environment;
use crate::sections::SectionList;

/// One tracker reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerSample {
    /// Index into the section list; `None` when no section reached the probe.
    pub active_index: Option<usize>,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTracker {
    config: TrackerConfig,
}

impl ScrollTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Whether navigation chrome should show at this offset.
    pub fn is_visible(&self, scroll_offset: f64) -> bool {
        scroll_offset > self.config.visibility_threshold
    }

    /// Scan last to first; sections whose anchor is missing are skipped.
    pub fn active_index(
        &self,
        sections: &SectionList,
        scroll_offset: f64,
        viewport_height: f64,
        offset_top: impl Fn(&str) -> Option<f64>,
    ) -> Option<usize> {
        let probe = self.config.probe.position(scroll_offset, viewport_height);
        sections
            .iter()
            .enumerate()
            .rev()
            .find(|(_, section)| offset_top(&section.id).is_some_and(|top| top <= probe))
            .map(|(index, _)| index)
    }

    /// Read scroll offset, viewport and section geometry from `env`.
    pub fn sample(&self, sections: &SectionList, env: &dyn Environment) -> TrackerSample {
        let scroll_offset = env.scroll_offset();
        let viewport = env.viewport();
        TrackerSample {
            active_index: self.active_index(sections, scroll_offset, viewport.height, |id| {
                env.section_offset_top(id)
            }),
            visible: self.is_visible(scroll_offset),
        }
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FakeEnvironment;
    use crate::types::Viewport;

    fn abc() -> (SectionList, impl Fn(&str) -> Option<f64>) {
        let sections = SectionList::from_pairs(&[("a", "A"), ("b", "B"), ("c", "C")]).unwrap();
        let tops = |id: &str| match id {
            "a" => Some(0.0),
            "b" => Some(800.0),
            "c" => Some(1600.0),
            _ => None,
        };
        (sections, tops)
    }

    #[test]
    fn test_probe_at_upper_third() {
        let tracker = ScrollTracker::default();
        let (sections, tops) = abc();

        assert_eq!(tracker.active_index(&sections, 0.0, 600.0, &tops), Some(0));
        assert_eq!(tracker.active_index(&sections, 650.0, 600.0, &tops), Some(1));
        assert_eq!(tracker.active_index(&sections, 1500.0, 600.0, &tops), Some(2));
    }

    #[test]
    fn test_probe_boundary_is_inclusive() {
        let tracker = ScrollTracker::default();
        let (sections, tops) = abc();
        // probe = 600 + 200 = 800 == top of "b"
        assert_eq!(tracker.active_index(&sections, 600.0, 600.0, &tops), Some(1));
        assert_eq!(tracker.active_index(&sections, 599.0, 600.0, &tops), Some(0));
    }

    #[test]
    fn test_nothing_qualifies_above_first_section() {
        let tracker = ScrollTracker::default();
        let sections = SectionList::from_pairs(&[("a", "A"), ("b", "B")]).unwrap();
        let tops = |id: &str| if id == "a" { Some(500.0) } else { Some(900.0) };
        assert_eq!(tracker.active_index(&sections, 0.0, 600.0, tops), None);
    }

    #[test]
    fn test_active_index_is_monotonic() {
        let tracker = ScrollTracker::default();
        let (sections, tops) = abc();
        let mut last = None;
        for step in 0..=300 {
            let offset = f64::from(step) * 10.0;
            let active = tracker.active_index(&sections, offset, 600.0, &tops);
            assert!(active >= last, "went backwards at offset {offset}");
            last = active;
        }
        assert_eq!(last, Some(2));
    }

    #[test]
    fn test_visibility_threshold() {
        let tracker = ScrollTracker::default();
        assert!(!tracker.is_visible(0.0));
        assert!(!tracker.is_visible(200.0));
        assert!(tracker.is_visible(200.5));
    }

    #[test]
    fn test_missing_anchor_is_skipped() {
        let tracker = ScrollTracker::default();
        let (sections, _) = abc();
        let tops = |id: &str| match id {
            "a" => Some(0.0),
            "b" => Some(800.0),
            _ => None,
        };
        assert_eq!(tracker.active_index(&sections, 5000.0, 600.0, tops), Some(1));
    }

    #[test]
    fn test_header_fixed_probe() {
        let tracker = ScrollTracker::new(TrackerConfig::header());
        let (sections, tops) = abc();
        // rect.top <= 150 <=> offset_top <= scroll + 150
        assert_eq!(tracker.active_index(&sections, 650.0, 600.0, &tops), Some(1));
        assert_eq!(tracker.active_index(&sections, 649.0, 600.0, &tops), Some(0));
        assert!(tracker.is_visible(51.0));
        assert!(!tracker.is_visible(50.0));
    }

    #[test]
    fn test_sample_from_environment() {
        let env = FakeEnvironment::new(Viewport::new(1024.0, 600.0));
        env.set_section("a", 0.0);
        env.set_section("b", 800.0);
        env.set_section("c", 1600.0);
        env.set_scroll_offset(650.0);

        let (sections, _) = abc();
        let sample = ScrollTracker::default().sample(&sections, &env);
        assert_eq!(sample, TrackerSample { active_index: Some(1), visible: true });
    }
}
