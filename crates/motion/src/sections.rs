// =============================================================================
// Folio Motion - Page Sections
// =============================================================================

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};

/// A vertically stacked content region of the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    /// DOM id of the section's anchor element.
    pub id: String,
    /// Display label for navigation chrome.
    pub label: String,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into() }
    }
}

/// Scroll direction of a transition, relative to page order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    #[default]
    Down,
}

impl Direction {
    /// `Down` when moving to a later section, `Up` otherwise (including same).
    pub fn between(current: Option<usize>, target: usize) -> Self {
        match current {
            Some(current) if target > current => Direction::Down,
            None => Direction::Down,
            _ => Direction::Up,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Ordered, non-empty list of sections with unique ids.
///
/// Order is page order, top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionList {
    sections: Vec<SectionDescriptor>,
}

impl SectionList {
    pub fn new(sections: Vec<SectionDescriptor>) -> Result<Self> {
        if sections.is_empty() {
            return Err(MotionError::EmptySections);
        }
        let mut seen = HashSet::with_capacity(sections.len());
        for section in &sections {
            if !seen.insert(section.id.as_str()) {
                return Err(MotionError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(Self { sections })
    }

    /// Build from `(id, label)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self> {
        Self::new(
            pairs
                .iter()
                .map(|(id, label)| SectionDescriptor::new(*id, *label))
                .collect(),
        )
    }

    pub fn first(&self) -> &SectionDescriptor {
        // Non-empty by construction.
        &self.sections[0]
    }

    pub fn get(&self, index: usize) -> Option<&SectionDescriptor> {
        self.sections.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &SectionDescriptor> + ExactSizeIterator {
        self.sections.iter()
    }

    /// Fraction of the page reached when `id` is active, `(index + 1) / len`.
    ///
    /// Drives the height of the dot-nav progress line. Unknown ids give 0.
    pub fn progress(&self, id: &str) -> f64 {
        self.index_of(id)
            .map(|i| (i + 1) as f64 / self.sections.len() as f64)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SectionList {
        SectionList::from_pairs(&[("hero", "Home"), ("about", "About"), ("contact", "Contact"), ("footer", "End")])
            .unwrap()
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(SectionList::new(vec![]), Err(MotionError::EmptySections)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = SectionList::from_pairs(&[("a", "A"), ("b", "B"), ("a", "Again")]).unwrap_err();
        assert!(matches!(err, MotionError::DuplicateSection(id) if id == "a"));
    }

    #[test]
    fn test_lookup() {
        let list = sample();
        assert_eq!(list.first().id, "hero");
        assert_eq!(list.index_of("contact"), Some(2));
        assert_eq!(list.index_of("missing"), None);
        assert_eq!(list.get(1).map(|s| s.label.as_str()), Some("About"));
    }

    #[test]
    fn test_progress() {
        let list = sample();
        assert_eq!(list.progress("hero"), 0.25);
        assert_eq!(list.progress("footer"), 1.0);
        assert_eq!(list.progress("missing"), 0.0);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::between(Some(1), 3), Direction::Down);
        assert_eq!(Direction::between(Some(3), 1), Direction::Up);
        assert_eq!(Direction::between(Some(2), 2), Direction::Up);
        assert_eq!(Direction::Up.as_str(), "up");
    }
}
