use std::collections::HashSet;

pub const REVEAL_SELECTOR: &str =
    ".service-card, .review-card, .feature-item, .trust-item, .gallery-item, .area-item";

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(40px)";
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";
pub const REVEAL_TRANSITION: &str =
    "opacity 0.8s cubic-bezier(0.4, 0, 0.2, 1), transform 0.8s cubic-bezier(0.4, 0, 0.2, 1)";

/// One observer callback entry: which element, and whether it is in view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityEntry {
    pub key: usize,
    pub intersecting: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStep {
    pub key: usize,
    pub delay_ms: u32,
}

/// Remembers which elements have already been revealed so each one animates
/// in once, even if the observer reports it again.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    #[cfg(test)]
    fn is_revealed(&self, key: usize) -> bool {
        self.revealed.contains(&key)
    }

    /// Staggers the intersecting entries of one batch by their position in it.
    pub fn plan_batch(&mut self, entries: &[VisibilityEntry], stagger_ms: u32) -> Vec<RevealStep> {
        let mut steps = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            if !entry.intersecting || !self.revealed.insert(entry.key) {
                continue;
            }
            steps.push(RevealStep {
                key: entry.key,
                delay_ms: index as u32 * stagger_ms,
            });
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: usize, intersecting: bool) -> VisibilityEntry {
        VisibilityEntry { key, intersecting }
    }

    #[test]
    fn test_batch_is_staggered_by_position() {
        let mut tracker = RevealTracker::default();
        let steps = tracker.plan_batch(&[entry(3, true), entry(4, false), entry(5, true)], 100);

        assert_eq!(
            steps,
            vec![
                RevealStep { key: 3, delay_ms: 0 },
                RevealStep { key: 5, delay_ms: 200 },
            ]
        );
        assert!(tracker.is_revealed(3));
        assert!(!tracker.is_revealed(4));
    }

    #[test]
    fn test_each_element_reveals_once() {
        let mut tracker = RevealTracker::default();
        assert_eq!(tracker.plan_batch(&[entry(1, true)], 100).len(), 1);

        // Leaves the viewport, then comes back.
        assert!(tracker.plan_batch(&[entry(1, false)], 100).is_empty());
        assert!(tracker.plan_batch(&[entry(1, true)], 100).is_empty());
    }
}
