use std::collections::BTreeSet;

use crate::config;

/// Crossing tolerance: ratios within this distance below the threshold count
/// as reaching it. Browsers report values like 0.15999999 for an element that
/// sits exactly on the threshold, so a strict `>=` would miss that crossing.
pub const CROSSING_TOLERANCE: f64 = 1e-6;

/// Slot of an element in the list handed to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevealId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

/// One entry of a notification batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub id: RevealId,
    pub ratio: f64,
}

impl Intersection {
    pub fn new(id: RevealId, ratio: f64) -> Self {
        Self { id, ratio }
    }
}

/// Host independent bookkeeping for the reveal animation.
///
/// Every registered element starts hidden and moves to visible at most once.
/// Elements leave the observation set the moment they are revealed, and once
/// the registry is stopped nothing changes anymore.
#[derive(Debug)]
pub struct RevealRegistry {
    threshold: f64,
    states: Vec<RevealState>,
    observed: BTreeSet<RevealId>,
    stopped: bool,
}

impl Default for RevealRegistry {
    fn default() -> Self {
        Self::new(config::REVEAL_THRESHOLD)
    }
}

impl RevealRegistry {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            states: Vec::new(),
            observed: BTreeSet::new(),
            stopped: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Starts watching `id`. Returns false when the id is already watched,
    /// already visible, or the registry has been stopped.
    pub fn observe(&mut self, id: RevealId) -> bool {
        if self.stopped {
            return false;
        }
        if id.0 >= self.states.len() {
            self.states.resize(id.0 + 1, RevealState::Hidden);
        }
        if self.states[id.0] == RevealState::Visible {
            return false;
        }
        self.observed.insert(id)
    }

    pub fn reaches_threshold(&self, ratio: f64) -> bool {
        ratio + CROSSING_TOLERANCE >= self.threshold
    }

    /// Applies one batch of notifications and returns the ids that became
    /// visible because of it, in batch order.
    pub fn apply<I>(&mut self, batch: I) -> Vec<RevealId>
    where
        I: IntoIterator<Item = Intersection>,
    {
        if self.stopped {
            return Vec::new();
        }
        let mut revealed = Vec::new();
        for entry in batch {
            if !self.observed.contains(&entry.id) || !self.reaches_threshold(entry.ratio) {
                continue;
            }
            self.mark_visible(entry.id);
            revealed.push(entry.id);
        }
        revealed
    }

    /// Reveals everything still being watched. Used when the host cannot
    /// report intersections at all.
    pub fn reveal_all(&mut self) -> Vec<RevealId> {
        if self.stopped {
            return Vec::new();
        }
        let pending: Vec<RevealId> = self.observed.iter().copied().collect();
        for id in &pending {
            self.mark_visible(*id);
        }
        pending
    }

    /// Stops all observation. Visible elements stay visible.
    pub fn stop(&mut self) {
        self.observed.clear();
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn state(&self, id: RevealId) -> RevealState {
        self.states.get(id.0).copied().unwrap_or(RevealState::Hidden)
    }

    #[cfg(test)]
    pub fn is_observed(&self, id: RevealId) -> bool {
        self.observed.contains(&id)
    }

    pub fn pending(&self) -> usize {
        self.observed.len()
    }

    fn mark_visible(&mut self, id: RevealId) {
        self.observed.remove(&id);
        self.states[id.0] = RevealState::Visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(count: usize) -> RevealRegistry {
        let mut registry = RevealRegistry::default();
        for slot in 0..count {
            assert!(registry.observe(RevealId(slot)));
        }
        registry
    }

    #[test]
    fn elements_start_hidden_and_observed() {
        let registry = registry_with(3);
        for slot in 0..3 {
            assert_eq!(registry.state(RevealId(slot)), RevealState::Hidden);
            assert!(registry.is_observed(RevealId(slot)));
        }
        assert_eq!(registry.pending(), 3);
    }

    #[test]
    fn batch_reveals_only_elements_past_threshold() {
        let (a, b, c) = (RevealId(0), RevealId(1), RevealId(2));
        let mut registry = registry_with(3);

        let revealed = registry.apply([Intersection::new(a, 0.5), Intersection::new(b, 0.0)]);

        assert_eq!(revealed, vec![a]);
        assert_eq!(registry.state(a), RevealState::Visible);
        assert!(!registry.is_observed(a));
        assert_eq!(registry.state(b), RevealState::Hidden);
        assert!(registry.is_observed(b));
        assert_eq!(registry.state(c), RevealState::Hidden);
        assert!(registry.is_observed(c));
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut registry = registry_with(2);

        assert!(registry.apply([Intersection::new(RevealId(1), 0.159)]).is_empty());
        assert_eq!(registry.state(RevealId(1)), RevealState::Hidden);

        assert_eq!(registry.apply([Intersection::new(RevealId(0), 0.16)]), vec![RevealId(0)]);
        assert_eq!(registry.state(RevealId(0)), RevealState::Visible);
    }

    #[test]
    fn crossing_tolerance_is_the_only_slack_below_threshold() {
        let mut registry = registry_with(3);
        let threshold = registry.threshold();

        let within = Intersection::new(RevealId(0), threshold - CROSSING_TOLERANCE / 2.0);
        let outside = Intersection::new(RevealId(1), threshold - CROSSING_TOLERANCE * 10.0);
        let exact = Intersection::new(RevealId(2), threshold);

        assert_eq!(registry.apply([within, outside, exact]), vec![RevealId(0), RevealId(2)]);
        assert_eq!(registry.state(RevealId(1)), RevealState::Hidden);
    }

    #[test]
    fn transition_happens_at_most_once() {
        let id = RevealId(0);
        let mut registry = registry_with(1);

        let first = registry.apply([Intersection::new(id, 0.9), Intersection::new(id, 1.0)]);
        let second = registry.apply([Intersection::new(id, 0.0), Intersection::new(id, 0.7)]);

        assert_eq!(first, vec![id]);
        assert!(second.is_empty());
        assert_eq!(registry.state(id), RevealState::Visible);
        assert!(!registry.observe(id));
        assert!(!registry.is_observed(id));
    }

    #[test]
    fn never_reaching_threshold_stays_hidden() {
        let id = RevealId(0);
        let mut registry = registry_with(1);
        for ratio in [0.0, 0.05, 0.1, 0.15, 0.0] {
            registry.apply([Intersection::new(id, ratio)]);
        }
        assert_eq!(registry.state(id), RevealState::Hidden);
        assert!(registry.is_observed(id));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut registry = registry_with(1);
        assert!(registry.apply([Intersection::new(RevealId(7), 1.0)]).is_empty());
        assert_eq!(registry.state(RevealId(7)), RevealState::Hidden);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut once = registry_with(2);
        once.apply([Intersection::new(RevealId(0), 1.0)]);
        once.stop();

        let mut twice = registry_with(2);
        twice.apply([Intersection::new(RevealId(0), 1.0)]);
        twice.stop();
        twice.stop();

        for slot in 0..2 {
            assert_eq!(once.state(RevealId(slot)), twice.state(RevealId(slot)));
            assert_eq!(once.is_observed(RevealId(slot)), twice.is_observed(RevealId(slot)));
        }
        assert_eq!(once.pending(), 0);
        assert_eq!(twice.pending(), 0);
    }

    #[test]
    fn stop_without_start_is_harmless() {
        let mut registry = RevealRegistry::default();
        registry.stop();
        assert!(registry.is_stopped());
        assert_eq!(registry.pending(), 0);
    }

    #[test]
    fn late_notifications_after_stop_change_nothing() {
        let mut registry = registry_with(2);
        registry.apply([Intersection::new(RevealId(0), 1.0)]);
        registry.stop();

        assert!(registry.apply([Intersection::new(RevealId(1), 1.0)]).is_empty());
        assert_eq!(registry.state(RevealId(1)), RevealState::Hidden);
        assert_eq!(registry.state(RevealId(0)), RevealState::Visible);
        assert!(!registry.observe(RevealId(1)));
    }

    #[test]
    fn reveal_all_flushes_every_pending_element() {
        let mut registry = registry_with(3);
        registry.apply([Intersection::new(RevealId(1), 1.0)]);

        let revealed = registry.reveal_all();

        assert_eq!(revealed, vec![RevealId(0), RevealId(2)]);
        assert_eq!(registry.pending(), 0);
        for slot in 0..3 {
            assert_eq!(registry.state(RevealId(slot)), RevealState::Visible);
        }
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealRegistry::new(4.0).threshold(), 1.0);
        assert_eq!(RevealRegistry::new(-1.0).threshold(), 0.0);
    }
}
