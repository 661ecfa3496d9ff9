// Copy feedback - the transient "copied" marker on a step
//
// Each successful copy marks the step for a fixed lifetime (1400 ms by
// default). Copying the same step again while its marker is still live
// replaces the deadline instead of stacking a second one, so an earlier
// copy can never remove the marker out from under a later one.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// Per-step "copied" markers for the active section.
///
/// Steps are keyed by their flattened index within the section; the map is
/// cleared whenever the active section changes (the content area is rebuilt
/// from scratch, same as the markers it carried).
pub struct CopyFeedback {
    ttl: Duration,
    deadlines: HashMap<usize, Instant>,
}

impl CopyFeedback {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            deadlines: HashMap::new(),
        }
    }

    /// Mark a step as copied at `now`, replacing any pending deadline.
    pub fn mark(&mut self, step: usize, now: Instant) {
        self.deadlines.insert(step, now + self.ttl);
    }

    /// Whether the step's marker is still live at `now`.
    pub fn is_marked(&self, step: usize, now: Instant) -> bool {
        self.deadlines.get(&step).is_some_and(|&deadline| now < deadline)
    }

    /// Steps with live markers at `now`, for the render pass.
    pub fn marked_at(&self, now: Instant) -> HashSet<usize> {
        self.deadlines
            .keys()
            .copied()
            .filter(|&step| self.is_marked(step, now))
            .collect()
    }

    /// Drop expired markers. Called on event-loop ticks.
    pub fn sweep(&mut self, now: Instant) {
        self.deadlines.retain(|_, &mut deadline| now < deadline);
    }

    /// Forget all markers (active section changed).
    pub fn clear(&mut self) {
        self.deadlines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_millis(1400);

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn marker_expires_after_its_lifetime() {
        let base = Instant::now();
        let mut feedback = CopyFeedback::new(TTL);
        feedback.mark(0, base);

        assert!(feedback.is_marked(0, at(base, 0)));
        assert!(feedback.is_marked(0, at(base, 1399)));
        assert!(!feedback.is_marked(0, at(base, 1400)));
    }

    #[test]
    fn overlapping_copy_extends_the_marker() {
        // Copy at t=0 and again at t=500: the marker must stay live
        // continuously until t=1900, not vanish at t=1400.
        let base = Instant::now();
        let mut feedback = CopyFeedback::new(TTL);

        feedback.mark(0, at(base, 0));
        feedback.mark(0, at(base, 500));

        assert!(feedback.is_marked(0, at(base, 1400)));
        assert!(feedback.is_marked(0, at(base, 1899)));
        assert!(!feedback.is_marked(0, at(base, 1900)));
    }

    #[test]
    fn markers_are_independent_per_step() {
        let base = Instant::now();
        let mut feedback = CopyFeedback::new(TTL);
        feedback.mark(0, base);
        feedback.mark(3, at(base, 1000));

        assert!(!feedback.is_marked(0, at(base, 1500)));
        assert!(feedback.is_marked(3, at(base, 1500)));
        assert_eq!(feedback.marked_at(at(base, 1500)), [3].into());
    }

    #[test]
    fn sweep_removes_only_expired_markers() {
        let base = Instant::now();
        let mut feedback = CopyFeedback::new(TTL);
        feedback.mark(0, base);
        feedback.mark(1, at(base, 1000));

        feedback.sweep(at(base, 1500));
        assert_eq!(feedback.deadlines.len(), 1);
        assert!(feedback.is_marked(1, at(base, 1500)));
    }

    #[test]
    fn clear_forgets_everything() {
        let base = Instant::now();
        let mut feedback = CopyFeedback::new(TTL);
        feedback.mark(0, base);
        feedback.clear();
        assert!(!feedback.is_marked(0, base));
    }
}
