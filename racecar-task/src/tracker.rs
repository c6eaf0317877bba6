//! Progress memory shared by the progress-based tasks.
use crate::state::AgentState;
use log::{debug, trace};

/// How a [`ProgressTracker`] turns cumulative progress into deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressPolicy {
    /// Flip the sign of a delta larger than half a lap.
    ///
    /// Such a delta is taken as crossing the start/finish line backward. This assumes
    /// that no agent advances more than half a lap in a step; a forward crossing
    /// observed as a single large jump is penalized as well.
    pub correct_wraparound: bool,

    /// Keep the stored progress unchanged on collision steps.
    ///
    /// The next valid step then sees the whole displacement since the last
    /// collision-free position.
    pub freeze_on_collision: bool,
}

/// Remembers the cumulative progress of the previous step of an episode.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    policy: ProgressPolicy,
    last_progress: Option<f64>,
}

impl ProgressTracker {
    /// Constructs a tracker without memory.
    pub fn new(policy: ProgressPolicy) -> Self {
        Self {
            policy,
            last_progress: None,
        }
    }

    /// Returns the policy of the tracker.
    pub fn policy(&self) -> ProgressPolicy {
        self.policy
    }

    /// Returns the stored progress, `None` before the first step of an episode.
    pub fn last_progress(&self) -> Option<f64> {
        self.last_progress
    }

    /// Returns the progress delta of a step and updates the stored progress.
    ///
    /// The first step after construction or [`ProgressTracker::reset`] gives `0.0`.
    pub fn delta(&mut self, cumulative_progress: f64, collision: bool) -> f64 {
        let last = *self.last_progress.get_or_insert(cumulative_progress);
        let mut delta = cumulative_progress - last;

        if self.policy.correct_wraparound && delta > 0.5 {
            debug!("Wraparound correction of delta {}", delta);
            delta = -delta;
        }

        if collision && self.policy.freeze_on_collision {
            trace!("Progress frozen at {} on collision", last);
        } else {
            self.last_progress = Some(cumulative_progress);
        }

        delta
    }

    /// Forgets the stored progress.
    pub fn reset(&mut self) {
        self.last_progress = None;
    }
}

/// Termination rules common to the progress-based tasks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Termination {
    pub laps: u32,
    pub time_limit: f64,
    pub terminate_on_collision: bool,
}

impl Termination {
    pub fn is_done(&self, agent_id: &str, s: &AgentState) -> bool {
        let collided = self.terminate_on_collision && s.collision();
        let finished = s.lap > self.laps;
        let timeout = s.time > self.time_limit;

        if collided || finished || timeout {
            debug!(
                "Episode of {} done: collision={}, finished={}, timeout={}",
                agent_id, collided, finished, timeout
            );
        }

        collided || finished || timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTINUOUS: ProgressPolicy = ProgressPolicy {
        correct_wraparound: true,
        freeze_on_collision: true,
    };

    const PLAIN: ProgressPolicy = ProgressPolicy {
        correct_wraparound: false,
        freeze_on_collision: false,
    };

    #[test]
    fn test_first_delta_is_zero() {
        let mut t = ProgressTracker::new(CONTINUOUS);
        assert_eq!(t.last_progress(), None);
        assert_eq!(t.delta(3.7, false), 0.0);
        assert_eq!(t.last_progress(), Some(3.7));
    }

    #[test]
    fn test_first_delta_on_collision_initializes_memory() {
        let mut t = ProgressTracker::new(CONTINUOUS);
        assert_eq!(t.delta(1.2, true), 0.0);
        assert_eq!(t.last_progress(), Some(1.2));
    }

    #[test]
    fn test_wraparound() {
        let mut t = ProgressTracker::new(CONTINUOUS);
        t.delta(0.05, false);
        // A jump of +0.9 is taken as a backward crossing of the start line.
        assert!((t.delta(0.95, false) + 0.9).abs() < 1e-12);

        let mut t = ProgressTracker::new(PLAIN);
        t.delta(0.05, false);
        assert!((t.delta(0.95, false) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_wraparound_threshold() {
        let mut t = ProgressTracker::new(CONTINUOUS);
        t.delta(0.0, false);
        assert_eq!(t.delta(0.5, false), 0.5);
    }

    #[test]
    fn test_freeze_on_collision() {
        let mut t = ProgressTracker::new(CONTINUOUS);
        t.delta(0.1, false);
        t.delta(0.2, true);
        assert_eq!(t.last_progress(), Some(0.1));
        assert!((t.delta(0.3, false) - 0.2).abs() < 1e-12);

        let mut t = ProgressTracker::new(PLAIN);
        t.delta(0.1, false);
        t.delta(0.2, true);
        assert_eq!(t.last_progress(), Some(0.2));
    }

    #[test]
    fn test_reset() {
        let mut t = ProgressTracker::new(PLAIN);
        t.delta(0.4, false);
        t.reset();
        assert_eq!(t.last_progress(), None);
        assert_eq!(t.delta(2.0, false), 0.0);
    }

    #[test]
    fn test_termination() {
        let rules = Termination {
            laps: 3,
            time_limit: 100.0,
            terminate_on_collision: false,
        };
        assert!(!rules.is_done("A", &AgentState::new(3, 0.9, 100.0)));
        assert!(rules.is_done("A", &AgentState::new(4, 0.0, 0.0)));
        assert!(rules.is_done("A", &AgentState::new(0, 0.0, 100.5)));
        assert!(!rules.is_done("A", &AgentState::new(0, 0.0, 0.0).wall_collision(true)));
    }
}
