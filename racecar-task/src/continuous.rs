//! Progress task with lap wraparound correction.
use crate::{
    base::{Task, TaskBase},
    error::Result,
    state::{agent_state, State},
    tracker::{ProgressPolicy, ProgressTracker, Termination},
};
use log::trace;
use serde::{Deserialize, Serialize};

fn default_collision_reward() -> f64 {
    -25.0
}

fn default_frame_reward() -> f64 {
    -0.025
}

fn default_progress_factor() -> f64 {
    100.0
}

/// Configuration of [`ContinuousProgressEvaluator`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct ContinuousProgressConfig {
    /// Number of laps of an episode.
    pub laps: u32,

    /// Time limit of an episode.
    pub time_limit: f64,

    /// Ends the episode at the first collision.
    pub terminate_on_collision: bool,

    /// Reward added on collision steps.
    #[serde(default = "default_collision_reward")]
    pub collision_reward: f64,

    /// Reward added at every step.
    #[serde(default = "default_frame_reward")]
    pub frame_reward: f64,

    /// Scale of the progress delta in the reward.
    #[serde(default = "default_progress_factor")]
    pub progress_factor: f64,
}

impl ContinuousProgressConfig {
    /// Constructs a configuration with the default reward parameters.
    pub fn new(laps: u32, time_limit: f64, terminate_on_collision: bool) -> Self {
        Self {
            laps,
            time_limit,
            terminate_on_collision,
            collision_reward: default_collision_reward(),
            frame_reward: default_frame_reward(),
            progress_factor: default_progress_factor(),
        }
    }

    /// Sets the collision reward.
    pub fn collision_reward(mut self, v: f64) -> Self {
        self.collision_reward = v;
        self
    }

    /// Sets the frame reward.
    pub fn frame_reward(mut self, v: f64) -> Self {
        self.frame_reward = v;
        self
    }

    /// Sets the progress factor.
    pub fn progress_factor(mut self, v: f64) -> Self {
        self.progress_factor = v;
        self
    }
}

/// Rewards progress along the track, penalizing collisions and elapsed frames.
///
/// The reward of a step is
///
/// ```text
/// frame_reward + (collision ? collision_reward : progress_factor * delta)
/// ```
///
/// where `delta` is the change of `lap + progress` since the last collision-free step.
/// A delta larger than half a lap is taken as crossing the start line backward and
/// its sign is flipped. The stored progress does not advance on collision steps.
///
/// # Examples
///
/// ```
/// use racecar_task::{AgentState, ContinuousProgressConfig, ContinuousProgressEvaluator, State, Task};
///
/// let mut task = ContinuousProgressEvaluator::new(ContinuousProgressConfig::new(3, 100.0, true));
/// let mut state = State::new();
/// state.insert("A".to_string(), AgentState::new(0, 0.0, 0.0));
/// assert_eq!(task.reward("A", &state, &()).unwrap(), -0.025);
/// ```
#[derive(Debug, Clone)]
pub struct ContinuousProgressEvaluator {
    config: ContinuousProgressConfig,
    tracker: ProgressTracker,
}

impl ContinuousProgressEvaluator {
    /// Constructs a [`ContinuousProgressEvaluator`].
    pub fn new(config: ContinuousProgressConfig) -> Self {
        Self {
            config,
            tracker: ProgressTracker::new(ProgressPolicy {
                correct_wraparound: true,
                freeze_on_collision: true,
            }),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ContinuousProgressConfig {
        &self.config
    }

    /// Returns the stored progress of the current episode.
    pub fn last_progress(&self) -> Option<f64> {
        self.tracker.last_progress()
    }

    fn termination(&self) -> Termination {
        Termination {
            laps: self.config.laps,
            time_limit: self.config.time_limit,
            terminate_on_collision: self.config.terminate_on_collision,
        }
    }
}

impl TaskBase for ContinuousProgressEvaluator {
    fn done(&self, agent_id: &str, state: &State) -> Result<bool> {
        let s = agent_state(state, agent_id)?;
        Ok(self.termination().is_done(agent_id, s))
    }

    fn reset(&mut self) {
        trace!("ContinuousProgressEvaluator::reset()");
        self.tracker.reset();
    }
}

impl<A> Task<A> for ContinuousProgressEvaluator {
    fn reward(&mut self, agent_id: &str, state: &State, _action: &A) -> Result<f64> {
        let s = agent_state(state, agent_id)?;
        let collision = s.collision();
        let delta = self.tracker.delta(s.cumulative_progress(), collision);

        let mut reward = self.config.frame_reward;
        if collision {
            reward += self.config.collision_reward;
        } else {
            reward += self.config.progress_factor * delta;
        }

        trace!(
            "{}: delta = {}, collision = {}, reward = {}",
            agent_id,
            delta,
            collision,
            reward
        );
        Ok(reward)
    }
}
