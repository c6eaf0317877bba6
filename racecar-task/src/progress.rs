//! Progress task without wraparound correction.
use crate::{
    base::{Task, TaskBase},
    error::Result,
    state::{agent_state, State},
    tracker::{ProgressPolicy, ProgressTracker, Termination},
};
use log::trace;
use serde::{Deserialize, Serialize};

/// Scale of the progress delta in the reward of [`ProgressEvaluator`].
pub const PROGRESS_SCALE: f64 = 10.0;

fn default_delta_progress() -> f64 {
    0.001
}

fn default_collision_reward() -> f64 {
    -100.0
}

fn default_frame_reward() -> f64 {
    -0.1
}

fn default_progress_reward() -> f64 {
    1.0
}

/// Configuration of [`ProgressEvaluator`] and [`RankDiscountedEvaluator`].
///
/// `delta_progress` and `progress_reward` are kept for compatibility of configuration
/// files. They do not affect the reward.
///
/// [`RankDiscountedEvaluator`]: crate::RankDiscountedEvaluator
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct ProgressConfig {
    /// Number of laps of an episode.
    pub laps: u32,

    /// Time limit of an episode.
    pub time_limit: f64,

    /// Ends the episode at the first collision.
    pub terminate_on_collision: bool,

    /// Not used.
    #[serde(default = "default_delta_progress")]
    pub delta_progress: f64,

    /// Reward added on collision steps.
    #[serde(default = "default_collision_reward")]
    pub collision_reward: f64,

    /// Reward added at every step.
    #[serde(default = "default_frame_reward")]
    pub frame_reward: f64,

    /// Not used.
    #[serde(default = "default_progress_reward")]
    pub progress_reward: f64,
}

impl ProgressConfig {
    /// Constructs a configuration with the default reward parameters.
    pub fn new(laps: u32, time_limit: f64, terminate_on_collision: bool) -> Self {
        Self {
            laps,
            time_limit,
            terminate_on_collision,
            delta_progress: default_delta_progress(),
            collision_reward: default_collision_reward(),
            frame_reward: default_frame_reward(),
            progress_reward: default_progress_reward(),
        }
    }

    /// Sets `delta_progress`.
    pub fn delta_progress(mut self, v: f64) -> Self {
        self.delta_progress = v;
        self
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

    /// Sets `progress_reward`.
    pub fn progress_reward(mut self, v: f64) -> Self {
        self.progress_reward = v;
        self
    }
}

/// Rewards the change of `lap + progress` between consecutive steps.
///
/// The reward of a step is `frame_reward + (collision ? collision_reward : 0) + 10 * delta`.
/// Unlike [`ContinuousProgressEvaluator`], lap boundary jumps are not corrected and
/// the stored progress advances on every step, collisions included.
///
/// [`ContinuousProgressEvaluator`]: crate::ContinuousProgressEvaluator
#[derive(Debug, Clone)]
pub struct ProgressEvaluator {
    config: ProgressConfig,
    tracker: ProgressTracker,
}

impl ProgressEvaluator {
    /// Constructs a [`ProgressEvaluator`].
    pub fn new(config: ProgressConfig) -> Self {
        Self {
            config,
            tracker: ProgressTracker::new(ProgressPolicy {
                correct_wraparound: false,
                freeze_on_collision: false,
            }),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// Returns the stored progress of the current episode.
    pub fn last_progress(&self) -> Option<f64> {
        self.tracker.last_progress()
    }
}

impl TaskBase for ProgressEvaluator {
    fn done(&self, agent_id: &str, state: &State) -> Result<bool> {
        let s = agent_state(state, agent_id)?;
        let rules = Termination {
            laps: self.config.laps,
            time_limit: self.config.time_limit,
            terminate_on_collision: self.config.terminate_on_collision,
        };
        Ok(rules.is_done(agent_id, s))
    }

    fn reset(&mut self) {
        trace!("ProgressEvaluator::reset()");
        self.tracker.reset();
    }
}

impl<A> Task<A> for ProgressEvaluator {
    fn reward(&mut self, agent_id: &str, state: &State, _action: &A) -> Result<f64> {
        let s = agent_state(state, agent_id)?;
        let collision = s.collision();
        let delta = self.tracker.delta(s.cumulative_progress(), collision);

        let mut reward = self.config.frame_reward;
        if collision {
            reward += self.config.collision_reward;
        }
        reward += delta * PROGRESS_SCALE;

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
