//! Per-step state of the agents in a race.
use crate::error::{Result, TaskError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// State of the race at a simulation step, keyed by agent id.
pub type State = HashMap<String, AgentState>;

/// State of a single agent at a simulation step.
///
/// This is produced by the simulation and read by tasks. Tasks never modify it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    /// Index of the current lap.
    pub lap: u32,

    /// Fractional position within the current lap, in `[0, 1)`.
    pub progress: f64,

    /// Elapsed time of the episode.
    pub time: f64,

    /// `true` if the agent touches a wall.
    pub wall_collision: bool,

    /// Ids of the opponents the agent collides with.
    #[serde(default)]
    pub opponent_collisions: Vec<String>,

    /// Rank of the agent in the race, starting from 1.
    #[serde(default)]
    pub rank: Option<u32>,
}

impl AgentState {
    /// Constructs a collision-free [`AgentState`] without rank.
    pub fn new(lap: u32, progress: f64, time: f64) -> Self {
        Self {
            lap,
            progress,
            time,
            wall_collision: false,
            opponent_collisions: Vec::new(),
            rank: None,
        }
    }

    /// Sets the wall collision flag.
    pub fn wall_collision(mut self, v: bool) -> Self {
        self.wall_collision = v;
        self
    }

    /// Sets the ids of the opponents the agent collides with.
    pub fn opponent_collisions(mut self, ids: Vec<String>) -> Self {
        self.opponent_collisions = ids;
        self
    }

    /// Sets the rank.
    pub fn rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Total race completion, `lap + progress`.
    #[inline]
    pub fn cumulative_progress(&self) -> f64 {
        self.lap as f64 + self.progress
    }

    /// `true` if the agent hits a wall or any opponent.
    #[inline]
    pub fn collision(&self) -> bool {
        self.wall_collision || !self.opponent_collisions.is_empty()
    }
}

/// Returns the state of `agent_id`.
pub(crate) fn agent_state<'a>(state: &'a State, agent_id: &str) -> Result<&'a AgentState> {
    state
        .get(agent_id)
        .ok_or_else(|| TaskError::UnknownAgent(agent_id.to_string()))
}
