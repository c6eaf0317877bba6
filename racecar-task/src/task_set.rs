//! One task instance per agent.
use crate::{
    base::{Task, TaskBase},
    config::TaskConfig,
    error::{Result, TaskError},
    state::State,
};
use log::debug;
use std::collections::BTreeMap;

/// Owns a separate task instance for every agent of a race.
///
/// Tasks keep memory of the previous step, so an instance must never be shared by
/// two agents. [`TaskSet`] enforces this by construction.
///
/// # Examples
///
/// ```
/// use racecar_task::{AgentState, ProgressConfig, State, TaskConfig, TaskSet};
///
/// let config = TaskConfig::from(ProgressConfig::new(1, 60.0, false));
/// let mut tasks = TaskSet::<()>::from_config(&config, ["A", "B"]);
///
/// let state = State::from([
///     ("A".to_string(), AgentState::new(0, 0.1, 0.0)),
///     ("B".to_string(), AgentState::new(0, 0.2, 0.0)),
/// ]);
/// for id in ["A", "B"] {
///     assert_eq!(tasks.reward(id, &state, &()).unwrap(), -0.1);
///     assert!(!tasks.done(id, &state).unwrap());
/// }
/// ```
pub struct TaskSet<A> {
    tasks: BTreeMap<String, Box<dyn Task<A>>>,
}

impl<A> Default for TaskSet<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> TaskSet<A> {
    /// Constructs an empty [`TaskSet`].
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
        }
    }

    /// Builds an independent task from `config` for each agent.
    pub fn from_config<I, S>(config: &TaskConfig, agent_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for id in agent_ids {
            set.insert(id, config.build());
        }
        set
    }

    /// Sets the task of an agent, returning the task it replaces.
    pub fn insert(
        &mut self,
        agent_id: impl Into<String>,
        task: Box<dyn Task<A>>,
    ) -> Option<Box<dyn Task<A>>> {
        self.tasks.insert(agent_id.into(), task)
    }

    /// Returns the reward of `agent_id` computed by its own task.
    pub fn reward(&mut self, agent_id: &str, state: &State, action: &A) -> Result<f64> {
        self.task_mut(agent_id)?.reward(agent_id, state, action)
    }

    /// Returns `true` if the episode of `agent_id` ends.
    pub fn done(&self, agent_id: &str, state: &State) -> Result<bool> {
        self.tasks
            .get(agent_id)
            .ok_or_else(|| TaskError::UnknownAgent(agent_id.to_string()))?
            .done(agent_id, state)
    }

    /// Resets the tasks of all agents.
    pub fn reset(&mut self) {
        debug!("Reset tasks of {} agents", self.tasks.len());
        self.tasks.values_mut().for_each(|t| t.reset());
    }

    /// Returns the ids of the agents in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(String::as_str)
    }

    /// Returns the number of agents.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if no agent is registered.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn task_mut(&mut self, agent_id: &str) -> Result<&mut Box<dyn Task<A>>> {
        self.tasks
            .get_mut(agent_id)
            .ok_or_else(|| TaskError::UnknownAgent(agent_id.to_string()))
    }
}
