//! Task interface.
use crate::{error::Result, state::State};

/// Termination and episode lifecycle of a task.
///
/// A task instance keeps memory across the steps of an episode, thus an instance
/// must be owned by a single agent and [`TaskBase::reset`] must be called at every
/// episode boundary.
pub trait TaskBase {
    /// Returns `true` if the episode of `agent_id` ends at `state`.
    fn done(&self, agent_id: &str, state: &State) -> Result<bool>;

    /// Clears the memory of the previous episode.
    fn reset(&mut self);
}

/// Reward of a task, evaluated once per simulation step.
///
/// `A` is the action type of the environment. Actions are accepted for
/// uniformity with the environment interface; the tasks in this crate ignore them.
pub trait Task<A>: TaskBase {
    /// Returns the reward of `agent_id` for the step resulting in `state`.
    fn reward(&mut self, agent_id: &str, state: &State, action: &A) -> Result<f64>;
}

impl<T: TaskBase + ?Sized> TaskBase for Box<T> {
    fn done(&self, agent_id: &str, state: &State) -> Result<bool> {
        (**self).done(agent_id, state)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<A, T: Task<A> + ?Sized> Task<A> for Box<T> {
    fn reward(&mut self, agent_id: &str, state: &State, action: &A) -> Result<f64> {
        (**self).reward(agent_id, state, action)
    }
}
