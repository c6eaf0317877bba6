//! Rank-discounted reward.
use crate::{
    base::{Task, TaskBase},
    error::{Result, TaskError},
    progress::{ProgressConfig, ProgressEvaluator},
    state::{agent_state, State},
};
use log::trace;

/// Divides the reward of the wrapped task by the rank of the agent.
///
/// [`TaskBase::done`] and [`TaskBase::reset`] are forwarded to the wrapped task unchanged.
/// The state of the agent must carry a rank of at least 1.
#[derive(Debug, Clone)]
pub struct RankDiscountedEvaluator<T = ProgressEvaluator> {
    inner: T,
}

impl RankDiscountedEvaluator<ProgressEvaluator> {
    /// Constructs a rank-discounted [`ProgressEvaluator`].
    pub fn new(config: ProgressConfig) -> Self {
        Self::wrap(ProgressEvaluator::new(config))
    }
}

impl<T> RankDiscountedEvaluator<T> {
    /// Wraps a task.
    pub fn wrap(inner: T) -> Self {
        Self { inner }
    }

    /// Returns the wrapped task.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Returns the wrapped task, consuming `self`.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: TaskBase> TaskBase for RankDiscountedEvaluator<T> {
    fn done(&self, agent_id: &str, state: &State) -> Result<bool> {
        self.inner.done(agent_id, state)
    }

    fn reset(&mut self) {
        self.inner.reset()
    }
}

impl<A, T: Task<A>> Task<A> for RankDiscountedEvaluator<T> {
    fn reward(&mut self, agent_id: &str, state: &State, action: &A) -> Result<f64> {
        let rank = match agent_state(state, agent_id)?.rank {
            Some(0) => {
                return Err(TaskError::InvalidRank {
                    agent_id: agent_id.to_string(),
                    rank: 0,
                })
            }
            Some(rank) => rank,
            None => return Err(TaskError::MissingRank(agent_id.to_string())),
        };

        let reward = self.inner.reward(agent_id, state, action)?;
        trace!("{}: rank = {}, base reward = {}", agent_id, rank, reward);
        Ok(reward / rank as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AgentState;

    fn state(s: AgentState) -> State {
        State::from([("A".to_string(), s)])
    }

    fn config() -> ProgressConfig {
        ProgressConfig::new(3, 100.0, false)
    }

    fn run(rank: u32) -> Vec<(f64, f64)> {
        let mut base = ProgressEvaluator::new(config());
        let mut task = RankDiscountedEvaluator::new(config());
        let states = [
            AgentState::new(0, 0.1, 0.0),
            AgentState::new(0, 0.3, 0.1).wall_collision(true),
            AgentState::new(0, 0.35, 0.2),
        ];
        states
            .iter()
            .map(|s| {
                let s = state(s.clone().rank(rank));
                (
                    base.reward("A", &s, &()).unwrap(),
                    task.reward("A", &s, &()).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_rank_one_is_identity() {
        for (base, discounted) in run(1) {
            assert_eq!(base, discounted);
        }
    }

    #[test]
    fn test_rank_two_halves() {
        for (base, discounted) in run(2) {
            assert_eq!(base / 2.0, discounted);
        }
    }

    #[test]
    fn test_forwards_lifecycle() {
        let mut task = RankDiscountedEvaluator::new(config());
        let s = state(AgentState::new(1, 0.5, 0.0).rank(1));
        task.reward("A", &s, &()).unwrap();
        assert_eq!(task.inner().last_progress(), Some(1.5));

        task.reset();
        assert_eq!(task.inner().last_progress(), None);

        assert!(!task.done("A", &s).unwrap());
        assert!(task.done("A", &state(AgentState::new(4, 0.0, 0.0))).unwrap());
    }

    #[test]
    fn test_rank_errors() {
        let mut task = RankDiscountedEvaluator::new(config());
        assert_eq!(
            task.reward("A", &state(AgentState::new(0, 0.0, 0.0)), &()),
            Err(TaskError::MissingRank("A".to_string()))
        );
        assert_eq!(
            task.reward("A", &state(AgentState::new(0, 0.0, 0.0).rank(0)), &()),
            Err(TaskError::InvalidRank {
                agent_id: "A".to_string(),
                rank: 0
            })
        );
        assert_eq!(task.inner().last_progress(), None);
    }
}
