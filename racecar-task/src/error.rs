//! Errors in the library.
use thiserror::Error;

/// Errors raised while evaluating a task on a simulation state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaskError {
    /// The state has no entry for the agent.
    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    /// A rank-discounted reward was requested but the agent state carries no rank.
    #[error("Rank is missing in the state of agent {0}")]
    MissingRank(String),

    /// Rank must be a positive integer.
    #[error("Invalid rank {rank} for agent {agent_id}, rank must be >= 1")]
    InvalidRank {
        /// Agent id.
        agent_id: String,

        /// The rank found in the state.
        rank: u32,
    },
}

/// Result type of task evaluations.
pub type Result<T> = std::result::Result<T, TaskError>;
