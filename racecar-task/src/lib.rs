#![warn(missing_docs)]
//! Reward and termination tasks for multi-agent racing environments.
//!
//! A task is evaluated by the environment once per simulation step and per agent.
//! It turns the [`State`] of the race into a scalar reward with [`Task::reward`] and
//! an end-of-episode flag with [`TaskBase::done`].
//!
//! Tasks in this crate reward progress along the track:
//!
//! * [`ContinuousProgressEvaluator`] corrects lap wraparound and freezes progress during
//!   collisions.
//! * [`ProgressEvaluator`] rewards raw progress deltas.
//! * [`RankDiscountedEvaluator`] divides the reward of a wrapped task by the rank of the agent.
//!
//! A task remembers the progress of the previous step, thus each agent needs its own
//! instance and [`TaskBase::reset`] must be called between episodes. [`TaskSet`] holds
//! one instance per agent.
pub mod config;
pub mod error;
pub mod tracker;

mod base;
pub use base::{Task, TaskBase};

mod state;
pub use state::{AgentState, State};

mod continuous;
pub use continuous::{ContinuousProgressConfig, ContinuousProgressEvaluator};

mod progress;
pub use progress::{ProgressConfig, ProgressEvaluator, PROGRESS_SCALE};

mod rank;
pub use rank::RankDiscountedEvaluator;

mod task_set;
pub use config::TaskConfig;
pub use error::TaskError;
pub use task_set::TaskSet;
