//! Selection of a task by name.
use crate::{
    base::Task, ContinuousProgressConfig, ContinuousProgressEvaluator, ProgressConfig,
    ProgressEvaluator, RankDiscountedEvaluator,
};
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of one of the tasks in this crate.
///
/// In YAML, the variant is given by the `task` key:
///
/// ```yaml
/// task: maximize_continuous_progress
/// laps: 3
/// time_limit: 120.0
/// terminate_on_collision: false
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum TaskConfig {
    /// [`ContinuousProgressEvaluator`].
    MaximizeContinuousProgress(ContinuousProgressConfig),

    /// [`ProgressEvaluator`].
    MaximizeProgress(ProgressConfig),

    /// [`RankDiscountedEvaluator`] wrapping [`ProgressEvaluator`].
    RankDiscountedMaximizeProgress(ProgressConfig),
}

impl TaskConfig {
    /// Returns the name of the task.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MaximizeContinuousProgress(_) => "maximize_continuous_progress",
            Self::MaximizeProgress(_) => "maximize_progress",
            Self::RankDiscountedMaximizeProgress(_) => "rank_discounted_maximize_progress",
        }
    }

    /// Builds a fresh task instance.
    pub fn build<A>(&self) -> Box<dyn Task<A>> {
        info!("Build task {}", self.name());
        match self {
            Self::MaximizeContinuousProgress(config) => {
                Box::new(ContinuousProgressEvaluator::new(config.clone()))
            }
            Self::MaximizeProgress(config) => Box::new(ProgressEvaluator::new(config.clone())),
            Self::RankDiscountedMaximizeProgress(config) => {
                Box::new(RankDiscountedEvaluator::new(config.clone()))
            }
        }
    }

    /// Constructs [`TaskConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TaskConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

impl From<ContinuousProgressConfig> for TaskConfig {
    fn from(config: ContinuousProgressConfig) -> Self {
        Self::MaximizeContinuousProgress(config)
    }
}

impl From<ProgressConfig> for TaskConfig {
    fn from(config: ProgressConfig) -> Self {
        Self::MaximizeProgress(config)
    }
}
