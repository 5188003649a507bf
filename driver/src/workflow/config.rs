use anyhow::Context;
use rmscore::prelude::{EmptyPolicy, StatsConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A named sequence whose RMS the driver computes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SequenceSpec {
    pub name: String,
    #[serde(default)]
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkflowConfig {
    #[serde(default)]
    pub policy: EmptyPolicy,
    #[serde(default)]
    pub sequences: Vec<SequenceSpec>,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(values: Vec<f64>, policy: EmptyPolicy) -> Self {
        Self {
            policy,
            sequences: vec![SequenceSpec {
                name: "cli".to_string(),
                values,
            }],
        }
    }

    pub fn with_policy(mut self, policy: Option<EmptyPolicy>) -> Self {
        if let Some(policy) = policy {
            self.policy = policy;
        }
        self
    }

    pub fn to_stats_config(&self) -> StatsConfig {
        StatsConfig::new(self.policy)
    }
}
