use crate::workflow::config::WorkflowConfig;
use crate::workflow::report::{SequenceReport, WorkflowReport};
use rmscore::telemetry::{LogManager, MetricsRecorder};
use rmscore::StatsHelper;
use std::sync::Arc;

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsRecorder::new()),
        }
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// Computes every configured sequence. An empty sequence rejected by the
    /// policy is reported on its own entry; the remaining sequences still run.
    pub fn execute(&self) -> WorkflowReport {
        let logger = LogManager::new("rmsdriver");
        let stats_config = self.config.to_stats_config();

        let sequences = self
            .config
            .sequences
            .iter()
            .map(|sequence| {
                match StatsHelper::rms_with(&sequence.values, &stats_config) {
                    Ok(rms) => {
                        self.metrics.record_computed();
                        logger.record(&format!(
                            "{}: RMS {:.6} over {} samples",
                            sequence.name,
                            rms,
                            sequence.values.len()
                        ));
                        SequenceReport {
                            name: sequence.name.clone(),
                            len: sequence.values.len(),
                            rms: Some(rms),
                            error: None,
                        }
                    }
                    Err(err) => {
                        self.metrics.record_empty_input();
                        logger.warn(&format!("{}: {}", sequence.name, err));
                        SequenceReport {
                            name: sequence.name.clone(),
                            len: sequence.values.len(),
                            rms: None,
                            error: Some(err.to_string()),
                        }
                    }
                }
            })
            .collect();

        WorkflowReport {
            policy: self.config.policy,
            sequences,
        }
    }
}
