use anyhow::Context;
use rmscore::prelude::EmptyPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Outcome for a single configured sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SequenceReport {
    pub name: String,
    pub len: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowReport {
    pub policy: EmptyPolicy,
    pub sequences: Vec<SequenceReport>,
}

impl WorkflowReport {
    pub fn failures(&self) -> usize {
        self.sequences.iter().filter(|s| s.error.is_some()).count()
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path_ref = path.as_ref();
        if let Some(parent) = path_ref.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating report directory {}", parent.display()))?;
            }
        }
        let body = serde_json::to_string_pretty(self).context("serializing workflow report")?;
        fs::write(path_ref, body)
            .with_context(|| format!("writing workflow report {}", path_ref.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_writes_json_and_omits_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");
        let report = WorkflowReport {
            policy: EmptyPolicy::Error,
            sequences: vec![
                SequenceReport {
                    name: "single".into(),
                    len: 1,
                    rms: Some(2.0),
                    error: None,
                },
                SequenceReport {
                    name: "empty".into(),
                    len: 0,
                    rms: None,
                    error: Some("input sequence is empty".into()),
                },
            ],
        };

        report.write_json(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["policy"], "error");
        assert_eq!(parsed["sequences"][0]["rms"], 2.0);
        assert!(parsed["sequences"][0].get("error").is_none());
        assert!(parsed["sequences"][1].get("rms").is_none());
        assert_eq!(report.failures(), 1);
    }
}
