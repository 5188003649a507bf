use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What an RMS computation does when handed an empty sequence.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPolicy {
    /// Return 0.0, the vacuous RMS.
    #[default]
    Zero,
    /// Fail with [`StatsError::EmptyInput`].
    Error,
}

impl fmt::Display for EmptyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyPolicy::Zero => f.write_str("zero"),
            EmptyPolicy::Error => f.write_str("error"),
        }
    }
}

impl FromStr for EmptyPolicy {
    type Err = ParsePolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(EmptyPolicy::Zero),
            "error" => Ok(EmptyPolicy::Error),
            other => Err(ParsePolicyError(other.to_string())),
        }
    }
}

/// Shared configuration for RMS computations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsConfig {
    #[serde(default)]
    pub empty_policy: EmptyPolicy,
}

impl StatsConfig {
    pub fn new(empty_policy: EmptyPolicy) -> Self {
        Self { empty_policy }
    }
}

/// Common error type for statistics helpers.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("input sequence is empty")]
    EmptyInput,
}

pub type StatsResult<T> = Result<T, StatsError>;

/// Returned when a policy name is neither `zero` nor `error`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown empty-input policy: {0} (expected \"zero\" or \"error\")")]
pub struct ParsePolicyError(pub String);
