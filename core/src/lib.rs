//! Root-mean-square core for the RMS tools workspace.
//!
//! The calculator lives in [`math::stats`]; the empty-input policy, its
//! configuration and the error type are re-exported from [`prelude`].

pub mod math;
pub mod prelude;
pub mod telemetry;

pub use math::StatsHelper;
pub use prelude::{EmptyPolicy, ParsePolicyError, StatsConfig, StatsError, StatsResult};
