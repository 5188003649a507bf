use crate::prelude::{EmptyPolicy, StatsConfig, StatsError, StatsResult};
use ndarray::ArrayView2;

/// Root-mean-square helpers.
///
/// Every entry point computes `sqrt(mean(x_i^2))` in double precision. They
/// differ only in what an empty sequence yields: [`StatsHelper::rms`] returns
/// 0.0, [`StatsHelper::try_rms`] fails with [`StatsError::EmptyInput`], and
/// [`StatsHelper::rms_with`] picks one according to a [`StatsConfig`].
pub struct StatsHelper;

impl StatsHelper {
    /// RMS of `samples`, or 0.0 when `samples` is empty.
    pub fn rms(samples: &[f64]) -> f64 {
        Self::try_rms(samples).unwrap_or(0.0)
    }

    /// RMS of `samples`, failing when `samples` is empty.
    pub fn try_rms(samples: &[f64]) -> StatsResult<f64> {
        root_mean_square(samples)
    }

    pub fn rms_with(samples: &[f64], config: &StatsConfig) -> StatsResult<f64> {
        match config.empty_policy {
            EmptyPolicy::Zero => Ok(Self::rms(samples)),
            EmptyPolicy::Error => Self::try_rms(samples),
        }
    }

    /// RMS of each row of a 2-D array, one value per row.
    ///
    /// A zero-column matrix makes every row empty, so the configured policy
    /// applies to each of them.
    pub fn rms_rows(data: ArrayView2<f64>, config: &StatsConfig) -> StatsResult<Vec<f64>> {
        data.rows()
            .into_iter()
            .map(|row| match row.as_slice() {
                Some(slice) => Self::rms_with(slice, config),
                None => Self::rms_with(&row.to_vec(), config),
            })
            .collect()
    }
}

/// Squares are taken after dividing by the largest magnitude, so inputs near
/// the ends of the `f64` range neither overflow to infinity nor flush to zero.
fn root_mean_square(samples: &[f64]) -> StatsResult<f64> {
    if samples.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if samples.iter().any(|v| v.is_nan()) {
        return Ok(f64::NAN);
    }
    let scale = samples.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if scale == 0.0 || scale.is_infinite() {
        return Ok(scale);
    }
    let sum_sq: f64 = samples
        .iter()
        .map(|v| {
            let ratio = v / scale;
            ratio * ratio
        })
        .sum();
    Ok(scale * (sum_sq / samples.len() as f64).sqrt())
}
