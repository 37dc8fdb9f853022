//! Fences, outliers and whiskers for box-and-whisker plots.
//!
//! A value lying exactly on a fence counts as an outlier and is excluded from
//! the whisker range.

use serde::Serialize;

use crate::{
    error::{Operation, Result},
    number::{self, Number},
    percentiles::{iqr, quartiles},
};

/// Multiple of the interquartile range between a quartile and its fence.
pub const FENCE_FACTOR: f64 = 1.5;

/// Values at or beyond the fences, each in the order they appear in the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outliers {
    pub lower: Vec<Number>,
    pub upper: Vec<Number>,
}

impl Outliers {
    /// Returns `true` if `value` equals any lower or upper outlier.
    #[must_use]
    pub fn contains(&self, value: Number) -> bool {
        self.lower.iter().chain(&self.upper).any(|&o| o == value)
    }
}

/// Extent of the non-outlier values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Whiskers {
    pub lower: Number,
    pub upper: Number,
}

/// `q1 - 1.5 * iqr`.
///
/// ```
/// # use statscalc_stats::{box_plot::lower_fence, number::Number};
/// let data = [2, 4, 4, 4, 5, 5, 7, 9].map(Number::Int);
/// assert_eq!(lower_fence(&data).unwrap(), 1.0);
/// ```
pub fn lower_fence(data: &[Number]) -> Result<f64> {
    let (q1, _) = quartiles(data).map_err(|e| e.reraise(Operation::LowerFence))?;
    let iqr = iqr(data).map_err(|e| e.reraise(Operation::LowerFence))?;
    Ok(q1.as_f64() - FENCE_FACTOR * iqr.as_f64())
}

/// `q3 + 1.5 * iqr`.
pub fn upper_fence(data: &[Number]) -> Result<f64> {
    let (_, q3) = quartiles(data).map_err(|e| e.reraise(Operation::UpperFence))?;
    let iqr = iqr(data).map_err(|e| e.reraise(Operation::UpperFence))?;
    Ok(q3.as_f64() + FENCE_FACTOR * iqr.as_f64())
}

fn fences(data: &[Number], operation: Operation) -> Result<(f64, f64)> {
    let lower = lower_fence(data).map_err(|e| e.reraise(operation))?;
    let upper = upper_fence(data).map_err(|e| e.reraise(operation))?;
    Ok((lower, upper))
}

/// Splits off the values at or below the lower fence and at or above the
/// upper fence.
///
/// If the fences coincide the spread is degenerate and no value is reported.
///
/// ```
/// # use statscalc_stats::{box_plot::outliers, number::Number};
/// let data = [9, 2, 4, 4, 4, 5, 5, 7].map(Number::Int);
/// let outliers = outliers(&data).unwrap();
/// assert!(outliers.lower.is_empty());
/// assert_eq!(outliers.upper, vec![Number::Int(9)]);
/// ```
#[expect(clippy::float_cmp)]
pub fn outliers(data: &[Number]) -> Result<Outliers> {
    let (lower, upper) = fences(data, Operation::Outliers)?;
    if lower == upper {
        tracing::debug!(fence = lower, "fences coincide, reporting no outliers");
        return Ok(Outliers::default());
    }
    Ok(Outliers {
        lower: data.iter().copied().filter(|n| n.as_f64() <= lower).collect(),
        upper: data.iter().copied().filter(|n| n.as_f64() >= upper).collect(),
    })
}

/// Smallest and largest values strictly inside the fences.
///
/// Returns `None` when every value is at or beyond a fence, which is always
/// the case when the fences coincide.
pub fn whiskers(data: &[Number]) -> Result<Option<Whiskers>> {
    let (lower, upper) = fences(data, Operation::Whiskers)?;
    let inside = data
        .iter()
        .copied()
        .filter(|n| {
            let x = n.as_f64();
            x > lower && x < upper
        })
        .collect::<Vec<_>>();
    let whiskers = number::min_max(&inside).map(|(lower, upper)| Whiskers { lower, upper });
    if whiskers.is_none() {
        tracing::debug!(lower, upper, "no values inside the fences");
    }
    Ok(whiskers)
}
