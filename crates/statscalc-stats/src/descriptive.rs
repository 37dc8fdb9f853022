//! Central tendency and dispersion.
//!
//! Higher-level measures are built on lower ones and call them with
//! [`DEFAULT_ROUND_TO`], so intermediate results are rounded before the
//! caller's own `round_to` is applied. `variance(data, 2)` therefore divides
//! the sum of distances already rounded to four places.

use crate::{
    error::{Operation, Result, StatsError},
    number::{self, DEFAULT_ROUND_TO, Number, ensure_numeric, sorted_copy},
};

/// Sum of all values. Stays an integer while every value is one.
///
/// ```
/// # use statscalc_stats::{descriptive::summation, number::Number};
/// let data = [Number::Int(1), Number::Int(2), Number::Float(0.5)];
/// assert_eq!(summation(&data).unwrap(), Number::Float(3.5));
/// ```
pub fn summation(data: &[Number]) -> Result<Number> {
    ensure_numeric(data, Operation::Summation)?;
    Ok(data.iter().fold(Number::Int(0), |acc, &n| acc + n))
}

/// Arithmetic mean, rounded to `round_to` places.
///
/// ```
/// # use statscalc_stats::{descriptive::mean, number::Number};
/// let data = [1, 2, 2].map(Number::Int);
/// assert_eq!(mean(&data, 2).unwrap(), 1.67);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean(data: &[Number], round_to: u32) -> Result<f64> {
    let sum = summation(data).map_err(|e| e.reraise(Operation::Mean))?;
    Ok(number::round(sum.as_f64() / data.len() as f64, round_to))
}

/// Most frequent values, in ascending order.
///
/// Every value sharing the highest count is returned. Values that compare
/// equal (`1` and `1.0`) are counted together and reported as the first one
/// seen.
pub fn mode(data: &[Number]) -> Result<Vec<Number>> {
    ensure_numeric(data, Operation::Mode)?;

    // stable sort keeps the first occurrence at the head of each run
    let sorted = sorted_copy(data);
    let frequencies = sorted
        .chunk_by(|a, b| a == b)
        .map(|run| (run[0], run.len()))
        .collect::<Vec<_>>();
    let max_count = frequencies
        .iter()
        .map(|&(_, count)| count)
        .max()
        .ok_or(StatsError::Empty(Operation::Mode))?;

    Ok(frequencies
        .into_iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(value, _)| value)
        .collect())
}

/// Whether `data` has more than one mode.
pub fn multimodal(data: &[Number]) -> Result<bool> {
    let modes = mode(data).map_err(|e| e.reraise(Operation::Multimodal))?;
    Ok(modes.len() > 1)
}

/// Absolute distance of each value from the mean, in input order.
pub fn mean_devs(data: &[Number], round_to: u32) -> Result<Vec<f64>> {
    let avg = mean(data, DEFAULT_ROUND_TO).map_err(|e| e.reraise(Operation::MeanDevs))?;
    Ok(data
        .iter()
        .map(|n| number::round((avg - n.as_f64()).abs(), round_to))
        .collect())
}

/// Mean absolute deviation: the average of [`mean_devs`].
#[expect(clippy::cast_precision_loss)]
pub fn mean_abs_dev(data: &[Number], round_to: u32) -> Result<f64> {
    let devs =
        mean_devs(data, DEFAULT_ROUND_TO).map_err(|e| e.reraise(Operation::MeanAbsDev))?;
    let sum = devs.iter().sum::<f64>();
    Ok(number::round(sum / data.len() as f64, round_to))
}

/// Squared distance of each value from the mean, in input order.
pub fn squared_dist(data: &[Number], round_to: u32) -> Result<Vec<f64>> {
    let avg = mean(data, DEFAULT_ROUND_TO).map_err(|e| e.reraise(Operation::SquaredDist))?;
    Ok(data
        .iter()
        .map(|n| number::round((n.as_f64() - avg).powi(2), round_to))
        .collect())
}

/// Sum of squared distances divided by `divisor_offset` less than the count.
#[expect(clippy::cast_precision_loss)]
fn spread(data: &[Number], divisor_offset: usize, operation: Operation) -> Result<f64> {
    let distances =
        squared_dist(data, DEFAULT_ROUND_TO).map_err(|e| e.reraise(operation))?;
    let divisor = data
        .len()
        .checked_sub(divisor_offset)
        .filter(|&d| d > 0)
        .ok_or(StatsError::Empty(operation))?;
    Ok(distances.iter().sum::<f64>() / divisor as f64)
}

/// Sample variance (divides by `n - 1`).
///
/// Fails with [`StatsError::Empty`] for fewer than two values.
///
/// ```
/// # use statscalc_stats::{descriptive::variance, error::{Operation, StatsError}, number::Number};
/// let data = [2, 4, 4, 4, 5, 5, 7, 9].map(Number::Int);
/// assert_eq!(variance(&data, 4).unwrap(), 4.5714);
/// assert_eq!(
///     variance(&[Number::Int(5)], 4),
///     Err(StatsError::Empty(Operation::Variance))
/// );
/// ```
pub fn variance(data: &[Number], round_to: u32) -> Result<f64> {
    Ok(number::round(
        spread(data, 1, Operation::Variance)?,
        round_to,
    ))
}

/// Sample standard deviation: the square root of [`variance`].
pub fn stdev(data: &[Number], round_to: u32) -> Result<f64> {
    let var = variance(data, DEFAULT_ROUND_TO).map_err(|e| e.reraise(Operation::Stdev))?;
    Ok(number::round(var.sqrt(), round_to))
}

/// Population variance (divides by `n`). Defined for a single value.
pub fn pvariance(data: &[Number], round_to: u32) -> Result<f64> {
    Ok(number::round(
        spread(data, 0, Operation::Pvariance)?,
        round_to,
    ))
}

/// Population standard deviation: the square root of [`pvariance`].
pub fn pstdev(data: &[Number], round_to: u32) -> Result<f64> {
    let var = pvariance(data, DEFAULT_ROUND_TO).map_err(|e| e.reraise(Operation::Pstdev))?;
    Ok(number::round(var.sqrt(), round_to))
}

/// Difference between the largest and smallest value.
pub fn range(data: &[Number], round_to: u32) -> Result<Number> {
    ensure_numeric(data, Operation::Range)?;
    let (min, max) = number::min_max(data).ok_or(StatsError::Empty(Operation::Range))?;
    Ok((max - min).round(round_to))
}
