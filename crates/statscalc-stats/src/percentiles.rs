//! Order statistics: median and quartiles.
//!
//! Locations are zero-based float indices into the data once it is sorted
//! ascending. Lookups use signed indices where negative values count from
//! the end of the sorted copy.

use crate::{
    error::{Operation, Result, StatsError},
    number::{Number, ensure_numeric, signed_index, sorted_copy},
};

/// Offset applied on both sides of a fractional quartile location before
/// rounding it to its neighbouring indices.
const NEIGHBOUR_OFFSET: f64 = 0.499_999_999_9;

/// Float location of the median, `len / 2 - 0.5`.
///
/// This only looks at the length; the location refers to the data sorted
/// ascending.
///
/// ```
/// # use statscalc_stats::{number::Number, percentiles::median_loc};
/// assert_eq!(median_loc(&[Number::Int(9); 4]).unwrap(), 1.5);
/// assert_eq!(median_loc(&[Number::Int(9); 5]).unwrap(), 2.0);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn median_loc(data: &[Number]) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::Empty(Operation::MedianLoc));
    }
    Ok(data.len() as f64 / 2.0 - 0.5)
}

/// Median of `data`.
///
/// Odd lengths return the middle element of the sorted copy. Even lengths
/// average the two elements at `idx - 1` and `idx - 2`, where `idx` is the
/// truncated [`median_loc`] and negative indices wrap to the end. For
/// `[1, 2, 3, 4]` that is `(4 + 1) / 2`.
///
/// ```
/// # use statscalc_stats::{number::Number, percentiles::median};
/// assert_eq!(median(&[3, 1, 2].map(Number::Int)).unwrap(), Number::Int(2));
/// assert_eq!(median(&[1, 2, 3, 4].map(Number::Int)).unwrap(), Number::Float(2.5));
/// assert_eq!(median(&[1, 2, 3, 4, 5, 6].map(Number::Int)).unwrap(), Number::Float(1.5));
/// ```
#[expect(clippy::cast_possible_truncation)]
pub fn median(data: &[Number]) -> Result<Number> {
    ensure_numeric(data, Operation::Median)?;
    let sorted = sorted_copy(data);
    let index = median_loc(&sorted).map_err(|e| e.reraise(Operation::Median))? as isize;
    let at = |i| signed_index(&sorted, i).ok_or(StatsError::Empty(Operation::Median));

    if sorted.len() % 2 == 1 {
        at(index)
    } else {
        Ok(Number::Float(at(index - 1)?.midpoint(at(index - 2)?)))
    }
}

/// Float location of the first quartile, `(median_loc + 1.5) / 2`.
pub fn quartile_index(data: &[Number]) -> Result<f64> {
    let loc = median_loc(data).map_err(|e| e.reraise(Operation::QuartileIndex))?;
    Ok((loc + 1.5) / 2.0)
}

/// First and third quartiles, `(q1, q3)`.
///
/// When [`quartile_index`] is a whole number `k`, `q1` is the `k`-th smallest
/// value and `q3` the `k`-th largest. Otherwise each quartile is the mean of
/// the two values around the location, mirrored from the end for `q3`. The
/// location is whole exactly when the length is `2 mod 4`.
///
/// ```
/// # use statscalc_stats::{number::Number, percentiles::quartiles};
/// let (q1, q3) = quartiles(&[6, 1, 5, 2, 4, 3].map(Number::Int)).unwrap();
/// assert_eq!((q1, q3), (Number::Int(2), Number::Int(5)));
///
/// let (q1, q3) = quartiles(&[1, 2, 3, 4, 5, 6, 7, 8].map(Number::Int)).unwrap();
/// assert_eq!((q1, q3), (Number::Float(2.5), Number::Float(6.5)));
/// ```
#[expect(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn quartiles(data: &[Number]) -> Result<(Number, Number)> {
    ensure_numeric(data, Operation::Quartiles)?;
    let sorted = sorted_copy(data);
    let loc = quartile_index(&sorted).map_err(|e| e.reraise(Operation::Quartiles))?;
    let at = |i| signed_index(&sorted, i).ok_or(StatsError::Empty(Operation::Quartiles));

    let rem = loc % 2.0;
    if rem == 1.0 || rem == 0.0 {
        let loc = loc as isize;
        return Ok((at(loc - 1)?, at(-loc)?));
    }

    let floor = (loc - NEIGHBOUR_OFFSET).round_ties_even() as isize - 1;
    let ceil = (loc + NEIGHBOUR_OFFSET).round_ties_even() as isize - 1;
    tracing::trace!(loc, floor, ceil, "fractional quartile location");

    let q1 = at(floor)?.midpoint(at(ceil)?);
    let q3 = at(-floor - 1)?.midpoint(at(-ceil - 1)?);
    Ok((Number::Float(q1), Number::Float(q3)))
}

/// Interquartile range, `q3 - q1`.
pub fn iqr(data: &[Number]) -> Result<Number> {
    let (q1, q3) = quartiles(data).map_err(|e| e.reraise(Operation::Iqr))?;
    Ok(q3 - q1)
}
