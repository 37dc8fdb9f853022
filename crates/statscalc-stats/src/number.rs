use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Sub},
};

use serde::Serialize;

use crate::error::{Operation, Result, StatsError};

/// Number of decimal places results are rounded to unless a caller asks otherwise.
pub const DEFAULT_ROUND_TO: u32 = 4;

/// A single sample value.
///
/// Integers stay integers through operations that only pick, add or subtract
/// elements; anything involving division or scaling produces a float.
/// Integers and floats compare numerically, so `Int(1) == Float(1.0)`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Converts the value to `f64`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(x) => x,
        }
    }

    /// Returns `true` unless the value is a non-finite float.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(x) => x.is_finite(),
        }
    }

    /// Builds a number from a parsed float, turning whole values into integers.
    ///
    /// ```
    /// # use statscalc_stats::number::Number;
    /// assert!(matches!(Number::from_f64_coerced(3.0), Number::Int(3)));
    /// assert!(matches!(Number::from_f64_coerced(2.5), Number::Float(_)));
    /// ```
    #[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_f64_coerced(x: f64) -> Self {
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if x.is_finite() && x.fract() == 0.0 && x >= i64::MIN as f64 && x < i64::MAX as f64 {
            Self::Int(x as i64)
        } else {
            Self::Float(x)
        }
    }

    /// Rounds to `digits` decimal places. Integers are returned unchanged.
    #[must_use]
    pub fn round(self, digits: u32) -> Self {
        match self {
            Self::Int(_) => self,
            Self::Float(x) => Self::Float(round(x, digits)),
        }
    }

    /// Arithmetic mean of two numbers. Always a float.
    #[must_use]
    pub fn midpoint(self, other: Self) -> f64 {
        (self + other).as_f64() / 2.0
    }
}

// Integer results stay integral while both sides are integers and the result
// fits in an `i64`.
impl Add for Number {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Self::Float(self.as_f64() + other.as_f64()), Self::Int),
            _ => Self::Float(self.as_f64() + other.as_f64()),
        }
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_sub(b)
                .map_or_else(|| Self::Float(self.as_f64() - other.as_f64()), Self::Int),
            _ => Self::Float(self.as_f64() - other.as_f64()),
        }
    }
}

impl PartialEq for Number {
    #[expect(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{x:.1}")
            }
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

/// Rounds `x` to `digits` decimal places.
///
/// The decision is made on the exact binary value of `x`, so `2.675` (stored
/// as `2.67499999...`) rounds down to `2.67`.
///
/// ```
/// # use statscalc_stats::number::round;
/// assert_eq!(round(2.675, 2), 2.67);
/// assert_eq!(round(1.23456, 4), 1.2346);
/// ```
#[must_use]
pub fn round(x: f64, digits: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let precision = digits as usize;
    format!("{x:.precision$}").parse().unwrap_or(x)
}

/// Rejects samples that are empty or contain non-finite values, reporting
/// the failure as `operation`.
pub(crate) fn ensure_numeric(data: &[Number], operation: Operation) -> Result<()> {
    if data.is_empty() {
        return Err(StatsError::Empty(operation));
    }
    if !data.iter().all(|n| n.is_finite()) {
        return Err(StatsError::Data(operation));
    }
    Ok(())
}

/// Returns the smallest and largest values, keeping the first of equal
/// extremes.
pub(crate) fn min_max(values: &[Number]) -> Option<(Number, Number)> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold((first, first), |(min, max), &n| {
        (if n < min { n } else { min }, if n > max { n } else { max })
    }))
}

/// Sorts a private copy of `data` ascending.
///
/// Callers must have rejected non-finite values; incomparable pairs are
/// treated as equal.
pub(crate) fn sorted_copy(data: &[Number]) -> Vec<Number> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Looks up `index` in `values`, counting negative indices from the end.
pub(crate) fn signed_index(values: &[Number], index: isize) -> Option<Number> {
    let index = if index < 0 {
        values.len().checked_sub(index.unsigned_abs())?
    } else {
        index.unsigned_abs()
    };
    values.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_and_float_compare_numerically() {
        assert_eq!(Number::Int(1), Number::Float(1.0));
        assert!(Number::Int(1) < Number::Float(1.5));
        assert!(Number::Float(-2.0) < Number::Int(0));
    }

    #[test]
    fn test_integer_arithmetic_stays_integral() {
        assert!(matches!(Number::Int(2) + Number::Int(3), Number::Int(5)));
        assert!(matches!(Number::Int(2) - Number::Int(3), Number::Int(-1)));
        assert!(matches!(Number::Int(2) + Number::Float(0.5), Number::Float(x) if x == 2.5));
    }

    #[test]
    fn test_integer_overflow_promotes_to_float() {
        let sum = Number::Int(i64::MAX) + Number::Int(1);
        assert!(matches!(sum, Number::Float(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Int(3).to_string(), "3");
        assert_eq!(Number::Float(3.0).to_string(), "3.0");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
        assert_eq!(Number::Float(-0.125).to_string(), "-0.125");
    }

    #[test]
    fn test_round_leaves_integers_alone() {
        assert!(matches!(Number::Int(7).round(2), Number::Int(7)));
        assert!(matches!(Number::Float(1.23456).round(2), Number::Float(x) if x == 1.23));
    }

    #[test]
    fn test_round_uses_exact_value() {
        assert_eq!(round(1.0 / 3.0, 4), 0.3333);
        assert_eq!(round(2.0 / 3.0, 4), 0.6667);
        assert_eq!(round(1.005, 2), 1.0);
        assert_eq!(round(-7.123_45, 3), -7.123);
        assert_eq!(round(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn test_signed_index() {
        let values = [Number::Int(1), Number::Int(2), Number::Int(3)];
        assert_eq!(signed_index(&values, 0), Some(Number::Int(1)));
        assert_eq!(signed_index(&values, -1), Some(Number::Int(3)));
        assert_eq!(signed_index(&values, -3), Some(Number::Int(1)));
        assert_eq!(signed_index(&values, -4), None);
        assert_eq!(signed_index(&values, 3), None);
    }

    #[test]
    fn test_min_max_keeps_first_extreme() {
        let values = [Number::Float(3.0), Number::Int(1), Number::Int(3), Number::Float(1.0)];
        let (min, max) = min_max(&values).unwrap();
        assert!(matches!(min, Number::Int(1)));
        assert!(matches!(max, Number::Float(x) if x == 3.0));
        assert!(min_max(&[]).is_none());
    }

    #[test]
    fn test_ensure_numeric() {
        assert_eq!(
            ensure_numeric(&[], Operation::Mean),
            Err(StatsError::Empty(Operation::Mean))
        );
        assert_eq!(
            ensure_numeric(&[Number::Int(1), Number::Float(f64::NAN)], Operation::Median),
            Err(StatsError::Data(Operation::Median))
        );
        assert_eq!(ensure_numeric(&[Number::Int(1)], Operation::Median), Ok(()));
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let values = [Number::Int(2), Number::Float(2.5)];
        assert_eq!(serde_json::to_string(&values).unwrap(), "[2,2.5]");
    }

    #[test]
    fn test_from_f64_coerced() {
        assert!(matches!(Number::from_f64_coerced(-4.0), Number::Int(-4)));
        assert!(matches!(Number::from_f64_coerced(1e300), Number::Float(_)));
        assert!(matches!(Number::from_f64_coerced(f64::NAN), Number::Float(_)));
    }
}
