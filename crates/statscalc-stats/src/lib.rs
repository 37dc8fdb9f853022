//! Descriptive statistics over small in-memory data sets.
//!
//! This crate provides:
//!
//! - **Central tendency and dispersion**: mean, mode, mean/absolute deviations,
//!   sample and population variance and standard deviation
//! - **Order statistics**: median and quartile locations, median, quartiles, IQR
//! - **Box plots**: fences, outliers and whiskers
//! - **Comprehensive statistics**: every measure above computed in one call
//!
//! Every operation is a pure function over a slice of [`Number`]s. Operations
//! fail with [`StatsError::Empty`] when the data has too few values and with
//! [`StatsError::Data`] when it contains a non-finite value. Errors are
//! re-raised by every layer, so they always name the function that was called.
//!
//! # Modules
//!
//! - [`number`]: sample values and rounding
//! - [`error`]: the error taxonomy
//! - [`descriptive`]: central tendency and dispersion
//! - [`percentiles`]: median and quartiles
//! - [`box_plot`]: fences, outliers and whiskers
//! - [`comprehensive`]: a full report of a data set
//!
//! # Examples
//!
//! ## Computing single statistics
//!
//! ```
//! use statscalc_stats::{Number, mean, median, stdev};
//!
//! let data = [2, 4, 4, 4, 5, 5, 7, 9].map(Number::Int);
//! assert_eq!(mean(&data, 4).unwrap(), 5.0);
//! assert_eq!(median(&data).unwrap(), Number::Float(4.0));
//! assert_eq!(stdev(&data, 4).unwrap(), 2.1381);
//! ```
//!
//! ## Handling errors
//!
//! ```
//! use statscalc_stats::{Number, Operation, StatsError, variance};
//!
//! let err = variance(&[Number::Int(1)], 4).unwrap_err();
//! assert_eq!(err, StatsError::Empty(Operation::Variance));
//! assert_eq!(err.to_string(), "variance requires at least one data point");
//! ```
//!
//! ## Box plots
//!
//! ```
//! use statscalc_stats::{Number, outliers, whiskers};
//!
//! let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 100].map(Number::Int);
//! assert_eq!(outliers(&data).unwrap().upper, vec![Number::Int(100)]);
//!
//! let whiskers = whiskers(&data).unwrap().unwrap();
//! assert_eq!((whiskers.lower, whiskers.upper), (Number::Int(1), Number::Int(9)));
//! ```

pub use self::{
    box_plot::{Outliers, Whiskers, lower_fence, outliers, upper_fence, whiskers},
    descriptive::{
        mean, mean_abs_dev, mean_devs, mode, multimodal, pstdev, pvariance, range, squared_dist,
        stdev, summation, variance,
    },
    error::{Operation, Result, StatsError},
    number::{DEFAULT_ROUND_TO, Number},
    percentiles::{iqr, median, median_loc, quartile_index, quartiles},
};

pub mod box_plot;
pub mod comprehensive;
pub mod descriptive;
pub mod error;
pub mod number;
pub mod percentiles;
