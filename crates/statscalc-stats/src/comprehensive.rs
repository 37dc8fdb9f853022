use serde::Serialize;

use crate::{
    box_plot::{self, Outliers, Whiskers},
    descriptive,
    error::Result,
    number::{self, Number},
    percentiles,
};

/// Every measure of a data set in one place.
///
/// Values derived from order (fences, whiskers, outliers and the box plot)
/// are computed on the sorted data, so outliers are listed ascending.
///
/// # Examples
///
/// ```
/// use statscalc_stats::{comprehensive::ComprehensiveStats, number::Number};
///
/// let data = [2, 4, 4, 4, 5, 5, 7, 9].map(Number::Int);
/// let stats = ComprehensiveStats::new(&data, 4).unwrap();
///
/// assert_eq!(stats.mean, 5.0);
/// assert_eq!(stats.variance, Some(4.5714));
/// assert_eq!(stats.outliers.upper, vec![Number::Int(9)]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComprehensiveStats {
    /// The data set as given.
    pub data: Vec<Number>,
    /// The data set sorted ascending.
    pub sorted: Vec<Number>,
    pub count: usize,
    pub summation: Number,
    pub mean: f64,
    pub median_loc: f64,
    pub median: Number,
    pub mode: Vec<Number>,
    /// Absolute distance of each value (input order) from the mean.
    pub mean_devs: Vec<f64>,
    pub mean_abs_dev: f64,
    /// Squared distance of each value (input order) from the mean.
    pub squared_dist: Vec<f64>,
    /// Sample variance; `None` for a single value.
    pub variance: Option<f64>,
    /// Sample standard deviation; `None` for a single value.
    pub stdev: Option<f64>,
    pub pvariance: f64,
    pub pstdev: f64,
    pub range: Number,
    pub quartile_index: f64,
    pub q1: Number,
    pub q3: Number,
    pub iqr: Number,
    pub lower_fence: f64,
    pub upper_fence: f64,
    pub whiskers: Option<Whiskers>,
    pub outliers: Outliers,
    pub box_plot: BoxPlot,
}

/// The sorted data split into lower outliers, inner values and upper outliers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlot {
    pub lower: Vec<Number>,
    pub inner: Vec<Number>,
    pub upper: Vec<Number>,
}

impl BoxPlot {
    /// Builds the box plot from sorted values and their outliers.
    ///
    /// A value counts as inner unless it equals one of the outliers.
    #[must_use]
    pub fn from_sorted(sorted_values: &[Number], outliers: &Outliers) -> Self {
        let inner = sorted_values
            .iter()
            .copied()
            .filter(|&n| !outliers.contains(n))
            .collect();
        Self {
            lower: outliers.lower.clone(),
            inner,
            upper: outliers.upper.clone(),
        }
    }
}

impl ComprehensiveStats {
    /// Computes every measure, rounding dispersion results to `round_to` places.
    ///
    /// Fails with the error of the first measure that cannot be computed.
    pub fn new(data: &[Number], round_to: u32) -> Result<Self> {
        let sorted = number::sorted_copy(data);
        let summation = descriptive::summation(&sorted)?;

        let (variance, stdev) = if sorted.len() > 1 {
            (
                Some(descriptive::variance(data, round_to)?),
                Some(descriptive::stdev(data, round_to)?),
            )
        } else {
            (None, None)
        };
        let (q1, q3) = percentiles::quartiles(data)?;
        let outliers = box_plot::outliers(&sorted)?;
        let box_plot = BoxPlot::from_sorted(&sorted, &outliers);

        Ok(Self {
            count: data.len(),
            summation,
            mean: descriptive::mean(data, round_to)?,
            median_loc: percentiles::median_loc(data)?,
            median: percentiles::median(data)?,
            mode: descriptive::mode(data)?,
            mean_devs: descriptive::mean_devs(data, round_to)?,
            mean_abs_dev: descriptive::mean_abs_dev(data, round_to)?,
            squared_dist: descriptive::squared_dist(data, round_to)?,
            variance,
            stdev,
            pvariance: descriptive::pvariance(data, round_to)?,
            pstdev: descriptive::pstdev(data, round_to)?,
            range: descriptive::range(data, round_to)?,
            quartile_index: percentiles::quartile_index(data)?,
            q1,
            q3,
            iqr: percentiles::iqr(data)?,
            lower_fence: box_plot::lower_fence(&sorted)?,
            upper_fence: box_plot::upper_fence(&sorted)?,
            whiskers: box_plot::whiskers(&sorted)?,
            outliers,
            box_plot,
            data: data.to_vec(),
            sorted,
        })
    }

    /// Same as [`ComprehensiveStats::new`] with the default precision.
    pub fn with_default_precision(data: &[Number]) -> Result<Self> {
        Self::new(data, number::DEFAULT_ROUND_TO)
    }
}
