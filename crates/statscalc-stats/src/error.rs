/// A statistics operation, used to name the layer that reported an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Operation {
    #[display("mean")]
    Mean,
    #[display("mode")]
    Mode,
    #[display("multimodal")]
    Multimodal,
    #[display("mean_devs")]
    MeanDevs,
    #[display("mean_abs_devs")]
    MeanAbsDev,
    #[display("squared_dist")]
    SquaredDist,
    #[display("variance")]
    Variance,
    #[display("stdev")]
    Stdev,
    #[display("pvariance")]
    Pvariance,
    #[display("pstdev")]
    Pstdev,
    #[display("summation")]
    Summation,
    #[display("range")]
    Range,
    #[display("median_loc")]
    MedianLoc,
    #[display("median")]
    Median,
    #[display("quartile_index")]
    QuartileIndex,
    #[display("quartiles")]
    Quartiles,
    #[display("iqr")]
    Iqr,
    #[display("lower_fence")]
    LowerFence,
    #[display("upper_fence")]
    UpperFence,
    #[display("outliers")]
    Outliers,
    #[display("whiskers")]
    Whiskers,
}

impl Operation {
    /// What a single input element is called in this operation's messages.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Mode | Self::Multimodal => "item",
            _ => "data point",
        }
    }
}

/// Errors reported by every statistics operation.
///
/// There are exactly two kinds. Each operation re-wraps the errors of the
/// operations it is built on, so the [`Operation`] carried by an error always
/// names the function that was actually called.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum StatsError {
    /// The sample has too few elements for the requested statistic.
    #[display("{_0} requires at least one {}", _0.unit())]
    Empty(#[error(not(source))] Operation),
    /// The sample contains a value arithmetic cannot be performed on.
    #[display("{_0} expects numerical values")]
    Data(#[error(not(source))] Operation),
}

impl StatsError {
    /// Returns the operation that reported this error.
    #[must_use]
    pub const fn operation(self) -> Operation {
        match self {
            Self::Empty(op) | Self::Data(op) => op,
        }
    }

    /// Re-raises this error as the same kind reported by `operation`.
    #[must_use]
    pub const fn reraise(self, operation: Operation) -> Self {
        match self {
            Self::Empty(_) => Self::Empty(operation),
            Self::Data(_) => Self::Data(operation),
        }
    }
}

/// Result alias for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;
