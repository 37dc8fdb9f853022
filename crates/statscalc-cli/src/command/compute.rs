//! Single-statistic computation for scripting.

use anyhow::Context;
use clap::{Args, ValueEnum};
use statscalc_stats::{self as stats, DEFAULT_ROUND_TO, Number};

use crate::{format, input};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Statistic {
    Summation,
    Mean,
    Mode,
    Multimodal,
    MeanDevs,
    MeanAbsDev,
    SquaredDist,
    Variance,
    Stdev,
    Pvariance,
    Pstdev,
    Range,
    MedianLoc,
    Median,
    QuartileIndex,
    Quartiles,
    Iqr,
    LowerFence,
    UpperFence,
    Outliers,
    Whiskers,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct ComputeArg {
    /// Statistic to compute
    #[arg(value_enum)]
    pub statistic: Statistic,

    /// Comma-separated data set
    #[arg(long, allow_hyphen_values = true)]
    pub values: String,

    /// Decimal places for rounded results
    #[arg(long, default_value_t = DEFAULT_ROUND_TO)]
    pub round_to: u32,
}

pub(crate) fn run(arg: &ComputeArg) -> anyhow::Result<()> {
    let data = input::parse_values(&arg.values)
        .with_context(|| format!("Invalid data set: {}", arg.values))?;
    println!("{}", compute(arg.statistic, &data, arg.round_to)?);
    Ok(())
}

/// Computes `statistic` over `data` and renders the result as text.
fn compute(statistic: Statistic, data: &[Number], round_to: u32) -> stats::Result<String> {
    let text = match statistic {
        Statistic::Summation => stats::summation(data)?.to_string(),
        Statistic::Mean => format::float(stats::mean(data, round_to)?),
        Statistic::Mode => format::list(stats::mode(data)?),
        Statistic::Multimodal => stats::multimodal(data)?.to_string(),
        Statistic::MeanDevs => format::float_list(&stats::mean_devs(data, round_to)?),
        Statistic::MeanAbsDev => format::float(stats::mean_abs_dev(data, round_to)?),
        Statistic::SquaredDist => format::float_list(&stats::squared_dist(data, round_to)?),
        Statistic::Variance => format::float(stats::variance(data, round_to)?),
        Statistic::Stdev => format::float(stats::stdev(data, round_to)?),
        Statistic::Pvariance => format::float(stats::pvariance(data, round_to)?),
        Statistic::Pstdev => format::float(stats::pstdev(data, round_to)?),
        Statistic::Range => stats::range(data, round_to)?.to_string(),
        Statistic::MedianLoc => format::float(stats::median_loc(data)?),
        Statistic::Median => stats::median(data)?.to_string(),
        Statistic::QuartileIndex => format::float(stats::quartile_index(data)?),
        Statistic::Quartiles => {
            let (q1, q3) = stats::quartiles(data)?;
            format!("({q1}, {q3})")
        }
        Statistic::Iqr => stats::iqr(data)?.to_string(),
        Statistic::LowerFence => format::float(stats::lower_fence(data)?),
        Statistic::UpperFence => format::float(stats::upper_fence(data)?),
        Statistic::Outliers => {
            let outliers = stats::outliers(data)?;
            format::list([format::list(outliers.lower), format::list(outliers.upper)])
        }
        Statistic::Whiskers => match stats::whiskers(data)? {
            Some(whiskers) => format!("({}, {})", whiskers.lower, whiskers.upper),
            None => "[]".to_owned(),
        },
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use statscalc_stats::{Operation, StatsError};

    use super::*;

    fn run_on(statistic: Statistic, values: &str) -> stats::Result<String> {
        let data = input::parse_values(values).unwrap();
        compute(statistic, &data, DEFAULT_ROUND_TO)
    }

    #[test]
    fn test_compute() {
        let values = "2, 4, 4, 4, 5, 5, 7, 9";
        assert_eq!(run_on(Statistic::Mean, values).unwrap(), "5.0");
        assert_eq!(run_on(Statistic::Mode, values).unwrap(), "[4]");
        assert_eq!(run_on(Statistic::Multimodal, values).unwrap(), "false");
        assert_eq!(run_on(Statistic::Variance, values).unwrap(), "4.5714");
        assert_eq!(run_on(Statistic::Pstdev, values).unwrap(), "2.0");
        assert_eq!(run_on(Statistic::Median, values).unwrap(), "4.0");
        assert_eq!(run_on(Statistic::Quartiles, values).unwrap(), "(4.0, 6.0)");
        assert_eq!(run_on(Statistic::Outliers, values).unwrap(), "[[], [9]]");
        assert_eq!(run_on(Statistic::Whiskers, values).unwrap(), "(2, 7)");
    }

    #[test]
    fn test_compute_reports_statistic_errors() {
        assert_eq!(
            run_on(Statistic::Stdev, "5"),
            Err(StatsError::Empty(Operation::Stdev))
        );
        assert_eq!(run_on(Statistic::Whiskers, "7, 7, 7").unwrap(), "[]");
    }

    #[test]
    fn test_statistic_names() {
        let names = Statistic::value_variants()
            .iter()
            .filter_map(|s| s.to_possible_value())
            .map(|v| v.get_name().to_owned())
            .collect::<Vec<_>>();
        assert!(names.contains(&"mean-abs-dev".to_owned()));
        assert!(names.contains(&"lower-fence".to_owned()));
        assert_eq!(names.len(), 21);
    }
}
