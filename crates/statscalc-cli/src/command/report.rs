//! Full statistical report of a data set.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Args, builder::RangedU64ValueParser};
use statscalc_stats::{DEFAULT_ROUND_TO, comprehensive::ComprehensiveStats};

use crate::{format, input, util::Output};

const DEFAULT_MIN_VALUES: usize = 2;

#[derive(Debug, Clone, Args)]
pub(crate) struct ReportArg {
    /// Comma-separated data set; prompts for one when omitted
    #[arg(long, allow_hyphen_values = true)]
    pub values: Option<String>,

    /// Decimal places for rounded results
    #[arg(long, default_value_t = DEFAULT_ROUND_TO)]
    pub round_to: u32,

    /// Minimum number of values accepted
    #[arg(
        long,
        default_value_t = DEFAULT_MIN_VALUES,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub min_values: usize,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Default for ReportArg {
    fn default() -> Self {
        Self {
            values: None,
            round_to: DEFAULT_ROUND_TO,
            min_values: DEFAULT_MIN_VALUES,
            json: false,
            output: None,
        }
    }
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let data = match &arg.values {
        Some(values) => input::read_data(values, arg.min_values)
            .with_context(|| format!("Invalid data set: {values}"))?,
        None => {
            // the dialog goes to stderr so stdout carries only the report
            let mut stdin = io::stdin().lock();
            let mut stderr = io::stderr().lock();
            input::prompt_values(&mut stdin, &mut stderr, arg.min_values)?
        }
    };
    tracing::debug!(count = data.len(), round_to = arg.round_to, "computing report");

    let stats = ComprehensiveStats::new(&data, arg.round_to)?;

    let mut output = Output::from_output_path(arg.output.clone())?;
    if arg.json {
        output.write_json(&stats)?;
    } else {
        write_text(&mut output, &stats)
            .with_context(|| format!("Failed to write report to {}", output.display_path()))?;
        output.finish()?;
    }
    Ok(())
}

/// Writes the labelled report, one value per label.
fn write_text<W>(writer: &mut W, stats: &ComprehensiveStats) -> io::Result<()>
where
    W: Write,
{
    writeln!(writer, "{}", "-".repeat(input::SEPARATOR_WIDTH))?;
    let mut item = |label: &str, value: String| -> io::Result<()> {
        writeln!(writer, "{label}:")?;
        writeln!(writer, "\t  {value}")
    };

    item("Data set", format::list(&stats.data))?;
    item("Sorted data set", format::list(&stats.sorted))?;
    item("Population/sample size (N/n)", stats.count.to_string())?;
    item("Summation", stats.summation.to_string())?;
    item("Mean", format::float(stats.mean))?;
    item("Median Location", format::float(stats.median_loc))?;
    item("Median", stats.median.to_string())?;
    item("Mode", format::list(&stats.mode))?;
    item("Distance from mean", format::float_list(&stats.mean_devs))?;
    item("Mean absolute deviation", format::float(stats.mean_abs_dev))?;
    item("Squared distance from mean", format::float_list(&stats.squared_dist))?;
    item("Sample variance", format::optional(stats.variance.map(format::float)))?;
    item(
        "Sample standard deviation",
        format::optional(stats.stdev.map(format::float)),
    )?;
    item("Population variance", format::float(stats.pvariance))?;
    item("Population standard deviation", format::float(stats.pstdev))?;
    item("Range", stats.range.to_string())?;
    item("Quartile location (index)", format::float(stats.quartile_index))?;
    item("1st quartile (Q1)", stats.q1.to_string())?;
    item("3rd quartile (Q3)", stats.q3.to_string())?;
    item("Interquartile range (Q3 - Q1)", stats.iqr.to_string())?;
    item("Lower fence", format::float(stats.lower_fence))?;
    item("Upper fence", format::float(stats.upper_fence))?;
    item(
        "[Box-and-Whisker] Lower whisker extends to",
        format::optional(stats.whiskers.map(|w| w.lower)),
    )?;
    item(
        "[Box-and-Whisker] Upper whisker extends to",
        format::optional(stats.whiskers.map(|w| w.upper)),
    )?;
    item(
        "[Box-and-Whisker] Outliers",
        format::list([
            format::list(&stats.outliers.lower),
            format::list(&stats.outliers.upper),
        ]),
    )?;
    let plot = &stats.box_plot;
    item(
        "[Box-and-Whisker] Box plot",
        format!(
            "{} | {} | {}",
            format::list(&plot.lower),
            format::list(&plot.inner),
            format::list(&plot.upper)
        ),
    )
}
