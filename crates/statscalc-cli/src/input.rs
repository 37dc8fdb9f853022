//! Reading a data set from a line of comma-separated values.

use std::io::{BufRead, Write};

use anyhow::Context;
use statscalc_stats::Number;

pub(crate) const SEPARATOR_WIDTH: usize = 70;
const PROMPT: &str = "Enter data set values separated by a comma: ";

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum InputError {
    #[display("Use numerical values only.")]
    NotNumeric { token: String },
    #[display("You must enter at least {min} values.")]
    TooFew { count: usize, min: usize },
}

/// Parses a comma-separated line into numbers.
///
/// Tokens are trimmed and parsed as floats. Whole values become integers.
/// Empty and non-finite tokens are rejected.
pub(crate) fn parse_values(line: &str) -> Result<Vec<Number>, InputError> {
    line.trim()
        .split(',')
        .map(|token| {
            token
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|x| x.is_finite())
                .map(Number::from_f64_coerced)
                .ok_or_else(|| InputError::NotNumeric {
                    token: token.to_owned(),
                })
        })
        .collect()
}

/// Parses a line and checks it holds at least `min_values` values.
pub(crate) fn read_data(line: &str, min_values: usize) -> Result<Vec<Number>, InputError> {
    let data = parse_values(line)?;
    if data.len() < min_values {
        return Err(InputError::TooFew {
            count: data.len(),
            min: min_values,
        });
    }
    Ok(data)
}

/// Writes the title banner framed by separator lines.
pub(crate) fn write_banner<W>(writer: &mut W) -> std::io::Result<()>
where
    W: Write,
{
    let separator = "-".repeat(SEPARATOR_WIDTH);
    writeln!(writer, "{separator}")?;
    writeln!(writer, "DATA SET STATS CALCULATOR")?;
    writeln!(writer, "{separator}")
}

/// Prompts until a valid data set is entered.
///
/// Invalid lines print an error and prompt again. Fails if the input ends
/// before a valid line is read.
pub(crate) fn prompt_values<R, W>(
    reader: &mut R,
    writer: &mut W,
    min_values: usize,
) -> anyhow::Result<Vec<Number>>
where
    R: BufRead,
    W: Write,
{
    write_banner(writer).context("Failed to write banner")?;
    let mut line = String::new();
    loop {
        write!(writer, "{PROMPT}").context("Failed to write prompt")?;
        writer.flush().context("Failed to flush prompt")?;

        line.clear();
        let read = reader
            .read_line(&mut line)
            .context("Failed to read data set")?;
        if read == 0 {
            anyhow::bail!("Input ended before a data set was entered");
        }

        match read_data(&line, min_values) {
            Ok(data) => {
                tracing::debug!(count = data.len(), "data set entered");
                return Ok(data);
            }
            Err(err) => {
                if let InputError::NotNumeric { token } = &err {
                    tracing::debug!(token = %token, "rejected token");
                }
                writeln!(writer, "ERROR: {err}").context("Failed to write error")?;
            }
        }
    }
}
