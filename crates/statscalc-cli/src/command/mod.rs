use clap::{Parser, Subcommand};

use self::{compute::ComputeArg, report::ReportArg};

mod compute;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print a full statistical report for a data set (default)
    Report(#[clap(flatten)] ReportArg),
    /// Compute a single statistic
    Compute(#[clap(flatten)] ComputeArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Report(ReportArg::default())) {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Compute(arg) => compute::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_args() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_default_mode_is_none() {
        let args = CommandArgs::try_parse_from(["statscalc"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_compute_args() {
        let args = CommandArgs::try_parse_from([
            "statscalc",
            "compute",
            "mean-abs-dev",
            "--values",
            "1,2,3",
            "--round-to",
            "2",
        ])
        .unwrap();
        let Some(Mode::Compute(arg)) = args.mode else {
            panic!("expected compute mode");
        };
        assert_eq!(arg.round_to, 2);
        assert_eq!(arg.values, "1,2,3");
    }
}
