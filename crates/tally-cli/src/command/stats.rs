use std::{path::PathBuf, time::Instant};

use tally_stats::StatisticsResult;

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct StatsArg {
    /// Input file with one number per line
    input: PathBuf,
    /// Report file path
    #[arg(long, default_value = "StatisticsResults.txt")]
    output: PathBuf,
}

pub(crate) fn run(arg: &StatsArg) -> anyhow::Result<()> {
    let text = util::read_input(&arg.input)?;

    let start = Instant::now();
    let (values, diagnostics) = tally_stats::parse_numbers(text.lines());
    let stats = StatisticsResult::from_values(&values);
    let elapsed = start.elapsed().as_secs_f64();

    util::print_diagnostics(&diagnostics);
    let report = tally_stats::render_report(&stats, elapsed);
    util::emit_report(&report, &arg.output)
}
