use std::{path::PathBuf, time::Instant};

use crate::util;

/// Column label of the original-value column in the conversion table.
const TABLE_LABEL: &str = "INPUT";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ConvertArg {
    /// Input file with one integer per line
    input: PathBuf,
    /// Report file path
    #[arg(long, default_value = "ConvertionResults.txt")]
    output: PathBuf,
}

pub(crate) fn run(arg: &ConvertArg) -> anyhow::Result<()> {
    let text = util::read_input(&arg.input)?;

    let start = Instant::now();
    let (entries, diagnostics) = tally_convert::parse_entries(text.lines());
    let elapsed = start.elapsed().as_secs_f64();

    util::print_diagnostics(&diagnostics);
    let report = tally_convert::render_report(&entries, TABLE_LABEL, elapsed);
    util::emit_report(&report, &arg.output)
}
