use std::{path::PathBuf, time::Instant};

use tally_words::WordFrequencyTable;

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct WordsArg {
    /// Input text file
    input: PathBuf,
    /// Report file path
    #[arg(long, default_value = "WordCountResults.txt")]
    output: PathBuf,
}

pub(crate) fn run(arg: &WordsArg) -> anyhow::Result<()> {
    let text = util::read_input(&arg.input)?;
    // The count column is labeled after the input file, extension dropped.
    let label = arg
        .input
        .file_stem()
        .map_or_else(String::new, |stem| stem.to_string_lossy().into_owned());

    let start = Instant::now();
    let (words, diagnostics) = tally_words::parse_words(text.lines());
    let table = WordFrequencyTable::from_words(words.iter().map(String::as_str));
    let elapsed = start.elapsed().as_secs_f64();

    util::print_diagnostics(&diagnostics);
    let report = tally_words::render_report(&table, &label, elapsed);
    util::emit_report(&report, &arg.output)
}
