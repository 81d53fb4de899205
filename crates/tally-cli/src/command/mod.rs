use clap::{Parser, Subcommand};

use self::{convert::ConvertArg, stats::StatsArg, words::WordsArg};

mod convert;
mod stats;
mod words;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which pipeline to run
    #[command(subcommand)]
    pipeline: Pipeline,
}

#[derive(Debug, Clone, Subcommand)]
enum Pipeline {
    /// Descriptive statistics over numbers read one per line
    Stats(#[clap(flatten)] StatsArg),
    /// Decimal integers to binary and hexadecimal
    Convert(#[clap(flatten)] ConvertArg),
    /// Word frequencies over free text
    Words(#[clap(flatten)] WordsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.pipeline {
        Pipeline::Stats(arg) => stats::run(&arg),
        Pipeline::Convert(arg) => convert::run(&arg),
        Pipeline::Words(arg) => words::run(&arg),
    }
}
