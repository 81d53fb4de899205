use std::{fs, path::Path};

use anyhow::Context as _;
use tally_report::Diagnostic;

pub(crate) fn read_input(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}

pub(crate) fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        println!("{diagnostic}");
    }
}

/// Prints the report to the console and writes it (with a trailing newline)
/// to the report file.
pub(crate) fn emit_report(report: &str, path: &Path) -> anyhow::Result<()> {
    println!("{report}");
    fs::write(path, format!("{report}\n"))
        .with_context(|| format!("Failed to write report file: {}", path.display()))
}
