//! Tab-separated report rendering for the word-count pipeline.

use tally_report::format::format_elapsed;

use crate::frequency::WordFrequencyTable;

/// Renders the word-count table, without a trailing newline.
///
/// Header, one `word\tcount` row per distinct word in ranked order, then
/// the elapsed time.
///
/// # Examples
///
/// ```
/// use tally_words::{WordFrequencyTable, render_report};
///
/// let table = WordFrequencyTable::from_words(["a", "b", "a"]);
/// let report = render_report(&table, "sample", 0.0);
/// assert!(report.starts_with("Row Labels\tCount of sample\na\t2\nb\t1"));
/// ```
#[must_use]
pub fn render_report(table: &WordFrequencyTable, label: &str, elapsed_seconds: f64) -> String {
    let mut lines = vec![format!("Row Labels\tCount of {label}")];
    for (word, count) in table.ranked() {
        lines.push(format!("{word}\t{count}"));
    }
    lines.push(format!("ELAPSED_SECONDS\t{}", format_elapsed(elapsed_seconds)));
    lines.join("\n")
}
