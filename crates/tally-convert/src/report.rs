//! Tab-separated report rendering for the conversion pipeline.

use tally_report::format::{INVALID_VALUE, format_elapsed};

use crate::{base::convert_value, parse::ConversionEntry};

/// Renders the conversion table, without a trailing newline.
///
/// Header, one 1-indexed row per entry (invalid entries render the
/// `#VALUE!` sentinel in both base columns), then the elapsed time.
///
/// # Examples
///
/// ```
/// use tally_convert::{parse_entries, render_report};
///
/// let (entries, _) = parse_entries("10\nabc".lines());
/// let report = render_report(&entries, "INPUT", 0.0);
/// let lines = report.lines().collect::<Vec<_>>();
/// assert_eq!(lines[0], "ITEM\tINPUT\tBIN\tHEX");
/// assert_eq!(lines[1], "1\t10\t1010\tA");
/// assert_eq!(lines[2], "2\tabc\t#VALUE!\t#VALUE!");
/// ```
#[must_use]
pub fn render_report(entries: &[ConversionEntry], label: &str, elapsed_seconds: f64) -> String {
    let mut lines = vec![format!("ITEM\t{label}\tBIN\tHEX")];
    for (index, entry) in entries.iter().enumerate() {
        let (binary, hex) = match entry.value {
            Some(value) => convert_value(value),
            None => (INVALID_VALUE.to_string(), INVALID_VALUE.to_string()),
        };
        lines.push(format!("{}\t{}\t{binary}\t{hex}", index + 1, entry.raw));
    }
    lines.push(format!("ELAPSED_SECONDS\t{}", format_elapsed(elapsed_seconds)));
    lines.join("\n")
}
