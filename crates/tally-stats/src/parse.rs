//! Line parsing and validation for the statistics pipeline.

use tally_report::Diagnostic;

/// Parses input lines into a numeric sample, skipping malformed lines.
///
/// Lines are trimmed before classification. Whitespace-only lines and lines
/// that do not parse as a real number are skipped with a [`Diagnostic`];
/// valid values are kept in input order, duplicates included. Parsing never
/// fails as a whole.
///
/// # Examples
///
/// ```
/// use tally_report::Diagnostic;
/// use tally_stats::parse_numbers;
///
/// let (values, diagnostics) = parse_numbers("1.5\nbad\n2".lines());
/// assert_eq!(values, [1.5, 2.0]);
/// assert_eq!(
///     diagnostics,
///     [Diagnostic::InvalidValue {
///         line: 2,
///         text: "bad".to_string(),
///     }],
/// );
/// ```
#[must_use]
pub fn parse_numbers<'a, I>(lines: I) -> (Vec<f64>, Vec<Diagnostic>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut values = Vec::new();
    let mut diagnostics = Vec::new();
    for (index, raw) in lines.into_iter().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() {
            diagnostics.push(Diagnostic::EmptyLine { line });
            continue;
        }
        match text.parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) => diagnostics.push(Diagnostic::InvalidValue {
                line,
                text: text.to_string(),
            }),
        }
    }
    (values, diagnostics)
}
