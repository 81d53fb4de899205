//! Line parsing and validation for the conversion pipeline.

use tally_report::Diagnostic;

/// One input line of the conversion pipeline.
///
/// Unlike the other pipelines, an unparsable token is retained (with no
/// value) so that it still occupies its row in the output table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionEntry {
    /// The original trimmed token from the input line.
    pub raw: String,
    /// The parsed integer, or `None` for an invalid token.
    pub value: Option<i64>,
}

/// Parses input lines into conversion entries.
///
/// Whitespace-only lines are skipped with a [`Diagnostic`]; any other line
/// becomes an entry, valid or not, preserving input order.
///
/// # Examples
///
/// ```
/// use tally_convert::parse_entries;
///
/// let (entries, diagnostics) = parse_entries("10\nabc\n-3".lines());
/// assert_eq!(entries.len(), 3);
/// assert_eq!(entries[1].raw, "abc");
/// assert_eq!(entries[1].value, None);
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[must_use]
pub fn parse_entries<'a, I>(lines: I) -> (Vec<ConversionEntry>, Vec<Diagnostic>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entries = Vec::new();
    let mut diagnostics = Vec::new();
    for (index, raw) in lines.into_iter().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() {
            diagnostics.push(Diagnostic::EmptyLine { line });
            continue;
        }
        let value = text.parse::<i64>().ok();
        if value.is_none() {
            diagnostics.push(Diagnostic::InvalidValue {
                line,
                text: text.to_string(),
            });
        }
        entries.push(ConversionEntry {
            raw: text.to_string(),
            value,
        });
    }
    (entries, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_integers_parse_with_sign() {
        let (entries, diagnostics) = parse_entries("10\n-3\n+7".lines());
        assert_eq!(
            entries.iter().map(|e| e.value).collect::<Vec<_>>(),
            [Some(10), Some(-3), Some(7)],
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_invalid_token_is_retained_at_its_position() {
        let (entries, diagnostics) = parse_entries("1\nabc\n3".lines());
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[1],
            ConversionEntry {
                raw: "abc".to_string(),
                value: None,
            },
        );
        assert_eq!(
            diagnostics,
            [Diagnostic::InvalidValue {
                line: 2,
                text: "abc".to_string(),
            }],
        );
    }

    #[test]
    fn test_real_number_is_not_a_valid_integer() {
        let (entries, _) = parse_entries("1.5".lines());
        assert_eq!(entries[0].value, None);
    }

    #[test]
    fn test_empty_line_produces_no_entry() {
        let (entries, diagnostics) = parse_entries("1\n\n2".lines());
        assert_eq!(entries.len(), 2);
        assert_eq!(diagnostics, [Diagnostic::EmptyLine { line: 2 }]);
    }
}
