//! Per-line diagnostics emitted by the input validators.
//!
//! Parsers never abort on malformed input; they collect one [`Diagnostic`]
//! per problematic line and keep going. Rendering the diagnostics (and
//! deciding where they go) is the caller's job, which keeps the pipeline
//! cores free of console side effects.

/// A single advisory finding about one input line.
///
/// Line numbers are 1-indexed. The display form is the exact text shown to
/// the user:
///
/// ```
/// use tally_report::Diagnostic;
///
/// let diagnostic = Diagnostic::InvalidValue {
///     line: 3,
///     text: "abc".to_string(),
/// };
/// assert_eq!(diagnostic.to_string(), "Line 3: invalid value 'abc'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Diagnostic {
    /// The line contained nothing but whitespace and was skipped.
    #[display("Line {line}: empty line skipped")]
    EmptyLine { line: usize },
    /// The line (or one of its tokens) failed validation.
    #[display("Line {line}: invalid value '{text}'")]
    InvalidValue { line: usize, text: String },
}

impl Diagnostic {
    /// The 1-indexed input line this diagnostic refers to.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Diagnostic::EmptyLine { line } | Diagnostic::InvalidValue { line, .. } => *line,
        }
    }
}
