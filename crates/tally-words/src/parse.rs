//! Tokenization and validation for the word-count pipeline.

use tally_report::Diagnostic;

/// Splits input lines into validated words.
///
/// Each line is split on whitespace; a token is kept only when it consists
/// entirely of ASCII letters. Case is preserved. Rejected tokens and
/// whitespace-only lines each produce a [`Diagnostic`] and processing
/// continues.
///
/// # Examples
///
/// ```
/// use tally_words::parse_words;
///
/// let (words, diagnostics) = parse_words("The cat, the cat".lines());
/// assert_eq!(words, ["The", "the", "cat"]);
/// assert_eq!(diagnostics.len(), 1); // the "cat," token is rejected
/// ```
#[must_use]
pub fn parse_words<'a, I>(lines: I) -> (Vec<String>, Vec<Diagnostic>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut words = Vec::new();
    let mut diagnostics = Vec::new();
    for (index, raw) in lines.into_iter().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() {
            diagnostics.push(Diagnostic::EmptyLine { line });
            continue;
        }
        for token in text.split_whitespace() {
            if is_alphabetic_word(token) {
                words.push(token.to_string());
            } else {
                diagnostics.push(Diagnostic::InvalidValue {
                    line,
                    text: token.to_string(),
                });
            }
        }
    }
    (words, diagnostics)
}

/// A word is one or more ASCII letters, nothing else.
fn is_alphabetic_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|ch| ch.is_ascii_alphabetic())
}
