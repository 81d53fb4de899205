//! Word-frequency counting over free text.
//!
//! - [`parse`]: split lines into whitespace-separated tokens and keep only
//!   ASCII-alphabetic words (case preserved, so `The` and `the` differ)
//! - [`frequency`]: the [`WordFrequencyTable`] and its deterministic ranked
//!   ordering (count descending, word ascending)
//! - [`report`]: render the tab-separated `Row Labels` table
//!
//! # Examples
//!
//! ```
//! use tally_words::{WordFrequencyTable, parse_words};
//!
//! let (words, _) = parse_words("b a a\nc b a".lines());
//! let table = WordFrequencyTable::from_words(words.iter().map(String::as_str));
//! assert_eq!(
//!     table.ranked(),
//!     [("a", 3), ("b", 2), ("c", 1)],
//! );
//! ```

pub use self::{frequency::WordFrequencyTable, parse::parse_words, report::render_report};

pub mod frequency;
pub mod parse;
pub mod report;
