//! Descriptive statistics over numbers read one per line.
//!
//! The pipeline has three stages, each its own module:
//!
//! - [`parse`]: turn raw input lines into a numeric sample plus per-line
//!   diagnostics (malformed lines are skipped, never fatal)
//! - [`descriptive`]: count, mean, median, mode, population variance, and
//!   standard deviation computed with elementary algorithms
//! - [`report`]: render the tab-separated `COUNT`..`VARIANCE` report block
//!
//! # Examples
//!
//! ```
//! use tally_stats::{StatisticsResult, parse_numbers};
//!
//! let (values, diagnostics) = parse_numbers("1\n2\n\n3\noops".lines());
//! assert_eq!(values, [1.0, 2.0, 3.0]);
//! assert_eq!(diagnostics.len(), 2);
//!
//! let stats = StatisticsResult::from_values(&values);
//! assert_eq!(stats.count, 3);
//! assert_eq!(stats.mean, Some(2.0));
//! ```

pub use self::{descriptive::StatisticsResult, parse::parse_numbers, report::render_report};

pub mod descriptive;
pub mod parse;
pub mod report;
