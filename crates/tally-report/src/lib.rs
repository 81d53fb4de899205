//! Shared rendering contract for the tally report tools.
//!
//! All three pipelines (statistics, base conversion, word counting) render
//! their results through this crate so that numbers, sentinels, and per-line
//! diagnostics look identical everywhere:
//!
//! - [`format`]: canonical number/sentinel rendering (`#N/A`, `#VALUE!`,
//!   integer snapping, trailing-zero stripping)
//! - [`diagnostics`]: per-line parse diagnostics emitted by the validators
//!
//! # Examples
//!
//! ```
//! use tally_report::format::format_number;
//!
//! assert_eq!(format_number(Some(2.0)), "2");
//! assert_eq!(format_number(Some(1.25)), "1.25");
//! assert_eq!(format_number(None), "#N/A");
//! ```

pub use self::diagnostics::Diagnostic;

pub mod diagnostics;
pub mod format;
