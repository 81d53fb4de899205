//! Decimal-to-binary/hexadecimal conversion over numbers read one per line.
//!
//! - [`parse`]: turn raw input lines into [`ConversionEntry`] values;
//!   unparsable tokens are kept so every input line keeps its output row
//! - [`base`]: repeated-division base conversion, with fixed-width
//!   two's-complement encoding for negative values
//! - [`report`]: render the tab-separated `ITEM`/`BIN`/`HEX` table
//!
//! # Examples
//!
//! ```
//! use tally_convert::convert_value;
//!
//! assert_eq!(convert_value(10), ("1010".to_string(), "A".to_string()));
//! assert_eq!(
//!     convert_value(-1),
//!     ("1111111111".to_string(), "FFFFFFFFFF".to_string()),
//! );
//! ```

pub use self::{
    base::{convert_value, to_binary, to_hex},
    parse::{ConversionEntry, parse_entries},
    report::render_report,
};

pub mod base;
pub mod parse;
pub mod report;
