//! German numerals in words.
//!
//! ```
//! assert_eq!(zahlwort::to_cardinal(21).unwrap(), "einundzwanzig");
//! assert_eq!(zahlwort::to_ordinal(100).unwrap(), "hundertste");
//! assert_eq!(zahlwort::to_year(1984).unwrap(), "neunzehnhundertvierundachtzig");
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod format;
mod table;

pub use api::{
    CardinalVerbose, Options, Target, cardinal_verbose, convert, to_cardinal, to_cardinal_decimal, to_currency,
    to_currency_with, to_date, to_date_with, to_ordinal, to_ordinal_num, to_year, to_year_with,
};
pub use engine::{Composition, MergeStep, SpellTrace, Speller};
pub use error::{ConversionError, ConversionResult};
pub use format::{Currency, CurrencyFlags, DEFAULT_DATE_PATTERN, DEFAULT_LANGUAGE, DEFAULT_SEPARATOR};
pub use table::{Card, NumeralTable};

use num_bigint::BigUint;

// --- Core types --------------------------------------------------------------

/// A rendered piece of a numeral and the value it stands for.
///
/// Fragments are never edited in place: merging two of them yields a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub value: BigUint,
}

impl Fragment {
    pub fn new(text: impl Into<String>, value: impl Into<BigUint>) -> Self {
        Fragment { text: text.into(), value: value.into() }
    }
}
