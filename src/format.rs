//! Formatters layered on top of the cardinal speller.
//!
//! Each formatter asks a [`Speller`](crate::engine::Speller) for cardinals and
//! then applies the German-specific rewrites of its domain:
//!
//! - `ordinal.rs`: suffix rewriting and the `hundertste`/`millionste` exceptions.
//! - `currency.rs`: unit words, rounding to cents, `ein Euro` instead of `eins Euro`.
//! - `year.rs`: split-hundreds reading of years.
//! - `date.rs`: day ordinal, month name and spelled year in a pattern.

#[path = "format/currency.rs"]
mod currency;
#[path = "format/date.rs"]
mod date;
#[path = "format/ordinal.rs"]
mod ordinal;
#[path = "format/year.rs"]
mod year;

#[cfg(test)]
#[path = "format/tests.rs"]
mod tests;

pub use currency::{Currency, CurrencyFlags, DEFAULT_SEPARATOR, to_currency};
pub use date::{DEFAULT_DATE_PATTERN, DEFAULT_LANGUAGE, to_date};
pub use ordinal::{to_ordinal, to_ordinal_num};
pub use year::to_year;
