//! Dates: `2024-03-05` -> `fünfter. März zweitausendvierundzwanzig`.

use super::ordinal::to_ordinal;
use crate::engine::Speller;
use crate::error::{ConversionError, ConversionResult};
use chrono::Datelike;
use num_bigint::BigInt;

pub const DEFAULT_DATE_PATTERN: &str = "%d. %B %Y";
pub const DEFAULT_LANGUAGE: &str = "de";

/// Month names keyed by language code.
const MONTH_NAMES: &[(&str, [&str; 12])] = &[(
    "de",
    [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
)];

pub fn month_names(lang: &str) -> ConversionResult<&'static [&'static str; 12]> {
    MONTH_NAMES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(lang))
        .map(|(_, names)| names)
        .ok_or_else(|| ConversionError::UnsupportedLanguage(lang.to_string()))
}

/// Fill `%d`, `%B` and `%Y` in `pattern` with the day ordinal, the month name
/// and the spelled year. Everything else in the pattern is copied verbatim.
pub fn to_date<D: Datelike>(speller: &Speller<'_>, date: &D, lang: &str, pattern: &str) -> ConversionResult<String> {
    let months = month_names(lang)?;

    let mut day = to_ordinal(speller, &BigInt::from(date.day()))?;
    if !day.ends_with('r') {
        day.push('r');
    }

    let month = months[date.month0() as usize];

    // Century and remainder are spelled separately: 1999 -> eintausendneunhundert|neunundneunzig.
    let year = i64::from(date.year());
    let year_words = format!(
        "{}{}",
        speller.cardinal(&BigInt::from(year.div_euclid(100) * 100))?,
        speller.cardinal(&BigInt::from(year.rem_euclid(100)))?
    );

    Ok(pattern.replace("%d", &day).replace("%B", month).replace("%Y", &year_words))
}
