use crate::engine::{MergeStep, Speller};
use crate::error::{ConversionError, ConversionResult};
use crate::format::{self, Currency, CurrencyFlags, DEFAULT_DATE_PATTERN, DEFAULT_LANGUAGE, DEFAULT_SEPARATOR};
use chrono::{Datelike, NaiveDate};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// What [`convert`] should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    Cardinal,
    Ordinal,
    /// `5` -> `5.`
    OrdinalNum,
    Year,
    Currency,
    Date,
}

impl Target {
    pub fn name(self) -> &'static str {
        match self {
            Target::Cardinal => "cardinal",
            Target::Ordinal => "ordinal",
            Target::OrdinalNum => "ordinal_num",
            Target::Year => "year",
            Target::Currency => "currency",
            Target::Date => "date",
        }
    }
}

impl FromStr for Target {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cardinal" => Ok(Target::Cardinal),
            "ordinal" => Ok(Target::Ordinal),
            "ordinal_num" | "ordinal-num" => Ok(Target::OrdinalNum),
            "year" => Ok(Target::Year),
            "currency" => Ok(Target::Currency),
            "date" => Ok(Target::Date),
            _ => Err(ConversionError::UnknownTarget(s.to_string())),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for [`convert`].
///
/// Only the fields relevant to `to` are read; the rest keep their defaults.
#[derive(Debug, Clone)]
pub struct Options {
    pub to: Target,
    pub currency: Currency,
    pub currency_flags: CurrencyFlags,
    /// Text between the unit and the subunit phrase.
    pub separator: String,
    /// Keep `hundert` in split years (`neunzehnhundertvierundachtzig`).
    pub longform: bool,
    pub lang: String,
    pub date_pattern: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            to: Target::default(),
            currency: Currency::default(),
            currency_flags: CurrencyFlags::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            longform: true,
            lang: DEFAULT_LANGUAGE.to_string(),
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
        }
    }
}

/// Result of [`cardinal_verbose`].
#[derive(Debug, Clone)]
pub struct CardinalVerbose {
    pub text: String,
    /// Every merge, in the order it was performed.
    pub steps: Vec<MergeStep>,
    pub elapsed: Duration,
}

/// Spell an integer.
///
/// # Example
/// ```
/// assert_eq!(zahlwort::to_cardinal(2_000_000).unwrap(), "zwei Millionen");
/// ```
pub fn to_cardinal(value: impl Into<BigInt>) -> ConversionResult<String> {
    Speller::default().cardinal(&value.into())
}

/// Spell a decimal number, reading the fraction digit by digit.
pub fn to_cardinal_decimal(value: Decimal) -> ConversionResult<String> {
    Speller::default().cardinal_decimal(value)
}

/// Spell an integer and return the merge steps that produced it.
pub fn cardinal_verbose(value: impl Into<BigInt>) -> ConversionResult<CardinalVerbose> {
    let (text, trace) = Speller::default().cardinal_traced(&value.into())?;
    Ok(CardinalVerbose { text, steps: trace.steps, elapsed: trace.elapsed })
}

/// # Example
/// ```
/// assert_eq!(zahlwort::to_ordinal(3).unwrap(), "dritte");
/// assert!(zahlwort::to_ordinal(-3).is_err());
/// ```
pub fn to_ordinal(value: impl Into<BigInt>) -> ConversionResult<String> {
    format::to_ordinal(&Speller::default(), &value.into())
}

pub fn to_ordinal_num(value: impl Into<BigInt>) -> ConversionResult<String> {
    format::to_ordinal_num(&Speller::default(), &value.into())
}

/// Amount in words with cents spelled out and the default separator.
pub fn to_currency(amount: Decimal, currency: Currency) -> ConversionResult<String> {
    to_currency_with(amount, currency, CurrencyFlags::default(), DEFAULT_SEPARATOR)
}

pub fn to_currency_with(
    amount: Decimal,
    currency: Currency,
    flags: CurrencyFlags,
    separator: &str,
) -> ConversionResult<String> {
    format::to_currency(&Speller::default(), amount, currency, flags, separator)
}

pub fn to_year(value: i64) -> ConversionResult<String> {
    to_year_with(value, true)
}

pub fn to_year_with(value: i64, longform: bool) -> ConversionResult<String> {
    format::to_year(&Speller::default(), value, longform)
}

/// German date with the default pattern `%d. %B %Y`.
pub fn to_date<D: Datelike>(date: &D) -> ConversionResult<String> {
    to_date_with(date, DEFAULT_LANGUAGE, DEFAULT_DATE_PATTERN)
}

pub fn to_date_with<D: Datelike>(date: &D, lang: &str, pattern: &str) -> ConversionResult<String> {
    format::to_date(&Speller::default(), date, lang, pattern)
}

/// Convert textual input according to `options.to`.
///
/// Numbers are accepted as integers of any size or as decimals; dates as
/// `YYYY-MM-DD`.
///
/// # Example
/// ```
/// use zahlwort::{Options, Target, convert};
///
/// let opts = Options { to: Target::Currency, ..Options::default() };
/// assert_eq!(convert("2.50", &opts).unwrap(), "zwei Euro und fünfzig Cent");
/// ```
pub fn convert(input: &str, options: &Options) -> ConversionResult<String> {
    let input = input.trim();
    tracing::debug!(to = %options.to, input, "convert");

    match options.to {
        Target::Cardinal => match parse_number(input)? {
            Number::Integer(value) => to_cardinal(value),
            Number::Decimal(value) => to_cardinal_decimal(value),
        },
        Target::Ordinal => to_ordinal(parse_ordinal(input)?),
        Target::OrdinalNum => to_ordinal_num(parse_ordinal(input)?),
        Target::Year => {
            let value = match parse_number(input)? {
                Number::Integer(value) => value.to_i64(),
                Number::Decimal(_) => None,
            };
            to_year_with(value.ok_or_else(|| ConversionError::NotANumber(input.to_string()))?, options.longform)
        }
        Target::Currency => {
            let amount = Decimal::from_str(input).map_err(|_| ConversionError::NotANumber(input.to_string()))?;
            to_currency_with(amount, options.currency, options.currency_flags, &options.separator)
        }
        Target::Date => {
            let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .map_err(|_| ConversionError::NotADate(input.to_string()))?;
            to_date_with(&date, &options.lang, &options.date_pattern)
        }
    }
}

enum Number {
    Integer(BigInt),
    Decimal(Decimal),
}

fn parse_number(input: &str) -> ConversionResult<Number> {
    if let Ok(value) = input.parse::<BigInt>() {
        return Ok(Number::Integer(value));
    }
    input.parse::<Decimal>().map(Number::Decimal).map_err(|_| ConversionError::NotANumber(input.to_string()))
}

/// Ordinals accept integral decimals (`5.0`) but refuse real fractions.
fn parse_ordinal(input: &str) -> ConversionResult<BigInt> {
    match parse_number(input)? {
        Number::Integer(value) => Ok(value),
        Number::Decimal(value) if value.fract().is_zero() => value
            .trunc()
            .to_i128()
            .map(BigInt::from)
            .ok_or_else(|| ConversionError::NotANumber(input.to_string())),
        Number::Decimal(_) => Err(ConversionError::FloatOrdinal(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn opts(to: Target) -> Options {
        Options { to, ..Options::default() }
    }

    #[test]
    fn typed_entry_points() {
        assert_eq!(to_cardinal(21).unwrap(), "einundzwanzig");
        assert_eq!(to_cardinal(1_000_000u64).unwrap(), "eine Million");
        assert_eq!(to_ordinal(8).unwrap(), "achte");
        assert_eq!(to_ordinal_num(5).unwrap(), "5.");
        assert_eq!(to_year(1984).unwrap(), "neunzehnhundertvierundachtzig");
        assert_eq!(to_year(2005).unwrap(), to_cardinal(2005).unwrap());
        assert_eq!(to_year_with(1984, false).unwrap(), "neunzehnvierundachtzig");
    }

    #[test]
    fn currency_entry_points() {
        assert_eq!(to_currency(Decimal::new(100, 2), Currency::Eur).unwrap(), "ein Euro und null Cent");
        assert!(to_currency(Decimal::new(200, 2), Currency::Eur).unwrap().starts_with("zwei Euro"));
        assert_eq!(
            to_currency_with(Decimal::new(1234, 2), Currency::Dem, CurrencyFlags::empty(), " und").unwrap(),
            "zwölf Mark und 34 Pfennig"
        );
    }

    #[test]
    fn date_entry_points() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(to_date(&date).unwrap(), "fünfter. März zweitausendvierundzwanzig");
        assert_eq!(to_date_with(&date, "de", "%B").unwrap(), "März");
    }

    #[test]
    fn cardinal_verbose_reports_steps() {
        let out = cardinal_verbose(1984).unwrap();
        assert_eq!(out.text, "eintausendneunhundertvierundachtzig");
        assert!(!out.steps.is_empty());
        assert_eq!(out.steps.last().map(|s| s.result.text.clone()), Some(out.text.clone()));
    }

    #[test]
    fn convert_dispatches_on_target() {
        assert_eq!(convert("21", &opts(Target::Cardinal)).unwrap(), "einundzwanzig");
        assert_eq!(convert(" 1.5 ", &opts(Target::Cardinal)).unwrap(), "eins Komma fünf");
        assert_eq!(convert("100", &opts(Target::Ordinal)).unwrap(), "hundertste");
        assert_eq!(convert("5.0", &opts(Target::Ordinal)).unwrap(), "fünfte");
        assert_eq!(convert("5", &opts(Target::OrdinalNum)).unwrap(), "5.");
        assert_eq!(convert("1984", &opts(Target::Year)).unwrap(), "neunzehnhundertvierundachtzig");
        assert_eq!(convert("1", &opts(Target::Currency)).unwrap(), "ein Euro und null Cent");
        assert_eq!(convert("2024-03-05", &opts(Target::Date)).unwrap(), "fünfter. März zweitausendvierundzwanzig");
    }

    #[test]
    fn convert_handles_values_beyond_u128() {
        let septillion = format!("1{}", "0".repeat(42));
        assert_eq!(convert(&septillion, &opts(Target::Cardinal)).unwrap(), "eine Septillion");
    }

    #[test]
    fn convert_reports_contract_violations() {
        assert_eq!(
            convert("zwölf", &opts(Target::Cardinal)).unwrap_err(),
            ConversionError::NotANumber("zwölf".to_string())
        );
        assert_eq!(
            convert("-4", &opts(Target::Ordinal)).unwrap_err(),
            ConversionError::NegativeOrdinal(BigInt::from(-4))
        );
        assert_eq!(convert("4.5", &opts(Target::Ordinal)).unwrap_err(), ConversionError::FloatOrdinal("4.5".into()));
        assert_eq!(convert("gestern", &opts(Target::Date)).unwrap_err(), ConversionError::NotADate("gestern".into()));
        assert!(matches!(
            convert(&format!("1{}", "0".repeat(51)), &opts(Target::Cardinal)),
            Err(ConversionError::TooLarge { .. })
        ));
    }

    #[test]
    fn targets_parse_from_names() {
        assert_eq!("ordinal_num".parse::<Target>().unwrap(), Target::OrdinalNum);
        assert_eq!("YEAR".parse::<Target>().unwrap(), Target::Year);
        assert!("roman".parse::<Target>().is_err());
        assert_eq!(Target::Currency.to_string(), "currency");
    }
}
