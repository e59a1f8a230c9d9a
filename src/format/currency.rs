//! Currency amounts: `1.00 EUR` -> `ein Euro und null Cent`.

use crate::engine::Speller;
use crate::error::{ConversionError, ConversionResult};
use num_bigint::BigInt;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Joins the unit and subunit phrases: `zwei Euro und fünfzig Cent`.
pub const DEFAULT_SEPARATOR: &str = " und";

bitflags::bitflags! {
    /// Switches for [`to_currency`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CurrencyFlags: u8 {
        /// Spell the cents in words instead of two digits.
        const VERBOSE_CENTS = 1 << 0;
        /// Prefix the unit with the currency's adjective (`US Dollar`).
        const ADJECTIVE     = 1 << 1;
    }
}

impl Default for CurrencyFlags {
    fn default() -> Self {
        CurrencyFlags::VERBOSE_CENTS
    }
}

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    #[default]
    Eur,
    Gbp,
    Usd,
    Cny,
    Dem,
}

impl Currency {
    pub const ALL: [Currency; 5] = [Currency::Eur, Currency::Gbp, Currency::Usd, Currency::Cny, Currency::Dem];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Usd => "USD",
            Currency::Cny => "CNY",
            Currency::Dem => "DEM",
        }
    }

    /// Singular and plural of the main unit.
    pub fn unit_forms(self) -> (&'static str, &'static str) {
        match self {
            Currency::Eur => ("Euro", "Euro"),
            Currency::Gbp => ("Pfund", "Pfund"),
            Currency::Usd => ("Dollar", "Dollar"),
            Currency::Cny => ("Yuan", "Yuan"),
            Currency::Dem => ("Mark", "Mark"),
        }
    }

    /// Singular and plural of the subunit.
    pub fn subunit_forms(self) -> (&'static str, &'static str) {
        match self {
            Currency::Eur | Currency::Usd => ("Cent", "Cent"),
            Currency::Gbp => ("Penny", "Pence"),
            Currency::Cny => ("Jiao", "Fen"),
            Currency::Dem => ("Pfennig", "Pfennig"),
        }
    }

    pub fn adjective(self) -> Option<&'static str> {
        match self {
            Currency::Usd => Some("US"),
            _ => None,
        }
    }
}

impl FromStr for Currency {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConversionError::UnsupportedCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub fn to_currency(
    speller: &Speller<'_>,
    amount: Decimal,
    currency: Currency,
    flags: CurrencyFlags,
    separator: &str,
) -> ConversionResult<String> {
    let (units, cents, negative) = currency_parts(amount)?;

    let (mut unit_one, mut unit_many) = (currency.unit_forms().0.to_string(), currency.unit_forms().1.to_string());
    if flags.contains(CurrencyFlags::ADJECTIVE) {
        if let Some(adjective) = currency.adjective() {
            unit_one = format!("{adjective} {unit_one}");
            unit_many = format!("{adjective} {unit_many}");
        }
    }
    let (sub_one, sub_many) = currency.subunit_forms();

    let minus = if negative { format!("{} ", speller.table().negative_word().trim()) } else { String::new() };
    let money = speller.cardinal(&BigInt::from(units))?;
    let cents_text = if flags.contains(CurrencyFlags::VERBOSE_CENTS) {
        speller.cardinal(&BigInt::from(cents))?
    } else {
        format!("{cents:02}")
    };

    let unit = if units == 1 { unit_one } else { unit_many };
    let subunit = if cents == 1 { sub_one } else { sub_many };
    let text = format!("{minus}{money} {unit}{separator} {cents_text} {subunit}");

    // "ein Euro", not "eins Euro".
    Ok(text.replace("eins ", "ein "))
}

/// Round half away from zero to cents and split into `(units, cents, negative)`.
fn currency_parts(amount: Decimal) -> ConversionResult<(u128, u32, bool)> {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let rounded = rounded.abs();

    let units = rounded.trunc();
    let cents = ((rounded - units) * Decimal::ONE_HUNDRED).trunc();

    match (units.to_u128(), cents.to_u32()) {
        (Some(units), Some(cents)) => Ok((units, cents, negative)),
        _ => Err(ConversionError::NotANumber(amount.to_string())),
    }
}
