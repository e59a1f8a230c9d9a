//! Cardinal spelling entry points.
//!
//! `Speller` is a thin handle over a shared [`NumeralTable`]. It owns no state of
//! its own, so it is `Copy` and can be created per call.

use super::merge::{apply, classify};
use super::split::{clean, split};
use super::trace::{MergeStep, SpellTrace};
use crate::error::{ConversionError, ConversionResult};
use crate::table::{GERMAN, NumeralTable};
use crate::Fragment;
use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};
use rust_decimal::Decimal;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct Speller<'a> {
    table: &'a NumeralTable,
}

impl Default for Speller<'static> {
    fn default() -> Self {
        Speller::new(&GERMAN)
    }
}

impl<'a> Speller<'a> {
    pub fn new(table: &'a NumeralTable) -> Self {
        Speller { table }
    }

    pub fn table(&self) -> &'a NumeralTable {
        self.table
    }

    /// Spell a signed integer, e.g. `-21` -> `minus einundzwanzig`.
    ///
    /// Fails with [`ConversionError::TooLarge`] when `|value|` reaches the table's
    /// maximum.
    pub fn cardinal(&self, value: &BigInt) -> ConversionResult<String> {
        self.check_range(value)?;
        let fragment = clean(split(self.table, value.magnitude()), &mut super::merge::merge);
        Ok(self.signed(value, fragment.text))
    }

    /// Like [`Speller::cardinal`], additionally returning every merge performed.
    pub fn cardinal_traced(&self, value: &BigInt) -> ConversionResult<(String, SpellTrace)> {
        self.check_range(value)?;

        let started = Instant::now();
        let mut steps = Vec::new();
        let mut record = |current: Fragment, next: Fragment| {
            let composition = classify(&current, &next);
            let result = apply(composition, current.clone(), next.clone());
            tracing::trace!(current = %current.text, next = %next.text, ?composition, result = %result.text, "merge");
            steps.push(MergeStep { current, next, composition, result: result.clone() });
            result
        };
        let fragment = clean(split(self.table, value.magnitude()), &mut record);
        let trace = SpellTrace { steps, elapsed: started.elapsed() };

        Ok((self.signed(value, fragment.text), trace))
    }

    /// Spell a decimal number digit by digit after the point:
    /// `1.5` -> `eins Komma fünf`, `-0.25` -> `minus null Komma zwei fünf`.
    ///
    /// Trailing zeros of the fraction are not spoken.
    pub fn cardinal_decimal(&self, value: Decimal) -> ConversionResult<String> {
        let value = value.normalize();
        let integer =
            value.trunc().to_i128().map(BigInt::from).ok_or_else(|| ConversionError::NotANumber(value.to_string()))?;

        let mut words = Vec::new();
        if value < Decimal::ZERO && integer.is_zero() {
            words.push(self.table.negative_word().trim().to_string());
        }
        words.push(self.cardinal(&integer)?);

        let text = value.abs().to_string();
        let fraction = text.split_once('.').map(|(_, digits)| digits).unwrap_or_default();
        if !fraction.is_empty() {
            words.push(self.table.point_word().to_string());
            for digit in fraction.chars() {
                let word = digit
                    .to_digit(10)
                    .and_then(|d| self.table.low_word(d as usize))
                    .ok_or_else(|| ConversionError::NotANumber(text.clone()))?;
                words.push(word.to_string());
            }
        }

        Ok(words.join(" "))
    }

    /// Read `value` as `<high> <high_word> <low>` with `high, low = divmod(value, 100)`.
    ///
    /// `high_word` is dropped when `long` is false and `low` is non-zero
    /// (`neunzehn vierundachtzig` instead of `neunzehn hundert vierundachtzig`).
    pub fn split_number(&self, value: i64, high_word: &str, long: bool) -> ConversionResult<String> {
        let (high, low) = (value.div_euclid(100), value.rem_euclid(100));

        let mut out = Vec::with_capacity(3);
        if high != 0 {
            out.push(self.cardinal(&BigInt::from(high))?);
            if low == 0 || long {
                out.push(high_word.to_string());
            }
        }
        if low != 0 {
            out.push(self.cardinal(&BigInt::from(low))?);
        }

        Ok(out.join(" "))
    }

    /// Ordinals exist for non-negative integers only.
    pub fn verify_ordinal(&self, value: &BigInt) -> ConversionResult<()> {
        if value.sign() == Sign::Minus {
            return Err(ConversionError::NegativeOrdinal(value.clone()));
        }
        Ok(())
    }

    fn check_range(&self, value: &BigInt) -> ConversionResult<()> {
        if value.magnitude() >= self.table.max_value() {
            return Err(ConversionError::TooLarge { value: value.clone(), limit: self.table.max_value().clone() });
        }
        Ok(())
    }

    fn signed(&self, value: &BigInt, words: String) -> String {
        if value.sign() == Sign::Minus { format!("{}{words}", self.table.negative_word()) } else { words }
    }
}
