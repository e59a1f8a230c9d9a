use crate::engine::Speller;
use crate::error::ConversionResult;
use crate::table::HUNDRED;
use num_bigint::BigInt;

/// Years are read in hundreds (`1984` -> `neunzehnhundertvierundachtzig`) unless
/// their hundreds digit is zero, in which case they are plain numbers
/// (`2005` -> `zweitausendfünf`).
///
/// With `longform` off the connector is dropped when a remainder follows
/// (`neunzehnvierundachtzig`).
pub fn to_year(speller: &Speller<'_>, value: i64, longform: bool) -> ConversionResult<String> {
    if value.div_euclid(100).rem_euclid(10) == 0 {
        return speller.cardinal(&BigInt::from(value));
    }
    Ok(speller.split_number(value, HUNDRED, longform)?.replace(' ', ""))
}
