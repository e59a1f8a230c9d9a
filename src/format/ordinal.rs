//! Ordinals: `eins` -> `erste`, `hundert` -> `hundertste`, `eine Million` -> `millionste`.
//!
//! The cardinal is lowercased, its ending is rewritten through the table's
//! ordered suffix list (first hit wins), `te` is appended and a few idiomatic
//! exceptions are applied to the result.

use crate::engine::Speller;
use crate::error::ConversionResult;
use crate::table::NumeralTable;
use num_bigint::BigInt;

const ORDINAL_ENDING: &str = "te";

pub fn to_ordinal(speller: &Speller<'_>, value: &BigInt) -> ConversionResult<String> {
    speller.verify_ordinal(value)?;
    let cardinal = speller.cardinal(value)?.to_lowercase();
    Ok(ordinal_from_cardinal(speller.table(), &cardinal))
}

/// `5` -> `5.`
pub fn to_ordinal_num(speller: &Speller<'_>, value: &BigInt) -> ConversionResult<String> {
    speller.verify_ordinal(value)?;
    Ok(format!("{value}."))
}

/// Turn a lowercased cardinal into its ordinal.
pub(crate) fn ordinal_from_cardinal(table: &NumeralTable, cardinal: &str) -> String {
    let mut word = cardinal.to_string();

    if let Some((suffix, replacement)) = table.ordinal_suffixes().iter().find(|(suffix, _)| word.ends_with(suffix)) {
        word.truncate(word.len() - suffix.len());
        word.push_str(replacement);
    }
    word.push_str(ORDINAL_ENDING);

    apply_exceptions(word)
}

fn apply_exceptions(word: String) -> String {
    // "hundertste" and "tausendste" are preferred over the "ein" forms.
    if word == "eintausendste" || word == "einhundertste" {
        return word["ein".len()..].to_string();
    }

    // "eine millionste" -> "millionste"
    let feminine = regex!(r"eine ([a-z]+(?:illion|illiard)ste)$");
    let word = feminine.replace(&word, "$1");

    // Million-class ordinals are written as one word: "zwei millionste" -> "zweimillionste".
    let spaced = regex!(r" ([a-z]+(?:illion|illiard)ste)$");
    spaced.replace(&word, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::GERMAN;

    fn ordinal(value: i64) -> String {
        to_ordinal(&Speller::default(), &BigInt::from(value)).unwrap()
    }

    #[test]
    fn irregular_stems() {
        assert_eq!(ordinal(1), "erste");
        assert_eq!(ordinal(3), "dritte");
        assert_eq!(ordinal(7), "siebte");
        assert_eq!(ordinal(8), "achte");
    }

    #[test]
    fn regular_stems() {
        assert_eq!(ordinal(0), "nullte");
        assert_eq!(ordinal(2), "zweite");
        assert_eq!(ordinal(11), "elfte");
        assert_eq!(ordinal(19), "neunzehnte");
        assert_eq!(ordinal(20), "zwanzigste");
        assert_eq!(ordinal(21), "einundzwanzigste");
        assert_eq!(ordinal(101), "einhunderterste");
    }

    #[test]
    fn leading_ein_is_dropped_for_hundred_and_thousand() {
        assert_eq!(ordinal(100), "hundertste");
        assert_eq!(ordinal(1000), "tausendste");
        assert_eq!(ordinal(200), "zweihundertste");
        assert_eq!(ordinal(3000), "dreitausendste");
    }

    #[test]
    fn million_class_ordinals_drop_the_article() {
        assert_eq!(ordinal(1_000_000), "millionste");
        assert_eq!(ordinal(1_000_000_000), "milliardste");
    }

    #[test]
    fn million_class_ordinals_are_written_as_one_word() {
        assert_eq!(ordinal(2_000_000), "zweimillionste");
        assert_eq!(ordinal(5_000_000_000), "fünfmilliardste");
        assert_eq!(ordinal(1_001_000_000), "eine milliardemillionste");
        assert_eq!(ordinal(2_001_000_000_000), "zwei billionenmilliardste");
    }

    #[test]
    fn suffix_rewrites_on_german_words() {
        assert_eq!(ordinal_from_cardinal(&GERMAN, "drei milliarden"), "dreimilliardste");
        assert_eq!(ordinal_from_cardinal(&GERMAN, "dreiundzwanzig"), "dreiundzwanzigste");
    }

    #[test]
    fn first_matching_suffix_wins() {
        // Both keys match "vierzehn"; only the earlier one is applied.
        let long_first = (*GERMAN).clone().with_ordinal_suffixes(&[("zehn", "zehnt"), ("ehn", "ehnX")]);
        assert_eq!(ordinal_from_cardinal(&long_first, "vierzehn"), "vierzehntte");

        let short_first = (*GERMAN).clone().with_ordinal_suffixes(&[("ehn", "ehnX"), ("zehn", "zehnt")]);
        assert_eq!(ordinal_from_cardinal(&short_first, "vierzehn"), "vierzehnXte");
    }

    #[test]
    fn ordinal_num_appends_a_period() {
        assert_eq!(to_ordinal_num(&Speller::default(), &BigInt::from(5)).unwrap(), "5.");
        assert!(to_ordinal_num(&Speller::default(), &BigInt::from(-5)).is_err());
    }

    #[test]
    fn negative_ordinals_are_refused() {
        assert!(to_ordinal(&Speller::default(), &BigInt::from(-1)).is_err());
    }
}
