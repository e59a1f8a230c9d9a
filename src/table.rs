//! The German numeral table.
//!
//! Everything language-specific that the speller reads lives here: the literal
//! words for 0..=20, the tens, `hundert`/`tausend`, the generated magnitude words
//! of the long scale (`Million`, `Milliarde`, `Billion`, ...), and the ordered
//! suffix rewrites used to turn a cardinal into an ordinal stem.
//!
//! The table is built once ([`GERMAN`]) and only ever handed out by shared
//! reference.

use num_bigint::BigUint;
use once_cell::sync::Lazy;

pub(crate) static GERMAN: Lazy<NumeralTable> = Lazy::new(NumeralTable::german);

/// Words for 0..=20, indexed by value.
const LOW_WORDS: [&str; 21] = [
    "null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn", "elf", "zwölf",
    "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn", "neunzehn", "zwanzig",
];

const MID_WORDS: [(u32, &str); 9] = [
    (1000, "tausend"),
    (100, "hundert"),
    (90, "neunzig"),
    (80, "achtzig"),
    (70, "siebzig"),
    (60, "sechzig"),
    (50, "fünfzig"),
    (40, "vierzig"),
    (30, "dreißig"),
];

// Latin roots of the long scale. `Non` .. `M` are the classic names; the rest are
// composed from `UNIT_ROOTS` x `TEN_ROOTS`, with `zent` at the very top.
const LOW_ROOTS: [&str; 9] = ["Non", "Okt", "Sept", "Sext", "Quint", "Quadr", "Tr", "B", "M"];
const UNIT_ROOTS: [&str; 10] = ["", "un", "duo", "tre", "quattuor", "quin", "sex", "sept", "okto", "novem"];
const TEN_ROOTS: [&str; 9] = [
    "dez",
    "vigint",
    "trigint",
    "quadragint",
    "quinquagint",
    "sexagint",
    "septuagint",
    "oktogint",
    "nonagint",
];
const TOP_ROOT: &str = "zent";

const MEGA_SUFFIX: &str = "illion";
const GIGA_SUFFIX: &str = "illiarde";

/// Ordinal stem rewrites. Order matters: the first suffix that matches wins.
const ORDINAL_SUFFIXES: &[(&str, &str)] = &[
    ("eins", "ers"),
    ("drei", "drit"),
    ("acht", "ach"),
    ("sieben", "sieb"),
    ("ig", "igs"),
    ("ert", "erts"),
    ("end", "ends"),
    ("ion", "ions"),
    ("nen", "ns"),
    ("rde", "rds"),
    ("rden", "rds"),
];

/// Compounding form of 1 (`einhundert`, `einundzwanzig`).
pub(crate) const ONE_PREFIX: &str = "ein";
/// Article form of 1 before million-class words.
pub(crate) const ONE_FEMININE: &str = "eine";
pub(crate) const UND: &str = "und";
/// Connector for split-hundreds readings (`neunzehnhundert`).
pub(crate) const HUNDRED: &str = "hundert";

/// Exponent of the largest value the speller accepts (exclusive).
const MAX_EXPONENT: u32 = 51;

/// A numeral word together with the value it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub value: BigUint,
    pub word: String,
}

/// Immutable numeral configuration for one language.
#[derive(Debug, Clone)]
pub struct NumeralTable {
    /// All cards, sorted by descending value.
    cards: Vec<Card>,
    ordinal_suffixes: &'static [(&'static str, &'static str)],
    negative_word: &'static str,
    point_word: &'static str,
    max_value: BigUint,
}

impl NumeralTable {
    /// Build the German table.
    pub fn german() -> Self {
        let mut cards = Vec::with_capacity(2 * (1 + UNIT_ROOTS.len() * TEN_ROOTS.len() + LOW_ROOTS.len()) + 30);

        let roots = high_roots();
        let top = 3 + 6 * roots.len() as u32;
        for (root, exponent) in roots.iter().zip((9..=top).rev().step_by(6)) {
            cards.push(Card { value: pow10(exponent), word: format!("{root}{GIGA_SUFFIX}") });
            cards.push(Card { value: pow10(exponent - 3), word: format!("{root}{MEGA_SUFFIX}") });
        }

        for (value, word) in MID_WORDS {
            cards.push(Card { value: BigUint::from(value), word: word.to_string() });
        }

        for (value, word) in LOW_WORDS.iter().enumerate().rev() {
            cards.push(Card { value: BigUint::from(value), word: word.to_string() });
        }

        cards.sort_by(|a, b| b.value.cmp(&a.value));

        NumeralTable {
            cards,
            ordinal_suffixes: ORDINAL_SUFFIXES,
            negative_word: "minus ",
            point_word: "Komma",
            max_value: pow10(MAX_EXPONENT),
        }
    }

    /// Cards sorted by descending value.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Literal word for a value in `0..=20`.
    pub fn low_word(&self, value: usize) -> Option<&'static str> {
        LOW_WORDS.get(value).copied()
    }

    /// Word for an exact card value (e.g. `10^6` -> `Million`).
    pub fn word_for(&self, value: &BigUint) -> Option<&str> {
        self.cards.iter().find(|c| &c.value == value).map(|c| c.word.as_str())
    }

    /// Magnitude word for `10^exponent`, if the table has one.
    pub fn magnitude_word(&self, exponent: u32) -> Option<&str> {
        self.word_for(&pow10(exponent))
    }

    pub fn ordinal_suffixes(&self) -> &[(&'static str, &'static str)] {
        self.ordinal_suffixes
    }

    pub fn negative_word(&self) -> &'static str {
        self.negative_word
    }

    pub fn point_word(&self) -> &'static str {
        self.point_word
    }

    /// Exclusive upper bound for absolute values the speller accepts.
    pub fn max_value(&self) -> &BigUint {
        &self.max_value
    }

    #[cfg(test)]
    pub(crate) fn with_ordinal_suffixes(mut self, suffixes: &'static [(&'static str, &'static str)]) -> Self {
        self.ordinal_suffixes = suffixes;
        self
    }

    /// Largest card not exceeding `value`.
    pub(crate) fn largest_card_within(&self, value: &BigUint) -> Option<&Card> {
        self.cards.iter().find(|c| &c.value <= value)
    }
}

/// `zent`, then the composed roots from `novemnonagint` down to `dez`, then the
/// classic roots from `Non` down to `M`.
fn high_roots() -> Vec<String> {
    let mut composed: Vec<String> =
        TEN_ROOTS.iter().flat_map(|t| UNIT_ROOTS.iter().map(move |u| format!("{u}{t}"))).collect();
    composed.reverse();

    std::iter::once(TOP_ROOT.to_string())
        .chain(composed)
        .chain(LOW_ROOTS.iter().map(|r| r.to_string()))
        .collect()
}

pub(crate) fn pow10(exponent: u32) -> BigUint {
    BigUint::from(10u32).pow(exponent)
}
