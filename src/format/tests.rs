use super::*;
use crate::engine::Speller;
use num_bigint::BigInt;
use proptest::prelude::*;

#[test]
fn cardinal_and_ordinal_examples() {
    // Array of (value, cardinal, ordinal)
    let cases: Vec<(i64, &str, &str)> = vec![
        (0, "null", "nullte"),
        (1, "eins", "erste"),
        (2, "zwei", "zweite"),
        (3, "drei", "dritte"),
        (4, "vier", "vierte"),
        (7, "sieben", "siebte"),
        (8, "acht", "achte"),
        (10, "zehn", "zehnte"),
        (12, "zwölf", "zwölfte"),
        (17, "siebzehn", "siebzehnte"),
        (20, "zwanzig", "zwanzigste"),
        (21, "einundzwanzig", "einundzwanzigste"),
        (23, "dreiundzwanzig", "dreiundzwanzigste"),
        (30, "dreißig", "dreißigste"),
        (33, "dreiunddreißig", "dreiunddreißigste"),
        (48, "achtundvierzig", "achtundvierzigste"),
        (67, "siebenundsechzig", "siebenundsechzigste"),
        (99, "neunundneunzig", "neunundneunzigste"),
        (100, "einhundert", "hundertste"),
        (101, "einhunderteins", "einhunderterste"),
        (103, "einhundertdrei", "einhundertdritte"),
        (108, "einhundertacht", "einhundertachte"),
        (110, "einhundertzehn", "einhundertzehnte"),
        (200, "zweihundert", "zweihundertste"),
        (999, "neunhundertneunundneunzig", "neunhundertneunundneunzigste"),
        (1000, "eintausend", "tausendste"),
        (1001, "eintausendeins", "eintausenderste"),
        (2000, "zweitausend", "zweitausendste"),
        (10_000, "zehntausend", "zehntausendste"),
        (21_000, "einundzwanzigtausend", "einundzwanzigtausendste"),
        (100_000, "einhunderttausend", "einhunderttausendste"),
        (1_000_000, "eine Million", "millionste"),
        (2_000_000, "zwei Millionen", "zweimillionste"),
        (1_000_000_000, "eine Milliarde", "milliardste"),
        (4_000_000_000, "vier Milliarden", "viermilliardste"),
        (1_000_000_000_000, "eine Billion", "billionste"),
        (1_000_000_000_000_000, "eine Billiarde", "billiardste"),
    ];

    let speller = Speller::default();
    for (value, cardinal, ordinal) in cases {
        let value = BigInt::from(value);
        assert_eq!(speller.cardinal(&value).unwrap(), cardinal, "cardinal of {value}");
        assert_eq!(to_ordinal(&speller, &value).unwrap(), ordinal, "ordinal of {value}");
    }
}

#[test]
fn year_examples() {
    let cases: Vec<(i64, &str)> = vec![
        (1099, "eintausendneunundneunzig"),
        (1200, "zwölfhundert"),
        (1492, "vierzehnhundertzweiundneunzig"),
        (1984, "neunzehnhundertvierundachtzig"),
        (1999, "neunzehnhundertneunundneunzig"),
        (2005, "zweitausendfünf"),
        (2024, "zweitausendvierundzwanzig"),
        (2150, "einundzwanzighundertfünfzig"),
    ];

    let speller = Speller::default();
    for (value, expected) in cases {
        assert_eq!(to_year(&speller, value, true).unwrap(), expected, "year {value}");
    }
}

#[test]
fn large_magnitudes_up_to_the_limit() {
    let speller = Speller::default();
    let septillion = BigInt::from(10u32).pow(42);
    assert_eq!(speller.cardinal(&septillion).unwrap(), "eine Septillion");
    assert_eq!(to_ordinal(&speller, &septillion).unwrap(), "septillionste");

    let oktilliarde_minus_one = BigInt::from(10u32).pow(51) - 1;
    let text = speller.cardinal(&oktilliarde_minus_one).unwrap();
    assert!(text.starts_with("neunhundertneunundneunzig Oktillionen"), "{text}");
}

proptest! {
    #[test]
    fn ordinals_always_end_in_te(n in 0u64..10_000_000_000) {
        let ordinal = to_ordinal(&Speller::default(), &BigInt::from(n)).unwrap();
        prop_assert!(ordinal.ends_with("te"), "{} -> {}", n, ordinal);
    }

    #[test]
    fn cardinals_below_a_million_are_one_word(n in 0u64..1_000_000) {
        let cardinal = Speller::default().cardinal(&BigInt::from(n)).unwrap();
        prop_assert!(!cardinal.contains(' '));
        prop_assert!(!cardinal.contains("einsund"));
    }

    #[test]
    fn negative_values_mirror_positive_ones(n in 1i64..1_000_000_000) {
        let speller = Speller::default();
        let positive = speller.cardinal(&BigInt::from(n)).unwrap();
        let negative = speller.cardinal(&BigInt::from(-n)).unwrap();
        prop_assert_eq!(negative, format!("minus {positive}"));
    }

    #[test]
    fn currency_never_says_eins_before_a_unit(units in 0u32..100_000, cents in 0u32..100) {
        let amount = rust_decimal::Decimal::new(i64::from(units) * 100 + i64::from(cents), 2);
        let text = to_currency(&Speller::default(), amount, Currency::Eur, CurrencyFlags::default(), DEFAULT_SEPARATOR)
            .unwrap();
        prop_assert!(!text.contains("eins "), "{}", text);
    }
}
