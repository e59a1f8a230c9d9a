//! Pairwise fragment combination.
//!
//! German numerals are built by folding adjacent fragments together. Whether two
//! fragments compound, multiply, add with `und`, or drop a leading `eins` depends
//! only on their values, so the decision is made once by [`classify`] and then
//! carried out by [`apply`]:
//!
//! ```text
//! current.value == 1, next in {100, 1000}     -> CompoundPrefix  ein|hundert
//! current.value == 1, next < 10^6             -> Elide           zehn
//! next > current                              -> Multiply        drei|tausend, zwei Millionen
//! next < 10 < current < 100                   -> AddUnd          drei|und|zwanzig
//! current >= 10^6                             -> AddSpaced       eine Million eins
//! otherwise                                   -> AddPlain        hundert|eins
//! ```
//!
//! `Multiply` carries three flags: `feminine` (a leading 1 becomes `eine`),
//! `pluralize` (`Million` -> `Millionen`, `Milliarde` -> `Milliarden`) and
//! `spaced` (words from 10^6 upward are written apart).

use crate::Fragment;
use crate::table::{ONE_FEMININE, ONE_PREFIX, UND, pow10};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use once_cell::sync::Lazy;

static MILLION: Lazy<BigUint> = Lazy::new(|| pow10(6));

/// How two adjacent fragments are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    /// `1` followed by exactly `hundert` or `tausend`.
    CompoundPrefix,
    /// `1` followed by anything below a million vanishes.
    Elide,
    /// A multiplier followed by a larger magnitude.
    Multiply { feminine: bool, pluralize: bool, spaced: bool },
    /// A unit digit after a ten, spoken first and joined with `und`.
    AddUnd,
    /// Addition after a million-class fragment.
    AddSpaced,
    AddPlain,
}

/// Decide how `current` (already accumulated) and `next` combine.
pub fn classify(current: &Fragment, next: &Fragment) -> Composition {
    let large_next = next.value >= *MILLION;
    let mut feminine = false;

    if current.value.is_one() {
        if matches!(next.value.to_u64(), Some(100 | 1000)) {
            return Composition::CompoundPrefix;
        }
        if !large_next {
            return Composition::Elide;
        }
        feminine = true;
    }

    if next.value > current.value {
        return Composition::Multiply {
            feminine,
            pluralize: large_next && current.value > BigUint::one(),
            spaced: large_next,
        };
    }

    let unit_before_ten = match (next.value.to_u64(), current.value.to_u64()) {
        (Some(n), Some(c)) => n < 10 && 10 < c && c < 100,
        _ => false,
    };

    if unit_before_ten {
        Composition::AddUnd
    } else if current.value >= *MILLION {
        Composition::AddSpaced
    } else {
        Composition::AddPlain
    }
}

/// Carry out a composition chosen by [`classify`].
pub fn apply(composition: Composition, current: Fragment, next: Fragment) -> Fragment {
    match composition {
        Composition::CompoundPrefix => Fragment { text: format!("{ONE_PREFIX}{}", next.text), value: next.value },
        Composition::Elide => next,
        Composition::Multiply { feminine, pluralize, spaced } => {
            let mut head = if feminine { ONE_FEMININE.to_string() } else { current.text };
            let mut magnitude = next.text;
            if pluralize {
                magnitude.push_str(if magnitude.ends_with('e') { "n" } else { "en" });
            }
            if spaced {
                head.push(' ');
            }
            Fragment { text: head + &magnitude, value: current.value * next.value }
        }
        Composition::AddUnd => {
            let unit = if next.value.is_one() { ONE_PREFIX.to_string() } else { next.text };
            Fragment { text: format!("{unit}{UND}{}", current.text), value: current.value + next.value }
        }
        Composition::AddSpaced => {
            Fragment { text: format!("{} {}", current.text, next.text), value: current.value + next.value }
        }
        Composition::AddPlain => Fragment { text: current.text + &next.text, value: current.value + next.value },
    }
}

/// Combine two adjacent fragments into one.
pub fn merge(current: Fragment, next: Fragment) -> Fragment {
    let composition = classify(&current, &next);
    tracing::trace!(current = %current.text, next = %next.text, ?composition, "merge");
    apply(composition, current, next)
}
