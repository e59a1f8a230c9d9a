//! Decomposition into fragments and the reduction over them.
//!
//! [`split`] breaks a value around the largest card it contains:
//!
//! ```text
//! 1984 -> [(eins,1)  (tausend,1000)  [ [..9..] (hundert,100) [ (eins,1) (achtzig,80) [..4..] ] ]]
//!          multiplier  card           remainder
//! ```
//!
//! [`clean`] then folds the tree back into a single fragment. When the first two
//! elements are plain fragments they are merged and whatever follows becomes a
//! group of its own; otherwise nested groups are reduced first. The resulting
//! merge order is what gives `einundzwanzig` rather than `zwanzigeins`.

use crate::Fragment;
use crate::table::NumeralTable;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// A node of the fragment tree produced by [`split`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Split {
    Leaf(Fragment),
    Group(Vec<Split>),
}

/// Decompose `value` into a fragment tree using the cards of `table`.
pub fn split(table: &NumeralTable, value: &BigUint) -> Vec<Split> {
    let Some(card) = table.largest_card_within(value) else {
        return Vec::new();
    };

    let (quotient, remainder) =
        if value.is_zero() { (BigUint::one(), BigUint::zero()) } else { (value / &card.value, value % &card.value) };

    let mut out = Vec::with_capacity(3);
    if quotient.is_one() {
        let one = table.low_word(1).unwrap_or_default();
        out.push(Split::Leaf(Fragment::new(one, 1u32)));
    } else {
        out.push(Split::Group(split(table, &quotient)));
    }

    out.push(Split::Leaf(Fragment { text: card.word.clone(), value: card.value.clone() }));

    if !remainder.is_zero() {
        out.push(Split::Group(split(table, &remainder)));
    }

    out
}

/// Reduce a fragment tree to one fragment, combining neighbours with `merge`.
pub fn clean<F>(mut val: Vec<Split>, merge: &mut F) -> Fragment
where
    F: FnMut(Fragment, Fragment) -> Fragment,
{
    loop {
        match val.len() {
            0 => return Fragment::new("", 0u32),
            1 => match val.pop() {
                Some(Split::Leaf(fragment)) => return fragment,
                Some(Split::Group(group)) => {
                    val = group;
                    continue;
                }
                None => return Fragment::new("", 0u32),
            },
            _ => {}
        }

        let mut rest = val.into_iter();
        val = match (rest.next(), rest.next()) {
            (Some(Split::Leaf(left)), Some(Split::Leaf(right))) => {
                let merged = merge(left, right);
                let tail: Vec<Split> = rest.collect();
                let mut next = vec![Split::Leaf(merged)];
                if !tail.is_empty() {
                    next.push(Split::Group(tail));
                }
                next
            }
            (first, second) => first
                .into_iter()
                .chain(second)
                .chain(rest)
                .map(|node| match node {
                    Split::Group(mut group) if group.len() == 1 => group.pop().unwrap_or(Split::Group(Vec::new())),
                    Split::Group(group) => Split::Leaf(clean(group, &mut *merge)),
                    leaf => leaf,
                })
                .collect(),
        };
    }
}
