//! Merge traces.
//!
//! A trace records every pairwise merge performed while spelling one value. It
//! is only collected on request ([`Speller::cardinal_traced`]); the normal path
//! allocates nothing beyond the output string.
//!
//! [`Speller::cardinal_traced`]: super::Speller::cardinal_traced

use super::merge::Composition;
use crate::Fragment;
use std::time::Duration;

/// One call of the merge rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeStep {
    pub current: Fragment,
    pub next: Fragment,
    pub composition: Composition,
    pub result: Fragment,
}

/// Everything recorded while spelling a single value.
#[derive(Debug, Default, Clone)]
pub struct SpellTrace {
    /// Merges in the order they were performed.
    pub steps: Vec<MergeStep>,
    /// Wall time spent in split + reduction.
    pub elapsed: Duration,
}
