//! Spelling engine.
//!
//! This module turns an integer into German words. It is split into focused
//! submodules under `src/engine/`:
//!
//! ```text
//! value ── split (split.rs) ──▶ nested fragments
//!          e.g. 21 -> [(eins,1) (zwanzig,20) [(eins,1) (eins,1)]]
//!                               │
//!                               v
//!          clean (split.rs) ── folds pairs through merge (merge.rs)
//!                               │
//!                               v
//!          Fragment("einundzwanzig", 21)
//! ```
//!
//! [`Speller`] (speller.rs) wraps that pipeline with sign handling, the range
//! check, decimal fractions and split-number rendering. Formatters in
//! `crate::format` only ever talk to a `Speller`.
//!
//! ## Responsibilities by module
//!
//! - `merge.rs`: the pairwise combination rules, written as a decision table
//!   ([`Composition`]) so every German exception can be tested on its own.
//! - `split.rs`: decomposition into a fragment tree and the reduction over it.
//! - `speller.rs`: the entry points used by formatters and the public API.
//! - `trace.rs`: per-merge records collected by [`Speller::cardinal_traced`].
//!
//! ## Debugging
//!
//! Every merge emits a `tracing` event at `TRACE` level; the CLI enables them
//! with `ZAHLWORT_LOG=zahlwort=trace`.

#[path = "engine/merge.rs"]
mod merge;
#[path = "engine/speller.rs"]
mod speller;
#[path = "engine/split.rs"]
mod split;
#[path = "engine/trace.rs"]
mod trace;

pub use merge::Composition;
pub use speller::Speller;
pub use trace::{MergeStep, SpellTrace};
