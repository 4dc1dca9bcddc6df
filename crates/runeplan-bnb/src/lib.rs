// Copyright (c) 2025 Runeplan Contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Runeplan-BnB: branch-and-bound for rune-budgeted station building
//!
//! High-level crate that implements a deterministic branch-and-bound search
//! over station purchase packages. The search separates package derivation,
//! bound evaluation, monitoring, and statistics so strategies can be
//! swapped without touching core search logic.
//!
//! Core flow
//! - Provide a `runeplan_model::model::Model<T>`.
//! - Derive the package list with `package::build_packages` (one completion
//!   package per odd-count station, one pair package per station).
//! - Choose an `eval::BoundEvaluator` (optimistic remaining-bonus bounds);
//!   `eval::RuneDensityBound` is the standard choice.
//! - Optionally attach a `monitor::SearchMonitor`.
//! - Run `bnb::BnbSearcher`.
//!
//! Design highlights
//! - Separation of concerns: packages fix the branching order; evaluators
//!   inject bounds; monitors observe; outcomes carry stats.
//! - Tight inner loop: the search state is mutated in place through the
//!   recursion and explicitly restored after every branch.
//! - Deterministic: quantities are enumerated high to low and packages in
//!   catalog order, so the first assignment reaching the best bonus wins.
//!
//! Module map
//! - `package`: purchasable package options derived from the model.
//! - `eval`: bound evaluator interface and the rune-density bound.
//! - `bnb`: the search engine and session orchestration.
//! - `state`: the mutable per-run search state.
//! - `monitor`: search monitors (no-op, logging).
//! - `result`: search outcomes.
//! - `stats`: lightweight counters and timing.

pub mod bnb;
pub mod eval;
pub mod monitor;
pub mod package;
pub mod result;
pub mod state;
pub mod stats;
