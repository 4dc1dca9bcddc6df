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

//! # Runeplan Solver
//!
//! The high-level planning facade. Given a validated
//! `runeplan_model::model::Model`, the [`solver::Planner`] runs the
//! branch-and-bound search, reconstructs the winning assignment into
//! per-station build counts, accounts the newly unlocked legendaries, and
//! ranks the cheapest stations to complete next.
//!
//! Module map
//! - `solver`: the `Planner` facade and the `PlanReport` it returns.
//! - `plan`: plan reconstruction and the rendered `PlanResult`.
//! - `suggest`: suggestion ranking over leftover runes.

pub mod plan;
pub mod solver;
pub mod suggest;
