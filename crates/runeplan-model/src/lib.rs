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

//! # Runeplan Model
//!
//! **The Core Domain Model for the Runeplan Build Planner.**
//!
//! This crate defines the fundamental data structures used to represent the
//! rune-budgeted station construction problem. It serves as the data
//! interchange layer between the problem definition (user input) and the
//! solving engine (`runeplan_bnb`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **solving**:
//!
//! * **`rune`**: The five fixed resource types and the `ResourceVector<T>`
//!   value type every budget, cost, and spend amount is expressed in.
//! * **`station`**: Station definitions and the static standard catalog.
//! * **`index`**: Strongly-typed wrappers (`StationIndex`, `PackageIndex`)
//!   to prevent logical indexing errors.
//! * **`model`**: The `Model` (immutable, validated) and `ModelBuilder`
//!   (mutable, optimized for configuration).
//! * **`solution`**: The search output format: the best bonus together with
//!   the per-package purchase quantities that realize it.
//!
//! ## Design Philosophy
//!
//! 1. **Type Safety**: Indices are distinct types; a `StationIndex` cannot
//!    be used where a `PackageIndex` is expected.
//! 2. **Immutability**: The catalog and a built `Model` never change at
//!    runtime; each planning call receives a fresh snapshot.
//! 3. **Fail-Fast**: The builder validates inputs eagerly so the solver
//!    never encounters an invalid state.

pub mod index;
pub mod model;
pub mod rune;
pub mod solution;
pub mod station;
