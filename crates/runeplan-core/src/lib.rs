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

//! # Runeplan Core
//!
//! Foundational utilities and numerics for the runeplan build planner.
//! This crate consolidates the reusable building blocks that underpin the
//! higher-level model and search crates.
//!
//! ## Modules
//!
//! - `num`: the `PlannerNumeric` trait alias collecting the integer
//!   capabilities the planner requires, together with small conversion and
//!   parity helpers used by the search and reporting code.
//! - `utils`: phantom-tagged, strongly typed indices (`TypedIndex<T>`) that
//!   prevent mixing indices from different domains (stations vs. packages).
//!
//! These primitives enable robust, generic code in the planning pipeline
//! while keeping runtime overhead minimal.

pub mod num;
pub mod utils;
