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

//! # Planner Numeric Trait
//!
//! Unified numeric bounds for the planning pipeline. `PlannerNumeric`
//! specifies the integer capabilities required by the model and the search,
//! including intrinsic traits (`PrimInt`, `Unsigned`) and conversions
//! to/from the raw catalog representation.
//!
//! ## Motivation
//!
//! The planner should remain generic over integer types while retaining
//! predictable arithmetic semantics. Every quantity in the system (rune
//! amounts, built counts, bonus percentages) is a non-negative integer, so
//! the alias builds on unsigned primitives and collects the necessary bounds
//! into a single name, simplifying generic signatures.
//!
//! ## Highlights
//!
//! - Requires `PrimInt + Unsigned` for numeric fundamentals.
//! - Enforces `From<u32> + Into<u64>` for lossless interop with the static
//!   catalog (raw `u32` amounts) and the floating-point bound math.
//! - Provides parity and conversion helpers (`is_odd`, `halved`, `into_f64`,
//!   `from_catalog`) shared by the search and reporting code.
//! - `Send + Sync` so models and solutions can cross thread boundaries.
//!
//! Note: `u128` is intentionally excluded (no lossless `Into<u64>`); the
//! planner is usually instantiated with `u32` or `u64`.

use num_traits::{PrimInt, Unsigned};
use std::hash::Hash;

/// A trait alias for numeric types that can be used by the planner.
/// These are unsigned integer types wide enough to hold the raw catalog
/// amounts, usually `u32` or `u64`.
pub trait PlannerNumeric:
    PrimInt
    + Unsigned
    + From<u32>
    + Into<u64>
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + Hash
{
    /// Lossless conversion from a raw catalog amount.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use runeplan_core::num::PlannerNumeric;
    /// let value: u64 = PlannerNumeric::from_catalog(320);
    /// assert_eq!(value, 320);
    /// ```
    #[inline]
    fn from_catalog(value: u32) -> Self {
        <Self as From<u32>>::from(value)
    }

    /// Widening conversion used by the floating-point bound math.
    #[inline]
    fn into_f64(self) -> f64 {
        let wide: u64 = self.into();
        wide as f64
    }

    /// Returns `true` if the value is odd.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use runeplan_core::num::PlannerNumeric;
    /// assert!(3u64.is_odd());
    /// assert!(!4u64.is_odd());
    /// ```
    #[inline]
    fn is_odd(self) -> bool {
        self & Self::one() == Self::one()
    }

    /// Halves the value, rounding down.
    #[inline]
    fn halved(self) -> Self {
        self >> 1
    }
}

impl<T> PlannerNumeric for T where
    T: PrimInt
        + Unsigned
        + From<u32>
        + Into<u64>
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
        + Hash
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_catalog_is_lossless() {
        assert_eq!(<u32 as PlannerNumeric>::from_catalog(800), 800u32);
        assert_eq!(<u64 as PlannerNumeric>::from_catalog(u32::MAX), u32::MAX as u64);
    }

    #[test]
    fn test_into_f64_widens_exactly_for_small_values() {
        assert_eq!(640u64.into_f64(), 640.0);
        assert_eq!(0u32.into_f64(), 0.0);
    }

    #[test]
    fn test_parity_helpers() {
        assert!(1u64.is_odd());
        assert!(!0u64.is_odd());
        assert!(!2u32.is_odd());
        assert_eq!(5u64.halved(), 2);
        assert_eq!(4u64.halved(), 2);
        assert_eq!(0u32.halved(), 0);
    }
}
