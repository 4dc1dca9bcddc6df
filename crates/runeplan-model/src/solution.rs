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

use crate::index::PackageIndex;
use runeplan_core::num::PlannerNumeric;

/// The final solution of one search: the best attainable bonus and the
/// per-package purchase quantities realizing it.
///
/// Quantities are indexed directly by `PackageIndex` (index `i` corresponds
/// to the `i`-th package option derived for the search). Immutable once the
/// search completes; the all-zero assignment with bonus 0 is always a valid
/// solution, so every search produces one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<T> {
    /// The total bonus of this solution.
    best_bonus: T,

    /// The purchase quantity for each package option.
    /// `quantities[p]` is the quantity chosen for package `p`.
    quantities: Vec<T>,
}

impl<T> Solution<T>
where
    T: PlannerNumeric,
{
    /// Constructs a new `Solution`.
    pub fn new(best_bonus: T, quantities: Vec<T>) -> Self {
        Self {
            best_bonus,
            quantities,
        }
    }

    /// Returns the total bonus of this solution.
    #[inline]
    pub fn best_bonus(&self) -> T {
        self.best_bonus
    }

    /// Returns the quantity chosen for a specific package.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `package_index` is out of bounds.
    #[inline]
    pub fn quantity(&self, package_index: PackageIndex) -> T {
        let index = package_index.get();
        debug_assert!(
            index < self.num_packages(),
            "called `Solution::quantity` with package index out of bounds: the len is {} but the index is {}",
            self.num_packages(),
            index
        );
        self.quantities[index]
    }

    /// Returns a slice of quantities for all packages.
    #[inline]
    pub fn quantities(&self) -> &[T] {
        &self.quantities
    }

    /// Returns the number of package options in this solution.
    #[inline]
    pub fn num_packages(&self) -> usize {
        self.quantities.len()
    }

    /// Returns `true` if no package is purchased.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quantities.iter().all(|q| q.is_zero())
    }
}

impl<T> std::fmt::Display for Solution<T>
where
    T: PlannerNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution Summary")?;
        writeln!(f, "   Total Bonus: +{}%", self.best_bonus)?;
        writeln!(f)?;

        if self.num_packages() == 0 {
            writeln!(f, "   (No package options)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<10}", "Package", "Quantity")?;
        writeln!(f, "   {:-<10}-+-{:-<10}", "", "")?;
        for (index, quantity) in self.quantities.iter().enumerate() {
            writeln!(f, "   {:<10} | {:<10}", index, quantity)?;
        }

        Ok(())
    }
}
