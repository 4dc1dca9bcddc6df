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

//! Search state management for the branch-and-bound searcher.
//!
//! This module provides `SearchState`, a compact, mutable container for the
//! running spend vector, the running bonus total, and the partial quantity
//! assignment during one search. The state is owned exclusively by the
//! search session and mutated in place through the recursion; the session
//! restores the prior spend and bonus after every branch and zeroes the
//! quantity slot on exit, so backtracking is explicit on every path.
//!
//! Invariants (debug-checked at the call sites):
//! - `spent` fits component-wise within the model budget whenever a
//!   quantity has been committed.
//! - Quantity slots beyond the current package index are zero.

use runeplan_core::num::PlannerNumeric;
use runeplan_model::{index::PackageIndex, rune::ResourceVector};
use smallvec::SmallVec;

/// The per-package quantity storage. The standard catalog derives at most
/// fourteen package options, so the inline capacity avoids heap traffic
/// for every realistic search.
type QuantityVec<T> = SmallVec<[T; 16]>;

/// A compact, mutable container holding the incremental search state.
#[derive(Debug, Clone)]
pub struct SearchState<T> {
    spent: ResourceVector<T>,
    bonus: T,
    quantities: QuantityVec<T>,
}

impl<T> SearchState<T>
where
    T: PlannerNumeric,
{
    /// Creates a new `SearchState` for the given number of package
    /// options. The initial state has nothing spent, a zero bonus, and an
    /// all-zero quantity assignment.
    #[inline]
    pub fn new(num_packages: usize) -> Self {
        let mut quantities = QuantityVec::with_capacity(num_packages);
        quantities.resize(num_packages, T::zero());
        Self {
            spent: ResourceVector::zero(),
            bonus: T::zero(),
            quantities,
        }
    }

    /// Returns the number of package options tracked by this state.
    #[inline]
    pub fn num_packages(&self) -> usize {
        self.quantities.len()
    }

    /// Returns the running spend vector.
    #[inline]
    pub fn spent(&self) -> ResourceVector<T> {
        self.spent
    }

    /// Returns the running bonus total.
    #[inline]
    pub fn bonus(&self) -> T {
        self.bonus
    }

    /// Returns the quantity currently assigned to a package.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `package_index` is out of bounds.
    #[inline]
    pub fn quantity(&self, package_index: PackageIndex) -> T {
        let index = package_index.get();
        debug_assert!(
            index < self.num_packages(),
            "called `SearchState::quantity` with package index out of bounds: the len is {} but the index is {}",
            self.num_packages(),
            index
        );
        self.quantities[index]
    }

    /// Returns the full quantity assignment.
    #[inline]
    pub fn quantities(&self) -> &[T] {
        &self.quantities
    }

    /// Commits a branch: records `quantity` for the package and replaces
    /// the running totals with the post-purchase values.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `package_index` is out of bounds.
    #[inline]
    pub fn assign(
        &mut self,
        package_index: PackageIndex,
        quantity: T,
        new_spent: ResourceVector<T>,
        new_bonus: T,
    ) {
        let index = package_index.get();
        debug_assert!(
            index < self.num_packages(),
            "called `SearchState::assign` with package index out of bounds: the len is {} but the index is {}",
            self.num_packages(),
            index
        );
        self.quantities[index] = quantity;
        self.spent = new_spent;
        self.bonus = new_bonus;
    }

    /// Restores the running totals to the values saved before a branch.
    #[inline]
    pub fn restore(&mut self, spent: ResourceVector<T>, bonus: T) {
        self.spent = spent;
        self.bonus = bonus;
    }

    /// Zeroes the quantity slot for a package after all of its branches
    /// have been explored.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `package_index` is out of bounds.
    #[inline]
    pub fn clear_quantity(&mut self, package_index: PackageIndex) {
        let index = package_index.get();
        debug_assert!(
            index < self.num_packages(),
            "called `SearchState::clear_quantity` with package index out of bounds: the len is {} but the index is {}",
            self.num_packages(),
            index
        );
        self.quantities[index] = T::zero();
    }
}
