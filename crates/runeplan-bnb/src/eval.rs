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

//! Bound evaluation for the branch-and-bound search.
//!
//! A `BoundEvaluator` decouples the searcher from a particular pruning
//! bound. The searcher calls `remaining_bonus_bound` before branching; a
//! subtree is abandoned when the accumulated bonus plus the bound cannot
//! beat the incumbent.
//!
//! The standard implementation is [`RuneDensityBound`]: per rune dimension
//! it keeps the best bonus-per-rune density over all packages consuming
//! that rune, and bounds the remaining potential by the *minimum* across
//! dimensions of `remaining[r] * density[r]`. The min-across-dimensions
//! semantics are kept exactly as the planner has always computed them;
//! they are tighter than a per-dimension sum and have only been validated
//! empirically (see the optimality tests), so any replacement bound must
//! be introduced as a separate `BoundEvaluator` rather than by changing
//! this one.

use crate::package::PackageOption;
use runeplan_core::num::PlannerNumeric;
use runeplan_model::rune::{ResourceVector, Rune, NUM_RUNES};

/// A strategy producing an optimistic upper bound on the bonus still
/// attainable from a remaining budget.
///
/// Implementations must never under-estimate relative to their own
/// admissibility claim: the searcher prunes a subtree when
/// `bonus_so_far + remaining_bonus_bound(remaining)` falls short of the
/// incumbent.
pub trait BoundEvaluator<T>
where
    T: PlannerNumeric,
{
    /// Returns the name of the bound evaluator.
    fn name(&self) -> &str;

    /// Returns an optimistic bound on the bonus still attainable when
    /// `remaining` runes are left to spend.
    fn remaining_bonus_bound(&self, remaining: &ResourceVector<T>) -> f64;
}

impl<T> std::fmt::Debug for dyn BoundEvaluator<T>
where
    T: PlannerNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BoundEvaluator({})", self.name())
    }
}

/// The rune-density bound.
///
/// For each rune dimension `r`, `density[r]` is the maximum of
/// `bonus / cost[r]` over all packages with `cost[r] > 0` (0 when no
/// package consumes `r`): the best bonus achievable per unit of rune `r`
/// under any single package type. The bound for a remaining budget is the
/// minimum over dimensions with positive density of
/// `remaining[r] * density[r]`, or 0 when no dimension has positive
/// density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RuneDensityBound {
    densities: [f64; NUM_RUNES],
}

impl RuneDensityBound {
    /// Computes the per-rune densities for one search's package list.
    pub fn from_packages<T>(packages: &[PackageOption<T>]) -> Self
    where
        T: PlannerNumeric,
    {
        let mut densities = [0.0f64; NUM_RUNES];
        for (dimension, density) in densities.iter_mut().enumerate() {
            for package in packages {
                let cost = package.cost().component(dimension);
                if cost > T::zero() {
                    let ratio = package.bonus().into_f64() / cost.into_f64();
                    if ratio > *density {
                        *density = ratio;
                    }
                }
            }
        }
        Self { densities }
    }

    /// Returns the density for the given rune.
    #[inline]
    pub fn density(&self, rune: Rune) -> f64 {
        self.densities[rune.index()]
    }
}

impl<T> BoundEvaluator<T> for RuneDensityBound
where
    T: PlannerNumeric,
{
    fn name(&self) -> &str {
        "RuneDensityBound"
    }

    fn remaining_bonus_bound(&self, remaining: &ResourceVector<T>) -> f64 {
        let mut bound = f64::INFINITY;
        for (dimension, density) in self.densities.iter().enumerate() {
            if *density > 0.0 {
                bound = bound.min(remaining.component(dimension).into_f64() * density);
            }
        }
        if bound.is_finite() {
            bound
        } else {
            0.0
        }
    }
}
