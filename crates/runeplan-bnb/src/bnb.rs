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

//! Branch-and-bound searcher for station purchase packages.
//!
//! This module implements the depth-first search that assigns a purchase
//! quantity to every package option while pruning subtrees that cannot
//! beat the incumbent bonus. `BnbSearcher` owns reusable internal storage
//! across repeated solves; a search session object encapsulates per-run
//! state, statistics, and timing.
//!
//! The search is deterministic: packages are visited in catalog-fixed
//! order and quantities are enumerated from the budget-derived maximum
//! down to zero, so among assignments tying on bonus the first one
//! enumerated is reported. Termination is guaranteed because quantity
//! domains are finite and the package index strictly advances; the
//! all-zero assignment is always feasible, so a session always produces a
//! solution.

use crate::{
    eval::{BoundEvaluator, RuneDensityBound},
    monitor::SearchMonitor,
    package::{build_packages_into, PackageOption},
    result::SearchOutcome,
    state::SearchState,
    stats::SearchStatistics,
};
use runeplan_core::num::PlannerNumeric;
use runeplan_model::{index::PackageIndex, model::Model, rune::ResourceVector, solution::Solution};

/// A branch-and-bound searcher over package purchase quantities.
///
/// This is just the execution engine: the purchasable options are derived
/// by `package::build_packages` and the pruning bound is supplied by a
/// `BoundEvaluator`.
#[derive(Clone, Debug)]
pub struct BnbSearcher<T> {
    packages: Vec<PackageOption<T>>,
}

impl<T> Default for BnbSearcher<T>
where
    T: PlannerNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BnbSearcher<T>
where
    T: PlannerNumeric,
{
    /// Creates a new searcher instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            packages: Vec::new(),
        }
    }

    /// Creates a new searcher with preallocated storage for the given
    /// number of package options.
    ///
    /// # Note
    ///
    /// The searcher grows its storage on demand either way; preallocating
    /// only moves the allocation cost to construction time.
    #[inline]
    pub fn preallocated(num_packages: usize) -> Self {
        Self {
            packages: Vec::with_capacity(num_packages),
        }
    }

    /// Solves the given model with the standard rune-density bound.
    #[inline]
    pub fn solve<M>(&mut self, model: &Model<T>, monitor: &mut M) -> SearchOutcome<T>
    where
        M: SearchMonitor<T>,
    {
        build_packages_into(model, &mut self.packages);
        let evaluator = RuneDensityBound::from_packages(&self.packages);
        SearchSession::new(model.budget(), &self.packages, &evaluator, monitor).run()
    }

    /// Solves the given model with a caller-provided `BoundEvaluator`.
    ///
    /// The package list is re-derived from the model, so an evaluator
    /// constructed from `package::build_packages(model)` sees the same
    /// options in the same order.
    #[inline]
    pub fn solve_with_evaluator<E, M>(
        &mut self,
        model: &Model<T>,
        evaluator: &E,
        monitor: &mut M,
    ) -> SearchOutcome<T>
    where
        E: BoundEvaluator<T>,
        M: SearchMonitor<T>,
    {
        build_packages_into(model, &mut self.packages);
        SearchSession::new(model.budget(), &self.packages, evaluator, monitor).run()
    }
}

/// A search session: the state and logic of a single search run.
struct SearchSession<'a, T, E, M>
where
    T: PlannerNumeric,
{
    budget: ResourceVector<T>,
    packages: &'a [PackageOption<T>],
    evaluator: &'a E,
    monitor: &'a mut M,
    state: SearchState<T>,
    best_bonus: T,
    best_quantities: Vec<T>,
    stats: SearchStatistics,
    start_time: std::time::Instant,
}

impl<'a, T, E, M> SearchSession<'a, T, E, M>
where
    T: PlannerNumeric,
    E: BoundEvaluator<T>,
    M: SearchMonitor<T>,
{
    /// Creates a new search session. The incumbent starts as the all-zero
    /// assignment with bonus 0, which is feasible for every budget.
    fn new(
        budget: ResourceVector<T>,
        packages: &'a [PackageOption<T>],
        evaluator: &'a E,
        monitor: &'a mut M,
    ) -> Self {
        Self {
            budget,
            packages,
            evaluator,
            monitor,
            state: SearchState::new(packages.len()),
            best_bonus: T::zero(),
            best_quantities: vec![T::zero(); packages.len()],
            stats: SearchStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Runs the session to exhaustion and finalizes the outcome.
    fn run(mut self) -> SearchOutcome<T> {
        self.monitor.on_enter_search(self.packages);
        self.explore(0);
        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);

        debug_assert!(
            self.spend_of(&self.best_quantities).fits_within(&self.budget),
            "search produced an assignment exceeding the budget"
        );
        SearchOutcome::new(
            Solution::new(self.best_bonus, self.best_quantities),
            self.stats,
        )
    }

    /// Depth-first exploration of quantities for the package at `index`
    /// and everything after it.
    fn explore(&mut self, index: usize) {
        self.stats.on_node_explored();

        if index == self.packages.len() {
            self.record_if_improved();
            return;
        }

        let remaining = self.budget - self.state.spent();
        if self.is_dominated(&remaining) {
            self.stats.on_pruning_bound();
            self.monitor.on_prune(&self.state, &self.stats);
            return;
        }

        let package = self.packages[index];
        let package_index = PackageIndex::new(index);
        let limit = package.max_quantity(&remaining);

        let mut quantity = limit;
        loop {
            self.stats.on_quantity_tried();
            let next_spent = self.state.spent() + package.cost().scaled(quantity);
            // Always true by construction of the limit, but re-checked.
            if next_spent.fits_within(&self.budget) {
                let saved_spent = self.state.spent();
                let saved_bonus = self.state.bonus();
                let next_bonus = saved_bonus + package.bonus() * quantity;

                self.state
                    .assign(package_index, quantity, next_spent, next_bonus);
                self.explore(index + 1);
                self.state.restore(saved_spent, saved_bonus);
            }

            if quantity.is_zero() {
                break;
            }
            quantity = quantity - T::one();
        }

        self.state.clear_quantity(package_index);
    }

    /// Records the current assignment as the new incumbent if it improves
    /// on the best bonus seen so far.
    #[inline]
    fn record_if_improved(&mut self) {
        if self.state.bonus() > self.best_bonus {
            self.best_bonus = self.state.bonus();
            self.best_quantities.clear();
            self.best_quantities
                .extend_from_slice(self.state.quantities());
            self.stats.on_solution_found();
            self.monitor.on_improvement(self.best_bonus, &self.stats);
        }
    }

    /// Returns `true` when the optimistic bound on the remaining budget
    /// cannot lift the accumulated bonus past the incumbent.
    #[inline]
    fn is_dominated(&self, remaining: &ResourceVector<T>) -> bool {
        let bound = self.evaluator.remaining_bonus_bound(remaining);
        self.state.bonus().into_f64() + bound < self.best_bonus.into_f64()
    }

    /// Total spend of a full quantity assignment.
    fn spend_of(&self, quantities: &[T]) -> ResourceVector<T> {
        let mut spent = ResourceVector::zero();
        for (package, quantity) in self.packages.iter().zip(quantities.iter()) {
            spent = spent + package.cost().scaled(*quantity);
        }
        spent
    }
}
