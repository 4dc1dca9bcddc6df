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

//! # The Planning Facade
//!
//! `Planner` ties the pipeline together: it runs the branch-and-bound
//! search over a validated model, reconstructs the winning assignment into
//! a [`PlanResult`], and returns it with the search statistics as a
//! [`PlanReport`].
//!
//! The whole pipeline is one synchronous, uninterruptible computation:
//! each call receives a fresh model snapshot, owns its search state
//! exclusively, and produces a report before returning. The planner keeps
//! no state between calls beyond reusable search storage.

use crate::plan::{reconstruct, PlanResult};
use runeplan_bnb::{
    bnb::BnbSearcher,
    monitor::{LogMonitor, SearchMonitor},
    package::build_packages,
    stats::SearchStatistics,
};
use runeplan_core::num::PlannerNumeric;
use runeplan_model::model::Model;

/// The report of one planning call: the reconstructed plan together with
/// the statistics of the search that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanReport<T> {
    result: PlanResult<T>,
    statistics: SearchStatistics,
}

impl<T> PlanReport<T>
where
    T: PlannerNumeric,
{
    /// Returns the reconstructed plan.
    #[inline]
    pub fn result(&self) -> &PlanResult<T> {
        &self.result
    }

    /// Returns the statistics of the underlying search.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Splits the report into its plan and statistics.
    #[inline]
    pub fn into_parts(self) -> (PlanResult<T>, SearchStatistics) {
        (self.result, self.statistics)
    }
}

impl<T> std::fmt::Display for PlanReport<T>
where
    T: PlannerNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.result, f)
    }
}

/// The high-level planner.
///
/// # Examples
///
/// ```rust
/// use runeplan_model::model::ModelBuilder;
/// use runeplan_model::rune::{ResourceVector, Rune};
/// use runeplan_solver::solver::Planner;
///
/// let model = ModelBuilder::<u64>::new()
///     .budget(ResourceVector::from_amounts(&[(Rune::Mana, 640)]))
///     .build()
///     .unwrap();
///
/// let report = Planner::new().plan(&model);
/// assert_eq!(report.result().bonus(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Planner<T> {
    searcher: BnbSearcher<T>,
}

impl<T> Planner<T>
where
    T: PlannerNumeric,
{
    /// Creates a new planner instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            searcher: BnbSearcher::new(),
        }
    }

    /// Plans against the given model, reporting search progress through
    /// the `log` facade.
    #[inline]
    pub fn plan(&mut self, model: &Model<T>) -> PlanReport<T> {
        self.plan_with_monitor(model, &mut LogMonitor)
    }

    /// Plans against the given model with a caller-provided monitor.
    pub fn plan_with_monitor<M>(&mut self, model: &Model<T>, monitor: &mut M) -> PlanReport<T>
    where
        M: SearchMonitor<T>,
    {
        let outcome = self.searcher.solve(model, monitor);
        let (solution, statistics) = outcome.into_parts();

        let packages = build_packages(model);
        let result = reconstruct(model, &packages, &solution);
        log::debug!(
            "planned +{}% bonus in {} nodes",
            result.bonus(),
            statistics.nodes_explored
        );

        PlanReport { result, statistics }
    }
}

impl<T> Default for Planner<T>
where
    T: PlannerNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeplan_bnb::monitor::NopMonitor;
    use runeplan_model::{
        model::ModelBuilder,
        rune::{ResourceVector, Rune},
    };

    type I = u64;

    #[test]
    fn test_plan_produces_report_with_statistics() {
        let model = ModelBuilder::<I>::new()
            .budget(ResourceVector::from_amounts(&[(Rune::Mana, 640)]))
            .build()
            .unwrap();

        let report = Planner::new().plan(&model);
        assert_eq!(report.result().bonus(), 5);
        assert!(report.statistics().nodes_explored > 0);
    }

    #[test]
    fn test_planner_is_reusable() {
        let mut planner = Planner::<I>::new();
        let busy = ModelBuilder::<I>::new()
            .budget(ResourceVector::from_amounts(&[(Rune::Mana, 1_280)]))
            .build()
            .unwrap();
        let idle = ModelBuilder::<I>::new().build().unwrap();

        let first = planner.plan_with_monitor(&busy, &mut NopMonitor);
        let second = planner.plan_with_monitor(&idle, &mut NopMonitor);

        assert_eq!(first.result().bonus(), 10);
        assert_eq!(second.result().bonus(), 0);
    }

    #[test]
    fn test_report_display_delegates_to_the_plan() {
        let model = ModelBuilder::<I>::new().build().unwrap();
        let report = Planner::new().plan(&model);
        let rendered = format!("{}", report);
        assert!(rendered.contains("Optimal plan: +0% restart bonus"));
    }

    #[test]
    fn test_into_parts_round_trip() {
        let model = ModelBuilder::<I>::new().build().unwrap();
        let report = Planner::new().plan(&model);
        let expected = report.clone();
        let (result, statistics) = report.into_parts();
        assert_eq!(&result, expected.result());
        assert_eq!(&statistics, expected.statistics());
    }
}
