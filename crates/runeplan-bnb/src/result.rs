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

use crate::stats::SearchStatistics;
use runeplan_core::num::PlannerNumeric;
use runeplan_model::solution::Solution;

/// Result of the searcher after running to exhaustion.
///
/// The search cannot fail: the all-zero assignment is always feasible, so
/// an outcome always carries a solution. The statistics describe the run
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<T> {
    solution: Solution<T>,
    statistics: SearchStatistics,
}

impl<T> SearchOutcome<T>
where
    T: PlannerNumeric,
{
    /// Constructs a new `SearchOutcome`.
    #[inline]
    pub fn new(solution: Solution<T>, statistics: SearchStatistics) -> Self {
        Self {
            solution,
            statistics,
        }
    }

    /// Returns the best solution found.
    #[inline]
    pub fn solution(&self) -> &Solution<T> {
        &self.solution
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Splits the outcome into its solution and statistics.
    #[inline]
    pub fn into_parts(self) -> (Solution<T>, SearchStatistics) {
        (self.solution, self.statistics)
    }
}

impl<T> std::fmt::Display for SearchOutcome<T>
where
    T: PlannerNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchOutcome(bonus: +{}%, nodes: {})",
            self.solution.best_bonus(),
            self.statistics.nodes_explored
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type I = u64;

    #[test]
    fn test_accessors_and_into_parts() {
        let solution = Solution::<I>::new(10, vec![2, 0]);
        let mut statistics = SearchStatistics::default();
        statistics.on_node_explored();

        let outcome = SearchOutcome::new(solution.clone(), statistics.clone());
        assert_eq!(outcome.solution(), &solution);
        assert_eq!(outcome.statistics(), &statistics);

        let (sol, stats) = outcome.into_parts();
        assert_eq!(sol, solution);
        assert_eq!(stats, statistics);
    }

    #[test]
    fn test_display_summarizes_bonus_and_nodes() {
        let outcome = SearchOutcome::new(Solution::<I>::new(5, vec![1]), SearchStatistics::default());
        assert_eq!(format!("{}", outcome), "SearchOutcome(bonus: +5%, nodes: 0)");
    }
}
