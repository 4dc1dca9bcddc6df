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

//! Search monitors.
//!
//! A `SearchMonitor` observes the search without influencing it: the
//! session reports entry, prunes, incumbent improvements, and exit. The
//! search is single-threaded and always runs to exhaustion, so monitors
//! carry no termination authority.

use crate::{package::PackageOption, state::SearchState, stats::SearchStatistics};
use runeplan_core::num::PlannerNumeric;

/// An observer for one search run. All hooks default to no-ops.
pub trait SearchMonitor<T>
where
    T: PlannerNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once before the search starts, with the derived package
    /// list in branching order.
    fn on_enter_search(&mut self, packages: &[PackageOption<T>]) {
        let _ = packages;
    }

    /// Called when a subtree is abandoned by the bound check.
    fn on_prune(&mut self, state: &SearchState<T>, stats: &SearchStatistics) {
        let _ = (state, stats);
    }

    /// Called when a leaf improves on the incumbent.
    fn on_improvement(&mut self, bonus: T, stats: &SearchStatistics) {
        let _ = (bonus, stats);
    }

    /// Called once after the search has run to exhaustion.
    fn on_exit_search(&mut self, stats: &SearchStatistics) {
        let _ = stats;
    }
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: PlannerNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

/// A monitor that observes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopMonitor;

impl<T> SearchMonitor<T> for NopMonitor
where
    T: PlannerNumeric,
{
    fn name(&self) -> &str {
        "NopMonitor"
    }
}

/// A monitor that reports search progress through the `log` facade.
///
/// Improvements are logged at debug level and the closing statistics at
/// trace level; with logging disabled the hooks compile down to cheap
/// level checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMonitor;

impl<T> SearchMonitor<T> for LogMonitor
where
    T: PlannerNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, packages: &[PackageOption<T>]) {
        log::debug!("entering search over {} package options", packages.len());
    }

    fn on_improvement(&mut self, bonus: T, stats: &SearchStatistics) {
        log::debug!(
            "incumbent improved to +{}% after {} nodes",
            bonus,
            stats.nodes_explored
        );
    }

    fn on_exit_search(&mut self, stats: &SearchStatistics) {
        log::trace!("{}", stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeplan_model::index::PackageIndex;

    type I = u64;

    /// A monitor that records the order of its callbacks.
    #[derive(Default)]
    struct RecordingMonitor {
        events: Vec<String>,
    }

    impl SearchMonitor<I> for RecordingMonitor {
        fn name(&self) -> &str {
            "RecordingMonitor"
        }

        fn on_enter_search(&mut self, packages: &[PackageOption<I>]) {
            self.events.push(format!("enter:{}", packages.len()));
        }

        fn on_prune(&mut self, _state: &SearchState<I>, _stats: &SearchStatistics) {
            self.events.push("prune".to_string());
        }

        fn on_improvement(&mut self, bonus: I, _stats: &SearchStatistics) {
            self.events.push(format!("improve:{}", bonus));
        }

        fn on_exit_search(&mut self, _stats: &SearchStatistics) {
            self.events.push("exit".to_string());
        }
    }

    #[test]
    fn test_default_hooks_are_no_ops() {
        let mut monitor = NopMonitor;
        let state = SearchState::<I>::new(1);
        let stats = SearchStatistics::default();

        SearchMonitor::<I>::on_enter_search(&mut monitor, &[]);
        SearchMonitor::<I>::on_prune(&mut monitor, &state, &stats);
        SearchMonitor::<I>::on_improvement(&mut monitor, 5, &stats);
        SearchMonitor::<I>::on_exit_search(&mut monitor, &stats);
        assert_eq!(SearchMonitor::<I>::name(&monitor), "NopMonitor");

        // The state is untouched by observation.
        assert_eq!(state.quantity(PackageIndex::new(0)), 0);
    }

    #[test]
    fn test_recording_monitor_sees_callbacks_in_order() {
        let mut monitor = RecordingMonitor::default();
        let state = SearchState::<I>::new(0);
        let stats = SearchStatistics::default();

        monitor.on_enter_search(&[]);
        monitor.on_improvement(10, &stats);
        monitor.on_prune(&state, &stats);
        monitor.on_exit_search(&stats);

        assert_eq!(
            monitor.events,
            vec!["enter:0", "improve:10", "prune", "exit"]
        );
    }
}
