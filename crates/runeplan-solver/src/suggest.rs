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

//! Suggestion ranking.
//!
//! After a plan is reconstructed, the leftover runes rarely cover another
//! full completion. The ranker tells the caller which stations are closest
//! to their next completion point: for each station it prices the units
//! still needed (one if the total built count is odd, two otherwise),
//! subtracts the leftovers, and sorts by the total deficit, breaking ties
//! by descending bonus.

use runeplan_core::num::PlannerNumeric;
use runeplan_model::{
    index::StationIndex,
    model::Model,
    rune::{ResourceVector, NUM_RUNES},
};

/// The number of suggestions reported.
pub const SUGGESTION_LIMIT: usize = 3;

/// One ranked farm target: a station, the units it still needs for its
/// next completion, and the rune deficit left after leftovers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suggestion<T> {
    station: StationIndex,
    name: &'static str,
    legendary: &'static str,
    bonus: T,
    needed_units: T,
    deficits: ResourceVector<T>,
    missing_total: u64,
}

impl<T> Suggestion<T>
where
    T: PlannerNumeric,
{
    /// Returns the index of the suggested station.
    #[inline]
    pub fn station(&self) -> StationIndex {
        self.station
    }

    /// Returns the station name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the legendary the completion would unlock.
    #[inline]
    pub fn legendary(&self) -> &'static str {
        self.legendary
    }

    /// Returns the station's bonus percentage.
    #[inline]
    pub fn bonus(&self) -> T {
        self.bonus
    }

    /// Returns the units still needed to reach the next completion point:
    /// one while the total built count is odd, two otherwise.
    #[inline]
    pub fn needed_units(&self) -> T {
        self.needed_units
    }

    /// Returns the per-rune deficit after leftovers are applied.
    #[inline]
    pub fn deficits(&self) -> ResourceVector<T> {
        self.deficits
    }

    /// Returns the summed deficit across all runes.
    #[inline]
    pub fn missing_total(&self) -> u64 {
        self.missing_total
    }

    /// Returns `true` when the completion is affordable from leftovers
    /// alone.
    #[inline]
    pub fn is_affordable(&self) -> bool {
        self.missing_total == 0
    }
}

impl<T> std::fmt::Display for Suggestion<T>
where
    T: PlannerNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {} unit(s), missing {}",
            self.legendary, self.name, self.needed_units, self.missing_total
        )
    }
}

/// Ranks all stations by the deficit to their next completion and returns
/// the closest [`SUGGESTION_LIMIT`].
///
/// `totals` holds the post-plan built count per station, in catalog order.
/// Ties on the deficit are broken by descending bonus; remaining ties keep
/// catalog order.
///
/// # Panics
///
/// In debug builds, panics if `totals` does not cover every station.
pub fn rank_suggestions<T>(
    model: &Model<T>,
    totals: &[T],
    leftover: &ResourceVector<T>,
) -> Vec<Suggestion<T>>
where
    T: PlannerNumeric,
{
    debug_assert_eq!(
        totals.len(),
        model.num_stations(),
        "called `rank_suggestions` with a totals slice not covering the catalog"
    );

    let mut suggestions: Vec<Suggestion<T>> = model
        .stations()
        .iter()
        .enumerate()
        .map(|(index, station)| {
            let needed_units = if totals[index].is_odd() {
                T::one()
            } else {
                T::one() + T::one()
            };
            let needed_cost = station.unit_cost().scaled(needed_units);

            let mut components = [T::zero(); NUM_RUNES];
            for (dimension, component) in components.iter_mut().enumerate() {
                let needed = needed_cost.component(dimension);
                let available = leftover.component(dimension);
                if needed > available {
                    *component = needed - available;
                }
            }
            let deficits = ResourceVector::new(components);
            let missing_total = deficits
                .components()
                .iter()
                .map(|component| Into::<u64>::into(*component))
                .sum();

            Suggestion {
                station: StationIndex::new(index),
                name: station.name(),
                legendary: station.legendary(),
                bonus: station.bonus(),
                needed_units,
                deficits,
                missing_total,
            }
        })
        .collect();

    suggestions.sort_by(|a, b| {
        a.missing_total
            .cmp(&b.missing_total)
            .then_with(|| b.bonus.cmp(&a.bonus))
    });
    suggestions.truncate(SUGGESTION_LIMIT);
    suggestions
}
