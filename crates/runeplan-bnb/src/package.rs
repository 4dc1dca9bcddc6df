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

//! Purchasable package options.
//!
//! The search does not branch on individual station units: a station's
//! bonus is realized once per completed pair, so the purchasable units are
//! *packages*. A station whose built count is odd offers a one-unit
//! completion package (the cheaper path to the next realized bonus); every
//! station offers a pair package. The derived list is fixed for the
//! duration of one search and its order fixes the branching order.

use runeplan_core::num::PlannerNumeric;
use runeplan_model::{index::StationIndex, model::Model, rune::ResourceVector};

/// Discriminates the two package shapes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PackageKind {
    /// A single unit completing an odd built count. Quantity domain {0, 1}.
    Completion,
    /// Two units forming a full pair. Quantity bounded only by the budget.
    Pair,
}

/// A purchasable unit derived from one station definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackageOption<T> {
    station: StationIndex,
    kind: PackageKind,
    cost: ResourceVector<T>,
    bonus: T,
}

impl<T> PackageOption<T>
where
    T: PlannerNumeric,
{
    /// Creates a new package option.
    #[inline]
    pub fn new(station: StationIndex, kind: PackageKind, cost: ResourceVector<T>, bonus: T) -> Self {
        Self {
            station,
            kind,
            cost,
            bonus,
        }
    }

    /// Returns the index of the originating station.
    #[inline]
    pub fn station(&self) -> StationIndex {
        self.station
    }

    /// Returns the package kind.
    #[inline]
    pub fn kind(&self) -> PackageKind {
        self.kind
    }

    /// Returns `true` for a single-unit completion package.
    #[inline]
    pub fn is_completion(&self) -> bool {
        self.kind == PackageKind::Completion
    }

    /// Returns the rune cost of one package.
    #[inline]
    pub fn cost(&self) -> ResourceVector<T> {
        self.cost
    }

    /// Returns the bonus realized per package.
    #[inline]
    pub fn bonus(&self) -> T {
        self.bonus
    }

    /// Returns the number of station units one package adds.
    #[inline]
    pub fn units(&self) -> T {
        match self.kind {
            PackageKind::Completion => T::one(),
            PackageKind::Pair => T::one() + T::one(),
        }
    }

    /// Returns the largest quantity of this package purchasable from
    /// `remaining`: 1 for a completion package, otherwise the
    /// budget-derived component-wise minimum.
    #[inline]
    pub fn max_quantity(&self, remaining: &ResourceVector<T>) -> T {
        match self.kind {
            PackageKind::Completion => {
                if self.cost.fits_within(remaining) {
                    T::one()
                } else {
                    T::zero()
                }
            }
            PackageKind::Pair => self.cost.max_affordable(remaining),
        }
    }
}

impl<T> std::fmt::Display for PackageOption<T>
where
    T: PlannerNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            PackageKind::Completion => "completion",
            PackageKind::Pair => "pair",
        };
        write!(
            f,
            "PackageOption({}, {}, bonus: {}, cost: {})",
            self.station, kind, self.bonus, self.cost
        )
    }
}

/// Derives the package list for one search, in branching order.
///
/// For each station, in catalog order: a completion package when the
/// built count is odd, then always a pair package at twice the unit cost.
pub fn build_packages<T>(model: &Model<T>) -> Vec<PackageOption<T>>
where
    T: PlannerNumeric,
{
    let mut packages = Vec::with_capacity(model.num_stations() * 2);
    build_packages_into(model, &mut packages);
    packages
}

/// Derives the package list into an existing buffer, reusing its capacity
/// across repeated solves. The buffer is cleared first.
pub fn build_packages_into<T>(model: &Model<T>, packages: &mut Vec<PackageOption<T>>)
where
    T: PlannerNumeric,
{
    packages.clear();
    packages.reserve(model.num_stations() * 2);

    for (index, station) in model.stations().iter().enumerate() {
        let station_index = StationIndex::new(index);
        let unit_cost = station.unit_cost();
        debug_assert!(
            !unit_cost.is_zero(),
            "called `build_packages` with an all-zero unit cost for station '{}'",
            station.name()
        );

        if model.built_count(station_index).is_odd() {
            packages.push(PackageOption::new(
                station_index,
                PackageKind::Completion,
                unit_cost,
                station.bonus(),
            ));
        }

        packages.push(PackageOption::new(
            station_index,
            PackageKind::Pair,
            unit_cost.scaled(T::one() + T::one()),
            station.bonus(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeplan_model::{
        model::ModelBuilder,
        rune::{ResourceVector, Rune},
    };

    type I = u64;

    fn si(i: usize) -> StationIndex {
        StationIndex::new(i)
    }

    #[test]
    fn test_even_counts_yield_only_pair_packages() {
        let model = ModelBuilder::<I>::new().build().unwrap();
        let packages = build_packages(&model);

        assert_eq!(packages.len(), model.num_stations());
        assert!(packages.iter().all(|p| p.kind() == PackageKind::Pair));
        for (index, package) in packages.iter().enumerate() {
            assert_eq!(package.station(), si(index));
        }
    }

    #[test]
    fn test_odd_count_inserts_completion_before_pair() {
        let model = ModelBuilder::<I>::new()
            .built("Altar", 3)
            .build()
            .unwrap();
        let packages = build_packages(&model);

        // Seven pair packages plus one completion for the Altar.
        assert_eq!(packages.len(), 8);

        let altar_packages: Vec<_> = packages.iter().filter(|p| p.station() == si(2)).collect();
        assert_eq!(altar_packages.len(), 2);
        assert!(altar_packages[0].is_completion());
        assert_eq!(altar_packages[1].kind(), PackageKind::Pair);
    }

    #[test]
    fn test_pair_package_costs_twice_the_unit_cost() {
        let model = ModelBuilder::<I>::new()
            .built("Grave", 1)
            .build()
            .unwrap();
        let packages = build_packages(&model);

        let completion = &packages[0];
        let pair = &packages[1];
        assert!(completion.is_completion());
        assert_eq!(completion.cost().get(Rune::Mana), 320);
        assert_eq!(completion.bonus(), 5);
        assert_eq!(completion.units(), 1);

        assert_eq!(pair.kind(), PackageKind::Pair);
        assert_eq!(pair.cost().get(Rune::Mana), 640);
        assert_eq!(pair.bonus(), 5);
        assert_eq!(pair.units(), 2);
    }

    #[test]
    fn test_max_quantity_respects_package_kind() {
        let model = ModelBuilder::<I>::new()
            .built("Grave", 1)
            .build()
            .unwrap();
        let packages = build_packages(&model);
        let completion = &packages[0];
        let pair = &packages[1];

        let plenty = ResourceVector::from_amounts(&[(Rune::Mana, 10_000)]);
        assert_eq!(completion.max_quantity(&plenty), 1);
        assert_eq!(pair.max_quantity(&plenty), 15);

        let nothing = ResourceVector::zero();
        assert_eq!(completion.max_quantity(&nothing), 0);
        assert_eq!(pair.max_quantity(&nothing), 0);
    }
}
