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

//! Station definitions and the static standard catalog.
//!
//! The catalog is process-wide immutable constant data: a read-only table
//! of raw `u32` amounts instantiated into `StationDef<T>` values when a
//! model is built. There is no runtime mutation path.

use crate::rune::{ResourceVector, NUM_RUNES};
use runeplan_core::num::PlannerNumeric;

/// The number of stations in the standard catalog.
pub const NUM_STATIONS: usize = 7;

/// A raw catalog entry. Costs are in global rune order.
#[derive(Clone, Copy, Debug)]
pub struct StationSpec {
    pub name: &'static str,
    pub legendary: &'static str,
    pub bonus: u32,
    pub cost: [u32; NUM_RUNES],
}

/// The standard station catalog.
///
/// Cost components are in global rune order: MANA, POISON, BLOOD, MOON,
/// DARK.
pub const STANDARD_CATALOG: [StationSpec; NUM_STATIONS] = [
    StationSpec {
        name: "Grave",
        legendary: "Lich",
        bonus: 5,
        cost: [320, 0, 0, 0, 0],
    },
    StationSpec {
        name: "Supply Cupboard",
        legendary: "Gorgon",
        bonus: 5,
        cost: [0, 320, 0, 0, 0],
    },
    StationSpec {
        name: "Altar",
        legendary: "Harpy",
        bonus: 5,
        cost: [0, 0, 320, 0, 0],
    },
    StationSpec {
        name: "Lectern",
        legendary: "Reaper",
        bonus: 10,
        cost: [800, 0, 0, 320, 0],
    },
    StationSpec {
        name: "Fridge",
        legendary: "Cyclops",
        bonus: 10,
        cost: [0, 800, 0, 320, 0],
    },
    StationSpec {
        name: "Portal",
        legendary: "Archdemon",
        bonus: 10,
        cost: [0, 0, 480, 0, 480],
    },
    StationSpec {
        name: "Chicken",
        legendary: "Robo Chicken",
        bonus: 10,
        cost: [480, 240, 0, 0, 0],
    },
];

/// An upgrade structure with a per-unit rune cost and a bonus percentage.
///
/// The bonus is realized once per pair of units built, with a single-unit
/// completion available while the built count is odd; completing a pair
/// also unlocks one unit of the associated legendary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StationDef<T> {
    name: &'static str,
    legendary: &'static str,
    bonus: T,
    unit_cost: ResourceVector<T>,
}

impl<T> StationDef<T>
where
    T: PlannerNumeric,
{
    /// Constructs a new `StationDef`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `bonus` is zero or `unit_cost` has no
    /// positive component. The catalog never produces such a station.
    pub fn new(
        name: &'static str,
        legendary: &'static str,
        bonus: T,
        unit_cost: ResourceVector<T>,
    ) -> Self {
        debug_assert!(
            bonus > T::zero(),
            "called `StationDef::new` with a zero bonus for station '{}'",
            name
        );
        debug_assert!(
            !unit_cost.is_zero(),
            "called `StationDef::new` with an all-zero unit cost for station '{}'",
            name
        );

        Self {
            name,
            legendary,
            bonus,
            unit_cost,
        }
    }

    /// Instantiates a raw catalog entry at the planner's numeric type.
    pub fn from_spec(spec: &StationSpec) -> Self {
        let mut components = [T::zero(); NUM_RUNES];
        for (component, raw) in components.iter_mut().zip(spec.cost.iter()) {
            *component = T::from_catalog(*raw);
        }
        Self::new(
            spec.name,
            spec.legendary,
            T::from_catalog(spec.bonus),
            ResourceVector::new(components),
        )
    }

    /// Returns the station name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the name of the legendary unlocked per completed pair.
    #[inline]
    pub fn legendary(&self) -> &'static str {
        self.legendary
    }

    /// Returns the bonus percentage granted per realized unit.
    #[inline]
    pub fn bonus(&self) -> T {
        self.bonus
    }

    /// Returns the rune cost of a single unit.
    #[inline]
    pub fn unit_cost(&self) -> ResourceVector<T> {
        self.unit_cost
    }
}

impl<T> std::fmt::Display for StationDef<T>
where
    T: PlannerNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (+{}%, unlocks {}, cost {})",
            self.name, self.bonus, self.legendary, self.unit_cost
        )
    }
}

/// Instantiates the standard catalog at the planner's numeric type.
pub fn standard_catalog<T>() -> Vec<StationDef<T>>
where
    T: PlannerNumeric,
{
    STANDARD_CATALOG.iter().map(StationDef::from_spec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rune::Rune;

    type I = u64;

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = standard_catalog::<I>();
        assert_eq!(catalog.len(), NUM_STATIONS);

        let names: Vec<_> = catalog.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "Grave",
                "Supply Cupboard",
                "Altar",
                "Lectern",
                "Fridge",
                "Portal",
                "Chicken"
            ]
        );
    }

    #[test]
    fn test_catalog_costs_land_on_the_right_runes() {
        let catalog = standard_catalog::<I>();

        let grave = &catalog[0];
        assert_eq!(grave.bonus(), 5);
        assert_eq!(grave.unit_cost().get(Rune::Mana), 320);
        assert!(grave.unit_cost().get(Rune::Poison) == 0);

        let lectern = &catalog[3];
        assert_eq!(lectern.legendary(), "Reaper");
        assert_eq!(lectern.unit_cost().get(Rune::Mana), 800);
        assert_eq!(lectern.unit_cost().get(Rune::Moon), 320);

        let portal = &catalog[5];
        assert_eq!(portal.unit_cost().get(Rune::Blood), 480);
        assert_eq!(portal.unit_cost().get(Rune::Dark), 480);

        let chicken = &catalog[6];
        assert_eq!(chicken.unit_cost().get(Rune::Mana), 480);
        assert_eq!(chicken.unit_cost().get(Rune::Poison), 240);
    }

    #[test]
    fn test_every_station_has_a_positive_cost_component() {
        for station in standard_catalog::<I>() {
            assert!(!station.unit_cost().is_zero(), "{}", station.name());
            assert!(station.bonus() > 0);
        }
    }

    #[test]
    fn test_display_formatting() {
        let catalog = standard_catalog::<I>();
        let shown = format!("{}", catalog[0]);
        assert!(shown.contains("Grave"));
        assert!(shown.contains("+5%"));
        assert!(shown.contains("Lich"));
    }
}
