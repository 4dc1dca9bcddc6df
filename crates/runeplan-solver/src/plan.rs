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

//! Plan reconstruction.
//!
//! The searcher reports quantities per *package*; callers think in
//! stations, legendaries, and runes. Reconstruction folds the winning
//! assignment back onto the catalog: per-station build counts, the spend
//! and leftover vectors, the legendaries newly unlocked by completed
//! pairs, and the ranked farm targets for whatever the leftovers cannot
//! cover.

use crate::suggest::{rank_suggestions, Suggestion};
use runeplan_bnb::package::PackageOption;
use runeplan_core::num::PlannerNumeric;
use runeplan_model::{
    index::StationIndex, model::Model, rune::ResourceVector, rune::Rune, solution::Solution,
};

/// The final report of one planning call.
///
/// Derived deterministically from a `Solution` and the `Model` it was
/// computed for; it has no lifecycle beyond the single report it
/// represents. Station entries are in catalog order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanResult<T> {
    bonus: T,
    spent: ResourceVector<T>,
    leftover: ResourceVector<T>,
    built_now: Vec<(&'static str, T)>,
    new_legendaries: Vec<(&'static str, T)>,
    suggestions: Vec<Suggestion<T>>,
}

impl<T> PlanResult<T>
where
    T: PlannerNumeric,
{
    /// Returns the total bonus gained by the plan.
    #[inline]
    pub fn bonus(&self) -> T {
        self.bonus
    }

    /// Returns the runes spent by the plan.
    #[inline]
    pub fn spent(&self) -> ResourceVector<T> {
        self.spent
    }

    /// Returns the runes left over after the plan.
    #[inline]
    pub fn leftover(&self) -> ResourceVector<T> {
        self.leftover
    }

    /// Returns the additional units to build per station, in catalog
    /// order. Stations with nothing to build carry a zero count.
    #[inline]
    pub fn built_now(&self) -> &[(&'static str, T)] {
        &self.built_now
    }

    /// Returns the additional units for a station by name, or `None` if
    /// the name is not in the catalog.
    pub fn built_now_of(&self, name: &str) -> Option<T> {
        self.built_now
            .iter()
            .find(|(station, _)| *station == name)
            .map(|(_, count)| *count)
    }

    /// Returns the legendaries newly unlocked by the plan, in catalog
    /// order. Only legendaries with a positive gain appear.
    #[inline]
    pub fn new_legendaries(&self) -> &[(&'static str, T)] {
        &self.new_legendaries
    }

    /// Returns the gain for a legendary by name, or `None` if the plan
    /// unlocks none of it.
    pub fn legendary_gain(&self, name: &str) -> Option<T> {
        self.new_legendaries
            .iter()
            .find(|(legendary, _)| *legendary == name)
            .map(|(_, gain)| *gain)
    }

    /// Returns the ranked farm targets for the next legendary.
    #[inline]
    pub fn suggestions(&self) -> &[Suggestion<T>] {
        &self.suggestions
    }

    /// Returns `true` if the plan builds nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.built_now.iter().all(|(_, count)| count.is_zero())
    }
}

/// Folds the winning assignment back onto the catalog.
///
/// For each package with a positive quantity, a completion adds one unit
/// and a pair with quantity `q` adds `2q` to its station. The legendary
/// gain per station is `floor(total / 2) - floor(built / 2)`.
///
/// # Panics
///
/// In debug builds, panics if `packages` and `solution` disagree on the
/// number of package options.
pub fn reconstruct<T>(
    model: &Model<T>,
    packages: &[PackageOption<T>],
    solution: &Solution<T>,
) -> PlanResult<T>
where
    T: PlannerNumeric,
{
    debug_assert_eq!(
        packages.len(),
        solution.num_packages(),
        "called `reconstruct` with a solution for a different package list"
    );

    let mut built_now = vec![T::zero(); model.num_stations()];
    let mut spent = ResourceVector::zero();

    for (package, quantity) in packages.iter().zip(solution.quantities()) {
        if quantity.is_zero() {
            continue;
        }
        let station = package.station().get();
        built_now[station] = built_now[station] + package.units() * *quantity;
        spent = spent + package.cost().scaled(*quantity);
    }

    let leftover = model.budget() - spent;

    let mut totals = vec![T::zero(); model.num_stations()];
    let mut new_legendaries = Vec::new();
    for (index, station) in model.stations().iter().enumerate() {
        let before = model.built_count(StationIndex::new(index));
        let total = before + built_now[index];
        totals[index] = total;

        let gained = total.halved() - before.halved();
        if gained > T::zero() {
            new_legendaries.push((station.legendary(), gained));
        }
    }

    let suggestions = rank_suggestions(model, &totals, &leftover);

    PlanResult {
        bonus: solution.best_bonus(),
        spent,
        leftover,
        built_now: model
            .stations()
            .iter()
            .zip(built_now)
            .map(|(station, count)| (station.name(), count))
            .collect(),
        new_legendaries,
        suggestions,
    }
}

impl<T> std::fmt::Display for PlanResult<T>
where
    T: PlannerNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Optimal plan: +{}% restart bonus", self.bonus)?;
        writeln!(f)?;

        writeln!(f, "Build these additional stations:")?;
        if self.is_empty() {
            writeln!(f, "   (no bonus-completing build is affordable right now)")?;
        } else {
            for (name, count) in self.built_now.iter().filter(|(_, c)| !c.is_zero()) {
                writeln!(f, "   {:<16} x{}", name, count)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "New legendaries:")?;
        if self.new_legendaries.is_empty() {
            writeln!(f, "   (none with the current runes)")?;
        } else {
            for (legendary, gain) in self.new_legendaries.iter() {
                writeln!(f, "   {:<16} x{}", legendary, gain)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Rune spending:")?;
        for rune in Rune::ALL {
            writeln!(
                f,
                "   {:<8} spent {:<8} left {}",
                rune,
                self.spent.get(rune),
                self.leftover.get(rune)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Best farm targets for the next legendary:")?;
        for suggestion in self.suggestions.iter() {
            writeln!(
                f,
                "   {} ({}): need {} more unit(s)",
                suggestion.legendary(),
                suggestion.name(),
                suggestion.needed_units()
            )?;
            if suggestion.is_affordable() {
                writeln!(f, "      affordable from the current leftovers")?;
            } else {
                let mut first = true;
                write!(f, "      ")?;
                for rune in Rune::ALL {
                    let deficit = suggestion.deficits().get(rune);
                    if deficit.is_zero() {
                        continue;
                    }
                    if !first {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} +{}", rune, deficit)?;
                    first = false;
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeplan_bnb::package::build_packages;
    use runeplan_model::{
        model::ModelBuilder,
        rune::{ResourceVector, Rune},
        station::StationDef,
    };

    type I = u64;

    fn grave_catalog() -> Vec<StationDef<I>> {
        vec![StationDef::<I>::new(
            "Grave",
            "Lich",
            5,
            ResourceVector::from_amounts(&[(Rune::Mana, 320)]),
        )]
    }

    #[test]
    fn test_reconstruct_one_pair() {
        let model = ModelBuilder::with_stations(grave_catalog())
            .budget(ResourceVector::from_amounts(&[(Rune::Mana, 640)]))
            .build()
            .unwrap();
        let packages = build_packages(&model);
        let solution = Solution::new(5, vec![1]);

        let result = reconstruct(&model, &packages, &solution);
        assert_eq!(result.bonus(), 5);
        assert_eq!(result.built_now_of("Grave"), Some(2));
        assert_eq!(result.legendary_gain("Lich"), Some(1));
        assert_eq!(result.spent().get(Rune::Mana), 640);
        assert!(result.leftover().is_zero());
    }

    #[test]
    fn test_reconstruct_completion_counts_one_unit() {
        let model = ModelBuilder::with_stations(grave_catalog())
            .budget(ResourceVector::from_amounts(&[(Rune::Mana, 320)]))
            .built("Grave", 1)
            .build()
            .unwrap();
        let packages = build_packages(&model);
        // Completion package first, pair package second.
        let solution = Solution::new(5, vec![1, 0]);

        let result = reconstruct(&model, &packages, &solution);
        assert_eq!(result.built_now_of("Grave"), Some(1));
        // Total 2: the completed pair unlocks one Lich.
        assert_eq!(result.legendary_gain("Lich"), Some(1));
        assert!(result.leftover().is_zero());
    }

    #[test]
    fn test_no_legendary_without_new_pairs() {
        let model = ModelBuilder::with_stations(grave_catalog())
            .budget(ResourceVector::from_amounts(&[(Rune::Mana, 1_000)]))
            .built("Grave", 2)
            .build()
            .unwrap();
        let packages = build_packages(&model);
        // Nothing purchased: no new legendaries, leftovers untouched.
        let solution = Solution::new(0, vec![0]);

        let result = reconstruct(&model, &packages, &solution);
        assert!(result.is_empty());
        assert!(result.new_legendaries().is_empty());
        assert_eq!(result.leftover().get(Rune::Mana), 1_000);
        assert_eq!(result.legendary_gain("Lich"), None);
    }

    #[test]
    fn test_spent_plus_leftover_is_the_budget() {
        let model = ModelBuilder::<I>::new()
            .budget(ResourceVector::new([2_000, 1_000, 500, 400, 300]))
            .build()
            .unwrap();
        let packages = build_packages(&model);
        // Two Grave pairs and one Supply Cupboard pair.
        let mut quantities = vec![0; packages.len()];
        quantities[0] = 2;
        quantities[1] = 1;
        let solution = Solution::new(15, quantities);

        let result = reconstruct(&model, &packages, &solution);
        assert_eq!(result.spent() + result.leftover(), model.budget());
        assert_eq!(result.built_now_of("Grave"), Some(4));
        assert_eq!(result.built_now_of("Supply Cupboard"), Some(2));
        assert_eq!(result.legendary_gain("Lich"), Some(2));
        assert_eq!(result.legendary_gain("Gorgon"), Some(1));
    }

    #[test]
    fn test_display_sections_are_present() {
        let model = ModelBuilder::with_stations(grave_catalog())
            .budget(ResourceVector::from_amounts(&[(Rune::Mana, 640)]))
            .build()
            .unwrap();
        let packages = build_packages(&model);
        let result = reconstruct(&model, &packages, &Solution::new(5, vec![1]));

        let rendered = format!("{}", result);
        assert!(rendered.contains("Optimal plan: +5% restart bonus"));
        assert!(rendered.contains("Build these additional stations:"));
        assert!(rendered.contains("Grave"));
        assert!(rendered.contains("New legendaries:"));
        assert!(rendered.contains("Lich"));
        assert!(rendered.contains("Rune spending:"));
        assert!(rendered.contains("Best farm targets for the next legendary:"));
    }

    #[test]
    fn test_display_empty_plan_placeholders() {
        let model = ModelBuilder::with_stations(grave_catalog())
            .build()
            .unwrap();
        let packages = build_packages(&model);
        let result = reconstruct(&model, &packages, &Solution::new(0, vec![0]));

        let rendered = format!("{}", result);
        assert!(rendered.contains("(no bonus-completing build is affordable right now)"));
        assert!(rendered.contains("(none with the current runes)"));
    }
}
