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

//! End-to-end planning scenarios over the full pipeline.

use runeplan_model::model::{Model, ModelBuilder};
use runeplan_model::rune::{ResourceVector, Rune};
use runeplan_model::station::StationDef;
use runeplan_solver::solver::{PlanReport, Planner};

type I = u64;

fn grave_only(budget_mana: I) -> Model<I> {
    let stations = vec![StationDef::<I>::new(
        "Grave",
        "Lich",
        5,
        ResourceVector::from_amounts(&[(Rune::Mana, 320)]),
    )];
    ModelBuilder::with_stations(stations)
        .budget(ResourceVector::from_amounts(&[(Rune::Mana, budget_mana)]))
        .build()
        .unwrap()
}

fn plan(model: &Model<I>) -> PlanReport<I> {
    Planner::new().plan(model)
}

#[test]
fn exact_pair_budget_buys_the_pair_and_unlocks_the_legendary() {
    let report = plan(&grave_only(640));
    let result = report.result();

    assert_eq!(result.bonus(), 5);
    assert_eq!(result.built_now_of("Grave"), Some(2));
    assert_eq!(result.legendary_gain("Lich"), Some(1));
    assert_eq!(result.spent().get(Rune::Mana), 640);
    assert!(result.leftover().is_zero());
}

#[test]
fn leftover_short_of_a_pair_stays_unspent() {
    let report = plan(&grave_only(959));
    let result = report.result();

    // With an even starting count there is no completion package, so the
    // extra 319 mana cannot buy anything.
    assert_eq!(result.bonus(), 5);
    assert_eq!(result.built_now_of("Grave"), Some(2));
    assert_eq!(result.leftover().get(Rune::Mana), 319);

    // The next Grave pair costs 640; 319 of it is covered by leftovers.
    let grave = result
        .suggestions()
        .iter()
        .find(|s| s.name() == "Grave")
        .unwrap();
    assert_eq!(grave.needed_units(), 2);
    assert_eq!(grave.deficits().get(Rune::Mana), 321);
    assert_eq!(grave.missing_total(), 321);
}

#[test]
fn zero_budget_yields_the_empty_plan() {
    let model = ModelBuilder::<I>::new().build().unwrap();
    let report = plan(&model);
    let result = report.result();

    assert_eq!(result.bonus(), 0);
    assert!(result.is_empty());
    assert!(result.new_legendaries().is_empty());
    assert!(result.spent().is_zero());
    assert!(result.leftover().is_zero());
}

#[test]
fn odd_count_completion_is_bought_and_completes_the_pair() {
    let model = ModelBuilder::<I>::new()
        .budget(ResourceVector::from_amounts(&[(Rune::Mana, 320)]))
        .built("Grave", 1)
        .build()
        .unwrap();
    let report = plan(&model);
    let result = report.result();

    // Exactly one unit's cost: the plan contains exactly one additional
    // Grave, and the now-even total unlocks a legendary.
    assert_eq!(result.bonus(), 5);
    assert_eq!(result.built_now_of("Grave"), Some(1));
    assert_eq!(result.legendary_gain("Lich"), Some(1));
    assert!(result.leftover().is_zero());
}

#[test]
fn even_count_gets_no_completion_discount() {
    let model = ModelBuilder::<I>::new()
        .budget(ResourceVector::from_amounts(&[(Rune::Mana, 320)]))
        .built("Grave", 2)
        .build()
        .unwrap();
    let report = plan(&model);
    let result = report.result();

    // A full pair costs 640; half of it buys nothing.
    assert_eq!(result.bonus(), 0);
    assert!(result.is_empty());
    assert_eq!(result.leftover().get(Rune::Mana), 320);
}

#[test]
fn spending_never_exceeds_the_budget() {
    let budget = ResourceVector::new([2_000, 1_500, 900, 700, 500]);
    let model = ModelBuilder::<I>::new()
        .budget(budget)
        .built("Grave", 1)
        .built("Fridge", 3)
        .build()
        .unwrap();
    let report = plan(&model);
    let result = report.result();

    assert!(result.spent().fits_within(&budget));
    assert_eq!(result.spent() + result.leftover(), budget);
}

#[test]
fn single_rune_plans_match_the_closed_form() {
    // One station, one rune: the optimum is floor(budget / pair_cost)
    // pairs. Small enough to check against the closed form directly.
    for budget in (0..=3_200u64).step_by(320) {
        let report = plan(&grave_only(budget));
        let pairs = budget / 640;
        assert_eq!(report.result().bonus(), pairs * 5, "budget {}", budget);
        assert_eq!(
            report.result().built_now_of("Grave"),
            Some(pairs * 2),
            "budget {}",
            budget
        );
    }
}

#[test]
fn suggestions_rank_cheapest_first_with_bonus_breaking_ties() {
    // Zero budget: every deficit is the full pair price. The three
    // 320-per-unit stations tie at 640 and keep catalog order; the
    // higher-bonus stations are more expensive and rank below.
    let model = ModelBuilder::<I>::new().build().unwrap();
    let report = plan(&model);
    let names: Vec<_> = report
        .result()
        .suggestions()
        .iter()
        .map(|s| s.name())
        .collect();

    assert_eq!(names, vec!["Grave", "Supply Cupboard", "Altar"]);
}

#[test]
fn equal_deficits_prefer_the_higher_bonus() {
    let stations = vec![
        StationDef::<I>::new(
            "Grave",
            "Lich",
            5,
            ResourceVector::from_amounts(&[(Rune::Mana, 100)]),
        ),
        StationDef::<I>::new(
            "Portal",
            "Archdemon",
            10,
            ResourceVector::from_amounts(&[(Rune::Dark, 100)]),
        ),
    ];
    let model = ModelBuilder::with_stations(stations).build().unwrap();
    let report = plan(&model);

    let suggestions = report.result().suggestions();
    assert_eq!(suggestions[0].name(), "Portal");
    assert_eq!(suggestions[1].name(), "Grave");
}

#[test]
fn report_renders_all_sections() {
    let report = plan(&grave_only(640));
    let rendered = format!("{}", report);

    assert!(rendered.contains("Optimal plan: +5% restart bonus"));
    assert!(rendered.contains("Grave"));
    assert!(rendered.contains("Lich"));
    assert!(rendered.contains("MANA"));
    assert!(rendered.contains("Best farm targets"));
}
