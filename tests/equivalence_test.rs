// ABOUTME: Unit tests for the equivalence resolver
// ABOUTME: Validates energy, body-mass, percent-of-energy, and per-energy goal equivalents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{
    assert_close, fixed_energy_goal, init_test_logging, maintenance_goal, micro_goal,
    per_body_mass_goal, percent_macro_goal, standard_profile,
};
use diet_goal_engine::goals::equivalence::unit_label;
use diet_goal_engine::goals::{
    grams_equalling_percent, percent_from_maintenance, resolve_lower, resolve_upper,
    EnergyQuantity, ResolutionContext,
};
use diet_goal_engine::models::{
    BodyMassType, BodyProfile, EnergyDelta, EnergyGoalKind, Goal, GoalType, Macro,
    MacroGoalKind, MicroGoalKind, NutrientType, UserUnits, WorkoutDurationUnit,
};
use diet_goal_engine::units::{to_kcal, EnergyUnit, NutrientUnit, WeightUnit};

fn with_energy(kcal: f64) -> ResolutionContext<'static> {
    ResolutionContext::new(None, UserUnits::default())
        .with_energy(Some(EnergyQuantity::new(kcal, EnergyUnit::Kcal)))
}

// Energy goals

#[test]
fn test_deficit_lower_bound_subtracts_from_maintenance() {
    init_test_logging();
    let profile = standard_profile();
    let context = ResolutionContext::new(Some(&profile), UserUnits::default());
    let goal = maintenance_goal(EnergyDelta::Deficit, Some(500.0), None);

    assert_close(resolve_lower(&goal, &context), 2000.0);
    assert_eq!(resolve_upper(&goal, &context), None);
}

#[test]
fn test_surplus_lower_bound_adds_to_maintenance() {
    let profile = standard_profile();
    let context = ResolutionContext::new(Some(&profile), UserUnits::default());
    let goal = maintenance_goal(EnergyDelta::Surplus, Some(500.0), None);

    assert_close(resolve_lower(&goal, &context), 3000.0);
}

#[test]
fn test_deficit_range_reads_bounds_crosswise() {
    let profile = standard_profile();
    let context = ResolutionContext::new(Some(&profile), UserUnits::default());

    let ordered = maintenance_goal(EnergyDelta::Deficit, Some(300.0), Some(500.0));
    assert_close(resolve_lower(&ordered, &context), 2000.0);
    assert_close(resolve_upper(&ordered, &context), 2200.0);

    let inverted = maintenance_goal(EnergyDelta::Deficit, Some(500.0), Some(300.0));
    assert_close(resolve_lower(&inverted, &context), 2000.0);
    assert_close(resolve_upper(&inverted, &context), 2200.0);
}

#[test]
fn test_deficit_upper_only_has_no_lower_equivalent() {
    let profile = standard_profile();
    let context = ResolutionContext::new(Some(&profile), UserUnits::default());
    let goal = maintenance_goal(EnergyDelta::Deficit, None, Some(400.0));

    assert_eq!(resolve_lower(&goal, &context), None);
    assert_close(resolve_upper(&goal, &context), 2100.0);
}

#[test]
fn test_surplus_range() {
    let profile = standard_profile();
    let context = ResolutionContext::new(Some(&profile), UserUnits::default());
    let goal = maintenance_goal(EnergyDelta::Surplus, Some(200.0), Some(400.0));

    assert_close(resolve_lower(&goal, &context), 2700.0);
    assert_close(resolve_upper(&goal, &context), 2900.0);
}

#[test]
fn test_percent_from_maintenance_goal() {
    let profile = standard_profile();
    let context = ResolutionContext::new(Some(&profile), UserUnits::default());
    let deficit = Goal::new(GoalType::Energy(EnergyGoalKind::PercentFromMaintenance {
        delta: EnergyDelta::Deficit,
    }))
    .with_lower_bound(20.0);

    assert_close(resolve_lower(&deficit, &context), 2000.0);
}

#[test]
fn test_percent_from_maintenance_uses_profile_energy_unit() {
    let profile = BodyProfile::new(7000.0, 3000.0, EnergyUnit::Kj);
    let context = ResolutionContext::new(Some(&profile), UserUnits::default());
    let surplus = Goal::new(GoalType::Energy(EnergyGoalKind::PercentFromMaintenance {
        delta: EnergyDelta::Surplus,
    }))
    .with_lower_bound(10.0);

    assert_close(resolve_lower(&surplus, &context), 11_000.0);
    assert_eq!(unit_label(&surplus, &context), Some("kJ"));
}

#[test]
fn test_maintenance_goal_without_profile_has_no_equivalent() {
    let context = ResolutionContext::new(None, UserUnits::default());
    let goal = maintenance_goal(EnergyDelta::Deficit, Some(500.0), Some(700.0));

    assert_eq!(resolve_lower(&goal, &context), None);
    assert_eq!(resolve_upper(&goal, &context), None);
}

#[test]
fn test_fixed_energy_goal_uses_normalized_bounds() {
    let context = ResolutionContext::new(None, UserUnits::default());

    let range = fixed_energy_goal(EnergyUnit::Kcal, Some(2200.0), Some(1800.0));
    assert_close(resolve_lower(&range, &context), 1800.0);
    assert_close(resolve_upper(&range, &context), 2200.0);

    let exact = fixed_energy_goal(EnergyUnit::Kcal, Some(2000.0), Some(2000.0));
    assert_eq!(resolve_lower(&exact, &context), None);
    assert_close(resolve_upper(&exact, &context), 2000.0);
}

// Nutrient goals

#[test]
fn test_percentage_of_energy_macro() {
    let context = with_energy(2000.0);

    let carbs = percent_macro_goal(Macro::Carb, Some(50.0), None);
    assert_close(resolve_lower(&carbs, &context), 250.0);

    let fat = percent_macro_goal(Macro::Fat, None, Some(30.0));
    assert_close(resolve_upper(&fat, &context), 600.0 / 9.0);
}

#[test]
fn test_percentage_of_energy_converts_kilojoules() {
    let context = ResolutionContext::new(None, UserUnits::default())
        .with_energy(Some(EnergyQuantity::new(8368.0, EnergyUnit::Kj)));
    let protein = percent_macro_goal(Macro::Protein, Some(25.0), None);

    let expected = to_kcal(8368.0, EnergyUnit::Kj) * 0.25 / 4.0;
    assert_close(resolve_lower(&protein, &context), expected);
}

#[test]
fn test_percentage_of_energy_without_energy_has_no_equivalent() {
    let context = ResolutionContext::new(None, UserUnits::default());
    let carbs = percent_macro_goal(Macro::Carb, Some(40.0), Some(50.0));

    assert_eq!(resolve_lower(&carbs, &context), None);
    assert_eq!(resolve_upper(&carbs, &context), None);
}

#[test]
fn test_per_body_mass_goal() {
    let profile = standard_profile();
    let context = ResolutionContext::new(Some(&profile), UserUnits::default());

    let by_weight = per_body_mass_goal(Macro::Protein, BodyMassType::Weight, Some(1.2), None);
    assert_close(resolve_lower(&by_weight, &context), 96.0);

    let by_lean_mass =
        per_body_mass_goal(Macro::Protein, BodyMassType::LeanMass, None, Some(2.0));
    assert_close(resolve_upper(&by_lean_mass, &context), 128.0);
}

#[test]
fn test_per_body_mass_goal_in_pounds() {
    let profile = standard_profile();
    let context = ResolutionContext::new(Some(&profile), UserUnits::default());
    let goal = Goal::new(GoalType::Macro {
        kind: MacroGoalKind::QuantityPerBodyMass {
            body_mass: BodyMassType::Weight,
            unit: WeightUnit::Lb,
        },
        nutrient: Macro::Protein,
    })
    .with_lower_bound(0.5);

    assert_close(resolve_lower(&goal, &context), 0.5 * 80_000.0 / 453.592);
}

#[test]
fn test_per_body_mass_goal_without_measurement() {
    let profile = BodyProfile::new(1700.0, 800.0, EnergyUnit::Kcal);
    let context = ResolutionContext::new(Some(&profile), UserUnits::default());
    let goal = per_body_mass_goal(Macro::Protein, BodyMassType::LeanMass, Some(1.6), None);

    assert_eq!(resolve_lower(&goal, &context), None);
    assert_eq!(
        resolve_lower(&goal, &ResolutionContext::new(None, UserUnits::default())),
        None
    );
}

#[test]
fn test_fixed_and_workout_goals_have_no_equivalent() {
    let profile = standard_profile();
    let context = ResolutionContext::new(Some(&profile), UserUnits::default())
        .with_energy(Some(EnergyQuantity::new(2000.0, EnergyUnit::Kcal)));

    let fixed = Goal::new(GoalType::Macro {
        kind: MacroGoalKind::Fixed,
        nutrient: Macro::Carb,
    })
    .with_lower_bound(150.0)
    .with_upper_bound(200.0);
    assert_eq!(resolve_lower(&fixed, &context), None);
    assert_eq!(resolve_upper(&fixed, &context), None);
    assert_eq!(unit_label(&fixed, &context), None);

    let workout = micro_goal(
        MicroGoalKind::QuantityPerWorkoutDuration {
            unit: WorkoutDurationUnit::Hour,
        },
        NutrientType::Sodium,
        NutrientUnit::Mg,
        Some(300.0),
        Some(600.0),
    );
    assert_eq!(resolve_lower(&workout, &context), None);
    assert_eq!(resolve_upper(&workout, &context), None);
}

#[test]
fn test_micro_percentage_of_energy_in_nutrient_unit() {
    let context = with_energy(2000.0);

    let grams = micro_goal(
        MicroGoalKind::PercentageOfEnergy,
        NutrientType::SaturatedFat,
        NutrientUnit::G,
        None,
        Some(10.0),
    );
    assert_close(resolve_upper(&grams, &context), 200.0 / 9.0);

    let milligrams = grams.with_goal_type(GoalType::Micro {
        kind: MicroGoalKind::PercentageOfEnergy,
        nutrient: NutrientType::SaturatedFat,
        unit: NutrientUnit::Mg,
    });
    assert_close(resolve_upper(&milligrams, &context), 200_000.0 / 9.0);
}

#[test]
fn test_micro_percentage_of_energy_without_energy_density() {
    let context = with_energy(2000.0);
    let sodium = micro_goal(
        MicroGoalKind::PercentageOfEnergy,
        NutrientType::Sodium,
        NutrientUnit::Mg,
        Some(1.0),
        None,
    );

    assert_eq!(resolve_lower(&sodium, &context), None);
}

#[test]
fn test_micro_per_energy_goal() {
    let context = with_energy(2000.0);
    let fiber = micro_goal(
        MicroGoalKind::QuantityPerEnergy {
            per_energy: 1000.0,
            unit: EnergyUnit::Kcal,
        },
        NutrientType::DietaryFiber,
        NutrientUnit::G,
        Some(14.0),
        None,
    );
    assert_close(resolve_lower(&fiber, &context), 28.0);

    let degenerate = fiber.with_goal_type(GoalType::Micro {
        kind: MicroGoalKind::QuantityPerEnergy {
            per_energy: 0.0,
            unit: EnergyUnit::Kcal,
        },
        nutrient: NutrientType::DietaryFiber,
        unit: NutrientUnit::G,
    });
    assert_eq!(resolve_lower(&degenerate, &context), None);
}

#[test]
fn test_micro_per_energy_goal_with_kilojoule_denominator() {
    let context = with_energy(2000.0);
    let fiber = micro_goal(
        MicroGoalKind::QuantityPerEnergy {
            per_energy: 4184.0,
            unit: EnergyUnit::Kj,
        },
        NutrientType::DietaryFiber,
        NutrientUnit::G,
        Some(14.0),
        None,
    );

    let expected = 14.0 * 2000.0 / to_kcal(4184.0, EnergyUnit::Kj);
    assert_close(resolve_lower(&fiber, &context), expected);
    let lower = resolve_lower(&fiber, &context).unwrap();
    assert!((lower - 28.0).abs() < 1e-3, "got {lower}");
}

#[test]
fn test_percentage_of_energy_degenerate_inputs_resolve_to_zero() {
    let carbs = percent_macro_goal(Macro::Carb, Some(40.0), Some(50.0));
    let negative_energy = with_energy(-500.0);
    assert_eq!(resolve_lower(&carbs, &negative_energy), Some(0.0));
    assert_eq!(resolve_upper(&carbs, &negative_energy), Some(0.0));

    let over_hundred = percent_macro_goal(Macro::Fat, None, Some(120.0));
    assert_eq!(resolve_upper(&over_hundred, &with_energy(2000.0)), Some(0.0));
}

// Free functions

#[test]
fn test_grams_equalling_percent() {
    assert_eq!(grams_equalling_percent(50.0, 2000.0, 4.0), 250.0);
    assert_eq!(grams_equalling_percent(0.0, 2000.0, 4.0), 0.0);
    assert_eq!(grams_equalling_percent(100.0, 1800.0, 9.0), 200.0);
}

#[test]
fn test_grams_equalling_percent_rejects_out_of_range_input() {
    assert_eq!(grams_equalling_percent(150.0, 2000.0, 4.0), 0.0);
    assert_eq!(grams_equalling_percent(-5.0, 2000.0, 4.0), 0.0);
    assert_eq!(grams_equalling_percent(50.0, 0.0, 4.0), 0.0);
    assert_eq!(grams_equalling_percent(50.0, -100.0, 4.0), 0.0);
}

#[test]
fn test_percent_from_maintenance_amount() {
    assert_close(Some(percent_from_maintenance(15.0, 2000.0)), 300.0);
    assert_eq!(percent_from_maintenance(0.0, 2000.0), 0.0);
}

#[test]
fn test_unit_label_absent_for_unresolvable_percent_goals() {
    let context = with_energy(2000.0);

    let saturated_fat_iu = micro_goal(
        MicroGoalKind::PercentageOfEnergy,
        NutrientType::SaturatedFat,
        NutrientUnit::Iu,
        Some(5.0),
        None,
    );
    assert_eq!(resolve_lower(&saturated_fat_iu, &context), None);
    assert_eq!(unit_label(&saturated_fat_iu, &context), None);

    let sodium = micro_goal(
        MicroGoalKind::PercentageOfEnergy,
        NutrientType::Sodium,
        NutrientUnit::Mg,
        Some(1.0),
        None,
    );
    assert_eq!(unit_label(&sodium, &context), None);

    let per_energy_iu = micro_goal(
        MicroGoalKind::QuantityPerEnergy {
            per_energy: 1000.0,
            unit: EnergyUnit::Kcal,
        },
        NutrientType::VitaminA,
        NutrientUnit::Iu,
        Some(1500.0),
        None,
    );
    assert_close(resolve_lower(&per_energy_iu, &context), 3000.0);
    assert_eq!(unit_label(&per_energy_iu, &context), Some("IU"));
}

#[test]
fn test_unit_labels_follow_goal_kind() {
    let profile = standard_profile();
    let units = UserUnits::default();
    let context = ResolutionContext::new(Some(&profile), units);

    let energy = fixed_energy_goal(EnergyUnit::Kj, Some(8000.0), None);
    assert_eq!(unit_label(&energy, &context), Some("kJ"));

    let carbs = percent_macro_goal(Macro::Carb, Some(40.0), None);
    assert_eq!(unit_label(&carbs, &context), Some("g"));

    let vitamin_d = micro_goal(
        MicroGoalKind::Fixed,
        NutrientType::VitaminD,
        NutrientUnit::Iu,
        Some(600.0),
        None,
    );
    assert_eq!(unit_label(&vitamin_d, &context), None);

    let sodium = micro_goal(
        MicroGoalKind::QuantityPerEnergy {
            per_energy: 1000.0,
            unit: EnergyUnit::Kcal,
        },
        NutrientType::Sodium,
        NutrientUnit::Mg,
        None,
        Some(1000.0),
    );
    assert_eq!(unit_label(&sodium, &context), Some("mg"));
}

#[test]
fn test_resolution_is_idempotent() {
    let profile = standard_profile();
    let context = ResolutionContext::new(Some(&profile), UserUnits::default())
        .with_energy(Some(EnergyQuantity::new(2100.0, EnergyUnit::Kcal)));
    let goals = [
        maintenance_goal(EnergyDelta::Deficit, Some(300.0), Some(500.0)),
        percent_macro_goal(Macro::Fat, Some(20.0), Some(35.0)),
        per_body_mass_goal(Macro::Protein, BodyMassType::Weight, Some(1.6), Some(2.2)),
    ];

    for goal in &goals {
        let first = (resolve_lower(goal, &context), resolve_upper(goal, &context));
        let second = (resolve_lower(goal, &context), resolve_upper(goal, &context));
        assert_eq!(first, second);
    }
    assert_eq!(goals[0].lower_bound, Some(300.0));
    assert_eq!(goals[0].upper_bound, Some(500.0));
}
