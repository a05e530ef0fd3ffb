// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, body profiles, and goal builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::float_cmp
)]
//! Shared test utilities for `diet_goal_engine`

use std::env;
use std::sync::Once;

use diet_goal_engine::models::{
    BodyMassType, BodyProfile, EnergyDelta, EnergyGoalKind, Goal, GoalType, Macro,
    MacroGoalKind, MicroGoalKind, NutrientType,
};
use diet_goal_engine::units::{EnergyUnit, NutrientUnit, WeightUnit};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Tolerance used when comparing resolved amounts
pub const EPSILON: f64 = 1e-6;

/// Assert that an optional amount is present and close to `expected`
pub fn assert_close(actual: Option<f64>, expected: f64) {
    let value = actual.unwrap_or_else(|| panic!("expected {expected}, got None"));
    assert!(
        (value - expected).abs() < EPSILON,
        "expected {expected}, got {value}"
    );
}

/// Profile with 1700 kcal resting + 800 kcal active, 80 kg weight, 64 kg lean mass
pub fn standard_profile() -> BodyProfile {
    BodyProfile::new(1700.0, 800.0, EnergyUnit::Kcal)
        .with_weight(80.0, WeightUnit::Kg)
        .with_lean_mass(64.0)
}

/// Energy goal relative to maintenance, in kcal
pub fn maintenance_goal(delta: EnergyDelta, lower: Option<f64>, upper: Option<f64>) -> Goal {
    with_bounds(
        Goal::new(GoalType::Energy(EnergyGoalKind::FromMaintenance {
            unit: EnergyUnit::Kcal,
            delta,
        })),
        lower,
        upper,
    )
}

/// Fixed energy goal in `unit`
pub fn fixed_energy_goal(unit: EnergyUnit, lower: Option<f64>, upper: Option<f64>) -> Goal {
    with_bounds(
        Goal::new(GoalType::Energy(EnergyGoalKind::Fixed { unit })),
        lower,
        upper,
    )
}

/// Macro goal expressed as a percentage of the energy goal
pub fn percent_macro_goal(nutrient: Macro, lower: Option<f64>, upper: Option<f64>) -> Goal {
    with_bounds(
        Goal::new(GoalType::Macro {
            kind: MacroGoalKind::PercentageOfEnergy,
            nutrient,
        }),
        lower,
        upper,
    )
}

/// Macro goal expressed per kilogram of a body measurement
pub fn per_body_mass_goal(
    nutrient: Macro,
    body_mass: BodyMassType,
    lower: Option<f64>,
    upper: Option<f64>,
) -> Goal {
    with_bounds(
        Goal::new(GoalType::Macro {
            kind: MacroGoalKind::QuantityPerBodyMass {
                body_mass,
                unit: WeightUnit::Kg,
            },
            nutrient,
        }),
        lower,
        upper,
    )
}

/// Micro goal of the given kind
pub fn micro_goal(
    kind: MicroGoalKind,
    nutrient: NutrientType,
    unit: NutrientUnit,
    lower: Option<f64>,
    upper: Option<f64>,
) -> Goal {
    with_bounds(
        Goal::new(GoalType::Micro {
            kind,
            nutrient,
            unit,
        }),
        lower,
        upper,
    )
}

fn with_bounds(mut goal: Goal, lower: Option<f64>, upper: Option<f64>) -> Goal {
    goal.lower_bound = lower;
    goal.upper_bound = upper;
    goal
}
