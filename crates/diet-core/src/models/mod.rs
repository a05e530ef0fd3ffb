// ABOUTME: Data model for goals, nutrients, and the body profile inputs
// ABOUTME: Re-exports all model types for convenient access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal model types.

/// Body profile snapshot and display units
pub mod body_profile;
/// Goal types and goals
pub mod goal;
/// Macro and micronutrient identifiers
pub mod nutrient;

pub use body_profile::{BodyMassType, BodyProfile, UserUnits};
pub use goal::{
    EnergyDelta, EnergyGoalKind, Goal, GoalType, MacroGoalKind, MicroGoalKind,
    WorkoutDurationUnit,
};
pub use nutrient::{Macro, NutrientType};
