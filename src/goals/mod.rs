// ABOUTME: Goal equivalence engine - bound normalization, resolution, and dependency ordering
// ABOUTME: Pure functions over goals, a body profile snapshot, and display units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Goal Equivalence Engine
//!
//! Every entry point is a pure function of its inputs: the engine keeps no
//! state, performs no I/O, and can be called concurrently for different goals.

/// Canonical views over possibly inverted or equal bounds
pub mod bounds;
/// Per-kind conversion of bounds into absolute equivalents
pub mod equivalence;
/// Energy-goal-first resolution of whole goal sets
pub mod orchestrator;

pub use bounds::Bounds;
pub use equivalence::{
    grams_equalling_percent, percent_from_maintenance, resolve_lower, resolve_upper, BoundSide,
    EnergyQuantity, ResolutionContext,
};
pub use orchestrator::{
    resolve_energy_goal, resolve_goal, GoalEquivalents, GoalSet, ResolvedEnergy, ResolvedGoal,
};
