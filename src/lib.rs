// ABOUTME: Main library entry point for the diet goal equivalence engine
// ABOUTME: Resolves relative energy and nutrient goals into absolute display values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Goal Engine
//!
//! Converts a user's declared nutrition and energy goals, which may be
//! relative ("15% below maintenance", "1.2 g per kg of lean mass", "30% of
//! energy"), into absolute lower and upper values given a body profile and
//! the diet's energy goal.
//!
//! ## Architecture
//!
//! - **`diet-core`**: units, conversion constants, errors, and the goal model
//! - **goals**: bound normalization, the equivalence resolver, and the
//!   dependency orchestrator that resolves the energy goal first
//! - **document**: JSON goal documents and report rendering
//! - **config** / **logging**: environment-driven ambient setup
//!
//! ## Example Usage
//!
//! ```rust
//! use diet_goal_engine::goals::GoalSet;
//! use diet_goal_engine::models::{
//!     BodyProfile, EnergyDelta, EnergyGoalKind, Goal, GoalType, Macro, MacroGoalKind, UserUnits,
//! };
//! use diet_goal_engine::units::EnergyUnit;
//!
//! let energy = Goal::new(GoalType::Energy(EnergyGoalKind::FromMaintenance {
//!     unit: EnergyUnit::Kcal,
//!     delta: EnergyDelta::Deficit,
//! }))
//! .with_lower_bound(500.0);
//! let carbs = Goal::new(GoalType::Macro {
//!     kind: MacroGoalKind::PercentageOfEnergy,
//!     nutrient: Macro::Carb,
//! })
//! .with_lower_bound(50.0);
//!
//! let profile = BodyProfile::new(1700.0, 800.0, EnergyUnit::Kcal);
//! let resolved = GoalSet::new(vec![energy, carbs]).resolve_all(Some(&profile), UserUnits::default());
//!
//! assert_eq!(resolved[0].equivalents.lower, Some(2000.0));
//! assert_eq!(resolved[1].equivalents.lower, Some(250.0));
//! ```

/// Core types re-exported from `diet-core`
pub use diet_core::{constants, errors, models, units};

/// Environment-driven engine configuration
pub mod config;

/// JSON goal documents and report rendering
pub mod document;

/// Goal equivalence engine
pub mod goals;

/// Structured logging setup
pub mod logging;
