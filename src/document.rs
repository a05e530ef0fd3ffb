// ABOUTME: JSON goal documents bundling a goal set, body profile, and display units
// ABOUTME: Parsing, resolution into a report, and plain-text table rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal documents.
//!
//! A document is what the surrounding app hands the engine for one diet:
//!
//! ```json
//! {
//!   "goals": [
//!     { "type": { "energy": { "from_maintenance": { "unit": "kcal", "delta": "deficit" } } },
//!       "lower_bound": 500 },
//!     { "type": { "macro": { "kind": "percentage_of_energy", "nutrient": "carb" } },
//!       "lower_bound": 40, "upper_bound": 50 }
//!   ],
//!   "body_profile": { "resting_energy": 1700, "active_energy": 800, "energy_unit": "kcal" },
//!   "user_units": { "energy": "kcal", "weight": "kg", "height": "cm" }
//! }
//! ```

use std::fmt::Write as _;
use std::io::Read;

use diet_core::errors::{AppError, AppResult};
use diet_core::models::{BodyProfile, Goal, GoalType, UserUnits};
use serde::{Deserialize, Serialize};

use crate::goals::{resolve_energy_goal, GoalSet, ResolvedEnergy, ResolvedGoal};

/// Input document: goals plus the inputs they resolve against
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GoalDocument {
    /// Goals of the diet
    #[serde(default)]
    pub goals: Vec<Goal>,
    /// Body measurements, if set up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_profile: Option<BodyProfile>,
    /// Display units; configured defaults apply when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_units: Option<UserUnits>,
}

/// Resolution output for a whole document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquivalenceReport {
    /// Units used for resolution
    pub user_units: UserUnits,
    /// Resolved equivalents of the energy goal
    pub energy: ResolvedEnergy,
    /// Per-goal equivalents in document order
    pub goals: Vec<ResolvedGoal>,
}

impl GoalDocument {
    /// Parse a document from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid goal document
    pub fn from_json(text: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a document from a reader
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content is not a valid goal document
    pub fn from_reader(mut reader: impl Read) -> AppResult<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| AppError::invalid_input("failed to read goal document").with_source(e))?;
        Self::from_json(&text)
    }

    /// Resolve every goal in the document
    ///
    /// `default_units` apply when the document carries no units of its own.
    #[must_use]
    pub fn resolve(&self, default_units: UserUnits) -> EquivalenceReport {
        let user_units = self.user_units.unwrap_or(default_units);
        let profile = self.body_profile.as_ref();
        let goal_set = GoalSet::new(self.goals.clone());

        let energy = resolve_energy_goal(goal_set.energy_goal(), profile, user_units);
        let goals = goal_set.resolve_all_with_energy(&energy, profile, user_units);

        EquivalenceReport {
            user_units,
            energy,
            goals,
        }
    }
}

impl EquivalenceReport {
    /// Render the report as a plain-text table
    #[must_use]
    pub fn to_table(&self, precision: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:<40} {:>12} {:>12}  unit", "goal", "lower", "upper");
        for goal in &self.goals {
            let cell = |value: Option<f64>| {
                value.map_or_else(|| "-".to_owned(), |value| format!("{value:.precision$}"))
            };
            let _ = writeln!(
                out,
                "{:<40} {:>12} {:>12}  {}",
                describe(&goal.goal_type),
                cell(goal.equivalents.lower),
                cell(goal.equivalents.upper),
                goal.equivalents.unit_label.unwrap_or("-"),
            );
        }
        out
    }
}

fn describe(goal_type: &GoalType) -> String {
    match goal_type {
        GoalType::Energy(kind) => format!("energy {kind:?}"),
        GoalType::Macro { kind, nutrient } => format!("{nutrient:?} {kind:?}"),
        GoalType::Micro { kind, nutrient, .. } => format!("{nutrient:?} {kind:?}"),
    }
}
