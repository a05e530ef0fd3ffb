// ABOUTME: Dependency orchestration resolving a diet's energy goal before dependent goals
// ABOUTME: Same-side-then-opposite energy selection and the at-most-percent fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dependency Orchestrator
//!
//! Percentage-of-energy and per-energy nutrient goals are expressed against
//! the diet's energy goal, so the energy goal is resolved first and its
//! equivalents are fed into the resolver for each dependent goal.
//!
//! The dependent lower bound prefers the energy goal's lower equivalent and
//! the dependent upper bound prefers its upper equivalent. When the preferred
//! side is missing, the other side is used.

use diet_core::models::{BodyProfile, Goal, GoalType, UserUnits};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::bounds::Bounds;
use super::equivalence::{
    equivalent_energy_unit, percentage_of_energy_amount, resolve, unit_label, BoundSide,
    EnergyQuantity, ResolutionContext,
};

/// Resolved equivalents of a diet's energy goal
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ResolvedEnergy {
    /// Lower equivalent, if any
    pub lower: Option<EnergyQuantity>,
    /// Upper equivalent, if any
    pub upper: Option<EnergyQuantity>,
}

impl ResolvedEnergy {
    /// Energy amount a dependent goal uses for `side`
    ///
    /// Prefers the same side and falls back to the opposite one.
    #[must_use]
    pub fn for_side(&self, side: BoundSide) -> Option<EnergyQuantity> {
        let preferred = side.pick(self.lower, self.upper);
        preferred.or_else(|| {
            let fallback = side.opposite().pick(self.lower, self.upper);
            if fallback.is_some() {
                debug!(?side, "energy goal side missing, using opposite side");
            }
            fallback
        })
    }

    /// Whether both equivalents resolved
    #[must_use]
    pub const fn both_resolved(&self) -> bool {
        self.lower.is_some() && self.upper.is_some()
    }
}

/// Resolve the equivalents of an energy goal
///
/// Returns empty equivalents when `energy_goal` is absent or is not an energy goal.
#[must_use]
pub fn resolve_energy_goal(
    energy_goal: Option<&Goal>,
    profile: Option<&BodyProfile>,
    user_units: UserUnits,
) -> ResolvedEnergy {
    let Some(goal) = energy_goal else {
        return ResolvedEnergy::default();
    };
    let GoalType::Energy(kind) = goal.goal_type else {
        return ResolvedEnergy::default();
    };

    let unit = equivalent_energy_unit(kind, profile, &user_units);
    let context = ResolutionContext::new(profile, user_units);
    let quantity = |side: BoundSide| {
        resolve(goal, side, &context).map(|value| EnergyQuantity::new(value, unit))
    };

    ResolvedEnergy {
        lower: quantity(BoundSide::Lower),
        upper: quantity(BoundSide::Upper),
    }
}

/// Equivalents of one goal, ready for display
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GoalEquivalents {
    /// Absolute lower equivalent
    pub lower: Option<f64>,
    /// Absolute upper equivalent
    pub upper: Option<f64>,
    /// Unit both equivalents are expressed in
    pub unit_label: Option<&'static str>,
}

/// Resolve a goal against its diet's energy goal
///
/// Resolves `energy_goal` first when `goal` depends on it. Use
/// [`resolve_with_energy`] to reuse an already resolved energy goal.
#[must_use]
pub fn resolve_goal(
    goal: &Goal,
    energy_goal: Option<&Goal>,
    profile: Option<&BodyProfile>,
    user_units: UserUnits,
) -> GoalEquivalents {
    let energy = if goal.goal_type.depends_on_energy_goal() {
        resolve_energy_goal(energy_goal, profile, user_units)
    } else {
        ResolvedEnergy::default()
    };
    resolve_with_energy(goal, &energy, &ResolutionContext::new(profile, user_units))
}

/// Resolve a goal given the already resolved energy goal
#[must_use]
pub fn resolve_with_energy(
    goal: &Goal,
    energy: &ResolvedEnergy,
    context: &ResolutionContext<'_>,
) -> GoalEquivalents {
    let resolve_side = |side| {
        if goal.goal_type.depends_on_energy_goal() {
            resolve_dependent(goal, side, energy, context)
        } else {
            resolve(goal, side, context)
        }
    };

    GoalEquivalents {
        lower: resolve_side(BoundSide::Lower),
        upper: resolve_side(BoundSide::Upper),
        unit_label: unit_label(goal, context),
    }
}

fn resolve_dependent(
    goal: &Goal,
    side: BoundSide,
    energy: &ResolvedEnergy,
    context: &ResolutionContext<'_>,
) -> Option<f64> {
    let bounds = Bounds::from(goal);
    if side.true_bound(&bounds).is_none() {
        return at_most_percent_fallback(goal, &bounds, side, energy);
    }
    let context = context.with_energy(energy.for_side(side));
    resolve(goal, side, &context)
}

/// Equivalent for a percentage-of-energy goal missing the bound on `side`
///
/// When the energy goal resolved both ends, the goal's opposite percentage is
/// paired with the energy goal's `side` equivalent, so an "at most X%" goal
/// still shows a lower equivalent.
fn at_most_percent_fallback(
    goal: &Goal,
    bounds: &Bounds,
    side: BoundSide,
    energy: &ResolvedEnergy,
) -> Option<f64> {
    if !energy.both_resolved() {
        return None;
    }
    let percent = side.opposite().true_bound(bounds)?;
    let energy_side = side.pick(energy.lower, energy.upper)?;
    percentage_of_energy_amount(goal, percent, energy_side)
}

/// A goal's identity together with its resolved equivalents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedGoal {
    /// Identifier of the resolved goal
    pub id: Uuid,
    /// Type of the resolved goal
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    /// Resolved equivalents
    #[serde(flatten)]
    pub equivalents: GoalEquivalents,
}

/// The goals of one diet or meal
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GoalSet {
    /// Goals in display order
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl GoalSet {
    /// Create a goal set
    #[must_use]
    pub const fn new(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    /// The set's energy goal; the first one wins if several are present
    #[must_use]
    pub fn energy_goal(&self) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.goal_type.is_energy())
    }

    /// Resolve every goal, resolving the energy goal once up front
    #[must_use]
    pub fn resolve_all(
        &self,
        profile: Option<&BodyProfile>,
        user_units: UserUnits,
    ) -> Vec<ResolvedGoal> {
        let energy = resolve_energy_goal(self.energy_goal(), profile, user_units);
        self.resolve_all_with_energy(&energy, profile, user_units)
    }

    /// Resolve every goal against an already resolved energy goal
    #[must_use]
    pub fn resolve_all_with_energy(
        &self,
        energy: &ResolvedEnergy,
        profile: Option<&BodyProfile>,
        user_units: UserUnits,
    ) -> Vec<ResolvedGoal> {
        let context = ResolutionContext::new(profile, user_units);

        debug!(
            goal_count = self.goals.len(),
            has_profile = profile.is_some(),
            energy_lower = ?energy.lower,
            energy_upper = ?energy.upper,
            "resolving goal set"
        );

        self.goals
            .iter()
            .map(|goal| ResolvedGoal {
                id: goal.id,
                goal_type: goal.goal_type,
                equivalents: resolve_with_energy(goal, energy, &context),
            })
            .collect()
    }
}
