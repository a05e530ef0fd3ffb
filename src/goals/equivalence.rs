// ABOUTME: Equivalence resolver converting relative goals into absolute lower/upper values
// ABOUTME: Dispatches per goal kind over maintenance energy, body mass, and the energy goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Equivalence Resolver
//!
//! Converts a goal's bounds into the absolute amounts they stand for:
//!
//! | Goal kind | Equivalent |
//! |-----------|------------|
//! | Energy, fixed | the normalized bound itself |
//! | Energy, from maintenance | `tdee ∓ bound` |
//! | Energy, percent from maintenance | `tdee ∓ bound% of tdee` |
//! | Nutrient, per body mass | `bound x weight or lean mass` |
//! | Nutrient, percentage of energy | grams supplying `bound%` of the energy goal |
//! | Nutrient, per energy | `bound x energy / per_energy` |
//! | Nutrient, fixed or per workout duration | none |
//!
//! Missing inputs (no body profile, no measurement, no energy equivalent,
//! no bound) resolve to `None`. Nothing here returns an error.
//!
//! Deficit goals read their bounds crosswise: a larger deficit gives a lower
//! energy amount, so the lower equivalent is taken from the larger raw bound.

use diet_core::constants::percent::{MAX as MAX_PERCENT, MIN as MIN_PERCENT};
use diet_core::models::{
    BodyProfile, EnergyDelta, EnergyGoalKind, Goal, GoalType, MacroGoalKind, MicroGoalKind,
    UserUnits,
};
use diet_core::units::{to_kcal, EnergyUnit, NutrientUnit};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::bounds::Bounds;

/// Which end of a goal's range is being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundSide {
    /// The lower equivalent
    Lower,
    /// The upper equivalent
    Upper,
}

impl BoundSide {
    /// The other end of the range
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
        }
    }

    /// Select the value belonging to this side
    #[must_use]
    pub fn pick<T>(self, lower: T, upper: T) -> T {
        match self {
            Self::Lower => lower,
            Self::Upper => upper,
        }
    }

    /// Normalized bound on this side
    #[must_use]
    pub fn true_bound(self, bounds: &Bounds) -> Option<f64> {
        match self {
            Self::Lower => bounds.true_lower(),
            Self::Upper => bounds.true_upper(),
        }
    }
}

/// An energy amount together with the unit it is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyQuantity {
    /// Amount of energy
    pub value: f64,
    /// Unit of `value`
    pub unit: EnergyUnit,
}

impl EnergyQuantity {
    /// Create an energy amount
    #[must_use]
    pub const fn new(value: f64, unit: EnergyUnit) -> Self {
        Self { value, unit }
    }

    /// The amount in kilocalories
    #[must_use]
    pub fn in_kcal(&self) -> f64 {
        to_kcal(self.value, self.unit)
    }
}

/// Inputs a goal is resolved against
///
/// `energy` is the already-resolved equivalent of the diet's energy goal, not
/// its raw bound. It is `None` when the diet has no energy goal or the energy
/// goal has no equivalent yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolutionContext<'a> {
    /// Resolved energy goal equivalent for dependent nutrient goals
    pub energy: Option<EnergyQuantity>,
    /// Body measurements, if the user has set them up
    pub profile: Option<&'a BodyProfile>,
    /// Display units used when no body profile is available
    pub user_units: UserUnits,
}

impl<'a> ResolutionContext<'a> {
    /// Create a context without an energy equivalent
    #[must_use]
    pub const fn new(profile: Option<&'a BodyProfile>, user_units: UserUnits) -> Self {
        Self {
            energy: None,
            profile,
            user_units,
        }
    }

    /// Copy of this context carrying an energy equivalent
    #[must_use]
    pub fn with_energy(mut self, energy: Option<EnergyQuantity>) -> Self {
        self.energy = energy;
        self
    }
}

/// Resolve the absolute lower equivalent of `goal`
#[must_use]
pub fn resolve_lower(goal: &Goal, context: &ResolutionContext<'_>) -> Option<f64> {
    resolve(goal, BoundSide::Lower, context)
}

/// Resolve the absolute upper equivalent of `goal`
#[must_use]
pub fn resolve_upper(goal: &Goal, context: &ResolutionContext<'_>) -> Option<f64> {
    resolve(goal, BoundSide::Upper, context)
}

/// Resolve one side of `goal`
#[must_use]
pub fn resolve(goal: &Goal, side: BoundSide, context: &ResolutionContext<'_>) -> Option<f64> {
    let bounds = Bounds::from(goal);
    let value = match goal.goal_type {
        GoalType::Energy(kind) => resolve_energy(kind, &bounds, side, context.profile),
        GoalType::Macro { kind, nutrient } => resolve_nutrient(
            kind.into(),
            &bounds,
            side,
            context,
            &NutrientScale::new(Some(nutrient.kcals_per_gram()), NutrientUnit::G),
        ),
        GoalType::Micro {
            kind,
            nutrient,
            unit,
        } => resolve_nutrient(
            kind,
            &bounds,
            side,
            context,
            &NutrientScale::new(nutrient.kcals_per_gram(), unit),
        ),
    };

    trace!(goal_id = %goal.id, ?side, ?value, "resolved goal equivalent");
    value
}

/// Amount of a percentage-of-energy nutrient goal for an explicit percent and energy
///
/// `None` when `goal` is not a percentage-of-energy nutrient goal, when the
/// nutrient has no kcal/gram mapping, or when its unit has no mass equivalent.
#[must_use]
pub fn percentage_of_energy_amount(
    goal: &Goal,
    percent: f64,
    energy: EnergyQuantity,
) -> Option<f64> {
    let scale = match goal.goal_type {
        GoalType::Macro {
            kind: MacroGoalKind::PercentageOfEnergy,
            nutrient,
        } => NutrientScale::new(Some(nutrient.kcals_per_gram()), NutrientUnit::G),
        GoalType::Micro {
            kind: MicroGoalKind::PercentageOfEnergy,
            nutrient,
            unit,
        } => NutrientScale::new(nutrient.kcals_per_gram(), unit),
        _ => return None,
    };
    scale.amount_for_percent(percent, energy.in_kcal())
}

/// Grams of a nutrient supplying `percent`% of `energy_kcal`
///
/// A percent outside `0..=100` or a non-positive energy yields `0`.
#[must_use]
pub fn grams_equalling_percent(percent: f64, energy_kcal: f64, kcals_per_gram: f64) -> f64 {
    if !(MIN_PERCENT..=MAX_PERCENT).contains(&percent) || energy_kcal <= 0.0 {
        return 0.0;
    }
    (energy_kcal * percent / 100.0) / kcals_per_gram
}

/// Energy amount that is `percent`% of maintenance
#[must_use]
pub fn percent_from_maintenance(percent: f64, tdee: f64) -> f64 {
    percent / 100.0 * tdee
}

/// Unit the equivalent of an energy goal is expressed in
#[must_use]
pub fn equivalent_energy_unit(
    kind: EnergyGoalKind,
    profile: Option<&BodyProfile>,
    user_units: &UserUnits,
) -> EnergyUnit {
    match kind {
        EnergyGoalKind::Fixed { unit } | EnergyGoalKind::FromMaintenance { unit, .. } => unit,
        EnergyGoalKind::PercentFromMaintenance { .. } => {
            profile.map_or(user_units.energy, |profile| profile.energy_unit)
        }
    }
}

/// Label of the unit `goal`'s equivalents are expressed in
///
/// `None` for goals that never have an equivalent: fixed and per-workout
/// kinds, and percentage-of-energy goals whose nutrient has no energy density
/// or whose unit has no mass equivalent.
#[must_use]
pub fn unit_label(goal: &Goal, context: &ResolutionContext<'_>) -> Option<&'static str> {
    match goal.goal_type {
        GoalType::Energy(kind) => Some(
            equivalent_energy_unit(kind, context.profile, &context.user_units).abbreviation(),
        ),
        GoalType::Macro { kind, nutrient } => {
            let scale = NutrientScale::new(Some(nutrient.kcals_per_gram()), NutrientUnit::G);
            scale
                .has_equivalent(kind.into())
                .then_some(NutrientUnit::G.abbreviation())
        }
        GoalType::Micro {
            kind,
            nutrient,
            unit,
        } => {
            let scale = NutrientScale::new(nutrient.kcals_per_gram(), unit);
            scale.has_equivalent(kind).then_some(unit.abbreviation())
        }
    }
}

fn resolve_energy(
    kind: EnergyGoalKind,
    bounds: &Bounds,
    side: BoundSide,
    profile: Option<&BodyProfile>,
) -> Option<f64> {
    match kind {
        EnergyGoalKind::Fixed { .. } => side.true_bound(bounds),
        EnergyGoalKind::FromMaintenance { unit, delta } => {
            let Some(tdee) = profile.and_then(|profile| profile.tdee(unit)) else {
                debug!("no maintenance energy available for energy goal");
                return None;
            };
            let amount = maintenance_bound(bounds, side, delta)?;
            Some(apply_delta(tdee, amount, delta))
        }
        EnergyGoalKind::PercentFromMaintenance { delta } => {
            let Some(tdee) = profile.and_then(|profile| profile.tdee(profile.energy_unit)) else {
                debug!("no maintenance energy available for energy goal");
                return None;
            };
            let percent = maintenance_bound(bounds, side, delta)?;
            Some(apply_delta(
                tdee,
                percent_from_maintenance(percent, tdee),
                delta,
            ))
        }
    }
}

/// Raw bound a maintenance-relative goal reads for `side`
///
/// Deficits swap: the lower equivalent comes from the larger bound and the
/// upper equivalent from the smaller one. A lone bound is only used for its
/// own side.
fn maintenance_bound(bounds: &Bounds, side: BoundSide, delta: EnergyDelta) -> Option<f64> {
    match (side, delta) {
        (BoundSide::Lower, EnergyDelta::Deficit) => {
            if bounds.both_set() {
                bounds.larger()
            } else {
                bounds.lower
            }
        }
        (BoundSide::Upper, EnergyDelta::Deficit) => {
            if bounds.both_set() {
                bounds.smaller()
            } else {
                bounds.upper
            }
        }
        (BoundSide::Lower, EnergyDelta::Surplus) => bounds.true_lower(),
        (BoundSide::Upper, EnergyDelta::Surplus) => bounds.upper,
    }
}

fn apply_delta(tdee: f64, amount: f64, delta: EnergyDelta) -> f64 {
    match delta {
        EnergyDelta::Deficit => tdee - amount,
        EnergyDelta::Surplus => tdee + amount,
    }
}

/// Energy density and display unit of the nutrient a goal measures
struct NutrientScale {
    kcals_per_gram: Option<f64>,
    unit: NutrientUnit,
}

impl NutrientScale {
    const fn new(kcals_per_gram: Option<f64>, unit: NutrientUnit) -> Self {
        Self {
            kcals_per_gram,
            unit,
        }
    }

    fn has_equivalent(&self, kind: MicroGoalKind) -> bool {
        match kind {
            MicroGoalKind::Fixed | MicroGoalKind::QuantityPerWorkoutDuration { .. } => false,
            MicroGoalKind::PercentageOfEnergy => {
                self.kcals_per_gram.is_some() && self.unit != NutrientUnit::Iu
            }
            MicroGoalKind::QuantityPerBodyMass { .. }
            | MicroGoalKind::QuantityPerEnergy { .. } => true,
        }
    }

    fn amount_for_percent(&self, percent: f64, energy_kcal: f64) -> Option<f64> {
        let kcals_per_gram = self.kcals_per_gram?;
        self.unit
            .from_grams(grams_equalling_percent(percent, energy_kcal, kcals_per_gram))
    }
}

fn resolve_nutrient(
    kind: MicroGoalKind,
    bounds: &Bounds,
    side: BoundSide,
    context: &ResolutionContext<'_>,
    scale: &NutrientScale,
) -> Option<f64> {
    match kind {
        MicroGoalKind::Fixed | MicroGoalKind::QuantityPerWorkoutDuration { .. } => None,
        MicroGoalKind::QuantityPerBodyMass { body_mass, unit } => {
            let per_unit = side.true_bound(bounds)?;
            let Some(measurement) = context
                .profile
                .and_then(|profile| profile.body_mass_in(body_mass, unit))
            else {
                debug!(?body_mass, "no body measurement available for goal");
                return None;
            };
            Some(per_unit * measurement)
        }
        MicroGoalKind::PercentageOfEnergy => {
            let percent = side.true_bound(bounds)?;
            let energy = context.energy?;
            scale.amount_for_percent(percent, energy.in_kcal())
        }
        MicroGoalKind::QuantityPerEnergy { per_energy, unit } => {
            let quantity = side.true_bound(bounds)?;
            let energy = context.energy?;
            let per_energy_kcal = to_kcal(per_energy, unit);
            if per_energy_kcal <= 0.0 {
                return None;
            }
            Some(quantity * energy.in_kcal() / per_energy_kcal)
        }
    }
}
