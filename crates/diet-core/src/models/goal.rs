// ABOUTME: Goal data model - energy, macro, and micro goals with their relative kinds
// ABOUTME: Immutable tagged unions with pure "with field changed" constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Goal Model
//!
//! A goal is a pair of optional bounds plus a [`GoalType`] describing how the
//! bounds are to be read: as absolute values, relative to maintenance energy,
//! per unit of body mass, as a share of the energy goal, and so on.
//!
//! Nothing here enforces `lower_bound <= upper_bound`. Users can enter bounds
//! in either order, and readers normalize at read time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::body_profile::BodyMassType;
use super::nutrient::{Macro, NutrientType};
use crate::units::{EnergyUnit, NutrientUnit, WeightUnit};

/// Direction of an energy goal relative to maintenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyDelta {
    /// Eat less than maintenance
    Deficit,
    /// Eat more than maintenance
    Surplus,
}

/// How the bounds of an energy goal are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyGoalKind {
    /// Bounds are absolute energy amounts
    Fixed {
        /// Unit the bounds are entered in
        unit: EnergyUnit,
    },
    /// Bounds are an energy amount below or above maintenance
    FromMaintenance {
        /// Unit the bounds are entered in
        unit: EnergyUnit,
        /// Deficit or surplus
        delta: EnergyDelta,
    },
    /// Bounds are a percentage of maintenance below or above it
    PercentFromMaintenance {
        /// Deficit or surplus
        delta: EnergyDelta,
    },
}

/// Time unit of a per-workout-duration goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutDurationUnit {
    /// Per minute of workout
    Min,
    /// Per hour of workout
    Hour,
}

/// How the bounds of a macro goal are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroGoalKind {
    /// Bounds are absolute gram amounts
    Fixed,
    /// Bounds are grams per unit of body weight or lean mass
    QuantityPerBodyMass {
        /// Measurement the goal scales with
        body_mass: BodyMassType,
        /// Mass unit the denominator is expressed in
        unit: WeightUnit,
    },
    /// Bounds are a percentage of the energy goal
    PercentageOfEnergy,
    /// Bounds are grams per unit of workout time
    QuantityPerWorkoutDuration {
        /// Time unit of the denominator
        unit: WorkoutDurationUnit,
    },
}

/// How the bounds of a micro goal are interpreted
///
/// Every macro kind is also a micro kind; micros can additionally be scaled
/// per amount of energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MicroGoalKind {
    /// Bounds are absolute amounts
    Fixed,
    /// Bounds are an amount per unit of body weight or lean mass
    QuantityPerBodyMass {
        /// Measurement the goal scales with
        body_mass: BodyMassType,
        /// Mass unit the denominator is expressed in
        unit: WeightUnit,
    },
    /// Bounds are a percentage of the energy goal
    PercentageOfEnergy,
    /// Bounds are an amount per `per_energy` of the energy goal
    QuantityPerEnergy {
        /// Size of the energy denominator (e.g. 1000 for "per 1000 kcal")
        per_energy: f64,
        /// Unit of the energy denominator
        unit: EnergyUnit,
    },
    /// Bounds are an amount per unit of workout time
    QuantityPerWorkoutDuration {
        /// Time unit of the denominator
        unit: WorkoutDurationUnit,
    },
}

impl From<MacroGoalKind> for MicroGoalKind {
    fn from(kind: MacroGoalKind) -> Self {
        match kind {
            MacroGoalKind::Fixed => Self::Fixed,
            MacroGoalKind::QuantityPerBodyMass { body_mass, unit } => {
                Self::QuantityPerBodyMass { body_mass, unit }
            }
            MacroGoalKind::PercentageOfEnergy => Self::PercentageOfEnergy,
            MacroGoalKind::QuantityPerWorkoutDuration { unit } => {
                Self::QuantityPerWorkoutDuration { unit }
            }
        }
    }
}

impl MicroGoalKind {
    /// Whether resolving this kind needs the diet's energy goal
    #[must_use]
    pub const fn depends_on_energy_goal(&self) -> bool {
        matches!(
            self,
            Self::PercentageOfEnergy | Self::QuantityPerEnergy { .. }
        )
    }

    fn with_body_mass(self, new_body_mass: BodyMassType, new_unit: Option<WeightUnit>) -> Self {
        match self {
            Self::QuantityPerBodyMass { unit, .. } => Self::QuantityPerBodyMass {
                body_mass: new_body_mass,
                unit: new_unit.unwrap_or(unit),
            },
            other => other,
        }
    }
}

impl MacroGoalKind {
    fn with_body_mass(self, new_body_mass: BodyMassType, new_unit: Option<WeightUnit>) -> Self {
        match self {
            Self::QuantityPerBodyMass { unit, .. } => Self::QuantityPerBodyMass {
                body_mass: new_body_mass,
                unit: new_unit.unwrap_or(unit),
            },
            other => other,
        }
    }
}

/// What a goal measures and how its bounds are read
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Daily energy goal
    Energy(EnergyGoalKind),
    /// Macronutrient goal
    Macro {
        /// How the bounds are read
        kind: MacroGoalKind,
        /// Macronutrient measured
        nutrient: Macro,
    },
    /// Micronutrient goal
    Micro {
        /// How the bounds are read
        kind: MicroGoalKind,
        /// Micronutrient measured
        nutrient: NutrientType,
        /// Unit the nutrient is measured in
        unit: NutrientUnit,
    },
}

impl GoalType {
    /// Whether this is an energy goal
    #[must_use]
    pub const fn is_energy(&self) -> bool {
        matches!(self, Self::Energy(_))
    }

    /// Whether resolving this goal needs the diet's energy goal
    #[must_use]
    pub fn depends_on_energy_goal(&self) -> bool {
        match self {
            Self::Energy(_) => false,
            Self::Macro { kind, .. } => MicroGoalKind::from(*kind).depends_on_energy_goal(),
            Self::Micro { kind, .. } => kind.depends_on_energy_goal(),
        }
    }

    /// Whether resolving this goal reads the body profile
    #[must_use]
    pub const fn depends_on_body_profile(&self) -> bool {
        matches!(
            self,
            Self::Energy(
                EnergyGoalKind::FromMaintenance { .. }
                    | EnergyGoalKind::PercentFromMaintenance { .. }
            ) | Self::Macro {
                kind: MacroGoalKind::QuantityPerBodyMass { .. },
                ..
            } | Self::Micro {
                kind: MicroGoalKind::QuantityPerBodyMass { .. },
                ..
            }
        )
    }

    /// Deficit or surplus, for maintenance-relative energy goals
    #[must_use]
    pub const fn delta(&self) -> Option<EnergyDelta> {
        match self {
            Self::Energy(
                EnergyGoalKind::FromMaintenance { delta, .. }
                | EnergyGoalKind::PercentFromMaintenance { delta },
            ) => Some(*delta),
            _ => None,
        }
    }

    /// Body measurement, for per-body-mass nutrient goals
    #[must_use]
    pub const fn body_mass_type(&self) -> Option<BodyMassType> {
        match self {
            Self::Macro {
                kind: MacroGoalKind::QuantityPerBodyMass { body_mass, .. },
                ..
            }
            | Self::Micro {
                kind: MicroGoalKind::QuantityPerBodyMass { body_mass, .. },
                ..
            } => Some(*body_mass),
            _ => None,
        }
    }

    /// Energy unit the bounds (or their energy denominator) are entered in
    #[must_use]
    pub const fn energy_unit(&self) -> Option<EnergyUnit> {
        match self {
            Self::Energy(
                EnergyGoalKind::Fixed { unit } | EnergyGoalKind::FromMaintenance { unit, .. },
            )
            | Self::Micro {
                kind: MicroGoalKind::QuantityPerEnergy { unit, .. },
                ..
            } => Some(*unit),
            _ => None,
        }
    }

    /// Copy of this type with the deficit/surplus direction replaced
    ///
    /// Types without a direction are returned unchanged.
    #[must_use]
    pub const fn with_delta(self, delta: EnergyDelta) -> Self {
        match self {
            Self::Energy(EnergyGoalKind::FromMaintenance { unit, .. }) => {
                Self::Energy(EnergyGoalKind::FromMaintenance { unit, delta })
            }
            Self::Energy(EnergyGoalKind::PercentFromMaintenance { .. }) => {
                Self::Energy(EnergyGoalKind::PercentFromMaintenance { delta })
            }
            other => other,
        }
    }

    /// Copy of this type scaled by a different body measurement
    #[must_use]
    pub fn with_body_mass_type(self, body_mass: BodyMassType) -> Self {
        self.map_body_mass(body_mass, None)
    }

    /// Copy of this type with a different body mass unit
    #[must_use]
    pub fn with_weight_unit(self, unit: WeightUnit) -> Self {
        self.body_mass_type()
            .map_or(self, |body_mass| self.map_body_mass(body_mass, Some(unit)))
    }

    /// Copy of this type with a different energy unit
    ///
    /// Applies to fixed and maintenance-relative energy goals and to the
    /// denominator of per-energy micro goals.
    #[must_use]
    pub fn with_energy_unit(self, unit: EnergyUnit) -> Self {
        match self {
            Self::Energy(EnergyGoalKind::Fixed { .. }) => {
                Self::Energy(EnergyGoalKind::Fixed { unit })
            }
            Self::Energy(EnergyGoalKind::FromMaintenance { delta, .. }) => {
                Self::Energy(EnergyGoalKind::FromMaintenance { unit, delta })
            }
            Self::Micro {
                kind: MicroGoalKind::QuantityPerEnergy { per_energy, .. },
                nutrient,
                unit: nutrient_unit,
            } => Self::Micro {
                kind: MicroGoalKind::QuantityPerEnergy { per_energy, unit },
                nutrient,
                unit: nutrient_unit,
            },
            other => other,
        }
    }

    fn map_body_mass(self, body_mass: BodyMassType, unit: Option<WeightUnit>) -> Self {
        match self {
            Self::Macro { kind, nutrient } => Self::Macro {
                kind: kind.with_body_mass(body_mass, unit),
                nutrient,
            },
            Self::Micro {
                kind,
                nutrient,
                unit: nutrient_unit,
            } => Self::Micro {
                kind: kind.with_body_mass(body_mass, unit),
                nutrient,
                unit: nutrient_unit,
            },
            energy @ Self::Energy(_) => energy,
        }
    }
}

/// A single goal within a diet or meal goal set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Stable identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// What the goal measures and how its bounds are read
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    /// Lower bound as entered by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<f64>,
    /// Upper bound as entered by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<f64>,
}

impl Goal {
    /// Create a goal with no bounds set
    #[must_use]
    pub fn new(goal_type: GoalType) -> Self {
        Self {
            id: Uuid::new_v4(),
            goal_type,
            lower_bound: None,
            upper_bound: None,
        }
    }

    /// Copy of this goal with the lower bound set
    #[must_use]
    pub fn with_lower_bound(mut self, lower_bound: f64) -> Self {
        self.lower_bound = Some(lower_bound);
        self
    }

    /// Copy of this goal with the upper bound set
    #[must_use]
    pub fn with_upper_bound(mut self, upper_bound: f64) -> Self {
        self.upper_bound = Some(upper_bound);
        self
    }

    /// Copy of this goal with a different type, keeping id and bounds
    #[must_use]
    pub fn with_goal_type(mut self, goal_type: GoalType) -> Self {
        self.goal_type = goal_type;
        self
    }
}
