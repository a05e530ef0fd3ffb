// ABOUTME: Body profile snapshot and user display units consumed by goal resolution
// ABOUTME: Maintenance energy (TDEE), weight, and lean mass with unit-aware accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::units::{convert_energy, convert_weight, EnergyUnit, HeightUnit, WeightUnit};

/// Which body measurement a per-body-mass goal scales with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyMassType {
    /// Total body weight
    Weight,
    /// Lean body mass
    LeanMass,
}

/// Read-only snapshot of the user's body measurements
///
/// Energies are daily values in `energy_unit`; weight and lean mass are in
/// `weight_unit`. Any measurement may be missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Resting energy expenditure per day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resting_energy: Option<f64>,
    /// Active energy expenditure per day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_energy: Option<f64>,
    /// Unit both energy values are recorded in
    #[serde(default)]
    pub energy_unit: EnergyUnit,
    /// Body weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Unit weight and lean mass are recorded in
    #[serde(default)]
    pub weight_unit: WeightUnit,
    /// Lean body mass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lean_mass: Option<f64>,
    /// Whether the measurements are kept in sync with the platform health store
    #[serde(default)]
    pub updates_with_health_app: bool,
}

impl BodyProfile {
    /// Create a profile from resting and active energy
    #[must_use]
    pub const fn new(resting_energy: f64, active_energy: f64, energy_unit: EnergyUnit) -> Self {
        Self {
            resting_energy: Some(resting_energy),
            active_energy: Some(active_energy),
            energy_unit,
            weight: None,
            weight_unit: WeightUnit::Kg,
            lean_mass: None,
            updates_with_health_app: false,
        }
    }

    /// Set the body weight
    #[must_use]
    pub fn with_weight(mut self, weight: f64, unit: WeightUnit) -> Self {
        self.weight = Some(weight);
        self.weight_unit = unit;
        self
    }

    /// Set the lean body mass, in the profile's weight unit
    #[must_use]
    pub fn with_lean_mass(mut self, lean_mass: f64) -> Self {
        self.lean_mass = Some(lean_mass);
        self
    }

    /// Total daily energy expenditure (resting + active) in `unit`
    ///
    /// `None` when neither component has been recorded; a single missing
    /// component counts as zero.
    #[must_use]
    pub fn tdee(&self, unit: EnergyUnit) -> Option<f64> {
        if self.resting_energy.is_none() && self.active_energy.is_none() {
            return None;
        }
        let total = self.resting_energy.unwrap_or(0.0) + self.active_energy.unwrap_or(0.0);
        Some(convert_energy(total, self.energy_unit, unit))
    }

    /// Body weight converted to `unit`
    #[must_use]
    pub fn weight_in(&self, unit: WeightUnit) -> Option<f64> {
        self.weight
            .map(|weight| convert_weight(weight, self.weight_unit, unit))
    }

    /// Lean body mass converted to `unit`
    #[must_use]
    pub fn lean_mass_in(&self, unit: WeightUnit) -> Option<f64> {
        self.lean_mass
            .map(|lean_mass| convert_weight(lean_mass, self.weight_unit, unit))
    }

    /// The measurement selected by `kind`, converted to `unit`
    #[must_use]
    pub fn body_mass_in(&self, kind: BodyMassType, unit: WeightUnit) -> Option<f64> {
        match kind {
            BodyMassType::Weight => self.weight_in(unit),
            BodyMassType::LeanMass => self.lean_mass_in(unit),
        }
    }
}

/// Units the user prefers values to be displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserUnits {
    /// Preferred energy unit
    #[serde(default)]
    pub energy: EnergyUnit,
    /// Preferred body mass unit
    #[serde(default)]
    pub weight: WeightUnit,
    /// Preferred height unit
    #[serde(default)]
    pub height: HeightUnit,
}

impl UserUnits {
    /// Create a set of display units
    #[must_use]
    pub const fn new(energy: EnergyUnit, weight: WeightUnit, height: HeightUnit) -> Self {
        Self {
            energy,
            weight,
            height,
        }
    }
}
