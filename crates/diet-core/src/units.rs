// ABOUTME: Unit types and conversion functions for energy, body mass, and nutrient mass
// ABOUTME: Pure, stateless kcal/kJ and kg/lb conversions used by goal resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unit Conversion
//!
//! Every conversion goes through a canonical unit: kilocalories for energy
//! and grams for mass. No goal-specific knowledge lives here.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{energy::KCALS_PER_KJ, mass};
use crate::errors::AppError;

/// Unit an energy amount is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    /// Kilocalories
    #[default]
    Kcal,
    /// Kilojoules
    Kj,
}

impl EnergyUnit {
    /// Short label shown next to a value
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Kcal => "kcal",
            Self::Kj => "kJ",
        }
    }
}

/// Convert an energy amount into kilocalories
#[must_use]
pub fn to_kcal(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Kcal => value,
        EnergyUnit::Kj => value * KCALS_PER_KJ,
    }
}

/// Convert a kilocalorie amount into `unit`
#[must_use]
pub fn from_kcal(kcal: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Kcal => kcal,
        EnergyUnit::Kj => kcal / KCALS_PER_KJ,
    }
}

/// Convert an energy amount between two units
#[must_use]
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    if from == to {
        return value;
    }
    from_kcal(to_kcal(value, from), to)
}

/// Unit a body mass is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kg,
    /// Pounds
    Lb,
}

impl WeightUnit {
    /// Grams in one of this unit
    #[must_use]
    pub const fn grams(self) -> f64 {
        match self {
            Self::Kg => mass::GRAMS_PER_KG,
            Self::Lb => mass::GRAMS_PER_LB,
        }
    }

    /// Short label shown next to a value
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lb => "lb",
        }
    }
}

/// Convert a body mass into grams
#[must_use]
pub fn to_grams(value: f64, unit: WeightUnit) -> f64 {
    value * unit.grams()
}

/// Convert a gram amount into `unit`
#[must_use]
pub fn from_grams(grams: f64, unit: WeightUnit) -> f64 {
    grams / unit.grams()
}

/// Convert a body mass between two units
#[must_use]
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    if from == to {
        return value;
    }
    from_grams(to_grams(value, from), to)
}

/// Unit a height is expressed in
///
/// Carried as part of the user's display preferences; no goal kind resolves
/// against height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    /// Centimeters
    #[default]
    Cm,
    /// Meters
    M,
    /// Feet
    Ft,
}

impl HeightUnit {
    /// Short label shown next to a value
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::M => "m",
            Self::Ft => "ft",
        }
    }
}

/// Unit a nutrient quantity is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientUnit {
    /// Grams
    #[default]
    G,
    /// Milligrams
    Mg,
    /// Micrograms
    Mcg,
    /// International units (no mass equivalent)
    Iu,
}

impl NutrientUnit {
    /// Express a gram amount in this unit
    ///
    /// Returns `None` for units without a fixed mass equivalent.
    #[must_use]
    pub fn from_grams(self, grams: f64) -> Option<f64> {
        match self {
            Self::G => Some(grams),
            Self::Mg => Some(grams * mass::MG_PER_GRAM),
            Self::Mcg => Some(grams * mass::MCG_PER_GRAM),
            Self::Iu => None,
        }
    }

    /// Short label shown next to a value
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::G => "g",
            Self::Mg => "mg",
            Self::Mcg => "mcg",
            Self::Iu => "IU",
        }
    }
}

macro_rules! unit_text {
    ($unit:ty, $label:literal, { $($text:literal => $variant:expr),+ $(,)? }) => {
        impl Display for $unit {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(self.abbreviation())
            }
        }

        impl FromStr for $unit {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text => Ok($variant),)+
                    other => Err(AppError::invalid_input(format!(
                        "unknown {} unit '{other}'",
                        $label
                    ))),
                }
            }
        }
    };
}

unit_text!(EnergyUnit, "energy", {
    "kcal" => EnergyUnit::Kcal,
    "kj" => EnergyUnit::Kj,
});

unit_text!(WeightUnit, "weight", {
    "kg" => WeightUnit::Kg,
    "lb" => WeightUnit::Lb,
    "lbs" => WeightUnit::Lb,
});

unit_text!(HeightUnit, "height", {
    "cm" => HeightUnit::Cm,
    "m" => HeightUnit::M,
    "ft" => HeightUnit::Ft,
});

unit_text!(NutrientUnit, "nutrient", {
    "g" => NutrientUnit::G,
    "mg" => NutrientUnit::Mg,
    "mcg" => NutrientUnit::Mcg,
    "µg" => NutrientUnit::Mcg,
    "iu" => NutrientUnit::Iu,
});
