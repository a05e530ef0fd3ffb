// ABOUTME: Macronutrient and micronutrient identifiers with their energy densities
// ABOUTME: Maps each nutrient to kcal/gram where a fat or carb equivalence exists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::energy_density::{
    CARB_KCALS_PER_GRAM, FAT_KCALS_PER_GRAM, PROTEIN_KCALS_PER_GRAM,
};

/// Macronutrient tracked by a macro goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Macro {
    /// Carbohydrate
    Carb,
    /// Fat
    Fat,
    /// Protein
    Protein,
}

impl Macro {
    /// Energy supplied by one gram of this macronutrient
    #[must_use]
    pub const fn kcals_per_gram(self) -> f64 {
        match self {
            Self::Carb => CARB_KCALS_PER_GRAM,
            Self::Fat => FAT_KCALS_PER_GRAM,
            Self::Protein => PROTEIN_KCALS_PER_GRAM,
        }
    }
}

/// Micronutrient tracked by a micro goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum NutrientType {
    /// Saturated fat
    SaturatedFat,
    /// Monounsaturated fat
    MonounsaturatedFat,
    /// Polyunsaturated fat
    PolyunsaturatedFat,
    /// Trans fat
    TransFat,
    /// Cholesterol
    Cholesterol,
    /// Dietary fiber
    DietaryFiber,
    /// Total sugars
    Sugars,
    /// Added sugars
    AddedSugars,
    /// Sodium
    Sodium,
    /// Potassium
    Potassium,
    /// Calcium
    Calcium,
    /// Iron
    Iron,
    /// Magnesium
    Magnesium,
    /// Zinc
    Zinc,
    /// Vitamin A
    VitaminA,
    /// Vitamin C
    VitaminC,
    /// Vitamin D
    VitaminD,
    /// Vitamin B12
    VitaminB12,
    /// Folate
    Folate,
    /// Caffeine
    Caffeine,
}

impl NutrientType {
    /// Energy supplied by one gram, for nutrients that are fat or carb equivalents
    ///
    /// Fat fractions count as fat, sugars count as carbohydrate. Every other
    /// nutrient has no kcal/gram mapping.
    #[must_use]
    pub const fn kcals_per_gram(self) -> Option<f64> {
        match self {
            Self::SaturatedFat
            | Self::MonounsaturatedFat
            | Self::PolyunsaturatedFat
            | Self::TransFat => Some(FAT_KCALS_PER_GRAM),
            Self::Sugars | Self::AddedSugars => Some(CARB_KCALS_PER_GRAM),
            _ => None,
        }
    }
}
