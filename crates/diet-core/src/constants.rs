// ABOUTME: Physical conversion constants shared by unit conversion and goal resolution
// ABOUTME: Energy, mass, and macronutrient energy density values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Conversion constants.
//!
//! Energy density values follow the Atwater general factors used on
//! nutrition labels.

/// Energy conversion constants
pub mod energy {
    /// Kilocalories in one kilojoule
    pub const KCALS_PER_KJ: f64 = 0.239_006;
}

/// Mass conversion constants (to grams)
pub mod mass {
    /// Grams in one kilogram
    pub const GRAMS_PER_KG: f64 = 1000.0;
    /// Grams in one pound
    pub const GRAMS_PER_LB: f64 = 453.592;
    /// Milligrams in one gram
    pub const MG_PER_GRAM: f64 = 1000.0;
    /// Micrograms in one gram
    pub const MCG_PER_GRAM: f64 = 1_000_000.0;
}

/// Energy density of macronutrients (Atwater factors)
pub mod energy_density {
    /// Carbohydrate: 4 kcal/g
    pub const CARB_KCALS_PER_GRAM: f64 = 4.0;
    /// Protein: 4 kcal/g
    pub const PROTEIN_KCALS_PER_GRAM: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const FAT_KCALS_PER_GRAM: f64 = 9.0;
}

/// Percentage bounds used by percentage-based goals
pub mod percent {
    /// Lowest meaningful percentage
    pub const MIN: f64 = 0.0;
    /// Highest meaningful percentage
    pub const MAX: f64 = 100.0;
}
