// ABOUTME: Bound normalization for goals whose bounds may be inverted or equal
// ABOUTME: Canonical true lower/upper and larger/smaller views of a (lower, upper) pair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Bound Normalizer
//!
//! Bounds are stored exactly as the user typed them, so `lower > upper` and
//! `lower == upper` both occur. Every resolution rule reads bounds through
//! [`Bounds`] instead of the raw fields.
//!
//! Equal bounds are read asymmetrically: there is no true lower bound, but
//! the shared value is the true upper bound.

use diet_core::models::Goal;

/// Read-only view over a goal's raw bounds
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Lower bound as entered
    pub lower: Option<f64>,
    /// Upper bound as entered
    pub upper: Option<f64>,
}

impl Bounds {
    /// Create a view over a raw bound pair
    #[must_use]
    pub const fn new(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self { lower, upper }
    }

    /// Whether both bounds are set
    #[must_use]
    pub const fn both_set(&self) -> bool {
        self.lower.is_some() && self.upper.is_some()
    }

    /// Lower end of the range after normalization
    ///
    /// Equal bounds have no lower end; inverted bounds yield the stored upper.
    #[must_use]
    #[allow(clippy::float_cmp)] // Exact equality is the rule: users type both values
    pub fn true_lower(&self) -> Option<f64> {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) if lower == upper => None,
            (Some(lower), Some(upper)) if upper < lower => Some(upper),
            (lower, _) => lower,
        }
    }

    /// Upper end of the range after normalization
    ///
    /// Equal bounds keep the shared value; inverted bounds yield the stored lower.
    #[must_use]
    pub fn true_upper(&self) -> Option<f64> {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) if upper < lower => Some(lower),
            (_, upper) => upper,
        }
    }

    /// Numerically larger of the set bounds
    #[must_use]
    pub fn larger(&self) -> Option<f64> {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) => Some(lower.max(upper)),
            (lower, upper) => lower.or(upper),
        }
    }

    /// Numerically smaller of the set bounds
    #[must_use]
    pub fn smaller(&self) -> Option<f64> {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) => Some(lower.min(upper)),
            (lower, upper) => lower.or(upper),
        }
    }
}

impl From<&Goal> for Bounds {
    fn from(goal: &Goal) -> Self {
        Self::new(goal.lower_bound, goal.upper_bound)
    }
}
