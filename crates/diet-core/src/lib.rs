// ABOUTME: Core types and unit conversion for the diet goal equivalence engine
// ABOUTME: Foundation crate with error handling, conversion constants, and the goal data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Core
//!
//! Foundation crate providing shared types for the diet goal equivalence
//! engine. It holds no resolution logic, so it changes infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy, mass, and energy-density constants
//! - **units**: Energy, weight, height, and nutrient units with conversions
//! - **models**: Goals, nutrients, body profile, and user units

/// Unified error handling system with standard error codes
pub mod errors;

/// Conversion constants organized by domain
pub mod constants;

/// Unit types and pure conversion functions
pub mod units;

/// Goal, nutrient, and body profile data model
pub mod models;
