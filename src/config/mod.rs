// ABOUTME: Configuration module for the diet goal engine and its command-line tool
// ABOUTME: Environment-driven defaults with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management.

/// Engine defaults loaded from the environment
pub mod engine_config;

pub use engine_config::{ConfigError, EngineConfig};
