//! # Config Crate
//!
//! Centralized configuration constants for the mechanism generators.
//! All magic numbers and tunable parameters are defined here so the
//! profile builders and the assembly recipes agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GenerationConfig, OVERHANG_ANGLE_DEGREES, EPSILON_TOLERANCE};
//!
//! // The raceway line runs at the printer overhang angle
//! let slope = OVERHANG_ANGLE_DEGREES.to_radians().tan();
//! assert!(slope > 0.5 && slope < 0.6);
//!
//! // Builders take an immutable configuration snapshot
//! let config = GenerationConfig::default();
//! assert_eq!(config.tolerance, EPSILON_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Pure values and arithmetic, no external crates
//! - **Printer Aware**: Defaults match what prints reliably on FDM machines
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
