//! # Mechanism Errors
//!
//! Error types for profile and placement generation.
//!
//! ## Error Policy
//!
//! - All checks run before any sampling; no partial results are returned
//! - Inputs are never clamped or corrected to make them feasible
//! - Errors name the offending parameter or derived quantity

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating mechanism geometry.
///
/// ## Example
///
/// ```rust
/// use mechanism_profiles::{plan_ball_layout, MechanismError};
///
/// match plan_ball_layout(30.0, 20.0, 0.1) {
///     Err(MechanismError::Configuration { parameter, .. }) => assert_eq!(parameter, "ball_radius"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MechanismError {
    /// A parameter is outside its domain (non-positive length, fraction
    /// outside (0, 1), too few patterns).
    #[error("Configuration error in '{parameter}': {message}")]
    Configuration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// The parameters are individually valid but describe geometry that
    /// cannot be built.
    #[error("Infeasible geometry: {message}")]
    InfeasibleGeometry {
        /// Which derived check failed and by how much
        message: String,
    },

    /// The generation settings themselves are invalid.
    #[error("Invalid generation config: {0}")]
    Config(#[from] ConfigError),
}

impl MechanismError {
    /// Creates a configuration error.
    pub fn configuration(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            parameter,
            message: message.into(),
        }
    }

    /// Creates an infeasible geometry error.
    pub fn infeasible(message: impl Into<String>) -> Self {
        Self::InfeasibleGeometry {
            message: message.into(),
        }
    }

    /// Returns true for [`MechanismError::InfeasibleGeometry`].
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::InfeasibleGeometry { .. })
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mechanism generation.
pub type MechanismResult<T> = Result<T, MechanismError>;

// =============================================================================
// PARAMETER CHECKS
// =============================================================================

/// Fails unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> MechanismResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MechanismError::configuration(
            parameter,
            format!("must be a positive finite length, got {value}"),
        ))
    }
}

/// Fails unless `value` is finite and not negative.
pub(crate) fn ensure_non_negative(parameter: &'static str, value: f64) -> MechanismResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MechanismError::configuration(
            parameter,
            format!("must be finite and >= 0, got {value}"),
        ))
    }
}

/// Fails unless `value` lies in the open interval (0, 1).
pub(crate) fn ensure_fraction(parameter: &'static str, value: f64) -> MechanismResult<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(MechanismError::configuration(
            parameter,
            format!("must lie strictly between 0 and 1, got {value}"),
        ))
    }
}

// =============================================================================
// TESTS
// =============================================================================
