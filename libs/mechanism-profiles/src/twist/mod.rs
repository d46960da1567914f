//! # Twist Law
//!
//! Rotation-per-height rule for twisted extrusions.
//!
//! A profile extruded along +Z is rotated counter-clockwise (seen from +Z)
//! by `rotation_angle_per_unit_height * z` degrees at height `z`. The slider
//! and its cutout share one rate, so the slider follows the cutout's helical
//! track whatever their heights.


use crate::error::{ensure_positive, MechanismError, MechanismResult};
use crate::pattern::PatternProfile;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Twist rate and extrusion height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwistLaw {
    /// Rotation in degrees per unit of extrusion height
    pub rotation_angle_per_unit_height: f64,
    /// Extrusion height
    pub height: f64,
}

impl TwistLaw {
    /// Creates a twist law.
    ///
    /// # Errors
    ///
    /// [`MechanismError::Configuration`] for a non-positive height or a
    /// non-finite rate. A rate of zero is a plain straight extrusion.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mechanism_profiles::twist::TwistLaw;
    ///
    /// let law = TwistLaw::new(5.0, 15.0).unwrap();
    /// assert_eq!(law.total_rotation(), 75.0);
    /// ```
    pub fn new(rotation_angle_per_unit_height: f64, height: f64) -> MechanismResult<Self> {
        ensure_positive("height", height)?;
        if !rotation_angle_per_unit_height.is_finite() {
            return Err(MechanismError::configuration(
                "rotation_angle_per_unit_height",
                format!("must be finite, got {rotation_angle_per_unit_height}"),
            ));
        }
        Ok(Self {
            rotation_angle_per_unit_height,
            height,
        })
    }

    /// Total rotation in degrees between the bottom and top faces.
    pub fn total_rotation(&self) -> f64 {
        self.rotation_angle_per_unit_height * self.height
    }

    /// Rotation in degrees at height `z` above the bottom face.
    pub fn rotation_at(&self, z: f64) -> f64 {
        self.rotation_angle_per_unit_height * z
    }

    /// Same rate over a different height.
    pub fn with_height(&self, height: f64) -> MechanismResult<Self> {
        Self::new(self.rotation_angle_per_unit_height, height)
    }
}

/// A planar profile paired with the twist it is extruded with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwistedExtrusion {
    /// Cross-section at the bottom face
    pub profile: PatternProfile,
    /// Rate and height of the extrusion
    pub twist: TwistLaw,
}

impl TwistedExtrusion {
    /// Pairs a profile with its twist law.
    pub fn new(profile: PatternProfile, twist: TwistLaw) -> Self {
        debug!(
            gap = profile.gap,
            height = twist.height,
            total_rotation = twist.total_rotation(),
            "twisted extrusion"
        );
        Self { profile, twist }
    }

    /// Extrusion height.
    pub fn height(&self) -> f64 {
        self.twist.height
    }

    /// Total rotation in degrees over the height.
    pub fn total_rotation(&self) -> f64 {
        self.twist.total_rotation()
    }
}
