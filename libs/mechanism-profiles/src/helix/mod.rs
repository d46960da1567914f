//! # Helix Sweep
//!
//! Path and cross-section of a compression spring: a circle of `coil_radius`
//! swept along a right-handed helix of `spring_radius` with zero cone angle.
//!
//! The path is parameterized by `t ∈ [0, 1]`:
//!
//! ```text
//! p(t) = (r cos 2πNt, r sin 2πNt, h t)    N = height / pitch
//! ```


use crate::error::{ensure_positive, MechanismResult};
use crate::geometry::Circle;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::{debug, warn};

/// Position and direction of the path at one parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HelixFrame {
    /// Point on the helix
    pub origin: DVec3,
    /// Unit tangent; the cross-section plane is normal to it
    pub tangent: DVec3,
}

/// A helical sweep path with its constant circular cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HelixPath {
    /// Distance from the spring axis to the wire center
    pub spring_radius: f64,
    /// Radius of the wire cross-section
    pub coil_radius: f64,
    /// Axial length of the spring
    pub height: f64,
    /// Axial rise per full turn
    pub pitch: f64,
}

impl HelixPath {
    /// Number of turns, possibly fractional.
    pub fn turns(&self) -> f64 {
        self.height / self.pitch
    }

    /// Point at parameter `t`, with `t = 0` the bottom and `t = 1` the top.
    pub fn point_at(&self, t: f64) -> DVec3 {
        let angle = TAU * self.turns() * t;
        DVec3::new(
            self.spring_radius * angle.cos(),
            self.spring_radius * angle.sin(),
            self.height * t,
        )
    }

    /// Unit tangent at parameter `t`.
    pub fn tangent_at(&self, t: f64) -> DVec3 {
        let angular_rate = TAU * self.turns();
        let angle = angular_rate * t;
        DVec3::new(
            -self.spring_radius * angular_rate * angle.sin(),
            self.spring_radius * angular_rate * angle.cos(),
            self.height,
        )
        .normalize()
    }

    /// Frame at the start of the path, where the cross-section is placed.
    pub fn start_frame(&self) -> HelixFrame {
        HelixFrame {
            origin: self.point_at(0.0),
            tangent: self.tangent_at(0.0),
        }
    }

    /// Length of wire along the path.
    pub fn wire_length(&self) -> f64 {
        (TAU * self.spring_radius * self.turns()).hypot(self.height)
    }

    /// The wire cross-section in its own plane, centered on the origin.
    pub fn cross_section(&self) -> Circle {
        Circle::new(DVec2::ZERO, self.coil_radius)
    }

    /// `segments + 1` points evenly spaced in `t`, both ends included.
    pub fn sample(&self, segments: usize) -> Vec<DVec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }
}

/// Builds the helix path of a spring.
///
/// Coils that touch their neighbours or cross the axis are legal but logged,
/// since the kernel will produce a fused or self-intersecting sweep.
///
/// # Errors
///
/// [`crate::MechanismError::Configuration`] unless all four inputs are
/// positive and finite.
///
/// # Example
///
/// ```rust
/// use mechanism_profiles::helix::build_helix_path;
///
/// let helix = build_helix_path(10.0, 1.0, 40.0, 8.0).unwrap();
/// assert_eq!(helix.turns(), 5.0);
/// ```
pub fn build_helix_path(
    spring_radius: f64,
    coil_radius: f64,
    height: f64,
    pitch: f64,
) -> MechanismResult<HelixPath> {
    ensure_positive("spring_radius", spring_radius)?;
    ensure_positive("coil_radius", coil_radius)?;
    ensure_positive("height", height)?;
    ensure_positive("pitch", pitch)?;

    if 2.0 * coil_radius >= pitch {
        warn!(coil_radius, pitch, "adjacent coils touch; the spring will print solid");
    }
    if coil_radius >= spring_radius {
        warn!(coil_radius, spring_radius, "coil crosses the spring axis");
    }

    let path = HelixPath {
        spring_radius,
        coil_radius,
        height,
        pitch,
    };
    debug!(
        turns = path.turns(),
        wire_length = path.wire_length(),
        "helix path built"
    );
    Ok(path)
}
