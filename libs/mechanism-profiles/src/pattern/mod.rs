//! # Twisted Pattern Profile
//!
//! Builds the pinwheel cross-section of a twisted slider: one "paddle"
//! replicated around the origin, unioned with a central hub.
//!
//! ## Paddle
//!
//! ```text
//!                 ___
//!        ______--    \      half-circle tip, radius f*R + gap
//!   (-g,0)            |     centered at (s*R, 0)
//!   (0,0)--(g,0)      |
//!         \_______   /
//!                 ---
//! ```
//!
//! A clearance variant (`gap > 0`) is inflated by construction: a radial stub
//! of length `gap`, diagonals shifted outward by `gap`, and a larger tip
//! radius. Corners stay sharp, unlike a uniform offset.

#[cfg(test)]
mod tests;

use crate::error::{
    ensure_fraction, ensure_non_negative, ensure_positive, MechanismError, MechanismResult,
};
use crate::geometry::{
    chain_segments, rotate_point, Circle, PlanarRegion, Polygon2D, ProfileSegment,
};
use config::constants::{
    GenerationConfig, DEFAULT_NUMBER_OF_PATTERNS, DEFAULT_RADIUS_FRACTION,
    DEFAULT_STRAIGHT_FRACTION, GAP_TOLERANCE, HUB_RADIUS_DIVISOR,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Shape parameters shared by the solid and clearance variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternParams {
    /// Radius of the pattern
    pub pattern_radius: f64,
    /// Fraction of the radius at which the paddle tip is centered, in (0, 1)
    pub straight_fraction: f64,
    /// Paddle tip radius as a fraction of the pattern radius, in (0, 1)
    pub radius_fraction: f64,
    /// Number of paddles, at least 2
    pub number_of_patterns: u32,
}

impl PatternParams {
    /// Creates parameters with the default paddle shape and count.
    pub fn new(pattern_radius: f64) -> Self {
        Self {
            pattern_radius,
            straight_fraction: DEFAULT_STRAIGHT_FRACTION,
            radius_fraction: DEFAULT_RADIUS_FRACTION,
            number_of_patterns: DEFAULT_NUMBER_OF_PATTERNS,
        }
    }

    /// Checks every parameter's domain.
    pub fn validate(&self) -> MechanismResult<()> {
        ensure_positive("pattern_radius", self.pattern_radius)?;
        ensure_fraction("straight_fraction", self.straight_fraction)?;
        ensure_fraction("radius_fraction", self.radius_fraction)?;
        if self.number_of_patterns < 2 {
            return Err(MechanismError::configuration(
                "number_of_patterns",
                format!("must be at least 2, got {}", self.number_of_patterns),
            ));
        }
        Ok(())
    }

    /// Center of the paddle tip arc.
    pub fn tip_center(&self) -> DVec2 {
        DVec2::new(self.straight_fraction * self.pattern_radius, 0.0)
    }

    /// Paddle tip radius for the given gap.
    pub fn tip_radius(&self, gap: f64) -> f64 {
        self.radius_fraction * self.pattern_radius + gap
    }

    /// Hub radius for the given gap.
    pub fn hub_radius(&self, gap: f64) -> f64 {
        self.pattern_radius / HUB_RADIUS_DIVISOR + gap
    }
}

/// Rotation angles of the copies made from the base paddle.
///
/// Equally spaced angles strictly between 0 and 360 degrees; the base paddle
/// itself sits at 0.
///
/// ```rust
/// use mechanism_profiles::pattern::replica_angles;
/// assert_eq!(replica_angles(4), vec![90.0, 180.0, 270.0]);
/// ```
pub fn replica_angles(number_of_patterns: u32) -> Vec<f64> {
    (1..number_of_patterns)
        .map(|k| 360.0 * k as f64 / number_of_patterns as f64)
        .collect()
}

/// Exact segments of the base paddle, counter-clockwise from the origin.
///
/// The stub and its closing segment are only emitted when `gap` exceeds
/// [`GAP_TOLERANCE`].
pub fn paddle_segments(params: &PatternParams, gap: f64) -> Vec<ProfileSegment> {
    let has_stub = gap > GAP_TOLERANCE;
    let tip_center = params.tip_center();
    let tip_radius = params.tip_radius(gap);
    let tip_start = DVec2::new(tip_center.x, -tip_radius);

    let origin = DVec2::ZERO;
    let stub_end = if has_stub { DVec2::new(gap, 0.0) } else { origin };
    let return_point = DVec2::new(-gap, 0.0);

    let mut segments = Vec::with_capacity(5);
    if has_stub {
        segments.push(ProfileSegment::line(origin, stub_end));
    }
    segments.push(ProfileSegment::line(stub_end, tip_start));
    let tip = ProfileSegment::arc(tip_center, tip_radius, 270.0, 180.0);
    segments.push(tip);
    segments.push(ProfileSegment::line(tip.end(), return_point));
    if has_stub {
        segments.push(ProfileSegment::line(return_point, origin));
    }
    segments
}

/// One variant (solid or clearance) of the pinwheel cross-section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternProfile {
    /// Shape parameters
    pub params: PatternParams,
    /// Outward inflation; 0 for the solid variant
    pub gap: f64,
    /// Exact segments of the base paddle
    pub paddle: Vec<ProfileSegment>,
    /// Tessellated base paddle
    pub outline: Polygon2D,
    /// Central hub
    pub hub: Circle,
    /// Tessellated hub
    pub hub_outline: Polygon2D,
    /// Rotations, in degrees, of the copies of the base paddle
    pub replica_angles: Vec<f64>,
}

impl PatternProfile {
    /// Total number of paddles, base included.
    pub fn paddle_count(&self) -> usize {
        self.replica_angles.len() + 1
    }

    /// Angle between neighbouring paddles in degrees.
    pub fn angular_spacing(&self) -> f64 {
        360.0 / self.params.number_of_patterns as f64
    }

    /// Angles of every paddle, starting with the base at 0.
    pub fn paddle_angles(&self) -> Vec<f64> {
        std::iter::once(0.0)
            .chain(self.replica_angles.iter().copied())
            .collect()
    }

    /// True when the clearance stub was emitted.
    pub fn has_stub(&self) -> bool {
        self.gap > GAP_TOLERANCE
    }

    /// Tessellated outline of every paddle.
    pub fn paddle_outlines(&self) -> Vec<Polygon2D> {
        self.paddle_angles()
            .into_iter()
            .map(|angle| self.outline.rotated(angle))
            .collect()
    }

    /// The full planar region: every paddle plus the hub.
    pub fn region(&self) -> PlanarRegion {
        let mut outlines = self.paddle_outlines();
        outlines.push(self.hub_outline.clone());
        PlanarRegion::new(outlines)
    }

    /// True when the point lies inside the unioned region.
    pub fn contains(&self, point: DVec2) -> bool {
        self.hub.contains(point)
            || self
                .paddle_angles()
                .into_iter()
                .any(|angle| self.outline.contains(rotate_point(point, -angle)))
    }

    /// Farthest distance from the origin reached by the exact region.
    pub fn max_extent(&self) -> f64 {
        let tip = self.params.tip_center().x + self.params.tip_radius(self.gap);
        tip.max(self.hub.radius)
    }
}

/// Builds one variant of the pattern profile.
///
/// # Arguments
///
/// * `params` - Shape parameters shared by both variants
/// * `gap` - 0 for the solid body, the clearance for the cavity
/// * `config` - Arc tessellation and tolerance
///
/// # Errors
///
/// [`MechanismError::Configuration`] for fewer than 2 patterns, fractions
/// outside (0, 1), a non-positive radius or a negative gap.
///
/// # Example
///
/// ```rust
/// use config::constants::GenerationConfig;
/// use mechanism_profiles::pattern::{build_pattern_profile, PatternParams};
///
/// let solid = build_pattern_profile(&PatternParams::new(15.0), 0.0, &GenerationConfig::default())
///     .unwrap();
/// assert_eq!(solid.paddle_count(), 6);
/// assert_eq!(solid.paddle_angles()[1], 60.0);
/// ```
pub fn build_pattern_profile(
    params: &PatternParams,
    gap: f64,
    config: &GenerationConfig,
) -> MechanismResult<PatternProfile> {
    params.validate()?;
    ensure_non_negative("gap", gap)?;
    let config =
        GenerationConfig::new(config.tolerance, config.profile_samples, config.arc_fragments)?;

    let paddle = paddle_segments(params, gap);
    let tip_radius = params.tip_radius(gap);
    let outline = chain_segments(&paddle, config.circle_fragments(tip_radius), config.tolerance);

    let hub = Circle::new(DVec2::ZERO, params.hub_radius(gap));
    let hub_outline = hub.to_polygon(config.circle_fragments(hub.radius));
    let replica_angles = replica_angles(params.number_of_patterns);

    debug!(
        gap,
        paddles = replica_angles.len() + 1,
        stub = gap > GAP_TOLERANCE,
        tip_radius,
        hub_radius = hub.radius,
        outline_vertices = outline.vertex_count(),
        "pattern profile built"
    );

    Ok(PatternProfile {
        params: *params,
        gap,
        paddle,
        outline,
        hub,
        hub_outline,
        replica_angles,
    })
}

/// Builds the solid and clearance variants from the same parameters.
///
/// # Errors
///
/// As [`build_pattern_profile`], plus [`MechanismError::Configuration`] when
/// `enclosure_gap` is not positive.
pub fn build_pattern_pair(
    params: &PatternParams,
    enclosure_gap: f64,
    config: &GenerationConfig,
) -> MechanismResult<(PatternProfile, PatternProfile)> {
    ensure_positive("enclosure_gap", enclosure_gap)?;
    let solid = build_pattern_profile(params, 0.0, config)?;
    let clearance = build_pattern_profile(params, enclosure_gap, config)?;
    Ok((solid, clearance))
}
