//! # Raceway Profile
//!
//! Computes the axisymmetric cross-section of a ball-bearing raceway cavity
//! together with its insertion opening.
//!
//! ## Wall Model
//!
//! The cavity wall is a half-width `x(z)` over `z ∈ [-H/2, H/2]`, made of
//! three regimes whose boundaries follow from tangency rather than choice:
//!
//! ```text
//!   z
//!   ^   clamp   |x| = opening_radius            (|z| > min_gap_height)
//!   |   line    slope -tan(overhang), through (opening_radius, min_gap_height)
//!   |   ellipse x_radius = ball + 2 gap, z_radius = x_radius * curvature
//!   +-----------------> x
//! ```
//!
//! Each sample is classified with [`WallGeometry::region_for`] and then
//! evaluated with that region's formula. The loop handed to the kernel is the
//! inner branch (`R - x`) bottom to top followed by the outer branch
//! (`R + x`) top to bottom; the end caps are the implicit closing edges.


use crate::error::{ensure_positive, MechanismError, MechanismResult};
use crate::geometry::Polygon2D;
use config::constants::{GenerationConfig, OVERHANG_ANGLE_DEGREES};
use glam::DVec2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Inputs to [`build_raceway_profile`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RacewayParams {
    /// Radius of the rolling balls
    pub ball_radius: f64,
    /// Clearance kept between the balls and the cavity wall
    pub minimum_object_gap: f64,
    /// Vertical to horizontal radius ratio of the cavity ellipse (>= 1)
    pub vertical_curvature_ratio: f64,
    /// Width of the slot through the enclosure faces
    pub opening_size: f64,
    /// Height of the enclosure the raceway is cut into
    pub enclosure_height: f64,
    /// Radius of the circle traced by the ball centers
    pub torus_center_radius: f64,
}

/// Which formula governs the wall at a given height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallRegion {
    /// Beyond the gap height: the wall sits at the opening radius
    Clamp,
    /// Overhang-limited straight wall near the opening
    Line,
    /// Elliptical wall around the equator
    Ellipse,
}

/// Derived radii and the overhang line of a raceway wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallGeometry {
    /// Horizontal ellipse radius: ball radius plus two gaps
    pub ellipse_x_radius: f64,
    /// Vertical ellipse radius: horizontal radius times curvature ratio
    pub ellipse_z_radius: f64,
    /// Half the opening size
    pub opening_radius: f64,
    /// Height at which the gap-inflated ball grazes the opening
    pub min_gap_height: f64,
    /// dx/d|z| of the overhang line
    pub line_slope: f64,
    /// Wall radius of the overhang line at z = 0
    pub line_intercept: f64,
}

impl WallGeometry {
    /// Derives the wall geometry, checking every feasibility condition.
    pub fn derive(params: &RacewayParams) -> MechanismResult<Self> {
        ensure_positive("ball_radius", params.ball_radius)?;
        ensure_positive("minimum_object_gap", params.minimum_object_gap)?;
        ensure_positive("vertical_curvature_ratio", params.vertical_curvature_ratio)?;
        ensure_positive("opening_size", params.opening_size)?;
        ensure_positive("enclosure_height", params.enclosure_height)?;
        ensure_positive("torus_center_radius", params.torus_center_radius)?;

        if params.opening_size > 2.0 * params.ball_radius {
            return Err(MechanismError::infeasible(format!(
                "opening size {} exceeds ball diameter {}",
                params.opening_size,
                2.0 * params.ball_radius
            )));
        }
        if params.vertical_curvature_ratio < 1.0 {
            return Err(MechanismError::infeasible(format!(
                "vertical curvature ratio {} is below 1",
                params.vertical_curvature_ratio
            )));
        }

        let gap = params.minimum_object_gap;
        let ellipse_x_radius = params.ball_radius + 2.0 * gap;
        let ellipse_z_radius = ellipse_x_radius * params.vertical_curvature_ratio;
        let opening_radius = params.opening_size / 2.0;
        let inflated = params.ball_radius + gap;
        let min_gap_height = (inflated * inflated - opening_radius * opening_radius).sqrt();

        if !ellipse_z_radius.is_finite() || !min_gap_height.is_finite() {
            return Err(MechanismError::infeasible(format!(
                "derived radii are not finite (ellipse z radius {ellipse_z_radius}, \
                 gap height {min_gap_height})"
            )));
        }

        let half_height = params.enclosure_height / 2.0;
        if min_gap_height > half_height {
            return Err(MechanismError::infeasible(format!(
                "gap height {min_gap_height:.4} exceeds half the enclosure height {half_height:.4}"
            )));
        }

        let line_slope = -OVERHANG_ANGLE_DEGREES.to_radians().tan();
        let line_intercept = opening_radius - line_slope * min_gap_height;

        let geometry = Self {
            ellipse_x_radius,
            ellipse_z_radius,
            opening_radius,
            min_gap_height,
            line_slope,
            line_intercept,
        };

        // The inner branch must stay on the positive side of the revolve axis
        let widest = geometry.wall_radius(0.0);
        if widest >= params.torus_center_radius {
            return Err(MechanismError::infeasible(format!(
                "cavity half-width {widest:.4} reaches the axis at torus radius {}",
                params.torus_center_radius
            )));
        }

        Ok(geometry)
    }

    /// Elliptical wall radius, `None` where the ellipse does not reach `z`.
    pub fn ellipse_radius(&self, z: f64) -> Option<f64> {
        let ratio = z / self.ellipse_z_radius;
        if ratio.abs() > 1.0 {
            return None;
        }
        Some(self.ellipse_x_radius * (1.0 - ratio * ratio).sqrt())
    }

    /// Overhang line wall radius, symmetric in `z`.
    pub fn line_radius(&self, z: f64) -> f64 {
        (self.line_intercept + self.line_slope * z.abs()).abs()
    }

    /// Classifies the wall regime at height `z`.
    ///
    /// The line wins wherever it is the tighter bound or the ellipse is
    /// undefined, which blends the two without a kink.
    pub fn region_for(&self, z: f64) -> WallRegion {
        if z.abs() > self.min_gap_height {
            return WallRegion::Clamp;
        }
        match self.ellipse_radius(z) {
            Some(ellipse) if self.line_radius(z) >= ellipse => WallRegion::Ellipse,
            _ => WallRegion::Line,
        }
    }

    /// Wall half-width at height `z`.
    pub fn wall_radius(&self, z: f64) -> f64 {
        match self.region_for(z) {
            WallRegion::Clamp => self.opening_radius,
            WallRegion::Line => self.line_radius(z),
            WallRegion::Ellipse => self
                .ellipse_radius(z)
                .unwrap_or_else(|| self.line_radius(z)),
        }
    }
}

/// Sampled raceway wall ready to be revolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacewayProfile {
    /// Radius of the circle traced by the ball centers
    pub torus_center_radius: f64,
    /// Height of the enclosure
    pub enclosure_height: f64,
    /// Derived wall geometry
    pub geometry: WallGeometry,
    /// `(radial_offset, axial_height)` pairs ordered by increasing height
    pub samples: Vec<DVec2>,
}

impl RacewayProfile {
    /// Number of wall samples.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Wall points nearest the axis (`R - x`), bottom to top.
    pub fn inner_branch(&self) -> Vec<DVec2> {
        self.samples
            .iter()
            .map(|s| DVec2::new(self.torus_center_radius - s.x, s.y))
            .collect()
    }

    /// Wall points away from the axis (`R + x`), top to bottom.
    pub fn outer_branch(&self) -> Vec<DVec2> {
        self.samples
            .iter()
            .rev()
            .map(|s| DVec2::new(self.torus_center_radius + s.x, s.y))
            .collect()
    }

    /// The closed cavity loop in the radial (x) / axial (y) plane.
    pub fn closed_loop(&self) -> Polygon2D {
        let mut outer = self.inner_branch();
        outer.extend(self.outer_branch());
        Polygon2D::new(outer)
    }

    /// Widest half-width over all samples.
    pub fn max_half_width(&self) -> f64 {
        self.samples.iter().map(|s| s.x).fold(0.0_f64, f64::max)
    }
}

/// Builds the raceway wall profile.
///
/// # Arguments
///
/// * `params` - Ball, gap, opening and enclosure dimensions
/// * `config` - Sampling density and tolerance
///
/// # Errors
///
/// [`MechanismError::Configuration`] for non-positive inputs and
/// [`MechanismError::InfeasibleGeometry`] when the opening is wider than the
/// ball, the curvature ratio is below 1, or the gap height exceeds half the
/// enclosure height.
///
/// # Example
///
/// ```rust
/// use config::constants::GenerationConfig;
/// use mechanism_profiles::raceway::{build_raceway_profile, RacewayParams};
///
/// let params = RacewayParams {
///     ball_radius: 5.0,
///     minimum_object_gap: 0.1,
///     vertical_curvature_ratio: 1.5,
///     opening_size: 4.0,
///     enclosure_height: 10.0,
///     torus_center_radius: 12.5,
/// };
/// let profile = build_raceway_profile(&params, &GenerationConfig::default()).unwrap();
/// assert_eq!(profile.closed_loop().vertex_count(), 2 * profile.sample_count());
/// ```
pub fn build_raceway_profile(
    params: &RacewayParams,
    config: &GenerationConfig,
) -> MechanismResult<RacewayProfile> {
    let config =
        GenerationConfig::new(config.tolerance, config.profile_samples, config.arc_fragments)?;
    let geometry = WallGeometry::derive(params)?;

    debug!(
        ellipse_x_radius = geometry.ellipse_x_radius,
        ellipse_z_radius = geometry.ellipse_z_radius,
        opening_radius = geometry.opening_radius,
        min_gap_height = geometry.min_gap_height,
        samples = config.profile_samples,
        "raceway wall geometry derived"
    );

    let half_height = params.enclosure_height / 2.0;
    let last = (config.profile_samples - 1) as i64;

    // Sample i and sample last - i have exactly negated z
    let samples: Vec<DVec2> = (0..config.profile_samples)
        .into_par_iter()
        .map(|i| {
            let z = half_height * (2 * i as i64 - last) as f64 / last as f64;
            let x = geometry.wall_radius(z);
            trace!(i, z, x, "raceway sample");
            DVec2::new(x, z)
        })
        .collect();

    Ok(RacewayProfile {
        torus_center_radius: params.torus_center_radius,
        enclosure_height: params.enclosure_height,
        geometry,
        samples,
    })
}
