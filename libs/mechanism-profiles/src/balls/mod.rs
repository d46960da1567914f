//! # Ball Layout
//!
//! Sizes and places the rolling balls of a bearing on the torus centerline.
//!
//! The count is `floor(circumference / ball_diameter)`. Truncating rather
//! than rounding keeps balls from overlapping along the centerline; whatever
//! is left over ends up as one slightly larger final gap.


use crate::error::{ensure_non_negative, MechanismError, MechanismResult};
use config::constants::MAX_BALL_COUNT;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use tracing::{debug, warn};

/// Ball size and placement around the torus centerline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallLayout {
    /// Radius of every ball
    pub ball_radius: f64,
    /// Number of balls; zero when not even one fits
    pub ball_count: usize,
    /// Radius of the circle the ball centers sit on
    pub centerline_radius: f64,
    /// Angular position of each ball in radians, starting at 0
    pub angles: Vec<f64>,
    /// Ball centers in the bearing plane
    pub centers: Vec<DVec2>,
}

impl BallLayout {
    /// Length of the centerline circle.
    pub fn circumference(&self) -> f64 {
        TAU * self.centerline_radius
    }

    /// Angle between neighbouring balls in radians, `None` without balls.
    pub fn angular_spacing(&self) -> Option<f64> {
        (self.ball_count > 0).then(|| TAU / self.ball_count as f64)
    }

    /// Straight-line distance between neighbouring centers, `None` with
    /// fewer than two balls.
    pub fn center_spacing(&self) -> Option<f64> {
        (self.ball_count > 1)
            .then(|| 2.0 * self.centerline_radius * (PI / self.ball_count as f64).sin())
    }

    /// Centerline arc length not covered by ball diameters.
    pub fn residual_clearance(&self) -> f64 {
        self.circumference() - self.ball_count as f64 * 2.0 * self.ball_radius
    }

    /// True when the layout holds no balls.
    pub fn is_empty(&self) -> bool {
        self.ball_count == 0
    }
}

/// Plans ball radius, count and centers for a bearing.
///
/// # Arguments
///
/// * `inner_diameter` - Inner diameter of the ball track
/// * `outer_diameter` - Outer diameter of the ball track
/// * `minimum_object_gap` - Clearance applied symmetrically to both diameters
///
/// # Errors
///
/// [`MechanismError::Configuration`] when the derived ball radius is not
/// positive, the gap is negative, or more than
/// [`MAX_BALL_COUNT`] balls would fit.
///
/// # Example
///
/// ```rust
/// use mechanism_profiles::plan_ball_layout;
///
/// let layout = plan_ball_layout(20.0, 30.0, 0.1).unwrap();
/// assert_eq!(layout.ball_radius, 5.0);
/// assert_eq!(layout.ball_count, 7);
/// ```
pub fn plan_ball_layout(
    inner_diameter: f64,
    outer_diameter: f64,
    minimum_object_gap: f64,
) -> MechanismResult<BallLayout> {
    ensure_non_negative("minimum_object_gap", minimum_object_gap)?;

    let ball_radius = (outer_diameter - inner_diameter) / 2.0;
    if !ball_radius.is_finite() || ball_radius <= 0.0 {
        return Err(MechanismError::configuration(
            "ball_radius",
            format!(
                "outer diameter {outer_diameter} must exceed inner diameter {inner_diameter}"
            ),
        ));
    }

    // The gap widens the track on both sides, leaving its midpoint in place
    let centerline_diameter =
        ((inner_diameter - minimum_object_gap) + (outer_diameter + minimum_object_gap)) / 2.0;
    let centerline_radius = centerline_diameter / 2.0;
    let circumference = PI * centerline_diameter;
    let fitting = (circumference / (2.0 * ball_radius)).floor().max(0.0);
    if fitting > MAX_BALL_COUNT as f64 {
        return Err(MechanismError::configuration(
            "ball_radius",
            format!(
                "{ball_radius} is too small for the track: {fitting} balls exceed the limit of {MAX_BALL_COUNT}"
            ),
        ));
    }
    let ball_count = fitting as usize;

    let angles: Vec<f64> = (0..ball_count)
        .map(|k| TAU * k as f64 / ball_count as f64)
        .collect();
    let centers = angles
        .iter()
        .map(|&angle| DVec2::new(centerline_radius * angle.cos(), centerline_radius * angle.sin()))
        .collect();

    if ball_count == 0 {
        warn!(ball_radius, centerline_radius, "no ball fits on the centerline");
    } else {
        debug!(ball_radius, ball_count, centerline_radius, "ball layout planned");
    }

    Ok(BallLayout {
        ball_radius,
        ball_count,
        centerline_radius,
        angles,
        centers,
    })
}
