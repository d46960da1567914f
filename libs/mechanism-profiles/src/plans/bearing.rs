//! Ball bearing: a block with a toroidal raceway, open at both faces, and
//! the balls that ride in it.

use crate::balls::{plan_ball_layout, BallLayout};
use crate::error::{ensure_positive, MechanismError, MechanismResult};
use crate::raceway::{build_raceway_profile, RacewayParams, RacewayProfile};
use config::constants::{
    GenerationConfig, DEFAULT_MINIMUM_OBJECT_GAP, DEFAULT_OPENING_SIZE,
    DEFAULT_VERTICAL_CURVATURE_RATIO, ENCLOSURE_WIDTH_FACTOR,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// User-facing bearing dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingSpec {
    /// Inner diameter of the ball track
    pub inner_diameter: f64,
    /// Outer diameter of the ball track
    pub outer_diameter: f64,
    /// Height of the enclosure block
    pub enclosure_height: f64,
    /// Vertical to horizontal radius ratio of the raceway ellipse
    pub vertical_curvature_ratio: f64,
    /// Width of the slot through both faces
    pub opening_size: f64,
    /// Clearance between balls and walls
    pub minimum_object_gap: f64,
}

impl BearingSpec {
    /// Creates a spec with the default curvature, opening and gap.
    pub fn new(inner_diameter: f64, outer_diameter: f64, enclosure_height: f64) -> Self {
        Self {
            inner_diameter,
            outer_diameter,
            enclosure_height,
            vertical_curvature_ratio: DEFAULT_VERTICAL_CURVATURE_RATIO,
            opening_size: DEFAULT_OPENING_SIZE,
            minimum_object_gap: DEFAULT_MINIMUM_OBJECT_GAP,
        }
    }

    /// Sets the vertical curvature ratio.
    pub fn with_vertical_curvature_ratio(mut self, ratio: f64) -> Self {
        self.vertical_curvature_ratio = ratio;
        self
    }

    /// Sets the opening size.
    pub fn with_opening_size(mut self, opening_size: f64) -> Self {
        self.opening_size = opening_size;
        self
    }

    /// Sets the minimum object gap.
    pub fn with_minimum_object_gap(mut self, gap: f64) -> Self {
        self.minimum_object_gap = gap;
        self
    }

    /// Radius of the enclosure block.
    pub fn enclosure_radius(&self) -> f64 {
        self.outer_diameter * ENCLOSURE_WIDTH_FACTOR / 2.0
    }

    /// Checks the dimensions on their own, before any geometry is derived.
    pub fn validate(&self) -> MechanismResult<()> {
        ensure_positive("inner_diameter", self.inner_diameter)?;
        ensure_positive("outer_diameter", self.outer_diameter)?;
        ensure_positive("enclosure_height", self.enclosure_height)?;
        ensure_positive("vertical_curvature_ratio", self.vertical_curvature_ratio)?;
        ensure_positive("opening_size", self.opening_size)?;
        ensure_positive("minimum_object_gap", self.minimum_object_gap)?;
        if self.inner_diameter >= self.outer_diameter {
            return Err(MechanismError::configuration(
                "outer_diameter",
                format!(
                    "must exceed inner diameter {}, got {}",
                    self.inner_diameter, self.outer_diameter
                ),
            ));
        }
        Ok(())
    }

    /// Derives the ball layout, raceway wall and enclosure.
    ///
    /// # Errors
    ///
    /// Any configuration or feasibility error of the layout or raceway, and
    /// [`MechanismError::InfeasibleGeometry`] when neighbouring balls overlap
    /// or the raceway cuts through the side of the block.
    pub fn plan(&self, config: &GenerationConfig) -> MechanismResult<BearingPlan> {
        self.validate()?;
        let layout = plan_ball_layout(
            self.inner_diameter,
            self.outer_diameter,
            self.minimum_object_gap,
        )?;
        let diameter = 2.0 * layout.ball_radius;
        if let Some(spacing) = layout.center_spacing() {
            if spacing < diameter {
                return Err(MechanismError::infeasible(format!(
                    "{} balls of diameter {diameter:.4} overlap: neighbouring centers are {spacing:.4} apart",
                    layout.ball_count
                )));
            }
        }
        let raceway = build_raceway_profile(
            &RacewayParams {
                ball_radius: layout.ball_radius,
                minimum_object_gap: self.minimum_object_gap,
                vertical_curvature_ratio: self.vertical_curvature_ratio,
                opening_size: self.opening_size,
                enclosure_height: self.enclosure_height,
                torus_center_radius: layout.centerline_radius,
            },
            config,
        )?;

        let enclosure = EnclosureBlock {
            radius: self.enclosure_radius(),
            height: self.enclosure_height,
        };
        let outer_wall = raceway.torus_center_radius + raceway.max_half_width();
        if outer_wall >= enclosure.radius {
            return Err(MechanismError::infeasible(format!(
                "raceway reaches radius {outer_wall:.4}, beyond the enclosure radius {:.4}",
                enclosure.radius
            )));
        }

        debug!(
            balls = layout.ball_count,
            ball_radius = layout.ball_radius,
            enclosure_radius = enclosure.radius,
            "bearing planned"
        );

        Ok(BearingPlan {
            spec: *self,
            layout,
            raceway,
            enclosure,
        })
    }
}

/// The solid cylinder the raceway is cut from, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnclosureBlock {
    /// Cylinder radius
    pub radius: f64,
    /// Cylinder height, spanning `[-height/2, height/2]`
    pub height: f64,
}

impl EnclosureBlock {
    /// Z coordinate of the bottom face.
    pub fn bottom_z(&self) -> f64 {
        -self.height / 2.0
    }
}

/// Everything needed to build one bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingPlan {
    /// Dimensions the plan was derived from
    pub spec: BearingSpec,
    /// Ball size and positions
    pub layout: BallLayout,
    /// Sampled raceway wall
    pub raceway: RacewayProfile,
    /// Enclosure block
    pub enclosure: EnclosureBlock,
}
