//! Compression spring swept along a helix.

use crate::error::MechanismResult;
use crate::geometry::Circle;
use crate::helix::{build_helix_path, HelixFrame, HelixPath};
use serde::{Deserialize, Serialize};

/// User-facing spring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringSpec {
    /// Distance from the axis to the wire center
    pub spring_radius: f64,
    /// Wire radius
    pub coil_radius: f64,
    /// Axial length
    pub height: f64,
    /// Rise per turn
    pub pitch: f64,
}

impl SpringSpec {
    /// Creates a spring spec.
    pub fn new(spring_radius: f64, coil_radius: f64, height: f64, pitch: f64) -> Self {
        Self {
            spring_radius,
            coil_radius,
            height,
            pitch,
        }
    }

    /// Derives the helix and places the cross-section at its start.
    pub fn plan(&self) -> MechanismResult<SpringPlan> {
        let helix = build_helix_path(self.spring_radius, self.coil_radius, self.height, self.pitch)?;
        Ok(SpringPlan {
            spec: *self,
            section_frame: helix.start_frame(),
            cross_section: helix.cross_section(),
            helix,
        })
    }
}

/// Everything needed to sweep one spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringPlan {
    /// Dimensions the plan was derived from
    pub spec: SpringSpec,
    /// Sweep path
    pub helix: HelixPath,
    /// Where the cross-section sits, normal to the path
    pub section_frame: HelixFrame,
    /// The wire cross-section in its own plane
    pub cross_section: Circle,
}
