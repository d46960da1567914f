//! # Geometry Kernel
//!
//! The interface a solid-modelling backend implements so the recipes can
//! drive it. Every argument is fully formed data from `mechanism-profiles`;
//! the kernel only turns it into solids.
//!
//! ## Conventions
//!
//! - Lengths in model units, angles in degrees, counter-clockwise positive
//! - Solids are handles: cheap to clone, owned by the kernel
//! - Operations take `&mut self` so a kernel may cache or record freely

#[cfg(test)]
mod tests;

use glam::DVec3;
use mechanism_profiles::geometry::{Circle, PlanarRegion, Polygon2D};
use mechanism_profiles::helix::{HelixFrame, HelixPath};
use mechanism_profiles::plans::CircleSection;
use std::fmt;
use std::path::Path;

/// Output file formats a kernel can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Triangle mesh, for slicers
    Stl,
    /// Boundary representation, for CAD tools
    Step,
}

impl ExportFormat {
    /// File extension without the dot.
    ///
    /// ```rust
    /// use mechanism_assembly::ExportFormat;
    /// assert_eq!(ExportFormat::Stl.extension(), "stl");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Stl => "stl",
            Self::Step => "step",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stl => write!(f, "STL"),
            Self::Step => write!(f, "STEP"),
        }
    }
}

/// A solid-modelling backend.
pub trait GeometryKernel {
    /// Handle to a solid owned by the kernel.
    type Solid: Clone;
    /// Error reported by failed operations.
    type Error: std::error::Error + 'static;

    /// Revolves a closed profile about the Z axis.
    ///
    /// The profile's x is the distance from the axis and its y the height.
    fn revolve(&mut self, profile: &Polygon2D, angle_degrees: f64)
        -> Result<Self::Solid, Self::Error>;

    /// Extrudes a region from z = 0 to `height`, rotating it linearly to
    /// `twist_degrees` at the top.
    fn extrude_with_twist(
        &mut self,
        region: &PlanarRegion,
        height: f64,
        twist_degrees: f64,
    ) -> Result<Self::Solid, Self::Error>;

    /// Sweeps a cross-section, placed at `frame` normal to the path, along
    /// a helix.
    fn sweep(
        &mut self,
        section: &Circle,
        frame: &HelixFrame,
        path: &HelixPath,
    ) -> Result<Self::Solid, Self::Error>;

    /// Lofts through horizontal circles in order of increasing height.
    fn loft(&mut self, sections: &[CircleSection]) -> Result<Self::Solid, Self::Error>;

    /// Cylinder about the Z axis from `bottom_z` up by `height`.
    fn cylinder(
        &mut self,
        radius: f64,
        bottom_z: f64,
        height: f64,
    ) -> Result<Self::Solid, Self::Error>;

    /// Sphere at `center`.
    fn sphere(&mut self, center: DVec3, radius: f64) -> Result<Self::Solid, Self::Error>;

    /// Boolean union.
    fn union(&mut self, a: &Self::Solid, b: &Self::Solid) -> Result<Self::Solid, Self::Error>;

    /// Boolean difference `base - tool`.
    fn subtract(
        &mut self,
        base: &Self::Solid,
        tool: &Self::Solid,
    ) -> Result<Self::Solid, Self::Error>;

    /// Writes a solid to `path`.
    fn export(
        &mut self,
        solid: &Self::Solid,
        path: &Path,
        format: ExportFormat,
    ) -> Result<(), Self::Error>;
}
