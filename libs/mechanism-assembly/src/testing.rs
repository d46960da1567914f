//! In-memory kernel that records every call instead of building geometry.

use crate::kernel::{ExportFormat, GeometryKernel};
use glam::DVec3;
use mechanism_profiles::geometry::{Circle, PlanarRegion, Polygon2D};
use mechanism_profiles::helix::{HelixFrame, HelixPath};
use mechanism_profiles::plans::CircleSection;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One recorded kernel call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Revolve {
        vertices: usize,
        angle: f64,
    },
    Extrude {
        outlines: usize,
        height: f64,
        twist: f64,
    },
    Sweep {
        radius: f64,
        origin: DVec3,
        turns: f64,
    },
    Loft {
        sections: Vec<CircleSection>,
    },
    Cylinder {
        radius: f64,
        bottom_z: f64,
        height: f64,
    },
    Sphere {
        center: DVec3,
        radius: f64,
    },
    Union {
        a: usize,
        b: usize,
    },
    Subtract {
        base: usize,
        tool: usize,
    },
    Export {
        solid: usize,
        path: PathBuf,
        format: ExportFormat,
    },
}

#[derive(Debug, Error, PartialEq)]
#[error("{0} rejected")]
pub struct Rejected(pub &'static str);

/// Solids are numbered in creation order.
#[derive(Debug, Default)]
pub struct RecordingKernel {
    pub ops: Vec<Op>,
    fail_on: Option<&'static str>,
    solids: usize,
}

impl RecordingKernel {
    pub fn failing_on(operation: &'static str) -> Self {
        Self {
            fail_on: Some(operation),
            ..Self::default()
        }
    }

    fn record(&mut self, name: &'static str, op: Op) -> Result<usize, Rejected> {
        if self.fail_on == Some(name) {
            return Err(Rejected(name));
        }
        self.ops.push(op);
        let id = self.solids;
        self.solids += 1;
        Ok(id)
    }

    pub fn count(&self, predicate: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| predicate(op)).count()
    }
}

impl GeometryKernel for RecordingKernel {
    type Solid = usize;
    type Error = Rejected;

    fn revolve(&mut self, profile: &Polygon2D, angle_degrees: f64) -> Result<usize, Rejected> {
        self.record(
            "revolve",
            Op::Revolve {
                vertices: profile.vertex_count(),
                angle: angle_degrees,
            },
        )
    }

    fn extrude_with_twist(
        &mut self,
        region: &PlanarRegion,
        height: f64,
        twist_degrees: f64,
    ) -> Result<usize, Rejected> {
        self.record(
            "extrude_with_twist",
            Op::Extrude {
                outlines: region.outlines.len(),
                height,
                twist: twist_degrees,
            },
        )
    }

    fn sweep(
        &mut self,
        section: &Circle,
        frame: &HelixFrame,
        path: &HelixPath,
    ) -> Result<usize, Rejected> {
        self.record(
            "sweep",
            Op::Sweep {
                radius: section.radius,
                origin: frame.origin,
                turns: path.turns(),
            },
        )
    }

    fn loft(&mut self, sections: &[CircleSection]) -> Result<usize, Rejected> {
        self.record(
            "loft",
            Op::Loft {
                sections: sections.to_vec(),
            },
        )
    }

    fn cylinder(&mut self, radius: f64, bottom_z: f64, height: f64) -> Result<usize, Rejected> {
        self.record(
            "cylinder",
            Op::Cylinder {
                radius,
                bottom_z,
                height,
            },
        )
    }

    fn sphere(&mut self, center: DVec3, radius: f64) -> Result<usize, Rejected> {
        self.record("sphere", Op::Sphere { center, radius })
    }

    fn union(&mut self, a: &usize, b: &usize) -> Result<usize, Rejected> {
        self.record("union", Op::Union { a: *a, b: *b })
    }

    fn subtract(&mut self, base: &usize, tool: &usize) -> Result<usize, Rejected> {
        self.record(
            "subtract",
            Op::Subtract {
                base: *base,
                tool: *tool,
            },
        )
    }

    fn export(&mut self, solid: &usize, path: &Path, format: ExportFormat) -> Result<(), Rejected> {
        if self.fail_on == Some("export") {
            return Err(Rejected("export"));
        }
        self.ops.push(Op::Export {
            solid: *solid,
            path: path.to_path_buf(),
            format,
        });
        Ok(())
    }
}
