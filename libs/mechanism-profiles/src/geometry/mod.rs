//! # Planar Geometry
//!
//! Small 2D building blocks shared by the profile builders:
//! - **Polygon2D**: a closed outline, implicitly closed (last vertex joins the first)
//! - **Circle**: center and radius, tessellated on demand
//! - **ProfileSegment**: exact line and arc segments of a composite curve
//! - **PlanarRegion**: a union of outlines handed to the kernel as one region
//!
//! Angles are in degrees throughout, matching the kernel interface.


use glam::DVec2;
use serde::{Deserialize, Serialize};

// =============================================================================
// ANGLE HELPERS
// =============================================================================

/// Cosine of an angle in degrees, exact at multiples of 90.
///
/// Quarter turns come up constantly (arc endpoints, 180 degree replicas) and
/// `cos(PI / 2)` is not zero in floating point.
pub fn cos_degrees(degrees: f64) -> f64 {
    match quarter_turns(degrees) {
        Some(0) => 1.0,
        Some(1) | Some(3) => 0.0,
        Some(2) => -1.0,
        _ => degrees.to_radians().cos(),
    }
}

/// Sine of an angle in degrees, exact at multiples of 90.
pub fn sin_degrees(degrees: f64) -> f64 {
    match quarter_turns(degrees) {
        Some(1) => 1.0,
        Some(0) | Some(2) => 0.0,
        Some(3) => -1.0,
        _ => degrees.to_radians().sin(),
    }
}

fn quarter_turns(degrees: f64) -> Option<u8> {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped % 90.0 == 0.0 {
        Some((wrapped / 90.0) as u8)
    } else {
        None
    }
}

/// Unit vector pointing at `degrees` counter-clockwise from +X.
pub fn direction(degrees: f64) -> DVec2 {
    DVec2::new(cos_degrees(degrees), sin_degrees(degrees))
}

/// Rotates a point counter-clockwise about the origin.
pub fn rotate_point(point: DVec2, degrees: f64) -> DVec2 {
    let cos = cos_degrees(degrees);
    let sin = sin_degrees(degrees);
    DVec2::new(point.x * cos - point.y * sin, point.x * sin + point.y * cos)
}

// =============================================================================
// POLYGON
// =============================================================================

/// A closed 2D outline.
///
/// The closing edge from the last vertex back to the first is implicit.
/// Orientation is set by the producer; [`Polygon2D::signed_area`] reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon2D {
    /// Outline vertices
    pub outer: Vec<DVec2>,
}

impl Polygon2D {
    /// Creates a polygon from outline vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use mechanism_profiles::geometry::Polygon2D;
    ///
    /// let square = Polygon2D::new(vec![
    ///     DVec2::new(0.0, 0.0),
    ///     DVec2::new(1.0, 0.0),
    ///     DVec2::new(1.0, 1.0),
    ///     DVec2::new(0.0, 1.0),
    /// ]);
    /// assert_eq!(square.signed_area(), 1.0);
    /// ```
    pub fn new(outer: Vec<DVec2>) -> Self {
        Self { outer }
    }

    /// Returns the number of vertices in the outline.
    pub fn vertex_count(&self) -> usize {
        self.outer.len()
    }

    /// Shoelace area; positive for counter-clockwise outlines.
    pub fn signed_area(&self) -> f64 {
        let n = self.outer.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| self.outer[i].perp_dot(self.outer[(i + 1) % n]))
            .sum();
        twice / 2.0
    }

    /// Even-odd point containment. Points exactly on an edge may land on
    /// either side.
    pub fn contains(&self, point: DVec2) -> bool {
        let n = self.outer.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.outer[i];
            let b = self.outer[j];
            if (a.y > point.y) != (b.y > point.y) {
                let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if point.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Returns a copy rotated counter-clockwise about the origin.
    pub fn rotated(&self, degrees: f64) -> Self {
        Self::new(
            self.outer
                .iter()
                .map(|&v| rotate_point(v, degrees))
                .collect(),
        )
    }
}

// =============================================================================
// CIRCLE
// =============================================================================

/// A circle in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point
    pub center: DVec2,
    /// Radius
    pub radius: f64,
}

impl Circle {
    /// Creates a circle.
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Tessellates the circle into `fragments` vertices starting at angle 0.
    pub fn to_polygon(&self, fragments: u32) -> Polygon2D {
        let fragments = fragments.max(3);
        Polygon2D::new(
            (0..fragments)
                .map(|i| {
                    let degrees = 360.0 * i as f64 / fragments as f64;
                    self.center + self.radius * direction(degrees)
                })
                .collect(),
        )
    }

    /// True when the point is strictly inside the circle.
    pub fn contains(&self, point: DVec2) -> bool {
        point.distance(self.center) < self.radius
    }
}

// =============================================================================
// PROFILE SEGMENTS
// =============================================================================

/// One exact piece of a composite profile curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProfileSegment {
    /// Straight line between two points.
    Line {
        /// Start point
        start: DVec2,
        /// End point
        end: DVec2,
    },
    /// Circular arc, counter-clockwise for a positive sweep.
    Arc {
        /// Arc center
        center: DVec2,
        /// Arc radius
        radius: f64,
        /// Angle of the start point in degrees
        start_angle: f64,
        /// Signed angular extent in degrees
        sweep_angle: f64,
    },
}

impl ProfileSegment {
    /// Creates a line segment.
    pub fn line(start: DVec2, end: DVec2) -> Self {
        Self::Line { start, end }
    }

    /// Creates an arc segment.
    pub fn arc(center: DVec2, radius: f64, start_angle: f64, sweep_angle: f64) -> Self {
        Self::Arc {
            center,
            radius,
            start_angle,
            sweep_angle,
        }
    }

    /// First point of the segment.
    pub fn start(&self) -> DVec2 {
        match *self {
            Self::Line { start, .. } => start,
            Self::Arc {
                center,
                radius,
                start_angle,
                ..
            } => center + radius * direction(start_angle),
        }
    }

    /// Last point of the segment.
    pub fn end(&self) -> DVec2 {
        match *self {
            Self::Line { end, .. } => end,
            Self::Arc {
                center,
                radius,
                start_angle,
                sweep_angle,
            } => center + radius * direction(start_angle + sweep_angle),
        }
    }

    /// Curve length.
    pub fn length(&self) -> f64 {
        match *self {
            Self::Line { start, end } => start.distance(end),
            Self::Arc {
                radius,
                sweep_angle,
                ..
            } => radius * sweep_angle.abs().to_radians(),
        }
    }

    /// Points along the segment, both endpoints included.
    ///
    /// Arcs get `ceil(fragments_per_circle * |sweep| / 360)` pieces, at least one.
    pub fn tessellate(&self, fragments_per_circle: u32) -> Vec<DVec2> {
        match *self {
            Self::Line { start, end } => vec![start, end],
            Self::Arc {
                center,
                radius,
                start_angle,
                sweep_angle,
            } => {
                let pieces = ((fragments_per_circle as f64 * sweep_angle.abs() / 360.0).ceil()
                    as usize)
                    .max(1);
                (0..=pieces)
                    .map(|k| {
                        let degrees = start_angle + sweep_angle * k as f64 / pieces as f64;
                        center + radius * direction(degrees)
                    })
                    .collect()
            }
        }
    }
}

/// Joins consecutive segments into one closed outline.
///
/// Shared endpoints appear once, and the final point is dropped when it
/// coincides with the first (within `tolerance`).
pub fn chain_segments(
    segments: &[ProfileSegment],
    fragments_per_circle: u32,
    tolerance: f64,
) -> Polygon2D {
    let mut outer: Vec<DVec2> = Vec::new();
    for segment in segments {
        let points = segment.tessellate(fragments_per_circle);
        let skip = usize::from(!outer.is_empty());
        outer.extend(points.into_iter().skip(skip));
    }
    if outer.len() > 1 {
        if let (Some(first), Some(last)) = (outer.first(), outer.last()) {
            if first.distance(*last) <= tolerance {
                outer.pop();
            }
        }
    }
    Polygon2D::new(outer)
}

// =============================================================================
// PLANAR REGION
// =============================================================================

/// A planar region given as the union of several outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanarRegion {
    /// Outlines whose union forms the region
    pub outlines: Vec<Polygon2D>,
}

impl PlanarRegion {
    /// Creates a region from outlines.
    pub fn new(outlines: Vec<Polygon2D>) -> Self {
        Self { outlines }
    }

    /// True when any outline contains the point.
    pub fn contains(&self, point: DVec2) -> bool {
        self.outlines.iter().any(|outline| outline.contains(point))
    }
}
