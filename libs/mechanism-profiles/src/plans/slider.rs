//! Twisted slider: a pinwheel bar that screws through a matching cutout in
//! an hourglass-shaped enclosure.
//!
//! ```text
//!        ____ narrow          z = 2 * prism + cylinder
//!       /    \   upper loft
//!      |      |  cylinder     wide radius
//!       \____/   lower loft
//!         narrow              z = 0
//! ```

use crate::error::{ensure_positive, MechanismError, MechanismResult};
use crate::pattern::{build_pattern_pair, PatternParams};
use crate::twist::{TwistLaw, TwistedExtrusion};
use config::constants::{
    GenerationConfig, DEFAULT_ENCLOSURE_CYLINDER_HEIGHT, DEFAULT_ENCLOSURE_GAP,
    DEFAULT_NUMBER_OF_PATTERNS, DEFAULT_RADIUS_FRACTION, DEFAULT_STRAIGHT_FRACTION,
    ENCLOSURE_FLARE_GAPS,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// User-facing slider dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwistedSliderSpec {
    /// Radius of the pinwheel pattern
    pub pattern_radius: f64,
    /// Length of the slider bar
    pub slider_height: f64,
    /// Total height of the enclosure, which the cutout spans
    pub enclosure_height: f64,
    /// Twist in degrees per unit height, shared by slider and cutout
    pub rotation_angle_per_unit_height: f64,
    /// Number of paddles
    pub number_of_patterns: u32,
    /// Clearance between slider and cutout
    pub enclosure_gap: f64,
    /// Paddle tip center as a fraction of the pattern radius
    pub straight_fraction: f64,
    /// Paddle tip radius as a fraction of the pattern radius
    pub radius_fraction: f64,
    /// Height of the straight band in the middle of the enclosure
    pub cylinder_height: f64,
}

impl TwistedSliderSpec {
    /// Creates a spec with the default pattern shape, count and clearance.
    pub fn new(
        pattern_radius: f64,
        slider_height: f64,
        enclosure_height: f64,
        rotation_angle_per_unit_height: f64,
    ) -> Self {
        Self {
            pattern_radius,
            slider_height,
            enclosure_height,
            rotation_angle_per_unit_height,
            number_of_patterns: DEFAULT_NUMBER_OF_PATTERNS,
            enclosure_gap: DEFAULT_ENCLOSURE_GAP,
            straight_fraction: DEFAULT_STRAIGHT_FRACTION,
            radius_fraction: DEFAULT_RADIUS_FRACTION,
            cylinder_height: DEFAULT_ENCLOSURE_CYLINDER_HEIGHT,
        }
    }

    /// Sets the number of paddles.
    pub fn with_number_of_patterns(mut self, number_of_patterns: u32) -> Self {
        self.number_of_patterns = number_of_patterns;
        self
    }

    /// Sets the slider clearance.
    pub fn with_enclosure_gap(mut self, gap: f64) -> Self {
        self.enclosure_gap = gap;
        self
    }

    /// Sets the paddle tip position and size fractions.
    pub fn with_fractions(mut self, straight_fraction: f64, radius_fraction: f64) -> Self {
        self.straight_fraction = straight_fraction;
        self.radius_fraction = radius_fraction;
        self
    }

    /// Sets the height of the straight middle band.
    pub fn with_cylinder_height(mut self, cylinder_height: f64) -> Self {
        self.cylinder_height = cylinder_height;
        self
    }

    /// Pattern parameters shared by the slider and cutout.
    pub fn pattern_params(&self) -> PatternParams {
        PatternParams {
            pattern_radius: self.pattern_radius,
            straight_fraction: self.straight_fraction,
            radius_fraction: self.radius_fraction,
            number_of_patterns: self.number_of_patterns,
        }
    }

    /// Checks the dimensions that the pattern builder does not see.
    pub fn validate(&self) -> MechanismResult<()> {
        ensure_positive("slider_height", self.slider_height)?;
        ensure_positive("enclosure_height", self.enclosure_height)?;
        ensure_positive("enclosure_gap", self.enclosure_gap)?;
        ensure_positive("cylinder_height", self.cylinder_height)?;
        if self.cylinder_height >= self.enclosure_height {
            return Err(MechanismError::configuration(
                "cylinder_height",
                format!(
                    "must be below the enclosure height {}, got {}",
                    self.enclosure_height, self.cylinder_height
                ),
            ));
        }
        self.pattern_params().validate()
    }

    /// Derives the slider, cutout and enclosure shell.
    ///
    /// # Errors
    ///
    /// [`MechanismError::Configuration`] for any out-of-domain dimension.
    pub fn plan(&self, config: &GenerationConfig) -> MechanismResult<TwistedSliderPlan> {
        self.validate()?;
        let (solid, clearance) =
            build_pattern_pair(&self.pattern_params(), self.enclosure_gap, config)?;

        let slider_twist = TwistLaw::new(self.rotation_angle_per_unit_height, self.slider_height)?;
        let cutout_twist = slider_twist.with_height(self.enclosure_height)?;

        let size = 2.0 * clearance.max_extent();
        let enclosure = SliderEnclosure {
            size,
            narrow_radius: size / 4.0,
            wide_radius: size / 2.0 + ENCLOSURE_FLARE_GAPS * self.enclosure_gap,
            prism_height: (self.enclosure_height - self.cylinder_height) / 2.0,
            cylinder_height: self.cylinder_height,
        };

        debug!(
            paddles = solid.paddle_count(),
            slider_rotation = slider_twist.total_rotation(),
            cutout_rotation = cutout_twist.total_rotation(),
            enclosure_size = size,
            "twisted slider planned"
        );

        Ok(TwistedSliderPlan {
            spec: *self,
            slider: TwistedExtrusion::new(solid, slider_twist),
            cutout: TwistedExtrusion::new(clearance, cutout_twist),
            enclosure,
        })
    }
}

/// A horizontal circle at height `z`, one station of a loft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleSection {
    /// Height of the circle's plane
    pub z: f64,
    /// Circle radius
    pub radius: f64,
}

/// Hourglass shell around the cutout: loft up, straight band, loft down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderEnclosure {
    /// Width of the cutout cross-section
    pub size: f64,
    /// Radius at the top and bottom faces
    pub narrow_radius: f64,
    /// Radius of the middle band
    pub wide_radius: f64,
    /// Height of each loft
    pub prism_height: f64,
    /// Height of the middle band
    pub cylinder_height: f64,
}

impl SliderEnclosure {
    /// Height from the bottom face to the top face.
    pub fn total_height(&self) -> f64 {
        2.0 * self.prism_height + self.cylinder_height
    }

    /// Bottom and top sections of the lower loft.
    pub fn lower_loft(&self) -> [CircleSection; 2] {
        [
            CircleSection {
                z: 0.0,
                radius: self.narrow_radius,
            },
            CircleSection {
                z: self.prism_height,
                radius: self.wide_radius,
            },
        ]
    }

    /// Bottom section of the middle band; it rises by `cylinder_height`.
    pub fn cylinder(&self) -> CircleSection {
        CircleSection {
            z: self.prism_height,
            radius: self.wide_radius,
        }
    }

    /// Bottom and top sections of the upper loft.
    pub fn upper_loft(&self) -> [CircleSection; 2] {
        let base = self.prism_height + self.cylinder_height;
        [
            CircleSection {
                z: base,
                radius: self.wide_radius,
            },
            CircleSection {
                z: base + self.prism_height,
                radius: self.narrow_radius,
            },
        ]
    }
}

/// Everything needed to build a twisted slider and its enclosure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwistedSliderPlan {
    /// Dimensions the plan was derived from
    pub spec: TwistedSliderSpec,
    /// Solid profile at the slider height
    pub slider: TwistedExtrusion,
    /// Clearance profile at the enclosure height
    pub cutout: TwistedExtrusion,
    /// Shell the cutout is subtracted from
    pub enclosure: SliderEnclosure,
}
