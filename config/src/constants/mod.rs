//! # Configuration Constants
//!
//! Centralized constants for the mechanism generators. Geometry tolerances,
//! sampling densities, printing constraints and the default parameters of
//! each mechanism are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Printing**: Constraints imposed by the manufacturing process
//! - **Sampling**: Profile sampling and arc tessellation parameters
//! - **Defaults**: Default bearing, slider and spring parameters

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance handed to the builders through [`GenerationConfig`].
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Gap below which a clearance inflation is treated as zero.
///
/// The twisted-pattern paddle only emits its radial stub when the gap
/// exceeds this value; shorter stubs would be zero-length segments that
/// geometry kernels reject.
///
/// # Example
///
/// ```rust
/// use config::constants::GAP_TOLERANCE;
///
/// let gap = 0.0;
/// assert!(gap <= GAP_TOLERANCE);
/// ```
pub const GAP_TOLERANCE: f64 = 1e-6;

// =============================================================================
// PRINTING CONSTANTS
// =============================================================================

/// Steepest overhang, in degrees from vertical, the raceway wall may have.
///
/// The straight segment of the raceway profile runs at this angle so the
/// printed surface above the opening needs no support. This is a property
/// of the printing process, not a derived physical value.
///
/// # Example
///
/// ```rust
/// use config::constants::OVERHANG_ANGLE_DEGREES;
///
/// let slope = -OVERHANG_ANGLE_DEGREES.to_radians().tan();
/// assert!((slope + 0.57735).abs() < 1e-4);
/// ```
pub const OVERHANG_ANGLE_DEGREES: f64 = 30.0;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Default number of z samples taken along a raceway wall.
///
/// Anything from 100 upwards tessellates smoothly after revolving.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_PROFILE_SAMPLES;
/// assert!(DEFAULT_PROFILE_SAMPLES >= 100);
/// ```
pub const DEFAULT_PROFILE_SAMPLES: usize = 128;

/// Minimum number of z samples: both enclosure faces plus the equator.
pub const MIN_PROFILE_SAMPLES: usize = 3;

/// Default minimum fragment angle in degrees.
///
/// Finer than the usual 12 degrees: paddle arcs are small and sliding
/// surfaces bind on visible facets.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FA;
///
/// let max_from_angle = 360.0 / DEFAULT_FA; // = 60 fragments
/// assert_eq!(max_from_angle, 60.0);
/// ```
pub const DEFAULT_FA: f64 = 6.0;

/// Default minimum fragment length.
///
/// Half a millimetre is roughly one extrusion width on common nozzles.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FS;
///
/// let radius = 10.0;
/// let max_from_size = (2.0 * std::f64::consts::PI * radius) / DEFAULT_FS;
/// assert!(max_from_size > 100.0);
/// ```
pub const DEFAULT_FS: f64 = 0.5;

/// Minimum number of fragments for any full circle.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_FRAGMENTS;
///
/// let computed_fragments = 2; // Too few
/// let actual_fragments = computed_fragments.max(MIN_FRAGMENTS);
/// assert_eq!(actual_fragments, MIN_FRAGMENTS);
/// ```
pub const MIN_FRAGMENTS: u32 = 5;

/// Maximum number of fragments for any full circle.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_FRAGMENTS;
///
/// let computed_fragments = 10000; // Too many
/// let actual_fragments = computed_fragments.min(MAX_FRAGMENTS);
/// assert_eq!(actual_fragments, MAX_FRAGMENTS);
/// ```
pub const MAX_FRAGMENTS: u32 = 1000;

// =============================================================================
// BEARING DEFAULTS
// =============================================================================

/// Default ratio of the raceway ellipse's vertical to horizontal radius.
///
/// Values above 1 stretch the cavity vertically so the balls touch the
/// walls over a smaller area.
pub const DEFAULT_VERTICAL_CURVATURE_RATIO: f64 = 1.5;

/// Default width of the raceway opening slot.
pub const DEFAULT_OPENING_SIZE: f64 = 0.2;

/// Default minimum gap kept between printed objects that must not fuse.
pub const DEFAULT_MINIMUM_OBJECT_GAP: f64 = 0.1;

/// Enclosure block diameter as a multiple of the bearing outer diameter.
///
/// # Example
///
/// ```rust
/// use config::constants::ENCLOSURE_WIDTH_FACTOR;
///
/// let outer_diameter = 20.0;
/// let block_radius = outer_diameter * ENCLOSURE_WIDTH_FACTOR / 2.0;
/// assert_eq!(block_radius, 15.0);
/// ```
pub const ENCLOSURE_WIDTH_FACTOR: f64 = 1.5;

/// Upper bound on balls in one ring.
///
/// A ball that is tiny next to its track would otherwise request millions
/// of centers.
pub const MAX_BALL_COUNT: usize = 10_000;

// =============================================================================
// TWISTED SLIDER DEFAULTS
// =============================================================================

/// Default number of paddles in a twisted slider cross-section.
pub const DEFAULT_NUMBER_OF_PATTERNS: u32 = 6;

/// Default clearance between a slider and its enclosure cavity.
pub const DEFAULT_ENCLOSURE_GAP: f64 = 0.3;

/// Default fraction of the pattern radius covered by a paddle's straight run.
pub const DEFAULT_STRAIGHT_FRACTION: f64 = 0.85;

/// Default paddle tip radius as a fraction of the pattern radius.
pub const DEFAULT_RADIUS_FRACTION: f64 = 0.2;

/// The central hub radius is the pattern radius divided by this value.
pub const HUB_RADIUS_DIVISOR: f64 = 3.0;

/// Default height of the straight cylinder between the two enclosure lofts.
pub const DEFAULT_ENCLOSURE_CYLINDER_HEIGHT: f64 = 2.0;

/// Wall thickness added around the widest enclosure section, in units of
/// the enclosure gap.
pub const ENCLOSURE_FLARE_GAPS: f64 = 5.0;

// =============================================================================
// GENERATION CONFIG
// =============================================================================

/// Immutable snapshot of generation settings handed to every builder.
///
/// # Examples
/// ```
/// use config::constants::GenerationConfig;
/// let config = GenerationConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert_eq!(config.arc_fragments, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Numeric tolerance propagated into the builders.
    pub tolerance: f64,
    /// Number of z samples along a raceway wall.
    pub profile_samples: usize,
    /// Fragments per full circle for arcs; 0 derives them from the radius.
    pub arc_fragments: u32,
}

impl GenerationConfig {
    /// Builds a configuration, rejecting values the builders cannot use.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GenerationConfig;
    /// let cfg = GenerationConfig::new(1.0e-6, 200, 64).expect("valid config");
    /// assert_eq!(cfg.profile_samples, 200);
    /// assert!(GenerationConfig::new(1.0e-6, 2, 64).is_err());
    /// ```
    pub fn new(
        tolerance: f64,
        profile_samples: usize,
        arc_fragments: u32,
    ) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if profile_samples < MIN_PROFILE_SAMPLES {
            return Err(ConfigError::InvalidProfileSamples(profile_samples));
        }
        if arc_fragments != 0 && arc_fragments < MIN_FRAGMENTS {
            return Err(ConfigError::InvalidArcFragments(arc_fragments));
        }
        Ok(Self {
            tolerance,
            profile_samples,
            arc_fragments,
        })
    }

    /// Fragments used to tessellate a full circle of the given radius.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GenerationConfig;
    /// let fixed = GenerationConfig::new(1.0e-9, 128, 48).unwrap();
    /// assert_eq!(fixed.circle_fragments(100.0), 48);
    /// ```
    pub fn circle_fragments(&self, radius: f64) -> u32 {
        compute_fragments(radius, self.arc_fragments as f64, DEFAULT_FA, DEFAULT_FS)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            profile_samples: DEFAULT_PROFILE_SAMPLES,
            arc_fragments: 0,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when too few profile samples are requested.
    InvalidProfileSamples(usize),
    /// Raised when a fixed arc fragment count is too small to form a circle.
    InvalidArcFragments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidProfileSamples(value) => {
                write!(
                    f,
                    "profile_samples must be >= {MIN_PROFILE_SAMPLES}: {value}"
                )
            }
            ConfigError::InvalidArcFragments(value) => {
                write!(f, "arc_fragments must be 0 or >= {MIN_FRAGMENTS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Computes the number of fragments for a full circle.
///
/// - A positive `fixed` count is used as is
/// - Otherwise `ceil(min(360 / min_angle, 2πr / min_size))`
///
/// Either way the result is clamped to `MIN_FRAGMENTS..=MAX_FRAGMENTS`.
///
/// # Example
///
/// ```rust
/// use config::constants::{compute_fragments, DEFAULT_FA, DEFAULT_FS};
///
/// let fragments = compute_fragments(10.0, 32.0, DEFAULT_FA, DEFAULT_FS);
/// assert_eq!(fragments, 32);
///
/// let fragments = compute_fragments(10.0, 0.0, DEFAULT_FA, DEFAULT_FS);
/// assert_eq!(fragments, 60);
/// ```
pub fn compute_fragments(radius: f64, fixed: f64, min_angle: f64, min_size: f64) -> u32 {
    let fragments = if fixed > 0.0 {
        fixed as u32
    } else {
        let from_angle = 360.0 / min_angle;
        let from_size = (2.0 * std::f64::consts::PI * radius) / min_size;
        from_angle.min(from_size).ceil() as u32
    };

    fragments.clamp(MIN_FRAGMENTS, MAX_FRAGMENTS)
}
