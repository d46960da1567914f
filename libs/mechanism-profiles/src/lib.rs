//! # Mechanism Profiles
//!
//! Profile curves, placement patterns and sweep parameters for
//! 3D-printable mechanisms: ball bearings, twisted sliders and springs.
//!
//! ## Architecture
//!
//! ```text
//! physical dimensions → builder (validate, derive, sample) → plain data → geometry kernel
//! ```
//!
//! Builders are pure functions. They never build solids; revolving,
//! extruding, sweeping and booleans belong to the kernel driven by
//! `mechanism-assembly`.
//!
//! ## Builders
//!
//! - **Raceway**: axisymmetric cavity wall of a bearing ([`build_raceway_profile`])
//! - **Balls**: ball radius, count and centers ([`plan_ball_layout`])
//! - **Pattern**: pinwheel cross-section of a twisted slider ([`build_pattern_pair`])
//! - **Twist**: rotation-per-height law ([`TwistLaw`])
//! - **Helix**: spring sweep path ([`build_helix_path`])
//! - **Plans**: per-part bundles of the above ([`BearingSpec`], [`TwistedSliderSpec`], [`SpringSpec`])
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::GenerationConfig;
//! use mechanism_profiles::BearingSpec;
//!
//! let plan = BearingSpec::new(20.0, 30.0, 10.0)
//!     .with_opening_size(4.0)
//!     .plan(&GenerationConfig::default())
//!     .unwrap();
//! assert_eq!(plan.layout.ball_count, 7);
//! ```

pub mod balls;
pub mod error;
pub mod geometry;
pub mod helix;
pub mod pattern;
pub mod plans;
pub mod raceway;
pub mod twist;

pub use balls::{plan_ball_layout, BallLayout};
pub use error::{MechanismError, MechanismResult};
pub use helix::{build_helix_path, HelixFrame, HelixPath};
pub use pattern::{build_pattern_pair, build_pattern_profile, PatternParams, PatternProfile};
pub use plans::{
    BearingPlan, BearingSpec, SpringPlan, SpringSpec, TwistedSliderPlan, TwistedSliderSpec,
};
pub use raceway::{build_raceway_profile, RacewayParams, RacewayProfile};
pub use twist::{TwistLaw, TwistedExtrusion};
