//! # Mechanism Plans
//!
//! Each plan bundles every descriptor the kernel needs for one printable
//! part, starting from the handful of dimensions a user actually picks.
//!
//! | Spec | Plan | Parts |
//! |------|------|-------|
//! | [`BearingSpec`] | [`BearingPlan`] | ball layout, raceway wall, enclosure block |
//! | [`TwistedSliderSpec`] | [`TwistedSliderPlan`] | slider, cutout, enclosure shell |
//! | [`SpringSpec`] | [`SpringPlan`] | helix, cross-section placement |

mod bearing;
mod slider;
mod spring;


pub use bearing::{BearingPlan, BearingSpec, EnclosureBlock};
pub use slider::{CircleSection, SliderEnclosure, TwistedSliderPlan, TwistedSliderSpec};
pub use spring::{SpringPlan, SpringSpec};
