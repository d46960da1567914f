//! # Mechanism Assembly
//!
//! Drives a solid-modelling backend through the steps that turn mechanism
//! plans into printable parts.
//!
//! ## Architecture
//!
//! ```text
//! BearingSpec ─┐
//! SliderSpec  ─┼→ plan (mechanism-profiles) → recipe → GeometryKernel → solids → export
//! SpringSpec  ─┘
//! ```
//!
//! No kernel ships with this crate; callers implement [`GeometryKernel`] for
//! their backend.

pub mod error;
pub mod kernel;
pub mod recipes;

#[cfg(test)]
mod testing;

pub use error::{AssemblyError, AssemblyResult};
pub use kernel::{ExportFormat, GeometryKernel};
pub use recipes::{
    assemble_bearing, assemble_spring, assemble_twisted_slider, build_bearing, build_spring,
    build_twisted_slider, export_all, SliderParts,
};
