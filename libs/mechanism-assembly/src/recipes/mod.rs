//! # Assembly Recipes
//!
//! The operation order that turns each plan into printable solids.
//!
//! ## Bearing
//!
//! ```text
//! block cylinder − revolve(raceway loop, 360°)  ∪  one sphere per ball
//! ```
//!
//! ## Twisted Slider
//!
//! ```text
//! slider    = twist_extrude(solid region, slider height)
//! enclosure = (lower loft ∪ band cylinder ∪ upper loft) − twist_extrude(clearance region)
//! ```
//!
//! ## Spring
//!
//! ```text
//! sweep(cross-section at the helix start, helix)
//! ```

#[cfg(test)]
mod tests;

use crate::error::{kernel_error, AssemblyResult};
use crate::kernel::{ExportFormat, GeometryKernel};
use config::constants::GenerationConfig;
use mechanism_profiles::plans::{
    BearingPlan, BearingSpec, SpringPlan, SpringSpec, TwistedSliderPlan, TwistedSliderSpec,
};
use mechanism_profiles::twist::TwistedExtrusion;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// The two printed parts of a twisted slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderParts<S> {
    /// The twisted bar
    pub slider: S,
    /// The shell with the matching twisted cutout
    pub enclosure: S,
}

/// Builds a bearing: the enclosure block with its raceway cut out and the
/// balls in place.
///
/// A layout without balls yields the bare enclosure.
pub fn assemble_bearing<K: GeometryKernel>(
    kernel: &mut K,
    plan: &BearingPlan,
) -> AssemblyResult<K::Solid, K::Error> {
    let block = kernel
        .cylinder(
            plan.enclosure.radius,
            plan.enclosure.bottom_z(),
            plan.enclosure.height,
        )
        .map_err(kernel_error("cylinder"))?;
    let raceway = kernel
        .revolve(&plan.raceway.closed_loop(), 360.0)
        .map_err(kernel_error("revolve"))?;
    let mut part = kernel
        .subtract(&block, &raceway)
        .map_err(kernel_error("subtract"))?;

    for (index, center) in plan.layout.centers.iter().enumerate() {
        trace!(index, x = center.x, y = center.y, "placing ball");
        let ball = kernel
            .sphere(center.extend(0.0), plan.layout.ball_radius)
            .map_err(kernel_error("sphere"))?;
        part = kernel.union(&part, &ball).map_err(kernel_error("union"))?;
    }

    debug!(balls = plan.layout.ball_count, "bearing assembled");
    Ok(part)
}

/// Plans and builds a bearing in one step.
pub fn build_bearing<K: GeometryKernel>(
    kernel: &mut K,
    spec: &BearingSpec,
    config: &GenerationConfig,
) -> AssemblyResult<K::Solid, K::Error> {
    let plan = spec.plan(config)?;
    assemble_bearing(kernel, &plan)
}

fn twist_extrude<K: GeometryKernel>(
    kernel: &mut K,
    extrusion: &TwistedExtrusion,
) -> AssemblyResult<K::Solid, K::Error> {
    kernel
        .extrude_with_twist(
            &extrusion.profile.region(),
            extrusion.height(),
            extrusion.total_rotation(),
        )
        .map_err(kernel_error("extrude_with_twist"))
}

/// Builds the slider and its enclosure.
pub fn assemble_twisted_slider<K: GeometryKernel>(
    kernel: &mut K,
    plan: &TwistedSliderPlan,
) -> AssemblyResult<SliderParts<K::Solid>, K::Error> {
    let slider = twist_extrude(kernel, &plan.slider)?;

    let shell = &plan.enclosure;
    let lower = kernel
        .loft(&shell.lower_loft())
        .map_err(kernel_error("loft"))?;
    let band = shell.cylinder();
    let band = kernel
        .cylinder(band.radius, band.z, shell.cylinder_height)
        .map_err(kernel_error("cylinder"))?;
    let upper = kernel
        .loft(&shell.upper_loft())
        .map_err(kernel_error("loft"))?;

    let body = kernel.union(&lower, &band).map_err(kernel_error("union"))?;
    let body = kernel.union(&body, &upper).map_err(kernel_error("union"))?;
    let cutout = twist_extrude(kernel, &plan.cutout)?;
    let enclosure = kernel
        .subtract(&body, &cutout)
        .map_err(kernel_error("subtract"))?;

    debug!(
        slider_rotation = plan.slider.total_rotation(),
        cutout_rotation = plan.cutout.total_rotation(),
        "twisted slider assembled"
    );
    Ok(SliderParts { slider, enclosure })
}

/// Plans and builds a twisted slider in one step.
pub fn build_twisted_slider<K: GeometryKernel>(
    kernel: &mut K,
    spec: &TwistedSliderSpec,
    config: &GenerationConfig,
) -> AssemblyResult<SliderParts<K::Solid>, K::Error> {
    let plan = spec.plan(config)?;
    assemble_twisted_slider(kernel, &plan)
}

/// Builds a spring by sweeping its cross-section along the helix.
pub fn assemble_spring<K: GeometryKernel>(
    kernel: &mut K,
    plan: &SpringPlan,
) -> AssemblyResult<K::Solid, K::Error> {
    let spring = kernel
        .sweep(&plan.cross_section, &plan.section_frame, &plan.helix)
        .map_err(kernel_error("sweep"))?;
    debug!(turns = plan.helix.turns(), "spring assembled");
    Ok(spring)
}

/// Plans and builds a spring in one step.
pub fn build_spring<K: GeometryKernel>(
    kernel: &mut K,
    spec: &SpringSpec,
) -> AssemblyResult<K::Solid, K::Error> {
    let plan = spec.plan()?;
    assemble_spring(kernel, &plan)
}

/// Exports named solids into `directory` as `<name>.<extension>`.
///
/// Returns the written paths in input order. Stops at the first failure.
pub fn export_all<K: GeometryKernel>(
    kernel: &mut K,
    parts: &[(&str, &K::Solid)],
    directory: &Path,
    format: ExportFormat,
) -> AssemblyResult<Vec<PathBuf>, K::Error> {
    let mut written = Vec::with_capacity(parts.len());
    for (name, solid) in parts {
        let path = directory.join(format!("{name}.{}", format.extension()));
        kernel
            .export(solid, &path, format)
            .map_err(kernel_error("export"))?;
        debug!(path = %path.display(), %format, "exported");
        written.push(path);
    }
    Ok(written)
}
