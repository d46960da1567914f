//! # Recipe Tests
//!
//! Every recipe runs against the recording kernel; assertions are on the
//! exact calls it received.

use super::*;
use crate::error::AssemblyError;
use crate::testing::{Op, RecordingKernel};
use approx::assert_abs_diff_eq;
use glam::DVec3;
use mechanism_profiles::MechanismError;

fn bearing_plan() -> BearingPlan {
    BearingSpec::new(20.0, 30.0, 10.0)
        .with_opening_size(4.0)
        .plan(&GenerationConfig::default())
        .unwrap()
}

fn slider_spec() -> TwistedSliderSpec {
    TwistedSliderSpec::new(15.0, 15.0, 62.0, 5.0)
}

// =============================================================================
// BEARING
// =============================================================================

#[test]
fn test_bearing_operation_order() {
    let plan = bearing_plan();
    let mut kernel = RecordingKernel::default();
    let part = assemble_bearing(&mut kernel, &plan).unwrap();

    assert_eq!(
        kernel.ops[0],
        Op::Cylinder {
            radius: 22.5,
            bottom_z: -5.0,
            height: 10.0
        }
    );
    assert_eq!(
        kernel.ops[1],
        Op::Revolve {
            vertices: 2 * plan.raceway.sample_count(),
            angle: 360.0
        }
    );
    assert_eq!(kernel.ops[2], Op::Subtract { base: 0, tool: 1 });

    // Seven balls, each placed then unioned
    assert_eq!(kernel.count(|op| matches!(op, Op::Sphere { .. })), 7);
    assert_eq!(kernel.count(|op| matches!(op, Op::Union { .. })), 7);
    assert_eq!(kernel.ops.len(), 3 + 2 * 7);
    assert_eq!(part, kernel.ops.len() - 1);

    match &kernel.ops[3] {
        Op::Sphere { center, radius } => {
            assert_eq!(*radius, 5.0);
            assert_abs_diff_eq!(center.x, 12.5, epsilon = 1e-12);
            assert_eq!(center.y, 0.0);
            assert_eq!(center.z, 0.0);
        }
        other => panic!("expected a sphere, got {other:?}"),
    }
    assert_eq!(kernel.ops[4], Op::Union { a: 2, b: 3 });
}

#[test]
fn test_bearing_without_balls_skips_spheres() {
    let mut plan = bearing_plan();
    plan.layout.ball_count = 0;
    plan.layout.angles.clear();
    plan.layout.centers.clear();

    let mut kernel = RecordingKernel::default();
    let part = assemble_bearing(&mut kernel, &plan).unwrap();
    assert_eq!(kernel.ops.len(), 3);
    assert_eq!(part, 2);
    assert_eq!(kernel.count(|op| matches!(op, Op::Sphere { .. })), 0);
}

#[test]
fn test_build_bearing_surfaces_plan_errors() {
    let mut kernel = RecordingKernel::default();
    let err = build_bearing(
        &mut kernel,
        &BearingSpec::new(20.0, 30.0, 10.0).with_opening_size(12.0),
        &GenerationConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AssemblyError::Mechanism(MechanismError::InfeasibleGeometry { .. })
    ));
    assert_eq!(err.operation(), None);
    assert!(kernel.ops.is_empty());
}

#[test]
fn test_kernel_failure_names_operation() {
    let mut kernel = RecordingKernel::failing_on("revolve");
    let err = assemble_bearing(&mut kernel, &bearing_plan()).unwrap_err();
    assert_eq!(err.operation(), Some("revolve"));
    assert_eq!(
        err.to_string(),
        "Kernel operation 'revolve' failed: revolve rejected"
    );
    // Nothing after the failed call ran
    assert_eq!(kernel.ops.len(), 1);
}

// =============================================================================
// TWISTED SLIDER
// =============================================================================

#[test]
fn test_twisted_slider_operations() {
    let plan = slider_spec().plan(&GenerationConfig::default()).unwrap();
    let mut kernel = RecordingKernel::default();
    let parts = assemble_twisted_slider(&mut kernel, &plan).unwrap();

    // slider, lower loft, band, upper loft, 2 unions, cutout, subtract
    assert_eq!(kernel.ops.len(), 8);
    assert_eq!(
        kernel.ops[0],
        Op::Extrude {
            outlines: 7,
            height: 15.0,
            twist: 75.0
        }
    );
    assert_eq!(
        kernel.ops[1],
        Op::Loft {
            sections: plan.enclosure.lower_loft().to_vec()
        }
    );
    assert_eq!(
        kernel.ops[2],
        Op::Cylinder {
            radius: plan.enclosure.wide_radius,
            bottom_z: 30.0,
            height: 2.0
        }
    );
    match &kernel.ops[3] {
        Op::Loft { sections } => {
            assert_eq!(sections.len(), 2);
            assert_eq!(sections[0].z, 32.0);
            assert_eq!(sections[1].z, 62.0);
            assert!(sections[1].radius < sections[0].radius);
        }
        other => panic!("expected a loft, got {other:?}"),
    }
    assert_eq!(kernel.ops[4], Op::Union { a: 1, b: 2 });
    assert_eq!(kernel.ops[5], Op::Union { a: 4, b: 3 });
    assert_eq!(
        kernel.ops[6],
        Op::Extrude {
            outlines: 7,
            height: 62.0,
            twist: 310.0
        }
    );
    assert_eq!(kernel.ops[7], Op::Subtract { base: 5, tool: 6 });
    assert_eq!(
        parts,
        SliderParts {
            slider: 0,
            enclosure: 7
        }
    );
}

#[test]
fn test_twisted_slider_loft_failure() {
    let mut kernel = RecordingKernel::failing_on("loft");
    let plan = slider_spec().plan(&GenerationConfig::default()).unwrap();
    let err = assemble_twisted_slider(&mut kernel, &plan).unwrap_err();
    assert_eq!(err.operation(), Some("loft"));
}

// =============================================================================
// SPRING
// =============================================================================

#[test]
fn test_spring_is_one_sweep() {
    let mut kernel = RecordingKernel::default();
    let spring = build_spring(&mut kernel, &SpringSpec::new(10.0, 1.0, 40.0, 8.0)).unwrap();
    assert_eq!(spring, 0);
    assert_eq!(
        kernel.ops,
        vec![Op::Sweep {
            radius: 1.0,
            origin: DVec3::new(10.0, 0.0, 0.0),
            turns: 5.0
        }]
    );
}

#[test]
fn test_spring_plan_error() {
    let mut kernel = RecordingKernel::default();
    let err = build_spring(&mut kernel, &SpringSpec::new(10.0, 0.0, 40.0, 8.0)).unwrap_err();
    assert!(matches!(err, AssemblyError::Mechanism(_)));
}

// =============================================================================
// EXPORT
// =============================================================================

#[test]
fn test_export_all_names_files() {
    let mut kernel = RecordingKernel::default();
    let parts =
        build_twisted_slider(&mut kernel, &slider_spec(), &GenerationConfig::default()).unwrap();
    let before = kernel.ops.len();

    let written = export_all(
        &mut kernel,
        &[("slider", &parts.slider), ("slider_enclosure", &parts.enclosure)],
        Path::new("out"),
        ExportFormat::Stl,
    )
    .unwrap();

    assert_eq!(
        written,
        vec![
            PathBuf::from("out/slider.stl"),
            PathBuf::from("out/slider_enclosure.stl")
        ]
    );
    assert_eq!(
        kernel.ops[before],
        Op::Export {
            solid: parts.slider,
            path: PathBuf::from("out/slider.stl"),
            format: ExportFormat::Stl
        }
    );
    assert_eq!(kernel.ops.len(), before + 2);
}

#[test]
fn test_export_failure() {
    let mut kernel = RecordingKernel::failing_on("export");
    let solid = kernel.cylinder(1.0, 0.0, 1.0).unwrap();
    let err = export_all(&mut kernel, &[("part", &solid)], Path::new("."), ExportFormat::Step)
        .unwrap_err();
    assert_eq!(err.operation(), Some("export"));
}
