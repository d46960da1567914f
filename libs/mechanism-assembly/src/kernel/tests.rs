use super::*;
use crate::testing::{Op, RecordingKernel};

#[test]
fn test_export_format_names() {
    assert_eq!(ExportFormat::Stl.extension(), "stl");
    assert_eq!(ExportFormat::Step.extension(), "step");
    assert_eq!(ExportFormat::Stl.to_string(), "STL");
    assert_eq!(ExportFormat::Step.to_string(), "STEP");
}

#[test]
fn test_kernel_is_usable_through_generics() {
    fn block<K: GeometryKernel>(kernel: &mut K) -> Result<K::Solid, K::Error> {
        let outer = kernel.cylinder(10.0, 0.0, 5.0)?;
        let inner = kernel.cylinder(4.0, 0.0, 5.0)?;
        kernel.subtract(&outer, &inner)
    }

    let mut kernel = RecordingKernel::default();
    let solid = block(&mut kernel).unwrap();
    assert_eq!(solid, 2);
    assert_eq!(
        kernel.ops,
        vec![
            Op::Cylinder {
                radius: 10.0,
                bottom_z: 0.0,
                height: 5.0
            },
            Op::Cylinder {
                radius: 4.0,
                bottom_z: 0.0,
                height: 5.0
            },
            Op::Subtract { base: 0, tool: 1 },
        ]
    );
}

#[test]
fn test_recording_kernel_failure() {
    let mut kernel = RecordingKernel::failing_on("sphere");
    assert!(kernel.cylinder(1.0, 0.0, 1.0).is_ok());
    let err = kernel.sphere(DVec3::ZERO, 1.0).unwrap_err();
    assert_eq!(err.to_string(), "sphere rejected");
}
