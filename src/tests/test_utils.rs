use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::kinematic_traits::{Joints, Pose};
use crate::parameters::scara_kinematics::Parameters;
use crate::utils::wrap_angle;

/// Assert both joint vectors are equal within `tolerance`, component-wise.
pub fn assert_joints_close(actual: &Joints, expected: &Joints, tolerance: f64) {
    for i in 0..4 {
        assert!(
            (actual[i] - expected[i]).abs() <= tolerance,
            "Joint {} differs: actual {:?}, expected {:?}",
            i + 1,
            actual,
            expected
        );
    }
}

/// Assert both poses are equal within `tolerance`: Euclidean distance for
/// the position, wrapped difference for the heading.
pub fn assert_poses_close(actual: &Pose, expected: &Pose, tolerance: f64) {
    let distance = (actual.point - expected.point).norm();
    assert!(
        distance <= tolerance,
        "Positions differ by {}: actual {:?}, expected {:?}",
        distance,
        actual,
        expected
    );
    let turn = wrap_angle(actual.heading - expected.heading).abs();
    assert!(
        turn <= tolerance,
        "Headings differ by {}: actual {:?}, expected {:?}",
        turn,
        actual,
        expected
    );
}

// ---- Parameter map (static) ----

static PARAMS: Lazy<HashMap<&'static str, Parameters>> = Lazy::new(|| {
    HashMap::from([
        ("Articulated_rrpr", Parameters::articulated_rrpr()),
        ("Bench_scara", Parameters::bench_scara()),
        ("Compact_scara", Parameters::compact_scara()),
    ])
});

/// Create a fresh (cloned) map if mutation is needed by caller; otherwise expose a getter.
pub(crate) fn create_parameter_map() -> HashMap<String, Parameters> {
    PARAMS
        .iter()
        .map(|(k, v)| (String::from(*k), v.clone()))
        .collect()
}
