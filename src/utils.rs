//! Helper functions

use crate::kinematic_traits::{JointType, Joints, Kinematics, Pose};
use std::f64::consts::PI;

const TWO_PI: f64 = 2.0 * PI;

/// Wrap an angle into (-pi, pi]. Arbitrarily large inputs are reduced, so a
/// cumulative sum like 10 pi comes back in range.
pub fn wrap_angle(a: f64) -> f64 {
    let x = a.rem_euclid(TWO_PI);
    if x > PI { x - TWO_PI } else { x }
}

/// Checks if all elements in the array are finite
pub(crate) fn is_valid(qs: &Joints) -> bool {
    qs.iter().all(|&q| q.is_finite())
}

/// Largest single-joint distance between two joint vectors. Angles and
/// meters are compared raw, which is enough for step-count heuristics and
/// logging.
pub fn joint_travel(from: &Joints, to: &Joints) -> f64 {
    (0..4)
        .map(|i| (from[i] - to[i]).abs())
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Print joint values, converting revolute radians to degrees and leaving
/// the prismatic offset in meters.
#[allow(dead_code)]
pub fn dump_joints(robot: &dyn Kinematics, joints: &Joints) {
    let mut row_str = String::new();
    for (joint_idx, kind) in robot.joint_layout().iter().enumerate() {
        let q = joints[joint_idx];
        match kind {
            JointType::Revolute => row_str.push_str(&format!("{:6.2} ", q.to_degrees())),
            JointType::Prismatic => row_str.push_str(&format!("{:6.3}m ", q)),
        }
    }
    println!("[{}]", row_str.trim_end());
}

pub fn dump_pose(pose: &Pose) {
    println!(
        "x: {:.5}, y: {:.5}, z: {:.5},  heading: {:.5}",
        pose.point.x, pose.point.y, pose.point.z, pose.heading
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_keeps_range() {
        for a in [-0.3, 0.0, 1.2, PI] {
            assert_eq!(wrap_angle(a), a);
        }
    }

    #[test]
    fn test_wrap_large_sums() {
        assert!((wrap_angle(10.0 * PI)).abs() < 1e-12);
        assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-12);
        assert!((wrap_angle(-3.5 * PI) - 0.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_boundaries() {
        // pi stays pi, -pi maps to pi: the range is half-open at -pi.
        assert_eq!(wrap_angle(PI), PI);
        assert_eq!(wrap_angle(-PI), PI);
    }

    #[test]
    fn test_is_valid_with_all_finite() {
        let qs = [0.0, 1.0, -1.0, 0.5];
        assert!(is_valid(&qs));
    }

    #[test]
    fn test_is_valid_with_nan() {
        let qs = [0.0, f64::NAN, 1.0, -1.0];
        assert!(!is_valid(&qs));
    }

    #[test]
    fn test_is_valid_with_infinity() {
        let qs = [0.0, f64::INFINITY, 1.0, -1.0];
        assert!(!is_valid(&qs));
    }

    #[test]
    fn test_joint_travel() {
        let a = [0.0, 1.0, 0.2, -0.5];
        let b = [0.5, 0.0, 0.2, -0.1];
        assert!((joint_travel(&a, &b) - 1.0).abs() < 1e-12);
    }
}
