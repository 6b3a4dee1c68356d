//! SCARA style RRRP arm, the second kinematics variant.

use crate::constraints::Constraints;
use crate::kinematic_traits::{JointPositions, JointType, Joints, Kinematics, Pose};
use crate::parameters::scara_kinematics::Parameters;
use crate::utils::wrap_angle;
use nalgebra::Point3;

const LAYOUT: [JointType; 4] = [
    JointType::Revolute,
    JointType::Revolute,
    JointType::Revolute,
    JointType::Prismatic,
];

/// SCARA arm: a fixed vertical column carries a three-link planar chain
/// (shoulder, elbow, wrist), and the fourth joint is a short vertical lift
/// at the gripper. Joint order is [theta1, theta2, theta3, q4].
///
/// Unlike the articulated variant, the wrist heading is derived from the
/// target, and only the elbow-down solution branch is produced.
pub struct ScaraKinematics {
    parameters: Parameters,
    constraints: Option<Constraints>,
}

impl ScaraKinematics {
    /// Creates a new `ScaraKinematics` instance with the given parameters.
    pub fn new(parameters: Parameters) -> Self {
        ScaraKinematics {
            parameters,
            constraints: None,
        }
    }

    /// Creates an instance that also checks revolute ranges in `reachable`.
    pub fn new_with_constraints(parameters: Parameters, constraints: Constraints) -> Self {
        ScaraKinematics {
            parameters,
            constraints: Some(constraints),
        }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}

impl Kinematics for ScaraKinematics {
    fn forward(&self, qs: &Joints) -> Pose {
        let p = &self.parameters;
        let [theta1, theta2, theta3, q4] = *qs;

        let z = p.base_height + q4.clamp(p.d3_min, p.d3_max);
        let x = p.a1 * theta1.cos()
            + p.a2 * (theta1 + theta2).cos()
            + p.a4 * (theta1 + theta2 + theta3).cos();
        let y = p.a1 * theta1.sin()
            + p.a2 * (theta1 + theta2).sin()
            + p.a4 * (theta1 + theta2 + theta3).sin();

        Pose {
            point: Point3::new(x, y, z),
            heading: theta1 + theta2 + theta3,
        }
    }

    /// Full chain for stick-figure rendering: base, column top, shoulder
    /// end, elbow end, gripper. The whole planar chain rides at the lifted
    /// height so the figure stays connected.
    fn forward_with_joint_positions(&self, qs: &Joints) -> JointPositions {
        let p = &self.parameters;
        let [theta1, theta2, theta3, q4] = *qs;

        let z = p.base_height + q4.clamp(p.d3_min, p.d3_max);
        let base = Point3::new(0.0, 0.0, 0.0);
        let column_top = Point3::new(0.0, 0.0, z);
        let shoulder_end = Point3::new(p.a1 * theta1.cos(), p.a1 * theta1.sin(), z);
        let elbow_end = Point3::new(
            shoulder_end.x + p.a2 * (theta1 + theta2).cos(),
            shoulder_end.y + p.a2 * (theta1 + theta2).sin(),
            z,
        );
        let gripper = Point3::new(
            elbow_end.x + p.a4 * (theta1 + theta2 + theta3).cos(),
            elbow_end.y + p.a4 * (theta1 + theta2 + theta3).sin(),
            z,
        );

        vec![base, column_top, shoulder_end, elbow_end, gripper]
    }

    fn inverse(&self, target: &Pose) -> Joints {
        let p = &self.parameters;

        let q4 = (target.point.z - p.base_height).clamp(p.d3_min, p.d3_max);

        // Planar heading towards the target; this variant derives the wrist
        // angle instead of taking a desired orientation.
        let phi = target.point.y.atan2(target.point.x);

        let mut xw = target.point.x - p.a4 * phi.cos();
        let mut yw = target.point.y - p.a4 * phi.sin();

        // Out-of-reach wrist centers are projected radially back onto the
        // workspace boundary, landing exactly at a1 + a2 - reach_margin.
        let reach = p.a1 + p.a2;
        let r = xw.hypot(yw);
        if r > reach {
            let scale = (reach - p.reach_margin) / r;
            xw *= scale;
            yw *= scale;
        }

        let r2 = xw * xw + yw * yw;
        let cos2 = ((r2 - p.a1 * p.a1 - p.a2 * p.a2) / (2.0 * p.a1 * p.a2)).clamp(-1.0, 1.0);
        // Elbow-down only; this variant does not expose the branch choice.
        let sin2 = (1.0 - cos2 * cos2).sqrt();
        let theta2 = sin2.atan2(cos2);

        let k1 = p.a1 + p.a2 * cos2;
        let k2 = p.a2 * sin2;
        let theta1 = yw.atan2(xw) - k2.atan2(k1);

        let theta3 = phi - theta1 - theta2;

        [
            wrap_angle(theta1),
            wrap_angle(theta2),
            wrap_angle(theta3),
            q4,
        ]
    }

    fn reachable(&self, target: &Pose) -> bool {
        let p = &self.parameters;
        let r = target.point.x.hypot(target.point.y);
        let lift = target.point.z - p.base_height;
        if r > p.max_radius() || lift < p.d3_min || lift > p.d3_max {
            return false;
        }
        match &self.constraints {
            Some(constraints) => constraints.compliant(&self.inverse(target)),
            None => true,
        }
    }

    fn joint_layout(&self) -> &'static [JointType; 4] {
        &LAYOUT
    }

    fn travel_bounds(&self) -> (f64, f64) {
        (self.parameters.d3_min, self.parameters.d3_max)
    }
}
