use crate::constraints::Constraints;
use crate::kinematic_traits::{
    Elbow, JointPositions, JointType, Joints, Kinematics, Pose,
};
use crate::parameters::scara_kinematics::Parameters;
use crate::utils::wrap_angle;
use nalgebra::Point3;

const LAYOUT: [JointType; 4] = [
    JointType::Revolute,
    JointType::Revolute,
    JointType::Prismatic,
    JointType::Revolute,
];

/// Articulated RRPR arm: shoulder and elbow revolute joints driving a planar
/// two-link chain, a vertical prismatic joint carrying the whole wrist, and
/// a final revolute joint orienting the wrist link. Joint order is
/// [theta1, theta2, d3, theta4].
pub struct ArticulatedKinematics {
    parameters: Parameters,
    constraints: Option<Constraints>,
}

impl ArticulatedKinematics {
    /// Creates a new `ArticulatedKinematics` instance with the given parameters.
    pub fn new(parameters: Parameters) -> Self {
        ArticulatedKinematics {
            parameters,
            constraints: None,
        }
    }

    /// Creates an instance that also checks revolute ranges in `reachable`.
    pub fn new_with_constraints(parameters: Parameters, constraints: Constraints) -> Self {
        ArticulatedKinematics {
            parameters,
            constraints: Some(constraints),
        }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Inverse kinematics with an explicit elbow branch. The trait-level
    /// [Kinematics::inverse] uses the elbow-down branch; only this variant
    /// offers the choice.
    pub fn inverse_with_elbow(&self, target: &Pose, elbow: Elbow) -> Joints {
        let p = &self.parameters;
        let phi = target.heading;

        // Exact wrist center: the wrist link contribution along the desired
        // heading must come off before the two-link solve. Solving against
        // the raw gripper point is wrong by up to a4.
        let wx = target.point.x - p.a4 * phi.cos();
        let wy = target.point.y - p.a4 * phi.sin();
        let r2 = wx * wx + wy * wy;

        // Law of cosines for theta2, clamped to absorb floating point and
        // just-out-of-reach targets.
        let cos2 = ((r2 - p.a1 * p.a1 - p.a2 * p.a2) / (2.0 * p.a1 * p.a2)).clamp(-1.0, 1.0);
        let mut sin2 = (1.0 - cos2 * cos2).sqrt();
        if elbow == Elbow::Up {
            sin2 = -sin2;
        }
        let theta2 = sin2.atan2(cos2);

        let k1 = p.a1 + p.a2 * cos2;
        let k2 = p.a2 * sin2;
        let theta1 = wy.atan2(wx) - k2.atan2(k1);

        let d3 = (target.point.z - p.base_height).clamp(p.d3_min, p.d3_max);

        let theta4 = phi - (theta1 + theta2);

        [
            wrap_angle(theta1),
            wrap_angle(theta2),
            d3,
            wrap_angle(theta4),
        ]
    }
}

impl Kinematics for ArticulatedKinematics {
    fn forward(&self, qs: &Joints) -> Pose {
        let p = &self.parameters;
        let [theta1, theta2, d3, theta4] = *qs;

        let x = p.a1 * theta1.cos()
            + p.a2 * (theta1 + theta2).cos()
            + p.a4 * (theta1 + theta2 + theta4).cos();
        let y = p.a1 * theta1.sin()
            + p.a2 * (theta1 + theta2).sin()
            + p.a4 * (theta1 + theta2 + theta4).sin();
        let z = p.base_height + d3;

        Pose {
            point: Point3::new(x, y, z),
            heading: theta1 + theta2 + theta4,
        }
    }

    fn forward_with_joint_positions(&self, qs: &Joints) -> JointPositions {
        let p = &self.parameters;
        let [theta1, theta2, d3, theta4] = *qs;

        let base = Point3::new(0.0, 0.0, p.base_height);
        let shoulder_end = Point3::new(
            base.x + p.a1 * theta1.cos(),
            base.y + p.a1 * theta1.sin(),
            base.z,
        );
        let elbow_end = Point3::new(
            shoulder_end.x + p.a2 * (theta1 + theta2).cos(),
            shoulder_end.y + p.a2 * (theta1 + theta2).sin(),
            base.z,
        );
        // The prismatic travel rides on the wrist, so the vertical jump
        // happens over the last link.
        let gripper = Point3::new(
            elbow_end.x + p.a4 * (theta1 + theta2 + theta4).cos(),
            elbow_end.y + p.a4 * (theta1 + theta2 + theta4).sin(),
            base.z + d3,
        );

        vec![base, shoulder_end, elbow_end, gripper]
    }

    fn inverse(&self, target: &Pose) -> Joints {
        self.inverse_with_elbow(target, Elbow::Down)
    }

    fn reachable(&self, target: &Pose) -> bool {
        let p = &self.parameters;
        let r = target.point.x.hypot(target.point.y);
        let d3 = target.point.z - p.base_height;
        if r > p.max_radius() || d3 < p.d3_min || d3 > p.d3_max {
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
