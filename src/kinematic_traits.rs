//! Defines the `Kinematics` trait shared by both manipulator variants,
//! together with the joint vector and pose types they operate on.

use nalgebra::Point3;

/// Joint positions of the manipulator. Components are radians for revolute
/// joints and meters for the prismatic joint; the ordering is fixed by the
/// variant's joint layout (see [Kinematics::joint_layout]).
pub type Joints = [f64; 4];

/// All joints at zero. For both variants this is the arm stretched along
/// the positive X axis with the prismatic joint at the travel origin.
pub const JOINTS_AT_ZERO: Joints = [0.0, 0.0, 0.0, 0.0];

pub const J1: usize = 0;
pub const J2: usize = 1;
pub const J3: usize = 2;
pub const J4: usize = 3;

/// Ordered positions of the joints (base first, gripper last), as needed
/// for stick-figure rendering of the arm.
pub type JointPositions = Vec<Point3<f64>>;

/// Kind of a single joint in the kinematic chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointType {
    /// Rotational joint, value in radians.
    Revolute,
    /// Linear joint, value in meters.
    Prismatic,
}

/// Solution branch of the two-link planar inverse. Both branches reach the
/// same point for any reachable target; they degenerate to one at full
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Elbow {
    #[default]
    Down,
    Up,
}

/// Cartesian pose of the gripper: position in meters plus the heading of the
/// gripper about the vertical axis, in radians.
///
/// The articulated (RRPR) variant treats `heading` as the desired gripper
/// orientation. The SCARA (RRRP) variant derives the heading from the target
/// position itself and ignores this field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub point: Point3<f64>,
    pub heading: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, z: f64, heading: f64) -> Self {
        Pose {
            point: Point3::new(x, y, z),
            heading,
        }
    }

    /// Pose with zero heading, for callers that only care about position.
    pub fn position(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Pose with the heading aligned to the radial direction of the point,
    /// keeping the gripper pointing away from the column. This is the same
    /// heading the SCARA variant derives for itself.
    pub fn radial(point: Point3<f64>) -> Self {
        Pose {
            point,
            heading: point.y.atan2(point.x),
        }
    }
}

pub trait Kinematics: Send + Sync {
    /// Gripper pose at the given joint positions.
    fn forward(&self, qs: &Joints) -> Pose;

    /// Ordered Cartesian positions of all joints at the given joint
    /// positions, base first, gripper last. The final entry equals the
    /// position returned by [Kinematics::forward].
    fn forward_with_joint_positions(&self, qs: &Joints) -> JointPositions;

    /// Joint positions reaching the target as closely as the geometry
    /// allows. This never fails: targets outside the workspace are resolved
    /// by clamping or radial projection, per variant. Revolute components
    /// of the result are wrapped into (-pi, pi], the prismatic component is
    /// clamped into the travel range.
    fn inverse(&self, target: &Pose) -> Joints;

    /// Advisory check whether the target lies in the workspace. Does not
    /// gate [Kinematics::inverse].
    fn reachable(&self, target: &Pose) -> bool;

    /// Joint kinds in chain order, fixing the interpretation of a [Joints]
    /// value produced by or passed to this model.
    fn joint_layout(&self) -> &'static [JointType; 4];

    /// Travel range (min, max) of the prismatic joint, in meters.
    fn travel_bounds(&self) -> (f64, f64);

    /// The given joints with the prismatic component clamped into the
    /// travel range. Revolute components pass through unchanged; linear
    /// interpolation must not wrap them mid-path.
    fn clamp_travel(&self, qs: &Joints) -> Joints {
        let (lo, hi) = self.travel_bounds();
        let mut out = *qs;
        for (i, kind) in self.joint_layout().iter().enumerate() {
            if *kind == JointType::Prismatic {
                out[i] = out[i].clamp(lo, hi);
            }
        }
        out
    }
}
