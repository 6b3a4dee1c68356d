use crate::kinematic_traits::Joints;
use bitflags::bitflags;
use nalgebra::Point3;

bitflags! {
    /// Flags that can be set on the steps of a sequenced motion
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PathFlags: u32 {
        const NONE = 0b0000_0000;

        /// Moving over the object at the safe travel height, before
        /// descending for the pick.
        const APPROACH =    0b0000_0001;

        /// Moving straight down onto the object.
        const DESCEND =     0b0000_0010;

        /// Set on the step where the gripper reaches the object. Close the
        /// gripper mechanism when consuming this step.
        const GRASP =       0b0000_0100;

        /// Moving back up to the travel height with the payload attached.
        const LIFT =        0b0000_1000;

        /// Moving between the pick and place columns at the travel height.
        const TRANSIT =     0b0001_0000;

        /// Moving down onto the destination slot, payload still attached.
        const LOWER =       0b0010_0000;

        /// Set on the step where the payload is detached. Open the gripper
        /// mechanism when consuming this step.
        const RELEASE =     0b0100_0000;

        /// Moving back up to the travel height, gripper empty.
        const RETREAT =     0b1000_0000;

        /// Moving to the fixed home joint configuration.
        const HOMING =      0b0001_0000_0000;

        /// Plain move to a named waypoint, no payload involved.
        const TRAVERSE =    0b0010_0000_0000;

        /// The payload is attached during this step and follows the
        /// gripper exactly.
        const CARRY =       0b0100_0000_0000;
    }
}

/// One step of a sequenced task. While a payload is attached, `carried`
/// holds its position, which is exactly the gripper position of this step.
/// Rendering consumes this stream instead of tracking the gripper itself.
#[derive(Debug, Clone, Copy)]
pub struct TaskStep {
    pub joints: Joints,
    pub flags: PathFlags,
    pub carried: Option<Point3<f64>>,
}
