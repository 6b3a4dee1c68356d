//! Joint space motion sequencing

use crate::kinematic_traits::{Joints, Kinematics, Pose};
use crate::plan_error::PlanError;
use crate::utils::{is_valid, joint_travel};
use std::sync::Arc;
use tracing::{debug, warn};

/// Produces finite, restartable sweeps interpolating linearly in joint
/// space. Straight lines in joint angles do not correspond to straight
/// lines in Cartesian space; callers that need a Cartesian-looking path
/// provide denser waypoints instead.
pub struct MotionSequencer {
    robot: Arc<dyn Kinematics>,
}

impl MotionSequencer {
    pub fn new(robot: Arc<dyn Kinematics>) -> Self {
        MotionSequencer { robot }
    }

    pub fn robot(&self) -> &Arc<dyn Kinematics> {
        &self.robot
    }

    /// Lazy sweep of `steps` joint configurations from `start` to `goal`.
    /// Intermediate steps have the prismatic component re-clamped into the
    /// travel range (interpolation can transiently leave it when start and
    /// goal straddle a clamped region); the final step equals `goal`
    /// exactly. `steps` must be at least 1.
    pub fn joint_sweep(
        &self,
        start: &Joints,
        goal: &Joints,
        steps: usize,
    ) -> Result<JointSweep, PlanError> {
        if steps == 0 {
            return Err(PlanError::InvalidStepCount(steps));
        }
        if !is_valid(start) || !is_valid(goal) {
            // Out of contract; the sweep still runs but the output is
            // meaningless.
            warn!("non-finite joints in sweep request: {:?} -> {:?}", start, goal);
        }
        debug!(
            steps,
            travel = joint_travel(start, goal),
            "sweep planned"
        );
        Ok(self.leg(start, goal, steps))
    }

    /// Sweep towards a Cartesian target: the joint goal is obtained from
    /// the kinematic model first, so the target may lie outside the
    /// workspace and will be clamped or projected per the model's policy.
    pub fn move_to(
        &self,
        start: &Joints,
        target: &Pose,
        steps: usize,
    ) -> Result<JointSweep, PlanError> {
        if !self.robot.reachable(target) {
            warn!(
                "target ({:.3}, {:.3}, {:.3}) out of workspace, moving to the clamped solution",
                target.point.x, target.point.y, target.point.z
            );
        }
        let goal = self.robot.inverse(target);
        self.joint_sweep(start, &goal, steps)
    }

    /// Sweep with the step count already validated by the caller.
    pub(crate) fn leg(&self, start: &Joints, goal: &Joints, steps: usize) -> JointSweep {
        JointSweep {
            robot: Arc::clone(&self.robot),
            start: *start,
            goal: *goal,
            steps,
            produced: 0,
        }
    }
}

/// Lazy linear interpolation between two joint vectors. Deterministic for
/// the same inputs: the sequence can be restarted or regenerated at will.
/// Produces nothing but joint vectors; committing them as the new robot
/// state is the caller's decision.
pub struct JointSweep {
    robot: Arc<dyn Kinematics>,
    start: Joints,
    goal: Joints,
    steps: usize,
    produced: usize,
}

impl JointSweep {
    pub fn goal(&self) -> &Joints {
        &self.goal
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Rewind to the first step; the regenerated sequence is identical.
    pub fn restart(&mut self) {
        self.produced = 0;
    }
}

impl Iterator for JointSweep {
    type Item = Joints;

    fn next(&mut self) -> Option<Joints> {
        if self.produced >= self.steps {
            return None;
        }
        self.produced += 1;
        if self.produced == self.steps {
            // The endpoint is the goal verbatim, free of accumulated
            // interpolation error.
            return Some(self.goal);
        }
        let t = self.produced as f64 / self.steps as f64;
        let mut qs = [0.0; 4];
        for i in 0..4 {
            qs[i] = self.start[i] + t * (self.goal[i] - self.start[i]);
        }
        Some(self.robot.clamp_travel(&qs))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.steps - self.produced;
        (left, Some(left))
    }
}

impl ExactSizeIterator for JointSweep {}
