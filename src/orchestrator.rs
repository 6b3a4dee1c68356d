//! Pick and place task sequencing

use crate::annotations::{PathFlags, TaskStep};
use crate::kinematic_traits::{Joints, Kinematics, Pose};
use crate::plan_error::PlanError;
use crate::sequencer::{JointSweep, MotionSequencer};
use nalgebra::Point3;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Requests the orchestrator accepts. UI layers map their buttons onto
/// these and stay decoupled from the sequencing.
#[derive(Debug, Clone)]
pub enum Command {
    /// Run the full pick and place cycle for one object.
    PickObject(usize),
    /// Move to the fixed home configuration. Valid in any state and does
    /// not touch any object.
    GoHome,
    /// Move to a named waypoint of the scene.
    MoveTo(String),
}

/// One manipulated object. `carried` is implicit: while a cycle is moving
/// the object, its position follows the gripper; once `placed` is set the
/// object is frozen and further pick requests for it are no-ops.
#[derive(Debug, Clone, Copy)]
pub struct ObjectState {
    pub position: Point3<f64>,
    pub placed: bool,
}

/// Scene-level tuning. These are configuration inputs, not constants: safe
/// heights are workspace-specific.
#[derive(Debug, Clone, Copy)]
pub struct TaskConfig {
    /// Height at which the gripper travels between columns, meters.
    pub travel_height: f64,
    /// Interpolation steps per leg of a cycle, at least 1.
    pub steps_per_leg: usize,
    /// Joint configuration of the parking pose.
    pub home: Joints,
}

/// Sequences pick and place cycles over a fixed scene of objects and
/// destination slots, tracking object state across cycles. All motion goes
/// through the [MotionSequencer]; the orchestrator owns the current joint
/// state and commits it step by step as the returned cycles are consumed.
pub struct PickPlaceOrchestrator {
    robot: Arc<dyn Kinematics>,
    sequencer: MotionSequencer,
    objects: Vec<ObjectState>,
    slots: Vec<Point3<f64>>,
    waypoints: HashMap<String, Pose>,
    config: TaskConfig,
    current: Joints,
}

impl PickPlaceOrchestrator {
    /// Creates an empty scene. The robot starts at the home configuration.
    pub fn new(robot: Arc<dyn Kinematics>, config: TaskConfig) -> Self {
        PickPlaceOrchestrator {
            sequencer: MotionSequencer::new(Arc::clone(&robot)),
            robot,
            objects: Vec::new(),
            slots: Vec::new(),
            waypoints: HashMap::new(),
            config,
            current: config.home,
        }
    }

    /// Adds an object at its floor position together with the destination
    /// slot it must end up in. Returns the object index.
    pub fn add_object(&mut self, floor: Point3<f64>, slot: Point3<f64>) -> usize {
        self.objects.push(ObjectState {
            position: floor,
            placed: false,
        });
        self.slots.push(slot);
        self.objects.len() - 1
    }

    /// Registers a named waypoint for [Command::MoveTo].
    pub fn add_waypoint(&mut self, name: impl Into<String>, pose: Pose) {
        self.waypoints.insert(name.into(), pose);
    }

    pub fn objects(&self) -> &[ObjectState] {
        &self.objects
    }

    pub fn current_joints(&self) -> &Joints {
        &self.current
    }

    pub fn robot(&self) -> &Arc<dyn Kinematics> {
        &self.robot
    }

    /// Dispatches a command to the matching sequencing method.
    pub fn submit(&mut self, command: Command) -> Result<PickPlaceCycle<'_>, PlanError> {
        match command {
            Command::PickObject(index) => self.pick_and_place(index),
            Command::GoHome => self.go_home(),
            Command::MoveTo(name) => self.move_to_waypoint(&name),
        }
    }

    /// Plans the full cycle for object `index`: approach above the object,
    /// descend and grasp, lift, transit above the slot, lower and release,
    /// retreat. Object state changes become visible as the returned lazy
    /// cycle is consumed. A cycle for an already placed object is empty.
    pub fn pick_and_place(&mut self, index: usize) -> Result<PickPlaceCycle<'_>, PlanError> {
        if index >= self.objects.len() {
            return Err(PlanError::NoSuchObject {
                index,
                count: self.objects.len(),
            });
        }
        self.check_steps()?;

        if self.objects[index].placed {
            debug!(index, "object already placed, empty cycle");
            return Ok(PickPlaceCycle::new(self, Vec::new(), None));
        }

        let floor = self.objects[index].position;
        let slot = self.slots[index];
        let lifted = |p: Point3<f64>, h: f64| Point3::new(p.x, p.y, h);

        let above_pick = self.goal_for(&Pose::radial(lifted(floor, self.config.travel_height)));
        let pick = self.goal_for(&Pose::radial(floor));
        let above_slot = self.goal_for(&Pose::radial(lifted(slot, self.config.travel_height)));
        let place = self.goal_for(&Pose::radial(slot));

        let legs = vec![
            Leg::new(above_pick, PathFlags::APPROACH, Grip::Keep),
            Leg::new(pick, PathFlags::DESCEND, Grip::Grasp),
            Leg::new(above_pick, PathFlags::LIFT | PathFlags::CARRY, Grip::Keep),
            Leg::new(above_slot, PathFlags::TRANSIT | PathFlags::CARRY, Grip::Keep),
            Leg::new(place, PathFlags::LOWER | PathFlags::CARRY, Grip::Release),
            Leg::new(above_slot, PathFlags::RETREAT, Grip::Keep),
        ];
        debug!(index, legs = legs.len(), "pick and place cycle planned");
        Ok(PickPlaceCycle::new(self, legs, Some(index)))
    }

    /// Single-leg move to the home configuration. Never touches objects.
    pub fn go_home(&mut self) -> Result<PickPlaceCycle<'_>, PlanError> {
        self.check_steps()?;
        let legs = vec![Leg::new(self.config.home, PathFlags::HOMING, Grip::Keep)];
        Ok(PickPlaceCycle::new(self, legs, None))
    }

    /// Single-leg move to a named waypoint. Never touches objects.
    pub fn move_to_waypoint(&mut self, name: &str) -> Result<PickPlaceCycle<'_>, PlanError> {
        self.check_steps()?;
        let pose = *self
            .waypoints
            .get(name)
            .ok_or_else(|| PlanError::UnknownWaypoint(name.to_string()))?;
        let goal = self.goal_for(&pose);
        let legs = vec![Leg::new(goal, PathFlags::TRAVERSE, Grip::Keep)];
        Ok(PickPlaceCycle::new(self, legs, None))
    }

    fn check_steps(&self) -> Result<(), PlanError> {
        if self.config.steps_per_leg == 0 {
            return Err(PlanError::InvalidStepCount(self.config.steps_per_leg));
        }
        Ok(())
    }

    /// Joint goal for a Cartesian target, with an advisory workspace check.
    /// Out-of-range targets still produce a clamped best-effort goal.
    fn goal_for(&self, target: &Pose) -> Joints {
        if !self.robot.reachable(target) {
            warn!(
                "target ({:.3}, {:.3}, {:.3}) out of workspace, clamped solution used",
                target.point.x, target.point.y, target.point.z
            );
        }
        self.robot.inverse(target)
    }
}

/// Gripper action applied when the last step of a leg is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grip {
    Keep,
    Grasp,
    Release,
}

struct Leg {
    goal: Joints,
    flags: PathFlags,
    grip: Grip,
}

impl Leg {
    fn new(goal: Joints, flags: PathFlags, grip: Grip) -> Self {
        Leg { goal, flags, grip }
    }
}

/// Lazy stream of [TaskStep]s for one command. Exclusively borrows the
/// orchestrator, so exactly one cycle can be live at a time; robot state and
/// object transitions are committed per consumed step. Dropping the cycle
/// mid-way leaves the scene at the last consumed step.
pub struct PickPlaceCycle<'a> {
    task: &'a mut PickPlaceOrchestrator,
    legs: std::vec::IntoIter<Leg>,
    active: Option<(Leg, JointSweep)>,
    object: Option<usize>,
}

impl<'a> PickPlaceCycle<'a> {
    fn new(task: &'a mut PickPlaceOrchestrator, legs: Vec<Leg>, object: Option<usize>) -> Self {
        PickPlaceCycle {
            task,
            legs: legs.into_iter(),
            active: None,
            object,
        }
    }
}

impl Iterator for PickPlaceCycle<'_> {
    type Item = TaskStep;

    fn next(&mut self) -> Option<TaskStep> {
        loop {
            match &mut self.active {
                None => {
                    let leg = self.legs.next()?;
                    let sweep = self.task.sequencer.leg(
                        &self.task.current,
                        &leg.goal,
                        self.task.config.steps_per_leg,
                    );
                    self.active = Some((leg, sweep));
                }
                Some((leg, sweep)) => match sweep.next() {
                    None => {
                        self.active = None;
                    }
                    Some(joints) => {
                        let last = sweep.len() == 0;
                        self.task.current = joints;

                        let mut flags = leg.flags;
                        if last && leg.grip == Grip::Grasp {
                            flags |= PathFlags::GRASP;
                        }
                        if last && leg.grip == Grip::Release {
                            flags |= PathFlags::RELEASE;
                        }

                        // While carrying, the payload follows the gripper
                        // exactly; the detach point is where forward
                        // kinematics actually ends up, not the requested
                        // target.
                        let mut carried = None;
                        if flags.contains(PathFlags::CARRY) {
                            let at = self.task.robot.forward(&joints).point;
                            if let Some(k) = self.object {
                                self.task.objects[k].position = at;
                                if last && leg.grip == Grip::Release {
                                    self.task.objects[k].placed = true;
                                }
                            }
                            carried = Some(at);
                        }

                        return Some(TaskStep {
                            joints,
                            flags,
                            carried,
                        });
                    }
                },
            }
        }
    }
}
