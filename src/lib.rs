//! Rust implementation of forward and inverse kinematic solutions for 4 axis
//! SCARA type manipulators (a planar revolute chain plus one vertical
//! prismatic joint), with sequencing of pick and place tasks on top.
//!
//! # Features
//!
//! - Two arm variants behind one `Kinematics` trait: an articulated RRPR arm
//!   (planar two-link chain and rotating wrist riding on a vertical prismatic
//!   column) and a SCARA style RRRP arm (three-link planar chain on a fixed
//!   column with a short vertical lift).
//! - Closed-form inverse solutions. The inverse never fails: targets outside
//!   the workspace are resolved by clamping (articulated) or radial
//!   projection back onto the workspace boundary (SCARA), so a best-effort
//!   joint vector is always available.
//! - The articulated variant exposes both elbow solution branches; the SCARA
//!   variant derives its wrist heading from the target.
//! - Forward kinematics also returns the ordered positions of all joints,
//!   as needed for stick-figure rendering of the arm.
//! - Joint range constraints with wrap-around, consulted by the advisory
//!   reachability check.
//! - Lazy, restartable joint-space sweeps with exact goal endpoints, and a
//!   pick and place orchestrator that tracks the carried payload as an
//!   explicit per-step stream.
//! - Arm geometry can be loaded from YAML files (feature `allow_filesystem`).
//!
//! # Parameters
//!
//! This library uses six geometric parameters (_a1, a2, a4, base_height,
//! d3_min, d3_max_) plus the projection margin _reach_margin_. The arm is at
//! zero when stretched along the positive X axis with the prismatic joint at
//! the travel origin. Fill out a `scara_kinematics::Parameters` structure or
//! pick a preset from `parameters_robots.rs`.

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_impl;
pub mod scara;

pub mod constraints;

pub mod annotations;

pub mod plan_error;
pub mod sequencer;
pub mod orchestrator;

#[cfg(test)]
mod tests;
