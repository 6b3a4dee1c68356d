//! Error handling for sequencing requests

/// Caller contract violations when requesting motion sequences. Geometry is
/// never a source of errors here: out-of-workspace targets are clamped or
/// projected by the kinematic models instead.
#[derive(Debug)]
pub enum PlanError {
    /// The sequencer was asked for a sweep of zero steps. Callers rely on
    /// the final step being the goal, so an empty sweep would be wrong in a
    /// way that is hard to notice.
    InvalidStepCount(usize),
    /// Pick and place was requested for an object index outside the scene.
    NoSuchObject { index: usize, count: usize },
    /// A move was requested to a waypoint name the scene does not define.
    UnknownWaypoint(String),
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            PlanError::InvalidStepCount(steps) => {
                write!(f, "Invalid step count: {} (must be at least 1)", steps)
            }
            PlanError::NoSuchObject { index, count } => {
                write!(f, "No such object: {} (the scene has {})", index, count)
            }
            PlanError::UnknownWaypoint(ref name) => {
                write!(f, "Unknown waypoint: {}", name)
            }
        }
    }
}

impl std::error::Error for PlanError {}
