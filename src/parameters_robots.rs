//! Hardcoded geometric parameters for a few arms

pub mod scara_kinematics {
    use crate::parameters::scara_kinematics::Parameters;

    #[allow(dead_code)]
    impl Parameters {
        // Provides default values
        pub fn new() -> Self {
            Parameters {
                a1: 0.0,
                a2: 0.0,
                a4: 0.0,
                base_height: 0.0,
                d3_min: 0.0,
                d3_max: 0.0,
                reach_margin: 0.0,
            }
        }

        /// Articulated RRPR arm: two planar links and a rotating wrist on a
        /// vertical prismatic column, base flush with the floor.
        pub fn articulated_rrpr() -> Self {
            Parameters {
                a1: 0.4,
                a2: 0.3,
                a4: 0.08,
                base_height: 0.0,
                d3_min: 0.0,
                d3_max: 0.8,
                reach_margin: 1e-4,
            }
        }

        /// Benchtop SCARA (RRRP): three planar links on a fixed column,
        /// short vertical lift at the gripper.
        pub fn bench_scara() -> Self {
            Parameters {
                a1: 0.30,
                a2: 0.25,
                a4: 0.18,
                base_height: 0.25,
                d3_min: -0.25,
                d3_max: 0.25,
                reach_margin: 1e-4,
            }
        }

        /// Smaller SCARA for desktop cells. Same plan as bench_scara with
        /// shorter links and half the lift.
        pub fn compact_scara() -> Self {
            Parameters {
                a1: 0.20,
                a2: 0.16,
                a4: 0.10,
                base_height: 0.18,
                d3_min: -0.12,
                d3_max: 0.12,
                reach_margin: 1e-4,
            }
        }
    }
}
