//! Defines the geometric parameter data structure

pub mod scara_kinematics {

    /// Geometry of one manipulator. Created once at model construction and
    /// never mutated. See [parameters_robots.rs](parameters_robots.rs) for
    /// presets of concrete arms.
    #[derive(Debug, Clone, Copy)]
    pub struct Parameters {
        /// Length of the first planar link (shoulder), meters.
        pub a1: f64,

        /// Length of the second planar link (elbow), meters.
        pub a2: f64,

        /// Length of the wrist link, the last link of the planar chain.
        /// The SCARA variant reads this as L3.
        pub a4: f64,

        /// Vertical offset of the planar chain above the floor: base height
        /// for the articulated variant, column height for the SCARA variant.
        pub base_height: f64,

        /// Lower bound of the prismatic travel, meters.
        pub d3_min: f64,

        /// Upper bound of the prismatic travel, meters.
        pub d3_max: f64,

        /// Margin by which an out-of-reach wrist center is pulled inside
        /// the maximum planar radius when the SCARA variant projects it
        /// back into the workspace. The projected point lands exactly at
        /// radius a1 + a2 - reach_margin.
        pub reach_margin: f64,
    }

    impl Parameters {
        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            format!(
                "scara_kinematics_geometric_parameters:\n  \
              a1: {}\n  \
              a2: {}\n  \
              a4: {}\n  \
              base_height: {}\n  \
              d3_min: {}\n  \
              d3_max: {}\n  \
              reach_margin: {}\n",
                self.a1,
                self.a2,
                self.a4,
                self.base_height,
                self.d3_min,
                self.d3_max,
                self.reach_margin,
            )
        }

        /// Maximum radius of the planar workspace (arm fully stretched).
        pub fn max_radius(&self) -> f64 {
            self.a1 + self.a2 + self.a4
        }
    }
}
