#[cfg(test)]
mod tests {
    use crate::kinematic_traits::{J3, Joints, Kinematics, Pose};
    use crate::kinematics_impl::ArticulatedKinematics;
    use crate::parameters::scara_kinematics::Parameters;
    use crate::plan_error::PlanError;
    use crate::scara::ScaraKinematics;
    use crate::sequencer::MotionSequencer;
    use std::sync::Arc;

    fn scara_sequencer() -> MotionSequencer {
        MotionSequencer::new(Arc::new(ScaraKinematics::new(Parameters::bench_scara())))
    }

    fn articulated_sequencer() -> MotionSequencer {
        MotionSequencer::new(Arc::new(ArticulatedKinematics::new(
            Parameters::articulated_rrpr(),
        )))
    }

    #[test]
    fn test_endpoint_is_goal_exactly() {
        let sequencer = scara_sequencer();
        let a: Joints = [0.1, -0.4, 0.3, -0.2];
        let b: Joints = [1.2, 0.5, -2.0, 0.2];

        for steps in [1, 2, 7, 33] {
            let produced: Vec<Joints> = sequencer
                .joint_sweep(&a, &b, steps)
                .expect("valid step count")
                .collect();
            assert_eq!(produced.len(), steps);
            assert_eq!(produced[steps - 1], b);
        }
    }

    #[test]
    fn test_single_step_jumps_to_goal() {
        let sequencer = scara_sequencer();
        let produced: Vec<Joints> = sequencer
            .joint_sweep(&[0.0; 4], &[0.4, 0.3, 0.2, 0.1], 1)
            .expect("valid step count")
            .collect();
        assert_eq!(produced, vec![[0.4, 0.3, 0.2, 0.1]]);
    }

    #[test]
    fn test_interpolation_is_linear() {
        let sequencer = scara_sequencer();
        let a: Joints = [0.0, 0.0, 0.0, 0.0];
        let b: Joints = [1.0, -0.8, 0.4, 0.2];
        let produced: Vec<Joints> = sequencer
            .joint_sweep(&a, &b, 4)
            .expect("valid step count")
            .collect();

        for (i, qs) in produced.iter().enumerate() {
            let t = (i + 1) as f64 / 4.0;
            for j in 0..4 {
                assert!(
                    (qs[j] - t * b[j]).abs() < 1e-12,
                    "step {} joint {}",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_intermediate_prismatic_reclamped() {
        // Start outside the travel range: intermediate steps must be
        // clamped back in, while the endpoint stays the goal verbatim.
        let sequencer = articulated_sequencer();
        let a: Joints = [0.0, 0.0, -0.4, 0.0];
        let b: Joints = [0.0, 0.0, 0.8, 0.0];
        let produced: Vec<Joints> = sequencer
            .joint_sweep(&a, &b, 4)
            .expect("valid step count")
            .collect();

        assert_eq!(produced[0][J3], 0.0); // raw -0.1, clamped up
        assert!((produced[1][J3] - 0.2).abs() < 1e-12);
        assert!((produced[2][J3] - 0.5).abs() < 1e-12);
        assert_eq!(produced[3], b);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let sequencer = scara_sequencer();
        let result = sequencer.joint_sweep(&[0.0; 4], &[1.0; 4], 0);
        match result {
            Err(PlanError::InvalidStepCount(0)) => {}
            other => panic!("expected InvalidStepCount, got {:?}", other.map(|s| s.steps())),
        }
    }

    #[test]
    fn test_restartable_and_deterministic() {
        let sequencer = scara_sequencer();
        let a: Joints = [0.3, -0.2, 0.1, 0.0];
        let b: Joints = [-1.0, 0.7, -0.3, 0.2];

        let mut sweep = sequencer.joint_sweep(&a, &b, 9).expect("valid step count");
        let first: Vec<Joints> = sweep.by_ref().collect();
        sweep.restart();
        let second: Vec<Joints> = sweep.collect();
        assert_eq!(first, second);

        // A fresh sweep from the same inputs regenerates the same sequence.
        let third: Vec<Joints> = sequencer
            .joint_sweep(&a, &b, 9)
            .expect("valid step count")
            .collect();
        assert_eq!(first, third);
    }

    #[test]
    fn test_move_to_ends_at_inverse_solution() {
        let sequencer = scara_sequencer();
        let target = Pose::position(0.4, 0.2, 0.3);
        let goal = sequencer.robot().inverse(&target);

        let produced: Vec<Joints> = sequencer
            .move_to(&[0.0; 4], &target, 15)
            .expect("valid step count")
            .collect();
        assert_eq!(produced.len(), 15);
        assert_eq!(produced[14], goal);
    }

    #[test]
    fn test_sweep_reports_remaining_length() {
        let sequencer = scara_sequencer();
        let mut sweep = sequencer
            .joint_sweep(&[0.0; 4], &[1.0; 4], 5)
            .expect("valid step count");
        assert_eq!(sweep.len(), 5);
        sweep.next();
        assert_eq!(sweep.len(), 4);
    }
}
