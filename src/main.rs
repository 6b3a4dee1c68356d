use nalgebra::Point3;
use rs_scara_kinematics::annotations::PathFlags;
use rs_scara_kinematics::kinematic_traits::{JOINTS_AT_ZERO, Kinematics, Pose};
use rs_scara_kinematics::orchestrator::{Command, PickPlaceOrchestrator, TaskConfig};
use rs_scara_kinematics::parameters::scara_kinematics::Parameters;
use rs_scara_kinematics::scara::ScaraKinematics;
use rs_scara_kinematics::utils::{dump_joints, dump_pose};
use std::sync::Arc;

/// Usage example: a benchtop SCARA moving two objects from the floor onto
/// shelf slots, then parking.
fn main() -> anyhow::Result<()> {
    let parameters = scene_parameters()?;
    println!("Arm geometry:\n{}", parameters.to_yaml());

    let robot: Arc<dyn Kinematics> = Arc::new(ScaraKinematics::new(parameters));
    let config = TaskConfig {
        travel_height: 0.45,
        steps_per_leg: 20,
        home: JOINTS_AT_ZERO,
    };
    let mut task = PickPlaceOrchestrator::new(Arc::clone(&robot), config);
    task.add_object(
        Point3::new(0.35, -0.15, 0.02),
        Point3::new(0.40, 0.52, 0.25),
    );
    task.add_object(
        Point3::new(0.30, 0.10, 0.02),
        Point3::new(-0.35, 0.40, 0.25),
    );
    task.add_waypoint("Inspection", Pose::position(0.25, -0.35, 0.40));

    for index in 0..task.objects().len() {
        println!("\nObject {}:", index);
        let mut steps = 0;
        for step in task.submit(Command::PickObject(index))? {
            steps += 1;
            if step.flags.contains(PathFlags::GRASP) {
                println!("  grasped at step {}", steps);
            }
            if step.flags.contains(PathFlags::RELEASE) {
                if let Some(at) = step.carried {
                    println!(
                        "  released at step {}: x = {:.3}, y = {:.3}, z = {:.3}",
                        steps, at.x, at.y, at.z
                    );
                }
            }
        }
        let placed = task.objects()[index];
        println!(
            "  done = {}, rests at x = {:.3}, y = {:.3}, z = {:.3}",
            placed.placed, placed.position.x, placed.position.y, placed.position.z
        );
    }

    println!("\nVisiting the inspection waypoint:");
    for _ in task.submit(Command::MoveTo("Inspection".to_string()))? {}
    dump_joints(robot.as_ref(), task.current_joints());
    dump_pose(&robot.forward(task.current_joints()));

    println!("\nParking:");
    for _ in task.submit(Command::GoHome)? {}
    dump_joints(robot.as_ref(), task.current_joints());

    Ok(())
}

#[cfg(feature = "allow_filesystem")]
fn scene_parameters() -> anyhow::Result<Parameters> {
    use clap::Parser;

    /// Runs the pick and place demo scene.
    #[derive(Parser)]
    struct Args {
        /// YAML file with the arm geometry; the benchtop preset is used
        /// when not given.
        #[arg(long)]
        parameters: Option<std::path::PathBuf>,
    }

    let args = Args::parse();
    Ok(match args.parameters {
        Some(path) => Parameters::from_yaml_file(path)?,
        None => Parameters::bench_scara(),
    })
}

#[cfg(not(feature = "allow_filesystem"))]
fn scene_parameters() -> anyhow::Result<Parameters> {
    Ok(Parameters::bench_scara())
}
