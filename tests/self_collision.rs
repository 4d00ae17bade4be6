use nalgebra::DVector;
use jointspace::robot_modules::robot::{Robot, SelfCollisionChecker};
use jointspace::robot_modules::robot_collision_map_module::{CollisionMapGrid, CollisionReport, RobotCollisionMapModule};
use jointspace::robot_modules::robot_controller_module::{JointTrajectory, RobotController};
use jointspace::robot_modules::robot_joint_state_module::{RobotJointState, RobotJointStateModule};
use jointspace::robot_modules::robot_model_module::RobotModelModule;

const TEST_URDF: &str = r#"
<robot name="testbot">
    <link name="base_link"/>
    <link name="link1"/>
    <link name="link2"/>
    <joint name="joint1" type="revolute">
        <parent link="base_link"/>
        <child link="link1"/>
        <axis xyz="0 0 1"/>
        <limit lower="-3.14" upper="3.14" effort="10.0" velocity="1.0"/>
    </joint>
    <joint name="joint2" type="revolute">
        <parent link="link1"/>
        <child link="link2"/>
        <axis xyz="0 0 1"/>
        <limit lower="-3.14" upper="3.14" effort="10.0" velocity="1.0"/>
    </joint>
</robot>"#;

const TEST_COLLISION_MAP: &str = r#"
<collisionmap>
    <pair dims="2 2" min="0 0" max="1 1" joints="joint1 joint2">1 0 0 1</pair>
</collisionmap>"#;

fn spawn_test_robot(collision_map_xml: &str) -> Robot {
    let mut robot = Robot::new_from_urdf_string(TEST_URDF).unwrap();
    let module = RobotCollisionMapModule::new_from_xml_str(collision_map_xml).unwrap();
    robot.set_collision_map_module(module);
    robot.compute_internal_information();
    robot
}

#[test]
fn test_model_module_structure() {
    let robot_model_module = RobotModelModule::new_from_urdf_string(TEST_URDF).unwrap();
    assert_eq!(robot_model_module.robot_name(), "testbot");
    assert_eq!(robot_model_module.num_links(), 3);
    assert_eq!(robot_model_module.num_joints(), 2);
    assert_eq!(robot_model_module.world_link_idx(), 0);
    assert_eq!(robot_model_module.get_joint_idx_from_name("joint2"), Some(1));
    assert_eq!(robot_model_module.get_joint_idx_from_name("nope"), None);

    let joint1 = &robot_model_module.joints()[0];
    assert_eq!(joint1.preceding_link_idx(), Some(0));
    assert_eq!(joint1.child_link_idx(), Some(1));
}

#[test]
fn test_free_cell_reports_no_collision() {
    let mut robot = spawn_test_robot(TEST_COLLISION_MAP);
    robot.set_joint_state(DVector::from_vec(vec![0.25, 0.25])).unwrap();
    assert_eq!(robot.check_self_collision(None), false);
}

#[test]
fn test_colliding_cell_reports_collision_with_report() {
    let mut robot = spawn_test_robot(TEST_COLLISION_MAP);
    robot.set_joint_state(DVector::from_vec(vec![0.25, 0.75])).unwrap();

    let mut report = CollisionReport::new_empty();
    assert_eq!(robot.check_self_collision(Some(&mut report)), true);
    assert_eq!(report.num_collisions(), 1);
    // joint1 attaches base_link/link1, joint2 attaches link1/link2; link1 is deduplicated.
    assert_eq!(report.colliding_link_idxs(), &vec![0, 1, 2]);
    assert_eq!(report.link1_idx(), Some(0));
    assert_eq!(report.link2_idx(), Some(1));
}

#[test]
fn test_index_mapping_at_bounds() {
    // All cells colliding, so a computed index tuple always hits.
    let all_colliding = r#"
        <collisionmap>
            <pair dims="2 2" min="0 0" max="1 1" joints="joint1 joint2">0 0 0 0</pair>
        </collisionmap>"#;
    let mut robot = spawn_test_robot(all_colliding);

    // Exactly at the lower bound -> cell 0.
    robot.set_joint_state(DVector::from_vec(vec![0.0, 0.0])).unwrap();
    assert_eq!(robot.check_self_collision(None), true);

    // Just below the upper bound -> last cell.
    robot.set_joint_state(DVector::from_vec(vec![0.999, 0.999])).unwrap();
    assert_eq!(robot.check_self_collision(None), true);

    // At the upper bound the value is out of table range and the grid is skipped.
    robot.set_joint_state(DVector::from_vec(vec![1.0, 0.5])).unwrap();
    assert_eq!(robot.check_self_collision(None), false);

    // Well below the lower bound the grid is skipped too.
    robot.set_joint_state(DVector::from_vec(vec![-1.0, 0.5])).unwrap();
    assert_eq!(robot.check_self_collision(None), false);
}

#[test]
fn test_unresolved_joint_disables_grid() {
    let unresolved = r#"
        <collisionmap>
            <pair dims="2 2" min="0 0" max="1 1" joints="joint1 phantom_joint">0 0 0 0</pair>
        </collisionmap>"#;
    let mut robot = spawn_test_robot(unresolved);

    // Every cell is colliding, but the grid can never apply.
    robot.set_joint_state(DVector::from_vec(vec![0.25, 0.25])).unwrap();
    assert_eq!(robot.check_self_collision(None), false);
}

#[test]
fn test_unbound_hand_built_grid_is_skipped() {
    let robot_model_module = RobotModelModule::new_from_urdf_string(TEST_URDF).unwrap();
    let robot_joint_state_module = RobotJointStateModule::new(&robot_model_module);
    let robot_joint_state = robot_joint_state_module.spawn_zeros_robot_joint_state();

    // Built through the public setters and never bound, so every per-axis vector
    // is still empty.
    let mut grid = CollisionMapGrid::new_empty();
    grid.set_dims(&[2, 2]);
    let module = RobotCollisionMapModule::new_from_grids(vec![grid]);

    assert_eq!(module.check_self_collision(&robot_model_module, &robot_joint_state, None), false);
}

#[test]
fn test_binding_is_idempotent() {
    let robot_model_module = RobotModelModule::new_from_urdf_string(TEST_URDF).unwrap();
    let mut module = RobotCollisionMapModule::new_from_xml_str(TEST_COLLISION_MAP).unwrap();

    module.bind_to_model(&robot_model_module);
    let joint_idxs_first = module.grids()[0].joint_idxs().clone();
    let deltas_first = module.grids()[0].deltas().clone();

    module.bind_to_model(&robot_model_module);
    assert_eq!(module.grids()[0].joint_idxs(), &joint_idxs_first);
    assert_eq!(module.grids()[0].deltas(), &deltas_first);

    assert_eq!(joint_idxs_first, vec![Some(0), Some(1)]);
    assert_eq!(deltas_first, vec![2.0, 2.0]);
}

#[test]
fn test_collision_suppressed_with_fewer_than_two_enabled_links() {
    let mut robot = spawn_test_robot(TEST_COLLISION_MAP);
    robot.set_joint_state(DVector::from_vec(vec![0.25, 0.75])).unwrap();

    // Disabling one of the three attached links still leaves two enabled.
    robot.set_link_enabled(0, false).unwrap();
    assert_eq!(robot.check_self_collision(None), true);

    // With only one enabled link the hit is suppressed.
    robot.set_link_enabled(2, false).unwrap();
    assert_eq!(robot.check_self_collision(None), false);

    // Re-enabling restores the report.
    robot.set_link_enabled(0, true).unwrap();
    assert_eq!(robot.check_self_collision(None), true);
}

#[test]
fn test_degenerate_axis_is_always_in_range() {
    // Axis 1 declares min == max and therefore never consults its range; its grid
    // index stays pinned at 0, so only the first column of the table matters.
    let degenerate = r#"
        <collisionmap>
            <pair dims="2 2" min="0 5" max="1 5" joints="joint1 joint2">0 1 1 1</pair>
        </collisionmap>"#;
    let mut robot = spawn_test_robot(degenerate);

    // joint2's value is far outside any declared range and is never range-checked.
    robot.set_joint_state(DVector::from_vec(vec![0.25, 100.0])).unwrap();
    assert_eq!(robot.check_self_collision(None), true);

    robot.set_joint_state(DVector::from_vec(vec![0.75, 100.0])).unwrap();
    assert_eq!(robot.check_self_collision(None), false);
}

#[test]
fn test_evaluation_stops_at_first_confirmed_hit() {
    let two_pairs = r#"
        <collisionmap>
            <pair dims="2 2" min="0 0" max="1 1" joints="joint1 joint2">1 1 1 1</pair>
            <pair dims="2 2" min="0 0" max="1 1" joints="joint1 joint2">0 0 0 0</pair>
        </collisionmap>"#;
    let mut robot = spawn_test_robot(two_pairs);
    robot.set_joint_state(DVector::from_vec(vec![0.25, 0.25])).unwrap();

    // The first grid declares the cell free; the second declares it colliding.
    let mut report = CollisionReport::new_empty();
    assert_eq!(robot.check_self_collision(Some(&mut report)), true);
    assert_eq!(report.num_collisions(), 1);
}

struct AlwaysColliding;
impl SelfCollisionChecker for AlwaysColliding {
    fn check_self_collision(&self, _robot_model_module: &RobotModelModule, _robot_joint_state: &RobotJointState, _report: Option<&mut CollisionReport>) -> bool {
        true
    }
}

struct NeverColliding;
impl SelfCollisionChecker for NeverColliding {
    fn check_self_collision(&self, _robot_model_module: &RobotModelModule, _robot_joint_state: &RobotJointState, _report: Option<&mut CollisionReport>) -> bool {
        false
    }
}

#[test]
fn test_general_checker_short_circuits_table_lookup() {
    let mut robot = spawn_test_robot(TEST_COLLISION_MAP);
    robot.set_base_self_collision_checker(Box::new(AlwaysColliding));

    // The joint state sits in a free table cell, but the general check wins.
    robot.set_joint_state(DVector::from_vec(vec![0.25, 0.25])).unwrap();
    assert_eq!(robot.check_self_collision(None), true);
}

#[test]
fn test_table_lookup_runs_when_general_checker_is_clear() {
    let mut robot = spawn_test_robot(TEST_COLLISION_MAP);
    robot.set_base_self_collision_checker(Box::new(NeverColliding));

    robot.set_joint_state(DVector::from_vec(vec![0.25, 0.75])).unwrap();
    assert_eq!(robot.check_self_collision(None), true);

    robot.set_joint_state(DVector::from_vec(vec![0.25, 0.25])).unwrap();
    assert_eq!(robot.check_self_collision(None), false);
}

#[test]
fn test_joint_state_length_is_validated() {
    let mut robot = spawn_test_robot(TEST_COLLISION_MAP);
    assert!(robot.set_joint_state(DVector::from_vec(vec![0.25])).is_err());
    assert!(robot.set_joint_state(DVector::from_vec(vec![0.25, 0.25, 0.25])).is_err());
}

struct RecordingController {
    initialized: bool,
    num_paths_set: usize,
    elapsed_total: f64,
    init_should_succeed: bool
}
impl RecordingController {
    fn new(init_should_succeed: bool) -> Self {
        Self {
            initialized: false,
            num_paths_set: 0,
            elapsed_total: 0.0,
            init_should_succeed
        }
    }
}
impl RobotController for RecordingController {
    fn init(&mut self, _robot_model_module: &RobotModelModule, _joint_idxs: &[usize]) -> bool {
        self.initialized = self.init_should_succeed;
        self.init_should_succeed
    }
    fn set_path(&mut self, _trajectory: &JointTrajectory) -> bool {
        self.num_paths_set += 1;
        true
    }
    fn simulation_step(&mut self, elapsed_time: f64) {
        self.elapsed_total += elapsed_time;
    }
}

#[test]
fn test_controller_delegation() {
    let mut robot = spawn_test_robot(TEST_COLLISION_MAP);
    assert!(robot.controller().is_none());
    assert_eq!(robot.set_controller(Box::new(RecordingController::new(true)), &[0, 1]), true);
    assert!(robot.has_controller());
    assert!(robot.controller().is_some());

    let mut trajectory = JointTrajectory::new(2);
    trajectory.add_point(DVector::from_vec(vec![0.0, 0.0])).unwrap();
    trajectory.add_point(DVector::from_vec(vec![0.5, 0.5])).unwrap();
    assert_eq!(robot.set_motion(&trajectory).unwrap(), true);

    robot.simulation_step(0.01);

    // Invalid trajectories are rejected before any delegation happens.
    let empty = JointTrajectory::new(2);
    assert!(robot.set_motion(&empty).is_err());
    let mut wrong_dims = JointTrajectory::new(3);
    wrong_dims.add_point(DVector::from_vec(vec![0.0, 0.0, 0.0])).unwrap();
    assert!(robot.set_motion(&wrong_dims).is_err());
}

#[test]
fn test_failed_controller_init_clears_slot() {
    let mut robot = spawn_test_robot(TEST_COLLISION_MAP);
    assert_eq!(robot.set_controller(Box::new(RecordingController::new(false)), &[0, 1]), false);
    assert!(!robot.has_controller());
}

#[test]
fn test_trajectory_point_length_is_validated() {
    let mut trajectory = JointTrajectory::new(2);
    assert!(trajectory.add_point(DVector::from_vec(vec![0.0])).is_err());
    assert!(trajectory.add_point(DVector::from_vec(vec![0.0, 0.0])).is_ok());
    assert_eq!(trajectory.num_points(), 1);
}
