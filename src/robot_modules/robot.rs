use std::path::Path;
use nalgebra::DVector;
use crate::robot_modules::robot_collision_map_module::{CollisionReport, RobotCollisionMapModule};
use crate::robot_modules::robot_controller_module::{JointTrajectory, RobotController};
use crate::robot_modules::robot_joint_state_module::{RobotJointState, RobotJointStateModule};
use crate::robot_modules::robot_model_module::RobotModelModule;
use crate::utils::utils_console::{jointspace_print, PrintColor, PrintMode};
use crate::utils::utils_errors::JointspaceError;

/// A general (e.g., geometry-based) self-collision check that the collision-map
/// evaluator defers to.  The tabulated lookup only runs when this check reports
/// no collision.
pub trait SelfCollisionChecker {
    fn check_self_collision(&self, robot_model_module: &RobotModelModule, robot_joint_state: &RobotJointState, report: Option<&mut CollisionReport>) -> bool;
}

/// An aggregation of robot modules: the finalized kinematic structure, the
/// current joint state, an optional collision-map extension, an optional general
/// self-collision checker, and an optional controller.  The collision map hangs
/// off the robot as a strongly-typed slot that is resolved once, not looked up
/// per query.
pub struct Robot {
    robot_model_module: RobotModelModule,
    robot_joint_state_module: RobotJointStateModule,
    robot_joint_state: RobotJointState,
    robot_collision_map_module: Option<RobotCollisionMapModule>,
    base_self_collision_checker: Option<Box<dyn SelfCollisionChecker>>,
    controller: Option<Box<dyn RobotController>>
}
impl Robot {
    pub fn new_from_model_module(robot_model_module: RobotModelModule) -> Self {
        let robot_joint_state_module = RobotJointStateModule::new(&robot_model_module);
        let robot_joint_state = robot_joint_state_module.spawn_zeros_robot_joint_state();

        Self {
            robot_model_module,
            robot_joint_state_module,
            robot_joint_state,
            robot_collision_map_module: None,
            base_self_collision_checker: None,
            controller: None
        }
    }
    pub fn new_from_urdf_file(path: &Path) -> Result<Self, JointspaceError> {
        let robot_model_module = RobotModelModule::new_from_urdf_file(path)?;
        Ok(Self::new_from_model_module(robot_model_module))
    }
    pub fn new_from_urdf_string(urdf_string: &str) -> Result<Self, JointspaceError> {
        let robot_model_module = RobotModelModule::new_from_urdf_string(urdf_string)?;
        Ok(Self::new_from_model_module(robot_model_module))
    }
    pub fn robot_model_module(&self) -> &RobotModelModule {
        &self.robot_model_module
    }
    pub fn robot_joint_state_module(&self) -> &RobotJointStateModule {
        &self.robot_joint_state_module
    }
    pub fn robot_joint_state(&self) -> &RobotJointState {
        &self.robot_joint_state
    }
    pub fn robot_collision_map_module(&self) -> Option<&RobotCollisionMapModule> {
        self.robot_collision_map_module.as_ref()
    }
    /// Attaches a collision-map extension to this robot.  The extension's grids
    /// are resolved against the model when `compute_internal_information` runs.
    pub fn set_collision_map_module(&mut self, robot_collision_map_module: RobotCollisionMapModule) {
        self.robot_collision_map_module = Some(robot_collision_map_module);
    }
    pub fn set_base_self_collision_checker(&mut self, checker: Box<dyn SelfCollisionChecker>) {
        self.base_self_collision_checker = Some(checker);
    }
    /// Finalization hook.  The host calls this once after the robot's kinematic
    /// structure is finalized; it binds any attached collision map to the model.
    pub fn compute_internal_information(&mut self) {
        if let Some(robot_collision_map_module) = &mut self.robot_collision_map_module {
            robot_collision_map_module.bind_to_model(&self.robot_model_module);
        }
    }
    pub fn set_joint_state(&mut self, joint_state: DVector<f64>) -> Result<(), JointspaceError> {
        self.robot_joint_state = self.robot_joint_state_module.spawn_robot_joint_state(joint_state)?;
        Ok(())
    }
    pub fn set_link_enabled(&mut self, link_idx: usize, enabled: bool) -> Result<(), JointspaceError> {
        return self.robot_model_module.set_link_enabled(link_idx, enabled);
    }
    /// Checks the robot for self-collision at its current joint state.  The
    /// general self-collision checker runs first; the collision-map lookup only
    /// runs when it reports no collision.
    pub fn check_self_collision(&self, mut report: Option<&mut CollisionReport>) -> bool {
        if let Some(checker) = &self.base_self_collision_checker {
            if checker.check_self_collision(&self.robot_model_module, &self.robot_joint_state, report.as_deref_mut()) {
                return true;
            }
        }

        if let Some(robot_collision_map_module) = &self.robot_collision_map_module {
            return robot_collision_map_module.check_self_collision(&self.robot_model_module, &self.robot_joint_state, report);
        }

        return false;
    }
    pub fn set_controller(&mut self, mut controller: Box<dyn RobotController>, joint_idxs: &[usize]) -> bool {
        if !controller.init(&self.robot_model_module, joint_idxs) {
            jointspace_print(&format!("WARNING: Robot {}: failed to init controller.", self.robot_model_module.robot_name()), PrintMode::Println, PrintColor::Yellow, false);
            self.controller = None;
            return false;
        }
        self.controller = Some(controller);
        return true;
    }
    pub fn has_controller(&self) -> bool {
        self.controller.is_some()
    }
    pub fn controller(&self) -> Option<&dyn RobotController> {
        self.controller.as_deref()
    }
    pub fn set_motion(&mut self, trajectory: &JointTrajectory) -> Result<bool, JointspaceError> {
        if trajectory.num_points() == 0 {
            return Err(JointspaceError::new_generic_error_str("trajectory has no points.", file!(), line!()));
        }
        if trajectory.num_dofs() != self.robot_model_module.num_joints() {
            return Err(JointspaceError::new_generic_error_str("trajectory of wrong dimension.", file!(), line!()));
        }

        return match &mut self.controller {
            Some(controller) => { Ok(controller.set_path(trajectory)) }
            None => { Ok(false) }
        }
    }
    pub fn simulation_step(&mut self, elapsed_time: f64) {
        if let Some(controller) = &mut self.controller {
            controller.simulation_step(elapsed_time);
        }
    }
}
