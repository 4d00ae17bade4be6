use nalgebra::DVector;
use serde::{Serialize, Deserialize};
use crate::robot_modules::robot_model_module::RobotModelModule;
use crate::utils::utils_errors::JointspaceError;

/// A host-supplied controller that a robot delegates motion and simulation
/// stepping to.  The robot itself adds no algorithmic content on top of this
/// interface; it validates inputs and passes them through.
pub trait RobotController {
    /// Prepares the controller for the given robot.  Returning false signals that
    /// the controller could not be initialized; the robot will then drop it.
    fn init(&mut self, robot_model_module: &RobotModelModule, joint_idxs: &[usize]) -> bool;
    fn set_path(&mut self, trajectory: &JointTrajectory) -> bool;
    fn simulation_step(&mut self, elapsed_time: f64);
}

/// A sequence of joint-space waypoints, one scalar per degree of freedom.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JointTrajectory {
    num_dofs: usize,
    points: Vec<DVector<f64>>
}
impl JointTrajectory {
    pub fn new(num_dofs: usize) -> Self {
        Self {
            num_dofs,
            points: vec![]
        }
    }
    pub fn add_point(&mut self, point: DVector<f64>) -> Result<(), JointspaceError> {
        if point.len() != self.num_dofs {
            return Err(JointspaceError::new_generic_error_str(&format!("Trajectory point of length {} does not match trajectory with {} dofs.", point.len(), self.num_dofs), file!(), line!()));
        }

        self.points.push(point);

        Ok(())
    }
    pub fn num_dofs(&self) -> usize {
        self.num_dofs
    }
    pub fn num_points(&self) -> usize {
        self.points.len()
    }
    pub fn points(&self) -> &Vec<DVector<f64>> {
        &self.points
    }
}
