use nalgebra::DVector;
use serde::{Serialize, Deserialize};
use crate::robot_modules::robot_model_module::RobotModelModule;
use crate::utils::utils_errors::JointspaceError;

/// Robot module that spawns and validates joint states.  A joint state in this
/// crate holds one scalar value per joint in the model (fixed joints included;
/// their entries are simply never read by table lookups).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RobotJointStateModule {
    num_joints: usize,
    joint_lower_bounds: Vec<f64>,
    joint_upper_bounds: Vec<f64>
}
impl RobotJointStateModule {
    pub fn new(robot_model_module: &RobotModelModule) -> Self {
        let mut joint_lower_bounds = vec![];
        let mut joint_upper_bounds = vec![];

        for joint in robot_model_module.joints() {
            joint_lower_bounds.push(joint.limits_lower());
            joint_upper_bounds.push(joint.limits_upper());
        }

        Self {
            num_joints: robot_model_module.num_joints(),
            joint_lower_bounds,
            joint_upper_bounds
        }
    }
    pub fn spawn_robot_joint_state(&self, joint_state: DVector<f64>) -> Result<RobotJointState, JointspaceError> {
        if joint_state.len() != self.num_joints {
            return Err(JointspaceError::new_generic_error_str(&format!("Joint state of length {} does not match robot with {} joints.", joint_state.len(), self.num_joints), file!(), line!()));
        }

        Ok(RobotJointState { joint_state })
    }
    pub fn spawn_zeros_robot_joint_state(&self) -> RobotJointState {
        RobotJointState { joint_state: DVector::from_element(self.num_joints, 0.0) }
    }
    pub fn num_joints(&self) -> usize {
        self.num_joints
    }
    pub fn joint_lower_bounds(&self) -> &Vec<f64> {
        &self.joint_lower_bounds
    }
    pub fn joint_upper_bounds(&self) -> &Vec<f64> {
        &self.joint_upper_bounds
    }
}

/// One scalar value per joint in the model, in joint-index order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RobotJointState {
    joint_state: DVector<f64>
}
impl RobotJointState {
    pub fn joint_state(&self) -> &DVector<f64> {
        &self.joint_state
    }
    pub fn joint_value(&self, joint_idx: usize) -> Result<f64, JointspaceError> {
        JointspaceError::new_check_for_idx_out_of_bound_error(joint_idx, self.joint_state.len(), file!(), line!())?;

        Ok(self.joint_state[joint_idx])
    }
}
