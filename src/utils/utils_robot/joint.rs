use nalgebra::Vector3;
use serde::{Serialize, Deserialize};
use urdf_rs::JointType;
use crate::utils::utils_console::{jointspace_print, jointspace_print_new_line, PrintColor, PrintMode};
use crate::utils::utils_traits::ToAndFromRonString;

/// A Joint holds the information about a robot joint (specified by a robot URDF
/// file) needed to resolve collision-map joint names and to read the joint's
/// scalar value out of a joint state.  Each joint connects up to two links: the
/// preceding (parent) link and the child link.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Joint {
    name: String,
    joint_idx: usize,
    joint_type: JointTypeWrapper,
    axis: Vector3<f64>,
    limits_lower: f64,
    limits_upper: f64,
    parent_link_name: String,
    child_link_name: String,
    preceding_link_idx: Option<usize>,
    child_link_idx: Option<usize>
}
impl Joint {
    /// Returns a joint corresponding to the given urdf_rs joint.  This will be
    /// automatically called by the RobotModelModule.
    pub fn new_from_urdf_joint(urdf_joint: &urdf_rs::Joint, joint_idx: usize) -> Self {
        Self {
            name: urdf_joint.name.clone(),
            joint_idx,
            joint_type: JointTypeWrapper::from_joint_type(&urdf_joint.joint_type),
            axis: Vector3::new(urdf_joint.axis.xyz[0], urdf_joint.axis.xyz[1], urdf_joint.axis.xyz[2]),
            limits_lower: urdf_joint.limit.lower,
            limits_upper: urdf_joint.limit.upper,
            parent_link_name: urdf_joint.parent.link.clone(),
            child_link_name: urdf_joint.child.link.clone(),
            preceding_link_idx: None,
            child_link_idx: None
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn joint_idx(&self) -> usize {
        self.joint_idx
    }
    pub fn joint_type(&self) -> &JointTypeWrapper {
        &self.joint_type
    }
    pub fn axis(&self) -> Vector3<f64> {
        self.axis
    }
    pub fn limits_lower(&self) -> f64 {
        self.limits_lower
    }
    pub fn limits_upper(&self) -> f64 {
        self.limits_upper
    }
    pub fn parent_link_name(&self) -> &str {
        &self.parent_link_name
    }
    pub fn child_link_name(&self) -> &str {
        &self.child_link_name
    }
    pub fn preceding_link_idx(&self) -> Option<usize> {
        self.preceding_link_idx
    }
    pub fn child_link_idx(&self) -> Option<usize> {
        self.child_link_idx
    }
    pub fn has_dof(&self) -> bool {
        return match self.joint_type {
            JointTypeWrapper::Fixed => { false }
            _ => { true }
        }
    }
    pub fn set_preceding_link_idx(&mut self, preceding_link_idx: Option<usize>) {
        self.preceding_link_idx = preceding_link_idx;
    }
    pub fn set_child_link_idx(&mut self, child_link_idx: Option<usize>) {
        self.child_link_idx = child_link_idx;
    }
    pub fn print_summary(&self) {
        jointspace_print(&format!(">> Joint index: "), PrintMode::Print, PrintColor::Blue, true);
        jointspace_print(&format!(" {} ", self.joint_idx), PrintMode::Print, PrintColor::None, false);
        jointspace_print(&format!("  Joint name: "), PrintMode::Print, PrintColor::Blue, true);
        jointspace_print(&format!(" {} ", self.name), PrintMode::Print, PrintColor::None, false);
        jointspace_print(&format!("  Type: "), PrintMode::Print, PrintColor::Blue, true);
        jointspace_print(&format!(" {} ", self.joint_type.convert_to_ron_string()), PrintMode::Print, PrintColor::None, false);
        jointspace_print(&format!("  Limits: "), PrintMode::Print, PrintColor::Blue, true);
        jointspace_print(&format!(" [{}, {}] ", self.limits_lower, self.limits_upper), PrintMode::Print, PrintColor::None, false);
        jointspace_print_new_line();
    }
}

/// Specifies the joint type as parsed from URDF.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum JointTypeWrapper {
    Revolute,
    Continuous,
    Prismatic,
    Fixed,
    Floating,
    Planar,
    Spherical
}
impl JointTypeWrapper {
    pub fn from_joint_type(j: &JointType) -> Self {
        match j {
            JointType::Revolute => { Self::Revolute }
            JointType::Continuous => { Self::Continuous }
            JointType::Prismatic => { Self::Prismatic }
            JointType::Fixed => { Self::Fixed }
            JointType::Floating => { Self::Floating }
            JointType::Planar => { Self::Planar }
            JointType::Spherical => { Self::Spherical }
        }
    }
}
