use std::collections::HashMap;
use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::utils::utils_console::{jointspace_print, PrintColor, PrintMode};
use crate::utils::utils_errors::JointspaceError;
use crate::utils::utils_files::load_object_from_json_string;
use crate::utils::utils_robot::joint::Joint;
use crate::utils::utils_robot::link::Link;
use crate::utils::utils_traits::SaveAndLoadable;

/// The finalized kinematic structure of a robot: its links and joints as parsed
/// from a URDF description, with name-to-index lookups and parent/child
/// connections resolved.  Collision-map binding runs against this module once the
/// structure is finalized.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RobotModelModule {
    robot_name: String,
    links: Vec<Link>,
    joints: Vec<Joint>,
    world_link_idx: usize,
    link_name_to_idx_hashmap: HashMap<String, usize>,
    joint_name_to_idx_hashmap: HashMap<String, usize>
}
impl RobotModelModule {
    pub fn new_from_urdf_robot(urdf_robot: &urdf_rs::Robot) -> Self {
        let mut joints = vec![];
        let mut links = vec![];

        let mut link_name_to_idx_hashmap = HashMap::new();
        let mut joint_name_to_idx_hashmap = HashMap::new();

        for (i, j) in urdf_robot.joints.iter().enumerate() {
            joint_name_to_idx_hashmap.insert(j.name.clone(), i);
            joints.push(Joint::new_from_urdf_joint(j, i));
        }
        for (i, l) in urdf_robot.links.iter().enumerate() {
            link_name_to_idx_hashmap.insert(l.name.clone(), i);
            links.push(Link::new_from_urdf_link(l, i));
        }

        let mut out_self = Self {
            robot_name: urdf_robot.name.clone(),
            links,
            joints,
            world_link_idx: 0,
            link_name_to_idx_hashmap,
            joint_name_to_idx_hashmap
        };

        out_self.assign_all_link_connections_manual();
        out_self.assign_all_joint_connections_manual();
        out_self.set_world_link_idx_manual();

        out_self
    }
    pub fn new_from_urdf_file(path: &Path) -> Result<Self, JointspaceError> {
        let urdf_robot_res = urdf_rs::read_file(path);
        return match &urdf_robot_res {
            Ok(urdf_robot) => { Ok(Self::new_from_urdf_robot(urdf_robot)) }
            Err(_) => {
                Err(JointspaceError::new_parse_error(&format!("Error when parsing urdf file {:?}.", path), file!(), line!()))
            }
        }
    }
    pub fn new_from_urdf_string(urdf_string: &str) -> Result<Self, JointspaceError> {
        let urdf_robot_res = urdf_rs::read_from_string(urdf_string);
        return match &urdf_robot_res {
            Ok(urdf_robot) => { Ok(Self::new_from_urdf_robot(urdf_robot)) }
            Err(_) => {
                Err(JointspaceError::new_parse_error("Error when parsing urdf string.", file!(), line!()))
            }
        }
    }
    fn assign_all_link_connections_manual(&mut self) {
        let l1 = self.links.len();
        let l2 = self.joints.len();

        for i in 0..l1 {
            for j in 0..l2 {
                if self.links[i].name() == self.joints[j].child_link_name() {
                    let link_idx = self.get_link_idx_from_name(self.joints[j].parent_link_name());
                    let joint_idx = self.get_joint_idx_from_name(self.joints[j].name());
                    self.links[i].set_preceding_link_idx(link_idx);
                    self.links[i].set_preceding_joint_idx(joint_idx);
                }

                if self.links[i].name() == self.joints[j].parent_link_name() {
                    let link_idx = self.get_link_idx_from_name(self.joints[j].child_link_name());
                    if let Some(link_idx) = link_idx { self.links[i].add_child_link_idx(link_idx); }
                    let joint_idx = self.get_joint_idx_from_name(self.joints[j].name());
                    if let Some(joint_idx) = joint_idx { self.links[i].add_child_joint_idx(joint_idx); }
                }
            }
        }
    }
    fn assign_all_joint_connections_manual(&mut self) {
        let l = self.joints.len();

        for i in 0..l {
            let link_idx = self.get_link_idx_from_name(self.joints[i].parent_link_name());
            self.joints[i].set_preceding_link_idx(link_idx);
            let link_idx = self.get_link_idx_from_name(self.joints[i].child_link_name());
            self.joints[i].set_child_link_idx(link_idx);
        }
    }
    fn set_world_link_idx_manual(&mut self) {
        let l = self.links.len();
        for i in 0..l {
            if self.links[i].preceding_link_idx().is_none() {
                self.world_link_idx = i;
                return;
            }
        }
    }
    pub fn robot_name(&self) -> &str {
        &self.robot_name
    }
    pub fn links(&self) -> &Vec<Link> {
        &self.links
    }
    pub fn joints(&self) -> &Vec<Joint> {
        &self.joints
    }
    pub fn num_links(&self) -> usize {
        self.links.len()
    }
    pub fn num_joints(&self) -> usize {
        self.joints.len()
    }
    pub fn world_link_idx(&self) -> usize {
        self.world_link_idx
    }
    pub fn get_link_idx_from_name(&self, link_name: &str) -> Option<usize> {
        let res = self.link_name_to_idx_hashmap.get(link_name);
        match res {
            None => { return None }
            Some(u) => { return Some(*u) }
        }
    }
    pub fn get_joint_idx_from_name(&self, joint_name: &str) -> Option<usize> {
        let res = self.joint_name_to_idx_hashmap.get(joint_name);
        match res {
            None => { return None }
            Some(u) => { return Some(*u) }
        }
    }
    pub fn set_link_enabled(&mut self, link_idx: usize, enabled: bool) -> Result<(), JointspaceError> {
        JointspaceError::new_check_for_idx_out_of_bound_error(link_idx, self.links.len(), file!(), line!())?;

        self.links[link_idx].set_enabled(enabled);

        Ok(())
    }
    pub fn print_summary(&self) {
        jointspace_print(&format!("Robot model: {} ({} links, {} joints)", self.robot_name, self.links.len(), self.joints.len()), PrintMode::Println, PrintColor::Blue, true);
        for joint in &self.joints {
            joint.print_summary();
        }
    }
}
impl SaveAndLoadable for RobotModelModule {
    type SaveType = Self;

    fn get_save_serialization_object(&self) -> Self::SaveType {
        self.clone()
    }

    fn load_from_json_string(json_str: &str) -> Result<Self, JointspaceError> where Self: Sized {
        let load: Self::SaveType = load_object_from_json_string(json_str)?;
        return Ok(load);
    }
}
