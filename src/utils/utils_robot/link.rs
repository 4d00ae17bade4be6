use serde::{Serialize, Deserialize};

/// A Link holds the information about a rigid body in the robot model needed by
/// the collision-map evaluator: its identity within the model and whether it
/// currently participates in collision checks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Link {
    name: String,
    link_idx: usize,
    enabled: bool,
    preceding_link_idx: Option<usize>,
    children_link_idxs: Vec<usize>,
    preceding_joint_idx: Option<usize>,
    children_joint_idxs: Vec<usize>
}
impl Link {
    pub fn new_from_urdf_link(urdf_link: &urdf_rs::Link, link_idx: usize) -> Self {
        Self {
            name: urdf_link.name.clone(),
            link_idx,
            enabled: true,
            preceding_link_idx: None,
            children_link_idxs: vec![],
            preceding_joint_idx: None,
            children_joint_idxs: vec![]
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn link_idx(&self) -> usize {
        self.link_idx
    }
    /// Whether this link currently participates in collision checks.
    pub fn enabled(&self) -> bool {
        self.enabled
    }
    pub fn preceding_link_idx(&self) -> Option<usize> {
        self.preceding_link_idx
    }
    pub fn children_link_idxs(&self) -> &Vec<usize> {
        &self.children_link_idxs
    }
    pub fn preceding_joint_idx(&self) -> Option<usize> {
        self.preceding_joint_idx
    }
    pub fn children_joint_idxs(&self) -> &Vec<usize> {
        &self.children_joint_idxs
    }
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
    pub fn set_preceding_link_idx(&mut self, preceding_link_idx: Option<usize>) {
        self.preceding_link_idx = preceding_link_idx;
    }
    pub fn set_preceding_joint_idx(&mut self, preceding_joint_idx: Option<usize>) {
        self.preceding_joint_idx = preceding_joint_idx;
    }
    pub fn add_child_joint_idx(&mut self, idx: usize) {
        self.children_joint_idxs.push(idx);
    }
    pub fn add_child_link_idx(&mut self, idx: usize) {
        self.children_link_idxs.push(idx);
    }
}
