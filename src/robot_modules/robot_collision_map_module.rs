use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::robot_modules::robot_joint_state_module::RobotJointState;
use crate::robot_modules::robot_model_module::RobotModelModule;
use crate::utils::utils_console::{jointspace_print, PrintColor, PrintMode};
use crate::utils::utils_errors::JointspaceError;
use crate::utils::utils_files::load_object_from_json_string;
use crate::utils::utils_generic_data_structures::ArrayND;
use crate::utils::utils_parsing::{load_collision_map_grids_from_xml_file, load_collision_map_grids_from_xml_str};
use crate::utils::utils_traits::SaveAndLoadable;

/// The free space of a set of joints over a discretized region of their joint
/// values.  A cell value of `true` means the corresponding combination of joint
/// values is free; `false` means it is in self-collision.  Grids are populated by
/// the collision-map description reader, bound to a robot model once via
/// `RobotCollisionMapModule::bind_to_model`, and read-only afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CollisionMapGrid {
    freespace: ArrayND<bool>,
    lower_bounds: Vec<f64>,
    upper_bounds: Vec<f64>,
    deltas: Vec<f64>,
    joint_names: Vec<String>,
    joint_idxs: Vec<Option<usize>>
}
impl CollisionMapGrid {
    pub fn new_empty() -> Self {
        Self {
            freespace: ArrayND::new_empty(),
            lower_bounds: vec![],
            upper_bounds: vec![],
            deltas: vec![],
            joint_names: vec![],
            joint_idxs: vec![]
        }
    }
    /// Allocates the freespace grid with the given cells per axis.  All cells start
    /// as colliding (`false`) until payload values are read.
    pub fn set_dims(&mut self, dims: &[usize]) {
        self.freespace = ArrayND::new(dims.to_vec(), Some(false));
    }
    pub fn set_lower_bounds(&mut self, lower_bounds: Vec<f64>) {
        self.lower_bounds = lower_bounds;
    }
    pub fn set_upper_bounds(&mut self, upper_bounds: Vec<f64>) {
        self.upper_bounds = upper_bounds;
    }
    pub fn set_joint_names(&mut self, joint_names: Vec<String>) {
        self.joint_names = joint_names;
    }
    pub fn set_freespace_cell_flat(&mut self, free: bool, flat_idx: usize) -> Result<(), JointspaceError> {
        return self.freespace.replace_data_flat(free, flat_idx);
    }
    /// Brings every per-axis vector to the dimensionality of the freespace grid.
    /// Missing bounds default to the degenerate 0/0 pair and missing joint names
    /// stay unresolvable; extra entries are dropped.  Called by the description
    /// reader when a pair declaration closes.
    pub fn normalize_axes(&mut self) {
        let n = self.num_axes();
        self.lower_bounds.resize(n, 0.0);
        self.upper_bounds.resize(n, 0.0);
        self.joint_names.resize(n, "".to_string());
        self.joint_idxs = vec![None; n];
        self.deltas = vec![0.0; n];
    }
    pub fn freespace(&self) -> &ArrayND<bool> {
        &self.freespace
    }
    pub fn num_axes(&self) -> usize {
        self.freespace.num_axes()
    }
    pub fn cells_per_axis(&self) -> &Vec<usize> {
        self.freespace.shape()
    }
    pub fn lower_bounds(&self) -> &Vec<f64> {
        &self.lower_bounds
    }
    pub fn upper_bounds(&self) -> &Vec<f64> {
        &self.upper_bounds
    }
    pub fn deltas(&self) -> &Vec<f64> {
        &self.deltas
    }
    pub fn joint_names(&self) -> &Vec<String> {
        &self.joint_names
    }
    pub fn joint_idxs(&self) -> &Vec<Option<usize>> {
        &self.joint_idxs
    }
}

/// The result of a self-collision query.  Populated by the evaluator when a
/// table hit survives the link-enablement filter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CollisionReport {
    num_collisions: usize,
    colliding_link_idxs: Vec<usize>,
    link1_idx: Option<usize>,
    link2_idx: Option<usize>
}
impl CollisionReport {
    pub fn new_empty() -> Self {
        Self {
            num_collisions: 0,
            colliding_link_idxs: vec![],
            link1_idx: None,
            link2_idx: None
        }
    }
    pub fn num_collisions(&self) -> usize {
        self.num_collisions
    }
    pub fn colliding_link_idxs(&self) -> &Vec<usize> {
        &self.colliding_link_idxs
    }
    pub fn link1_idx(&self) -> Option<usize> {
        self.link1_idx
    }
    pub fn link2_idx(&self) -> Option<usize> {
        self.link2_idx
    }
}

/// Robot module that owns the collection of collision-map grids attached to a
/// robot.  Binding resolves each grid's symbolic joint names against a finalized
/// robot model; querying consults every bound grid and applies the
/// minimum-enabled-link-count filter before reporting a collision.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RobotCollisionMapModule {
    grids: Vec<CollisionMapGrid>
}
impl RobotCollisionMapModule {
    pub fn new_empty() -> Self {
        Self { grids: vec![] }
    }
    pub fn new_from_grids(grids: Vec<CollisionMapGrid>) -> Self {
        Self { grids }
    }
    pub fn new_from_xml_str(xml: &str) -> Result<Self, JointspaceError> {
        let grids = load_collision_map_grids_from_xml_str(xml)?;
        Ok(Self { grids })
    }
    pub fn new_from_xml_file(path: &Path) -> Result<Self, JointspaceError> {
        let grids = load_collision_map_grids_from_xml_file(path)?;
        Ok(Self { grids })
    }
    pub fn grids(&self) -> &Vec<CollisionMapGrid> {
        &self.grids
    }
    /// Resolves each grid's joint names against the given finalized robot model and
    /// computes the per-axis discretization scale factors.  A name that does not
    /// match any joint in the model leaves its axis permanently unresolved, which
    /// disables every lookup that depends on it.  Safe to call more than once; it
    /// recomputes the same values.
    pub fn bind_to_model(&mut self, robot_model_module: &RobotModelModule) {
        for grid in &mut self.grids {
            grid.normalize_axes();
            let n = grid.num_axes();
            for i in 0..n {
                // The scale factor is computed regardless of resolution success.  It is
                // only ever read on a non-degenerate axis of a fully resolved grid.
                grid.deltas[i] = grid.freespace.shape()[i] as f64 / (grid.upper_bounds[i] - grid.lower_bounds[i]);

                let joint_idx = robot_model_module.get_joint_idx_from_name(&grid.joint_names[i]);
                match joint_idx {
                    Some(joint_idx) => {
                        grid.joint_idxs[i] = Some(joint_idx);
                    }
                    None => {
                        grid.joint_idxs[i] = None;
                        jointspace_print(&format!("WARNING: failed to find joint {} specified in collisionmap.", grid.joint_names[i]), PrintMode::Println, PrintColor::Yellow, false);
                    }
                }
            }
        }
    }
    /// Checks whether the given joint values fall in a cell that a collision-map
    /// grid declares as self-colliding.  Intended to run as a fallback after the
    /// robot's general self-collision check reports no collision.  Returns `true`
    /// on the first confirmed hit, populating the report when one is given.
    pub fn check_self_collision(&self, robot_model_module: &RobotModelModule, robot_joint_state: &RobotJointState, mut report: Option<&mut CollisionReport>) -> bool {
        for grid in &self.grids {
            let n = grid.num_axes();
            if n == 0 { continue; }
            // A grid that has never been bound to a model has no resolved axes and
            // cannot apply.
            if grid.joint_idxs.len() < n || grid.lower_bounds.len() < n || grid.upper_bounds.len() < n || grid.deltas.len() < n { continue; }

            let mut indices = vec![0_usize; n];
            let mut complete = true;
            for i in 0..n {
                let joint_idx = match grid.joint_idxs[i] {
                    Some(joint_idx) => { joint_idx }
                    None => { complete = false; break; }
                };
                let value = match robot_joint_state.joint_value(joint_idx) {
                    Ok(value) => { value }
                    Err(_) => { complete = false; break; }
                };
                if grid.lower_bounds[i] < grid.upper_bounds[i] {
                    // Truncation toward zero, matching dense-grid discretization
                    // conventions.  No rounding.
                    let index = ((value - grid.lower_bounds[i]) * grid.deltas[i]) as i32;
                    if index < 0 || index as usize >= grid.freespace.shape()[i] {
                        // Value out of table range: no information from this grid.
                        complete = false;
                        break;
                    }
                    indices[i] = index as usize;
                }
                // A degenerate axis (lower >= upper) is always in range at index 0.
            }
            if !complete { continue; }

            let free = match grid.freespace.data_cell(&indices) {
                Ok(free) => { *free }
                Err(_) => { continue; }
            };
            if free { continue; }

            // Table hit.  Collect the distinct links attached to the grid's joints and
            // make sure at least two are enabled; a single enabled link cannot collide
            // with itself in a reportable sense.
            let mut colliding_link_idxs: Vec<usize> = vec![];
            for joint_idx in grid.joint_idxs.iter().flatten() {
                let joint = &robot_model_module.joints()[*joint_idx];
                if let Some(link_idx) = joint.preceding_link_idx() {
                    if !colliding_link_idxs.contains(&link_idx) { colliding_link_idxs.push(link_idx); }
                }
                if let Some(link_idx) = joint.child_link_idx() {
                    if !colliding_link_idxs.contains(&link_idx) { colliding_link_idxs.push(link_idx); }
                }
            }

            let mut num_enabled = 0;
            for link_idx in &colliding_link_idxs {
                if robot_model_module.links()[*link_idx].enabled() { num_enabled += 1; }
            }
            if num_enabled < 2 { continue; }

            if let Some(report) = report.as_deref_mut() {
                report.num_collisions = 1;
                report.colliding_link_idxs = colliding_link_idxs.clone();
                report.link1_idx = colliding_link_idxs.get(0).copied();
                report.link2_idx = colliding_link_idxs.get(1).copied();
            }
            jointspace_print(&format!("Self collision: joints {:?} at grid cell {:?}", grid.joint_names, indices), PrintMode::Println, PrintColor::Cyan, false);
            return true;
        }
        return false;
    }
}
impl SaveAndLoadable for RobotCollisionMapModule {
    type SaveType = Self;

    fn get_save_serialization_object(&self) -> Self::SaveType {
        self.clone()
    }

    fn load_from_json_string(json_str: &str) -> Result<Self, JointspaceError> where Self: Sized {
        let load: Self::SaveType = load_object_from_json_string(json_str)?;
        return Ok(load);
    }
}
