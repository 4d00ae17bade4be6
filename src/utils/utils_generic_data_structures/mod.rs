use std::fmt::Debug;
use serde::de::DeserializeOwned;
use serde::{Serialize, Deserialize};
use crate::utils::utils_errors::JointspaceError;
use crate::utils::utils_files::load_object_from_json_string;
use crate::utils::utils_traits::SaveAndLoadable;

/// A dense N-dimensional array stored in row-major order (the outer axis varies
/// slowest).  The shape is fixed at construction; cells are addressed either by a
/// full index tuple or by a flat row-major index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrayND<T> where T: Clone + Debug + Default {
    array: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>
}
impl <T> ArrayND <T> where T: Clone + Debug + Default {
    pub fn new(shape: Vec<usize>, initialization_value: Option<T>) -> Self {
        return match initialization_value {
            None => { Self::new_without_initialization_value(shape) }
            Some(initialization_value) => { Self::new_with_initialization_value(shape, initialization_value) }
        }
    }
    pub fn new_empty() -> Self {
        Self {
            array: vec![],
            shape: vec![],
            strides: vec![]
        }
    }
    fn new_without_initialization_value(shape: Vec<usize>) -> Self {
        return Self::new_with_initialization_value(shape, T::default())
    }
    fn new_with_initialization_value(shape: Vec<usize>, initialization_value: T) -> Self {
        let flat_len = if shape.is_empty() { 0 } else { shape.iter().product() };

        let mut array = vec![];
        for _ in 0..flat_len { array.push(initialization_value.clone()) }

        let strides = Self::compute_strides(&shape);

        return Self {
            array,
            shape,
            strides
        }
    }
    fn compute_strides(shape: &Vec<usize>) -> Vec<usize> {
        let n = shape.len();
        let mut strides = vec![1; n];
        for i in (0..n.saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * shape[i + 1];
        }
        strides
    }
    pub fn flat_idx_from_idxs(&self, idxs: &[usize]) -> Result<usize, JointspaceError> {
        if idxs.len() != self.shape.len() {
            return Err(JointspaceError::new_generic_error_str(&format!("Index tuple of length {} does not match array of {} axes.", idxs.len(), self.shape.len()), file!(), line!()));
        }

        let mut flat_idx = 0;
        for (i, idx) in idxs.iter().enumerate() {
            JointspaceError::new_check_for_idx_out_of_bound_error(*idx, self.shape[i], file!(), line!())?;
            flat_idx += *idx * self.strides[i];
        }

        Ok(flat_idx)
    }
    pub fn replace_data(&mut self, data: T, idxs: &[usize]) -> Result<(), JointspaceError> {
        let flat_idx = self.flat_idx_from_idxs(idxs)?;
        self.array[flat_idx] = data;
        Ok(())
    }
    pub fn replace_data_flat(&mut self, data: T, flat_idx: usize) -> Result<(), JointspaceError> {
        JointspaceError::new_check_for_idx_out_of_bound_error(flat_idx, self.array.len(), file!(), line!())?;

        self.array[flat_idx] = data;

        Ok(())
    }
    pub fn replace_data_on_every_cell(&mut self, data: T) {
        for cell in &mut self.array {
            *cell = data.clone();
        }
    }
    pub fn data_cell(&self, idxs: &[usize]) -> Result<&T, JointspaceError> {
        let flat_idx = self.flat_idx_from_idxs(idxs)?;
        Ok(&self.array[flat_idx])
    }
    pub fn data_cell_flat(&self, flat_idx: usize) -> Result<&T, JointspaceError> {
        JointspaceError::new_check_for_idx_out_of_bound_error(flat_idx, self.array.len(), file!(), line!())?;

        Ok(&self.array[flat_idx])
    }
    pub fn shape(&self) -> &Vec<usize> {
        &self.shape
    }
    pub fn num_axes(&self) -> usize {
        self.shape.len()
    }
    pub fn flat_len(&self) -> usize { self.array.len() }
}
impl <T> SaveAndLoadable for ArrayND<T> where T: Clone + Debug + Serialize + DeserializeOwned + Default {
    type SaveType = Self;

    fn get_save_serialization_object(&self) -> Self::SaveType {
        self.clone()
    }

    fn load_from_json_string(json_str: &str) -> Result<Self, JointspaceError> where Self: Sized {
        let load: Self::SaveType = load_object_from_json_string(json_str)?;
        return Ok(load);
    }
}
