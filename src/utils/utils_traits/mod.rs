use std::path::Path;
use serde::de::DeserializeOwned;
use serde::{Serialize};
use crate::utils::utils_errors::JointspaceError;
use crate::utils::utils_files::{load_object_from_json_string, read_file_contents_to_string, write_string_to_file};

pub trait SaveAndLoadable {
    type SaveType: Serialize + DeserializeOwned;

    fn get_save_serialization_object(&self) -> Self::SaveType;
    fn get_serialization_string(&self) -> String {
        serde_json::to_string(&self.get_save_serialization_object()).expect("error")
    }
    fn save_to_path(&self, path: &Path) -> Result<(), JointspaceError> {
        write_string_to_file(path, &self.get_serialization_string())
    }
    fn load_from_path(path: &Path) -> Result<Self, JointspaceError> where Self: Sized {
        let s = read_file_contents_to_string(path)?;
        return Self::load_from_json_string(&s);
    }
    fn load_from_json_string(json_str: &str) -> Result<Self, JointspaceError> where Self: Sized;
}
impl <T> SaveAndLoadable for Vec<T> where T: SaveAndLoadable {
    type SaveType = Vec<String>;

    fn get_save_serialization_object(&self) -> Self::SaveType {
        let mut out_vec = vec![];

        for s in self {
            out_vec.push(s.get_serialization_string());
        }

        out_vec
    }

    fn load_from_json_string(json_str: &str) -> Result<Self, JointspaceError> where Self: Sized {
        let load: Self::SaveType = load_object_from_json_string(json_str)?;

        let mut out_vec = vec![];
        for s in &load {
            out_vec.push(T::load_from_json_string(s)?);
        }

        Ok(out_vec)
    }
}

pub trait ToAndFromRonString: Serialize + DeserializeOwned {
    fn convert_to_ron_string(&self) -> String {
        ron::to_string(self).expect("error")
    }
    fn load_from_ron_string(ron_string: &String) -> Result<Self, JointspaceError> where Self: Sized {
        let load: Result<Self, _> = ron::from_str(ron_string);
        return if let Ok(load) = load { Ok(load) } else {
            Err(JointspaceError::new_generic_error_str(&format!("Could not load ron string {:?} into correct type.", ron_string), file!(), line!()))
        }
    }
}
impl <T> ToAndFromRonString for T where T: Serialize + DeserializeOwned {  }
