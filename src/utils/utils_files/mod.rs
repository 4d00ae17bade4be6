use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::utils::utils_console::{jointspace_print, PrintColor, PrintMode};
use crate::utils::utils_errors::JointspaceError;

pub fn read_file_contents_to_string(path: &Path) -> Result<String, JointspaceError> {
    let res = fs::read_to_string(path);
    return match res {
        Ok(s) => { Ok(s) }
        Err(e) => {
            Err(JointspaceError::new_generic_error_str(&format!("Could not read file {:?}: {}", path, e), file!(), line!()))
        }
    }
}

pub fn write_string_to_file(path: &Path, s: &str) -> Result<(), JointspaceError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| JointspaceError::new_generic_error_str(&format!("Could not create directory {:?}: {}", parent, e), file!(), line!()))?;
        }
    }
    let file_res = File::create(path);
    return match file_res {
        Ok(mut file) => {
            match file.write_all(s.as_bytes()) {
                Ok(_) => { Ok(()) }
                Err(e) => {
                    Err(JointspaceError::new_generic_error_str(&format!("Could not write to file {:?}: {}", path, e), file!(), line!()))
                }
            }
        }
        Err(e) => {
            Err(JointspaceError::new_generic_error_str(&format!("Could not create file {:?}: {}", path, e), file!(), line!()))
        }
    }
}

pub fn save_object_to_file_as_json<T: Serialize>(path: &Path, object: &T) -> Result<(), JointspaceError> {
    let s = serde_json::to_string(object).map_err(|e| JointspaceError::new_generic_error_str(&format!("Could not serialize object: {}", e), file!(), line!()))?;
    return write_string_to_file(path, &s);
}

pub fn load_object_from_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, JointspaceError> {
    let contents = read_file_contents_to_string(path)?;
    return load_object_from_json_string(&contents);
}

pub fn load_object_from_json_string<T: DeserializeOwned>(json_str: &str) -> Result<T, JointspaceError> {
    let o_res = serde_json::from_str(json_str);
    return match o_res {
        Ok(o) => { Ok(o) }
        Err(_) => {
            jointspace_print(json_str, PrintMode::Println, PrintColor::Red, false);
            Err(JointspaceError::new_generic_error_str("Could not load object from json string.", file!(), line!()))
        }
    }
}
