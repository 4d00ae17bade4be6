use std::path::Path;
use std::str::FromStr;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use crate::robot_modules::robot_collision_map_module::CollisionMapGrid;
use crate::utils::utils_console::{jointspace_print, PrintColor, PrintMode};
use crate::utils::utils_errors::JointspaceError;
use crate::utils::utils_files::read_file_contents_to_string;

/// Whether a start element is handled by the reader or passed over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessElement {
    Support,
    Pass
}

/// Streaming reader for the `<collisionmap>` robot description extension.  The
/// reader is a small state machine (idle / inside a `<pair>` declaration) driven
/// by start-element, character-data, and end-element callbacks, so the payload of
/// a pair never has to be materialized as part of a document tree.  Cells that
/// the payload does not cover keep their colliding (`false`) default.
pub struct CollisionMapXMLReader {
    grids: Vec<CollisionMapGrid>,
    inside_pair: bool,
    char_buf: String
}
impl CollisionMapXMLReader {
    pub fn new() -> Self {
        Self {
            grids: vec![],
            inside_pair: false,
            char_buf: String::new()
        }
    }
    pub fn start_element(&mut self, name: &str, atts: &[(String, String)]) -> ProcessElement {
        self.char_buf.clear();
        if name == "pair" {
            let mut grid = CollisionMapGrid::new_empty();
            for (att_name, att_value) in atts {
                match att_name.as_str() {
                    "dims" => {
                        let dims = parse_whitespace_separated::<usize>(att_value);
                        grid.set_dims(&dims);
                    }
                    "min" => { grid.set_lower_bounds(parse_whitespace_separated::<f64>(att_value)); }
                    "max" => { grid.set_upper_bounds(parse_whitespace_separated::<f64>(att_value)); }
                    "joints" => {
                        let joint_names = att_value.split_whitespace().map(|s| s.to_string()).collect();
                        grid.set_joint_names(joint_names);
                    }
                    _ => { /* unrecognized attributes are ignored */ }
                }
            }
            jointspace_print(&format!("creating self-collision pair: {:?}", grid.joint_names()), PrintMode::Println, PrintColor::Green, false);
            self.grids.push(grid);
            self.inside_pair = true;
            return ProcessElement::Support;
        }

        return ProcessElement::Pass;
    }
    pub fn characters(&mut self, ch: &str) {
        if self.inside_pair {
            self.char_buf.push_str(ch);
        }
    }
    /// Returns true when the enclosing `<collisionmap>` element closes, signaling
    /// that the whole description has been consumed.
    pub fn end_element(&mut self, name: &str) -> bool {
        if name == "pair" {
            let payload = std::mem::take(&mut self.char_buf);
            if let Some(grid) = self.grids.last_mut() {
                let flat_len = grid.freespace().flat_len();
                let mut tokens = payload.split_whitespace();
                let mut num_filled = 0;
                for flat_idx in 0..flat_len {
                    let free = match tokens.next() {
                        Some(token) => {
                            match i32::from_str(token) {
                                Ok(v) => { v != 0 }
                                Err(_) => { break; }
                            }
                        }
                        None => { break; }
                    };
                    if grid.set_freespace_cell_flat(free, flat_idx).is_err() { break; }
                    num_filled += 1;
                }
                if num_filled < flat_len {
                    jointspace_print("WARNING: failed to read collision pair values.", PrintMode::Println, PrintColor::Yellow, false);
                }
                grid.normalize_axes();
            }
            self.inside_pair = false;
        }
        else if name == "collisionmap" {
            return true;
        }
        else {
            jointspace_print(&format!("unknown field {}", name), PrintMode::Println, PrintColor::Red, false);
        }
        return false;
    }
    pub fn into_grids(self) -> Vec<CollisionMapGrid> {
        self.grids
    }
}

fn parse_whitespace_separated<T: FromStr>(s: &str) -> Vec<T> {
    let mut out_vec = vec![];
    for token in s.split_whitespace() {
        match T::from_str(token) {
            Ok(v) => { out_vec.push(v); }
            Err(_) => {
                jointspace_print(&format!("WARNING: could not parse token {} in collisionmap attribute.", token), PrintMode::Println, PrintColor::Yellow, false);
                break;
            }
        }
    }
    out_vec
}

fn extract_attributes(e: &BytesStart) -> Result<Vec<(String, String)>, JointspaceError> {
    let mut atts = vec![];
    for att in e.attributes() {
        match att {
            Ok(att) => {
                let key = String::from_utf8_lossy(att.key.as_ref()).to_string();
                let value = att.unescape_value().map_err(|e| JointspaceError::new_parse_error(&e.to_string(), file!(), line!()))?.to_string();
                atts.push((key, value));
            }
            Err(e) => {
                return Err(JointspaceError::new_parse_error(&e.to_string(), file!(), line!()));
            }
        }
    }
    Ok(atts)
}

/// Pumps quick-xml events into a `CollisionMapXMLReader`, starting at the first
/// `<collisionmap>` element of the document.  This is the entry point a
/// description-loading host calls when it encounters the collisionmap tag.
pub fn load_collision_map_grids_from_xml_str(xml: &str) -> Result<Vec<CollisionMapGrid>, JointspaceError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut xml_reader: Option<CollisionMapXMLReader> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match &mut xml_reader {
                    None => {
                        if name == "collisionmap" {
                            xml_reader = Some(CollisionMapXMLReader::new());
                        }
                    }
                    Some(r) => {
                        let atts = extract_attributes(e)?;
                        r.start_element(&name, &atts);
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match &mut xml_reader {
                    None => {
                        // A self-closing <collisionmap/> is a complete, empty description.
                        if name == "collisionmap" {
                            xml_reader = Some(CollisionMapXMLReader::new());
                            break;
                        }
                    }
                    Some(r) => {
                        let atts = extract_attributes(e)?;
                        r.start_element(&name, &atts);
                        if r.end_element(&name) { break; }
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                if let Some(r) = &mut xml_reader {
                    let text = e.unescape().map_err(|e| JointspaceError::new_parse_error(&e.to_string(), file!(), line!()))?;
                    r.characters(&text);
                }
            }
            Ok(Event::End(ref e)) => {
                if let Some(r) = &mut xml_reader {
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    if r.end_element(&name) { break; }
                }
            }
            Ok(Event::Eof) => { break; }
            Ok(_) => {}
            Err(e) => {
                return Err(JointspaceError::new_parse_error(&e.to_string(), file!(), line!()));
            }
        }
        buf.clear();
    }

    return match xml_reader {
        Some(r) => { Ok(r.into_grids()) }
        None => {
            Err(JointspaceError::new_parse_error("no collisionmap element found in description.", file!(), line!()))
        }
    }
}

pub fn load_collision_map_grids_from_xml_file(path: &Path) -> Result<Vec<CollisionMapGrid>, JointspaceError> {
    let contents = read_file_contents_to_string(path)?;
    return load_collision_map_grids_from_xml_str(&contents);
}
