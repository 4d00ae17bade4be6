/// A common error type returned by functions throughout the toolbox.
#[derive(Clone, Debug)]
pub enum JointspaceError {
    GenericError(String),
    IdxOutOfBoundError(String),
    ParseError(String)
}
impl JointspaceError {
    pub fn new_generic_error_str(s: &str, file: &str, line: u32) -> Self {
        let s = format!("ERROR: {} -- File: {}, Line: {}", s, file, line);
        return Self::GenericError(s);
    }
    pub fn new_idx_out_of_bound_error(given_idx: usize, length_of_array: usize, file: &str, line: u32) -> Self {
        let s = format!("ERROR: Index {:?} is too large for the array of length {:?} -- File: {}, Line: {}", given_idx, length_of_array, file, line);
        return Self::IdxOutOfBoundError(s);
    }
    pub fn new_parse_error(s: &str, file: &str, line: u32) -> Self {
        let s = format!("ERROR: Parse error: {} -- File: {}, Line: {}", s, file, line);
        return Self::ParseError(s);
    }
    /// Convenience guard that returns an `IdxOutOfBoundError` when the given index
    /// does not fit in an array of the given length.
    pub fn new_check_for_idx_out_of_bound_error(given_idx: usize, length_of_array: usize, file: &str, line: u32) -> Result<(), JointspaceError> {
        if given_idx >= length_of_array {
            return Err(Self::new_idx_out_of_bound_error(given_idx, length_of_array, file, line));
        }
        Ok(())
    }
}
