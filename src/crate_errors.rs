use crate::{
    args,
    packing,
};

/// Error-type enum for the `soddy` crate.
/// Wraps the errors of each stage so `?` works across them.
#[derive(Debug)]
pub enum SoddyError {
    ArgError(args::ArgError),
    PackingError(packing::PackingError),
    StringOnly(String),
}
impl std::fmt::Display for SoddyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoddyError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            SoddyError::PackingError(error) => write!(f, "! PACKING ERROR:\n{}", error),
            SoddyError::StringOnly(error) => write!(f, "! SODDY ERROR:\n- {}", error),
        }
    }
}
impl From<args::ArgError> for SoddyError {
    fn from(error: args::ArgError) -> Self {
        SoddyError::ArgError(error)
    }
}
impl From<packing::PackingError> for SoddyError {
    fn from(error: packing::PackingError) -> Self {
        SoddyError::PackingError(error)
    }
}

/// Result type for the `soddy` crate.
pub type SoddyResult<T> = std::result::Result<T, SoddyError>;

/// Create a `SoddyResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::SoddyError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> SoddyResult<T> {
    Err(SoddyError::StringOnly(error_str.to_string()))
}
