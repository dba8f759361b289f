use std::fmt;

/// Packing process error type.
#[derive(Debug)]
pub enum PackingError {
    /// Seed geometry with the wrong shape (point count, dimension, non-numeric values).
    MalformedInput(String),
    /// Seed parameter out of its allowed range.
    InvalidParameter(String),
    /// A pending triple could not be dispatched to any solver.
    /// This is a defect in the driver, never a user error.
    Internal(Box<InternalFault>),
    /// The run spawned more circles than the configured safety limit.
    LimitReached(usize),
}
impl fmt::Display for PackingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackingError::MalformedInput(error) => write!(f, "- Malformed input:\n{}", error),
            PackingError::InvalidParameter(error) => write!(f, "- Invalid parameter:\n{}", error),
            PackingError::Internal(fault) => write!(f, "- BUG: Internal consistency failure:\n{}", fault),
            PackingError::LimitReached(max_circles) => write!(f, "- Circle limit reached ({} circles). Raise max_circles or the radius cutoff", max_circles),
        }
    }
}

/// Driver state captured when a triple cannot be dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalFault {
    /// The offending triple.
    pub triple: [usize; 3],
    /// Element kind at each slot of the triple (`None` if the index is out of range).
    pub kinds: [Option<&'static str>; 3],
    /// Number of elements in the working set when the fault occurred.
    pub element_count: usize,
    /// Number of triples still waiting in the queue.
    pub queue_len: usize,
    /// Which seed the driver was expanding.
    pub seed: &'static str,
}
impl fmt::Display for InternalFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Seed: {}", self.seed)?;
        writeln!(f, "- Triple: {:?}", self.triple)?;
        writeln!(f, "- Kinds: {:?}", self.kinds)?;
        write!(f, "- Working set: {} elements, queue: {} triples", self.element_count, self.queue_len)
    }
}

/// Result type for the `packing` module.
pub type ProcResult<T> = std::result::Result<T, PackingError>;

/// Create a `PackingError::MalformedInput` from a string.
pub fn err_malformed<T>(error_str: &str) -> ProcResult<T> {
    Err(PackingError::MalformedInput(error_str.to_string()))
}

/// Create a `PackingError::InvalidParameter` from a string.
pub fn err_invalid<T>(error_str: &str) -> ProcResult<T> {
    Err(PackingError::InvalidParameter(error_str.to_string()))
}
