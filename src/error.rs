use thiserror::Error;

/// Broad category of a [`RangeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument value is not acceptable (unordered bounds, split point outside the range).
    InvalidArgument,
    /// The operands do not satisfy the geometric precondition of the operation.
    InvalidOperation,
    /// The operation has no meaningful result for the given input.
    NotSupported,
    /// A stepper misbehaved while enumerating a range.
    Enumeration,
}

/// Errors produced by range construction, pairwise operations and the collection operators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("end must be greater than or equal to start")]
    Unordered,

    #[error("max value must be greater than or equal to min value")]
    InvalidBounds,

    #[error("splitting is not possible because {value} is not included in {range}")]
    SplitOutOfRange { value: String, range: String },

    #[error("merging {left} with {right} is not possible because they neither overlap nor touch")]
    NotMergeable { left: String, right: String },

    #[error("intersecting {left} with {right} is not possible because they do not overlap")]
    NoOverlap { left: String, right: String },

    #[error("there are no exclusive ranges because {left} and {right} are equal")]
    EqualOperands { left: String, right: String },

    #[error("{operation} is not supported on an empty collection")]
    EmptySource { operation: &'static str },

    #[error("enumerating is not possible because {value} is lower than the start of {range}")]
    StepBelowStart { value: String, range: String },

    #[error("the stepper must produce a higher value on every step, it returned {value} twice in a row")]
    StepNotIncreasing { value: String },

    #[error("index {value} does not fit into a signed 32-bit offset")]
    IndexOverflow { value: u32 },
}

impl RangeError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RangeError::Unordered
            | RangeError::InvalidBounds
            | RangeError::SplitOutOfRange { .. }
            | RangeError::IndexOverflow { .. } => ErrorKind::InvalidArgument,
            RangeError::NotMergeable { .. }
            | RangeError::NoOverlap { .. }
            | RangeError::EqualOperands { .. } => ErrorKind::InvalidOperation,
            RangeError::EmptySource { .. } => ErrorKind::NotSupported,
            RangeError::StepBelowStart { .. } | RangeError::StepNotIncreasing { .. } => {
                ErrorKind::Enumeration
            }
        }
    }
}
