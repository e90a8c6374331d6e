/// Precondition failures raised by the sequence helpers.
///
/// Every check runs before any element is touched, so an `Err` always leaves
/// the sequence exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("type error: expected a sequence, found {found}")]
    Type { found: &'static str },

    #[error("sequence undefined or null")]
    Absent,

    #[error("sequence empty")]
    Empty,

    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T, E = SequenceError> = std::result::Result<T, E>;
