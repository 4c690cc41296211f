use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RopeError {
    /// An index or range bound fell outside the rope, or a range was reversed.
    #[error("index {index} out of range (bound {bound})")]
    IndexOutOfRange { index: usize, bound: usize },
}

pub type Result<T> = std::result::Result<T, RopeError>;

/// Checks a position that may sit anywhere in `[0, len]`.
pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
    if index > len {
        return Err(RopeError::IndexOutOfRange { index, bound: len });
    }

    Ok(())
}

/// Checks a half-open range `[start, end)` against a rope of length `len`.
pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start > end {
        return Err(RopeError::IndexOutOfRange { index: start, bound: end });
    }

    check_position(end, len)
}
