//! Argument validation shared by every helper.
//!
//! Helpers validate their own parameters with these functions before
//! touching them, so failures always name the offending parameter.

use crate::error::{Error, Result};

/// Unwraps `value`, failing with [`Error::MissingArgument`] when it is absent.
#[inline]
pub fn require_present<T>(value: Option<T>, name: &'static str) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => {
            tracing::debug!(argument = name, "missing argument");
            Err(Error::MissingArgument { name })
        }
    }
}

/// Fails with [`Error::IndexOutOfRange`] unless `min <= value <= max`.
#[inline]
pub fn require_in_range(value: isize, name: &'static str, min: isize, max: isize) -> Result<()> {
    if min <= value && value <= max {
        return Ok(());
    }
    tracing::debug!(argument = name, value, min, max, "argument out of range");
    Err(Error::IndexOutOfRange {
        name,
        index: value,
        min,
        max,
    })
}

/// Validates `index` against a container of length `len` and converts it to
/// a position.
pub fn require_index(index: isize, name: &'static str, len: usize) -> Result<usize> {
    require_in_range(index, name, 0, last_index(len))?;
    Ok(index as usize)
}

/// The error [`require_index`] reports for `index` on a container of length
/// `len`, for callers that discover the length only after walking it.
pub(crate) fn index_out_of_range(index: isize, name: &'static str, len: usize) -> Error {
    tracing::debug!(argument = name, index, len, "index out of range");
    Error::IndexOutOfRange {
        name,
        index,
        min: 0,
        max: last_index(len),
    }
}

// Lengths beyond isize::MAX cannot be allocated, saturate anyway.
fn last_index(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX) - 1
}

/// Whether `index` addresses an element of a container of length `len`.
#[inline]
pub(crate) fn index_is_valid(index: isize, len: usize) -> bool {
    usize::try_from(index).is_ok_and(|index| index < len)
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;
