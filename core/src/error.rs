//! Error types shared by every helper in the crate.
//!
//! There are exactly two failure kinds. Both carry the formal name of the
//! argument at fault, so callers can match on the kind and on the parameter.

use thiserror::Error;

/// Failure raised by a helper when one of its arguments is unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required argument (callback, container, sequence) was absent.
    #[error("argument missing: {name}")]
    MissingArgument { name: &'static str },

    /// An index fell outside `min..=max` for a present container.
    ///
    /// For an empty container `max` is `-1`, so every index is rejected.
    #[error("argument out of range: {name} = {index} (expected {min}..={max})")]
    IndexOutOfRange {
        name: &'static str,
        index: isize,
        min: isize,
        max: isize,
    },
}

impl Error {
    /// Name of the argument that caused the failure.
    pub fn argument(&self) -> &'static str {
        match self {
            Error::MissingArgument { name } => name,
            Error::IndexOutOfRange { name, .. } => name,
        }
    }

    /// Whether this is [`Error::MissingArgument`].
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, Error::MissingArgument { .. })
    }

    /// Whether this is [`Error::IndexOutOfRange`].
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Error::IndexOutOfRange { .. })
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

static_assertions::assert_impl_all!(Error: Send, Sync, Clone, core::error::Error);
