#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Absence-tolerant convenience helpers for values and containers.
//!
//! Every helper validates its own arguments. Absent callbacks and absent
//! containers are reported as [`Error::MissingArgument`] naming the
//! parameter, and bad indices as [`Error::IndexOutOfRange`]; nothing panics
//! and nothing is substituted silently.

// This works on std and no_std and is harmless.
extern crate alloc;

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, string::String, string::ToString, vec, vec::Vec};

pub mod cast;
pub mod containers;
pub mod error;
pub mod scope;
pub mod validate;

pub use cast::SafeCast;
pub use containers::{Entries, Indexed, Length, Shape};
pub use error::{Error, Result};
pub use scope::Scope;
