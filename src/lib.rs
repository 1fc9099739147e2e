//! Konvenience - absence-tolerant helpers for values and containers
//!
//! # Overview
//!
//! Small generic helpers that remove boilerplate around optional values and
//! container access:
//!
//! - Scope helpers on any value: [`also`](Scope::also), [`let_`](Scope::let_),
//!   [`take_if`](Scope::take_if), [`take_unless`](Scope::take_unless)
//! - Safe narrowing of type-erased values: [`cast`]
//! - Container helpers over arrays, lists, lazy sequences and keyed
//!   mappings: [`containers`]
//!
//! Every helper validates its arguments the same way. An absent callback or
//! container fails with [`Error::MissingArgument`] naming the parameter; a
//! bad index fails with [`Error::IndexOutOfRange`]. Nothing panics and
//! nothing is substituted silently.
//!
//! # Quick Start
//!
//! ```
//! use konvenience::prelude::*;
//! use konvenience::containers::indexed;
//!
//! let letters = ['a', 'b', 'c', 'd'];
//!
//! assert_eq!(indexed::get(Some(&letters), 0), Ok(&'a'));
//! assert!(indexed::get(Some(&letters), 4).is_err());
//! assert_eq!(indexed::get_or_else(Some(&letters), 4, 'z'), Ok('z'));
//!
//! // The fallback only runs when it is needed.
//! let first = indexed::get_or_else_with(Some(&letters), 0, Some(|| unreachable!()));
//! assert_eq!(first, Ok('a'));
//! ```
//!
//! # Scope helpers
//!
//! Callbacks are passed as `Option`s, so a missing callback is an error
//! value rather than a panic:
//!
//! ```
//! use konvenience::prelude::*;
//!
//! let config = Vec::<String>::new()
//!     .also(Some(|args: &mut Vec<String>| args.push("--verbose".into())))
//!     .unwrap();
//! assert_eq!(config, ["--verbose"]);
//!
//! let err = config.take_if(None::<fn(&Vec<String>) -> bool>).unwrap_err();
//! assert_eq!(err, Error::MissingArgument { name: "predicate" });
//! ```
//!
//! # Features
//!
//! - `std`: implements the container capabilities for
//!   `std::collections::{HashMap, HashSet}`. Without it the crate is
//!   `no_std` and covers `alloc` and `hashbrown` containers.

#![cfg_attr(not(feature = "std"), no_std)]

// Re-export public API from konvenience_core
pub use konvenience_core::cast::{self, SafeCast};
pub use konvenience_core::containers::{self, Entries, Indexed, Length, Shape};
pub use konvenience_core::error::{Error, Result};
pub use konvenience_core::scope::Scope;
pub use konvenience_core::validate;

/// Traits and types needed to call the helpers as methods.
pub mod prelude {
    pub use konvenience_core::cast::SafeCast;
    pub use konvenience_core::containers::{Entries, Indexed, Length, Shape};
    pub use konvenience_core::error::{Error, Result};
    pub use konvenience_core::scope::Scope;
}
