//! Scope helpers for single values.
//!
//! These mirror the scope functions of Kotlin's standard library. Callbacks
//! are passed as `Option`s so that an absent callback is reported as
//! [`Error::MissingArgument`](crate::Error::MissingArgument) naming the
//! parameter, never as a panic.
//!
//! The receiver itself may be anything, including an absent `Option`:
//!
//! ```
//! use konvenience_core::Scope;
//!
//! let mut seen = false;
//! let value: Option<&str> = None;
//! let result = value.also(Some(|_: &mut Option<&str>| seen = true)).unwrap();
//!
//! assert_eq!(result, None);
//! assert!(seen);
//! ```

use crate::error::Result;
use crate::validate::require_present;

/// Chaining helpers available on every sized value.
pub trait Scope: Sized {
    /// Runs `action` on the value, then returns the value.
    ///
    /// The action receives a mutable borrow, which makes this convenient for
    /// setup that does not fit in a constructor:
    ///
    /// ```
    /// use konvenience_core::Scope;
    ///
    /// let list = Vec::<i32>::new()
    ///     .also(Some(|v: &mut Vec<i32>| {
    ///         v.push(1);
    ///         v.push(2);
    ///     }))
    ///     .unwrap();
    /// assert_eq!(list, [1, 2]);
    /// ```
    fn also<F>(mut self, action: Option<F>) -> Result<Self>
    where
        F: FnOnce(&mut Self),
    {
        let action = require_present(action, "action")?;
        action(&mut self);
        Ok(self)
    }

    /// Returns the result of `function` applied to the value.
    fn let_<R, F>(self, function: Option<F>) -> Result<R>
    where
        F: FnOnce(Self) -> R,
    {
        let function = require_present(function, "function")?;
        Ok(function(self))
    }

    /// Returns the value if `predicate` holds for it, `None` otherwise.
    ///
    /// ```
    /// use konvenience_core::Scope;
    ///
    /// let name = "".take_unless(Some(|s: &&str| s.is_empty())).unwrap();
    /// assert_eq!(name.unwrap_or("default"), "default");
    /// ```
    fn take_if<F>(self, predicate: Option<F>) -> Result<Option<Self>>
    where
        F: FnOnce(&Self) -> bool,
    {
        let predicate = require_present(predicate, "predicate")?;
        Ok(predicate(&self).then_some(self))
    }

    /// Inverse of [`take_if`](Scope::take_if).
    fn take_unless<F>(self, predicate: Option<F>) -> Result<Option<Self>>
    where
        F: FnOnce(&Self) -> bool,
    {
        let predicate = require_present(predicate, "predicate")?;
        Ok((!predicate(&self)).then_some(self))
    }
}

impl<T> Scope for T {}

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;
