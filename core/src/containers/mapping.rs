//! Helpers for keyed mappings.
//!
//! Mappings have no positional access; iteration hands the action each key
//! together with its value.

use super::Entries;
use crate::error::Result;
use crate::validate::require_present;

/// Invokes `action` once per entry, in the mapping's iteration order.
///
/// ```
/// use std::collections::BTreeMap;
/// use konvenience_core::containers::mapping::for_each;
///
/// let numbers = BTreeMap::from([("one", 1), ("two", 2), ("three", 3)]);
/// let mut total = 0;
/// for_each(Some(&numbers), Some(|_: &&str, v: &i32| total += v)).unwrap();
/// assert_eq!(total, 6);
/// ```
pub fn for_each<M, F>(mapping: Option<&M>, action: Option<F>) -> Result<()>
where
    M: Entries + ?Sized,
    F: FnMut(&M::Key, &M::Value),
{
    let mapping = require_present(mapping, M::NAME)?;
    let mut action = require_present(action, "action")?;
    for (key, value) in mapping.entries() {
        action(key, value);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mapping_test.rs"]
mod mapping_test;
