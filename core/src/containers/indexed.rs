//! Helpers for fixed-size arrays and growable lists.
//!
//! Both shapes support positional access through [`Indexed`]; the only
//! observable difference between them is the parameter name reported when
//! the container is absent (`"array"` or `"list"`).

use super::Indexed;
use crate::error::Result;
use crate::validate::{index_is_valid, index_out_of_range, require_index, require_present};

/// Invokes `action` on every element, in positional order.
pub fn for_each<C, F>(container: Option<&C>, action: Option<F>) -> Result<()>
where
    C: Indexed + ?Sized,
    F: FnMut(&C::Item),
{
    let container = require_present(container, C::NAME)?;
    let action = require_present(action, "action")?;
    container.elements().for_each(action);
    Ok(())
}

/// Like [`for_each`], also passing each element's zero-based position.
pub fn for_each_indexed<C, F>(container: Option<&C>, action: Option<F>) -> Result<()>
where
    C: Indexed + ?Sized,
    F: FnMut(&C::Item, usize),
{
    let container = require_present(container, C::NAME)?;
    let mut action = require_present(action, "action")?;
    for (index, element) in container.elements().enumerate() {
        action(element, index);
    }
    Ok(())
}

/// Returns the element at `index`.
///
/// ```
/// use konvenience_core::containers::indexed::get;
/// use konvenience_core::Error;
///
/// let letters = ['a', 'b', 'c', 'd'];
/// assert_eq!(get(Some(&letters), 0), Ok(&'a'));
/// assert!(matches!(get(Some(&letters), 4), Err(Error::IndexOutOfRange { .. })));
/// ```
pub fn get<C>(container: Option<&C>, index: isize) -> Result<&C::Item>
where
    C: Indexed + ?Sized,
{
    let container = require_present(container, C::NAME)?;
    let len = container.length();
    let position = require_index(index, "index", len)?;
    container
        .get_at(position)
        .ok_or_else(|| index_out_of_range(index, "index", len))
}

/// Returns a copy of the element at `index`, or `fallback` when `index` does
/// not address an element.
pub fn get_or_else<C>(container: Option<&C>, index: isize, fallback: C::Item) -> Result<C::Item>
where
    C: Indexed + ?Sized,
    C::Item: Clone,
{
    let container = require_present(container, C::NAME)?;
    Ok(element_at(container, index).cloned().unwrap_or(fallback))
}

/// Like [`get_or_else`], computing the fallback only when it is needed.
///
/// `function` is neither inspected nor invoked when `index` is valid, so an
/// absent function only fails on the fallback path.
///
/// ```
/// use konvenience_core::containers::indexed::get_or_else_with;
///
/// let letters = vec!['a', 'b', 'c', 'd'];
/// let mut calls = 0;
///
/// let found = get_or_else_with(Some(&letters), 0, Some(|| {
///     calls += 1;
///     'z'
/// }));
/// assert_eq!(found, Ok('a'));
/// assert_eq!(calls, 0);
/// ```
pub fn get_or_else_with<C, F>(
    container: Option<&C>,
    index: isize,
    function: Option<F>,
) -> Result<C::Item>
where
    C: Indexed + ?Sized,
    C::Item: Clone,
    F: FnOnce() -> C::Item,
{
    let container = require_present(container, C::NAME)?;
    if let Some(element) = element_at(container, index) {
        return Ok(element.clone());
    }
    tracing::trace!(index, len = container.length(), "computing fallback");
    let function = require_present(function, "function")?;
    Ok(function())
}

fn element_at<C>(container: &C, index: isize) -> Option<&C::Item>
where
    C: Indexed + ?Sized,
{
    if !index_is_valid(index, container.length()) {
        return None;
    }
    container.get_at(index as usize)
}

#[cfg(test)]
#[path = "indexed_test.rs"]
mod indexed_test;
