//! Helpers for lazy sequences.
//!
//! A sequence is any `IntoIterator`. It is consumed by the call and walked
//! at most once, so single-pass sources work; pass `iter()` or a clone to
//! keep a restartable source usable afterwards. Elements are produced by
//! value, whatever the iterator yields.
//!
//! The length of a sequence is unknown until it has been walked, so an index
//! past the end is reported with the length observed while walking.
//!
//! An absent sequence is reported as a missing argument named `"sequence"`.

use crate::error::Result;
use crate::validate::{index_out_of_range, require_in_range, require_present};

const SEQUENCE: &str = "sequence";

pub fn for_each<I, F>(sequence: Option<I>, action: Option<F>) -> Result<()>
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    let sequence = require_present(sequence, SEQUENCE)?;
    let action = require_present(action, "action")?;
    sequence.into_iter().for_each(action);
    Ok(())
}

pub fn for_each_indexed<I, F>(sequence: Option<I>, action: Option<F>) -> Result<()>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize),
{
    let sequence = require_present(sequence, SEQUENCE)?;
    let mut action = require_present(action, "action")?;
    for (index, element) in sequence.into_iter().enumerate() {
        action(element, index);
    }
    Ok(())
}

/// Returns the element at `index`, walking no further than that element.
///
/// ```
/// use konvenience_core::containers::sequence::get;
///
/// let squares = (0..).map(|n: u64| n * n);
/// assert_eq!(get(Some(squares), 12), Ok(144));
/// ```
pub fn get<I>(sequence: Option<I>, index: isize) -> Result<I::Item>
where
    I: IntoIterator,
{
    let sequence = require_present(sequence, SEQUENCE)?;
    require_in_range(index, "index", 0, isize::MAX)?;
    let target = index as usize;

    let mut len = 0;
    for element in sequence {
        if len == target {
            return Ok(element);
        }
        len += 1;
    }
    Err(index_out_of_range(index, "index", len))
}

pub fn get_or_else<I>(sequence: Option<I>, index: isize, fallback: I::Item) -> Result<I::Item>
where
    I: IntoIterator,
{
    let sequence = require_present(sequence, SEQUENCE)?;
    Ok(element_at(sequence, index).unwrap_or(fallback))
}

/// Like [`get_or_else`], computing the fallback only when the sequence has
/// no element at `index`. An absent `function` only fails on that path.
pub fn get_or_else_with<I, F>(
    sequence: Option<I>,
    index: isize,
    function: Option<F>,
) -> Result<I::Item>
where
    I: IntoIterator,
    F: FnOnce() -> I::Item,
{
    let sequence = require_present(sequence, SEQUENCE)?;
    if let Some(element) = element_at(sequence, index) {
        return Ok(element);
    }
    tracing::trace!(index, "computing fallback");
    let function = require_present(function, "function")?;
    Ok(function())
}

/// Whether the sequence yields nothing. Pulls at most one element.
pub fn is_empty<I>(sequence: Option<I>) -> Result<bool>
where
    I: IntoIterator,
{
    let sequence = require_present(sequence, SEQUENCE)?;
    Ok(sequence.into_iter().next().is_none())
}

pub fn is_not_empty<I>(sequence: Option<I>) -> Result<bool>
where
    I: IntoIterator,
{
    is_empty(sequence).map(|empty| !empty)
}

fn element_at<I>(sequence: I, index: isize) -> Option<I::Item>
where
    I: IntoIterator,
{
    let position = usize::try_from(index).ok()?;
    sequence.into_iter().nth(position)
}

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;
