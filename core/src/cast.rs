//! Safe type narrowing.
//!
//! Narrowing never fails: an incompatible runtime type and an absent input
//! both yield `None`.

use core::any::Any;

use crate::Box;

/// Narrows a type-erased reference to `U`.
///
/// ```
/// use core::any::Any;
/// use konvenience_core::cast::safe_cast;
///
/// let value: &dyn Any = &42_i32;
/// assert_eq!(safe_cast::<i32>(Some(value)), Some(&42));
/// assert_eq!(safe_cast::<u8>(Some(value)), None);
/// assert_eq!(safe_cast::<i32>(None), None);
/// ```
pub fn safe_cast<U: Any>(obj: Option<&dyn Any>) -> Option<&U> {
    obj?.downcast_ref::<U>()
}

pub fn safe_cast_mut<U: Any>(obj: Option<&mut dyn Any>) -> Option<&mut U> {
    obj?.downcast_mut::<U>()
}

/// Narrows an owned, type-erased box to `U`. The box is dropped when the
/// runtime type does not match.
pub fn safe_cast_boxed<U: Any>(obj: Option<Box<dyn Any>>) -> Option<Box<U>> {
    obj?.downcast::<U>().ok()
}

/// Method form of [`safe_cast`] for concrete values.
///
/// Trait objects should go through the free functions: calling this on a
/// `Box<dyn Any>` inspects the box itself, not its contents.
pub trait SafeCast {
    fn safe_cast<U: Any>(&self) -> Option<&U>;

    fn safe_cast_mut<U: Any>(&mut self) -> Option<&mut U>;
}

impl<T: Any> SafeCast for T {
    #[inline]
    fn safe_cast<U: Any>(&self) -> Option<&U> {
        safe_cast(Some(self as &dyn Any))
    }

    #[inline]
    fn safe_cast_mut<U: Any>(&mut self) -> Option<&mut U> {
        safe_cast_mut(Some(self as &mut dyn Any))
    }
}

#[cfg(test)]
#[path = "cast_test.rs"]
mod cast_test;
