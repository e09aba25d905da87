use alloc::boxed::Box;
use core::fmt;
use core::ops::Deref;

use crate::{Reflect, ReflectCloneError};

/// A value read through a [`BindableMember`](super::BindableMember).
///
/// Fields are borrowed from the source object, property getters produce a
/// fresh value. Either way the value derefs to [`dyn Reflect`](Reflect).
///
/// ```
/// use mb_reflect::access::MemberValue;
///
/// let number = 5_i32;
/// let value = MemberValue::Borrowed(&number);
/// assert!(value.is_borrowed());
/// assert_eq!(value.downcast_ref::<i32>(), Some(&5));
///
/// let owned = value.into_owned().unwrap();
/// assert_eq!(owned.take::<i32>().ok(), Some(5));
/// ```
pub enum MemberValue<'a> {
    Borrowed(&'a dyn Reflect),
    Owned(Box<dyn Reflect>),
}

impl MemberValue<'_> {
    #[inline]
    pub const fn is_borrowed(&self) -> bool {
        matches!(self, Self::Borrowed(_))
    }

    /// Converts into an owned value, cloning borrowed values with
    /// [`Reflect::reflect_clone`].
    pub fn into_owned(self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        match self {
            Self::Borrowed(value) => value.reflect_clone(),
            Self::Owned(value) => Ok(value),
        }
    }
}

impl Deref for MemberValue<'_> {
    type Target = dyn Reflect;

    #[inline]
    fn deref(&self) -> &Self::Target {
        match self {
            Self::Borrowed(value) => *value,
            Self::Owned(value) => value.as_ref(),
        }
    }
}

impl fmt::Debug for MemberValue<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
