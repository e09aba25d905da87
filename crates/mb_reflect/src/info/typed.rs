use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// ```
/// use mb_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Point {
///     pub x: f32,
///     pub y: f32,
/// }
///
/// let info = <Point as Typed>::type_info().as_object().unwrap();
/// assert_eq!(info.fields().len(), 2);
/// ```
///
/// Manual implementations should cache the info in a
/// [`NonGenericTypeInfoCell`] or, for generic types, a [`GenericTypeInfoCell`].
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`], implemented for every `Typed` type.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
