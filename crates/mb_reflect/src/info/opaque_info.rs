use alloc::sync::Arc;

use crate::info::{CustomAttributes, Type, TypePath};
use crate::info::{impl_custom_attributes_fn, impl_type_fn, impl_with_custom_attributes};

/// Metadata for types whose internals are not exposed, such as `u64`,
/// `String` or `Vec<T>`. Opaque types have no bindable members.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
    custom_attributes: Option<Arc<CustomAttributes>>,
}

impl OpaqueInfo {
    impl_type_fn!(ty);
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            custom_attributes: None,
        }
    }
}
