//! Items used by the code that `mb_reflect_derive` generates.

/// Re-exports that do not depend on the caller declaring `extern crate alloc`.
pub mod macro_utils {
    pub use alloc::borrow::ToOwned;
    pub use alloc::boxed::Box;
    pub use alloc::string::ToString;

    pub use crate::impls::concat as __concat;

    use crate::info::TypePath;
    use crate::{Reflect, ReflectCloneError};

    /// Clones one member of an object through [`Reflect::reflect_clone`].
    pub fn __reflect_clone_field<T: Reflect + TypePath>(value: &T) -> Result<T, ReflectCloneError> {
        value
            .reflect_clone()?
            .take::<T>()
            .map_err(|_| ReflectCloneError::NotSupported {
                type_path: T::type_path(),
            })
    }
}

/// Static registration through [`inventory`].
#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::registry::{GetTypeMeta, TypeRegistry};

    /// A registration function submitted by a derived or listed type.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: GetTypeMeta> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    /// Present in the registry after [`__register_types`] iff the platform
    /// supports static registration.
    #[derive(crate::derive::Reflect)]
    #[reflect(type_path = "mb_reflect::__macro_exports::auto_register::__AvailFlag")]
    #[reflect(auto_register)]
    pub struct __AvailFlag;

    pub fn __register_types(registry: &mut TypeRegistry) {
        let before = registry.len();
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
        log::trace!(
            "auto registration added {} types",
            registry.len().saturating_sub(before)
        );
    }
}
