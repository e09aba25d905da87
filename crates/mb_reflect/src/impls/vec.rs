use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_set_fn;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};
use crate::{Reflect, ReflectCloneError};

impl<T: TypePath> TypePath for Vec<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::vec::Vec<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Vec<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Vec"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::vec")
    }
}

impl<T: Reflect + Typed> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl<T: Reflect + Typed> Reflect for Vec<T> {
    impl_reflect_set_fn!();

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let not_supported = |_| ReflectCloneError::NotSupported {
            type_path: Self::type_path(),
        };
        let items = self
            .iter()
            .map(|item| item.reflect_clone()?.take::<T>().map_err(not_supported))
            .collect::<Result<Vec<T>, _>>()?;
        Ok(Box::new(items))
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        let Some(other) = other.downcast_ref::<Self>() else {
            return Some(false);
        };
        if self.len() != other.len() {
            return Some(false);
        }
        for (a, b) in self.iter().zip(other) {
            if !a.reflect_partial_eq(b.as_reflect())? {
                return Some(false);
            }
        }
        Some(true)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(Reflect::as_reflect))
            .finish()
    }
}

impl<T: Reflect + GetTypeMeta> GetTypeMeta for Vec<T> {
    fn get_type_meta() -> TypeMeta {
        let mut meta = TypeMeta::with_capacity::<Self>(1);
        meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
        meta
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::TypePath;

    #[test]
    fn generic_paths_per_instantiation() {
        assert_eq!(<Vec<u8>>::type_path(), "alloc::vec::Vec<u8>");
        assert_eq!(<Vec<String>>::type_name(), "Vec<String>");
        assert_eq!(
            <Option<Vec<u8>>>::type_path(),
            "core::option::Option<alloc::vec::Vec<u8>>"
        );
        assert_eq!(<Option<Vec<u8>>>::type_name(), "Option<Vec<u8>>");
    }

    #[test]
    fn element_wise_operations() {
        let list = vec![Some(1_i32), None];
        assert_eq!(format!("{:?}", list.as_reflect()), "[Some(1), None]");

        let copy = list.reflect_clone().unwrap().take::<Vec<Option<i32>>>().unwrap();
        assert_eq!(copy, list);
        assert_eq!(list.reflect_partial_eq(&copy), Some(true));
        assert_eq!(list.reflect_partial_eq(&vec![Some(1_i32)]), Some(false));
    }
}
