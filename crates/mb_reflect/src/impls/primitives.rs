use alloc::boxed::Box;
use core::fmt;

use crate::derive::impl_reflect_opaque;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_set_fn;
use crate::registry::{FromType, GetTypeMeta, TypeMeta};
use crate::registry::{TypeTraitDefault, TypeTraitDeserialize, TypeTraitSerialize};
use crate::{Reflect, ReflectCloneError};

impl_reflect_opaque!(bool (full));
impl_reflect_opaque!(char (full));
impl_reflect_opaque!(u8 (full));
impl_reflect_opaque!(u16 (full));
impl_reflect_opaque!(u32 (full));
impl_reflect_opaque!(u64 (full));
impl_reflect_opaque!(u128 (full));
impl_reflect_opaque!(usize (full));
impl_reflect_opaque!(i8 (full));
impl_reflect_opaque!(i16 (full));
impl_reflect_opaque!(i32 (full));
impl_reflect_opaque!(i64 (full));
impl_reflect_opaque!(i128 (full));
impl_reflect_opaque!(isize (full));
impl_reflect_opaque!(f32 (full));
impl_reflect_opaque!(f64 (full));
impl_reflect_opaque!(::alloc::string::String (full));

// `()` and `&'static str` are not paths, so they are spelled out.

impl TypePath for () {
    #[inline]
    fn type_path() -> &'static str {
        "()"
    }
    #[inline]
    fn type_name() -> &'static str {
        "()"
    }
    #[inline]
    fn type_ident() -> &'static str {
        "()"
    }
}

impl Typed for () {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl Reflect for () {
    impl_reflect_set_fn!();

    #[inline]
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        Ok(Box::new(()))
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        Some(other.is::<Self>())
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl GetTypeMeta for () {
    fn get_type_meta() -> TypeMeta {
        let mut meta = TypeMeta::with_capacity::<Self>(3);
        meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
        meta.insert_trait::<TypeTraitSerialize>(FromType::<Self>::from_type());
        meta.insert_trait::<TypeTraitDeserialize>(FromType::<Self>::from_type());
        meta
    }
}

impl TypePath for &'static str {
    #[inline]
    fn type_path() -> &'static str {
        "&str"
    }
    #[inline]
    fn type_name() -> &'static str {
        "&str"
    }
    #[inline]
    fn type_ident() -> &'static str {
        "&str"
    }
}

impl Typed for &'static str {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl Reflect for &'static str {
    impl_reflect_set_fn!();

    #[inline]
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        Ok(Box::new(*self))
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl GetTypeMeta for &'static str {
    fn get_type_meta() -> TypeMeta {
        let mut meta = TypeMeta::with_capacity::<Self>(1);
        meta.insert_trait::<TypeTraitSerialize>(FromType::<Self>::from_type());
        meta
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath};

    #[test]
    fn primitive_paths() {
        assert_eq!(<u64 as TypePath>::type_path(), "u64");
        assert_eq!(<u64 as TypePath>::module_path(), None);
        assert_eq!(String::type_path(), "alloc::string::String");
        assert_eq!(String::type_name(), "String");
        assert_eq!(String::module_path(), Some("alloc::string"));
        assert_eq!(<() as TypePath>::type_path(), "()");
    }

    #[test]
    fn opaque_behaviour() {
        let value: Box<dyn Reflect> = Box::new(1.5_f32);
        assert_eq!(value.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(value.reflect_partial_eq(&1.5_f32), Some(true));
        assert_eq!(value.reflect_partial_eq(&1.5_f64), Some(false));
        assert_eq!(format!("{value:?}"), "1.5");

        let cloned = value.reflect_clone().unwrap();
        assert_eq!(cloned.take::<f32>().unwrap(), 1.5);
    }

    #[test]
    fn set_replaces_same_type_only() {
        let mut text = String::from("old");
        text.set(Box::new(String::from("new"))).unwrap();
        assert_eq!(text, "new");

        let rejected = text.set(Box::new(3_u8)).unwrap_err();
        assert_eq!(rejected.take::<u8>().unwrap(), 3);
        assert_eq!(text, "new");

        let mut label: &'static str = "a";
        label.set(Box::new("b")).unwrap();
        assert_eq!(label, "b");
    }
}
