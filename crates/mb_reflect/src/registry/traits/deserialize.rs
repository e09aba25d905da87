use alloc::boxed::Box;

use serde_core::{Deserialize, Deserializer};

use crate::Reflect;
use crate::info::Typed;
use crate::registry::FromType;

/// Deserializes a boxed value of a registered type with `serde`.
///
/// ```
/// use core::any::TypeId;
/// use mb_reflect::registry::{TypeRegistry, TypeTraitDeserialize};
///
/// let registry = TypeRegistry::new();
/// let deserialize = registry
///     .get_type_trait::<TypeTraitDeserialize>(TypeId::of::<bool>())
///     .unwrap();
/// let value = deserialize
///     .deserialize(&mut serde_json::Deserializer::from_str("true"))
///     .unwrap();
/// assert_eq!(value.take::<bool>().unwrap(), true);
/// ```
#[derive(Clone)]
pub struct TypeTraitDeserialize {
    func: fn(
        deserializer: &mut dyn erased_serde::Deserializer,
    ) -> Result<Box<dyn Reflect>, erased_serde::Error>,
}

impl TypeTraitDeserialize {
    #[inline]
    pub fn deserialize<'de, D: Deserializer<'de>>(
        &self,
        deserializer: D,
    ) -> Result<Box<dyn Reflect>, D::Error> {
        let mut erased = <dyn erased_serde::Deserializer>::erase(deserializer);
        (self.func)(&mut erased).map_err(<D::Error as serde_core::de::Error>::custom)
    }
}

impl<T: for<'a> Deserialize<'a> + Typed + Reflect> FromType<T> for TypeTraitDeserialize {
    fn from_type() -> Self {
        Self {
            func: |deserializer| Ok(Box::new(T::deserialize(deserializer)?)),
        }
    }
}

crate::derive::impl_type_path!(::mb_reflect::registry::TypeTraitDeserialize);
