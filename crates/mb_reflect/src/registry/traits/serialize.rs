use serde_core::ser::Error as _;
use serde_core::{Serialize, Serializer};

use crate::Reflect;
use crate::info::{TypePath, Typed};
use crate::registry::FromType;

/// Serializes a `dyn Reflect` of a registered type with `serde`.
///
/// Serializing a value of another type is reported through the serializer's
/// error type.
///
/// ```
/// use mb_reflect::derive::Reflect;
/// use mb_reflect::registry::{TypeRegistry, TypeTraitSerialize};
/// use mb_reflect::Reflect;
/// use serde::Serialize;
///
/// #[derive(Reflect, Serialize)]
/// #[reflect(serialize)]
/// pub struct Money {
///     pub cents: i64,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Money>();
///
/// let money = Money { cents: 250 };
/// let serialize = registry.get_type_trait::<TypeTraitSerialize>(money.ty_id()).unwrap();
///
/// let mut out = Vec::new();
/// serialize.serialize(&money, &mut serde_json::Serializer::new(&mut out)).unwrap();
/// assert_eq!(out, br#"{"cents":250}"#);
///
/// assert!(serialize.serialize(&1_u8, &mut serde_json::Serializer::new(Vec::new())).is_err());
/// ```
#[derive(Clone)]
pub struct TypeTraitSerialize {
    type_path: fn() -> &'static str,
    func: fn(value: &dyn Reflect) -> Option<&dyn erased_serde::Serialize>,
}

impl<T: erased_serde::Serialize + Typed + Reflect> FromType<T> for TypeTraitSerialize {
    fn from_type() -> Self {
        Self {
            type_path: T::type_path,
            func: |value| {
                value
                    .downcast_ref::<T>()
                    .map(|value| value as &dyn erased_serde::Serialize)
            },
        }
    }
}

impl TypeTraitSerialize {
    pub fn serialize<S: Serializer>(
        &self,
        value: &dyn Reflect,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match (self.func)(value) {
            Some(erased) => erased.serialize(serializer),
            None => Err(S::Error::custom(format_args!(
                "cannot serialize `{}` as `{}`",
                value.reflect_type_path(),
                (self.type_path)(),
            ))),
        }
    }
}

impl TypePath for TypeTraitSerialize {
    #[inline]
    fn type_path() -> &'static str {
        "mb_reflect::registry::TypeTraitSerialize"
    }

    #[inline]
    fn type_name() -> &'static str {
        "TypeTraitSerialize"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "TypeTraitSerialize"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("mb_reflect::registry")
    }
}
