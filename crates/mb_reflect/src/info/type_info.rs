use core::fmt;

use thiserror::Error;

use crate::info::{CustomAttributes, ObjectInfo, OpaqueInfo};

// -----------------------------------------------------------------------------
// ReflectKind

/// The shape of a reflected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Object,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => f.pad("Object"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a [`TypeInfo`] is not of the expected [`ReflectKind`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("reflect kind mismatch: expected {expected}, received {received}")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information about a reflected type.
///
/// Obtained through [`Typed::type_info`], [`DynamicTyped::reflect_type_info`]
/// or [`TypeRegistry::get_type_info`].
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
/// [`TypeRegistry::get_type_info`]: crate::registry::TypeRegistry::get_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Object(ObjectInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`], or an error for other kinds.")]
        #[inline]
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    crate::info::impl_type_fn!(self => match self {
        Self::Object(info) => info.ty(),
        Self::Opaque(info) => info.ty(),
    });

    impl_cast_method!(as_object: Object => ObjectInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Object(_) => ReflectKind::Object,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    #[inline]
    pub fn custom_attributes(&self) -> &CustomAttributes {
        match self {
            Self::Object(info) => info.custom_attributes(),
            Self::Opaque(info) => info.custom_attributes(),
        }
    }

    crate::info::impl_custom_attributes_fn!();
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::info::{ReflectKind, ReflectKindError, Typed};

    #[test]
    fn cast_errors_report_kinds() {
        let info = <i32 as Typed>::type_info();
        assert!(info.as_opaque().is_ok());
        assert_eq!(
            info.as_object().unwrap_err(),
            ReflectKindError {
                expected: ReflectKind::Object,
                received: ReflectKind::Opaque,
            }
        );
        assert_eq!(
            info.as_object().unwrap_err().to_string(),
            "reflect kind mismatch: expected Object, received Opaque"
        );
    }
}
