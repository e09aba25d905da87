use core::fmt;

use crate::info::{CustomAttributes, FieldInfo, PropertyInfo, Type, TypeInfo};

// -----------------------------------------------------------------------------
// Visibility

/// Declared visibility of a member.
///
/// Derived from the Rust visibility of a field (`pub` is [`Public`], anything
/// narrower is [`Private`]); properties are public unless marked `private`.
///
/// [`Public`]: Visibility::Public
/// [`Private`]: Visibility::Private
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    #[inline]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

// -----------------------------------------------------------------------------
// MemberKind

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Property,
    Field,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property => f.pad("property"),
            Self::Field => f.pad("field"),
        }
    }
}

// -----------------------------------------------------------------------------
// MemberInfo

/// A handle to exactly one member descriptor: a property or a field.
#[derive(Debug, Clone, Copy)]
pub enum MemberInfo {
    Property(&'static PropertyInfo),
    Field(&'static FieldInfo),
}

impl MemberInfo {
    #[inline]
    pub const fn kind(self) -> MemberKind {
        match self {
            Self::Property(_) => MemberKind::Property,
            Self::Field(_) => MemberKind::Field,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Property(info) => info.name(),
            Self::Field(info) => info.name(),
        }
    }

    /// The declared value type.
    #[inline]
    pub const fn ty(self) -> &'static Type {
        match self {
            Self::Property(info) => info.ty(),
            Self::Field(info) => info.ty(),
        }
    }

    #[inline]
    pub fn type_info(self) -> &'static TypeInfo {
        match self {
            Self::Property(info) => info.type_info(),
            Self::Field(info) => info.type_info(),
        }
    }

    /// The type that declares the member.
    #[inline]
    pub const fn owner(self) -> &'static Type {
        match self {
            Self::Property(info) => info.owner(),
            Self::Field(info) => info.owner(),
        }
    }

    #[inline]
    pub const fn visibility(self) -> Visibility {
        match self {
            Self::Property(info) => info.visibility(),
            Self::Field(info) => info.visibility(),
        }
    }

    #[inline]
    pub fn custom_attributes(self) -> &'static CustomAttributes {
        match self {
            Self::Property(info) => info.custom_attributes(),
            Self::Field(info) => info.custom_attributes(),
        }
    }

    /// Whether a binder may both read and write this member without extra
    /// arguments.
    ///
    /// Properties must be public, readable, writable and not indexed.
    /// Fields must be public and not read-only.
    pub fn is_bindable(self) -> bool {
        match self {
            Self::Property(info) => {
                info.visibility().is_public()
                    && info.can_read()
                    && info.can_write()
                    && !info.is_indexer()
            }
            Self::Field(info) => info.visibility().is_public() && !info.is_readonly(),
        }
    }

    #[inline]
    pub const fn as_property(self) -> Option<&'static PropertyInfo> {
        match self {
            Self::Property(info) => Some(info),
            Self::Field(_) => None,
        }
    }

    #[inline]
    pub const fn as_field(self) -> Option<&'static FieldInfo> {
        match self {
            Self::Field(info) => Some(info),
            Self::Property(_) => None,
        }
    }
}

impl From<&'static PropertyInfo> for MemberInfo {
    #[inline]
    fn from(value: &'static PropertyInfo) -> Self {
        Self::Property(value)
    }
}

impl From<&'static FieldInfo> for MemberInfo {
    #[inline]
    fn from(value: &'static FieldInfo) -> Self {
        Self::Field(value)
    }
}
