//! Static type metadata.
//!
//! - [`TypePath`] / [`DynamicTypePath`]: stable type names, without the `::` prefix.
//! - [`Type`]: a [`TypeId`](core::any::TypeId) plus a [`TypePathTable`].
//! - [`Typed`] / [`DynamicTyped`]: access to a type's [`TypeInfo`].
//! - [`TypeInfo`]: either an [`ObjectInfo`] (a type with members) or an
//!   [`OpaqueInfo`] (a leaf value such as `i32` or `String`).
//! - Members of an object:
//!     - [`PropertyInfo`]: a named value read and written through accessor functions,
//!       optionally taking index arguments.
//!     - [`FieldInfo`]: a named storage slot, reached by reference.
//!     - [`BaseInfo`]: the embedded base value whose members the object inherits.
//!     - [`MemberInfo`]: a handle to either a property or a field.
//! - [`CustomAttributes`]: user data attached to types and members.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod base_info;
mod field_info;
mod member_info;
mod object_info;
mod opaque_info;
mod property_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{impl_custom_attributes_fn, impl_with_custom_attributes};
pub(crate) use field_info::{FieldAccess, TypedField};
pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use attributes::CustomAttributes;
pub use base_info::BaseInfo;
pub use field_info::FieldInfo;
pub use member_info::{MemberInfo, MemberKind, Visibility};
pub use object_info::ObjectInfo;
pub use opaque_info::OpaqueInfo;
pub use property_info::{IndexerBuilder, PropertyBuilder, PropertyInfo};
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};
