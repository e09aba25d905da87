//! Runtime lookup of type metadata and capabilities.
//!
//! - [`TypeTrait`]: a capability of a type, such as "can be deserialized".
//! - [`FromType`]: creates a `TypeTrait` for a concrete type.
//! - [`TypeMeta`]: a [`TypeInfo`](crate::info::TypeInfo) plus a `TypeTrait` table.
//! - [`GetTypeMeta`]: creates the `TypeMeta` of a type; derived by `#[derive(Reflect)]`.
//! - [`TypeRegistry`]: `TypeMeta`s keyed by `TypeId`, type path and type name.
//! - Type traits: [`TypeTraitDefault`], [`TypeTraitSerialize`], [`TypeTraitDeserialize`].
//!
//! A binder that only knows a member's [`value_type`] uses the registry to
//! turn raw input into a value for [`set_value`]:
//!
//! ```
//! use mb_reflect::access::collect_bindable_of;
//! use mb_reflect::derive::Reflect;
//! use mb_reflect::registry::{TypeRegistry, TypeTraitDeserialize};
//!
//! #[derive(Reflect, Default)]
//! pub struct Query {
//!     pub page: u32,
//! }
//!
//! let registry = TypeRegistry::new();
//! let mut query = Query::default();
//!
//! let member = collect_bindable_of::<Query>().next().unwrap();
//! let deserialize = registry
//!     .get_type_trait::<TypeTraitDeserialize>(member.value_type().id())
//!     .unwrap();
//!
//! let mut input = serde_json::Deserializer::from_str("7");
//! let value = deserialize.deserialize(&mut input).unwrap();
//! member.set_value(&mut query, value).unwrap();
//!
//! assert_eq!(query.page, 7);
//! ```
//!
//! [`value_type`]: crate::access::BindableMember::value_type
//! [`set_value`]: crate::access::BindableMember::set_value

// -----------------------------------------------------------------------------
// Modules

mod from_type;
mod traits;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use from_type::FromType;
pub use traits::{TypeTraitDefault, TypeTraitDeserialize, TypeTraitSerialize};
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::{TypeRegistry, TypeRegistryArc};
pub use type_trait::TypeTrait;
