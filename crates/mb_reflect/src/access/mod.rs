//! Uniform access to the bindable members of a type.
//!
//! A model binder should not care whether a value lands in a property or a
//! field. [`BindableMember`] wraps either one behind the same
//! [`get_value`]/[`set_value`] contract, and [`collect_bindable`] lists the
//! members of a type a binder may populate.
//!
//! Discovery is a pure function of the [`TypeInfo`]; repeated lookups can be
//! memoized explicitly with a [`BindableCache`].
//!
//! [`get_value`]: BindableMember::get_value
//! [`set_value`]: BindableMember::set_value
//! [`TypeInfo`]: crate::info::TypeInfo

// -----------------------------------------------------------------------------
// Modules

mod bindable;
mod cache;
mod discovery;
mod error;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use bindable::BindableMember;
pub use cache::BindableCache;
pub use discovery::{BindableMembers, collect_bindable, collect_bindable_of};
pub use error::BindError;
pub use value::MemberValue;
