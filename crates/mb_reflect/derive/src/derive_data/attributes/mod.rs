//! Parsing of `#[reflect(...)]` attributes.
//!
//! This covers everything code generation needs, not only the custom
//! attributes that end up in the type info.

// -----------------------------------------------------------------------------
// Modules

mod custom_attributes;
mod field_attributes;
mod flags;
mod property_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

use custom_attributes::CustomAttributes;
use flags::TraitAvailableFlags;

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use property_attributes::PropertyAttributes;
pub(crate) use type_attributes::TypeAttributes;
