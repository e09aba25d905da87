//! Paths of the `mb_reflect` items referenced by generated code.
//!
//! Keeping them in one module limits the changes needed when `mb_reflect`
//! is reorganized. The only non-trivial part is the path of `mb_reflect`
//! itself, see [`mb_reflect`].

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Returns the path through which the calling crate reaches `mb_reflect`.
///
/// - A crate depending on `mb_reflect` gets `::mb_reflect`.
/// - A crate depending on the `mb_core` facade gets `::mb_core::reflect`.
/// - Anything else falls back to `::mb_reflect`.
///
/// Resolving this reads the caller's `Cargo.toml`, so the result is computed
/// once per expansion and passed around.
pub(crate) fn mb_reflect() -> syn::Path {
    mb_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("mb_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod registry;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use registry::*;

#[inline(always)]
pub(crate) fn macro_utils_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::__macro_exports::macro_utils
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn reflect_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn reflect_clone_error_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::ReflectCloneError
    }
}

#[inline(always)]
pub(crate) fn object_debug_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::impls::object_debug
    }
}

#[inline(always)]
pub(crate) fn object_partial_eq_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::impls::object_partial_eq
    }
}
