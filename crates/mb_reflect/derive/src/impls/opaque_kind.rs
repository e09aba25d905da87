use proc_macro2::TokenStream;
use quote::quote;

use super::trait_reflect::{get_debug_from_trait, get_partial_eq_from_trait};
use super::{get_auto_register_impl, impl_trait_get_type_meta};
use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectMeta;

/// Implements reflection for an opaque type: no members, cloned through
/// `Clone`.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let type_path_trait_tokens = impl_trait_type_path(meta);

    let typed_trait_tokens = impl_trait_typed(meta, meta.to_opaque_info_tokens());

    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        get_opaque_clone_impl(meta),
        get_partial_eq_from_trait(meta).unwrap_or_default(),
        // Without `debug`, the trait's `Opaque(path)` output is kept.
        get_debug_from_trait(meta).unwrap_or_default(),
    );

    let get_type_meta_tokens = impl_trait_get_type_meta(meta);

    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #auto_register_tokens

        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens

        #get_type_meta_tokens
    }
}

fn get_opaque_clone_impl(meta: &ReflectMeta) -> TokenStream {
    use crate::path::fp::{CloneFP, ResultFP};

    let mb_reflect_path = meta.mb_reflect_path();
    let macro_utils_ = crate::path::macro_utils_(mb_reflect_path);
    let reflect_ = crate::path::reflect_(mb_reflect_path);
    let reflect_clone_error_ = crate::path::reflect_clone_error_(mb_reflect_path);

    // `TypeAttributes::validity` guarantees the `clone` flag on opaque types.
    quote! {
        #[inline]
        fn reflect_clone(&self) -> #ResultFP<#macro_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
            #ResultFP::Ok(#macro_utils_::Box::new(<Self as #CloneFP>::clone(self)))
        }
    }
}
