use proc_macro2::TokenStream;
use quote::quote;

use super::trait_reflect::{get_debug_from_trait, get_partial_eq_from_trait};
use super::{get_auto_register_impl, get_object_clone_impl, impl_trait_get_type_meta};
use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectObject;

/// Implements reflection for a struct described by its members.
pub(crate) fn impl_object(info: &ReflectObject) -> TokenStream {
    let meta = info.meta();

    let type_path_trait_tokens = impl_trait_type_path(meta);

    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        get_object_clone_impl(info),
        get_partial_eq_from_trait(meta).unwrap_or_else(|| get_object_eq_impl(info)),
        get_debug_from_trait(meta).unwrap_or_else(|| get_object_debug_impl(info)),
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

fn get_object_eq_impl(info: &ReflectObject) -> TokenStream {
    use crate::path::fp::OptionFP;

    let mb_reflect_path = info.meta().mb_reflect_path();
    let reflect_ = crate::path::reflect_(mb_reflect_path);
    let object_partial_eq_ = crate::path::object_partial_eq_(mb_reflect_path);

    quote! {
        #[inline]
        fn reflect_partial_eq(&self, __other: &dyn #reflect_) -> #OptionFP<bool> {
            #object_partial_eq_(self, __other)
        }
    }
}

fn get_object_debug_impl(info: &ReflectObject) -> TokenStream {
    let object_debug_ = crate::path::object_debug_(info.meta().mb_reflect_path());

    quote! {
        #[inline]
        fn reflect_debug(&self, __f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            #object_debug_(self, __f)
        }
    }
}
