use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_meta_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::registry::TypeMeta
    }
}

#[inline]
pub(crate) fn get_type_meta_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::registry::GetTypeMeta
    }
}

#[inline]
pub(crate) fn from_type_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::registry::FromType
    }
}

#[inline]
pub(crate) fn type_registry_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::registry::TypeRegistry
    }
}

#[inline]
pub(crate) fn type_trait_default_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::registry::TypeTraitDefault
    }
}

#[inline]
pub(crate) fn type_trait_serialize_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::registry::TypeTraitSerialize
    }
}

#[inline]
pub(crate) fn type_trait_deserialize_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::registry::TypeTraitDeserialize
    }
}
