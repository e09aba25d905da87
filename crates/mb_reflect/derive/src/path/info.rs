use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_path_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::info::TypePath
    }
}

#[inline]
pub(crate) fn typed_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::info::Typed
    }
}

#[inline]
pub(crate) fn type_info_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn custom_attributes_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::info::CustomAttributes
    }
}

#[inline(always)]
pub(crate) fn visibility_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::info::Visibility
    }
}

#[inline(always)]
pub(crate) fn opaque_info_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::info::OpaqueInfo
    }
}

#[inline(always)]
pub(crate) fn object_info_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::info::ObjectInfo
    }
}

#[inline(always)]
pub(crate) fn field_info_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn property_info_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::info::PropertyInfo
    }
}

#[inline(always)]
pub(crate) fn base_info_(mb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mb_reflect_path::info::BaseInfo
    }
}
