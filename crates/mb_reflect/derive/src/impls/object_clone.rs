use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::ReflectObject;

/// Generates `Reflect::reflect_clone` for an object.
///
/// - `clone`: through `Clone`.
/// - `default`: start from `Default`, then clone every described field.
/// - otherwise every field is cloned through reflection; an ignored field
///   makes the type uncloneable.
pub(crate) fn get_object_clone_impl(info: &ReflectObject) -> TokenStream {
    use crate::path::fp::{CloneFP, DefaultFP, ResultFP};

    let meta = info.meta();
    let mb_reflect_path = meta.mb_reflect_path();
    let macro_utils_ = crate::path::macro_utils_(mb_reflect_path);
    let reflect_ = crate::path::reflect_(mb_reflect_path);
    let reflect_clone_error_ = crate::path::reflect_clone_error_(mb_reflect_path);
    let type_path_ = crate::path::type_path_(mb_reflect_path);

    if let Some(span) = meta.attrs().avail_traits.clone {
        return quote_spanned! { span =>
            #[inline]
            fn reflect_clone(&self) -> #ResultFP<#macro_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
                #ResultFP::Ok(#macro_utils_::Box::new(<Self as #CloneFP>::clone(self)))
            }
        };
    }

    let described = info
        .fields()
        .iter()
        .filter(|field| field.attrs.ignore.is_none());

    if meta.attrs().avail_traits.default.is_some() {
        let assignments = described.map(|field| {
            let ident = field.ident;
            let ty = field.ty;
            quote! {
                __new_value.#ident = #macro_utils_::__reflect_clone_field::<#ty>(&self.#ident)?;
            }
        });

        return quote! {
            fn reflect_clone(&self) -> #ResultFP<#macro_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
                let mut __new_value = <Self as #DefaultFP>::default();
                #(#assignments)*
                #ResultFP::Ok(#macro_utils_::Box::new(__new_value))
            }
        };
    }

    if let Some(span) = info.fields().iter().find_map(|field| field.attrs.ignore) {
        return quote_spanned! { span =>
            #[inline]
            fn reflect_clone(&self) -> #ResultFP<#macro_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
                #ResultFP::Err(#reflect_clone_error_::NotSupported {
                    type_path: <Self as #type_path_>::type_path(),
                })
            }
        };
    }

    let initializers = described.map(|field| {
        let ident = field.ident;
        let ty = field.ty;
        quote! {
            #ident: #macro_utils_::__reflect_clone_field::<#ty>(&self.#ident)?,
        }
    });

    quote! {
        fn reflect_clone(&self) -> #ResultFP<#macro_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
            #ResultFP::Ok(#macro_utils_::Box::new(
                Self {
                    #(#initializers)*
                }
            ))
        }
    }
}
