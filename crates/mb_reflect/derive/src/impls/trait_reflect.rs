use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generates the `Reflect` impl.
///
/// `set` is shared by every kind; the other methods come from the caller.
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    reflect_clone_tokens: TokenStream,
    reflect_eq_tokens: TokenStream,
    reflect_debug_tokens: TokenStream,
) -> TokenStream {
    use crate::path::fp::ResultFP;

    let mb_reflect_path = meta.mb_reflect_path();
    let reflect_ = crate::path::reflect_(mb_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(mb_reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true, false);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            fn set(
                &mut self,
                __value: #macro_utils_::Box<dyn #reflect_>,
            ) -> #ResultFP<(), #macro_utils_::Box<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(__value)?;
                #ResultFP::Ok(())
            }

            #reflect_clone_tokens

            #reflect_eq_tokens

            #reflect_debug_tokens
        }
    }
}

/// `reflect_partial_eq` through `PartialEq`, if declared.
pub(crate) fn get_partial_eq_from_trait(meta: &ReflectMeta) -> Option<TokenStream> {
    use crate::path::fp::{OptionFP, PartialEqFP};

    let span = meta.attrs().avail_traits.partial_eq?;
    let reflect_ = crate::path::reflect_(meta.mb_reflect_path());

    Some(quote::quote_spanned! { span =>
        #[inline]
        fn reflect_partial_eq(&self, __other: &dyn #reflect_) -> #OptionFP<bool> {
            match <dyn #reflect_>::downcast_ref::<Self>(__other) {
                #OptionFP::Some(__other) => #OptionFP::Some(<Self as #PartialEqFP>::eq(self, __other)),
                #OptionFP::None => #OptionFP::Some(false),
            }
        }
    })
}

/// `reflect_debug` through `Debug`, if declared.
pub(crate) fn get_debug_from_trait(meta: &ReflectMeta) -> Option<TokenStream> {
    use crate::path::fp::DebugFP;

    let span = meta.attrs().avail_traits.debug?;

    Some(quote::quote_spanned! { span =>
        #[inline]
        fn reflect_debug(&self, __f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            <Self as #DebugFP>::fmt(self, __f)
        }
    })
}
