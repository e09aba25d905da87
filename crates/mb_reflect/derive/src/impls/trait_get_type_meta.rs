use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::Ident;

use crate::derive_data::ReflectMeta;

/// Generates the `GetTypeMeta` impl.
///
/// The declared `default`, `serialize` and `deserialize` flags become type
/// traits. Member types are registered as dependencies, so registering a
/// type makes the value types of its members resolvable too.
pub(crate) fn impl_trait_get_type_meta(meta: &ReflectMeta) -> TokenStream {
    let mb_reflect_path = meta.mb_reflect_path();
    let get_type_meta_ = crate::path::get_type_meta_(mb_reflect_path);
    let type_meta_ = crate::path::type_meta_(mb_reflect_path);
    let from_type_ = crate::path::from_type_(mb_reflect_path);
    let type_registry_ = crate::path::type_registry_(mb_reflect_path);

    let outer_ = Ident::new("__outer", Span::call_site());

    let mut trait_counter = 0usize;
    let avail_traits = &meta.attrs().avail_traits;

    let mut insert_trait = |span: Option<Span>, type_trait_: TokenStream| match span {
        Some(span) => {
            trait_counter += 1;
            quote_spanned! { span =>
                #type_meta_::insert_trait::<#type_trait_>(&mut #outer_, #from_type_::<Self>::from_type());
            }
        }
        None => crate::utils::empty(),
    };

    let insert_default = insert_trait(
        avail_traits.default,
        crate::path::type_trait_default_(mb_reflect_path),
    );
    let insert_serialize = insert_trait(
        avail_traits.serialize,
        crate::path::type_trait_serialize_(mb_reflect_path),
    );
    let insert_deserialize = insert_trait(
        avail_traits.deserialize,
        crate::path::type_trait_deserialize_(mb_reflect_path),
    );

    let register_deps_tokens = if meta.active_types().is_empty() {
        crate::utils::empty()
    } else {
        let types = meta.active_types();
        quote! {
            fn register_dependencies(__registry: &mut #type_registry_) {
                #( #type_registry_::register::<#types>(__registry); )*
            }
        }
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true, true);

    quote! {
        impl #impl_generics #get_type_meta_ for #real_ident #ty_generics #where_clause {
            fn get_type_meta() -> #type_meta_ {
                let mut #outer_ = #type_meta_::with_capacity::<Self>(#trait_counter);
                #insert_default
                #insert_serialize
                #insert_deserialize
                #outer_
            }

            #register_deps_tokens
        }
    }
}
