use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{ImplGenerics, Path, Token, Type, TypeGenerics, punctuated::Punctuated};

use super::{TypeAttributes, TypeParser};
use crate::utils::StringExpr;

/// Everything about the reflected type that does not depend on its members.
pub(crate) struct ReflectMeta<'a> {
    mb_reflect_path: Path,
    attrs: TypeAttributes,
    type_parser: TypeParser<'a>,
    // Member types, for the bounds of generic impls.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("mb_reflect_path", &self.mb_reflect_path.to_token_stream().to_string())
            .field("type_parser", &self.type_parser)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, type_parser: TypeParser<'a>) -> Self {
        Self {
            attrs,
            type_parser,
            mb_reflect_path: crate::path::mb_reflect(),
            active_types: Vec::new(),
        }
    }

    /// Records the member types; duplicates are dropped so every bound is
    /// emitted once.
    pub(super) fn set_active_types(&mut self, types: impl IntoIterator<Item = Type>) {
        let mut seen: Vec<String> = Vec::new();
        for ty in types {
            let key = ty.to_token_stream().to_string();
            if !seen.contains(&key) {
                seen.push(key);
                self.active_types.push(ty);
            }
        }
    }

    #[inline]
    pub fn active_types(&self) -> &[Type] {
        &self.active_types
    }

    #[inline]
    pub fn mb_reflect_path(&self) -> &Path {
        &self.mb_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    /// `.with_custom_attributes(...)`, or nothing.
    #[inline]
    pub fn with_custom_attributes_expression(&self) -> TokenStream {
        self.attrs
            .custom_attributes
            .get_expression_with(&self.mb_reflect_path)
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.type_parser.impl_with_generic()
    }

    #[inline]
    pub fn real_ident(&self) -> TokenStream {
        self.type_parser.real_ident()
    }

    #[inline]
    pub fn module_path(&self) -> Option<StringExpr> {
        self.type_parser.module_path()
    }

    #[inline]
    pub fn type_ident(&self) -> StringExpr {
        self.type_parser.type_ident()
    }

    #[inline]
    pub fn type_name(&self) -> StringExpr {
        self.type_parser.type_name(&self.mb_reflect_path)
    }

    #[inline]
    pub fn type_path(&self) -> StringExpr {
        self.type_parser.type_path(&self.mb_reflect_path)
    }

    /// In debug builds, checks that a primitive ident names a type.
    pub fn assert_ident_tokens(&self) -> TokenStream {
        #[cfg(debug_assertions)]
        if let TypeParser::Primitive(_) = &self.type_parser {
            let ident = self.real_ident();
            return quote! {
                mod __assert_primitive_ident {
                    type AssertIdentValidity = #ident;
                }
            };
        }
        crate::utils::empty()
    }

    /// Returns `impl_generics`, `ty_generics` and a `where` clause.
    ///
    /// ```ignore
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(true, false);
    /// quote! {
    ///     impl #impl_generics Trait for #real_ident #ty_generics #where_clause { /* ... */ }
    /// }
    /// ```
    ///
    /// Bounds added for generic types:
    ///
    /// - `Self: Any + Send + Sync` if there are type parameters, otherwise
    ///   `Self: 'static` if there are lifetimes.
    /// - `P: TypePath` for every type parameter `P`.
    /// - with `add_reflect_typed`, `T: Reflect + Typed` for every member
    ///   type `T` that mentions a type parameter.
    /// - with `add_get_type_meta`, additionally `T: GetTypeMeta`.
    pub fn split_generics(
        &self,
        add_reflect_typed: bool,
        add_get_type_meta: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        use crate::path::fp::{AnyFP, SendFP, SyncFP};

        let generics = self.type_parser.generics();
        let mut where_clause_tokens = quote! { where };

        if generics.type_params().next().is_some() {
            where_clause_tokens.extend(quote! { Self: #AnyFP + #SendFP + #SyncFP, });
        } else if generics.lifetimes().next().is_some() {
            where_clause_tokens.extend(quote! { Self: 'static, });
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            where_clause_tokens.extend(quote! { #(#predicates,)* });
        }

        let mut predicates: Punctuated<TokenStream, Token![,]> = Punctuated::new();

        let type_path_ = crate::path::type_path_(&self.mb_reflect_path);
        predicates.extend(generics.type_params().map(|param| {
            let ident = &param.ident;
            quote!(#ident: #type_path_)
        }));

        if add_reflect_typed {
            predicates.extend(self.member_type_predicates(add_get_type_meta));
        }

        where_clause_tokens.extend(quote! { #predicates });

        (impl_generics, ty_generics, where_clause_tokens)
    }

    fn member_type_predicates(&self, add_get_type_meta: bool) -> Vec<TokenStream> {
        let params: Vec<&syn::Ident> = self
            .type_parser
            .generics()
            .type_params()
            .map(|param| &param.ident)
            .collect();

        if params.is_empty() {
            return Vec::new();
        }

        let reflect_ = crate::path::reflect_(&self.mb_reflect_path);
        let typed_ = crate::path::typed_(&self.mb_reflect_path);
        let get_type_meta_ = if add_get_type_meta {
            let get_type_meta_ = crate::path::get_type_meta_(&self.mb_reflect_path);
            quote!( + #get_type_meta_ )
        } else {
            crate::utils::empty()
        };

        self.active_types
            .iter()
            .filter(|ty| mentions_any(&params, ty.to_token_stream()))
            .map(|ty| quote!(#ty: #reflect_ + #typed_ #get_type_meta_))
            .collect()
    }

    /// `TypeInfo` of an opaque type.
    pub fn to_opaque_info_tokens(&self) -> TokenStream {
        let opaque_info_ = crate::path::opaque_info_(&self.mb_reflect_path);
        let type_info_ = crate::path::type_info_(&self.mb_reflect_path);
        let with_custom_attributes = self.with_custom_attributes_expression();

        quote! {
            #type_info_::Opaque(
                #opaque_info_::new::<Self>()
                    #with_custom_attributes
            )
        }
    }
}

/// Whether any of `idents` occurs in `tokens`, searching into groups.
fn mentions_any(idents: &[&syn::Ident], tokens: TokenStream) -> bool {
    tokens.into_iter().any(|tree| match tree {
        proc_macro2::TokenTree::Ident(ident) => idents.iter().any(|param| **param == ident),
        proc_macro2::TokenTree::Group(group) => mentions_any(idents, group.stream()),
        _ => false,
    })
}
