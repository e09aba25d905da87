use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{GenericParam, Generics, Ident, LitStr, Path, TypeParam};
use syn::{punctuated::Punctuated, spanned::Spanned};

use crate::utils::StringExpr;

/// How the reflected type is named, and where its path comes from.
pub(crate) enum TypeParser<'a> {
    /// Nameable from any scope without a path, e.g. `bool`.
    Primitive(&'a Ident),
    /// A derived type: the path is `module_path!()` plus the ident unless
    /// `type_path = "..."` overrides it.
    Local {
        ident: &'a Ident,
        custom_path: Option<Path>,
        generics: &'a Generics,
    },
    /// A type named by full path in `impl_reflect_opaque!` or
    /// `impl_type_path!`, e.g. `::alloc::string::String`.
    Foreign {
        path: &'a Path,
        custom_path: Option<Path>,
        generics: &'a Generics,
    },
}

impl core::fmt::Debug for TypeParser<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.real_ident().to_string(), f)
    }
}

impl<'a> TypeParser<'a> {
    pub(crate) fn new_local(
        ident: &'a Ident,
        custom_path: Option<Path>,
        generics: &'a Generics,
    ) -> Self {
        Self::Local {
            ident,
            custom_path,
            generics,
        }
    }

    /// A path without leading `::` and without `(in ..)` is a primitive.
    pub(crate) fn new_foreign(
        ident: &'a Ident,
        path: &'a Path,
        custom_path: Option<Path>,
        generics: &'a Generics,
    ) -> Self {
        if custom_path.is_none() && path.leading_colon.is_none() {
            Self::Primitive(ident)
        } else {
            Self::Foreign {
                path,
                custom_path,
                generics,
            }
        }
    }

    pub(super) fn generics(&self) -> &'a Generics {
        // A constant, since the reference must live for `'a`.
        const EMPTY_GENERICS: &Generics = &Generics {
            lt_token: None,
            params: Punctuated::new(),
            gt_token: None,
            where_clause: None,
        };

        match self {
            Self::Local { generics, .. } | Self::Foreign { generics, .. } => generics,
            Self::Primitive(_) => EMPTY_GENERICS,
        }
    }

    /// Whether there are type or const parameters, which need per-instance
    /// static cells.
    pub(super) fn impl_with_generic(&self) -> bool {
        self.generics()
            .params
            .iter()
            .any(|param| !matches!(param, GenericParam::Lifetime(_)))
    }

    /// The name used in `impl ... for #real_ident`.
    pub(super) fn real_ident(&self) -> TokenStream {
        match self {
            Self::Local { ident, .. } | Self::Primitive(ident) => ident.to_token_stream(),
            Self::Foreign { path, .. } => path.to_token_stream(),
        }
    }

    /// The full (custom) path, without generics, if one is written out.
    fn written_path(&self) -> Option<&Path> {
        match self {
            Self::Local { custom_path, .. } => custom_path.as_ref(),
            Self::Foreign {
                path, custom_path, ..
            } => Some(custom_path.as_ref().unwrap_or(path)),
            Self::Primitive(_) => None,
        }
    }

    fn ident(&self) -> &Ident {
        match (self, self.written_path().and_then(|path| path.segments.last())) {
            (_, Some(segment)) => &segment.ident,
            (Self::Local { ident, .. } | Self::Primitive(ident), None) => ident,
            // A foreign type always has a written path.
            (Self::Foreign { path, .. }, None) => &path.segments[0].ident,
        }
    }

    pub(super) fn module_path(&self) -> Option<StringExpr> {
        if let Some(path) = self.written_path() {
            let modules: Vec<String> = path
                .segments
                .iter()
                .take(path.segments.len().saturating_sub(1))
                .map(|segment| segment.ident.to_string())
                .collect();
            if modules.is_empty() {
                return None;
            }
            let lit = LitStr::new(&modules.join("::"), path.span());
            return Some(StringExpr::from_lit(&lit));
        }

        match self {
            Self::Local { .. } => Some(StringExpr::Const(quote! {
                ::core::module_path!()
            })),
            _ => None,
        }
    }

    pub(super) fn type_ident(&self) -> StringExpr {
        StringExpr::from(self.ident())
    }

    /// Joins the type and const parameters with `", "`.
    ///
    /// `ty_generic_fn` renders one type parameter.
    fn reduce_generics(
        generics: &Generics,
        mut ty_generic_fn: impl FnMut(&TypeParam) -> StringExpr,
        mb_reflect_path: &Path,
    ) -> StringExpr {
        let macro_utils_ = crate::path::macro_utils_(mb_reflect_path);

        let mut params = generics.params.iter().filter_map(|param| match param {
            GenericParam::Type(type_param) => Some(ty_generic_fn(type_param)),
            GenericParam::Const(const_param) => {
                let ident = &const_param.ident;
                let ty = &const_param.ty;
                Some(StringExpr::Owned(quote! {
                    <#ty as #macro_utils_::ToString>::to_string(&#ident)
                }))
            }
            GenericParam::Lifetime(_) => None,
        });

        let first = params.next().into_iter();
        StringExpr::from_iter(
            first.chain(params.flat_map(|x| [StringExpr::from_str(", "), x])),
            mb_reflect_path,
        )
    }

    /// `prefix<params>`, where each type parameter is rendered through
    /// `TypePath::#method`.
    fn with_generics(&self, prefix: Vec<StringExpr>, method: &str, mb_reflect_path: &Path) -> StringExpr {
        if !self.impl_with_generic() {
            return StringExpr::from_iter(prefix, mb_reflect_path);
        }

        let type_path_ = crate::path::type_path_(mb_reflect_path);
        let method = Ident::new(method, proc_macro2::Span::call_site());
        let generics = Self::reduce_generics(
            self.generics(),
            |TypeParam { ident, .. }| {
                StringExpr::Borrowed(quote! {
                    <#ident as #type_path_>::#method()
                })
            },
            mb_reflect_path,
        );

        let mut parts = prefix;
        parts.extend([StringExpr::from_str("<"), generics, StringExpr::from_str(">")]);
        StringExpr::from_iter(parts, mb_reflect_path)
    }

    /// For `alloc::vec::Vec<u8>` this is `"Vec<u8>"`.
    pub(super) fn type_name(&self, mb_reflect_path: &Path) -> StringExpr {
        match self {
            Self::Primitive(ident) => StringExpr::from(ident),
            _ => self.with_generics(vec![self.type_ident()], "type_name", mb_reflect_path),
        }
    }

    /// For `alloc::vec::Vec<u8>` this is `"alloc::vec::Vec<u8>"`.
    pub(super) fn type_path(&self, mb_reflect_path: &Path) -> StringExpr {
        match (self, self.module_path()) {
            (Self::Primitive(ident), _) => StringExpr::from(ident),
            (_, Some(module_path)) => self.with_generics(
                vec![module_path, StringExpr::from_str("::"), self.type_ident()],
                "type_path",
                mb_reflect_path,
            ),
            (_, None) => self.with_generics(vec![self.type_ident()], "type_path", mb_reflect_path),
        }
    }
}
