use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::{Expr, Ident, LitStr, Token, Type};

use super::CustomAttributes;

/// One `property(...)` declaration on a type.
///
/// ```ignore
/// #[reflect(property(name = "total", ty = u64, get = Self::total, set = Self::set_total))]
/// #[reflect(property(name = "line", ty = String, index = usize, get = Self::line, private))]
/// ```
///
/// `get` and `set` accept any expression coercible to the accessor
/// function pointer: `fn(&Self) -> T` / `fn(&mut Self, T)`, or with an extra
/// index argument for indexers.
#[derive(Debug)]
pub(crate) struct PropertyAttributes {
    pub span: Span,
    pub name: LitStr,
    pub ty: Type,
    pub index: Option<Type>,
    pub get: Option<Expr>,
    pub set: Option<Expr>,
    pub private: bool,
    pub custom_attributes: CustomAttributes,
}

impl PropertyAttributes {
    pub fn parse(input: ParseStream, span: Span) -> syn::Result<Self> {
        let mut name = None;
        let mut ty = None;
        let mut index = None;
        let mut get = None;
        let mut set = None;
        let mut private = false;
        let mut custom_attributes = CustomAttributes::default();

        while !input.is_empty() {
            if input.peek(Token![@]) {
                custom_attributes.parse_inner_stream(input)?;
            } else {
                let ident = input.call(Ident::parse_any)?;
                match ident.to_string().as_str() {
                    "private" => private = true,
                    key => {
                        input.parse::<Token![=]>()?;
                        match key {
                            "name" => name = Some(input.parse::<LitStr>()?),
                            "ty" => ty = Some(input.parse::<Type>()?),
                            "index" => index = Some(input.parse::<Type>()?),
                            "get" => get = Some(input.parse::<Expr>()?),
                            "set" => set = Some(input.parse::<Expr>()?),
                            _ => {
                                return Err(syn::Error::new(
                                    ident.span(),
                                    format!("unknown property attribute `{key}`"),
                                ));
                            }
                        }
                    }
                }
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        let name = name.ok_or_else(|| syn::Error::new(span, "property requires `name = \"...\"`"))?;
        let ty = ty.ok_or_else(|| syn::Error::new(span, "property requires `ty = Type`"))?;
        if get.is_none() && set.is_none() {
            return Err(syn::Error::new(span, "property requires `get`, `set` or both"));
        }

        Ok(Self {
            span,
            name,
            ty,
            index,
            get,
            set,
            private,
            custom_attributes,
        })
    }
}
