use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::{Attribute, Ident, LitStr, Path, Token, parenthesized};

use super::{CustomAttributes, PropertyAttributes, TraitAvailableFlags};
use crate::REFLECT_ATTRIBUTE_NAME;

/// Type-level `#[reflect(...)]` attributes.
///
/// ```ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "shop::Order", clone, @Table("orders"))]
/// #[reflect(property(name = "total", ty = u64, get = Self::total))]
/// struct Order { /* ... */ }
/// ```
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `type_path = "..."`, without generics.
    pub type_path: Option<Path>,
    /// `Opaque`: do not describe members.
    pub is_opaque: Option<Span>,
    /// `auto_register`, or a bundle containing it.
    pub auto_register: Option<Span>,
    pub avail_traits: TraitAvailableFlags,
    pub custom_attributes: CustomAttributes,
    pub properties: Vec<PropertyAttributes>,
}

impl TypeAttributes {
    /// Parses every `#[reflect(...)]` in `attrs`; other attributes are skipped.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.meta
                    .require_list()?
                    .parse_args_with(|input: ParseStream| this.parse_stream(input))?;
            }
        }
        Ok(this)
    }

    /// Parses a comma-separated attribute list.
    pub fn parse_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        while !input.is_empty() {
            if input.peek(Token![@]) {
                self.custom_attributes.parse_inner_stream(input)?;
            } else {
                let ident = input.call(Ident::parse_any)?;
                self.parse_ident(&ident, input)?;
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(())
    }

    fn parse_ident(&mut self, ident: &Ident, input: ParseStream) -> syn::Result<()> {
        let span = ident.span();
        match ident.to_string().as_str() {
            "type_path" => {
                input.parse::<Token![=]>()?;
                let lit: LitStr = input.parse()?;
                let path: Path = lit.parse()?;
                if path.leading_colon.is_some() {
                    return Err(syn::Error::new(lit.span(), "`type_path` must not start with `::`"));
                }
                if path.segments.iter().any(|segment| !segment.arguments.is_none()) {
                    return Err(syn::Error::new(lit.span(), "`type_path` must not contain generics"));
                }
                self.type_path = Some(path);
            }
            "Opaque" => self.is_opaque = Some(span),
            "auto_register" => self.auto_register = Some(span),
            "property" => {
                let content;
                parenthesized!(content in input);
                self.properties.push(PropertyAttributes::parse(&content, span)?);
            }
            "mini" => {
                self.avail_traits.clone = Some(span);
                self.auto_register = Some(span);
            }
            "serde" => {
                self.avail_traits.set_serde(span);
                self.auto_register = Some(span);
            }
            "full" => {
                self.avail_traits.set_all(span);
                self.auto_register = Some(span);
            }
            name => {
                if !self.avail_traits.set(name, span) {
                    return Err(syn::Error::new(span, format!("unknown reflect attribute `{name}`")));
                }
            }
        }
        Ok(())
    }

    /// Checks combinations that cannot be generated.
    pub fn validity(&self) -> syn::Result<()> {
        if let Some(span) = self.is_opaque {
            if self.avail_traits.clone.is_none() {
                return Err(syn::Error::new(
                    span,
                    "`Opaque` types must implement `Clone` and declare it with `clone`",
                ));
            }
            if let Some(property) = self.properties.first() {
                return Err(syn::Error::new(
                    property.span,
                    "`Opaque` types cannot declare properties",
                ));
            }
        }
        Ok(())
    }
}
