use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::{Attribute, Ident, Token};

use super::CustomAttributes;
use crate::REFLECT_ATTRIBUTE_NAME;

/// Field-level `#[reflect(...)]` attributes.
///
/// - `base`: the field holds the base value; its members are inherited and
///   the field itself is not listed.
/// - `readonly`: the field is only assigned during initialization.
/// - `ignore`: the field is not described at all.
/// - `@expr`: custom attributes.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub base: Option<Span>,
    pub readonly: Option<Span>,
    pub ignore: Option<Span>,
    pub custom_attributes: CustomAttributes,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.meta
                    .require_list()?
                    .parse_args_with(|input: ParseStream| this.parse_stream(input))?;
            }
        }
        this.validity()?;
        Ok(this)
    }

    fn parse_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        while !input.is_empty() {
            if input.peek(Token![@]) {
                self.custom_attributes.parse_inner_stream(input)?;
            } else {
                let ident = input.call(Ident::parse_any)?;
                let span = ident.span();
                match ident.to_string().as_str() {
                    "base" => self.base = Some(span),
                    "readonly" => self.readonly = Some(span),
                    "ignore" => self.ignore = Some(span),
                    name => {
                        return Err(syn::Error::new(
                            span,
                            format!("unknown field attribute `{name}`"),
                        ));
                    }
                }
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(())
    }

    fn validity(&self) -> syn::Result<()> {
        if let Some(base) = self.base {
            if self.readonly.is_some() || self.ignore.is_some() {
                return Err(syn::Error::new(
                    base,
                    "`base` cannot be combined with `readonly` or `ignore`",
                ));
            }
        }
        Ok(())
    }
}
