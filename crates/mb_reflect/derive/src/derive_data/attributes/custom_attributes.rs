use proc_macro2::TokenStream;
use quote::quote;
use syn::{Expr, Path, Token, parse::ParseStream};

/// The `@expr` values attached to a type or member.
///
/// Corresponds to `mb_reflect::info::CustomAttributes`.
#[derive(Default, Debug)]
pub(crate) struct CustomAttributes {
    attributes: Vec<Expr>,
}

impl CustomAttributes {
    /// Parses one `@expr`, e.g. `@Required`, `@MaxLength(64)`, `@0..256u8`.
    pub fn parse_inner_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        input.parse::<Token![@]>()?;
        self.attributes.push(input.parse()?);
        Ok(())
    }

    /// Empty if there are no attributes, otherwise:
    ///
    /// ```ignore
    /// .with_custom_attributes(
    ///     _path_::CustomAttributes::new()
    ///         (.with_attribute( ... ))*
    /// )
    /// ```
    pub fn get_expression_with(&self, mb_reflect_path: &Path) -> TokenStream {
        if self.attributes.is_empty() {
            return crate::utils::empty();
        }

        let with_attributes = self.attributes.iter().map(|value| {
            quote! {
                .with_attribute(#value)
            }
        });

        let custom_attributes_ = crate::path::custom_attributes_(mb_reflect_path);

        quote! {
            .with_custom_attributes(
                #custom_attributes_::new()
                    #(#with_attributes)*
            )
        }
    }
}
