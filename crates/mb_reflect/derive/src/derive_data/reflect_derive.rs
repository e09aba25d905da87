use syn::{Data, DeriveInput, Fields, spanned::Spanned};

use super::{ReflectMeta, ReflectObject, TypeAttributes, TypeParser};

/// The shape `#[derive(Reflect)]` generates code for.
pub(crate) enum ReflectDerive<'a> {
    /// A struct with named fields, or a unit struct.
    Object(ReflectObject<'a>),
    /// Any type marked `#[reflect(Opaque)]`.
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        attrs.validity()?;

        let is_opaque = attrs.is_opaque.is_some();
        let parser = TypeParser::new_local(&input.ident, attrs.type_path.clone(), &input.generics);
        let meta = ReflectMeta::new(attrs, parser);

        if is_opaque {
            return Ok(Self::Opaque(meta));
        }

        const NOT_OBJECT: &str = "only structs with named fields and unit structs have members; \
                                  mark other types with `#[reflect(Opaque, clone)]`";

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => ReflectObject::new(meta, &fields.named).map(Self::Object),
                Fields::Unit => ReflectObject::new(meta, []).map(Self::Object),
                Fields::Unnamed(fields) => Err(syn::Error::new(fields.span(), NOT_OBJECT)),
            },
            Data::Enum(data) => Err(syn::Error::new(data.enum_token.span, NOT_OBJECT)),
            Data::Union(data) => Err(syn::Error::new(data.union_token.span, NOT_OBJECT)),
        }
    }
}
