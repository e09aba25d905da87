use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Ident, LitStr, Type, Visibility, spanned::Spanned};

use super::{FieldAttributes, PropertyAttributes, ReflectMeta};

/// A named field of a derived struct.
pub(crate) struct ObjectField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub is_public: bool,
    pub attrs: FieldAttributes,
}

impl<'a> ObjectField<'a> {
    fn new(field: &'a Field) -> syn::Result<Self> {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;
        Ok(Self {
            ident,
            ty: &field.ty,
            is_public: matches!(field.vis, Visibility::Public(_)),
            attrs: FieldAttributes::parse_attrs(&field.attrs)?,
        })
    }

    /// The name reported in metadata, without a raw identifier prefix.
    pub fn name(&self) -> String {
        let name = self.ident.to_string();
        match name.strip_prefix("r#") {
            Some(stripped) => stripped.to_owned(),
            None => name,
        }
    }
}

/// A struct described by properties, fields and an optional base.
pub(crate) struct ReflectObject<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<ObjectField<'a>>,
    base: Option<usize>,
}

impl<'a> ReflectObject<'a> {
    pub fn new(
        mut meta: ReflectMeta<'a>,
        fields: impl IntoIterator<Item = &'a Field>,
    ) -> syn::Result<Self> {
        let fields = fields
            .into_iter()
            .map(ObjectField::new)
            .collect::<syn::Result<Vec<_>>>()?;

        let mut base = None;
        for (index, field) in fields.iter().enumerate() {
            if let Some(span) = field.attrs.base {
                if base.is_some() {
                    return Err(syn::Error::new(span, "only one field can be the `base`"));
                }
                base = Some(index);
            }
        }

        let field_types = fields
            .iter()
            .filter(|field| field.attrs.ignore.is_none())
            .map(|field| field.ty.clone());
        let property_types = meta
            .attrs()
            .properties
            .iter()
            .flat_map(|property| [Some(property.ty.clone()), property.index.clone()])
            .flatten()
            .collect::<Vec<_>>();
        let types = field_types.chain(property_types).collect::<Vec<_>>();
        meta.set_active_types(types);

        Ok(Self { meta, fields, base })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Every field, including ignored ones and the base.
    #[inline]
    pub fn fields(&self) -> &[ObjectField<'a>] {
        &self.fields
    }

    /// Fields listed as members: neither ignored nor the base.
    pub fn member_fields(&self) -> impl Iterator<Item = &ObjectField<'a>> {
        self.fields
            .iter()
            .filter(|field| field.attrs.ignore.is_none() && field.attrs.base.is_none())
    }

    #[inline]
    pub fn base(&self) -> Option<&ObjectField<'a>> {
        self.base.map(|index| &self.fields[index])
    }

    #[inline]
    pub fn properties(&self) -> &[PropertyAttributes] {
        &self.meta.attrs().properties
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

impl ReflectObject<'_> {
    /// `TypeInfo` of the object: properties, fields and base in declaration
    /// order.
    pub fn to_info_tokens(&self) -> TokenStream {
        let mb_reflect_path = self.meta.mb_reflect_path();
        let type_info_ = crate::path::type_info_(mb_reflect_path);
        let object_info_ = crate::path::object_info_(mb_reflect_path);

        let properties: Vec<TokenStream> = self
            .properties()
            .iter()
            .map(|property| self.property_info_tokens(property))
            .collect();
        let with_properties = if properties.is_empty() {
            crate::utils::empty()
        } else {
            quote! { .with_properties([ #(#properties),* ]) }
        };

        let fields: Vec<TokenStream> = self
            .member_fields()
            .map(|field| self.field_info_tokens(field))
            .collect();
        let with_fields = if fields.is_empty() {
            crate::utils::empty()
        } else {
            quote! { .with_fields([ #(#fields),* ]) }
        };

        let with_base = match self.base() {
            Some(base) => {
                let base_info_ = crate::path::base_info_(mb_reflect_path);
                let ident = base.ident;
                let ty = base.ty;
                let name = LitStr::new(&base.name(), ident.span());
                quote! {
                    .with_base(#base_info_::new::<Self, #ty>(
                        #name,
                        |__this| &__this.#ident,
                        |__this| &mut __this.#ident,
                    ))
                }
            }
            None => crate::utils::empty(),
        };

        let with_custom_attributes = self.meta.with_custom_attributes_expression();

        quote! {
            #type_info_::Object(
                #object_info_::new::<Self>()
                    #with_properties
                    #with_fields
                    #with_base
                    #with_custom_attributes
            )
        }
    }

    fn field_info_tokens(&self, field: &ObjectField) -> TokenStream {
        let mb_reflect_path = self.meta.mb_reflect_path();
        let field_info_ = crate::path::field_info_(mb_reflect_path);
        let visibility_ = crate::path::visibility_(mb_reflect_path);

        let ident = field.ident;
        let ty = field.ty;
        let name = LitStr::new(&field.name(), ident.span());

        let visibility = if field.is_public {
            quote!(Public)
        } else {
            quote!(Private)
        };
        let readonly = field.attrs.readonly.is_some();
        let with_custom_attributes = field.attrs.custom_attributes.get_expression_with(mb_reflect_path);

        quote! {
            #field_info_::new::<Self, #ty>(
                #name,
                |__this| &__this.#ident,
                |__this| &mut __this.#ident,
            )
            .with_visibility(#visibility_::#visibility)
            .with_readonly(#readonly)
            #with_custom_attributes
        }
    }

    fn property_info_tokens(&self, property: &PropertyAttributes) -> TokenStream {
        let mb_reflect_path = self.meta.mb_reflect_path();
        let property_info_ = crate::path::property_info_(mb_reflect_path);
        let visibility_ = crate::path::visibility_(mb_reflect_path);

        let name = &property.name;
        let ty = &property.ty;

        let builder = match &property.index {
            Some(index) => quote! { #property_info_::indexer::<Self, #index, #ty>(#name) },
            None => quote! { #property_info_::builder::<Self, #ty>(#name) },
        };
        let getter = property.get.as_ref().map(|get| quote! { .getter(#get) });
        let setter = property.set.as_ref().map(|set| quote! { .setter(#set) });
        let visibility = if property.private {
            quote! { .with_visibility(#visibility_::Private) }
        } else {
            crate::utils::empty()
        };
        let with_custom_attributes = property.custom_attributes.get_expression_with(mb_reflect_path);

        quote! {
            #builder
                #getter
                #setter
                #visibility
                .build()
                #with_custom_attributes
        }
    }
}
