//! Derive and function-like macros for `mb_reflect`.
//!
//! - [`Reflect`]
//! - [`TypePath`]
//! - [`impl_reflect_opaque`]
//! - [`impl_type_path`]
//! - [`impl_auto_register`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `GetTypeMeta`
///
/// A struct with named fields (or a unit struct) is described as an
/// `Object`: its properties, its fields and an optional base. Tuple structs
/// and enums have no named members and must be declared `Opaque`.
///
/// ## Fields
///
/// Every named field is described with its Rust visibility: `pub` fields are
/// `Public`, everything else is `Private`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Order {
///     pub number: String,
///     #[reflect(readonly)]
///     pub id: u64,
///     #[reflect(ignore)]
///     scratch: Vec<u8>,
/// }
/// ```
///
/// - `readonly`: the field is only assigned during initialization; binding
///   skips it and writes through reflection are refused.
/// - `ignore`: the field is not described at all.
/// - `base`: the field holds the base value. Its members are inherited by
///   the containing type and the field itself is not listed. At most one
///   field can be the base.
///
/// ## Properties
///
/// Properties are computed members backed by accessor functions, declared at
/// the type level:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(property(name = "full_name", ty = String, get = Self::full_name, set = Self::set_full_name))]
/// #[reflect(property(name = "line", ty = String, index = usize, get = Self::line))]
/// struct Invoice { /* ... */ }
/// ```
///
/// - `name`, `ty` and at least one of `get` / `set` are required.
/// - `get` must coerce to `fn(&Self) -> T`, `set` to `fn(&mut Self, T)`.
/// - `index = I` declares an indexer: the accessors take an extra `I`
///   argument after the receiver.
/// - `private` marks the property `Private`.
///
/// ## Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "shop::model::Order")]
/// struct Order { /* ... */ }
/// ```
///
/// The path does not include generics; they are appended automatically.
///
/// ## Opaque Types
///
/// `Opaque` types are not inspected. They are cloned through `Clone`, which
/// must be declared with the `clone` flag:
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// #[reflect(Opaque, clone)]
/// struct Meters(f64);
/// ```
///
/// ## Standard Traits
///
/// The macro cannot see which standard traits a type implements, so they
/// are declared:
///
/// - `clone`: `reflect_clone` through `Clone`
/// - `default`: `TypeTraitDefault`, and `reflect_clone` starts from `Default`
/// - `debug`: `reflect_debug` through `Debug`
/// - `partial_eq`: `reflect_partial_eq` through `PartialEq`
/// - `serialize`: `TypeTraitSerialize`
/// - `deserialize`: `TypeTraitDeserialize`
///
/// Bundles:
///
/// - `mini`: `clone` + `auto_register`
/// - `serde`: `serialize` + `deserialize` + `auto_register`
/// - `full`: all six flags + `auto_register`
///
/// Without `debug` and `partial_eq`, objects are formatted and compared
/// member-wise.
///
/// ## Auto Registration
///
/// `#[reflect(auto_register)]` submits the type to static registration, see
/// `TypeRegistry::auto_register`. It has no effect on generic types or when
/// the `auto_register` feature is disabled.
///
/// ## Custom Attributes
///
/// `#[reflect(@expr)]` attaches a value of any `Reflect` type to the type,
/// a field or a property (inside `property(...)`). Values are stored by
/// type; a later value of the same type replaces an earlier one.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(@Table("orders"))]
/// struct Order {
///     #[reflect(@Column("order_no"))]
///     pub number: String,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}

/// # Derive TypePath Trait
///
/// Implements only `TypePath`. Accepts the `type_path` attribute of
/// [`derive Reflect`](derive_reflect).
///
/// ```rust, ignore
/// #[derive(TypePath)]
/// struct A;
///
/// #[derive(TypePath)]
/// #[reflect(type_path = "crate_name::foo::B")]
/// struct B<T>(T);
/// ```
#[proc_macro_derive(TypePath, attributes(reflect))]
pub fn derive_type_path(input: TokenStream) -> TokenStream {
    use crate::derive_data::{ReflectMeta, TypeAttributes, TypeParser};

    let ast: DeriveInput = parse_macro_input!(input as DeriveInput);

    let type_attributes = match TypeAttributes::parse_attrs(&ast.attrs) {
        Ok(v) => v,
        Err(err) => return err.into_compile_error().into(),
    };

    let type_parser =
        TypeParser::new_local(&ast.ident, type_attributes.type_path.clone(), &ast.generics);

    let meta = ReflectMeta::new(type_attributes, type_parser);
    let type_path_impls = impls::impl_trait_type_path(&meta);

    quote! {
        const _: () = {
            #type_path_impls
        };
    }
    .into()
}

/// Implements reflection for a foreign type as `Opaque`.
///
/// Syntax: `#[reflect(..)] (in module_path as alias_name) path<generics> (..attrs..)`.
///
/// ```rust, ignore
/// impl_reflect_opaque!(u64 (full));
/// impl_reflect_opaque!(::alloc::string::String (clone, debug));
/// impl_reflect_opaque!((in core::time) Instant (clone));
/// impl_reflect_opaque!((in core::time as Ins) Instant (clone));
/// ```
///
/// A path without leading `::` names a primitive. `clone` is required.
#[proc_macro]
pub fn impl_reflect_opaque(input: TokenStream) -> TokenStream {
    use crate::derive_data::{ReflectMeta, ReflectOpaqueParser, TypeParser};

    let ReflectOpaqueParser {
        attrs,
        custom_path,
        type_ident,
        type_path,
        generics,
    } = parse_macro_input!(input with ReflectOpaqueParser::parse);

    let parser = TypeParser::new_foreign(&type_ident, &type_path, custom_path, &generics);

    let meta = ReflectMeta::new(attrs, parser);

    let assert_tokens = meta.assert_ident_tokens();
    let reflect_impls = impls::impl_opaque(&meta);

    quote! {
        const _: () = {
            #assert_tokens
            #reflect_impls
        };
    }
    .into()
}

/// Implements `TypePath` for a foreign type.
///
/// Syntax: `(in module_path as alias_name) path<generics>`.
///
/// ```ignore
/// impl_type_path!(u64);
/// impl_type_path!(::alloc::string::String);
/// impl_type_path!(::utils::One<T>);
/// impl_type_path!((in core::time) Instant);
/// impl_type_path!((in core::time as Ins) Instant);
/// ```
///
/// The leading `::` of a full path is required and dropped from the
/// resulting type path. Primitives are written without it.
#[proc_macro]
pub fn impl_type_path(input: TokenStream) -> TokenStream {
    use crate::derive_data::{ReflectMeta, ReflectTypePathParser, TypeAttributes, TypeParser};

    let ReflectTypePathParser {
        custom_path,
        type_ident,
        type_path,
        generics,
    } = parse_macro_input!(input with ReflectTypePathParser::parse);

    let parser = TypeParser::new_foreign(&type_ident, &type_path, custom_path, &generics);

    let meta = ReflectMeta::new(TypeAttributes::default(), parser);
    let assert_tokens = meta.assert_ident_tokens();

    let type_path_impls = impls::impl_trait_type_path(&meta);

    quote! {
        const _: () = {
            #assert_tokens
            #type_path_impls
        };
    }
    .into()
}

/// Adds a concrete type to static registration.
///
/// Does nothing without the `auto_register` feature.
///
/// ```ignore
/// impl_auto_register!(shop::Order);
/// impl_auto_register!(Vec<u32>);
/// ```
#[proc_macro]
pub fn impl_auto_register(_input: TokenStream) -> TokenStream {
    #[cfg(not(feature = "auto_register"))]
    return utils::empty().into();

    #[cfg(feature = "auto_register")]
    {
        let ty = parse_macro_input!(_input as syn::Type);

        let mb_reflect_path = path::mb_reflect();
        let auto_register_ = path::auto_register_(&mb_reflect_path);

        TokenStream::from(quote! {
            const _: () = {
                #auto_register_::inventory::submit!{
                    #auto_register_::__AutoRegisterFunc(
                        <#ty as #auto_register_::__RegisterType>::__register
                    )
                }
            };
        })
    }
}
