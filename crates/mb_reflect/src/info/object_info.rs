use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Reflect;
use crate::info::{BaseInfo, CustomAttributes, FieldInfo, MemberInfo, PropertyInfo, Type, TypePath};
use crate::info::{impl_custom_attributes_fn, impl_type_fn, impl_with_custom_attributes};

/// Metadata of a type with members: its properties and fields in declaration
/// order, and an optional [`BaseInfo`].
///
/// Only the members declared by the type itself are listed here; inherited
/// members are reached through [`base`](ObjectInfo::base).
///
/// ```
/// use mb_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// pub struct Entity {
///     pub id: u64,
/// }
///
/// #[derive(Reflect)]
/// pub struct User {
///     #[reflect(base)]
///     entity: Entity,
///     pub name: String,
/// }
///
/// let info = User::type_info().as_object().unwrap();
/// assert_eq!(info.fields().len(), 1);
/// assert!(info.field("id").is_none());
///
/// let base = info.base().unwrap();
/// assert!(base.type_is::<Entity>());
/// assert!(base.type_info().as_object().unwrap().field("id").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ObjectInfo {
    ty: Type,
    properties: Box<[PropertyInfo]>,
    fields: Box<[FieldInfo]>,
    base: Option<BaseInfo>,
    custom_attributes: Option<Arc<CustomAttributes>>,
}

impl ObjectInfo {
    impl_type_fn!(ty);
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Creates an object without members.
    pub fn new<T: Reflect + TypePath>() -> Self {
        Self {
            ty: Type::of::<T>(),
            properties: Box::new([]),
            fields: Box::new([]),
            base: None,
            custom_attributes: None,
        }
    }

    pub fn with_properties(self, properties: impl Into<Box<[PropertyInfo]>>) -> Self {
        Self {
            properties: properties.into(),
            ..self
        }
    }

    pub fn with_fields(self, fields: impl Into<Box<[FieldInfo]>>) -> Self {
        Self {
            fields: fields.into(),
            ..self
        }
    }

    pub fn with_base(self, base: BaseInfo) -> Self {
        Self {
            base: Some(base),
            ..self
        }
    }

    #[inline]
    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    #[inline]
    pub fn base(&self) -> Option<&BaseInfo> {
        self.base.as_ref()
    }

    /// Finds a property declared by this type.
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|info| info.name() == name)
    }

    /// Finds a field declared by this type.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|info| info.name() == name)
    }

    /// Finds a member declared by this type, trying properties first.
    pub fn member(&'static self, name: &str) -> Option<MemberInfo> {
        self.property(name)
            .map(MemberInfo::Property)
            .or_else(|| self.field(name).map(MemberInfo::Field))
    }

    /// Members declared by this type: properties, then fields.
    pub fn members(&'static self) -> impl Iterator<Item = MemberInfo> {
        let properties = self.properties.iter().map(MemberInfo::Property);
        properties.chain(self.fields.iter().map(MemberInfo::Field))
    }
}
